use std::sync::Arc;

use crate::config::Config;
use crate::storage::resume_store::ResumeStore;

/// Shared application state handed to the shell.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<ResumeStore>,
    pub config: Config,
}
