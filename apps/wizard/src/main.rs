mod config;
mod document;
mod errors;
mod models;
mod preview;
mod profile;
mod shell;
mod state;
mod storage;
mod wizard;

use std::sync::Arc;

use anyhow::Result;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::profile::{HttpProfileSource, ProfileSource};
use crate::state::AppState;
use crate::storage::kv::FileStore;
use crate::storage::resume_store::{load_initial, ResumeStore};
use crate::wizard::session::WizardSession;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting CareerSphere resume wizard v{}", env!("CARGO_PKG_VERSION"));

    // Initialize file-backed storage
    let kv = Arc::new(FileStore::new(&config.data_dir)?);
    let store = Arc::new(ResumeStore::new(kv));

    // Profile prefill source, only when an endpoint is configured
    let profile: Option<Arc<dyn ProfileSource>> = config.profile_api_url.as_ref().map(|url| {
        info!("profile prefill enabled ({url})");
        Arc::new(HttpProfileSource::new(url.clone())) as Arc<dyn ProfileSource>
    });

    let document = load_initial(&store, profile.as_ref()).await;
    let session = WizardSession::new(document);

    let state = AppState {
        store,
        config: config.clone(),
    };

    shell::run(session, state)?;

    info!("session ended");
    Ok(())
}
