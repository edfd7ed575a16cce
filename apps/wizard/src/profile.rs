//! Profile client — the wizard's only backend collaborator, used solely to
//! prefill name/email/phone on first load. One attempt, no retries; callers
//! fall back silently when the fetch fails.

use async_trait::async_trait;
use serde::Deserialize;
use thiserror::Error;

use crate::models::user::UserIdentity;

const FETCH_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Error)]
pub enum ProfileError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("profile endpoint returned status {0}")]
    Status(u16),
}

/// Raw wire shape. Older portal profiles carry `fullname`, newer ones
/// `name`; the fallback is coalesced here and nowhere else.
#[derive(Debug, Default, Deserialize)]
struct RawProfile {
    name: Option<String>,
    fullname: Option<String>,
    email: Option<String>,
    phone: Option<String>,
}

fn normalize(raw: RawProfile) -> UserIdentity {
    UserIdentity {
        name: raw.name.or(raw.fullname).unwrap_or_default(),
        email: raw.email.unwrap_or_default(),
        phone: raw.phone.unwrap_or_default(),
    }
}

/// Pluggable profile source so the prefill path is testable without a
/// network. Carried as `Arc<dyn ProfileSource>`.
#[async_trait]
pub trait ProfileSource: Send + Sync {
    async fn fetch_identity(&self) -> Result<UserIdentity, ProfileError>;
}

pub struct HttpProfileSource {
    client: reqwest::Client,
    url: String,
}

impl HttpProfileSource {
    pub fn new(url: String) -> Self {
        Self {
            client: reqwest::Client::builder()
                .timeout(std::time::Duration::from_secs(FETCH_TIMEOUT_SECS))
                .build()
                .expect("Failed to build HTTP client"),
            url,
        }
    }
}

#[async_trait]
impl ProfileSource for HttpProfileSource {
    async fn fetch_identity(&self) -> Result<UserIdentity, ProfileError> {
        let response = self.client.get(&self.url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ProfileError::Status(status.as_u16()));
        }
        let raw: RawProfile = response.json().await?;
        Ok(normalize(raw))
    }
}
