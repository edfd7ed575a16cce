use anyhow::Result;

/// Application configuration loaded from environment variables. Everything
/// has a default; the wizard runs with no environment at all.
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory holding the saved resume keys.
    pub data_dir: String,
    /// Profile-fetch endpoint for first-load prefill. Prefill is disabled
    /// when unset.
    pub profile_api_url: Option<String>,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            data_dir: std::env::var("DATA_DIR").unwrap_or_else(|_| ".careersphere".to_string()),
            profile_api_url: std::env::var("PROFILE_API_URL")
                .ok()
                .filter(|url| !url.is_empty()),
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}
