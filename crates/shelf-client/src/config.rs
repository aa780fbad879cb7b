use serde::{Deserialize, Serialize};

/// Environment variable that overrides the server URL.
pub const SERVER_URL_ENV: &str = "SHELF_SERVER_URL";

/// Where the client finds the book service.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    pub base_url: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8080".into(),
        }
    }
}

impl ClientConfig {
    /// Defaults, with `SHELF_SERVER_URL` applied when set and non-empty.
    pub fn from_env() -> Self {
        match std::env::var(SERVER_URL_ENV) {
            Ok(url) if !url.trim().is_empty() => Self { base_url: url },
            _ => Self::default(),
        }
    }
}
