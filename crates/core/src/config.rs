//! Service configuration

use crate::{Error, Result};

/// Public todo API the task manager talks to when nothing else is configured
pub const DEFAULT_API_URL: &str = "https://jsonplaceholder.typicode.com/todos";

/// Environment variable overriding the API base URL
pub const API_URL_ENV: &str = "TASKS_API_URL";

/// Configuration for the remote task service
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceConfig {
    /// Collection endpoint, e.g. `https://host/todos` (no trailing slash)
    pub base_url: String,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
        }
    }
}

impl ServiceConfig {
    /// Create a config for the given collection endpoint
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let raw = base_url.into();
        let base_url = raw.trim().trim_end_matches('/').to_string();

        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(Error::InvalidInput(format!(
                "API URL must start with http:// or https://: {}",
                raw
            )));
        }

        Ok(Self { base_url })
    }

    /// Read the config from the environment, falling back to the public API
    pub fn from_env() -> Result<Self> {
        match std::env::var(API_URL_ENV) {
            Ok(url) if !url.trim().is_empty() => Self::new(url),
            _ => Ok(Self::default()),
        }
    }

    /// URL of a single task
    pub fn task_url(&self, id: u64) -> String {
        format!("{}/{}", self.base_url, id)
    }
}
