//! Environment configuration
//!
//! One credential set per process lifetime, read once at startup.
//! There are no defaults and no reload.

use anyhow::{Context, Result};

/// Required connection settings for the TestRail API
#[derive(Debug, Clone)]
pub struct Settings {
    pub base_url: String,
    pub username: String,
    pub api_key: String,
}

impl Settings {
    /// Read settings from the environment, failing on the first missing
    /// variable.
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            base_url: require_var("TESTRAIL_URL")?,
            username: require_var("TESTRAIL_USERNAME")?,
            api_key: require_var("TESTRAIL_API_KEY")?,
        })
    }
}

fn require_var(name: &str) -> Result<String> {
    std::env::var(name).with_context(|| format!("Missing required environment variable: {}", name))
}
