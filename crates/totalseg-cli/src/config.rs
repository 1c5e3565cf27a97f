//! Environment-derived settings.
//!
//! Everything the environment can influence is resolved here exactly once;
//! the pipeline below receives plain data and never reads the environment.

use totalseg_core::ports::{DEFAULT_HUB_REPO, DEFAULT_HUB_REVISION};
use totalseg_runtime::{DEFAULT_CONVERTER_PROGRAM, DEFAULT_ENGINE_PROGRAM};

/// Resolved program names and hub coordinates.
#[derive(Debug, Clone)]
pub struct Config {
    /// Engine executable; `TOTALSEG_ENGINE` overrides.
    pub engine_program: String,
    /// Converter executable; `TOTALSEG_CONVERTER` overrides.
    pub converter_program: String,
    /// Hub repository; `TOTALSEG_HUB_REPO` overrides.
    pub hub_repo: String,
    /// Hub revision; `TOTALSEG_HUB_REVISION` overrides.
    pub hub_revision: String,
    /// Hub access token from `HF_TOKEN`, if set.
    pub hub_token: Option<String>,
}

impl Config {
    /// Read overrides from the environment, falling back to the defaults.
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            engine_program: env_or("TOTALSEG_ENGINE", DEFAULT_ENGINE_PROGRAM),
            converter_program: env_or("TOTALSEG_CONVERTER", DEFAULT_CONVERTER_PROGRAM),
            hub_repo: env_or("TOTALSEG_HUB_REPO", DEFAULT_HUB_REPO),
            hub_revision: env_or("TOTALSEG_HUB_REVISION", DEFAULT_HUB_REVISION),
            hub_token: std::env::var("HF_TOKEN").ok().filter(|t| !t.is_empty()),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            engine_program: DEFAULT_ENGINE_PROGRAM.to_string(),
            converter_program: DEFAULT_CONVERTER_PROGRAM.to_string(),
            hub_repo: DEFAULT_HUB_REPO.to_string(),
            hub_revision: DEFAULT_HUB_REVISION.to_string(),
            hub_token: None,
        }
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key)
        .ok()
        .filter(|value| !value.is_empty())
        .unwrap_or_else(|| default.to_string())
}
