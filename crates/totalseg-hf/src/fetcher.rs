//! Blocking artifact fetcher over the Hugging Face Hub.

use std::path::PathBuf;

use hf_hub::api::sync::{Api, ApiBuilder};
use hf_hub::{Repo, RepoType};
use tracing::debug;

use totalseg_core::ports::{ArtifactRef, HubError, ModelHub};

/// Hub client settings, resolved once at startup.
#[derive(Debug, Clone)]
pub struct HubClientConfig {
    /// Access token for private or gated repositories.
    pub token: Option<String>,
    /// Override for the client's content cache directory.
    pub cache_dir: Option<PathBuf>,
    /// Show per-file progress bars while downloading.
    pub show_progress: bool,
}

impl Default for HubClientConfig {
    fn default() -> Self {
        Self {
            token: None,
            cache_dir: None,
            show_progress: true,
        }
    }
}

/// [`ModelHub`] adapter over the Hugging Face Hub client.
pub struct HubFetcher {
    api: Api,
}

impl HubFetcher {
    /// Build the underlying client from the given settings.
    pub fn new(config: &HubClientConfig) -> Result<Self, HubError> {
        let mut builder = ApiBuilder::new().with_progress(config.show_progress);
        if let Some(token) = &config.token {
            builder = builder.with_token(Some(token.clone()));
        }
        if let Some(cache_dir) = &config.cache_dir {
            builder = builder.with_cache_dir(cache_dir.clone());
        }
        let api = builder.build().map_err(|e| HubError::Client {
            message: e.to_string(),
        })?;
        Ok(Self { api })
    }
}

impl ModelHub for HubFetcher {
    fn fetch(&self, artifact: &ArtifactRef) -> Result<PathBuf, HubError> {
        let repo = self.api.repo(Repo::with_revision(
            artifact.repo.clone(),
            RepoType::Model,
            artifact.revision.clone(),
        ));
        let path = repo.get(&artifact.filename).map_err(|e| HubError::Fetch {
            repo: artifact.repo.clone(),
            filename: artifact.filename.clone(),
            revision: artifact.revision.clone(),
            message: e.to_string(),
        })?;
        debug!(artifact = %artifact.filename, path = %path.display(), "artifact resolved");
        Ok(path)
    }
}
