//! Port for fetching model artifacts from the remote model store.

use std::path::PathBuf;

use thiserror::Error;

use crate::task::ModelSet;

/// Default repository holding the published model bundles.
pub const DEFAULT_HUB_REPO: &str = "VBoussot/TotalSegmentator-KonfAI";

/// Revision the bundles are pinned to unless overridden.
pub const DEFAULT_HUB_REVISION: &str = "main";

/// Engine-side model definition staged into every workspace.
pub const MODEL_DEFINITION_FILE: &str = "Model.py";

/// One remote file, identified by repository, filename and revision.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactRef {
    /// Hub repository, e.g. `"VBoussot/TotalSegmentator-KonfAI"`
    pub repo: String,
    /// Filename within the repository
    pub filename: String,
    /// Pinned revision, usually a branch name
    pub revision: String,
}

impl ArtifactRef {
    /// Build a reference from borrowed parts.
    #[must_use]
    pub fn new(repo: &str, filename: &str, revision: &str) -> Self {
        Self {
            repo: repo.to_string(),
            filename: filename.to_string(),
            revision: revision.to_string(),
        }
    }
}

/// Errors from model hub operations.
///
/// Implementation-specific errors (HTTP, cache IO) are mapped into these;
/// a fetch failure always names the artifact that could not be obtained.
#[derive(Debug, Error)]
pub enum HubError {
    /// The hub client itself could not be constructed.
    #[error("cannot initialize the model hub client: {message}")]
    Client {
        /// What went wrong during construction
        message: String,
    },

    /// A specific artifact could not be fetched.
    #[error("error downloading '{filename}' from {repo}@{revision}: {message}")]
    Fetch {
        /// Repository the fetch targeted
        repo: String,
        /// Artifact filename
        filename: String,
        /// Pinned revision
        revision: String,
        /// Underlying client error
        message: String,
    },
}

/// Fetches single artifacts from the remote model store.
///
/// Implementations must be idempotent: fetching an artifact that is already
/// cached locally succeeds without a network round trip and resolves to a
/// stable path.
#[cfg_attr(test, mockall::automock)]
pub trait ModelHub {
    /// Fetch one artifact, returning the local path it resolves to.
    fn fetch(&self, artifact: &ArtifactRef) -> Result<PathBuf, HubError>;
}

/// Local paths for one fully fetched model bundle.
#[derive(Debug, Clone)]
pub struct FetchedBundle {
    /// Fetched model files, in ensemble order
    pub model_paths: Vec<PathBuf>,
    /// Fetched inference configuration
    pub config_path: PathBuf,
    /// Fetched engine-side model definition
    pub model_definition_path: PathBuf,
}

/// Fetch every artifact a model set needs: the models in ensemble order,
/// then the shared model definition, then the inference configuration.
///
/// Stops at the first failure; nothing is retried.
pub fn fetch_model_set(
    hub: &dyn ModelHub,
    repo: &str,
    revision: &str,
    set: &ModelSet,
) -> Result<FetchedBundle, HubError> {
    let mut model_paths = Vec::with_capacity(set.models.len());
    for model in &set.models {
        model_paths.push(hub.fetch(&ArtifactRef::new(repo, model, revision))?);
    }
    let model_definition_path =
        hub.fetch(&ArtifactRef::new(repo, MODEL_DEFINITION_FILE, revision))?;
    let config_path = hub.fetch(&ArtifactRef::new(repo, set.config, revision))?;
    Ok(FetchedBundle {
        model_paths,
        config_path,
        model_definition_path,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::task::Task;
    use mockall::Sequence;

    #[test]
    fn test_bulk_fetch_preserves_ensemble_order() {
        let set = Task::Total.resolve(false);
        let mut hub = MockModelHub::new();
        let mut seq = Sequence::new();
        for name in [
            "M291.pt",
            "M292.pt",
            "M293.pt",
            "M294.pt",
            "M295.pt",
            "Model.py",
            "Prediction_CT.yml",
        ] {
            hub.expect_fetch()
                .withf(move |artifact| artifact.filename == name)
                .times(1)
                .in_sequence(&mut seq)
                .returning(|artifact| Ok(PathBuf::from(format!("/cache/{}", artifact.filename))));
        }

        let bundle = fetch_model_set(&hub, DEFAULT_HUB_REPO, DEFAULT_HUB_REVISION, &set)
            .expect("all artifacts mocked");
        let fetched: Vec<_> = bundle
            .model_paths
            .iter()
            .map(|p| p.to_string_lossy().into_owned())
            .collect();
        assert_eq!(
            fetched,
            [
                "/cache/M291.pt",
                "/cache/M292.pt",
                "/cache/M293.pt",
                "/cache/M294.pt",
                "/cache/M295.pt"
            ]
        );
        assert_eq!(bundle.config_path, PathBuf::from("/cache/Prediction_CT.yml"));
        assert_eq!(bundle.model_definition_path, PathBuf::from("/cache/Model.py"));
    }

    #[test]
    fn test_bulk_fetch_stops_at_first_failure() {
        let set = Task::TotalMr.resolve(false);
        let mut hub = MockModelHub::new();
        hub.expect_fetch()
            .withf(|artifact| artifact.filename == "M850.pt")
            .times(1)
            .returning(|artifact| {
                Err(HubError::Fetch {
                    repo: artifact.repo.clone(),
                    filename: artifact.filename.clone(),
                    revision: artifact.revision.clone(),
                    message: "410 gone".to_string(),
                })
            });

        let err = fetch_model_set(&hub, DEFAULT_HUB_REPO, DEFAULT_HUB_REVISION, &set)
            .expect_err("first artifact fails");
        assert!(err.to_string().contains("M850.pt"));
    }

    #[test]
    fn test_fetch_error_names_the_artifact() {
        let err = HubError::Fetch {
            repo: DEFAULT_HUB_REPO.to_string(),
            filename: "M291.pt".to_string(),
            revision: "main".to_string(),
            message: "timed out".to_string(),
        };
        let text = err.to_string();
        assert!(text.contains("M291.pt"));
        assert!(text.contains("VBoussot/TotalSegmentator-KonfAI@main"));
        assert!(text.contains("timed out"));
    }
}
