//! Ephemeral workspace staging for engine runs.
//!
//! The engine reads a fixed on-disk layout: one case directory under
//! `Dataset/`, the model definition at the workspace root, and predictions
//! mirrored under `Predictions/`. All of it lives in a temporary directory
//! that is removed when the [`Workspace`] drops, error paths included.

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;
use tracing::debug;

use totalseg_core::StagingError;
use totalseg_core::ports::MODEL_DEFINITION_FILE;

/// Fixed case identifier; the tool stages exactly one case per run.
pub const CASE_ID: &str = "P001";

/// Filename the input volume is staged under.
pub const STAGED_VOLUME_FILE: &str = "Volume.nii.gz";

/// Filename the engine writes the prediction under.
pub const PREDICTION_FILE: &str = "Seg.mha";

const DATASET_DIR: &str = "Dataset";
const PREDICTIONS_DIR: &str = "Predictions";
const PREDICTION_TOOL_DIR: &str = "TotalSegmentator";

/// Staging tree for one engine run.
pub struct Workspace {
    dir: TempDir,
}

impl Workspace {
    /// Create a fresh workspace containing the case directory.
    pub fn create() -> Result<Self, StagingError> {
        let dir = TempDir::new().map_err(|e| StagingError::Create(e.to_string()))?;
        let workspace = Self { dir };
        fs::create_dir_all(workspace.case_dir())
            .map_err(|e| StagingError::Create(e.to_string()))?;
        debug!(root = %workspace.root().display(), "workspace created");
        Ok(workspace)
    }

    /// Root of the staging tree; the engine's working directory.
    #[must_use]
    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    /// The single case directory, `Dataset/P001`.
    #[must_use]
    pub fn case_dir(&self) -> PathBuf {
        self.root().join(DATASET_DIR).join(CASE_ID)
    }

    /// Where the input volume must be staged for the engine.
    #[must_use]
    pub fn staged_volume(&self) -> PathBuf {
        self.case_dir().join(STAGED_VOLUME_FILE)
    }

    /// Where the model definition must sit.
    #[must_use]
    pub fn model_definition(&self) -> PathBuf {
        self.root().join(MODEL_DEFINITION_FILE)
    }

    /// Where the engine writes the prediction for the staged case.
    ///
    /// The location mirrors the dataset layout and is fixed before the
    /// engine ever runs.
    #[must_use]
    pub fn prediction(&self) -> PathBuf {
        self.root()
            .join(PREDICTIONS_DIR)
            .join(PREDICTION_TOOL_DIR)
            .join(DATASET_DIR)
            .join(CASE_ID)
            .join(PREDICTION_FILE)
    }

    /// Copy the fetched model definition into the workspace root.
    pub fn stage_model_definition(&self, fetched: &Path) -> Result<(), StagingError> {
        let dst = self.model_definition();
        fs::copy(fetched, &dst).map_err(|e| StagingError::Copy {
            src: fetched.to_path_buf(),
            dst: dst.clone(),
            message: e.to_string(),
        })?;
        debug!(dst = %dst.display(), "model definition staged");
        Ok(())
    }
}
