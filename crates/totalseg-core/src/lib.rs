//! Core domain types and port definitions for the segmentation pipeline.
//!
//! This crate owns the task table, the supported-format rules, the job
//! model and the failure taxonomy. It performs no IO of its own: artifact
//! fetching, format conversion and engine execution all sit behind the
//! traits in [`ports`].
#![deny(unused_crate_dependencies)]

pub mod error;
pub mod formats;
pub mod job;
pub mod ports;
pub mod task;

// Re-export commonly used types for convenience
pub use error::{RunError, RunResult, StagingError};
pub use job::{DeviceSelection, JobRequest, PredictionSource};
pub use ports::{
    ArtifactRef, CodecError, DEFAULT_HUB_REPO, DEFAULT_HUB_REVISION, EngineError,
    EngineInvocation, EngineRunner, FetchedBundle, HubError, MODEL_DEFINITION_FILE, ModelHub,
    VolumeCodec, fetch_model_set,
};
pub use task::{ModelSet, Task};
