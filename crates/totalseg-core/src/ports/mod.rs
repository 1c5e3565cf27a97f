//! Port definitions (trait abstractions) for external systems.
//!
//! Ports define the interfaces the pipeline expects from infrastructure.
//! They contain no implementation details and use only domain types.
//!
//! # Design Rules
//!
//! - No client or process types in any signature
//! - Errors are domain-level; adapters map their own failures into them
//! - Production adapters live in `totalseg-hf` and `totalseg-runtime`

pub mod codec;
pub mod engine;
pub mod hub;

// Re-export port traits and their error types for convenience
pub use codec::{CodecError, VolumeCodec};
pub use engine::{EngineError, EngineInvocation, EngineRunner};
pub use hub::{
    ArtifactRef, DEFAULT_HUB_REPO, DEFAULT_HUB_REVISION, FetchedBundle, HubError,
    MODEL_DEFINITION_FILE, ModelHub, fetch_model_set,
};
