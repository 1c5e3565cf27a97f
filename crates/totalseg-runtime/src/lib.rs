//! Process runtime and filesystem concerns for the segmentation pipeline.
//!
//! Production adapters for the core ports: ephemeral workspace staging,
//! volume conversion through an external converter, and blocking engine
//! execution.
#![deny(unsafe_code)]

pub mod convert;
pub mod engine;
pub mod staging;

pub use convert::{ConvertTool, DEFAULT_CONVERTER_PROGRAM};
pub use engine::{DEFAULT_ENGINE_PROGRAM, KonfaiProcess, MODEL_PATH_SEPARATOR, build_invocation};
pub use staging::{CASE_ID, PREDICTION_FILE, STAGED_VOLUME_FILE, Workspace};
