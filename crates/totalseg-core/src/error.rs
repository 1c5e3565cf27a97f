//! Failure taxonomy for one prediction run.

use std::path::PathBuf;

use thiserror::Error;

use crate::ports::{CodecError, EngineError, HubError};

/// Workspace staging failures.
#[derive(Debug, Error)]
pub enum StagingError {
    /// The temporary workspace could not be created.
    #[error("cannot create workspace: {0}")]
    Create(String),

    /// A fetched file could not be copied into the workspace.
    #[error("cannot copy '{}' into workspace at '{}': {message}", .src.display(), .dst.display())]
    Copy {
        /// File being staged
        src: PathBuf,
        /// Destination inside the workspace
        dst: PathBuf,
        /// Underlying IO error
        message: String,
    },
}

/// Everything that can go wrong in one prediction run.
///
/// Each variant carries enough context to print a one-line, actionable
/// report; the process exit code is derived from the variant alone.
#[derive(Debug, Error)]
pub enum RunError {
    /// Bad input/output path or unknown task; the caller must change the
    /// request.
    #[error("{0}")]
    Input(String),

    /// A required external executable is missing.
    #[error("{0}")]
    Environment(String),

    /// An artifact could not be fetched from the model hub.
    #[error(transparent)]
    Download(#[from] HubError),

    /// The workspace could not be created or populated.
    #[error(transparent)]
    Staging(#[from] StagingError),

    /// A format conversion leg failed.
    #[error(transparent)]
    Conversion(#[from] CodecError),

    /// The engine could not be run or reported failure.
    #[error(transparent)]
    Engine(#[from] EngineError),

    /// The engine reported success but the expected prediction is absent.
    #[error("prediction not found at: {}\n   Check the engine logs for details", .0.display())]
    MissingOutput(PathBuf),
}

/// Result alias for pipeline operations.
pub type RunResult<T> = Result<T, RunError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_engine_errors_convert_into_run_errors() {
        let err: RunError = EngineError::Exited(2).into();
        assert!(matches!(err, RunError::Engine(EngineError::Exited(2))));
    }

    #[test]
    fn test_missing_output_points_at_engine_logs() {
        let err = RunError::MissingOutput(PathBuf::from("/tmp/ws/Predictions/Seg.mha"));
        let text = err.to_string();
        assert!(text.contains("prediction not found at"));
        assert!(text.contains("Check the engine logs"));
    }

    #[test]
    fn test_transparent_variants_keep_inner_messages() {
        let err: RunError = StagingError::Create("read-only filesystem".to_string()).into();
        assert!(err.to_string().contains("read-only filesystem"));

        let err: RunError = CodecError::ConverterMissing {
            program: "c3d".to_string(),
        }
        .into();
        assert!(err.to_string().contains("c3d"));
    }
}
