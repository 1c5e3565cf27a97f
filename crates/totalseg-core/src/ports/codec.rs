//! Port for converting volumes between container formats.

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Errors from volume conversion.
#[derive(Debug, Error)]
pub enum CodecError {
    /// The external converter executable is not installed.
    #[error("converter '{program}' not found in PATH (required to convert between volume formats)")]
    ConverterMissing {
        /// Program name that was looked up
        program: String,
    },

    /// A conversion failed; both endpoints are named.
    #[error("cannot convert '{}' to '{}': {message}", .src.display(), .dst.display())]
    Transcode {
        /// Source volume
        src: PathBuf,
        /// Destination volume
        dst: PathBuf,
        /// Underlying converter or IO error
        message: String,
    },
}

/// Converts one volume file into another container format.
///
/// Conversion is between containers only: voxel data, spacing and
/// orientation pass through unchanged, and a same-format pair degenerates
/// to a plain copy.
pub trait VolumeCodec {
    /// Convert `src` into `dst`, inferring both formats from path suffixes.
    fn transcode(&self, src: &Path, dst: &Path) -> Result<(), CodecError>;

    /// Verify the codec could run `src` -> `dst` before any work is staged.
    ///
    /// Only path suffixes are consulted; neither file has to exist yet. The
    /// default implementation assumes the codec is self-contained.
    fn preflight(&self, _src: &Path, _dst: &Path) -> Result<(), CodecError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transcode_error_names_both_endpoints() {
        let err = CodecError::Transcode {
            src: PathBuf::from("/in/scan.mha"),
            dst: PathBuf::from("/tmp/ws/Dataset/P001/Volume.nii.gz"),
            message: "truncated header".to_string(),
        };
        let text = err.to_string();
        assert!(text.contains("/in/scan.mha"));
        assert!(text.contains("Volume.nii.gz"));
        assert!(text.contains("truncated header"));
    }

    #[test]
    fn test_missing_converter_error_names_program() {
        let err = CodecError::ConverterMissing {
            program: "c3d".to_string(),
        };
        assert!(err.to_string().contains("'c3d' not found in PATH"));
    }
}
