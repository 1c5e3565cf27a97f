//! Volume conversion through an external ITK-family converter.
//!
//! Rather than linking an imaging toolkit, conversion shells out to a
//! converter executable (`c3d` by default) the same way the prediction
//! engine itself is driven. A same-format pair needs no converter at all:
//! the container already matches, so the bytes are copied through
//! unchanged.

use std::fs;
use std::io;
use std::path::Path;
use std::process::Command;

use tracing::debug;

use totalseg_core::formats::volume_format;
use totalseg_core::ports::{CodecError, VolumeCodec};

/// Converter executable used unless overridden.
pub const DEFAULT_CONVERTER_PROGRAM: &str = "c3d";

/// [`VolumeCodec`] adapter over an external converter executable.
pub struct ConvertTool {
    program: String,
}

impl ConvertTool {
    /// Use the given converter program for cross-format legs.
    #[must_use]
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    fn run_converter(&self, src: &Path, dst: &Path) -> Result<(), CodecError> {
        debug!(program = %self.program, src = %src.display(), dst = %dst.display(), "converting volume");
        let status = Command::new(&self.program)
            .arg(src)
            .arg("-o")
            .arg(dst)
            .status();
        match status {
            Err(e) if e.kind() == io::ErrorKind::NotFound => Err(CodecError::ConverterMissing {
                program: self.program.clone(),
            }),
            Err(e) => Err(transcode_error(src, dst, &e.to_string())),
            Ok(status) if !status.success() => Err(transcode_error(
                src,
                dst,
                &format!("converter exited with {status}"),
            )),
            Ok(_) if !dst.exists() => Err(transcode_error(
                src,
                dst,
                "converter reported success but wrote no output",
            )),
            Ok(_) => Ok(()),
        }
    }
}

fn transcode_error(src: &Path, dst: &Path, message: &str) -> CodecError {
    CodecError::Transcode {
        src: src.to_path_buf(),
        dst: dst.to_path_buf(),
        message: message.to_string(),
    }
}

impl VolumeCodec for ConvertTool {
    fn transcode(&self, src: &Path, dst: &Path) -> Result<(), CodecError> {
        match (volume_format(src), volume_format(dst)) {
            (Some(from), Some(to)) if from == to => {
                debug!(src = %src.display(), dst = %dst.display(), "same container, copying");
                fs::copy(src, dst)
                    .map(drop)
                    .map_err(|e| transcode_error(src, dst, &e.to_string()))
            }
            _ => self.run_converter(src, dst),
        }
    }

    fn preflight(&self, src: &Path, dst: &Path) -> Result<(), CodecError> {
        let same_container = matches!(
            (volume_format(src), volume_format(dst)),
            (Some(from), Some(to)) if from == to
        );
        if same_container {
            return Ok(());
        }
        which::which(&self.program)
            .map(drop)
            .map_err(|_| CodecError::ConverterMissing {
                program: self.program.clone(),
            })
    }
}
