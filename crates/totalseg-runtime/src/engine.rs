//! Engine command construction and execution.
//!
//! Building the command line is pure and separated from running it, so the
//! exact argv is testable without spawning anything.

use std::io;
use std::path::Path;
use std::process::Command;

use tracing::debug;

use totalseg_core::ports::{EngineError, EngineInvocation, EngineRunner};
use totalseg_core::{DeviceSelection, JobRequest, PredictionSource};

/// Engine executable used unless overridden.
pub const DEFAULT_ENGINE_PROGRAM: &str = "konfai";

/// Separator joining staged model paths for the engine's `--MODEL` flag.
pub const MODEL_PATH_SEPARATOR: &str = ":";

const SUBCOMMAND_STAGED: &str = "PREDICTION";
const SUBCOMMAND_HUB: &str = "PREDICTION_HUB";

/// Build the full engine invocation for one job.
///
/// Flag order matches the engine's expectations: subcommand, confirmation,
/// model source, configuration (staged runs only), device binding, then
/// the optional quiet switch.
#[must_use]
pub fn build_invocation(
    job: &JobRequest,
    workspace_root: &Path,
    program: &str,
) -> EngineInvocation {
    let mut args: Vec<String> = Vec::new();
    match &job.source {
        PredictionSource::Staged {
            model_paths,
            config_path,
        } => {
            args.push(SUBCOMMAND_STAGED.to_string());
            args.push("-y".to_string());
            args.push("--MODEL".to_string());
            args.push(
                model_paths
                    .iter()
                    .map(|p| p.to_string_lossy().into_owned())
                    .collect::<Vec<_>>()
                    .join(MODEL_PATH_SEPARATOR),
            );
            args.push("--config".to_string());
            args.push(config_path.to_string_lossy().into_owned());
        }
        PredictionSource::Hub { reference } => {
            args.push(SUBCOMMAND_HUB.to_string());
            args.push("-y".to_string());
            args.push("--MODEL".to_string());
            args.push(reference.clone());
        }
    }
    match &job.device {
        DeviceSelection::Gpu(devices) => {
            args.push("--gpu".to_string());
            args.push(devices.clone());
        }
        DeviceSelection::Cpu(cores) => {
            args.push("--cpu".to_string());
            args.push(cores.to_string());
        }
    }
    if job.quiet {
        // The engine expects the single-dash spelling.
        args.push("-quiet".to_string());
    }
    EngineInvocation {
        program: program.to_string(),
        args,
        workdir: workspace_root.to_path_buf(),
    }
}

/// [`EngineRunner`] adapter over a blocking child process.
///
/// Stdio is inherited so the engine's own progress output reaches the
/// terminal directly.
pub struct KonfaiProcess;

impl EngineRunner for KonfaiProcess {
    fn preflight(&self, program: &str) -> Result<(), EngineError> {
        which::which(program)
            .map(drop)
            .map_err(|_| EngineError::NotFound(program.to_string()))
    }

    fn run(&self, invocation: &EngineInvocation) -> Result<(), EngineError> {
        debug!(program = %invocation.program, args = ?invocation.args, workdir = %invocation.workdir.display(), "running engine");
        let status = Command::new(&invocation.program)
            .args(&invocation.args)
            .current_dir(&invocation.workdir)
            .status();
        match status {
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                Err(EngineError::NotFound(invocation.program.clone()))
            }
            Err(e) => Err(EngineError::Spawn {
                program: invocation.program.clone(),
                message: e.to_string(),
            }),
            Ok(status) if status.success() => Ok(()),
            Ok(status) => match status.code() {
                Some(code) => Err(EngineError::Exited(code)),
                None => Err(EngineError::Terminated(status.to_string())),
            },
        }
    }
}
