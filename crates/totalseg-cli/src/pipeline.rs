//! The prediction pipeline: validate, resolve, fetch, stage, run, convert.
//!
//! Steps run strictly in order and the first failure ends the run. The
//! workspace is ephemeral and cleans itself up on every path out, success
//! and failure alike.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use totalseg_core::formats;
use totalseg_core::ports::{EngineRunner, ModelHub, VolumeCodec, fetch_model_set};
use totalseg_core::{DeviceSelection, JobRequest, PredictionSource, RunError, RunResult, Task};
use totalseg_runtime::{PREDICTION_FILE, STAGED_VOLUME_FILE, Workspace, build_invocation};

use crate::config::Config;
use crate::parser::Cli;

/// One run of the tool, wired to its collaborators.
pub struct Pipeline<'a> {
    config: &'a Config,
    hub: &'a dyn ModelHub,
    codec: &'a dyn VolumeCodec,
    engine: &'a dyn EngineRunner,
}

impl<'a> Pipeline<'a> {
    /// Wire a pipeline to its collaborators.
    #[must_use]
    pub fn new(
        config: &'a Config,
        hub: &'a dyn ModelHub,
        codec: &'a dyn VolumeCodec,
        engine: &'a dyn EngineRunner,
    ) -> Self {
        Self {
            config,
            hub,
            codec,
            engine,
        }
    }

    /// Run one prediction end to end, returning the final output path.
    ///
    /// Validation and preflight happen before anything is fetched or
    /// staged; whatever was staged by the time of a failure is removed
    /// before this returns.
    pub fn run(&self, cli: &Cli) -> RunResult<PathBuf> {
        let input = validated_input(&cli.input)?;
        let output = validated_output(&cli.output)?;

        self.engine
            .preflight(&self.config.engine_program)
            .map_err(|e| RunError::Environment(e.to_string()))?;
        // The converter is only consulted for legs that cross formats; the
        // staged volume and raw prediction names are fixed by the engine.
        for (src, dst) in [
            (input.as_path(), Path::new(STAGED_VOLUME_FILE)),
            (Path::new(PREDICTION_FILE), output.as_path()),
        ] {
            self.codec
                .preflight(src, dst)
                .map_err(|e| RunError::Environment(e.to_string()))?;
        }

        let task: Task = cli.task.parse().map_err(|_| {
            RunError::Input(format!(
                "Unknown task '{}'. Valid tasks: {}",
                cli.task,
                Task::names().join(", ")
            ))
        })?;
        let set = task.resolve(cli.fast);
        debug!(%task, fast = cli.fast, models = set.models.len(), "task resolved");

        if !cli.quiet {
            println!(
                "Fetching {} model artifact(s) for task '{task}' from {}...",
                set.models.len(),
                self.config.hub_repo
            );
        }
        let bundle = fetch_model_set(
            self.hub,
            &self.config.hub_repo,
            &self.config.hub_revision,
            &set,
        )?;

        let workspace = Workspace::create()?;
        workspace.stage_model_definition(&bundle.model_definition_path)?;
        self.codec.transcode(&input, &workspace.staged_volume())?;

        let job = JobRequest {
            input: input.clone(),
            output: output.clone(),
            source: PredictionSource::Staged {
                model_paths: bundle.model_paths,
                config_path: bundle.config_path,
            },
            device: DeviceSelection::from_flags(&cli.gpu, cli.cpu),
            quiet: cli.quiet,
        };
        let invocation = build_invocation(&job, workspace.root(), &self.config.engine_program);
        self.engine.run(&invocation)?;

        let prediction = workspace.prediction();
        if !prediction.exists() {
            return Err(RunError::MissingOutput(prediction));
        }
        self.codec.transcode(&prediction, &output)?;
        info!(output = %output.display(), "segmentation written");
        Ok(output)
    }
}

/// Absolutize and validate the input path: it must exist and carry a
/// supported suffix.
fn validated_input(path: &Path) -> RunResult<PathBuf> {
    let input = std::path::absolute(path)
        .map_err(|e| RunError::Input(format!("Invalid input path '{}': {e}", path.display())))?;
    if !input.exists() {
        return Err(RunError::Input(format!(
            "Input file does not exist: {}",
            input.display()
        )));
    }
    if !formats::is_supported_volume(&input) {
        return Err(unsupported_extension("input", &input));
    }
    Ok(input)
}

/// Absolutize and validate the output path: its parent directory must be
/// creatable and its suffix supported.
fn validated_output(path: &Path) -> RunResult<PathBuf> {
    let output = std::path::absolute(path)
        .map_err(|e| RunError::Input(format!("Invalid output path '{}': {e}", path.display())))?;
    if let Some(parent) = output.parent() {
        fs::create_dir_all(parent).map_err(|e| {
            RunError::Input(format!(
                "Cannot create output directory {}: {e}",
                parent.display()
            ))
        })?;
    }
    if !formats::is_supported_volume(&output) {
        return Err(unsupported_extension("output", &output));
    }
    Ok(output)
}

fn unsupported_extension(kind: &str, path: &Path) -> RunError {
    let name = path.file_name().map_or_else(
        || path.display().to_string(),
        |n| n.to_string_lossy().into_owned(),
    );
    RunError::Input(format!(
        "Unsupported {kind} extension: {name}\n   Supported: {}",
        formats::supported_list()
    ))
}
