//! Job description passed from the command line to the engine invoker.

use std::path::PathBuf;

use crate::task::Task;

/// Compute device binding forwarded to the engine.
///
/// Construction guarantees the GPU/CPU exclusivity rule: no value can carry
/// both a GPU list and a core count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeviceSelection {
    /// Comma-separated GPU list, e.g. `"0"` or `"0,1"`. Never empty.
    Gpu(String),
    /// CPU core count, used when no GPU is requested.
    Cpu(u32),
}

impl DeviceSelection {
    /// Fold the command line's GPU list and core count into one selection.
    ///
    /// An empty or whitespace GPU list means CPU mode, in which case the
    /// core count applies; otherwise the core count is ignored entirely.
    #[must_use]
    pub fn from_flags(gpu: &str, cpu_cores: u32) -> Self {
        let gpu = gpu.trim();
        if gpu.is_empty() {
            Self::Cpu(cpu_cores)
        } else {
            Self::Gpu(gpu.to_string())
        }
    }
}

/// Where the engine's models come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PredictionSource {
    /// Local artifact paths staged by this tool.
    Staged {
        /// Fetched model files, in ensemble order.
        model_paths: Vec<PathBuf>,
        /// Fetched inference configuration file.
        config_path: PathBuf,
    },
    /// A composite `repository:task` reference the engine resolves itself.
    Hub {
        /// The composite reference, e.g. `"owner/repo:total"`.
        reference: String,
    },
}

impl PredictionSource {
    /// Build a hub reference from a repository name and a task.
    #[must_use]
    pub fn hub_reference(repo: &str, task: Task) -> Self {
        Self::Hub {
            reference: format!("{repo}:{task}"),
        }
    }
}

/// Everything one prediction run depends on.
///
/// Immutable once constructed; together with the workspace layout it fully
/// determines the engine command line.
#[derive(Debug, Clone)]
pub struct JobRequest {
    /// Validated input volume path.
    pub input: PathBuf,
    /// Final output path for the segmentation.
    pub output: PathBuf,
    /// Model source handed to the engine.
    pub source: PredictionSource,
    /// Device binding for the engine.
    pub device: DeviceSelection,
    /// Suppress engine progress output.
    pub quiet: bool,
}
