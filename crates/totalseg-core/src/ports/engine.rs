//! Port for running the external prediction engine.

use std::path::PathBuf;

use thiserror::Error;

/// Pure description of one engine run: program, arguments, working
/// directory.
///
/// Building one spawns nothing, so tests can assert on the exact argv.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineInvocation {
    /// Program name or path handed to the OS
    pub program: String,
    /// Arguments in final order
    pub args: Vec<String>,
    /// Working directory the engine must run in
    pub workdir: PathBuf,
}

/// Errors from engine execution.
#[derive(Debug, Error)]
pub enum EngineError {
    /// The engine executable is not installed or not in PATH.
    #[error("'{0}' not found in PATH. Install the engine or activate its environment")]
    NotFound(String),

    /// The engine ran and reported a nonzero exit code.
    #[error("engine prediction failed with exit code {0}")]
    Exited(i32),

    /// The engine died without an exit code, e.g. killed by a signal.
    #[error("engine terminated abnormally: {0}")]
    Terminated(String),

    /// Spawning failed for a reason other than a missing executable.
    #[error("failed to launch '{program}': {message}")]
    Spawn {
        /// Program that was launched
        program: String,
        /// Underlying spawn error
        message: String,
    },
}

/// Runs engine invocations to completion.
pub trait EngineRunner {
    /// Verify the engine executable is invocable, without running it.
    fn preflight(&self, program: &str) -> Result<(), EngineError>;

    /// Run one invocation, blocking until the engine exits.
    fn run(&self, invocation: &EngineInvocation) -> Result<(), EngineError>;
}
