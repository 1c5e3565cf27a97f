//! Exit-code mapping for pipeline failures.
//!
//! The contract is strict: when the engine itself fails, its exit code
//! passes through verbatim so callers can tell engine-side failures apart;
//! every other failure is the tool's own and exits 1.

use totalseg_core::{EngineError, RunError};

/// Map a pipeline failure to the process exit status.
#[must_use]
pub fn exit_code(err: &RunError) -> i32 {
    match err {
        RunError::Engine(EngineError::Exited(code)) => *code,
        _ => 1,
    }
}
