//! Command-line adapter: argument parsing, configuration, the pipeline
//! driver and exit-code mapping.
#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

// Dependencies used only by the binary target
use dotenvy as _;
use totalseg_hf as _;
use tracing_subscriber as _;

pub mod config;
pub mod error;
pub mod parser;
pub mod pipeline;

// Re-export primary types for convenient access
pub use config::Config;
pub use error::exit_code;
pub use parser::Cli;
pub use pipeline::Pipeline;
