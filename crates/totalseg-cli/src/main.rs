//! CLI entry point - the composition root.
//!
//! The only place where adapters are wired together: hub client, volume
//! converter and engine process. Everything below works against ports.

use clap::Parser;

use totalseg_cli::{Cli, Config, Pipeline, exit_code};
use totalseg_hf::{HubClientConfig, HubFetcher};
use totalseg_runtime::{ConvertTool, KonfaiProcess};

fn main() {
    // Initialize logging
    tracing_subscriber::fmt::init();

    // Load environment variables
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = Config::from_env();

    let hub = match HubFetcher::new(&HubClientConfig {
        token: config.hub_token.clone(),
        show_progress: !cli.quiet,
        ..HubClientConfig::default()
    }) {
        Ok(hub) => hub,
        Err(e) => {
            eprintln!("❌ {e}");
            std::process::exit(1);
        }
    };
    let codec = ConvertTool::new(config.converter_program.clone());
    let engine = KonfaiProcess;

    match Pipeline::new(&config, &hub, &codec, &engine).run(&cli) {
        Ok(output) => {
            if !cli.quiet {
                println!("✅ Done. Segmentation saved to: {}", output.display());
            }
        }
        Err(e) => {
            eprintln!("❌ {e}");
            std::process::exit(exit_code(&e));
        }
    }
}
