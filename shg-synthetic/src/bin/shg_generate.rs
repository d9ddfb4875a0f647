//! CLI: generate the synthetic SHG master dataset.
//!
//! Usage: `shg-generate [output.csv]`
//! Configuration comes from `shg.toml` in the working directory and
//! `SHG_*` environment variables.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use tracing::{error, info};

use shg_core::config::ShgConfig;
use shg_synthetic::{generate, write_csv};

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let root = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let config = match ShgConfig::load(&root) {
        Ok(config) => config,
        Err(e) => {
            error!("failed to load config: {e}");
            return ExitCode::FAILURE;
        }
    };

    let output = std::env::args()
        .nth(1)
        .unwrap_or_else(|| config.synthetic.effective_output_path());

    let records = match generate(&config.synthetic) {
        Ok(records) => records,
        Err(e) => {
            error!("generation failed: {e}");
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = write_csv(Path::new(&output), &records) {
        error!("failed to write {output}: {e}");
        return ExitCode::FAILURE;
    }

    info!(count = records.len(), output = %output, "dataset written");
    ExitCode::SUCCESS
}
