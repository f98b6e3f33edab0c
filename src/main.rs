// src/main.rs

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use log::info;
use std::path::PathBuf;

use adrc_pendulum_render::constants::DEFAULT_LOG_FILE;
use adrc_pendulum_render::crate_version;
use adrc_pendulum_render::data_input::log_parser::parse_log_file;
use adrc_pendulum_render::plot_framework::OutputFormat;
use adrc_pendulum_render::plot_functions::plot_adrc_response::{output_path_for, plot_adrc_response};

/// Renders an ADRC pendulum telemetry log as stacked angle, command and f(t) plots.
#[derive(Parser)]
#[command(name = "adrc_pendulum_render")]
#[command(author, version = crate_version(), about, long_about = None)]
struct Cli {
    /// Telemetry log with five whitespace-separated columns: Time Command Response Setpoint f
    #[arg(value_name = "LOG_FILE", default_value = DEFAULT_LOG_FILE)]
    input: PathBuf,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    let root_name = cli
        .input
        .file_stem()
        .unwrap_or_default()
        .to_string_lossy()
        .into_owned();

    let table = parse_log_file(&cli.input)
        .with_context(|| format!("Failed to load telemetry log '{}'", cli.input.display()))?;

    let format = OutputFormat::Png;
    let output_file = output_path_for(&root_name, format);
    info!("Rendering {} records to '{}'", table.len(), output_file.display());

    plot_adrc_response(&table, &root_name, &output_file, format)
        .map_err(|e| anyhow!("Failed to render '{}': {}", output_file.display(), e))?;

    Ok(())
}
