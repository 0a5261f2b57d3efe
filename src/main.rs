//! Sustainability Tracker - terminal sustainability topics and carbon footprint calculator
//!
//! This is the binary entry point. All logic lives in the library crates.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use sustainability_tracker::{resolve_settings, run_headless, run_tui, Args};
use sustrack_app::config::{endpoint_url, init_config_dir};
use sustrack_calc::HttpCalculationClient;
use sustrack_core::logging;

#[tokio::main]
async fn main() -> color_eyre::Result<ExitCode> {
    color_eyre::install()?;
    let args = Args::parse();

    let base_dir = args
        .base_dir
        .clone()
        .unwrap_or_else(|| std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")));

    if args.init {
        let path = init_config_dir(&base_dir)?;
        eprintln!("✅ Wrote default configuration to {}", path.display());
        return Ok(ExitCode::SUCCESS);
    }

    logging::init()?;

    let settings = resolve_settings(&base_dir, args.api_url.as_deref());
    let endpoint = endpoint_url(&settings)?;
    let client = HttpCalculationClient::new(endpoint.clone())?;

    if args.headless {
        let mut stdout = std::io::stdout().lock();
        let outcome = run_headless(
            &client,
            endpoint.as_str(),
            args.activity.to_input(),
            &mut stdout,
        )
        .await;
        return Ok(match outcome {
            Ok(_) => ExitCode::SUCCESS,
            Err(_) => ExitCode::FAILURE,
        });
    }

    if let Err(e) = run_tui(&base_dir, settings, client).await {
        eprintln!("❌ {}", e);
        eprintln!("   Logs: {}", logging::log_directory().display());
        return Ok(ExitCode::FAILURE);
    }
    Ok(ExitCode::SUCCESS)
}
