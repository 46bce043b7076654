//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `city_holidays` library that handles:
//! - Command-line argument parsing
//! - Environment variable loading (.env file)
//! - Logger initialization
//! - User-facing output formatting
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use std::process;

use city_holidays::app::render_columns;
use city_holidays::initialization::init_logger_with;
use city_holidays::{list_regions, list_sub_regions, run_lookup, Config, OutputFormat};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Endpoint overrides may live in a .env file next to the working directory
    let _ = dotenvy::dotenv();

    let config = Config::parse();

    let log_level = config.log_level.clone();
    let log_format = config.log_format.clone();
    init_logger_with(log_level.into(), log_format).context("Failed to initialize logger")?;

    let output = config.output;

    if config.list_regions {
        match list_regions(config).await {
            Ok(regions) => {
                for region in regions {
                    println!("{}", region.label);
                }
                return Ok(());
            }
            Err(e) => fail(e),
        }
    }

    if config.list_sub_regions {
        match list_sub_regions(config).await {
            Ok(sub_regions) => {
                for sub_region in sub_regions {
                    println!("{}", sub_region.label);
                }
                return Ok(());
            }
            Err(e) => fail(e),
        }
    }

    match run_lookup(config).await {
        Ok(report) => {
            match output {
                OutputFormat::Json => {
                    println!("{}", serde_json::to_string_pretty(&report.holidays)?);
                }
                OutputFormat::Plain => {
                    println!("Página: {}", report.source_url);
                    if !report.holidays.is_empty() {
                        println!();
                        print!("{}", render_columns(&report.heading(), &report.holidays));
                    }
                }
            }

            if let Some(error) = &report.fetch_error {
                eprintln!("city_holidays error: could not load holidays: {}", error);
                process::exit(1);
            }
            if report.holidays.is_empty() {
                eprintln!("No holidays found for this selection");
            }
            log::debug!("Lookup finished in {:.1}s", report.elapsed_seconds);
            Ok(())
        }
        Err(e) => fail(e),
    }
}

fn fail(e: anyhow::Error) -> ! {
    eprintln!("city_holidays error: {:#}", e);
    process::exit(1);
}
