//! Command-line arguments

use std::path::PathBuf;

use clap::Parser;
use sustrack_core::ActivityInput;

/// Sustainability Tracker - explore topics and estimate your daily carbon footprint
#[derive(Parser, Debug)]
#[command(name = "sustrack", version)]
#[command(about = "Explore sustainability topics and estimate your daily carbon footprint", long_about = None)]
pub struct Args {
    /// Directory holding `.sustrack/config.toml` and the topic images
    /// (defaults to the current directory)
    #[arg(long, value_name = "PATH")]
    pub base_dir: Option<PathBuf>,

    /// Calculation service endpoint; overrides SUSTRACK_API_URL and the config file
    #[arg(long, value_name = "URL")]
    pub api_url: Option<String>,

    /// Write a default `.sustrack/config.toml` and exit
    #[arg(long)]
    pub init: bool,

    /// Submit one record from the flags below and print NDJSON events instead of the TUI
    #[arg(long)]
    pub headless: bool,

    #[command(flatten)]
    pub activity: ActivityArgs,
}

/// Activity quantities for headless mode
#[derive(clap::Args, Debug, Clone, Default)]
pub struct ActivityArgs {
    /// Distance traveled by car (km)
    #[arg(long, value_name = "KM", default_value_t = 0.0, value_parser = parse_non_negative)]
    pub km_driven: f64,

    /// Electricity used at home (kWh)
    #[arg(long, value_name = "KWH", default_value_t = 0.0, value_parser = parse_non_negative)]
    pub electricity_kwh: f64,

    /// Number of meat-based meals
    #[arg(long, value_name = "N", default_value_t = 0)]
    pub meat_meals: u32,

    /// Waste generated (kg)
    #[arg(long, value_name = "KG", default_value_t = 0.0, value_parser = parse_non_negative)]
    pub waste_kg: f64,

    /// Water used (liters)
    #[arg(long, value_name = "LITERS", default_value_t = 0.0, value_parser = parse_non_negative)]
    pub water_liters: f64,

    /// Other energy usage (kWh)
    #[arg(long, value_name = "KWH", default_value_t = 0.0, value_parser = parse_non_negative)]
    pub energy_usage_kwh: f64,
}

impl ActivityArgs {
    pub fn to_input(&self) -> ActivityInput {
        ActivityInput {
            km_driven: self.km_driven,
            electricity_kwh: self.electricity_kwh,
            meat_meals: self.meat_meals,
            waste_kg: self.waste_kg,
            water_liters: self.water_liters,
            energy_usage_kwh: self.energy_usage_kwh,
        }
    }
}

fn parse_non_negative(value: &str) -> Result<f64, String> {
    let number: f64 = value
        .parse()
        .map_err(|_| format!("'{}' is not a number", value))?;
    if !number.is_finite() || number < 0.0 {
        return Err(format!("'{}' must be a non-negative number", value));
    }
    Ok(number)
}
