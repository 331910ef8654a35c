use std::fs;

use anyhow::{Context, Result};
use dotenvy::dotenv;
use rand::{SeedableRng, rngs::StdRng};

mod config;
mod generator;
mod logging;
mod model;
mod script;
mod utils;

use config::Config;
use generator::Generator;
use logging::init_logging;
use script::SqlScript;

use tracing::info;

fn main() -> Result<()> {
    dotenv().ok();

    let config = Config::from_env().context("Failed to load configuration")?;

    let _guard = init_logging(&config.log_dir)?;

    // Draw a seed up front so an unseeded run can still be replayed
    let seed = config.seed.unwrap_or_else(rand::random);
    info!(seed, output = %config.output_path.display(), "Timesheet generation starting");

    let generated = Generator::new(&config, StdRng::seed_from_u64(seed)).generate();
    let script = SqlScript::new(&config, &generated);

    if let Some(parent) = config.output_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    fs::write(&config.output_path, script.to_string())
        .with_context(|| format!("Failed to write {}", config.output_path.display()))?;

    info!(
        records = generated.records.len(),
        batches = script.batch_count(),
        "Timesheet data written"
    );

    let staff_names = config
        .staff
        .iter()
        .map(|s| s.name.as_str())
        .collect::<Vec<_>>()
        .join(", ");

    println!("Generated timesheet data: {}", config.output_path.display());
    println!("Date range: {} to {}", config.start_date, config.end_date);
    println!("Staff: {}", staff_names);
    println!("Records: {} in {} batch(es)", generated.records.len(), script.batch_count());
    println!("Seed: {} (set TIMESHEET_SEED to reproduce)", seed);

    Ok(())
}
