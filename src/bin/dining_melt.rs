//! dining-melt: Flatten a dining menu export into a CSV table
//!
//! Usage:
//!   # Default run: ../data-scrape/starbucks.json -> ./starbucks_items.csv
//!   dining-melt
//!
//!   # Other locations
//!   dining-melt --input exports/cafe.json --output cafe_items.csv
//!
//!   # Different placeholders, with progress logging
//!   dining-melt --restaurant-id 7 --price 3.50 -v

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

use anyhow::{Context, Result};
use clap::Parser;
use dining_melt::{melt_menu_file, MeltConfig, DEFAULT_INPUT, DEFAULT_OUTPUT};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "dining-melt")]
#[command(about = "Flatten a dining menu export into a CSV table", long_about = None)]
struct Args {
    /// Menu export to read
    #[arg(long, short = 'i', value_name = "FILE", default_value = DEFAULT_INPUT)]
    input: PathBuf,

    /// CSV file to create or overwrite
    #[arg(long, short = 'o', value_name = "FILE", default_value = DEFAULT_OUTPUT)]
    output: PathBuf,

    /// Id of the first row (default: 100)
    #[arg(long)]
    start_id: Option<u64>,

    /// Placeholder price for every row (default: 4.99)
    #[arg(long)]
    price: Option<f64>,

    /// Placeholder restaurant id for every row (default: 13)
    #[arg(long)]
    restaurant_id: Option<u64>,

    /// Log more (-v info, -vv debug); RUST_LOG overrides
    #[arg(long, short = 'v', action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let mut config = MeltConfig::default();
    if let Some(start_id) = args.start_id {
        config.start_id = start_id;
    }
    if let Some(price) = args.price {
        config.price = price;
    }
    if let Some(restaurant_id) = args.restaurant_id {
        config.restaurant_id = restaurant_id;
    }

    let report = melt_menu_file(&args.input, &args.output, config)
        .with_context(|| format!("Failed to melt {}", args.input.display()))?;

    println!(
        "Extracted {} items to {}",
        report.rows_written,
        report.output.display()
    );
    Ok(())
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
