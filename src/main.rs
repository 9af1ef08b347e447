//! labour-engine command line entrypoint.

use std::error::Error;
use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use labour_engine::analysis::analyze;
use labour_engine::config::{AnalysisConfig, ConfigLoader, ShiftRowPolicy};
use labour_engine::models::HourlyReport;

/// Compare hourly labour cost against hourly sales
#[derive(Parser)]
#[command(
    name = "labour-engine",
    version = env!("CARGO_PKG_VERSION"),
    about = "Rank hours of the day by labour cost as a percentage of sales",
    long_about = None
)]
struct Cli {
    /// Shift source CSV (start_time, end_time, break_notes, pay_rate)
    #[arg(long = "shifts")]
    shifts: PathBuf,

    /// Sales source CSV (time, amount)
    #[arg(long = "sales")]
    sales: PathBuf,

    /// YAML configuration file
    #[arg(long = "config")]
    config: Option<PathBuf>,

    /// Skip rejected shift rows instead of stopping at the first one
    #[arg(long = "skip-bad-shifts")]
    skip_bad_shifts: bool,

    /// Print the per-hour table as well as the best and worst hours
    #[arg(long = "report")]
    report: bool,

    /// Print the result as JSON
    #[arg(long = "json", conflicts_with = "report")]
    json: bool,

    /// Enable debug logging on stderr
    #[arg(short = 'v', long = "verbose")]
    verbose: bool,
}

/// Initialize tracing subscriber, writing to stderr
fn init_tracing(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(level.into()))
        .with_writer(std::io::stderr)
        .init();
}

fn print_report(report: &HourlyReport) {
    println!("{:<6} {:>12} {:>12} {:>10}", "Hour", "Labour", "Sales", "Percent");
    println!("{}", "─".repeat(43));
    for line in &report.hours {
        let sales = line
            .revenue
            .map(|r| format!("{:.2}", r))
            .unwrap_or_else(|| "-".to_string());
        println!(
            "{:<6} {:>12.2} {:>12} {:>10.2}",
            line.bucket.to_string(),
            line.labour_cost,
            sales,
            line.percentage
        );
    }
    println!();
}

fn run(cli: &Cli) -> Result<(), Box<dyn Error>> {
    let mut config = match &cli.config {
        Some(path) => ConfigLoader::load(path)?,
        None => AnalysisConfig::default(),
    };
    if cli.skip_bad_shifts {
        config.shift_row_policy = ShiftRowPolicy::Skip;
    }

    let report = analyze(&cli.shifts, &cli.sales, &config)?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    if cli.report {
        print_report(&report);
    }
    println!("Best hour: {}", report.best_hour);
    println!("Worst hour: {}", report.worst_hour);
    Ok(())
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(&cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
