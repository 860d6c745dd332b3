use std::path::Path;
use std::process;

use colored::Colorize;

use parallel_etl::{chart, dataset, harness, report, strategies, BenchConfig};

const CHART_PATH: &str = "etl_times.png";

fn main() {
    let config = match BenchConfig::from_args(std::env::args().skip(1)) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{} {}", "error:".red().bold(), err);
            eprintln!("usage: parallel-etl [data_size] [workers]");
            process::exit(1);
        }
    };

    println!("Initializing raw data ({} elements)...", config.data_size);
    let raw = dataset::generate(&config);
    println!("Data initialization complete.");

    println!("\nStarting measurements...");
    let records = harness::run_all(&config, &raw, &strategies::lineup());

    report::print_table(&records);

    println!("\nGenerating chart...");
    match chart::render(&records, Path::new(CHART_PATH)) {
        Ok(()) => println!("Chart saved as {CHART_PATH}"),
        Err(err) => eprintln!(
            "{} chart rendering failed: {}",
            "warning:".yellow().bold(),
            err
        ),
    }
}
