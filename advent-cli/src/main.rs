//! advent - command-line runner for the Advent of Code solutions

mod aggregator;
mod cli;
mod config;
mod error;
mod executor;
mod inputs;
mod output;

// Link the solutions so their catalog registrations are collected
use advent_days as _;

use advent_core::CatalogBuilder;
use clap::Parser;
use cli::Args;
use config::Config;
use error::CliError;
use executor::Executor;
use output::OutputFormatter;
use std::path::PathBuf;

fn main() {
    let args = Args::parse();

    if let Err(e) = run(args) {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<(), CliError> {
    let config = Config::from_args(args);

    // Build the catalog with tag filtering (only once)
    let catalog = build_catalog(&config.tags)?;

    let executor = Executor::new(catalog, &config).map_err(|e| CliError::Runner(e.into()))?;

    let work_items = executor.collect_work_items();
    if work_items.is_empty() {
        println!("No puzzles found matching the specified filters.");
        return Ok(());
    }

    // Report every missing input up front instead of failing mid-run
    let missing = missing_inputs(&work_items, executor.store());
    if !missing.is_empty() {
        eprintln!("Missing {} input file(s):", missing.len());
        for path in &missing {
            eprintln!("  - {}", path.display());
        }
        return Err(CliError::MissingInputs(missing.len()));
    }

    run_executor(executor, config.quiet)
}

/// Expected paths of inputs that are not on disk
fn missing_inputs(work_items: &[executor::WorkItem], store: &inputs::InputStore) -> Vec<PathBuf> {
    work_items
        .iter()
        .filter(|work| !store.contains(work.year, work.day))
        .map(|work| store.path(work.year, work.day))
        .collect()
}

/// Run the executor and print reports as they become ready
fn run_executor(executor: Executor, quiet: bool) -> Result<(), CliError> {
    let work_items = executor.collect_work_items();
    if !quiet {
        println!("Running {} puzzle(s)...", work_items.len());
    }

    // Expected keys drive the in-order aggregation
    let expected_keys: Vec<aggregator::ReportKey> = work_items
        .iter()
        .flat_map(|work| {
            work.parts.clone().map(move |part| aggregator::ReportKey {
                year: work.year,
                day: work.day,
                part,
            })
        })
        .collect();

    let (tx, rx) = std::sync::mpsc::channel();

    // Run the executor in a background thread; reports stream back here
    let executor_handle = std::thread::spawn(move || executor.execute(tx));

    let formatter = OutputFormatter::new(quiet);
    let mut aggregator = aggregator::ReportAggregator::new(expected_keys);
    let mut reports = Vec::new();

    for report in rx {
        for ready in aggregator.add(report) {
            formatter.print_report(&ready);
            reports.push(ready);
        }
    }

    // Flush anything still buffered (only reachable if a report went missing)
    for ready in aggregator.drain() {
        formatter.print_report(&ready);
        reports.push(ready);
    }
    if !aggregator.is_complete() {
        eprintln!("warning: not all expected reports were received");
    }

    executor_handle
        .join()
        .map_err(|_| CliError::Config("executor thread panicked".to_string()))?
        .map_err(CliError::Runner)?;

    formatter.print_summary(&reports);

    Ok(())
}

/// Build the catalog, keeping only entries that carry all requested tags
fn build_catalog(tags: &[String]) -> Result<advent_core::Catalog, CliError> {
    let builder = if tags.is_empty() {
        CatalogBuilder::new().with_registered()?
    } else {
        CatalogBuilder::new()
            .with_registered_filtered(|entry| tags.iter().all(|tag| entry.has_tag(tag)))?
    };

    Ok(builder.build())
}
