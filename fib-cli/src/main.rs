//! fib - Command-line demo comparing Fibonacci algorithms

mod aggregator;
mod agreement;
mod cli;
mod config;
mod error;
mod executor;
mod output;

use clap::Parser;
use cli::Args;
use config::Config;
use error::{CliError, ExecutorError};
use executor::Executor;
use log::{debug, warn};
use output::OutputFormatter;

fn main() {
    pretty_env_logger::init();
    let args = Args::parse();

    if let Err(e) = run(args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<(), CliError> {
    let config = Config::from_args(args)?;
    debug!("resolved config: {:?}", config);

    let executor = Executor::new(&config)?;
    let work_items = executor.collect_work_items();
    if !config.quiet {
        println!(
            "Running {} computation(s) on {} thread(s)...\n",
            work_items.len(),
            config.thread_count
        );
    }

    // Set up result channel
    let (tx, rx) = std::sync::mpsc::channel();

    // Run executor in background thread
    let executor_handle = std::thread::spawn(move || executor.execute(tx));

    // Collect and display results in order using aggregator
    let mut formatter = OutputFormatter::new(config.quiet);
    let mut aggregator = aggregator::ResultAggregator::new(&config.indices, &config.variants);
    let mut results = Vec::with_capacity(work_items.len());

    for result in rx {
        for ready in aggregator.add(result) {
            formatter.print_result(&ready);
            results.push(ready);
        }
    }

    // Drain any remaining buffered results (shouldn't happen if all results arrived)
    for ready in aggregator.drain() {
        formatter.print_result(&ready);
        results.push(ready);
    }

    if !aggregator.is_complete() {
        warn!("not all expected results were received");
    }

    executor_handle
        .join()
        .map_err(|_| ExecutorError::Panicked)??;

    let report = agreement::check(&results);
    for drift in &report.drifts {
        warn!(
            "closed form drifts at n = {}: {} vs {} from {}",
            drift.index, drift.value, drift.expected, drift.reference
        );
    }

    formatter.print_summary(&results, &report);

    if config.check && !report.is_consistent() {
        return Err(CliError::Disagreement(report.mismatches.len()));
    }
    Ok(())
}
