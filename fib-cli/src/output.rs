//! Output formatting for computation results

use crate::agreement::AgreementReport;
use crate::executor::{ComputeResult, Outcome};
use chrono::TimeDelta;
use fib_core::Index;

/// Width of the method column in the demo table
const METHOD_WIDTH: usize = 20;

/// Output formatter for computation results
pub struct OutputFormatter {
    quiet: bool,
    start_time: std::time::Instant,
    /// Index whose table is currently open
    current_index: Option<Index>,
}

impl OutputFormatter {
    /// Create a new output formatter
    pub fn new(quiet: bool) -> Self {
        Self {
            quiet,
            start_time: std::time::Instant::now(),
            current_index: None,
        }
    }

    /// Format and print a single result, opening a new table when the index changes
    pub fn print_result(&mut self, result: &ComputeResult) {
        if self.quiet {
            print_quiet(result);
            return;
        }

        if self.current_index != Some(result.index) {
            if self.current_index.is_some() {
                println!();
            }
            println!("{}", format_header(result.index));
            self.current_index = Some(result.index);
        }
        println!("{}", format_row(result));
    }

    /// Print a summary after all results
    pub fn print_summary(&self, results: &[ComputeResult], report: &AgreementReport) {
        if self.quiet {
            return;
        }

        let computed = results
            .iter()
            .filter(|r| matches!(r.outcome, Outcome::Computed(_)))
            .count();
        let failed = results
            .iter()
            .filter(|r| matches!(r.outcome, Outcome::Failed(_)))
            .count();
        let skipped = results.len() - computed - failed;

        let total_compute_time: TimeDelta = results.iter().map(|r| r.duration).sum();
        let elapsed_time = self.start_time.elapsed();

        println!();
        println!("--- Summary ---");
        println!(
            "Results: {} computed, {} failed, {} skipped",
            computed, failed, skipped
        );
        println!("Total compute time: {}", format_duration(total_compute_time));
        println!(
            "Elapsed wall-clock time: {}",
            format_std_duration(elapsed_time)
        );
        if report.is_consistent() {
            println!("Agreement: all variants agree");
        } else {
            println!("Agreement: {} disagreement(s)", report.mismatches.len());
            for d in &report.mismatches {
                println!(
                    "  n = {}: {} returned {}, {} returned {}",
                    d.index, d.variant, d.value, d.reference, d.expected
                );
            }
        }
        if !report.drifts.is_empty() {
            println!(
                "Closed-form drift: {} index(es) above the exact range",
                report.drifts.len()
            );
        }
    }
}

/// Print in quiet mode (variant, index and value only)
fn print_quiet(result: &ComputeResult) {
    match &result.outcome {
        Outcome::Computed(value) => println!("{} {} {}", result.variant, result.index, value),
        Outcome::Failed(e) => eprintln!("{} {}: Error: {}", result.variant, result.index, e),
        Outcome::Skipped { .. } => {}
    }
}

/// Table header for one index
fn format_header(index: Index) -> String {
    format!(
        "Fibonacci Number Calculation Demo (n = {})\n{:>width$} | Result\n{}+--------",
        index,
        "Method",
        "-".repeat(METHOD_WIDTH + 1),
        width = METHOD_WIDTH
    )
}

/// One table row
fn format_row(result: &ComputeResult) -> String {
    let label = result.variant.label();
    match &result.outcome {
        Outcome::Computed(value) => format!(
            "{:>width$} | {} ({})",
            label,
            value,
            format_duration(result.duration),
            width = METHOD_WIDTH
        ),
        Outcome::Failed(e) => format!("{:>width$} | Error - {}", label, e, width = METHOD_WIDTH),
        Outcome::Skipped { limit } => format!(
            "{:>width$} | skipped (n > naive limit {})",
            label,
            limit,
            width = METHOD_WIDTH
        ),
    }
}

/// Format a TimeDelta for display
fn format_duration(d: TimeDelta) -> String {
    let Some(micros) = d.num_microseconds() else {
        return "N/A".to_string();
    };

    if micros < 0 {
        return format!("-{}", format_duration(-d));
    }

    if micros < 1000 {
        format!("{}µs", micros)
    } else if micros < 1_000_000 {
        format!("{:.2}ms", micros as f64 / 1000.0)
    } else {
        format!("{:.2}s", micros as f64 / 1_000_000.0)
    }
}

/// Format a std::time::Duration for display (used for wall-clock time)
fn format_std_duration(d: std::time::Duration) -> String {
    let micros = d.as_micros();
    if micros < 1000 {
        format!("{}µs", micros)
    } else if micros < 1_000_000 {
        format!("{:.2}ms", micros as f64 / 1000.0)
    } else {
        format!("{:.2}s", d.as_secs_f64())
    }
}
