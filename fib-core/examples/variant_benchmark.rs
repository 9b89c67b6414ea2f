//! Benchmark comparing the Fibonacci variants.
//!
//! Run with: cargo run -p fib-core --example variant_benchmark --release
//!
//! Computes Fibonacci numbers for a batch of indices with every variant and compares:
//! - Naive recursion (baseline, only on small n)
//! - Tail recursion, memoization, iteration and the closed form over the full range
//! - The same batch spread over rayon's thread pool

use anyhow::{Context, ensure};
use fib_core::{FORMULA_EXACT_MAX, Index, MAX_INDEX, Value, Variant};
use rayon::prelude::*;
use std::time::{Duration, Instant};

const NUM_QUERIES: usize = 10_000;
const NAIVE_MAX: Index = 30;

fn main() -> anyhow::Result<()> {
    println!("Fibonacci Variant Benchmark");
    println!("===========================");

    let full: Vec<Index> = (0..NUM_QUERIES as Index).map(|i| i % (MAX_INDEX + 1)).collect();
    let small: Vec<Index> = (0..100).map(|i| i % (NAIVE_MAX + 1)).collect();
    let exact_formula: Vec<Index> = full
        .iter()
        .copied()
        .filter(|n| *n <= FORMULA_EXACT_MAX)
        .collect();

    println!(
        "Testing {} queries (n: 0-{}), naive on {} queries (n: 0-{})\n",
        full.len(),
        MAX_INDEX,
        small.len(),
        NAIVE_MAX
    );

    let reference = run_sequential(Variant::Iterative, &full)?.0;

    println!("=== Sequential ===");
    for variant in Variant::ALL {
        let cases = cases_for(variant, &full, &small);
        let (results, elapsed) = run_sequential(variant, cases)?;
        report(variant, cases.len(), elapsed);
        verify(variant, cases, &results, &full, &reference, &exact_formula)?;
    }

    println!("\n=== Parallel (rayon) ===");
    for variant in Variant::ALL {
        let cases = cases_for(variant, &full, &small);
        let (results, elapsed) = run_parallel(variant, cases)?;
        report(variant, cases.len(), elapsed);
        verify(variant, cases, &results, &full, &reference, &exact_formula)?;
    }

    println!("\nAll variants agree.");
    Ok(())
}

fn cases_for<'a>(variant: Variant, full: &'a [Index], small: &'a [Index]) -> &'a [Index] {
    if variant == Variant::Naive { small } else { full }
}

fn run_sequential(variant: Variant, cases: &[Index]) -> anyhow::Result<(Vec<Value>, Duration)> {
    let start = Instant::now();
    let results = cases
        .iter()
        .map(|&n| variant.compute(n))
        .collect::<Result<Vec<_>, _>>()?;
    Ok((results, start.elapsed()))
}

fn run_parallel(variant: Variant, cases: &[Index]) -> anyhow::Result<(Vec<Value>, Duration)> {
    let start = Instant::now();
    let results = cases
        .par_iter()
        .map(|&n| variant.compute(n))
        .collect::<Result<Vec<_>, _>>()?;
    Ok((results, start.elapsed()))
}

fn report(variant: Variant, queries: usize, elapsed: Duration) {
    println!(
        "{:>16} {:>7} / {:>6}: {:>12?} ({} queries)",
        variant.label(),
        variant.time_complexity(),
        variant.space_complexity(),
        elapsed,
        queries
    );
}

/// Checks results against the iterative reference.
fn verify(
    variant: Variant,
    cases: &[Index],
    results: &[Value],
    full: &[Index],
    reference: &[Value],
    exact_formula: &[Index],
) -> anyhow::Result<()> {
    for (&n, &value) in cases.iter().zip(results) {
        if variant == Variant::Formula && !exact_formula.contains(&n) {
            continue;
        }
        let pos = full
            .iter()
            .position(|&m| m == n)
            .context("index missing from reference batch")?;
        ensure!(
            value == reference[pos],
            "{variant} disagrees at n = {n}: {value} != {}",
            reference[pos]
        );
    }
    Ok(())
}
