//! CLI argument parsing using clap

use clap::{Parser, ValueEnum};
use fib_core::{Index, Variant};

/// Parallelization level for work item execution
#[derive(Debug, Clone, Copy, Default, ValueEnum, PartialEq, Eq)]
pub enum ParallelizeBy {
    /// No parallelization; run every (index, variant) pair in order
    Sequential,
    /// Parallelize across indices; variants run sequentially for each index (default)
    #[default]
    Index,
    /// Parallelize across all (index, variant) pairs
    Variant,
}

/// Compare Fibonacci algorithms side by side
#[derive(Parser, Debug)]
#[command(name = "fib", about = "Compare Fibonacci algorithms", version)]
pub struct Args {
    /// Indices to compute (defaults to 10 when neither indices nor a range are given)
    #[arg(allow_negative_numbers = true)]
    pub indices: Vec<Index>,

    /// First index of an inclusive range
    #[arg(long, requires = "to", allow_negative_numbers = true)]
    pub from: Option<Index>,

    /// Last index of an inclusive range
    #[arg(long, requires = "from", allow_negative_numbers = true)]
    pub to: Option<Index>,

    /// Variants to run (comma-separated: naive, tail, memo, iter, formula)
    #[arg(short, long, value_delimiter = ',')]
    pub variants: Vec<Variant>,

    /// Skip the naive variant above this index
    #[arg(long, default_value_t = 35)]
    pub naive_limit: Index,

    /// Number of threads for parallel execution
    #[arg(long)]
    pub threads: Option<usize>,

    /// Parallelization level: sequential, index, or variant
    #[arg(long, value_enum, default_value = "index")]
    pub parallelize_by: ParallelizeBy,

    /// Fail when variants disagree
    #[arg(long)]
    pub check: bool,

    /// Quiet mode - only output values
    #[arg(short, long)]
    pub quiet: bool,
}
