//! Configuration resolution from CLI args

use crate::cli::{Args, ParallelizeBy};
use crate::error::CliError;
use fib_core::{Index, Variant};
use itertools::Itertools;

/// Index used when neither indices nor a range are given
const DEFAULT_INDEX: Index = 10;

/// Upper bound on the number of indices a `--from/--to` range may expand to
const MAX_RANGE_LEN: u64 = 10_000;

/// Resolved runtime configuration
#[derive(Debug)]
pub struct Config {
    /// Indices to compute, deduplicated, in first-seen order
    pub indices: Vec<Index>,
    /// Variants to run, in table order
    pub variants: Vec<Variant>,
    /// Naive variant is skipped above this index
    pub naive_limit: Index,
    /// Number of threads for parallel execution
    pub thread_count: usize,
    /// Parallelization level
    pub parallelize_by: ParallelizeBy,
    /// Whether disagreements are fatal
    pub check: bool,
    /// Quiet mode
    pub quiet: bool,
}

impl Config {
    /// Build config from CLI args
    pub fn from_args(args: Args) -> Result<Self, CliError> {
        let indices = resolve_indices(args.indices, args.from.zip(args.to))?;

        let variants = if args.variants.is_empty() {
            Variant::ALL.to_vec()
        } else {
            args.variants.into_iter().sorted().dedup().collect()
        };

        let thread_count = match args.threads {
            Some(0) => return Err(CliError::Config("--threads must be at least 1".to_string())),
            Some(n) => n,
            None => num_cpus(),
        };

        Ok(Config {
            indices,
            variants,
            naive_limit: args.naive_limit,
            thread_count,
            parallelize_by: args.parallelize_by,
            check: args.check,
            quiet: args.quiet,
        })
    }
}

/// Merge positional indices with an optional inclusive range
fn resolve_indices(
    positional: Vec<Index>,
    range: Option<(Index, Index)>,
) -> Result<Vec<Index>, CliError> {
    let range = match range {
        Some((from, to)) if from > to => {
            return Err(CliError::Config(format!(
                "Invalid range: --from {} is greater than --to {}",
                from, to
            )));
        }
        Some((from, to)) if to.abs_diff(from) >= MAX_RANGE_LEN => {
            return Err(CliError::Config(format!(
                "Range {}..={} is too long (at most {} indices)",
                from, to, MAX_RANGE_LEN
            )));
        }
        Some((from, to)) => Some(from..=to),
        None => None,
    };

    let indices: Vec<Index> = positional
        .into_iter()
        .chain(range.into_iter().flatten())
        .unique()
        .collect();
    if indices.is_empty() {
        Ok(vec![DEFAULT_INDEX])
    } else {
        Ok(indices)
    }
}

/// Get number of CPUs
fn num_cpus() -> usize {
    std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn config(argv: &[&str]) -> Result<Config, CliError> {
        Config::from_args(Args::try_parse_from(argv).unwrap())
    }

    #[test]
    fn test_defaults_to_ten_and_all_variants() {
        let config = config(&["fib"]).unwrap();
        assert_eq!(config.indices, [10]);
        assert_eq!(config.variants, Variant::ALL);
        assert!(config.thread_count >= 1);
    }

    #[test]
    fn test_positional_and_range_merged_without_duplicates() {
        let config = config(&["fib", "7", "3", "--from", "2", "--to", "5"]).unwrap();
        assert_eq!(config.indices, [7, 3, 2, 4, 5]);
    }

    #[test]
    fn test_variants_sorted_and_deduplicated() {
        let config = config(&["fib", "-v", "formula,naive,formula"]).unwrap();
        assert_eq!(config.variants, [Variant::Naive, Variant::Formula]);
    }

    #[test]
    fn test_reversed_range_rejected() {
        let err = config(&["fib", "--from", "9", "--to", "3"]).unwrap_err();
        assert!(matches!(err, CliError::Config(msg) if msg.contains("greater than")));
    }

    #[test]
    fn test_huge_range_rejected() {
        let err = config(&["fib", "--from", "0", "--to", "1000000"]).unwrap_err();
        assert!(matches!(err, CliError::Config(msg) if msg.contains("too long")));
    }

    #[test]
    fn test_zero_threads_rejected() {
        assert!(matches!(
            config(&["fib", "--threads", "0"]),
            Err(CliError::Config(_))
        ));
    }

    #[test]
    fn test_negative_range_kept() {
        let config = config(&["fib", "--from", "-2", "--to", "1"]).unwrap();
        assert_eq!(config.indices, [-2, -1, 0, 1]);
    }
}
