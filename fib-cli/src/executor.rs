//! Parallel executor for running Fibonacci variants

use crate::cli::ParallelizeBy;
use crate::config::Config;
use crate::error::ExecutorError;
use chrono::TimeDelta;
use fib_core::{FibError, Index, Value, Variant};
use itertools::Itertools;
use log::info;
use rayon::prelude::*;
use std::sync::mpsc::Sender;
use std::time::Instant;

/// Outcome of a single work item
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Computed(Value),
    Failed(FibError),
    /// Naive variant not run because the index exceeds the configured limit
    Skipped { limit: Index },
}

/// Result from a single (index, variant) execution
#[derive(Debug, Clone)]
pub struct ComputeResult {
    pub index: Index,
    pub variant: Variant,
    pub outcome: Outcome,
    pub duration: TimeDelta,
}

/// Work item representing one variant to run for one index
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkItem {
    pub index: Index,
    pub variant: Variant,
}

/// Parallel executor for running work items
pub struct Executor {
    indices: Vec<Index>,
    variants: Vec<Variant>,
    naive_limit: Index,
    parallelize_by: ParallelizeBy,
    thread_pool: rayon::ThreadPool,
}

impl Executor {
    /// Create a new executor from config
    pub fn new(config: &Config) -> Result<Self, ExecutorError> {
        let thread_pool = rayon::ThreadPoolBuilder::new()
            .num_threads(config.thread_count)
            .build()
            .map_err(|e| ExecutorError::ThreadPool(e.to_string()))?;

        Ok(Self {
            indices: config.indices.clone(),
            variants: config.variants.clone(),
            naive_limit: config.naive_limit,
            parallelize_by: config.parallelize_by,
            thread_pool,
        })
    }

    /// Collect work items, index-major in configured variant order
    pub fn collect_work_items(&self) -> Vec<WorkItem> {
        self.indices
            .iter()
            .cartesian_product(self.variants.iter())
            .map(|(&index, &variant)| WorkItem { index, variant })
            .collect()
    }

    /// Execute all work items and send results to channel
    pub fn execute(&self, tx: Sender<ComputeResult>) -> Result<(), ExecutorError> {
        let work_items = self.collect_work_items();
        let naive_limit = self.naive_limit;

        match self.parallelize_by {
            ParallelizeBy::Sequential => work_items
                .iter()
                .try_for_each(|work| send(&tx, run_item(work, naive_limit))),
            ParallelizeBy::Index => {
                let by_index: Vec<Vec<WorkItem>> = work_items
                    .into_iter()
                    .chunk_by(|w| w.index)
                    .into_iter()
                    .map(|(_, group)| group.collect())
                    .collect();

                self.thread_pool.install(|| {
                    by_index.into_par_iter().try_for_each_with(tx, |tx, items| {
                        items
                            .iter()
                            .try_for_each(|work| send(tx, run_item(work, naive_limit)))
                    })
                })
            }
            ParallelizeBy::Variant => self.thread_pool.install(|| {
                work_items
                    .into_par_iter()
                    .try_for_each_with(tx, |tx, work| send(tx, run_item(&work, naive_limit)))
            }),
        }
    }
}

fn send(tx: &Sender<ComputeResult>, result: ComputeResult) -> Result<(), ExecutorError> {
    tx.send(result).map_err(|_| ExecutorError::ChannelSend)
}

/// Run a single work item, timing the call
fn run_item(work: &WorkItem, naive_limit: Index) -> ComputeResult {
    let WorkItem { index, variant } = *work;

    if variant == Variant::Naive && index > naive_limit {
        info!(
            "skipping naive F({}): above naive limit {}",
            index, naive_limit
        );
        return ComputeResult {
            index,
            variant,
            outcome: Outcome::Skipped { limit: naive_limit },
            duration: TimeDelta::zero(),
        };
    }

    let start = Instant::now();
    let outcome = match variant.compute(index) {
        Ok(value) => Outcome::Computed(value),
        Err(e) => Outcome::Failed(e),
    };

    ComputeResult {
        index,
        variant,
        outcome,
        duration: TimeDelta::from_std(start.elapsed()).unwrap_or(TimeDelta::MAX),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fib_core::Reason;

    fn test_config(indices: Vec<Index>, parallelize_by: ParallelizeBy) -> Config {
        Config {
            indices,
            variants: Variant::ALL.to_vec(),
            naive_limit: 20,
            thread_count: 4,
            parallelize_by,
            check: false,
            quiet: true,
        }
    }

    fn run(config: &Config) -> Vec<ComputeResult> {
        let executor = Executor::new(config).unwrap();
        let (tx, rx) = std::sync::mpsc::channel();
        executor.execute(tx).unwrap();
        rx.into_iter().collect()
    }

    #[test]
    fn test_work_items_index_major() {
        let executor = Executor::new(&test_config(vec![3, 1], ParallelizeBy::Sequential)).unwrap();
        let items = executor.collect_work_items();
        assert_eq!(items.len(), 10);
        assert_eq!(
            items[0],
            WorkItem {
                index: 3,
                variant: Variant::Naive
            }
        );
        assert_eq!(
            items[5],
            WorkItem {
                index: 1,
                variant: Variant::Naive
            }
        );
    }

    #[test]
    fn test_sequential_preserves_order() {
        let results = run(&test_config(vec![10, 0], ParallelizeBy::Sequential));
        let keys: Vec<_> = results.iter().map(|r| (r.index, r.variant)).collect();
        let expected: Vec<(Index, Variant)> = [10, 0]
            .into_iter()
            .cartesian_product(Variant::ALL)
            .collect();
        assert_eq!(keys, expected);
        assert!(
            results
                .iter()
                .filter(|r| r.index == 10)
                .all(|r| r.outcome == Outcome::Computed(55))
        );
    }

    #[test]
    fn test_parallel_modes_produce_every_result() {
        for mode in [ParallelizeBy::Index, ParallelizeBy::Variant] {
            let indices: Vec<Index> = (0..=20).collect();
            let results = run(&test_config(indices, mode));
            assert_eq!(results.len(), 21 * 5);
            for r in &results {
                assert_eq!(
                    r.outcome,
                    Outcome::Computed(fib_core::iter(r.index).unwrap())
                );
            }
        }
    }

    #[test]
    fn test_naive_skipped_above_limit() {
        let results = run(&test_config(vec![21], ParallelizeBy::Sequential));
        let naive = results.iter().find(|r| r.variant == Variant::Naive).unwrap();
        assert_eq!(naive.outcome, Outcome::Skipped { limit: 20 });
        assert!(
            results
                .iter()
                .filter(|r| r.variant != Variant::Naive)
                .all(|r| r.outcome == Outcome::Computed(10946))
        );
    }

    #[test]
    fn test_invalid_index_reported_per_item() {
        let results = run(&test_config(vec![-1], ParallelizeBy::Variant));
        assert_eq!(results.len(), 5);
        for r in results {
            assert!(matches!(
                r.outcome,
                Outcome::Failed(FibError::InvalidArgument {
                    reason: Reason::Negative,
                    ..
                })
            ));
        }
    }

    #[test]
    fn test_dropped_receiver_is_an_error() {
        let executor = Executor::new(&test_config(vec![1], ParallelizeBy::Sequential)).unwrap();
        let (tx, rx) = std::sync::mpsc::channel();
        drop(rx);
        assert!(matches!(executor.execute(tx), Err(ExecutorError::ChannelSend)));
    }
}
