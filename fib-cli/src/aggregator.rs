//! Result aggregator for ordering parallel results
//!
//! Buffers and orders results for streaming output using two min-heaps:
//! - One for expected keys (what we're waiting for)
//! - One for received results (buffered until their turn)
//!
//! Keys are (slot, variant) where slot is the position of the index in the configured
//! index list, so output reads index by index in the order the user gave them.

use crate::executor::ComputeResult;
use fib_core::{Index, Variant};
use std::cmp::Reverse;
use std::collections::BinaryHeap;

/// Position of a result in the output: (slot of its index, variant)
type ResultKey = (usize, Variant);

/// Wrapper for min-heap ordering of results by key
struct OrderedResult(ResultKey, ComputeResult);

impl Ord for OrderedResult {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Reverse ordering for min-heap (smallest first)
        other.0.cmp(&self.0)
    }
}

impl PartialOrd for OrderedResult {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Eq for OrderedResult {}

impl PartialEq for OrderedResult {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

/// Aggregator that buffers results and emits them in key order
pub struct ResultAggregator {
    /// Min-heap of expected keys (next to output is at top)
    expected: BinaryHeap<Reverse<ResultKey>>,
    /// Min-heap of received results waiting to be output
    pending: BinaryHeap<OrderedResult>,
    /// Index -> slot lookup for incoming results
    slots: Vec<Index>,
}

impl ResultAggregator {
    /// Create aggregator expecting every (index, variant) pair, indices in the given order
    pub fn new(indices: &[Index], variants: &[Variant]) -> Self {
        let expected = indices
            .iter()
            .enumerate()
            .flat_map(|(slot, _)| variants.iter().map(move |&variant| Reverse((slot, variant))))
            .collect();

        Self {
            expected,
            pending: BinaryHeap::new(),
            slots: indices.to_vec(),
        }
    }

    fn key_of(&self, result: &ComputeResult) -> ResultKey {
        // Unknown indices sort after everything expected
        let slot = self
            .slots
            .iter()
            .position(|&i| i == result.index)
            .unwrap_or(usize::MAX);
        (slot, result.variant)
    }

    /// Add a result and return any results ready for output (in order)
    pub fn add(&mut self, result: ComputeResult) -> Vec<ComputeResult> {
        let key = self.key_of(&result);
        self.pending.push(OrderedResult(key, result));

        // Emit results while pending min matches expected min
        let mut ready = Vec::new();
        while let (Some(Reverse(next_expected)), Some(top_pending)) =
            (self.expected.peek(), self.pending.peek())
        {
            if top_pending.0 == *next_expected {
                self.expected.pop();
                if let Some(OrderedResult(_, result)) = self.pending.pop() {
                    ready.push(result);
                }
            } else {
                break;
            }
        }
        ready
    }

    /// Drain remaining results in order (for final output)
    pub fn drain(&mut self) -> Vec<ComputeResult> {
        let mut results: Vec<_> = self.pending.drain().collect();
        results.sort_by_key(|o| o.0);
        results.into_iter().map(|o| o.1).collect()
    }

    /// Check if all expected results have been received
    pub fn is_complete(&self) -> bool {
        self.expected.is_empty()
    }
}
