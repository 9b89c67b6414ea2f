//! Cross-variant agreement check

use crate::executor::{ComputeResult, Outcome};
use fib_core::{FORMULA_EXACT_MAX, Index, Value, Variant};
use itertools::Itertools;

/// A variant whose value differs from the reference for the same index
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Disagreement {
    pub index: Index,
    pub variant: Variant,
    pub value: Value,
    /// Value of the first exact variant that computed this index
    pub expected: Value,
    pub reference: Variant,
}

/// Outcome of comparing all computed values
#[derive(Debug, Default)]
pub struct AgreementReport {
    /// Differences that indicate a bug
    pub mismatches: Vec<Disagreement>,
    /// Closed-form drift above [`FORMULA_EXACT_MAX`]
    pub drifts: Vec<Disagreement>,
}

impl AgreementReport {
    pub fn is_consistent(&self) -> bool {
        self.mismatches.is_empty()
    }
}

/// Compare every computed value against the first exact variant for its index.
///
/// Results for the same index must be adjacent, as the aggregator emits them.
pub fn check(results: &[ComputeResult]) -> AgreementReport {
    let mut report = AgreementReport::default();

    for (index, group) in &results.iter().chunk_by(|r| r.index) {
        let computed: Vec<(Variant, Value)> = group
            .filter_map(|r| match r.outcome {
                Outcome::Computed(value) => Some((r.variant, value)),
                _ => None,
            })
            .collect();

        let Some(&(reference, expected)) = computed.iter().find(|(v, _)| v.is_exact()) else {
            continue;
        };

        for &(variant, value) in &computed {
            if value == expected {
                continue;
            }
            let disagreement = Disagreement {
                index,
                variant,
                value,
                expected,
                reference,
            };
            if variant.is_exact() || index <= FORMULA_EXACT_MAX {
                report.mismatches.push(disagreement);
            } else {
                report.drifts.push(disagreement);
            }
        }
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeDelta;
    use fib_core::FibError;

    fn result(index: Index, variant: Variant, outcome: Outcome) -> ComputeResult {
        ComputeResult {
            index,
            variant,
            outcome,
            duration: TimeDelta::zero(),
        }
    }

    fn computed_row(index: Index) -> Vec<ComputeResult> {
        Variant::ALL
            .into_iter()
            .map(|v| result(index, v, Outcome::Computed(fib_core::iter(index).unwrap())))
            .collect()
    }

    #[test]
    fn test_agreeing_results() {
        let mut results = computed_row(10);
        results.extend(computed_row(11));
        let report = check(&results);
        assert!(report.is_consistent());
        assert!(report.drifts.is_empty());
    }

    #[test]
    fn test_mismatch_detected() {
        let mut results = computed_row(10);
        results[2].outcome = Outcome::Computed(54);
        let report = check(&results);
        assert_eq!(
            report.mismatches,
            [Disagreement {
                index: 10,
                variant: Variant::Memo,
                value: 54,
                expected: 55,
                reference: Variant::Naive,
            }]
        );
    }

    #[test]
    fn test_formula_drift_above_bound_is_not_a_mismatch() {
        let n = 80;
        let results = vec![
            result(n, Variant::Naive, Outcome::Skipped { limit: 35 }),
            result(n, Variant::Iterative, Outcome::Computed(fib_core::iter(n).unwrap())),
            result(n, Variant::Formula, Outcome::Computed(fib_core::iter(n).unwrap() + 3)),
        ];
        let report = check(&results);
        assert!(report.is_consistent());
        assert_eq!(report.drifts.len(), 1);
        assert_eq!(report.drifts[0].reference, Variant::Iterative);
    }

    #[test]
    fn test_formula_mismatch_within_bound_is_a_mismatch() {
        let results = vec![
            result(20, Variant::Tail, Outcome::Computed(6765)),
            result(20, Variant::Formula, Outcome::Computed(6766)),
        ];
        assert_eq!(check(&results).mismatches.len(), 1);
    }

    #[test]
    fn test_failures_and_formula_only_ignored() {
        let results = vec![
            result(-1, Variant::Memo, Outcome::Failed(fib_core::memo(-1).unwrap_err())),
            result(
                100,
                Variant::Iterative,
                Outcome::Failed(FibError::InvalidArgument {
                    n: 100,
                    reason: fib_core::Reason::TooLarge,
                }),
            ),
            result(5, Variant::Formula, Outcome::Computed(4)),
        ];
        let report = check(&results);
        assert!(report.is_consistent());
        assert!(report.drifts.is_empty());
    }
}
