//! Selecting an algorithm at runtime

use std::fmt;
use std::str::FromStr;

use log::debug;
use thiserror::Error;

use crate::{FibError, Index, Value, algorithms};

/// One of the five Fibonacci algorithms.
///
/// Variants are ordered the way they are listed in [`Variant::ALL`], which is also the
/// order the demo table prints them in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Variant {
    /// Unmemoized recursion, see [`naive`](crate::naive)
    Naive,
    /// Accumulator-passing recursion, see [`tail`](crate::tail)
    Tail,
    /// Top-down memoized recursion, see [`memo`](crate::memo)
    Memo,
    /// Bottom-up loop, see [`iter`](crate::iter)
    Iterative,
    /// Binet's closed form, see [`formula`](crate::formula)
    Formula,
}

impl Variant {
    /// All variants, slowest first.
    pub const ALL: [Variant; 5] = [
        Variant::Naive,
        Variant::Tail,
        Variant::Memo,
        Variant::Iterative,
        Variant::Formula,
    ];

    /// Computes `F(n)` with this variant's algorithm.
    pub fn compute(self, n: Index) -> Result<Value, FibError> {
        debug!("computing F({n}) with {self}");
        match self {
            Variant::Naive => algorithms::naive(n),
            Variant::Tail => algorithms::tail(n),
            Variant::Memo => algorithms::memo(n),
            Variant::Iterative => algorithms::iter(n),
            Variant::Formula => algorithms::formula(n),
        }
    }

    /// Short machine-readable name, accepted by [`FromStr`].
    pub fn name(self) -> &'static str {
        match self {
            Variant::Naive => "naive",
            Variant::Tail => "tail",
            Variant::Memo => "memo",
            Variant::Iterative => "iter",
            Variant::Formula => "formula",
        }
    }

    /// Human-readable label for tables.
    pub fn label(self) -> &'static str {
        match self {
            Variant::Naive => "Naive Recursive",
            Variant::Tail => "Tail Recursive",
            Variant::Memo => "Memoization",
            Variant::Iterative => "Iterative",
            Variant::Formula => "Closed Formula",
        }
    }

    pub fn time_complexity(self) -> &'static str {
        match self {
            Variant::Naive => "O(2^n)",
            Variant::Tail | Variant::Memo | Variant::Iterative => "O(n)",
            Variant::Formula => "O(1)",
        }
    }

    pub fn space_complexity(self) -> &'static str {
        match self {
            Variant::Naive | Variant::Tail | Variant::Memo => "O(n)",
            Variant::Iterative | Variant::Formula => "O(1)",
        }
    }

    /// Whether this variant is exact for every index up to [`MAX_INDEX`](crate::MAX_INDEX).
    pub fn is_exact(self) -> bool {
        !matches!(self, Variant::Formula)
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when parsing an unknown variant name
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown variant '{0}' (expected one of: naive, tail, memo, iter, formula)")]
pub struct ParseVariantError(pub String);

impl FromStr for Variant {
    type Err = ParseVariantError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Variant::ALL
            .into_iter()
            .find(|v| v.name().eq_ignore_ascii_case(wanted))
            .or_else(|| match wanted.to_ascii_lowercase().as_str() {
                "iterative" => Some(Variant::Iterative),
                "memoized" => Some(Variant::Memo),
                _ => None,
            })
            .ok_or_else(|| ParseVariantError(s.to_string()))
    }
}
