//! Error types for the computation service

use std::fmt;

use thiserror::Error;

use crate::Index;

/// Error returned by every Fibonacci algorithm
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FibError {
    /// The requested index cannot be computed
    #[error("Invalid argument: {reason} (n = {n})")]
    InvalidArgument { n: Index, reason: Reason },
}

impl FibError {
    pub(crate) fn negative(n: Index) -> Self {
        Self::InvalidArgument {
            n,
            reason: Reason::Negative,
        }
    }

    pub(crate) fn too_large(n: Index) -> Self {
        Self::InvalidArgument {
            n,
            reason: Reason::TooLarge,
        }
    }

    /// The index that was rejected
    pub fn index(&self) -> Index {
        match self {
            Self::InvalidArgument { n, .. } => *n,
        }
    }
}

/// Why an index was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Reason {
    /// `n < 0`
    Negative,
    /// The result does not fit in [`Value`](crate::Value)
    TooLarge,
}

impl fmt::Display for Reason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reason::Negative => f.write_str("n must be non-negative"),
            Reason::TooLarge => f.write_str("result does not fit in 64 bits"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_negative() {
        let err = FibError::negative(-3);
        assert_eq!(
            err.to_string(),
            "Invalid argument: n must be non-negative (n = -3)"
        );
        assert_eq!(err.index(), -3);
    }

    #[test]
    fn test_display_too_large() {
        let err = FibError::too_large(94);
        assert_eq!(
            err.to_string(),
            "Invalid argument: result does not fit in 64 bits (n = 94)"
        );
    }
}
