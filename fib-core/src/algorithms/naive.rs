use super::checked_index;
use crate::{FibError, Index, Value};

/// Computes the n-th Fibonacci number with plain recursion.
///
/// Runs in O(2^n) time and is only practical for small `n` (a few seconds around
/// `n = 40`). It is here to show what the other variants improve on.
///
/// # Errors
///
/// [`FibError::InvalidArgument`] if `n < 0` or `n > MAX_INDEX`.
pub fn naive(n: Index) -> Result<Value, FibError> {
    checked_index(n).map(recurse)
}

fn recurse(n: usize) -> Value {
    if n <= 1 {
        return n as Value;
    }
    recurse(n - 1) + recurse(n - 2)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Reason;

    #[test]
    fn test_base_cases() {
        assert_eq!(naive(0), Ok(0));
        assert_eq!(naive(1), Ok(1));
    }

    #[test]
    fn test_small_values() {
        let expected = [0, 1, 1, 2, 3, 5, 8, 13, 21, 34, 55];
        for (n, want) in expected.into_iter().enumerate() {
            assert_eq!(naive(n as Index), Ok(want), "naive({n})");
        }
        assert_eq!(naive(25), Ok(75025));
    }

    #[test]
    fn test_negative_rejected() {
        assert!(matches!(
            naive(-1),
            Err(FibError::InvalidArgument {
                n: -1,
                reason: Reason::Negative
            })
        ));
    }

    #[test]
    fn test_too_large_rejected_without_recursing() {
        assert!(matches!(
            naive(1_000),
            Err(FibError::InvalidArgument {
                reason: Reason::TooLarge,
                ..
            })
        ));
    }
}
