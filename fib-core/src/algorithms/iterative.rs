use super::checked_index;
use crate::{FibError, Index, Value};

/// Computes the n-th Fibonacci number with a bottom-up loop.
///
/// O(n) time and O(1) extra space, with no recursion. This is the variant to reach for
/// outside of teaching.
///
/// # Errors
///
/// [`FibError::InvalidArgument`] if `n < 0` or `n > MAX_INDEX`.
pub fn iter(n: Index) -> Result<Value, FibError> {
    let n = checked_index(n)?;
    if n <= 1 {
        return Ok(n as Value);
    }

    let mut a: Value = 0;
    let mut b: Value = 1;
    for _ in 2..=n {
        let next = a + b;
        a = b;
        b = next;
    }
    Ok(b)
}
