use super::checked_index;
use crate::{FibError, Index, Value};

/// Computes the n-th Fibonacci number with accumulator-passing recursion.
///
/// Equivalent to [`tail_from`]`(n, 0, 1)`.
///
/// # Errors
///
/// [`FibError::InvalidArgument`] if `n < 0` or `n > MAX_INDEX`.
pub fn tail(n: Index) -> Result<Value, FibError> {
    tail_from(n, 0, 1)
}

/// Tail-recursive Fibonacci with explicit seeds.
///
/// `a` is the term at position `n - 2` and `b` the term at position `n - 1` relative to
/// the start of the walk, so `tail_from(n, 0, 1)` is `F(n)` and other seeds produce
/// other Fibonacci-like sequences (`tail_from(n, 2, 1)` gives the Lucas numbers).
///
/// The recursive call is in tail position, but Rust does not guarantee tail-call
/// elimination: stack depth grows with `n`, which is why `n` stays bounded by
/// [`MAX_INDEX`](crate::MAX_INDEX).
///
/// # Errors
///
/// [`FibError::InvalidArgument`] if `n < 0`, `n > MAX_INDEX`, or the seeds make an
/// intermediate sum overflow.
pub fn tail_from(n: Index, a: Value, b: Value) -> Result<Value, FibError> {
    let steps = checked_index(n)?;
    walk(steps, a, b).ok_or(FibError::too_large(n))
}

fn walk(n: usize, a: Value, b: Value) -> Option<Value> {
    match n {
        0 => Some(a),
        1 => Some(b),
        _ => walk(n - 1, b, a.checked_add(b)?),
    }
}
