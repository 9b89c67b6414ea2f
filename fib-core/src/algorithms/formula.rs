use super::checked_index;
use crate::{FibError, Index, Value};

/// Computes the n-th Fibonacci number with Binet's formula.
///
/// `F(n) = round((φ^n - ψ^n) / √5)` where `φ = (1 + √5) / 2` and `ψ = (1 - √5) / 2`,
/// evaluated in `f64`.
///
/// Rounding error in `φ` grows with `n`: the result is exact up to
/// [`FORMULA_EXACT_MAX`](crate::FORMULA_EXACT_MAX) and off by a few units beyond it.
///
/// # Errors
///
/// [`FibError::InvalidArgument`] if `n < 0` or `n > MAX_INDEX`.
pub fn formula(n: Index) -> Result<Value, FibError> {
    let n = checked_index(n)? as f64;

    let sqrt5 = 5.0_f64.sqrt();
    let phi = (1.0 + sqrt5) / 2.0;
    let psi = (1.0 - sqrt5) / 2.0;

    let value = (phi.powf(n) - psi.powf(n)) / sqrt5;
    Ok(value.round() as Value)
}
