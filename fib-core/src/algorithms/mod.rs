//! The five Fibonacci algorithms.
//!
//! Each submodule exposes one public function with the same contract. Input validation
//! is shared through [`checked_index`] so every variant rejects the same indices with the
//! same error.

mod formula;
mod iterative;
mod memo;
mod naive;
mod tail;

pub use formula::formula;
pub use iterative::iter;
pub use memo::memo;
pub use naive::naive;
pub use tail::{tail, tail_from};

use crate::{FibError, Index, MAX_INDEX};

/// Validates `n` and converts it to a `usize` suitable for indexing and loop bounds.
pub(crate) fn checked_index(n: Index) -> Result<usize, FibError> {
    if n < 0 {
        return Err(FibError::negative(n));
    }
    if n > MAX_INDEX {
        return Err(FibError::too_large(n));
    }
    // 0 <= n <= MAX_INDEX
    Ok(n as usize)
}
