//! Fibonacci Computation Service
//!
//! Five interchangeable algorithms computing the n-th Fibonacci number behind one
//! contract: given an [`Index`] `n`, return `F(n)` as a [`Value`], or fail with
//! [`FibError::InvalidArgument`] when `n` is negative or too large for the result type.
//!
//! # Algorithms
//!
//! | Function | Approach | Time | Space |
//! |---|---|---|---|
//! | [`naive`] | unmemoized recursion | O(2^n) | O(n) stack |
//! | [`tail`] | recursion carrying two accumulators | O(n) | O(n) stack |
//! | [`memo`] | top-down recursion over a call-local memo table | O(n) | O(n) |
//! | [`iter`] | bottom-up loop over two rolling values | O(n) | O(1) |
//! | [`formula`] | Binet's closed form in `f64` | O(1) | O(1) |
//!
//! Every call is a pure function of its input. Nothing is cached between calls, so all
//! of them are reentrant and can be called from any number of threads.
//!
//! # Example
//!
//! ```rust
//! use fib_core::{FibError, Reason, Variant};
//!
//! assert_eq!(fib_core::iter(10), Ok(55));
//!
//! for variant in Variant::ALL {
//!     assert_eq!(variant.compute(20), Ok(6765));
//! }
//!
//! assert!(matches!(
//!     fib_core::memo(-1),
//!     Err(FibError::InvalidArgument { n: -1, reason: Reason::Negative })
//! ));
//! ```
//!
//! # Closed-form accuracy
//!
//! [`formula`] rounds a floating-point result. It is exact up to [`FORMULA_EXACT_MAX`]
//! and drifts by a few units above it. This is a property of the algorithm and is left
//! as is.

mod algorithms;
mod error;
mod variant;

pub use algorithms::{formula, iter, memo, naive, tail, tail_from};
pub use error::{FibError, Reason};
pub use variant::{ParseVariantError, Variant};

/// Index of a Fibonacci term. Signed so that negative requests can be rejected.
pub type Index = i64;

/// A Fibonacci number.
pub type Value = u64;

/// Largest index whose Fibonacci number fits in a [`Value`]. `F(93) = 12200160415121876738`.
pub const MAX_INDEX: Index = 93;

/// Largest index for which [`formula`] agrees with the exact algorithms.
pub const FORMULA_EXACT_MAX: Index = 70;
