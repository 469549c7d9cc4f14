//! Staircase counting with bottom-up dynamic programming.
//!
//! How many ways are there to climb `n` steps when each stride covers 1, 2
//! or 3 steps? Order matters, so the answer is the number of ordered
//! compositions of `n` with parts in `{1, 2, 3}`:
//!
//! ```text
//! dp[0] = 1
//! dp[i] = dp[i-1] + dp[i-2] + dp[i-3]    (negative indices contribute 0)
//! ```
//!
//! ## Quick start
//! ```
//! use num_bigint::BigUint;
//! use stair_dp::step_count;
//!
//! assert_eq!(step_count(4), BigUint::from(7u8));
//! assert_eq!(step_count(0), BigUint::from(1u8));
//! assert_eq!(step_count(-3), BigUint::from(0u8));
//! ```
//!
//! ## Layout
//! 1. [`LayeredCount`] models a recurrence whose next layer depends on a
//!    bounded window of earlier layers.
//! 2. [`CountEngine`] fills the layers bottom-up, either keeping the whole
//!    table or only a rolling window.
//! 3. [`problems::stairs`] implements the staircase recurrence for any stride
//!    set and can reconstruct individual climbs.
//!
//! [`step_count`] is exact for every `n`. The engine's fixed-width path
//! counts in `u128` and reports overflow as [`CountError::Overflow`] instead
//! of wrapping; the classic stride set fits there up to 146 steps.

pub mod builder;
pub mod engine;
pub mod error;
pub mod frontier;
pub mod problems;
pub mod traits;

pub use crate::builder::CountEngineBuilder;
pub use crate::engine::{CountEngine, Storage};
pub use crate::error::CountError;
pub use crate::traits::LayeredCount;

use num_bigint::BigUint;

use crate::problems::stairs::StairsProblem;

/// Largest `n` for which [`checked_step_count`] fits in a `u128`.
pub const MAX_STEPS: i64 = 146;

/// Number of ways to climb `n` steps with strides of 1, 2 or 3.
///
/// Returns 0 for negative `n` and 1 for `n == 0`. The result is exact for
/// any `n`; counts that fit in a `u128` take the fixed-width path.
pub fn step_count(n: i64) -> BigUint {
    let Ok(steps) = usize::try_from(n) else {
        return BigUint::default();
    };
    let problem = StairsProblem::new(steps);
    match problem.count() {
        Ok(ways) => BigUint::from(ways),
        Err(_) => problem.exact_count(),
    }
}

/// Fixed-width variant of [`step_count`]; reports overflow past
/// [`MAX_STEPS`] as an error.
pub fn checked_step_count(n: i64) -> Result<u128, CountError> {
    let Ok(steps) = usize::try_from(n) else {
        return Ok(0);
    };
    StairsProblem::new(steps).count()
}
