//! Counting problems built on [`LayeredCount`](crate::traits::LayeredCount).
//!
//! - [`stairs`] : ordered compositions of a staircase height from a stride set.

pub mod stairs;
