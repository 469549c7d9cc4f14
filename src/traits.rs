//! Core trait for layered counting recurrences.
//!
//! A counting DP fits the engine when:
//! - the answer lives at layer `T = num_layers()`,
//! - layer 0 holds a fixed seed value, and
//! - the value at layer `i + 1` depends only on a bounded window of the
//!   layers before it (at most `lookback()` of them).
//!
//! The engine owns storage. Implementations only describe a single step and
//! read earlier layers through a [`Lookback`] view, so the same problem can be
//! evaluated against a full table or a constant-size rolling window.

use crate::error::CountError;
use crate::frontier::Lookback;

/// Trait for a layered counting recurrence instance.
///
/// Semantics:
/// - Layers are `0..=T` where `T = num_layers()`.
/// - `init_count()` is the value at layer 0.
/// - `forward_step(i, history)` computes layer `i + 1`, where
///   `history.back(k)` is the value at layer `i + 1 - k`.
pub trait LayeredCount {
    /// Count type stored per layer.
    type Count: Clone;

    /// Number of forward steps `T`.
    fn num_layers(&self) -> usize;

    /// Maximum `k` that `forward_step` passes to [`Lookback::back`].
    ///
    /// Must be at least 1; the rolling engine keeps exactly this many layers.
    fn lookback(&self) -> usize;

    /// Value at layer 0.
    fn init_count(&self) -> Self::Count;

    /// Perform one DP step: from layer `layer` to `layer + 1`.
    ///
    /// Requirements:
    /// - Must only read layers through `history`, never further back than
    ///   `lookback()`.
    /// - Must report arithmetic overflow as [`CountError::Overflow`] for
    ///   layer `layer + 1` rather than wrapping.
    fn forward_step(
        &self,
        layer: usize,
        history: &Lookback<'_, Self::Count>,
    ) -> Result<Self::Count, CountError>;
}
