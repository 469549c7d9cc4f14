//! Error type shared by the engine and the built-in problems.

/// Failures raised while building or evaluating a layered count.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CountError {
    /// The value at `layer` does not fit in the count type.
    #[error("count overflowed at layer {layer}")]
    Overflow { layer: usize },

    #[error("stride set must contain at least one stride")]
    EmptyStrides,

    #[error("stride set must not contain a zero stride")]
    ZeroStride,

    /// Asked for a climb past the last one.
    #[error("rank {rank} is out of range for {total} climbs")]
    RankOutOfRange { rank: u128, total: u128 },
}
