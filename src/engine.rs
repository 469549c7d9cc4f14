//! Bottom-up engine for layered counting recurrences.
//!
//! The engine fills layers `0..=T` left to right. Two storage regimes are
//! supported:
//! 1. `Table`: the whole `dp` table of length `T + 1` is materialised.
//! 2. `Rolling`: only the last `lookback()` layers are kept live.
//!
//! Both regimes call the problem's `forward_step` with identical look-back
//! values, so they return the same answer.

use crate::error::CountError;
use crate::frontier::{Lookback, Window};
use crate::traits::LayeredCount;

/// How many layers the engine keeps while evaluating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Storage {
    /// Keep every layer; `O(T)` memory.
    #[default]
    Table,
    /// Keep the last `lookback()` layers; `O(lookback)` memory.
    Rolling,
}

/// Bottom-up DP engine for a given problem instance `P`.
///
/// Typical usage:
/// ```
/// use stair_dp::{CountEngine, problems::stairs::StairsProblem};
///
/// let engine = CountEngine::new(StairsProblem::new(4));
/// assert_eq!(engine.run().unwrap(), 7);
/// ```
pub struct CountEngine<P: LayeredCount> {
    problem: P,
    storage: Storage,
}

impl<P: LayeredCount> CountEngine<P> {
    /// Create a new engine that materialises the full table.
    pub fn new(problem: P) -> Self {
        Self::with_storage(problem, Storage::default())
    }

    pub fn with_storage(problem: P, storage: Storage) -> Self {
        Self { problem, storage }
    }

    /// Expose immutable reference to the underlying problem.
    pub fn problem(&self) -> &P {
        &self.problem
    }

    pub fn storage(&self) -> Storage {
        self.storage
    }

    /// Compute the value at layer `T`.
    pub fn run(&self) -> Result<P::Count, CountError> {
        #[cfg(feature = "tracing")]
        let span = tracing::info_span!(
            "count_run",
            layers = self.problem.num_layers(),
            storage = ?self.storage
        );
        #[cfg(feature = "tracing")]
        let _enter = span.enter();

        match self.storage {
            Storage::Table => {
                let mut table = self.fill_table()?;
                // fill_table always holds layer 0
                Ok(table.swap_remove(table.len() - 1))
            }
            Storage::Rolling => self.fill_window(),
        }
    }

    /// Compute every layer `0..=T`, regardless of the configured storage.
    pub fn table(&self) -> Result<Vec<P::Count>, CountError> {
        #[cfg(feature = "tracing")]
        let span = tracing::info_span!("count_table", layers = self.problem.num_layers());
        #[cfg(feature = "tracing")]
        let _enter = span.enter();

        self.fill_table()
    }

    fn fill_table(&self) -> Result<Vec<P::Count>, CountError> {
        let t = self.problem.num_layers();
        let mut table = Vec::with_capacity(t + 1);
        table.push(self.problem.init_count());

        for layer in 0..t {
            #[cfg(feature = "tracing")]
            let _step = tracing::trace_span!("forward_step", layer).entered();
            let next = self
                .problem
                .forward_step(layer, &Lookback::Table(&table))?;
            table.push(next);
        }

        Ok(table)
    }

    fn fill_window(&self) -> Result<P::Count, CountError> {
        let t = self.problem.num_layers();
        // strides reaching below layer 0 are never read, so the window never
        // needs more than T + 1 slots
        let capacity = self
            .problem
            .lookback()
            .min(t.saturating_add(1))
            .max(1);
        let mut window = Window::with_capacity(capacity);
        let mut latest = self.problem.init_count();
        window.push(latest.clone());

        for layer in 0..t {
            #[cfg(feature = "tracing")]
            let _step = tracing::trace_span!("forward_step", layer).entered();
            latest = self.problem.forward_step(layer, &window.lookback())?;
            window.push(latest.clone());
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(live_layers = window.len(), "rolling evaluation finished");

        Ok(latest)
    }
}
