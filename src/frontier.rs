//! Look-back storage handed to each forward step.
//!
//! [`Window`] is the bounded FIFO used by rolling evaluation; [`Lookback`]
//! borrows either a table prefix or a window and answers "what was the value
//! `k` layers ago".

use std::collections::VecDeque;

/// Fixed-capacity FIFO of the most recent layer values.
#[derive(Debug, Clone)]
pub struct Window<C> {
    values: VecDeque<C>,
    capacity: usize,
}

impl<C> Window<C> {
    /// # Panics
    /// Panics if `capacity == 0`.
    pub fn with_capacity(capacity: usize) -> Self {
        assert!(capacity > 0, "window capacity must be positive");
        Self {
            values: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Append the newest value, evicting the oldest one when full.
    pub fn push(&mut self, value: C) {
        if self.values.len() == self.capacity {
            self.values.pop_front();
        }
        self.values.push_back(value);
    }

    /// Most recently pushed value.
    #[inline]
    pub fn latest(&self) -> Option<&C> {
        self.values.back()
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn lookback(&self) -> Lookback<'_, C> {
        Lookback::Window(&self.values)
    }
}

/// Read-only view of the layers preceding the one being computed.
#[derive(Debug, Clone, Copy)]
pub enum Lookback<'a, C> {
    /// Every layer from 0 up to the latest one.
    Table(&'a [C]),
    /// Only the most recent layers, oldest first.
    Window(&'a VecDeque<C>),
}

impl<'a, C> Lookback<'a, C> {
    /// Value `k` layers back from the layer being computed (`k >= 1`).
    ///
    /// Returns `None` for `k == 0` and for layers before 0.
    pub fn back(&self, k: usize) -> Option<&'a C> {
        if k == 0 {
            return None;
        }
        match *self {
            Lookback::Table(values) => values.len().checked_sub(k).map(|i| &values[i]),
            Lookback::Window(values) => values.len().checked_sub(k).and_then(|i| values.get(i)),
        }
    }

    /// Number of layers visible through this view.
    pub fn len(&self) -> usize {
        match *self {
            Lookback::Table(values) => values.len(),
            Lookback::Window(values) => values.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
