//! Staircase climbing as a layered counting DP.
//!
//! Layer `i` holds the number of ordered compositions of `i` whose parts are
//! drawn from a stride set `S`:
//!
//! ```text
//! dp[0] = 1
//! dp[i] = Σ_{s ∈ S, s ≤ i} dp[i - s]
//! ```
//!
//! With the classic strides `{1, 2, 3}` this is the tribonacci-style sequence
//! 1, 1, 2, 4, 7, 13, 24, ...
//!
//! `count`/`counts` use `u128` with checked addition; the classic sequence
//! fits up to 146 steps. `exact_count` uses `BigUint` and never overflows.

use num_bigint::BigUint;

use crate::engine::{CountEngine, Storage};
use crate::error::CountError;
use crate::frontier::Lookback;
use crate::traits::LayeredCount;

/// A validated, sorted, duplicate-free set of stride lengths.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Strides {
    sizes: Vec<usize>,
}

impl Strides {
    /// Build a stride set, sorting and collapsing duplicates.
    pub fn new<I: IntoIterator<Item = usize>>(sizes: I) -> Result<Self, CountError> {
        let mut sizes: Vec<usize> = sizes.into_iter().collect();
        sizes.sort_unstable();
        sizes.dedup();
        match sizes.first() {
            None => Err(CountError::EmptyStrides),
            Some(0) => Err(CountError::ZeroStride),
            Some(_) => Ok(Self { sizes }),
        }
    }

    /// Strides of 1, 2 and 3 steps.
    pub fn classic() -> Self {
        Self {
            sizes: vec![1, 2, 3],
        }
    }

    pub fn as_slice(&self) -> &[usize] {
        &self.sizes
    }

    /// Longest stride; also the look-back of the recurrence.
    pub fn max(&self) -> usize {
        // non-empty by construction
        self.sizes.last().copied().unwrap_or(1)
    }
}

impl Default for Strides {
    fn default() -> Self {
        Self::classic()
    }
}

#[derive(Clone, Debug)]
pub struct StairsProblem {
    pub steps: usize,
    pub strides: Strides,
}

/// One way up the staircase: the strides taken, bottom to top.
pub type Climb = Vec<usize>;

impl StairsProblem {
    /// Staircase of `steps` steps climbed with the classic strides.
    pub fn new(steps: usize) -> Self {
        Self::with_strides(steps, Strides::classic())
    }

    pub fn with_strides(steps: usize, strides: Strides) -> Self {
        Self { steps, strides }
    }

    /// Number of distinct climbs, evaluated in constant space.
    pub fn count(&self) -> Result<u128, CountError> {
        CountEngine::with_storage(self.clone(), Storage::Rolling).run()
    }

    /// Number of distinct climbs as an arbitrary-precision integer.
    pub fn exact_count(&self) -> BigUint {
        // big-integer addition cannot overflow, so evaluation has no error path
        CountEngine::with_storage(Exact(self), Storage::Rolling)
            .run()
            .unwrap_or_default()
    }

    /// `dp[0..=steps]`.
    pub fn counts(&self) -> Result<Vec<u128>, CountError> {
        CountEngine::new(self.clone()).table()
    }

    /// Reconstruct the `rank`-th climb in lexicographic order (0-based).
    ///
    /// Climbs compare stride by stride, so with strides `{1, 2, 3}` and four
    /// steps rank 0 is `[1, 1, 1, 1]` and rank 6 is `[3, 1]`.
    pub fn unrank(&self, rank: u128) -> Result<Climb, CountError> {
        let table = self.counts()?;
        unrank_with_table(&table, self.strides.as_slice(), self.steps, rank)
    }

    /// Iterate over every climb in lexicographic order.
    ///
    /// The table is computed once up front; the iterator yields
    /// `count()` climbs, which grows exponentially with `steps`.
    pub fn climbs(&self) -> Result<Climbs<'_>, CountError> {
        let table = self.counts()?;
        Ok(Climbs {
            problem: self,
            table,
            next_rank: 0,
        })
    }
}

impl LayeredCount for StairsProblem {
    type Count = u128;

    fn num_layers(&self) -> usize {
        self.steps
    }

    fn lookback(&self) -> usize {
        self.strides.max()
    }

    fn init_count(&self) -> Self::Count {
        // one way to stand at the bottom: take no strides
        1
    }

    fn forward_step(
        &self,
        layer: usize,
        history: &Lookback<'_, Self::Count>,
    ) -> Result<Self::Count, CountError> {
        let mut total: u128 = 0;
        for &s in self.strides.as_slice() {
            let Some(&ways) = history.back(s) else {
                // strides are sorted; longer ones land below layer 0 too
                break;
            };
            total = total
                .checked_add(ways)
                .ok_or(CountError::Overflow { layer: layer + 1 })?;
        }
        Ok(total)
    }
}

/// The same recurrence evaluated with `BigUint` counts.
struct Exact<'a>(&'a StairsProblem);

impl LayeredCount for Exact<'_> {
    type Count = BigUint;

    fn num_layers(&self) -> usize {
        self.0.steps
    }

    fn lookback(&self) -> usize {
        self.0.strides.max()
    }

    fn init_count(&self) -> Self::Count {
        BigUint::from(1u8)
    }

    fn forward_step(
        &self,
        _layer: usize,
        history: &Lookback<'_, Self::Count>,
    ) -> Result<Self::Count, CountError> {
        let mut total = BigUint::default();
        for &s in self.0.strides.as_slice() {
            let Some(ways) = history.back(s) else {
                break;
            };
            total += ways;
        }
        Ok(total)
    }
}

/// Iterator over climbs in lexicographic order. See [`StairsProblem::climbs`].
pub struct Climbs<'a> {
    problem: &'a StairsProblem,
    table: Vec<u128>,
    next_rank: u128,
}

impl Iterator for Climbs<'_> {
    type Item = Climb;

    fn next(&mut self) -> Option<Self::Item> {
        let climb = unrank_with_table(
            &self.table,
            self.problem.strides.as_slice(),
            self.problem.steps,
            self.next_rank,
        )
        .ok()?;
        self.next_rank += 1;
        Some(climb)
    }
}

/// Walk down from `steps`, picking at each point the stride whose block of
/// completions contains `rank`. `table[r]` counts the completions of `r`
/// remaining steps.
fn unrank_with_table(
    table: &[u128],
    strides: &[usize],
    steps: usize,
    rank: u128,
) -> Result<Climb, CountError> {
    let total = table.get(steps).copied().unwrap_or(0);
    if rank >= total {
        return Err(CountError::RankOutOfRange { rank, total });
    }

    let mut rank = rank;
    let mut remaining = steps;
    let mut climb = Climb::new();
    while remaining > 0 {
        let mut chosen = None;
        for &s in strides {
            if s > remaining {
                break;
            }
            let block = table[remaining - s];
            if rank < block {
                chosen = Some(s);
                break;
            }
            rank -= block;
        }
        // rank < table[remaining] = Σ blocks, so some stride is always chosen
        let Some(s) = chosen else {
            return Err(CountError::RankOutOfRange { rank, total });
        };
        climb.push(s);
        remaining -= s;
    }
    Ok(climb)
}
