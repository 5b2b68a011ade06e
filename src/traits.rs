//! Core trait definitions.
//!
//! [`SelectionStrategy`] is the seam between callers that compare selection
//! methods (benchmarks, the scale probe, simulation drivers) and the concrete
//! solvers in [`crate::algorithms::knapsack`].

use crate::algorithms::knapsack::{Catalog, Selection};

/// A method for choosing a subset of catalog items under a budget.
///
/// Implementations must:
/// - never return a selection whose total cost exceeds `budget`,
/// - return each catalog entry at most once,
/// - return the empty selection for `budget == 0` or an empty catalog,
/// - be deterministic for identical inputs.
pub trait SelectionStrategy {
    /// Short identifier used in logs and reports.
    fn name(&self) -> &'static str;

    /// Choose items from `catalog` whose costs sum to at most `budget`.
    fn select(&self, catalog: &Catalog, budget: u64) -> Selection;

    /// Whether the strategy always attains the maximum total value.
    fn is_exact(&self) -> bool {
        false
    }
}
