//! Budget-constrained item selection (0/1 knapsack).
//!
//! Two solvers share the same inputs and output:
//! - [`greedy_select`]: value-to-cost ratio ordering and a single scan.
//!   O(n log n), not guaranteed optimal.
//! - [`optimal_select`]: table-filling DP over `(item prefix, budget)` with an
//!   inclusion table for reconstruction. O(n · budget) time and space.
//!
//! [`optimal_value`] keeps a single DP row when only the optimum is needed.

use std::cmp::Ordering;
use std::collections::HashMap;

use crate::traits::SelectionStrategy;
use crate::utils::ratio_cmp;

/// One catalog entry.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Item {
    pub name: String,
    pub cost: u64,
    pub value: u64,
}

impl Item {
    pub fn new(name: impl Into<String>, cost: u64, value: u64) -> Self {
        Self {
            name: name.into(),
            cost,
            value,
        }
    }
}

/// Items keyed by name, kept in insertion order.
///
/// Insertion order is the catalog order that [`optimal_select`] reports
/// its selection in. Re-inserting an existing name replaces that entry in
/// place.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Catalog {
    items: Vec<Item>,
    /// name -> position in `items`
    index: HashMap<String, usize>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace `name`. Returns the previous entry, if any.
    pub fn insert(&mut self, name: impl Into<String>, cost: u64, value: u64) -> Option<Item> {
        let item = Item::new(name, cost, value);
        match self.index.get(&item.name) {
            Some(&pos) => Some(std::mem::replace(&mut self.items[pos], item)),
            None => {
                self.index.insert(item.name.clone(), self.items.len());
                self.items.push(item);
                None
            }
        }
    }

    pub fn get(&self, name: &str) -> Option<&Item> {
        self.index.get(name).map(|&pos| &self.items[pos])
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Item> {
        self.items.iter()
    }

    pub fn as_slice(&self) -> &[Item] {
        &self.items
    }
}

impl<S: Into<String>> FromIterator<(S, u64, u64)> for Catalog {
    fn from_iter<I: IntoIterator<Item = (S, u64, u64)>>(iter: I) -> Self {
        let mut catalog = Catalog::new();
        for (name, cost, value) in iter {
            catalog.insert(name, cost, value);
        }
        catalog
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Item;
    type IntoIter = std::slice::Iter<'a, Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

/// Chosen item names with their summed cost and value.
///
/// Totals saturate at `u64::MAX` instead of wrapping.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Selection {
    pub items: Vec<String>,
    pub total_cost: u64,
    pub total_value: u64,
}

impl Selection {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.items.iter().any(|n| n == name)
    }

    fn push(&mut self, item: &Item) {
        self.items.push(item.name.clone());
        self.total_cost = self.total_cost.saturating_add(item.cost);
        self.total_value = self.total_value.saturating_add(item.value);
    }
}

/// Greedy priority: ratio desc, then value desc, then cost asc.
fn greedy_priority(a: &Item, b: &Item) -> Ordering {
    ratio_cmp(b.value, b.cost, a.value, a.cost)
        .then_with(|| b.value.cmp(&a.value))
        .then_with(|| a.cost.cmp(&b.cost))
}

/// Widest DP column worth filling: above the summed cost of every item that
/// fits `budget`, each table entry equals its value at that sum.
fn table_width(catalog: &Catalog, budget: u64) -> usize {
    let reachable = catalog
        .iter()
        .filter(|item| item.cost <= budget)
        .fold(0u64, |acc, item| acc.saturating_add(item.cost));
    usize::try_from(budget.min(reachable)).unwrap_or(usize::MAX - 1)
}

/// Heuristic selection by value-to-cost ratio.
///
/// Items are visited in priority order (see module docs); every item that
/// still fits the remaining budget is accepted, and the scan continues past
/// items that do not fit. Equal-priority items keep catalog order.
pub fn greedy_select(catalog: &Catalog, budget: u64) -> Selection {
    #[cfg(feature = "tracing")]
    let span = tracing::trace_span!("greedy_select", items = catalog.len(), budget);
    #[cfg(feature = "tracing")]
    let _enter = span.enter();

    if budget == 0 || catalog.is_empty() {
        return Selection::default();
    }

    let mut order: Vec<&Item> = catalog.iter().collect();
    order.sort_by(|a, b| greedy_priority(a, b));

    let mut selection = Selection::default();
    let mut remaining = budget;
    for item in order {
        if item.cost <= remaining {
            remaining -= item.cost;
            selection.push(item);
        }
    }
    selection
}

/// Exact 0/1 knapsack by dynamic programming.
///
/// `best[i][b]` is the maximum value using the first `i` items within budget
/// `b`; `take[i][b]` records whether item `i` is part of that optimum. Item
/// `i` is taken only when it strictly improves on leaving it out, so on
/// equal-value ties the earlier item is kept. The chosen names come back in
/// catalog order.
///
/// The table is never wider than the total cost of the items that fit, so a
/// budget far above that total costs no extra memory.
pub fn optimal_select(catalog: &Catalog, budget: u64) -> Selection {
    if budget == 0 || catalog.is_empty() {
        return Selection::default();
    }

    #[cfg(feature = "tracing")]
    let span = tracing::trace_span!("optimal_select", items = catalog.len(), budget);
    #[cfg(feature = "tracing")]
    let _enter = span.enter();

    let items = catalog.as_slice();
    let n = items.len();
    let cap = table_width(catalog, budget);

    let mut best = vec![vec![0u64; cap + 1]; n + 1];
    let mut take = vec![vec![false; cap + 1]; n + 1];

    for i in 1..=n {
        let cost = items[i - 1].cost;
        let value = items[i - 1].value;
        for b in 0..=cap {
            best[i][b] = best[i - 1][b];
            if cost <= b as u64 {
                let with = best[i - 1][b - cost as usize].saturating_add(value);
                if with > best[i][b] {
                    best[i][b] = with;
                    take[i][b] = true;
                }
            }
        }
    }

    let mut chosen: Vec<&Item> = Vec::new();
    let mut b = cap;
    for i in (1..=n).rev() {
        if take[i][b] {
            let item = &items[i - 1];
            chosen.push(item);
            b -= item.cost as usize;
        }
    }
    chosen.reverse();

    let mut selection = Selection::default();
    for item in chosen {
        selection.push(item);
    }
    debug_assert_eq!(selection.total_value, best[n][cap]);
    selection
}

/// Optimal total value only, using a single rolling DP row.
///
/// Agrees with `optimal_select(catalog, budget).total_value` while using
/// O(budget) memory.
pub fn optimal_value(catalog: &Catalog, budget: u64) -> u64 {
    if budget == 0 || catalog.is_empty() {
        return 0;
    }
    let cap = table_width(catalog, budget);
    let mut row = vec![0u64; cap + 1];
    for item in catalog {
        if item.cost > budget {
            continue;
        }
        let cost = item.cost as usize;
        // descending so each item is counted at most once
        for b in (cost..=cap).rev() {
            row[b] = row[b].max(row[b - cost].saturating_add(item.value));
        }
    }
    row[cap]
}

/// [`greedy_select`] as a [`SelectionStrategy`].
#[derive(Clone, Copy, Debug, Default)]
pub struct Greedy;

/// [`optimal_select`] as a [`SelectionStrategy`].
#[derive(Clone, Copy, Debug, Default)]
pub struct Exact;

impl SelectionStrategy for Greedy {
    fn name(&self) -> &'static str {
        "greedy"
    }

    fn select(&self, catalog: &Catalog, budget: u64) -> Selection {
        greedy_select(catalog, budget)
    }
}

impl SelectionStrategy for Exact {
    fn name(&self) -> &'static str {
        "dynamic_programming"
    }

    fn select(&self, catalog: &Catalog, budget: u64) -> Selection {
        optimal_select(catalog, budget)
    }

    fn is_exact(&self) -> bool {
        true
    }
}
