//! Best-cost table: state -> cheapest `g` committed in the current pass.
//!
//! IMPORTANT: this table is also the visited set. Uninformed strategies have
//! no separate closed set; a state counts as visited once a node for it has
//! been accepted for expansion, and later nodes for that state are discarded
//! unless strictly cheaper.
//!
//! The same table serves two checks:
//!
//! - pop time: a popped node is expanded only if [`BestCostTable::improves`];
//!   accepting it calls [`BestCostTable::record`].
//! - generation time: a child is pushed only if it improves on the table.
//!   Generation never records, so a state may sit in the frontier several
//!   times until its cheapest node is popped and commits its cost.

use std::collections::HashMap;
use std::hash::Hash;

use crate::contract::Cost;

/// Lowest committed path cost per state. One entry per key, only ever lowered.
#[derive(Debug)]
pub struct BestCostTable<S> {
    costs: HashMap<S, Cost>,
}

impl<S: Eq + Hash> BestCostTable<S> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            costs: HashMap::new(),
        }
    }

    /// Whether reaching `state` at cost `g` beats what is recorded.
    ///
    /// A state is dominated (returns `false`) when its recorded cost is
    /// `<= g`. Unrecorded states always improve.
    #[must_use]
    pub fn improves(&self, state: &S, g: Cost) -> bool {
        !matches!(self.costs.get(state), Some(&best) if best <= g)
    }

    /// Commit `g` as the best cost of `state`.
    ///
    /// Returns `false` and leaves the table unchanged when `g` does not
    /// improve on the recorded cost.
    pub fn record(&mut self, state: S, g: Cost) -> bool {
        match self.costs.get_mut(&state) {
            Some(best) if *best <= g => false,
            Some(best) => {
                *best = g;
                true
            }
            None => {
                self.costs.insert(state, g);
                true
            }
        }
    }

    /// Recorded cost of `state`, if any.
    #[must_use]
    pub fn best(&self, state: &S) -> Option<Cost> {
        self.costs.get(state).copied()
    }

    /// Forget every entry.
    pub fn clear(&mut self) {
        self.costs.clear();
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.costs.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.costs.is_empty()
    }
}

impl<S: Eq + Hash> Default for BestCostTable<S> {
    fn default() -> Self {
        Self::new()
    }
}
