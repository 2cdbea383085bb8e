//! Counters collected by the search driver.
//!
//! Every counter is cumulative across iterative-deepening passes; nothing is
//! reset when the depth bound grows.

use std::fmt;

/// Statistics of one `solve` call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Nodes accepted by the pop-time check and expanded.
    pub expansions: u64,
    /// Nodes popped from the frontier (goal-tested).
    pub analyzed: u64,
    /// Children pushed onto the frontier.
    pub generated: u64,
    /// Popped nodes discarded because their state was already settled at
    /// an equal or lower cost.
    pub dominated_on_pop: u64,
    /// Children never pushed because their state was already settled at an
    /// equal or lower cost.
    pub dominated_on_generation: u64,
    /// Children discarded because their `g` exceeded the active bound.
    pub depth_discards: u64,
    /// Rule applications that returned no state.
    pub inapplicable_rules: u64,
    /// Search passes started (always 1 for fixed-bound strategies).
    pub passes: u64,
    /// Largest frontier size seen in any pass.
    pub frontier_high_water: u64,
}

impl SearchStats {
    #[inline]
    pub fn on_analyzed(&mut self) {
        self.analyzed = self.analyzed.saturating_add(1);
    }

    #[inline]
    pub fn on_expansion(&mut self) {
        self.expansions = self.expansions.saturating_add(1);
    }

    #[inline]
    pub fn on_generated(&mut self) {
        self.generated = self.generated.saturating_add(1);
    }

    #[inline]
    pub fn on_dominated_on_pop(&mut self) {
        self.dominated_on_pop = self.dominated_on_pop.saturating_add(1);
    }

    #[inline]
    pub fn on_dominated_on_generation(&mut self) {
        self.dominated_on_generation = self.dominated_on_generation.saturating_add(1);
    }

    #[inline]
    pub fn on_depth_discard(&mut self) {
        self.depth_discards = self.depth_discards.saturating_add(1);
    }

    #[inline]
    pub fn on_inapplicable_rule(&mut self) {
        self.inapplicable_rules = self.inapplicable_rules.saturating_add(1);
    }

    #[inline]
    pub fn on_pass_start(&mut self) {
        self.passes = self.passes.saturating_add(1);
    }

    #[inline]
    pub fn on_frontier_size(&mut self, high_water: u64) {
        self.frontier_high_water = self.frontier_high_water.max(high_water);
    }
}

impl fmt::Display for SearchStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "expansions={} analyzed={} generated={} dominated(pop/gen)={}/{} depth_discards={} passes={} frontier_high_water={}",
            self.expansions,
            self.analyzed,
            self.generated,
            self.dominated_on_pop,
            self.dominated_on_generation,
            self.depth_discards,
            self.passes,
            self.frontier_high_water,
        )
    }
}
