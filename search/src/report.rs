//! `SearchReport`: a type-erased, serializable summary of a search.
//!
//! The report keeps only what is observable across problems: the policy,
//! the rule names of the solution path and the counters. Two runs of the
//! same problem under the same policy produce byte-identical canonical JSON,
//! so the digest doubles as a determinism witness.

use gps_kernel::proof::canon::{canonical_json_bytes, CanonError};
use gps_kernel::proof::hash::{
    canonical_hash, ContentHash, DOMAIN_SEARCH_POLICY, DOMAIN_SEARCH_REPORT,
};

use crate::contract::{Cost, Rule};
use crate::policy::{DepthControl, SearchPolicy};
use crate::search::{FailureReason, SearchOutcome, SearchResult};
use crate::stats::SearchStats;

/// Outcome section of a report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportOutcome {
    Solved {
        rule_names: Vec<String>,
        cost: Cost,
    },
    Failed(FailureReason),
}

/// Serializable summary of one search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchReport {
    pub problem_id: String,
    pub policy: SearchPolicy,
    pub final_bound: Cost,
    pub outcome: ReportOutcome,
    pub stats: SearchStats,
}

impl SearchReport {
    #[must_use]
    pub fn from_result<S, R: Rule>(problem_id: &str, result: &SearchResult<S, R>) -> Self {
        let outcome = match &result.outcome {
            SearchOutcome::Solved(solution) => ReportOutcome::Solved {
                rule_names: solution.rules().iter().map(Rule::name).collect(),
                cost: solution.cost(),
            },
            SearchOutcome::Failed(reason) => ReportOutcome::Failed(*reason),
        };
        Self {
            problem_id: problem_id.to_string(),
            policy: result.policy,
            final_bound: result.final_bound,
            outcome,
            stats: result.stats,
        }
    }

    /// Serialize the report to canonical JSON bytes.
    ///
    /// # Errors
    ///
    /// Returns [`CanonError`] if serialization fails.
    pub fn to_canonical_json_bytes(&self) -> Result<Vec<u8>, CanonError> {
        canonical_json_bytes(&self.to_json_value())
    }

    /// Content hash of the canonical JSON bytes.
    ///
    /// # Errors
    ///
    /// Returns [`CanonError`] if serialization fails.
    pub fn digest(&self) -> Result<ContentHash, CanonError> {
        let bytes = self.to_canonical_json_bytes()?;
        Ok(canonical_hash(DOMAIN_SEARCH_REPORT, &bytes))
    }

    #[must_use]
    pub fn to_json_value(&self) -> serde_json::Value {
        serde_json::json!({
            "final_bound": self.final_bound,
            "outcome": outcome_to_json(&self.outcome),
            "policy": policy_to_json(&self.policy),
            "problem_id": self.problem_id,
            "schema_version": "search_report.v1",
            "stats": stats_to_json(&self.stats),
        })
    }
}

/// Content hash of a policy's canonical JSON form.
///
/// # Errors
///
/// Returns [`CanonError`] if serialization fails.
pub fn policy_digest(policy: &SearchPolicy) -> Result<ContentHash, CanonError> {
    let bytes = canonical_json_bytes(&policy_to_json(policy))?;
    Ok(canonical_hash(DOMAIN_SEARCH_POLICY, &bytes))
}

fn policy_to_json(p: &SearchPolicy) -> serde_json::Value {
    serde_json::json!({
        "depth_control": depth_control_to_json(p.depth_control),
        "max_depth": p.max_depth,
        "ordering": p.ordering.as_str(),
    })
}

fn depth_control_to_json(d: DepthControl) -> serde_json::Value {
    match d {
        DepthControl::Fixed => serde_json::json!({"type": "fixed"}),
        DepthControl::IterativeDeepening { start, step } => {
            serde_json::json!({"start": start, "step": step, "type": "iterative_deepening"})
        }
    }
}

fn outcome_to_json(o: &ReportOutcome) -> serde_json::Value {
    match o {
        ReportOutcome::Solved { rule_names, cost } => serde_json::json!({
            "cost": cost,
            "depth": rule_names.len(),
            "rules": rule_names,
            "type": "solved",
        }),
        ReportOutcome::Failed(reason) => {
            serde_json::json!({"reason": reason.as_str(), "type": "failed"})
        }
    }
}

fn stats_to_json(s: &SearchStats) -> serde_json::Value {
    serde_json::json!({
        "analyzed": s.analyzed,
        "depth_discards": s.depth_discards,
        "dominated_on_generation": s.dominated_on_generation,
        "dominated_on_pop": s.dominated_on_pop,
        "expansions": s.expansions,
        "frontier_high_water": s.frontier_high_water,
        "generated": s.generated,
        "inapplicable_rules": s.inapplicable_rules,
        "passes": s.passes,
    })
}
