//! Single source of truth for fixture output.
//!
//! Used by both the `solve_fixture` binary and the in-process tests, so the
//! cross-process comparison and the in-process expectation cannot drift.

use gps_harness::runner::{run_named, RunConfig, RunError, RunReport};
use gps_search::contract::Cost;
use gps_search::policy::Strategy;

/// Catalog world used when no arguments are given.
pub const DEFAULT_WORLD: &str = "eight_puzzle:two_moves";
/// Strategy used when no arguments are given.
pub const DEFAULT_STRATEGY: Strategy = Strategy::AStar;
/// Depth bound used when no arguments are given.
pub const DEFAULT_MAX_DEPTH: Cost = 10;

/// Run a catalog world and render deterministic `key=value` lines.
///
/// # Errors
///
/// Returns the [`RunError`] of the underlying run.
pub fn fixture_lines(
    world: &str,
    strategy: Strategy,
    max_depth: Cost,
) -> Result<Vec<String>, RunError> {
    let run = run_named(world, &RunConfig::new(strategy, max_depth))?;
    Ok(render(world, strategy, &run))
}

fn render(world: &str, strategy: Strategy, run: &RunReport) -> Vec<String> {
    let value = run.report.to_json_value();
    let stats = &value["stats"];
    vec![
        format!("world={world}"),
        format!("strategy={strategy}"),
        format!("outcome={}", value["outcome"]["type"].as_str().unwrap_or("")),
        format!("expansions={}", stats["expansions"]),
        format!("analyzed={}", stats["analyzed"]),
        format!("passes={}", stats["passes"]),
        format!("report_digest={}", run.digest),
        format!("policy_digest={}", run.policy_digest),
        format!("report={}", String::from_utf8_lossy(&run.canonical_json)),
    ]
}
