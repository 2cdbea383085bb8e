//! Harness runner: configures monitors, runs the search and renders a report.
//!
//! # Pipeline
//!
//! ```text
//! RunConfig → SearchPolicy::validate()
//!   → CompositeMonitor(log [+ time limit]) → solve_with()
//!   → SearchReport → canonical JSON → digest
//! ```

use std::time::Duration;

use gps_kernel::proof::canon::CanonError;
use gps_kernel::proof::hash::ContentHash;
use gps_search::contract::{Cost, Problem};
use gps_search::error::SearchError;
use gps_search::monitor::{CompositeMonitor, LogMonitor, TimeLimitMonitor};
use gps_search::policy::{SearchPolicy, Strategy};
use gps_search::report::{policy_digest, SearchReport};
use gps_search::search::{solve_with, SearchResult};
use log::info;

use crate::worlds::{self, CatalogWorld, WorldError};

/// Error during a harness run.
#[derive(Debug, thiserror::Error)]
pub enum RunError {
    /// No catalog world has this name.
    #[error("unknown world: {name}")]
    UnknownWorld { name: String },
    #[error(transparent)]
    World(#[from] WorldError),
    #[error(transparent)]
    Search(#[from] SearchError),
    #[error("canonical JSON serialization failed: {0}")]
    Canon(#[from] CanonError),
}

/// Configuration of one harness run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub strategy: Strategy,
    pub max_depth: Cost,
    /// Wall-clock limit; `None` runs to completion.
    pub time_limit: Option<Duration>,
    /// Minimum spacing of progress log lines.
    pub progress_interval: Duration,
}

impl RunConfig {
    #[must_use]
    pub fn new(strategy: Strategy, max_depth: Cost) -> Self {
        Self {
            strategy,
            max_depth,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn policy(&self) -> SearchPolicy {
        SearchPolicy::for_strategy(self.strategy, self.max_depth)
    }
}

impl Default for RunConfig {
    fn default() -> Self {
        let policy = SearchPolicy::default();
        Self {
            strategy: Strategy::AStar,
            max_depth: policy.max_depth,
            time_limit: None,
            progress_interval: Duration::from_secs(1),
        }
    }
}

/// Output of a harness run.
#[derive(Debug, Clone)]
pub struct RunReport {
    pub report: SearchReport,
    /// Canonical JSON bytes of `report`.
    pub canonical_json: Vec<u8>,
    /// `canonical_hash(DOMAIN_SEARCH_REPORT, canonical_json)`.
    pub digest: ContentHash,
    pub policy_digest: ContentHash,
}

impl RunReport {
    #[must_use]
    pub fn is_solved(&self) -> bool {
        matches!(
            self.report.outcome,
            gps_search::report::ReportOutcome::Solved { .. }
        )
    }
}

/// Run `problem` under `config` and render the result.
///
/// # Errors
///
/// Returns [`RunError::Search`] for an invalid policy and
/// [`RunError::Canon`] if the report cannot be serialized.
pub fn run_search<P: Problem>(problem: &P, config: &RunConfig) -> Result<RunReport, RunError> {
    let (_, report) = run_search_with_result(problem, config)?;
    Ok(report)
}

/// Like [`run_search`], also returning the typed search result.
///
/// # Errors
///
/// See [`run_search`].
pub fn run_search_with_result<P: Problem>(
    problem: &P,
    config: &RunConfig,
) -> Result<(SearchResult<P::State, P::Rule>, RunReport), RunError> {
    let policy = config.policy();
    policy.validate()?;

    let mut monitor: CompositeMonitor<'_, P> = CompositeMonitor::new();
    if let Some(limit) = config.time_limit {
        monitor.add_monitor(TimeLimitMonitor::with_default_check_interval(limit));
    }
    monitor.add_monitor(LogMonitor::new(config.progress_interval, 4095));

    let result = solve_with(problem, &policy, &mut monitor)?;
    let report = SearchReport::from_result(problem.problem_id(), &result);
    let canonical_json = report.to_canonical_json_bytes()?;
    let digest = report.digest()?;
    let policy_digest = policy_digest(&policy)?;

    info!(
        "[{}] {} solved={} digest={}",
        problem.problem_id(),
        config.strategy,
        result.is_solved(),
        digest
    );

    Ok((
        result,
        RunReport {
            report,
            canonical_json,
            digest,
            policy_digest,
        },
    ))
}

/// Run the catalog world called `name`.
///
/// # Errors
///
/// Returns [`RunError::UnknownWorld`] for names outside
/// [`worlds::CATALOG`], plus everything [`run_search`] returns.
pub fn run_named(name: &str, config: &RunConfig) -> Result<RunReport, RunError> {
    match worlds::lookup(name)? {
        Some(CatalogWorld::SlidingTile(puzzle)) => run_search(&puzzle, config),
        Some(CatalogWorld::Calcudoku(board)) => run_search(&board, config),
        None => Err(RunError::UnknownWorld {
            name: name.to_string(),
        }),
    }
}
