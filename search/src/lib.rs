//! GPS Search: generic state-space search with pluggable strategies.
//!
//! A problem supplies an initial state, a fixed list of rules, a goal test
//! and a heuristic. The driver explores states with one of five strategies
//! and returns the rule path to a goal together with search statistics.
//!
//! # Crate dependency graph
//!
//! ```text
//! gps_kernel  ←  gps_search  ←  gps_harness
//! (canon, hash,   (frontier,      (worlds, runner)
//!  bitgrid)        driver)
//! ```
//!
//! # Key types
//!
//! - [`Problem`], [`Rule`], [`State`]: the problem contract
//! - [`Strategy`] / [`SearchPolicy`]: ordering × depth control
//! - [`solve`] / [`solve_with`]: entry points
//! - [`SearchResult`]: outcome plus cumulative [`SearchStats`]
//! - [`SearchMonitor`]: early-termination and progress hooks
//! - [`SearchReport`]: canonical JSON summary with a content digest

#![forbid(unsafe_code)]

pub mod best_cost;
pub mod contract;
pub mod error;
pub mod frontier;
pub mod monitor;
pub mod node;
pub mod policy;
pub mod report;
pub mod search;
pub mod stats;

pub use contract::{Cost, Problem, Rule, State};
pub use error::SearchError;
pub use monitor::{SearchCommand, SearchMonitor};
pub use policy::{DepthControl, NodeOrdering, SearchPolicy, Strategy};
pub use report::SearchReport;
pub use search::{solve, solve_with, FailureReason, SearchOutcome, SearchResult, Solution};
pub use stats::SearchStats;
