//! Search monitors: observation hooks and the early-termination extension point.
//!
//! The driver calls [`SearchMonitor::check_termination`] at the top of every
//! pop-loop iteration. Returning [`SearchCommand::Stop`] ends the search with
//! `FailureReason::Interrupted`; the statistics gathered so far are kept.

pub mod composite;
pub mod expansion_limit;
pub mod log;
pub mod no_op;
pub mod search_monitor;
pub mod time_limit;

pub use composite::CompositeMonitor;
pub use expansion_limit::ExpansionLimitMonitor;
pub use self::log::LogMonitor;
pub use no_op::NoOpMonitor;
pub use search_monitor::{SearchCommand, SearchMonitor};
pub use time_limit::TimeLimitMonitor;
