//! Typed search errors.
//!
//! `SearchError` represents pre-flight configuration failures only. Runtime
//! terminations (goal reached, frontier exhausted, interrupted by a monitor)
//! are expressed via [`crate::search::SearchOutcome`] and always carry
//! statistics.

/// Typed failure for pre-flight search validation.
///
/// These errors are returned before the first node is created.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SearchError {
    /// A strategy name did not match any known strategy.
    #[error("unknown search strategy: {name}")]
    UnknownStrategy { name: String },
    /// The ordering/depth-control combination cannot be run.
    #[error("invalid search policy: {detail}")]
    InvalidPolicy { detail: String },
}
