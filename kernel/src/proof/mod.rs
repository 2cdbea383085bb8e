//! Proof module: canonical JSON and content hashing.
//!
//! Everything that is compared across runs (search reports, fixture output)
//! is rendered through `canon` and fingerprinted through `hash`.

pub mod canon;
pub mod hash;
