//! GPS Kernel: compact state carriers and canonical proof primitives.
//!
//! # API Surface
//!
//! - [`carrier::bitgrid::BitGrid`] -- one-hot packed `n x n` grid used as a
//!   cheap-to-hash puzzle state
//! - [`proof::canon::canonical_json_bytes`] -- the single canonical JSON writer
//! - [`proof::hash::canonical_hash`] -- SHA-256 with domain separation
//!
//! # Module Dependency Direction
//!
//! `carrier` and `proof` are independent. Neither knows about search.

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod carrier;
pub mod proof;
