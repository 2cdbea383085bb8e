//! GPS Harness: concrete worlds and the run orchestration around the engine.
//!
//! Worlds provide problem data only; the search crate owns exploration and
//! the harness owns monitors, reporting and the named-world catalog.

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod runner;
pub mod worlds;
