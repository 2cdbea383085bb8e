//! Shared fixtures for the acceptance tests and the `solve_fixture` binary.

#![forbid(unsafe_code)]

pub mod fixture;
