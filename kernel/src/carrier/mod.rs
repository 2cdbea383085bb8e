//! Carrier module: compact state encodings for puzzle worlds.

pub mod bitgrid;
