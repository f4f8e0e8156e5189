//! Command implementations for the `graphwalk` binary.

pub mod commands;
