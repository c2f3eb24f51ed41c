//! Command-line interface for the SPNE solver
//!
//! This module wires argument parsing, progress reporting and output
//! formatting around the library core.

pub mod commands;
pub mod config;
pub mod output;
