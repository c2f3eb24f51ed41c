//! Subcommands of the `spne` binary

pub mod solve;
pub mod tree;
