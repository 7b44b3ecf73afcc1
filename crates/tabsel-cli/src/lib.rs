//! Library half of the `tabsel` binary: config loading, argument helpers
//! and the command implementations, kept here so they can be tested
//! without spawning the binary.
pub mod commands;
pub mod config;
pub mod util;
