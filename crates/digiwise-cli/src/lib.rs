//! digiwise-cli library root.
//!
//! Re-exports the command-line modules so integration tests can exercise
//! config loading and the commands without spawning the binary.

pub mod cli;
pub mod commands;
pub mod config;
