//! # Adventure Shell
//!
//! A line-oriented text interface over [`combat_rules::Game`]: it parses what
//! the player types, forwards it to the engine and renders the results as
//! plain lines. The `mordor` binary wires it to stdin and stdout.

pub mod commands;
pub mod logging;
pub mod render;

pub use commands::{Command, Reply, Shell};
