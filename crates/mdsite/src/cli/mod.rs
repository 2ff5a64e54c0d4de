//! CLI support for the `mdsite` binary.

pub mod args;
pub mod commands;
pub mod context;
pub mod logging;

pub use context::CommandContext;
