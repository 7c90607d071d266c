//! CLI command handlers.

pub mod config;
pub mod load;
pub mod serve;
