//! CLI commands

pub mod install;
pub mod list;
pub mod remove;
pub mod status;
pub mod utils;
pub mod welcome;
