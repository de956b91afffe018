//! CLI command handlers for `DegreeCalc`.
//!
//! Each command is implemented in its own submodule.

pub mod audit;
pub mod config;
pub mod requirements;
