//! Shared library for `DegreeCalc`
//! Contains the degree-audit engine, configuration and logging used by the CLI

pub mod config;
pub mod core;
pub mod logger;

pub use crate::core::get_version;
