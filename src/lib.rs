//! ut2u - UT2004 mod and mutator build tool
//!
//! This library drives UCC, the Unreal Tournament 2004 compiler, to build
//! mod and mutator packages.
//!
//! # Architecture
//!
//! The crate is organized into several modules:
//!
//! - [`cli`] - Command-line interface parsing and output formatting
//! - [`core`] - Build orchestration and the INI configuration model
//! - [`infra`] - Infrastructure layer (filesystem, processes, directories)
//! - [`config`] - Constants describing the UT2004 layout
//! - [`error`] - Error types and handling

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod infra;

#[cfg(test)]
pub mod test_utils;
