//! Core business logic module
//!
//! # Submodules
//!
//! - [`ini`] - Ordered INI document model, writer and parser
//! - [`build_ini`] - The generated `build.ini` handed to UCC
//! - [`builder`] - Build orchestration logic
//! - [`clean`] - Stale artifact removal
//! - [`global_config`] - Global configuration management

pub mod build_ini;
pub mod builder;
pub mod clean;
pub mod global_config;
pub mod ini;
