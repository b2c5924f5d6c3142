//! Infrastructure layer
//!
//! Handles I/O operations: filesystem, external processes and
//! platform directories.

pub mod compiler;
pub mod dirs;
pub mod filesystem;
