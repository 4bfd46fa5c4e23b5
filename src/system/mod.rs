//! # System Interaction Layer
//!
//! The boundary between the library and the operating system.
//!
//! ## Modules
//!
//! - **`executor`**: spawns a subprocess synchronously in a chosen working
//!   directory and environment, captures stdout and stderr, and reports
//!   failures as `ExecutionError` while logging the captured diagnostics.

pub mod executor;
