// src/cli/handlers/mod.rs

// Each CLI action lives in its own module with a `handle(args)` entry point.

pub mod pformat;
pub mod rand_string;
pub mod run;
