// src/core/mod.rs

pub mod formatter;
pub mod id_generator;
pub mod spec_loader;
