//! collision_loop - Export a mesh polygon's vertex loop as a C initializer list

pub mod adapter;
pub mod config;
pub mod domain;
pub mod emit;
pub mod export;
pub mod extract;

pub use export::{ExportSummary, export_collision_loop};
