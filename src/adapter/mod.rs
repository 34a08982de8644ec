//! Loaders that materialize an editing context from files the authoring tool writes

pub mod obj;
pub mod snapshot;

use anyhow::{Context, Result, bail};
use std::path::Path;

use crate::domain::MeshContext;

pub use obj::{ObjError, parse_obj};
pub use snapshot::parse_snapshot;

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum InputFormat {
    /// Wavefront OBJ mesh
    Obj,
    /// JSON edit-session snapshot
    Snapshot,
}

impl InputFormat {
    /// Guess the format from a file extension
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "obj" => Some(InputFormat::Obj),
            "json" => Some(InputFormat::Snapshot),
            _ => None,
        }
    }
}

/// Read `path` and build the editing context it describes
pub fn load_context(path: &Path, format: Option<InputFormat>) -> Result<MeshContext> {
    let format = match format.or_else(|| InputFormat::from_path(path)) {
        Some(f) => f,
        None => bail!(
            "Cannot tell the input format of {}; pass --format obj or --format snapshot",
            path.display()
        ),
    };

    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read input file: {}", path.display()))?;

    match format {
        InputFormat::Obj => parse_obj(&contents)
            .with_context(|| format!("Failed to parse OBJ file: {}", path.display())),
        InputFormat::Snapshot => parse_snapshot(&contents),
    }
}
