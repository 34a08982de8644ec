use crate::domain::MeshContext;
use anyhow::{Context, Result};

/// Parse an edit-session snapshot
///
/// ```json
/// {
///   "mode": "edit",
///   "mesh": { "vertices": [[0, 0, 0], [1, 0, 0], [0, 1, 0]], "polygons": [[0, 1, 2]] }
/// }
/// ```
pub fn parse_snapshot(json: &str) -> Result<MeshContext> {
    serde_json::from_str(json).context("Failed to parse mesh snapshot JSON")
}
