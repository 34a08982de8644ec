use super::Precision;
use crate::domain::CollisionLoop;
use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Render a loop as a brace-initializer fragment
///
/// Format:
/// ```text
/// {
///     { x0, y0, z0 },
///     { x1, y1, z1 },
/// }
/// ```
/// No type, name or length is emitted; the including source declares the array.
pub fn render_loop(collision_loop: &CollisionLoop, precision: Precision) -> String {
    let mut out = String::from("{\n");
    for point in &collision_loop.points {
        let [x, y, z] = point.coords().map(|c| precision.format(c));
        out.push_str(&format!("    {{ {}, {}, {} }},\n", x, y, z));
    }
    out.push_str("}\n");
    out
}

/// Write a loop to `path`, replacing any existing file
///
/// # Arguments
/// * `path` - Destination header file
/// * `collision_loop` - Points to write
/// * `precision` - Coordinate formatting
pub fn write_loop(path: &Path, collision_loop: &CollisionLoop, precision: Precision) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create header file: {}", path.display()))?;
    let mut writer = BufWriter::new(file);

    writer.write_all(render_loop(collision_loop, precision).as_bytes())?;
    writer.flush()?;

    Ok(())
}
