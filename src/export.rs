use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

use crate::domain::MeshContext;
use crate::emit::{Precision, write_loop};
use crate::extract::{PolygonSelector, ValidationResult, extract_loop, validate_loop};

/// Outcome of a successful export
#[derive(Debug)]
pub struct ExportSummary {
    pub path: PathBuf,
    pub vertex_count: usize,
    pub validation: ValidationResult,
}

impl ExportSummary {
    /// Confirmation line naming the written artifact
    pub fn message(&self) -> String {
        let name = self
            .path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.path.display().to_string());
        format!("Data written to '{}'", name)
    }
}

/// Extract the selected polygon's loop and write it to `dest`
///
/// All checks run before the destination is opened, so a failed export
/// leaves any existing file untouched. Extraction failures can be recovered
/// with `err.downcast_ref::<ExtractError>()`.
pub fn export_collision_loop(
    context: &MeshContext,
    selector: &dyn PolygonSelector,
    dest: &Path,
    precision: Precision,
) -> Result<ExportSummary> {
    let collision_loop = extract_loop(context, selector)?;
    let validation = validate_loop(&collision_loop);

    write_loop(dest, &collision_loop, precision).context("Failed to write collision loop")?;

    Ok(ExportSummary {
        path: dest.to_path_buf(),
        vertex_count: collision_loop.len(),
        validation,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{EditMode, Mesh, Vertex};
    use crate::extract::{ExtractError, FirstPolygon};
    use std::fs;
    use tempfile::tempdir;

    fn context(mode: EditMode, points: &[[f32; 3]], polygons: Vec<Vec<usize>>) -> MeshContext {
        let vertices = points.iter().copied().map(Vertex::from).collect();
        MeshContext::new(mode, Mesh::new(vertices, polygons).unwrap())
    }

    fn triangle(mode: EditMode) -> MeshContext {
        context(
            mode,
            &[[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]],
            vec![vec![0, 1, 2]],
        )
    }

    fn export(ctx: &MeshContext, dest: &Path) -> Result<ExportSummary> {
        export_collision_loop(ctx, &FirstPolygon, dest, Precision::Shortest)
    }

    #[test]
    fn test_triangle_file_contents() {
        let dir = tempdir().unwrap();
        let dest = dir.path().join("collision_loop.h");

        let summary = export(&triangle(EditMode::Edit), &dest).unwrap();

        assert_eq!(summary.vertex_count, 3);
        assert_eq!(summary.message(), "Data written to 'collision_loop.h'");
        assert_eq!(
            fs::read_to_string(&dest).unwrap(),
            "{\n    { 0.0, 0.0, 0.0 },\n    { 1.0, 0.0, 0.0 },\n    { 0.0, 1.0, 0.0 },\n}\n"
        );
    }

    #[test]
    fn test_object_mode_touches_nothing() {
        let dir = tempdir().unwrap();
        let dest = dir.path().join("collision_loop.h");

        let err = export(&triangle(EditMode::Object), &dest).unwrap_err();
        assert_eq!(
            err.downcast_ref::<ExtractError>(),
            Some(&ExtractError::NotInEditMode)
        );
        assert!(!dest.exists());

        fs::write(&dest, "previous export\n").unwrap();
        assert!(export(&triangle(EditMode::Object), &dest).is_err());
        assert_eq!(fs::read_to_string(&dest).unwrap(), "previous export\n");
    }

    #[test]
    fn test_empty_mesh_touches_nothing() {
        let dir = tempdir().unwrap();
        let dest = dir.path().join("collision_loop.h");
        let ctx = context(EditMode::Edit, &[[0.0, 0.0, 0.0]], Vec::new());

        let err = export(&ctx, &dest).unwrap_err();
        assert_eq!(
            err.downcast_ref::<ExtractError>(),
            Some(&ExtractError::NoPolygonsFound)
        );
        assert!(!dest.exists());
    }

    #[test]
    fn test_non_finite_touches_nothing() {
        let dir = tempdir().unwrap();
        let dest = dir.path().join("collision_loop.h");
        let ctx = context(
            EditMode::Edit,
            &[[0.0, 0.0, 0.0], [1.0, f32::NAN, 0.0], [0.0, 1.0, 0.0]],
            vec![vec![0, 1, 2]],
        );

        let err = export(&ctx, &dest).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ExtractError>(),
            Some(ExtractError::NonFiniteCoordinate { corner: 1, vertex: 1 })
        ));
        assert!(!dest.exists());
    }

    #[test]
    fn test_winding_preserved() {
        let dir = tempdir().unwrap();
        let dest = dir.path().join("collision_loop.h");
        let ctx = context(
            EditMode::Edit,
            &[[1.0, 0.0, 0.0], [2.0, 0.0, 0.0], [3.0, 0.0, 0.0], [4.0, 0.0, 0.0]],
            vec![vec![2, 0, 3, 1]],
        );

        export(&ctx, &dest).unwrap();

        let xs: Vec<String> = fs::read_to_string(&dest)
            .unwrap()
            .lines()
            .filter_map(|l| l.trim().strip_prefix("{ "))
            .map(|l| l.split(',').next().unwrap().to_string())
            .collect();
        assert_eq!(xs, vec!["3.0", "1.0", "4.0", "2.0"]);
    }

    #[test]
    fn test_repeat_export_is_identical() {
        let dir = tempdir().unwrap();
        let dest = dir.path().join("collision_loop.h");
        let ctx = context(
            EditMode::Edit,
            &[[0.1, -2.75, 3.0], [1e-7, 0.0, 5.5], [-0.3333, 1.0, 0.0]],
            vec![vec![0, 1, 2]],
        );

        export(&ctx, &dest).unwrap();
        let first = fs::read(&dest).unwrap();
        export(&ctx, &dest).unwrap();
        let second = fs::read(&dest).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_line_count_matches_vertex_count() {
        let dir = tempdir().unwrap();
        let dest = dir.path().join("collision_loop.h");

        for n in 3..=12usize {
            let points: Vec<[f32; 3]> = (0..n).map(|i| [i as f32, (i * i) as f32, 0.0]).collect();
            let ctx = context(EditMode::Edit, &points, vec![(0..n).collect()]);

            let summary = export(&ctx, &dest).unwrap();
            let text = fs::read_to_string(&dest).unwrap();
            let lines: Vec<&str> = text.lines().collect();

            assert_eq!(summary.vertex_count, n);
            assert_eq!(lines.first(), Some(&"{"));
            assert_eq!(lines.last(), Some(&"}"));
            assert_eq!(lines.len() - 2, n);
        }
    }

    #[test]
    fn test_degenerate_loop_still_written() {
        let dir = tempdir().unwrap();
        let dest = dir.path().join("collision_loop.h");
        let ctx = context(
            EditMode::Edit,
            &[[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [2.0, 0.0, 0.0]],
            vec![vec![0, 1, 2]],
        );

        let summary = export(&ctx, &dest).unwrap();
        assert!(summary.validation.degenerate);
        assert!(dest.exists());
    }
}
