//! Loop checks run before anything is written
//!
//! Only non-finite coordinates are fatal (they have no C literal form).
//! Repeated vertices and zero-area loops are reported as warnings and the
//! loop is still exported unchanged.

use crate::domain::{CollisionLoop, Vertex};

/// Loops with less area than this (in squared mesh units) count as degenerate
const MIN_LOOP_AREA: f32 = 1e-10;

/// Result of loop validation
#[derive(Debug, Default)]
pub struct ValidationResult {
    /// Number of points validated
    pub total: usize,
    /// Position of the first point with a NaN/Inf coordinate
    pub first_non_finite: Option<usize>,
    /// Number of points equal to their predecessor (wrapping last -> first)
    pub repeated: usize,
    /// Whether the loop encloses no area
    pub degenerate: bool,
    /// Warning messages for issues found
    pub warnings: Vec<String>,
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        self.first_non_finite.is_none()
    }

    pub fn has_issues(&self) -> bool {
        !self.is_valid() || self.repeated > 0 || self.degenerate
    }

    pub fn summary(&self) -> String {
        if !self.has_issues() {
            format!("Loop valid: {} points, no issues", self.total)
        } else {
            format!(
                "Loop issues: {} points, {} repeated, degenerate: {}",
                self.total, self.repeated, self.degenerate
            )
        }
    }
}

pub fn validate_loop(collision_loop: &CollisionLoop) -> ValidationResult {
    let points = &collision_loop.points;
    let mut result = ValidationResult {
        total: points.len(),
        first_non_finite: points.iter().position(|v| !v.is_finite()),
        ..Default::default()
    };

    if let Some(i) = result.first_non_finite {
        result
            .warnings
            .push(format!("Point {} has NaN/Inf coordinates", i));
        return result;
    }

    result.repeated = points
        .iter()
        .zip(points.iter().cycle().skip(1))
        .filter(|(a, b)| a == b)
        .count();
    if result.repeated > 0 {
        result.warnings.push(format!(
            "{} points repeat their predecessor (kept as authored)",
            result.repeated
        ));
    }

    result.degenerate = loop_area(points) < MIN_LOOP_AREA;
    if result.degenerate {
        result
            .warnings
            .push("Loop encloses no area (collinear or coincident points)".to_string());
    }

    result
}

/// Area of a planar loop via Newell's method
fn loop_area(points: &[Vertex]) -> f32 {
    let mut normal = [0.0f32; 3];
    for (a, b) in points.iter().zip(points.iter().cycle().skip(1)) {
        normal[0] += (a.y - b.y) * (a.z + b.z);
        normal[1] += (a.z - b.z) * (a.x + b.x);
        normal[2] += (a.x - b.x) * (a.y + b.y);
    }
    0.5 * (normal[0] * normal[0] + normal[1] * normal[1] + normal[2] * normal[2]).sqrt()
}
