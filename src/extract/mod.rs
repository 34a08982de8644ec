pub mod selection;
pub mod validation;

use thiserror::Error;

use crate::domain::{CollisionLoop, MeshContext};

pub use selection::{FirstPolygon, PolygonSelector};
pub use validation::{ValidationResult, validate_loop};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ExtractError {
    #[error("not in edit mode")]
    NotInEditMode,
    #[error("no polygons found")]
    NoPolygonsFound,
    #[error("corner {corner} (vertex {vertex}) has a NaN or infinite coordinate")]
    NonFiniteCoordinate { corner: usize, vertex: usize },
}

/// Pull the boundary of the selected polygon out of an editing context
///
/// # Algorithm
/// 1. Refuse contexts that are not in edit mode
/// 2. Refuse meshes the selector finds nothing in
/// 3. Walk the chosen polygon's boundary once, copying coordinates verbatim
///
/// The returned loop has one point per corner, in winding order.
pub fn extract_loop(
    context: &MeshContext,
    selector: &dyn PolygonSelector,
) -> Result<CollisionLoop, ExtractError> {
    if !context.mode.allows_boundary_access() {
        return Err(ExtractError::NotInEditMode);
    }

    let index = selector
        .select(&context.mesh)
        .ok_or(ExtractError::NoPolygonsFound)?;
    let boundary = context
        .mesh
        .boundary(index)
        .ok_or(ExtractError::NoPolygonsFound)?;

    boundary
        .enumerate()
        .map(|(corner, (vertex, point))| {
            if point.is_finite() {
                Ok(point)
            } else {
                Err(ExtractError::NonFiniteCoordinate { corner, vertex })
            }
        })
        .collect()
}
