use crate::domain::Mesh;

/// Strategy that picks which polygon of a mesh gets exported
pub trait PolygonSelector {
    /// Index into the mesh's polygon table, or `None` when nothing qualifies
    fn select(&self, mesh: &Mesh) -> Option<usize>;
}

/// Always the first polygon of the polygon table, ignoring any user selection
#[derive(Debug, Clone, Copy, Default)]
pub struct FirstPolygon;

impl PolygonSelector for FirstPolygon {
    fn select(&self, mesh: &Mesh) -> Option<usize> {
        if mesh.is_empty() { None } else { Some(0) }
    }
}
