use serde::Deserialize;
use thiserror::Error;

use super::Vertex;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum MeshError {
    #[error("polygon {polygon} has {count} corners, at least 3 are required")]
    TooFewCorners { polygon: usize, count: usize },
    #[error("polygon {polygon} references vertex {vertex}, but the mesh has {vertex_count} vertices")]
    VertexOutOfRange {
        polygon: usize,
        vertex: usize,
        vertex_count: usize,
    },
}

/// Editing state of the context a mesh was taken from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EditMode {
    #[serde(alias = "OBJECT")]
    Object,
    #[serde(alias = "EDIT")]
    Edit,
}

impl EditMode {
    /// Whether polygon boundaries may be inspected in this state
    pub fn allows_boundary_access(self) -> bool {
        matches!(self, EditMode::Edit)
    }
}

#[derive(Debug, Deserialize)]
struct RawMesh {
    vertices: Vec<Vertex>,
    #[serde(default)]
    polygons: Vec<Vec<usize>>,
}

/// Vertex table plus polygon table.
///
/// Each polygon is the list of vertex indices met while walking its boundary,
/// starting from its first recorded corner. Construction checks that every
/// polygon has at least three corners and only references existing vertices.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(try_from = "RawMesh")]
pub struct Mesh {
    vertices: Vec<Vertex>,
    polygons: Vec<Vec<usize>>,
}

impl Mesh {
    pub fn new(vertices: Vec<Vertex>, polygons: Vec<Vec<usize>>) -> Result<Self, MeshError> {
        for (polygon, corners) in polygons.iter().enumerate() {
            if corners.len() < 3 {
                return Err(MeshError::TooFewCorners {
                    polygon,
                    count: corners.len(),
                });
            }
            if let Some(&vertex) = corners.iter().find(|&&i| i >= vertices.len()) {
                return Err(MeshError::VertexOutOfRange {
                    polygon,
                    vertex,
                    vertex_count: vertices.len(),
                });
            }
        }
        Ok(Self { vertices, polygons })
    }

    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    pub fn polygon_count(&self) -> usize {
        self.polygons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.polygons.is_empty()
    }

    /// Vertex indices of a polygon in boundary order
    pub fn polygon(&self, index: usize) -> Option<&[usize]> {
        self.polygons.get(index).map(Vec::as_slice)
    }

    /// Walk a polygon's boundary once, yielding `(vertex index, vertex)` per corner
    pub fn boundary(&self, index: usize) -> Option<impl Iterator<Item = (usize, Vertex)> + '_> {
        let corners = self.polygon(index)?;
        Some(corners.iter().map(|&i| (i, self.vertices[i])))
    }
}

impl TryFrom<RawMesh> for Mesh {
    type Error = MeshError;

    fn try_from(raw: RawMesh) -> Result<Self, Self::Error> {
        Mesh::new(raw.vertices, raw.polygons)
    }
}

/// The live state an export reads from: editing mode plus the active mesh
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MeshContext {
    pub mode: EditMode,
    pub mesh: Mesh,
}

impl MeshContext {
    pub fn new(mode: EditMode, mesh: Mesh) -> Self {
        Self { mode, mesh }
    }
}
