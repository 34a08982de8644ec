use super::Vertex;

/// Ordered vertex ring of one polygon, in the polygon's winding order.
///
/// The first vertex is not repeated at the end and duplicates are kept.
#[derive(Debug, Clone, PartialEq)]
pub struct CollisionLoop {
    pub points: Vec<Vertex>,
}

impl CollisionLoop {
    pub fn new(points: Vec<Vertex>) -> Self {
        Self { points }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

impl FromIterator<Vertex> for CollisionLoop {
    fn from_iter<I: IntoIterator<Item = Vertex>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
