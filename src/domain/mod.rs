pub mod collision_loop;
pub mod mesh;
pub mod vertex;

pub use collision_loop::CollisionLoop;
pub use mesh::{EditMode, Mesh, MeshContext, MeshError};
pub use vertex::Vertex;
