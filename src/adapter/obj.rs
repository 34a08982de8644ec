use crate::domain::{EditMode, Mesh, MeshContext, MeshError, Vertex};
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ObjError {
    #[error("line {line}: {message}")]
    Syntax { line: usize, message: String },
    #[error("line {line}: face corner {index} does not refer to a vertex defined so far")]
    BadIndex { line: usize, index: i64 },
    #[error(transparent)]
    Mesh(#[from] MeshError),
}

/// Parse Wavefront OBJ text into an editing context
///
/// # Algorithm
/// 1. `v x y z [r g b]` appends a vertex (vertex colors are ignored)
/// 2. `f a b c ...` appends a polygon, keeping the corner order of the line
///    - corners may be `i`, `i/t`, `i//n` or `i/t/n`; only `i` is used
///    - indices are 1-based, negative ones count back from the last vertex
/// 3. Every other statement is skipped
///
/// Mesh data read from disk is topology-level data, so the context is in
/// edit mode.
pub fn parse_obj(text: &str) -> Result<MeshContext, ObjError> {
    let mut vertices = Vec::new();
    let mut polygons = Vec::new();

    for (i, raw_line) in text.lines().enumerate() {
        let line = i + 1;
        let content = raw_line.split('#').next().unwrap_or("");
        let mut words = content.split_whitespace();

        match words.next() {
            Some("v") => vertices.push(parse_vertex(words, line)?),
            Some("f") => {
                let corners = words
                    .map(|word| resolve_corner(word, vertices.len(), line))
                    .collect::<Result<Vec<usize>, ObjError>>()?;
                polygons.push(corners);
            }
            _ => {}
        }
    }

    let mesh = Mesh::new(vertices, polygons)?;
    Ok(MeshContext::new(EditMode::Edit, mesh))
}

fn parse_vertex<'a>(mut words: impl Iterator<Item = &'a str>, line: usize) -> Result<Vertex, ObjError> {
    let mut coords = [0.0f32; 3];
    for (axis, coord) in coords.iter_mut().enumerate() {
        let word = words.next().ok_or_else(|| ObjError::Syntax {
            line,
            message: format!("vertex needs 3 coordinates, found {}", axis),
        })?;
        *coord = word.parse().map_err(|_| ObjError::Syntax {
            line,
            message: format!("invalid coordinate '{}'", word),
        })?;
    }
    Ok(Vertex::from(coords))
}

fn resolve_corner(word: &str, vertex_count: usize, line: usize) -> Result<usize, ObjError> {
    let position = word.split('/').next().unwrap_or("");
    let index: i64 = position.parse().map_err(|_| ObjError::Syntax {
        line,
        message: format!("invalid face corner '{}'", word),
    })?;

    let resolved = match index {
        i if i > 0 => i - 1,
        i if i < 0 => vertex_count as i64 + i,
        _ => -1,
    };

    if resolved < 0 || resolved >= vertex_count as i64 {
        return Err(ObjError::BadIndex { line, index });
    }
    Ok(resolved as usize)
}
