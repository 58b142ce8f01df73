/// Mesh coordinate bounds tracking
use crate::mesh::Vertex;
use serde::{Deserialize, Serialize};

/// Axis-aligned extent of a generated mesh
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MeshBounds {
    pub min_x: f32,
    pub max_x: f32,
    pub min_y: f32,
    pub max_y: f32,
    pub min_z: f32,
    pub max_z: f32,
}

impl MeshBounds {
    /// Create new bounds initialised to infinity values
    pub fn new() -> Self {
        Self {
            min_x: f32::INFINITY,
            max_x: f32::NEG_INFINITY,
            min_y: f32::INFINITY,
            max_y: f32::NEG_INFINITY,
            min_z: f32::INFINITY,
            max_z: f32::NEG_INFINITY,
        }
    }

    /// Update bounds with one vertex
    pub fn update(&mut self, vertex: &Vertex) {
        self.min_x = self.min_x.min(vertex.x);
        self.max_x = self.max_x.max(vertex.x);
        self.min_y = self.min_y.min(vertex.y);
        self.max_y = self.max_y.max(vertex.y);
        self.min_z = self.min_z.min(vertex.z);
        self.max_z = self.max_z.max(vertex.z);
    }

    /// Bounds spanning a vertex list
    pub fn from_vertices(vertices: &[Vertex]) -> Self {
        let mut bounds = Self::new();
        for vertex in vertices {
            bounds.update(vertex);
        }
        bounds
    }

    /// Extent along each axis
    pub fn dimensions(&self) -> (f32, f32, f32) {
        (
            self.max_x - self.min_x,
            self.max_y - self.min_y,
            self.max_z - self.min_z,
        )
    }
}

impl Default for MeshBounds {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds_span_all_vertices() {
        let vertices = [
            Vertex::new(0.0, 0.0, -1.0),
            Vertex::new(2.0, 1.0, 0.5),
            Vertex::new(1.0, 3.0, 0.0),
        ];
        let bounds = MeshBounds::from_vertices(&vertices);

        assert_eq!(bounds.min_x, 0.0);
        assert_eq!(bounds.max_x, 2.0);
        assert_eq!(bounds.min_y, 0.0);
        assert_eq!(bounds.max_y, 3.0);
        assert_eq!(bounds.min_z, -1.0);
        assert_eq!(bounds.max_z, 0.5);
        assert_eq!(bounds.dimensions(), (2.0, 3.0, 1.5));
    }
}
