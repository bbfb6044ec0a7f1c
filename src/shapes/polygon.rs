use crate::error::{PhysicsError, Result};
use crate::math::vec2::Vec2;

/// A closed polygon defined by its vertices in world space.
///
/// The last vertex connects back to the first. Vertices should be ordered
/// counter-clockwise; clockwise input flips the sign of [`Polygon::area`].
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    vertices: Vec<Vec2>,
}

impl Polygon {
    /// Creates a new polygon from a vector of vertices.
    ///
    /// Returns [`PhysicsError::TooFewVertices`] if fewer than 3 vertices are provided.
    pub fn new(vertices: Vec<Vec2>) -> Result<Self> {
        if vertices.len() < 3 {
            return Err(PhysicsError::TooFewVertices { count: vertices.len() });
        }
        Ok(Polygon { vertices })
    }

    pub fn vertices(&self) -> &[Vec2] {
        &self.vertices
    }

    /// Vertex count. Never below 3.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Signed area (shoelace formula). Positive for counter-clockwise winding.
    pub fn area(&self) -> f64 {
        polygon_area(&self.vertices)
    }

    /// Geometric centroid. See [`polygon_centroid`] for the zero-area caveat.
    pub fn centroid(&self) -> Vec2 {
        polygon_centroid(&self.vertices)
    }

    /// Moves every vertex by `delta`.
    pub fn translate(&mut self, delta: Vec2) {
        for vertex in &mut self.vertices {
            *vertex += delta;
        }
    }

    /// Rotates every vertex counter-clockwise by `angle` radians about `pivot`.
    pub fn rotate(&mut self, angle: f64, pivot: Vec2) {
        for vertex in &mut self.vertices {
            *vertex = (*vertex - pivot).rotate(angle) + pivot;
        }
    }

    /// Unit normals of every edge. Zero-length edges are skipped.
    pub fn edge_normals(&self) -> Vec<Vec2> {
        edge_normals(&self.vertices)
    }
}

/// Signed area of the closed loop through `vertices`: `0.5 * Σ cross(v_i, v_i+1)`.
pub fn polygon_area(vertices: &[Vec2]) -> f64 {
    let n = vertices.len();
    let mut area = 0.0;
    for i in 0..n {
        area += vertices[i].cross(vertices[(i + 1) % n]);
    }
    0.5 * area
}

/// Centroid of the closed loop through `vertices`, scaled by `1 / (6 * area)`.
///
/// Not guarded: a zero-area (degenerate) polygon divides by zero and yields
/// NaN or infinite components.
pub fn polygon_centroid(vertices: &[Vec2]) -> Vec2 {
    let n = vertices.len();
    let factor = 6.0 * polygon_area(vertices);
    let mut center = Vec2::ZERO;
    for i in 0..n {
        let v1 = vertices[i];
        let v2 = vertices[(i + 1) % n];
        center += (v1 + v2) * v1.cross(v2);
    }
    center / factor
}

/// Unit normals of the edges `v[i] -> v[i+1]` (wrapping), in vertex order.
pub fn edge_normals(vertices: &[Vec2]) -> Vec<Vec2> {
    let n = vertices.len();
    let mut normals = Vec::with_capacity(n);
    for i in 0..n {
        let edge = vertices[(i + 1) % n] - vertices[i];
        let length = edge.magnitude();
        if length == 0.0 {
            continue;
        }
        normals.push(edge.perpendicular() * (1.0 / length));
    }
    normals
}
