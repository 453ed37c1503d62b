//! The axis-aligned test cube.

use crate::PointSet;

/// An origin-centered cube whose eight vertices are rotated by every method.
///
/// Vertex `i` has coordinates `(±s, ±s, ±s)` with `s = size / 2`, ordered
/// with x as the slowest-varying sign and z as the fastest, positive first.
///
/// # Example
///
/// ```
/// use rotation_types::Cube;
///
/// let cube = Cube::new(3.0);
/// assert_eq!(cube.vertices().len(), 8);
/// assert!((cube.vertices()[0].x - 1.5).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Cube {
    size: f64,
    vertices: PointSet,
}

impl Cube {
    /// Vertex index pairs forming the twelve cube edges.
    ///
    /// Four edges on the `x = +s` face, four on `x = -s`, then the four
    /// connecting them.
    pub const EDGES: [(usize, usize); 12] = [
        (0, 1),
        (1, 3),
        (3, 2),
        (2, 0),
        (4, 5),
        (5, 7),
        (7, 6),
        (6, 4),
        (0, 4),
        (1, 5),
        (2, 6),
        (3, 7),
    ];

    /// Create a cube with the given edge length.
    #[must_use]
    pub fn new(size: f64) -> Self {
        let s = size / 2.0;
        let vertices = PointSet::from_coords(&[
            [s, s, s],
            [s, s, -s],
            [s, -s, s],
            [s, -s, -s],
            [-s, s, s],
            [-s, s, -s],
            [-s, -s, s],
            [-s, -s, -s],
        ]);
        Self { size, vertices }
    }

    /// Edge length.
    #[must_use]
    pub const fn size(&self) -> f64 {
        self.size
    }

    /// The eight vertices in index order.
    #[must_use]
    pub const fn vertices(&self) -> &PointSet {
        &self.vertices
    }
}

impl Default for Cube {
    fn default() -> Self {
        Self::new(1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn unit_cube_vertices_are_half_extents() {
        let cube = Cube::default();
        for v in cube.vertices() {
            assert_relative_eq!(v.x.abs(), 0.5);
            assert_relative_eq!(v.y.abs(), 0.5);
            assert_relative_eq!(v.z.abs(), 0.5);
        }
    }

    #[test]
    fn vertex_order_matches_sign_pattern() {
        let cube = Cube::new(2.0);
        let v = cube.vertices();
        assert_relative_eq!(v[1].z, -1.0);
        assert_relative_eq!(v[2].y, -1.0);
        assert_relative_eq!(v[4].x, -1.0);
        assert_relative_eq!(v[7].x + v[7].y + v[7].z, -3.0);
    }

    #[test]
    fn every_edge_has_cube_length() {
        let cube = Cube::new(3.0);
        let v = cube.vertices();
        for &(a, b) in &Cube::EDGES {
            assert_relative_eq!((v[a] - v[b]).norm(), 3.0, epsilon = 1e-12);
        }
    }
}
