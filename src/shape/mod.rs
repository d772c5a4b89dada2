pub mod edge;

pub use edge::{proper_edges, Edge, EdgeSet};

use crate::math::{scale_points, Point3};

/// Identifier of a shape: the face count of the die it approximates.
pub type ShapeId = u32;

/// A polyhedron approximation: a point cloud plus an edge skeleton.
///
/// Shapes are never structurally edited after loading.
#[derive(Debug, Clone, Default)]
pub struct Shape {
    /// Point positions, indexed by the edges.
    pub points: Vec<Point3>,
    /// Undirected edges between points.
    pub edges: EdgeSet,
}

impl Shape {
    /// Creates a shape from its parts.
    #[must_use]
    pub fn new(points: Vec<Point3>, edges: EdgeSet) -> Self {
        Self { points, edges }
    }

    /// Returns a copy of this shape with every point multiplied by `factor`.
    #[must_use]
    pub fn scaled(&self, factor: f64) -> Self {
        Self {
            points: scale_points(&self.points, factor),
            edges: self.edges.clone(),
        }
    }
}
