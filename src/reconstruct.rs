use std::collections::HashSet;

use crate::shape::{proper_edges, Edge, EdgeSet};

/// A closed polygon loop of point indices.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Face {
    /// Ordered vertex indices. The loop closes from the last back to the first.
    pub vertices: Vec<usize>,
}

impl Face {
    /// Iterates the loop's edges, including the closing edge.
    pub fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        let n = self.vertices.len();
        (0..n).map(move |i| Edge::new(self.vertices[i], self.vertices[(i + 1) % n]))
    }
}

/// Rebuilds polygon faces from an edge skeleton by greedy chaining.
///
/// Starting from the first unused edge `(a, b)`, the chain repeatedly takes
/// the first unused edge whose *low* endpoint equals the chain's last vertex
/// and appends its high endpoint. Chains of fewer than 3 vertices are
/// dropped. Edges are only followed in their canonical orientation, so this
/// recovers faces of convex shapes with consistent winding but is not a
/// general planar face finder.
///
/// Self-edges are ignored.
pub struct ReconstructFaces<'a> {
    edges: &'a EdgeSet,
}

impl<'a> ReconstructFaces<'a> {
    /// Creates a new `ReconstructFaces` operation.
    #[must_use]
    pub fn new(edges: &'a EdgeSet) -> Self {
        Self { edges }
    }

    /// Executes the reconstruction. Output order follows edge insertion order.
    #[must_use]
    pub fn execute(&self) -> Vec<Face> {
        let pool: Vec<Edge> = proper_edges(self.edges).collect();
        let mut used = vec![false; pool.len()];
        let mut faces = Vec::new();

        for start in 0..pool.len() {
            if used[start] {
                continue;
            }
            used[start] = true;

            let (a, b) = pool[start].endpoints();
            let mut chain = vec![a, b];
            let mut current = b;

            while let Some(next) = next_hop(&pool, &used, current) {
                used[next] = true;
                current = pool[next].high();
                chain.push(current);
            }

            if chain.len() > 2 {
                faces.push(Face { vertices: chain });
            }
        }

        tracing::debug!(
            edges = pool.len(),
            faces = faces.len(),
            "reconstructed faces"
        );
        faces
    }
}

/// Index of the first unused edge leaving `vertex` in canonical orientation.
fn next_hop(pool: &[Edge], used: &[bool], vertex: usize) -> Option<usize> {
    pool.iter()
        .zip(used)
        .position(|(e, &u)| !u && e.low() == vertex)
}

/// Returns the edges of `edges` that no face loop covers, in set order.
///
/// Self-edges are never reported.
#[must_use]
pub fn uncovered_edges(edges: &EdgeSet, faces: &[Face]) -> Vec<Edge> {
    let covered: HashSet<Edge> = faces.iter().flat_map(Face::edges).collect();
    proper_edges(edges)
        .filter(|e| !covered.contains(e))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(pairs: &[(usize, usize)]) -> EdgeSet {
        pairs.iter().copied().map(Edge::from).collect()
    }

    #[test]
    fn triangle_yields_single_face() {
        let edges = set(&[(0, 1), (1, 2), (2, 0)]);
        let faces = ReconstructFaces::new(&edges).execute();
        assert_eq!(faces.len(), 1);
        let mut verts = faces[0].vertices.clone();
        verts.sort_unstable();
        assert_eq!(verts, vec![0, 1, 2]);
    }

    #[test]
    fn triangle_loop_covers_every_edge() {
        let edges = set(&[(0, 1), (1, 2), (2, 0)]);
        let faces = ReconstructFaces::new(&edges).execute();
        assert!(uncovered_edges(&edges, &faces).is_empty());
    }

    #[test]
    fn empty_set_yields_nothing() {
        assert!(ReconstructFaces::new(&EdgeSet::new()).execute().is_empty());
    }

    #[test]
    fn lone_edge_is_dropped() {
        let edges = set(&[(3, 7)]);
        let faces = ReconstructFaces::new(&edges).execute();
        assert!(faces.is_empty());
        assert_eq!(uncovered_edges(&edges, &faces), vec![Edge::new(3, 7)]);
    }

    #[test]
    fn chain_follows_canonical_orientation_only() {
        // (1,2) is followed after (0,1); (0,2) starts at 0, never at 2.
        let edges = set(&[(0, 1), (1, 2), (0, 2), (2, 3)]);
        let faces = ReconstructFaces::new(&edges).execute();
        assert_eq!(faces.len(), 1);
        assert_eq!(faces[0].vertices, vec![0, 1, 2, 3]);
    }

    #[test]
    fn self_edges_are_ignored() {
        let edges = set(&[(1, 1), (0, 1), (1, 2)]);
        let faces = ReconstructFaces::new(&edges).execute();
        assert_eq!(faces, vec![Face { vertices: vec![0, 1, 2] }]);
        assert!(uncovered_edges(&edges, &faces).is_empty());
    }

    #[test]
    fn face_edges_wrap_around() {
        let face = Face { vertices: vec![4, 9, 6] };
        let edges: Vec<_> = face.edges().map(Edge::endpoints).collect();
        assert_eq!(edges, vec![(4, 9), (6, 9), (4, 6)]);
    }

    #[test]
    fn square_pyramid_keeps_all_edges_reachable() {
        // Base 0-1-2-3, apex 4.
        let edges = set(&[
            (0, 1),
            (1, 2),
            (2, 3),
            (0, 3),
            (0, 4),
            (1, 4),
            (2, 4),
            (3, 4),
        ]);
        let faces = ReconstructFaces::new(&edges).execute();
        assert!(faces.iter().all(|f| f.vertices.len() >= 3));
        let leftover = uncovered_edges(&edges, &faces);
        for &edge in &edges {
            let covered = faces.iter().any(|f| f.edges().any(|e| e == edge));
            assert!(covered || leftover.contains(&edge));
        }
    }
}
