use indexmap::IndexSet;

/// An undirected edge between two point indices.
///
/// Always stored in canonical form: `a <= b`. Constructing `Edge::new(5, 2)`
/// yields the same value as `Edge::new(2, 5)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Edge {
    a: usize,
    b: usize,
}

impl Edge {
    /// Creates a canonical edge from two endpoint indices in any order.
    #[must_use]
    pub fn new(i: usize, j: usize) -> Self {
        if i <= j {
            Self { a: i, b: j }
        } else {
            Self { a: j, b: i }
        }
    }

    /// The lower endpoint index.
    #[must_use]
    pub fn low(self) -> usize {
        self.a
    }

    /// The higher endpoint index.
    #[must_use]
    pub fn high(self) -> usize {
        self.b
    }

    /// Both endpoints as `(low, high)`.
    #[must_use]
    pub fn endpoints(self) -> (usize, usize) {
        (self.a, self.b)
    }

    /// Returns `true` if both endpoints are the same point.
    #[must_use]
    pub fn is_self_edge(self) -> bool {
        self.a == self.b
    }
}

impl From<(usize, usize)> for Edge {
    fn from((i, j): (usize, usize)) -> Self {
        Self::new(i, j)
    }
}

/// Insertion-ordered set of canonical edges.
///
/// Iteration yields edges in the order they were first inserted, which keeps
/// every writer's output deterministic.
pub type EdgeSet = IndexSet<Edge>;

/// Iterates `edges` in insertion order, skipping self-edges.
pub fn proper_edges(edges: &EdgeSet) -> impl Iterator<Item = Edge> + '_ {
    edges.iter().copied().filter(|e| !e.is_self_edge())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edge_is_canonical() {
        assert_eq!(Edge::new(5, 2), Edge::new(2, 5));
        assert_eq!(Edge::new(5, 2).endpoints(), (2, 5));
    }

    #[test]
    fn self_edge_detected() {
        assert!(Edge::new(3, 3).is_self_edge());
        assert!(!Edge::new(3, 4).is_self_edge());
    }

    #[test]
    fn duplicates_collapse() {
        let mut set = EdgeSet::new();
        assert!(set.insert(Edge::new(0, 1)));
        assert!(!set.insert(Edge::new(1, 0)));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn keeps_insertion_order() {
        let set: EdgeSet = [(4, 2), (0, 1), (3, 1), (1, 0)]
            .into_iter()
            .map(Edge::from)
            .collect();
        let order: Vec<_> = set.iter().map(|e| e.endpoints()).collect();
        assert_eq!(order, vec![(2, 4), (0, 1), (1, 3)]);
    }

    #[test]
    fn proper_edges_skip_self_edges() {
        let set: EdgeSet = [(0, 0), (0, 1), (1, 2)].into_iter().map(Edge::from).collect();
        let proper: Vec<_> = proper_edges(&set).map(Edge::endpoints).collect();
        assert_eq!(proper, vec![(0, 1), (1, 2)]);
    }
}
