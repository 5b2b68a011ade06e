use crate::algorithms::dijkstra::Graph;
use crate::error::Result;

/// Collects edges and validates them all at once in [`build`](Self::build).
pub struct GraphBuilder {
    vertex_count: usize,
    undirected: bool,
    edges: Vec<(usize, usize, i64)>,
}

impl GraphBuilder {
    pub fn new(vertex_count: usize) -> Self {
        Self {
            vertex_count,
            undirected: false,
            edges: Vec::new(),
        }
    }
    /// Insert every edge in both directions.
    pub fn undirected(mut self) -> Self {
        self.undirected = true;
        self
    }
    pub fn edge(mut self, u: usize, v: usize, w: i64) -> Self {
        self.edges.push((u, v, w));
        self
    }
    pub fn edges<I>(mut self, edges: I) -> Self
    where
        I: IntoIterator<Item = (usize, usize, i64)>,
    {
        self.edges.extend(edges);
        self
    }
    /// Fails on the first invalid edge in insertion order.
    pub fn build(self) -> Result<Graph> {
        let mut graph = Graph::new(self.vertex_count);
        for (u, v, w) in self.edges {
            if self.undirected {
                graph.add_undirected_edge(u, v, w)?;
            } else {
                graph.add_edge(u, v, w)?;
            }
        }
        Ok(graph)
    }
}

#[cfg(test)]
mod tests {
    use super::GraphBuilder;
    use crate::error::AlgoError;

    #[test]
    fn undirected_doubles_edges() {
        let g = GraphBuilder::new(3)
            .undirected()
            .edge(0, 1, 2)
            .edge(1, 2, 3)
            .build()
            .unwrap();
        assert_eq!(g.edge_count(), 4);
        assert_eq!(g.neighbors(1), &[(0, 2), (2, 3)]);
    }

    #[test]
    fn first_invalid_edge_wins() {
        let err = GraphBuilder::new(2)
            .edges([(0, 1, 1), (1, 5, 1), (0, 1, -4)])
            .build()
            .unwrap_err();
        assert_eq!(
            err,
            AlgoError::OutOfRange {
                vertex: 5,
                vertex_count: 2
            }
        );
    }
}
