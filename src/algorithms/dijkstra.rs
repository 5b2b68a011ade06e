//! Single-source shortest paths over a weighted directed graph.
//!
//! Graph structure: vertices `0..n`, adjacency lists of `(neighbor, weight)`
//! with non-negative weights. The query is the classic label-setting
//! (Dijkstra) method driven by a binary min-heap without decrease-key:
//! improved labels are pushed as new heap entries and outdated ones are
//! discarded when popped.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use crate::error::{AlgoError, Result};

/// Directed weighted graph stored as adjacency lists.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Graph {
    /// adjacency[u] = edges `(v, weight)` leaving `u`, in insertion order
    adjacency: Vec<Vec<(usize, i64)>>,
}

impl Graph {
    /// Create a graph with `vertex_count` vertices and no edges.
    pub fn new(vertex_count: usize) -> Self {
        Self {
            adjacency: vec![Vec::new(); vertex_count],
        }
    }

    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    pub fn edge_count(&self) -> usize {
        self.adjacency.iter().map(Vec::len).sum()
    }

    /// Outgoing edges of `u` in insertion order. Empty for out-of-range ids.
    pub fn neighbors(&self, u: usize) -> &[(usize, i64)] {
        self.adjacency.get(u).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Iterate over every edge as `(from, to, weight)`.
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize, i64)> + '_ {
        self.adjacency
            .iter()
            .enumerate()
            .flat_map(|(u, edges)| edges.iter().map(move |&(v, w)| (u, v, w)))
    }

    /// Append the directed edge `u -> v` with weight `w`.
    ///
    /// # Errors
    /// [`AlgoError::InvalidWeight`] if `w < 0`, [`AlgoError::OutOfRange`] if
    /// either endpoint is not a vertex of this graph. The graph is left
    /// unchanged on error.
    pub fn add_edge(&mut self, u: usize, v: usize, w: i64) -> Result<()> {
        self.check_edge(u, v, w)?;
        self.adjacency[u].push((v, w));
        Ok(())
    }

    /// Insert both `u -> v` and `v -> u` with weight `w`.
    ///
    /// Both directions are validated before either is inserted.
    pub fn add_undirected_edge(&mut self, u: usize, v: usize, w: i64) -> Result<()> {
        self.check_edge(u, v, w)?;
        self.adjacency[u].push((v, w));
        self.adjacency[v].push((u, w));
        Ok(())
    }

    fn check_edge(&self, u: usize, v: usize, w: i64) -> Result<()> {
        if w < 0 {
            return Err(AlgoError::InvalidWeight {
                from: u,
                to: v,
                weight: w,
            });
        }
        self.check_vertex(u)?;
        self.check_vertex(v)
    }

    fn check_vertex(&self, vertex: usize) -> Result<()> {
        if vertex < self.vertex_count() {
            Ok(())
        } else {
            Err(AlgoError::OutOfRange {
                vertex,
                vertex_count: self.vertex_count(),
            })
        }
    }
}

/// Result of a single-source query.
///
/// `dist[v]` is `None` when `v` is unreachable from `source`; in that case
/// `predecessor[v]` is `None` as well. `predecessor[source]` is always `None`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShortestPaths {
    pub source: usize,
    pub dist: Vec<Option<i64>>,
    pub predecessor: Vec<Option<usize>>,
}

impl ShortestPaths {
    pub fn distance_to(&self, target: usize) -> Option<i64> {
        self.dist.get(target).copied().flatten()
    }

    /// Forward-ordered vertex sequence `source ..= target`, or `None` if
    /// `target` cannot be reached.
    pub fn path_to(&self, target: usize) -> Option<Vec<usize>> {
        reconstruct_path(&self.predecessor, self.source, target)
    }

    pub fn is_reachable(&self, target: usize) -> bool {
        self.distance_to(target).is_some()
    }
}

/// Compute shortest distances and one shortest-path predecessor per vertex.
///
/// Heap entries are `(distance, vertex)` wrapped in [`Reverse`], so ties on
/// distance pop the lower vertex id first. Runs in O((V + E) log V).
///
/// # Errors
/// [`AlgoError::OutOfRange`] if `src` is not a vertex of `graph`.
pub fn shortest_paths(graph: &Graph, src: usize) -> Result<ShortestPaths> {
    graph.check_vertex(src)?;
    Ok(settle_from(graph, src))
}

/// Dijkstra proper. `src` must be a vertex of `graph`.
fn settle_from(graph: &Graph, src: usize) -> ShortestPaths {
    debug_assert!(src < graph.vertex_count());

    #[cfg(feature = "tracing")]
    let span = tracing::trace_span!(
        "shortest_paths",
        src,
        vertices = graph.vertex_count(),
        edges = graph.edge_count()
    );
    #[cfg(feature = "tracing")]
    let _enter = span.enter();

    let n = graph.vertex_count();
    let mut dist: Vec<Option<i64>> = vec![None; n];
    let mut predecessor: Vec<Option<usize>> = vec![None; n];
    let mut finalized = vec![false; n];
    dist[src] = Some(0);

    let mut heap = BinaryHeap::new();
    heap.push(Reverse((0i64, src)));

    while let Some(Reverse((d, v))) = heap.pop() {
        // stale entry: v already settled, or a shorter label was pushed later
        if finalized[v] || dist[v].is_some_and(|best| d > best) {
            #[cfg(feature = "tracing")]
            tracing::trace!(vertex = v, popped = d, "discarding stale heap entry");
            continue;
        }
        finalized[v] = true;

        for &(u, w) in &graph.adjacency[v] {
            let cand = d.saturating_add(w);
            if dist[u].map_or(true, |cur| cand < cur) {
                dist[u] = Some(cand);
                predecessor[u] = Some(v);
                heap.push(Reverse((cand, u)));
            }
        }
    }

    ShortestPaths {
        source: src,
        dist,
        predecessor,
    }
}

/// Walk `predecessor` links back from `target` to `src` and return the
/// forward-ordered path.
///
/// Returns `Some(vec![src])` when `target == src`, and `None` when `target`
/// is out of range, unreachable, or its predecessor chain never reaches `src`.
pub fn reconstruct_path(
    predecessor: &[Option<usize>],
    src: usize,
    target: usize,
) -> Option<Vec<usize>> {
    if target >= predecessor.len() {
        return None;
    }
    if target == src {
        return Some(vec![src]);
    }

    let mut path = vec![target];
    let mut cur = target;
    // a well-formed chain visits each vertex at most once
    while path.len() <= predecessor.len() {
        let prev = (*predecessor.get(cur)?)?;
        path.push(prev);
        if prev == src {
            path.reverse();
            return Some(path);
        }
        cur = prev;
    }
    None
}

/// Run [`shortest_paths`] from every vertex of `graph`.
///
/// With the `parallel` feature the sources are processed on the rayon pool;
/// the output is identical to the sequential run and ordered by source.
pub fn all_sources_shortest_paths(graph: &Graph) -> Vec<ShortestPaths> {
    #[cfg(feature = "tracing")]
    let span = tracing::info_span!("all_sources_shortest_paths", vertices = graph.vertex_count());
    #[cfg(feature = "tracing")]
    let _enter = span.enter();

    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;
        (0..graph.vertex_count())
            .into_par_iter()
            .map(|src| settle_from(graph, src))
            .collect()
    }
    #[cfg(not(feature = "parallel"))]
    {
        (0..graph.vertex_count())
            .map(|src| settle_from(graph, src))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn diamond() -> Graph {
        // 0 -> 1 -> 3 costs 2, 0 -> 2 -> 3 costs 2: equal-cost alternatives
        let mut g = Graph::new(4);
        g.add_edge(0, 1, 1).unwrap();
        g.add_edge(0, 2, 1).unwrap();
        g.add_edge(1, 3, 1).unwrap();
        g.add_edge(2, 3, 1).unwrap();
        g
    }

    #[test]
    fn negative_weight_rejected_before_range_check() {
        let mut g = Graph::new(2);
        let err = g.add_edge(0, 7, -1).unwrap_err();
        assert_eq!(
            err,
            AlgoError::InvalidWeight {
                from: 0,
                to: 7,
                weight: -1
            }
        );
        assert_eq!(g.edge_count(), 0);
    }

    #[test]
    fn out_of_range_endpoint_rejected() {
        let mut g = Graph::new(2);
        assert_eq!(
            g.add_edge(0, 2, 1),
            Err(AlgoError::OutOfRange {
                vertex: 2,
                vertex_count: 2
            })
        );
        assert!(g.add_undirected_edge(5, 0, 1).is_err());
        assert_eq!(g.edge_count(), 0);
    }

    #[test]
    fn source_out_of_range_is_an_error() {
        let g = Graph::new(3);
        assert!(matches!(
            shortest_paths(&g, 3),
            Err(AlgoError::OutOfRange { vertex: 3, .. })
        ));
    }

    #[test]
    fn ties_resolve_to_first_relaxation() {
        let sp = shortest_paths(&diamond(), 0).unwrap();
        assert_eq!(sp.dist, vec![Some(0), Some(1), Some(1), Some(2)]);
        // vertex 1 pops before vertex 2 and relaxes 3 first; 2 cannot improve it
        assert_eq!(sp.predecessor[3], Some(1));
        assert_eq!(sp.path_to(3), Some(vec![0, 1, 3]));
    }

    #[test]
    fn unreachable_vertex_keeps_no_label() {
        let mut g = Graph::new(3);
        g.add_edge(0, 1, 4).unwrap();
        let sp = shortest_paths(&g, 0).unwrap();
        assert_eq!(sp.distance_to(2), None);
        assert_eq!(sp.predecessor[2], None);
        assert_eq!(sp.path_to(2), None);
        assert!(!sp.is_reachable(2));
    }

    #[test]
    fn zero_weight_edges_are_allowed() {
        let mut g = Graph::new(3);
        g.add_edge(0, 1, 0).unwrap();
        g.add_edge(1, 2, 0).unwrap();
        let sp = shortest_paths(&g, 0).unwrap();
        assert_eq!(sp.dist, vec![Some(0), Some(0), Some(0)]);
        assert_eq!(sp.path_to(2), Some(vec![0, 1, 2]));
    }

    #[test]
    fn reconstruct_handles_degenerate_inputs() {
        assert_eq!(reconstruct_path(&[None, None], 1, 1), Some(vec![1]));
        assert_eq!(reconstruct_path(&[None, None], 0, 5), None);
        // chain 2 -> 1 -> 2 never reaches 0
        assert_eq!(reconstruct_path(&[None, Some(2), Some(1)], 0, 2), None);
    }

    #[test]
    fn all_sources_ordered_by_source() {
        let all = all_sources_shortest_paths(&diamond());
        assert_eq!(all.len(), 4);
        for (src, sp) in all.iter().enumerate() {
            assert_eq!(sp.source, src);
            assert_eq!(sp.dist[src], Some(0));
        }
        assert_eq!(all[3].dist, vec![None, None, None, Some(0)]);
    }

    #[test]
    fn all_sources_matches_single_source_runs() {
        let mut g = diamond();
        g.add_edge(3, 0, 5).unwrap();
        let all = all_sources_shortest_paths(&g);
        assert_eq!(all.len(), g.vertex_count());
        for (src, sp) in all.into_iter().enumerate() {
            assert_eq!(Ok(sp), shortest_paths(&g, src));
        }
    }
}
