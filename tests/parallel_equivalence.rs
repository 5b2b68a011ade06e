#![cfg(feature = "parallel")]

use classic_algos::{all_sources_shortest_paths, shortest_paths, Graph};
use proptest::prelude::*;

proptest! {
    #[test]
    fn all_sources_matches_one_by_one(
        n in 1usize..16,
        edges in prop::collection::vec((0usize..16, 0usize..16, 0i64..30), 0..60)
    ) {
        let mut g = Graph::new(n);
        for (u, v, w) in edges {
            if u < n && v < n {
                g.add_edge(u, v, w).unwrap();
            }
        }
        let parallel = all_sources_shortest_paths(&g);
        prop_assert_eq!(parallel.len(), n);
        for (src, sp) in parallel.iter().enumerate() {
            prop_assert_eq!(sp, &shortest_paths(&g, src).unwrap());
        }
    }
}
