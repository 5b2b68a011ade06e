//! Classic algorithms over in-memory structures.
//!
//! The crate bundles four small, independent components:
//! 1. Shortest paths: build a weighted [`Graph`] and run Dijkstra from a
//!    source with [`shortest_paths`]; recover a route with
//!    [`reconstruct_path`].
//! 2. Budgeted selection: choose items from a [`Catalog`] with the
//!    ratio-greedy heuristic ([`greedy_select`]) or the exact 0/1 knapsack DP
//!    ([`optimal_select`]).
//! 3. Binary trees: build from a level-order array with
//!    [`build_from_level_array`] and traverse without recursion.
//! 4. Linked lists: an owned singly-linked [`LinkedList`] with in-place
//!    reverse and merge sort, plus [`merge_sorted_lists`].
//!
//! ## Quick start
//! ```
//! use classic_algos::{shortest_paths, GraphBuilder};
//!
//! let graph = GraphBuilder::new(3)
//!     .edge(0, 1, 4)
//!     .edge(1, 2, 1)
//!     .edge(0, 2, 7)
//!     .build()
//!     .unwrap();
//! let sp = shortest_paths(&graph, 0).unwrap();
//! assert_eq!(sp.dist, vec![Some(0), Some(4), Some(5)]);
//! assert_eq!(sp.path_to(2), Some(vec![0, 1, 2]));
//! ```
//!
//! ## Cargo features
//! - `tracing`: emit `tracing` spans around each algorithm run.
//! - `parallel`: run [`all_sources_shortest_paths`] on the rayon pool.
//! - `heavy`: enable large stress tests.

pub mod algorithms;
pub mod builder;
pub mod error;
pub mod traits;
pub mod utils;

pub use crate::algorithms::binary_tree::{
    build_from_level_array, inorder, level_order, levels, postorder, preorder, TreeLink, TreeNode,
};
pub use crate::algorithms::dijkstra::{
    all_sources_shortest_paths, reconstruct_path, shortest_paths, Graph, ShortestPaths,
};
pub use crate::algorithms::knapsack::{
    greedy_select, optimal_select, optimal_value, Catalog, Exact, Greedy, Item, Selection,
};
pub use crate::algorithms::linked_list::{merge_sorted_lists, LinkedList, ListNode};
pub use crate::builder::GraphBuilder;
pub use crate::error::{AlgoError, Result};
pub use crate::traits::SelectionStrategy;
