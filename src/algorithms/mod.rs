//! The four algorithm components.
//!
//! Each module is independent of the others:
//! - [`dijkstra`]     : weighted directed graph and single-source shortest paths.
//! - [`knapsack`]     : greedy and exact budget-constrained selection.
//! - [`binary_tree`]  : level-array construction and iterative traversals.
//! - [`linked_list`]  : owned singly-linked list with reverse, merge sort and merge.

pub mod binary_tree;
pub mod dijkstra;
pub mod knapsack;
pub mod linked_list;
