//! Example: build a tree from a level-order array and walk it.
//!
//! Run with:
//! `cargo run --example traversal`

use classic_algos::{build_from_level_array, inorder, level_order, levels, postorder, preorder};

fn join(values: Vec<&i32>) -> String {
    values
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

fn main() {
    let root = build_from_level_array([1, 3, 5, 7, 9, 11, 13].map(Some));
    let root = root.as_deref();

    println!("level order: {}", join(level_order(root)));
    println!("preorder:    {}", join(preorder(root)));
    println!("inorder:     {}", join(inorder(root)));
    println!("postorder:   {}", join(postorder(root)));
    for (depth, level) in levels(root).into_iter().enumerate() {
        println!("depth {depth}: {}", join(level));
    }
}
