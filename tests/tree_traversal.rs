use classic_algos::{
    build_from_level_array, inorder, level_order, levels, postorder, preorder, TreeNode,
};
use proptest::prelude::*;

fn values<T: Copy>(refs: Vec<&T>) -> Vec<T> {
    refs.into_iter().copied().collect()
}

#[test]
fn seven_node_complete_tree() {
    let root = build_from_level_array([1, 3, 5, 7, 9, 11, 13].map(Some));
    let root = root.as_deref();
    assert_eq!(values(level_order(root)), vec![1, 3, 5, 7, 9, 11, 13]);
    assert_eq!(values(preorder(root)), vec![1, 3, 7, 9, 5, 11, 13]);
    assert_eq!(values(inorder(root)), vec![7, 3, 9, 1, 11, 5, 13]);
    assert_eq!(values(postorder(root)), vec![7, 9, 3, 11, 13, 5, 1]);
}

#[test]
fn string_values() {
    let root = build_from_level_array(
        ["root", "left", "right"].map(|s| Some(s.to_string())),
    );
    let order: Vec<&str> = preorder(root.as_deref()).into_iter().map(String::as_str).collect();
    assert_eq!(order, vec!["root", "left", "right"]);
}

/// A left spine: index 2^k - 1 holds depth k, every other slot is absent.
fn left_spine_slots(depth: usize) -> Vec<Option<usize>> {
    let last = (1usize << depth) - 1;
    let mut slots = vec![None; last];
    let mut idx = 0;
    let mut level = 0;
    while idx < last {
        slots[idx] = Some(level);
        idx = 2 * idx + 1;
        level += 1;
    }
    slots
}

#[test]
fn left_spine_visits_top_down() {
    let root = build_from_level_array(left_spine_slots(6)).unwrap();
    assert_eq!(values(preorder(Some(&*root))), vec![0, 1, 2, 3, 4, 5]);
    assert_eq!(values(inorder(Some(&*root))), vec![5, 4, 3, 2, 1, 0]);
    assert_eq!(root.height(), 6);
}

#[test]
fn deep_hand_built_chain_does_not_overflow() {
    let depth = 200_000;
    let mut root = TreeNode::new(0);
    for v in 1..depth {
        root = TreeNode::with_children(v, None, Some(Box::new(root)));
    }
    assert_eq!(preorder(Some(&root)).len(), depth);
    assert_eq!(level_order(Some(&root)).len(), depth);
    assert_eq!(postorder(Some(&root)).len(), depth);
    assert_eq!(inorder(Some(&root)).len(), depth);
    drop(root);
}

proptest! {
    #[test]
    fn every_traversal_visits_each_reachable_node_once(
        slots in prop::collection::vec(prop::option::weighted(0.8, 0i32..1000), 0..64)
    ) {
        let root = build_from_level_array(slots.clone());
        let root = root.as_deref();
        let mut bfs = values(level_order(root));
        let mut dfs = values(preorder(root));
        let mut ino = values(inorder(root));
        let mut post = values(postorder(root));
        let flat: Vec<i32> = levels(root).into_iter().flatten().copied().collect();
        prop_assert_eq!(&flat, &bfs);
        bfs.sort_unstable();
        dfs.sort_unstable();
        ino.sort_unstable();
        post.sort_unstable();
        prop_assert_eq!(&bfs, &dfs);
        prop_assert_eq!(&bfs, &ino);
        prop_assert_eq!(&bfs, &post);
    }

    #[test]
    fn full_arrays_round_trip_through_level_order(
        slots in prop::collection::vec(0i32..1000, 0..64)
    ) {
        let root = build_from_level_array(slots.iter().copied().map(Some));
        prop_assert_eq!(values(level_order(root.as_deref())), slots);
    }
}
