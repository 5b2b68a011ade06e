//! Binary trees built from level-order arrays, with iterative traversals.
//!
//! Every traversal here uses an explicit stack or queue, so the tree height
//! is bounded by heap memory rather than the call stack. Dropping a tree is
//! iterative for the same reason.

use std::collections::VecDeque;

/// Owning link to a subtree; `None` is the absent tree.
pub type TreeLink<T> = Option<Box<TreeNode<T>>>;

#[derive(Debug, PartialEq, Eq)]
pub struct TreeNode<T> {
    value: T,
    left: TreeLink<T>,
    right: TreeLink<T>,
}

impl<T> TreeNode<T> {
    pub fn new(value: T) -> Self {
        Self {
            value,
            left: None,
            right: None,
        }
    }

    pub fn with_children(value: T, left: TreeLink<T>, right: TreeLink<T>) -> Self {
        Self { value, left, right }
    }

    pub fn value(&self) -> &T {
        &self.value
    }

    pub fn left(&self) -> Option<&TreeNode<T>> {
        self.left.as_deref()
    }

    pub fn right(&self) -> Option<&TreeNode<T>> {
        self.right.as_deref()
    }

    pub fn set_left(&mut self, child: TreeLink<T>) -> TreeLink<T> {
        std::mem::replace(&mut self.left, child)
    }

    pub fn set_right(&mut self, child: TreeLink<T>) -> TreeLink<T> {
        std::mem::replace(&mut self.right, child)
    }

    /// Number of nodes in this subtree.
    pub fn node_count(&self) -> usize {
        level_order(Some(self)).len()
    }

    /// Number of levels in this subtree (a leaf has height 1).
    pub fn height(&self) -> usize {
        levels(Some(self)).len()
    }
}

impl<T> Drop for TreeNode<T> {
    fn drop(&mut self) {
        let mut pending: Vec<Box<TreeNode<T>>> = Vec::new();
        pending.extend(self.left.take());
        pending.extend(self.right.take());
        while let Some(mut node) = pending.pop() {
            pending.extend(node.left.take());
            pending.extend(node.right.take());
        }
    }
}

/// Build a tree from a level-order array with `None` as the absent marker.
///
/// The node at index `i` takes its children from indices `2i + 1` and
/// `2i + 2`. Returns `None` for empty input or an absent root. Entries whose
/// parent is absent cannot be reached and are dropped.
pub fn build_from_level_array<T, I>(values: I) -> TreeLink<T>
where
    I: IntoIterator<Item = Option<T>>,
{
    let mut nodes: Vec<TreeLink<T>> = values
        .into_iter()
        .map(|v| v.map(|value| Box::new(TreeNode::new(value))))
        .collect();

    #[cfg(feature = "tracing")]
    let span = tracing::trace_span!("build_from_level_array", slots = nodes.len());
    #[cfg(feature = "tracing")]
    let _enter = span.enter();

    let n = nodes.len();
    // children sit at higher indices, so walking down finishes each subtree
    // before it moves into its parent
    for i in (0..n).rev() {
        if nodes[i].is_none() {
            continue;
        }
        let left = nodes.get_mut(2 * i + 1).and_then(Option::take);
        let right = nodes.get_mut(2 * i + 2).and_then(Option::take);
        if let Some(node) = nodes[i].as_mut() {
            node.left = left;
            node.right = right;
        }
    }

    nodes.into_iter().next().flatten()
}

/// Root, left subtree, right subtree.
pub fn preorder<T>(root: Option<&TreeNode<T>>) -> Vec<&T> {
    let mut order = Vec::new();
    let mut stack: Vec<&TreeNode<T>> = root.into_iter().collect();
    while let Some(node) = stack.pop() {
        order.push(&node.value);
        // right first so left is popped first
        stack.extend(node.right());
        stack.extend(node.left());
    }
    order
}

/// Left subtree, root, right subtree.
pub fn inorder<T>(root: Option<&TreeNode<T>>) -> Vec<&T> {
    let mut order = Vec::new();
    let mut stack: Vec<&TreeNode<T>> = Vec::new();
    let mut cur = root;
    loop {
        while let Some(node) = cur {
            stack.push(node);
            cur = node.left();
        }
        let Some(node) = stack.pop() else {
            break;
        };
        order.push(&node.value);
        cur = node.right();
    }
    order
}

/// Left subtree, right subtree, root.
///
/// Runs a mirrored preorder (root, right, left) and reverses it.
pub fn postorder<T>(root: Option<&TreeNode<T>>) -> Vec<&T> {
    let mut order = Vec::new();
    let mut stack: Vec<&TreeNode<T>> = root.into_iter().collect();
    while let Some(node) = stack.pop() {
        order.push(&node.value);
        stack.extend(node.left());
        stack.extend(node.right());
    }
    order.reverse();
    order
}

/// Breadth-first order, children left then right.
pub fn level_order<T>(root: Option<&TreeNode<T>>) -> Vec<&T> {
    let mut order = Vec::new();
    let mut queue: VecDeque<&TreeNode<T>> = root.into_iter().collect();
    while let Some(node) = queue.pop_front() {
        order.push(&node.value);
        queue.extend(node.left());
        queue.extend(node.right());
    }
    order
}

/// Level order split into one vector per depth.
pub fn levels<T>(root: Option<&TreeNode<T>>) -> Vec<Vec<&T>> {
    let mut out = Vec::new();
    let mut queue: VecDeque<&TreeNode<T>> = root.into_iter().collect();
    while !queue.is_empty() {
        let width = queue.len();
        let mut level = Vec::with_capacity(width);
        for _ in 0..width {
            let Some(node) = queue.pop_front() else {
                break;
            };
            level.push(&node.value);
            queue.extend(node.left());
            queue.extend(node.right());
        }
        out.push(level);
    }
    out
}
