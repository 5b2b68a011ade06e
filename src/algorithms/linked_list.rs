//! Singly-linked list with exclusively owned nodes.
//!
//! The list owns its head and every node owns its successor, so relinking
//! (`reverse`, `sort`, [`merge_sorted_lists`]) moves boxes around without
//! copying values or allocating. Dropping is iterative, so long lists do
//! not recurse through `Box` destructors.

use std::fmt;

type Link<T> = Option<Box<ListNode<T>>>;

#[derive(Debug)]
pub struct ListNode<T> {
    value: T,
    next: Link<T>,
}

impl<T> ListNode<T> {
    fn new(value: T) -> Self {
        Self { value, next: None }
    }

    pub fn value(&self) -> &T {
        &self.value
    }

    pub fn next(&self) -> Option<&ListNode<T>> {
        self.next.as_deref()
    }
}

pub struct LinkedList<T> {
    head: Link<T>,
    len: usize,
}

impl<T> LinkedList<T> {
    pub fn new() -> Self {
        Self { head: None, len: 0 }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    pub fn head(&self) -> Option<&ListNode<T>> {
        self.head.as_deref()
    }

    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            next: self.head.as_deref(),
            remaining: self.len,
        }
    }

    /// Add `value` at the tail. Walks from the head, so O(n).
    pub fn append(&mut self, value: T) {
        let mut tail = &mut self.head;
        while let Some(node) = tail {
            tail = &mut node.next;
        }
        *tail = Some(Box::new(ListNode::new(value)));
        self.len += 1;
    }

    pub fn pop_front(&mut self) -> Option<T> {
        self.head.take().map(|node| {
            let node = *node;
            self.head = node.next;
            self.len -= 1;
            node.value
        })
    }

    /// Reverse the chain in place: one forward walk, each node re-pointed at
    /// its predecessor. O(n) time, O(1) extra space.
    pub fn reverse(&mut self) {
        let mut prev: Link<T> = None;
        let mut cur = self.head.take();
        while let Some(mut node) = cur {
            cur = node.next.take();
            node.next = prev;
            prev = Some(node);
        }
        self.head = prev;
    }

    pub fn clear(&mut self) {
        let mut cur = self.head.take();
        while let Some(mut node) = cur {
            cur = node.next.take();
        }
        self.len = 0;
    }
}

impl<T: PartialOrd> LinkedList<T> {
    /// Stable in-place merge sort.
    ///
    /// Halves are found with a slow/fast walk; equal elements keep their
    /// relative order. Recursion depth is O(log n).
    pub fn sort(&mut self) {
        #[cfg(feature = "tracing")]
        let span = tracing::trace_span!("list_sort", len = self.len);
        #[cfg(feature = "tracing")]
        let _enter = span.enter();

        self.head = merge_sort(self.head.take());
    }
}

impl<T: Clone> LinkedList<T> {
    pub fn to_vec(&self) -> Vec<T> {
        self.iter().cloned().collect()
    }
}

/// Merge two sorted lists into one, consuming both.
///
/// Takes the lesser front node at each step; on ties the node from `a`
/// goes first. Inputs that are not sorted produce an interleaving, not a
/// sorted list.
pub fn merge_sorted_lists<T: PartialOrd>(mut a: LinkedList<T>, mut b: LinkedList<T>) -> LinkedList<T> {
    let len = a.len + b.len;
    let head = merge(a.head.take(), b.head.take());
    LinkedList { head, len }
}

fn merge_sort<T: PartialOrd>(mut head: Link<T>) -> Link<T> {
    let steps = match head.as_deref() {
        Some(node) if node.next.is_some() => Some(midpoint_steps(node)),
        _ => None,
    };
    let Some(steps) = steps else {
        return head;
    };
    let right = split_after(&mut head, steps);
    merge(merge_sort(head), merge_sort(right))
}

/// Slow/fast walk: `fast` starts one node ahead and advances two per step,
/// `slow` advances one. Returns how far `slow` moved, i.e. the index of the
/// last node of the left half.
fn midpoint_steps<T>(head: &ListNode<T>) -> usize {
    let mut slow = 0;
    let mut fast = head.next();
    while let Some(node) = fast {
        match node.next() {
            Some(second) => {
                slow += 1;
                fast = second.next();
            }
            None => break,
        }
    }
    slow
}

/// Detach and return everything after the node at index `steps`.
fn split_after<T>(head: &mut Link<T>, steps: usize) -> Link<T> {
    let mut cur = head.as_deref_mut();
    for _ in 0..steps {
        cur = cur.and_then(|node| node.next.as_deref_mut());
    }
    cur.and_then(|node| node.next.take())
}

fn merge<T: PartialOrd>(mut left: Link<T>, mut right: Link<T>) -> Link<T> {
    let mut head: Link<T> = None;
    let mut tail = &mut head;
    loop {
        let take_left = match (left.as_deref(), right.as_deref()) {
            // right only wins when strictly smaller
            (Some(l), Some(r)) => !(r.value < l.value),
            _ => break,
        };
        let source = if take_left { &mut left } else { &mut right };
        if let Some(mut node) = source.take() {
            *source = node.next.take();
            tail = &mut tail.insert(node).next;
        }
    }
    *tail = left.or(right);
    head
}

impl<T> Drop for LinkedList<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T> Default for LinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<T> for LinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = LinkedList::new();
        list.extend(iter);
        list
    }
}

impl<T> Extend<T> for LinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let mut tail = &mut self.head;
        while let Some(node) = tail {
            tail = &mut node.next;
        }
        for value in iter {
            tail = &mut tail.insert(Box::new(ListNode::new(value))).next;
            self.len += 1;
        }
    }
}

impl<T: Clone> Clone for LinkedList<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T: PartialEq> PartialEq for LinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for LinkedList<T> {}

impl<T: fmt::Debug> fmt::Debug for LinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// Renders `1 -> 2 -> 3`; the empty list renders as an empty string.
impl<T: fmt::Display> fmt::Display for LinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, value) in self.iter().enumerate() {
            if idx > 0 {
                f.write_str(" -> ")?;
            }
            write!(f, "{value}")?;
        }
        Ok(())
    }
}

pub struct Iter<'a, T> {
    next: Option<&'a ListNode<T>>,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.next.map(|node| {
            self.next = node.next.as_deref();
            self.remaining -= 1;
            &node.value
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<'a, T> IntoIterator for &'a LinkedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

pub struct IntoIter<T>(LinkedList<T>);

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.0.pop_front()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.0.len, Some(self.0.len))
    }
}

impl<T> IntoIterator for LinkedList<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Orders by `key` only, so `tag` reveals whether equal keys moved.
    #[derive(Clone, Copy, Debug, PartialEq)]
    struct Keyed {
        key: u8,
        tag: char,
    }

    impl PartialOrd for Keyed {
        fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
            self.key.partial_cmp(&other.key)
        }
    }

    fn keyed(pairs: &[(u8, char)]) -> LinkedList<Keyed> {
        pairs.iter().map(|&(key, tag)| Keyed { key, tag }).collect()
    }

    #[test]
    fn append_preserves_order_and_len() {
        let mut list = LinkedList::new();
        for v in [3, 1, 2] {
            list.append(v);
        }
        assert_eq!(list.len(), 3);
        assert_eq!(list.to_vec(), vec![3, 1, 2]);
        assert_eq!(list.head().map(ListNode::value), Some(&3));
        assert_eq!(list.head().and_then(ListNode::next).map(ListNode::value), Some(&1));
    }

    #[test]
    fn reverse_small_lists() {
        let mut empty: LinkedList<i32> = LinkedList::new();
        empty.reverse();
        assert!(empty.is_empty());

        let mut one: LinkedList<i32> = [7].into_iter().collect();
        one.reverse();
        assert_eq!(one.to_vec(), vec![7]);

        let mut many: LinkedList<i32> = (1..=5).collect();
        many.reverse();
        assert_eq!(many.to_vec(), vec![5, 4, 3, 2, 1]);
        assert_eq!(many.len(), 5);
    }

    #[test]
    fn midpoint_splits_left_heavy() {
        let list: LinkedList<i32> = (0..5).collect();
        assert_eq!(list.head().map(midpoint_steps), Some(2));
        let list: LinkedList<i32> = (0..4).collect();
        assert_eq!(list.head().map(midpoint_steps), Some(1));
        let list: LinkedList<i32> = (0..2).collect();
        assert_eq!(list.head().map(midpoint_steps), Some(0));
    }

    #[test]
    fn sort_is_stable() {
        let mut list = keyed(&[(2, 'a'), (1, 'b'), (2, 'c'), (1, 'd'), (0, 'e')]);
        list.sort();
        let tags: String = list.iter().map(|k| k.tag).collect();
        assert_eq!(tags, "ebdac");
    }

    #[test]
    fn merge_prefers_left_on_ties() {
        let merged = merge_sorted_lists(keyed(&[(1, 'l'), (3, 'l')]), keyed(&[(1, 'r'), (2, 'r')]));
        let tags: Vec<(u8, char)> = merged.iter().map(|k| (k.key, k.tag)).collect();
        assert_eq!(tags, vec![(1, 'l'), (1, 'r'), (2, 'r'), (3, 'l')]);
        assert_eq!(merged.len(), 4);
    }

    #[test]
    fn merge_with_empty_side() {
        let a: LinkedList<i32> = (1..=3).collect();
        let merged = merge_sorted_lists(a.clone(), LinkedList::new());
        assert_eq!(merged, a);
        let merged = merge_sorted_lists(LinkedList::new(), a.clone());
        assert_eq!(merged, a);
        let merged: LinkedList<i32> = merge_sorted_lists(LinkedList::new(), LinkedList::new());
        assert!(merged.is_empty());
    }

    #[test]
    fn display_joins_with_arrows() {
        let list: LinkedList<i32> = [1, 2, 3].into_iter().collect();
        assert_eq!(list.to_string(), "1 -> 2 -> 3");
        assert_eq!(LinkedList::<i32>::new().to_string(), "");
        assert_eq!(format!("{list:?}"), "[1, 2, 3]");
    }

    #[test]
    fn owned_iteration_and_extend() {
        let mut list: LinkedList<String> = ["a", "b"].iter().map(|s| s.to_string()).collect();
        list.extend(["c".to_string()]);
        assert_eq!(list.len(), 3);
        assert_eq!(list.iter().len(), 3);
        let owned: Vec<String> = list.into_iter().collect();
        assert_eq!(owned, vec!["a", "b", "c"]);
    }

    #[test]
    fn pop_front_tracks_len() {
        let mut list: LinkedList<i32> = (1..=2).collect();
        assert_eq!(list.pop_front(), Some(1));
        assert_eq!(list.len(), 1);
        assert_eq!(list.pop_front(), Some(2));
        assert_eq!(list.pop_front(), None);
        assert!(list.is_empty());
    }
}
