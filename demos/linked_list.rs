//! Example: append, reverse, sort and merge linked lists.
//!
//! Run with:
//! `cargo run --example linked_list`

use classic_algos::{merge_sorted_lists, LinkedList};

fn main() {
    let mut list = LinkedList::new();
    for v in [3, 1, 4, 1, 5, 9, 2, 6, 5] {
        list.append(v);
    }
    println!("original: {list}");

    list.reverse();
    println!("reversed: {list}");

    list.sort();
    println!("sorted:   {list}");

    let odds: LinkedList<i32> = [1, 3, 5].into_iter().collect();
    let evens: LinkedList<i32> = [2, 4, 6].into_iter().collect();
    println!("merged:   {}", merge_sorted_lists(odds, evens));
}
