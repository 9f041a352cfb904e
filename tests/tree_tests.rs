//! Integration tests for Tree.

use rstest::rstest;
use treefold::control::Outcome;
use treefold::persistent::{PersistentList, Tree};

#[rstest]
fn sample_scenario() {
    let tree = Tree::from([5, 3, 8, 1, 4]);
    assert_eq!(tree.to_list_in_order(), PersistentList::from([1, 3, 4, 5, 8]));
    assert_eq!(tree.height(), 2);
    assert_eq!(tree.size(), 5);
}

#[rstest]
fn min_and_max_of_empty_tree_are_empty() {
    let tree: Tree<String> = Tree::new();
    assert_eq!(tree.min(), Outcome::Empty);
    assert_eq!(tree.max(), Outcome::Empty);
}

#[rstest]
fn from_list_matches_from_iterator() {
    let list = PersistentList::from([7, 2, 9, 2, 4]);
    let from_list = Tree::from_list(&list);
    let collected: Tree<i32> = list.iter().copied().collect();
    assert_eq!(from_list, collected);
    assert_eq!(from_list.size(), 4);
}

#[rstest]
fn insert_preserves_original_version() {
    let original = Tree::from([2, 1, 3]);
    let updated = original.insert(10).remove(&1);
    assert_eq!(original.to_string(), "{1, 2, 3}");
    assert_eq!(updated.to_string(), "{2, 3, 10}");
}

#[rstest]
#[case(&[], &[], &[])]
#[case(&[1, 2], &[], &[1, 2])]
#[case(&[], &[3], &[3])]
#[case(&[4, 2, 6], &[5, 1, 7, 3], &[1, 2, 3, 4, 5, 6, 7])]
#[case(&[10, 20], &[20, 30, 10], &[10, 20, 30])]
fn merge_produces_union(#[case] left: &[i32], #[case] right: &[i32], #[case] expected: &[i32]) {
    let left: Tree<i32> = left.iter().copied().collect();
    let right: Tree<i32> = right.iter().copied().collect();
    let merged = left.merge(&right);
    assert_eq!(merged.to_list_in_order(), PersistentList::from_slice(expected));
    assert_eq!(merged.size(), expected.len());
}

#[rstest]
fn remove_merge_joins_disjoint_trees() {
    let low = Tree::from([2, 1, 3]);
    let high = Tree::from([8, 7, 9]);
    let joined = low.remove_merge(&high);
    assert_eq!(joined.to_list_in_order(), PersistentList::from([1, 2, 3, 7, 8, 9]));
    assert_eq!(joined.root_value(), Some(&2));
}

#[rstest]
fn map_with_order_preserving_function_keeps_shape() {
    let tree = Tree::from([5, 3, 8, 1, 4]);
    let shifted = tree.map(|n| n + 100);
    assert_eq!(shifted.height(), tree.height());
    assert_eq!(shifted.root_value(), Some(&105));
}

#[rstest]
fn map_collapsing_values() {
    let tree: Tree<i32> = (1..=20).collect();
    let buckets = tree.map(|n| n / 10);
    assert_eq!(buckets.to_list_in_order(), PersistentList::from([0, 1, 2]));
}

#[rstest]
fn map_over_degenerate_tree() {
    let tree: Tree<i32> = (0..5_000).collect();
    assert_eq!(tree.height(), 4_999);

    let doubled = tree.map(|n| n * 2);
    assert_eq!(doubled.height(), 4_999);
    assert_eq!(doubled.max(), Outcome::Success(&9_998));

    let negated = tree.map(|n| -n);
    assert_eq!(negated.size(), 5_000);
    assert_eq!(negated.height(), 4_999);
    assert_eq!(negated.min(), Outcome::Success(&-4_999));
    assert_eq!(negated.to_list_in_order().head(), Some(&-4_999));
}

#[rstest]
fn fold_counts_nodes_and_leaves() {
    let tree = Tree::from([4, 2, 6, 1, 3, 5, 7]);
    let leaves = tree.fold_post_order(0, |left, right, _| if left + right == 0 { 1 } else { left + right });
    assert_eq!(leaves, 4);
    let depth = tree.fold_pre_order(0, |_, left: i32, right: i32| 1 + left.max(right));
    assert_eq!(depth, 3);
}

#[rstest]
fn display_and_debug() {
    let tree = Tree::from([3, 1, 4]);
    assert_eq!(tree.to_string(), "{1, 3, 4}");
    assert_eq!(format!("{tree:?}"), "{1, 3, 4}");
}

#[rstest]
fn equality_ignores_shape() {
    let balanced = Tree::from([2, 1, 3]);
    let degenerate = Tree::from([1, 2, 3]);
    assert_ne!(balanced.height(), degenerate.height());
    assert_eq!(balanced, degenerate);
}

#[rstest]
fn descending_list_of_degenerate_left_tree() {
    let tree: Tree<u32> = (0..5_000).rev().collect();
    assert_eq!(tree.height(), 4_999);
    let descending = tree.to_list_in_order_right();
    assert_eq!(descending.head(), Some(&4_999));
    assert_eq!(descending.len(), 5_000);
    assert_eq!(tree.min(), Outcome::Success(&0));
}
