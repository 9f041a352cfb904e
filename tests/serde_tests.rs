#![cfg(feature = "serde")]

//! Integration tests for serde support.

use rstest::rstest;
use treefold::control::Either;
use treefold::persistent::{PersistentList, Tree};

#[rstest]
fn either_json_round_trip() {
    let left: Either<String, i32> = Either::Left("error".to_string());
    let right: Either<String, i32> = Either::Right(42);

    let left_json = serde_json::to_string(&left).unwrap();
    let right_json = serde_json::to_string(&right).unwrap();

    assert_eq!(serde_json::from_str::<Either<String, i32>>(&left_json).unwrap(), left);
    assert_eq!(serde_json::from_str::<Either<String, i32>>(&right_json).unwrap(), right);
}

#[rstest]
fn list_serializes_as_sequence() {
    let list = PersistentList::from([1, 2, 3]);
    let json = serde_json::to_string(&list).unwrap();
    assert_eq!(json, "[1,2,3]");
    let restored: PersistentList<i32> = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, list);
}

#[rstest]
fn empty_list_round_trip() {
    let list: PersistentList<String> = PersistentList::new();
    let json = serde_json::to_string(&list).unwrap();
    assert_eq!(json, "[]");
    let restored: PersistentList<String> = serde_json::from_str(&json).unwrap();
    assert!(restored.is_empty());
}

#[rstest]
fn tree_serializes_in_ascending_order() {
    let tree = Tree::from([5, 3, 8, 1, 4]);
    let json = serde_json::to_string(&tree).unwrap();
    assert_eq!(json, "[1,3,4,5,8]");
}

#[rstest]
fn tree_deserializes_unsorted_input_with_duplicates() {
    let tree: Tree<i32> = serde_json::from_str("[9, 2, 9, 4]").unwrap();
    assert_eq!(tree.size(), 3);
    assert_eq!(tree.to_string(), "{2, 4, 9}");
}

#[rstest]
fn nested_list_of_trees() {
    let nested = PersistentList::from([Tree::from([2, 1]), Tree::new()]);
    let json = serde_json::to_string(&nested).unwrap();
    assert_eq!(json, "[[1,2],[]]");
    let restored: PersistentList<Tree<i32>> = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, nested);
}

#[rstest]
fn wrong_shape_is_rejected() {
    let result = serde_json::from_str::<PersistentList<i32>>("{\"a\": 1}");
    assert!(result.is_err());
}
