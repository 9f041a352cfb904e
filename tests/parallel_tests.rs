//! Integration tests for the parallel list folds.

#![cfg(feature = "rayon")]

use rayon::{ThreadPool, ThreadPoolBuilder};
use rstest::{fixture, rstest};
use treefold::control::{Cause, Outcome};
use treefold::persistent::PersistentList;
use treefold::typeclass::{Max, Sum};

#[fixture]
fn pool() -> ThreadPool {
    ThreadPoolBuilder::new().num_threads(3).build().unwrap()
}

#[rstest]
fn sum_of_ten_thousand(pool: ThreadPool) {
    let list: PersistentList<i64> = PersistentList::range(1, 10_001);
    assert_eq!(
        list.parallel_fold_left(&pool, 4, 0, |sum, n| sum + n, |a, b| a + b),
        Outcome::Success(50_005_000)
    );
}

#[rstest]
#[case(0)]
#[case(1)]
#[case(5)]
#[case(20)]
fn result_is_independent_of_depth(pool: ThreadPool, #[case] depth: usize) {
    let list: PersistentList<i64> = (1..=777).collect();
    let expected = list.fold_left(0, |sum, n| sum + n);
    assert_eq!(
        list.parallel_fold_left(&pool, depth, 0, |sum, n| sum + n, |a, b| a + b),
        Outcome::Success(expected)
    );
}

#[rstest]
fn merge_order_follows_partitions(pool: ThreadPool) {
    let list: PersistentList<u32> = (0..64).collect();
    let collected = list.parallel_fold_left(
        &pool,
        3,
        Vec::new(),
        |mut values, n| {
            values.push(*n);
            values
        },
        |mut left, right| {
            left.extend(right);
            left
        },
    );
    assert_eq!(collected, Outcome::Success((0..64).collect::<Vec<_>>()));
}

#[rstest]
fn failing_partition_surfaces_index(pool: ThreadPool) {
    let list: PersistentList<i32> = (0..16).collect();
    let result = list.parallel_fold_left(
        &pool,
        2,
        0,
        |sum, n| {
            assert!(*n != 13, "unlucky element");
            sum + n
        },
        |a, b| a + b,
    );
    assert_eq!(
        result,
        Outcome::Failure(Cause::Partition {
            index: 3,
            reason: "panicked: unlucky element".to_string(),
        })
    );
}

#[rstest]
fn parallel_fold_map_with_max(pool: ThreadPool) {
    let list = PersistentList::from([3, 17, 4, 9]);
    let largest: Outcome<Option<Max<i32>>> =
        list.parallel_fold_map(&pool, 2, |n| Some(Max(*n)));
    assert_eq!(largest, Outcome::Success(Some(Max(17))));
}

#[rstest]
fn parallel_map_and_sum(pool: ThreadPool) {
    let list: PersistentList<i64> = (1..=100).collect();
    let squares = list.parallel_map(&pool, |n| n * n);
    let total = squares.map(|squares| squares.fold_left(0, |sum, n| sum + n));
    assert_eq!(total, Outcome::Success(338_350));
    assert_eq!(
        list.parallel_fold_map(&pool, 3, |n| Sum(*n)),
        Outcome::Success(Sum(5_050))
    );
}
