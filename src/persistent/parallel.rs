//! Parallel folds over [`PersistentList`] on a caller-owned rayon pool.
//!
//! The list is split with [`PersistentList::divide`], each sub-list is folded
//! as one task on the pool, and the partial results are merged on the calling
//! thread in sub-list order. A panic inside a task is captured and reported as
//! [`Cause::Partition`], a panic while merging as [`Cause::Panicked`]. Neither
//! unwinds into the caller.
//!
//! The pool is borrowed, never created or shut down here:
//!
//! ```rust
//! use treefold::control::Outcome;
//! use treefold::persistent::PersistentList;
//!
//! let pool = rayon::ThreadPoolBuilder::new().num_threads(4).build().unwrap();
//! let list: PersistentList<u64> = (1..=10_000).collect();
//!
//! let total = list.parallel_fold_left(&pool, 4, 0, |sum, n| sum + n, |a, b| a + b);
//! assert_eq!(total, Outcome::Success(50_005_000));
//! ```

use rayon::ThreadPool;
use rayon::prelude::*;

use super::PersistentList;
use crate::control::{Cause, Outcome, catch_panic};
use crate::typeclass::Monoid;

impl<T: Clone + Send + Sync> PersistentList<T> {
    /// Folds up to `2^depth` sub-lists concurrently on `pool`.
    ///
    /// Each sub-list is folded from its own copy of `identity` with
    /// `combine`. The partial results are then merged left to right,
    /// starting again from `identity`:
    /// `merge(...merge(merge(identity, p0), p1)..., pn)`.
    ///
    /// The result equals `self.fold_left(identity, combine)` whenever
    /// `identity` is neutral for `merge` and `merge` is associative and
    /// compatible with `combine`.
    ///
    /// # Errors
    ///
    /// Returns `Failure(Cause::Partition { index, .. })` for the first
    /// sub-list (in list order) whose fold panicked. A panic in `merge`
    /// becomes `Failure(Cause::Panicked(..))`.
    pub fn parallel_fold_left<B, F, M>(
        &self,
        pool: &ThreadPool,
        depth: usize,
        identity: B,
        combine: F,
        mut merge: M,
    ) -> Outcome<B>
    where
        B: Clone + Send,
        F: Fn(B, &T) -> B + Sync,
        M: FnMut(B, B) -> B,
    {
        let tasks: Vec<(Self, B)> = self
            .divide(depth)
            .into_iter()
            .map(|partition| (partition, identity.clone()))
            .collect();
        let partition_count = tasks.len();
        tracing::debug!(partitions = partition_count, depth, "starting parallel fold");

        let partials: Vec<Result<B, Cause>> = pool.install(|| {
            tasks
                .into_par_iter()
                .map(|(partition, seed)| catch_panic(|| partition.fold_left(seed, &combine)))
                .collect()
        });

        let mut values = Vec::with_capacity(partition_count);
        for (index, partial) in partials.into_iter().enumerate() {
            match partial {
                Ok(value) => values.push(value),
                Err(cause) => {
                    tracing::warn!(partition = index, cause = %cause, "parallel fold partition failed");
                    return Outcome::Failure(Cause::Partition {
                        index,
                        reason: cause.to_string(),
                    });
                }
            }
        }

        match catch_panic(|| values.into_iter().fold(identity, |left, right| merge(left, right))) {
            Ok(accumulator) => {
                tracing::debug!(partitions = partition_count, "parallel fold merged");
                Outcome::Success(accumulator)
            }
            Err(cause) => {
                tracing::warn!(cause = %cause, "parallel fold merge failed");
                Outcome::Failure(cause)
            }
        }
    }

    /// Applies `function` to every element on `pool`, keeping list order.
    ///
    /// # Errors
    ///
    /// A panic inside `function` becomes `Failure(Cause::Panicked(..))`.
    pub fn parallel_map<U, F>(&self, pool: &ThreadPool, function: F) -> Outcome<PersistentList<U>>
    where
        U: Send,
        F: Fn(&T) -> U + Sync,
    {
        let elements: Vec<&T> = self.iter().collect();
        let mapped = catch_panic(|| {
            pool.install(|| {
                elements
                    .par_iter()
                    .map(|&element| function(element))
                    .collect::<Vec<U>>()
            })
        });
        match mapped {
            Ok(values) => Outcome::Success(PersistentList::from(values)),
            Err(cause) => {
                tracing::warn!(cause = %cause, "parallel map failed");
                Outcome::Failure(cause)
            }
        }
    }

    /// Maps every element into a monoid and combines the results, folding
    /// the sub-lists concurrently.
    ///
    /// # Errors
    ///
    /// Same as [`PersistentList::parallel_fold_left`].
    pub fn parallel_fold_map<M, F>(&self, pool: &ThreadPool, depth: usize, function: F) -> Outcome<M>
    where
        M: Monoid + Clone + Send,
        F: Fn(&T) -> M + Sync,
    {
        self.parallel_fold_left(
            pool,
            depth,
            M::empty(),
            move |accumulator: M, element: &T| accumulator.combine(function(element)),
            M::combine,
        )
    }
}
