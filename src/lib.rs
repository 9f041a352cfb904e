//! # treefold
//!
//! Persistent lists and binary search trees with stack-safe folds, built on a
//! three-way result type.
//!
//! ## Overview
//!
//! - **Outcome**: `Success`, `Failure` or `Empty`; every partial operation in
//!   the crate reports through it instead of panicking
//! - **Persistent List**: immutable cons list with structural sharing,
//!   iterative folds and a parallel fold over a caller-owned thread pool
//! - **Tree**: immutable, unbalanced binary search tree whose ordered output
//!   is produced through the persistent list
//! - **Control**: `Either`, memoizing `Lazy` and lazy `Stream`
//! - **Type Classes**: `Functor`, `Monad`, `Foldable`, `Semigroup`, `Monoid`
//!
//! ## Feature Flags
//!
//! - `typeclass`: Type class traits
//! - `control`: `Outcome`, `Either`, `Lazy`, `Stream`
//! - `persistent`: `PersistentList` and `Tree`
//! - `arc`: Use `Arc` instead of `Rc` for structural sharing
//! - `rayon`: Parallel fold and map over a `rayon::ThreadPool` (implies `arc`)
//! - `serde`: Serialization support
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use treefold::prelude::*;
//!
//! let list: PersistentList<i32> = (1..=5).collect();
//! assert_eq!(list.fold_left(0, |accumulator, element| accumulator + element), 15);
//!
//! let tree: Tree<i32> = [5, 3, 8, 1, 4].into_iter().collect();
//! assert_eq!(tree.to_list_in_order(), PersistentList::from([1, 3, 4, 5, 8]));
//! assert_eq!(tree.min(), Outcome::Success(&1));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use treefold::prelude::*;
/// ```
pub mod prelude {

    #[cfg(feature = "typeclass")]
    pub use crate::typeclass::*;

    #[cfg(feature = "control")]
    pub use crate::control::*;

    #[cfg(feature = "persistent")]
    pub use crate::persistent::*;
}

#[cfg(feature = "typeclass")]
pub mod typeclass;

#[cfg(feature = "control")]
pub mod control;

#[cfg(feature = "persistent")]
pub mod persistent;
