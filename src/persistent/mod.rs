//! Persistent (immutable) data structures.
//!
//! - [`PersistentList`]: Persistent singly-linked list with stack-safe folds
//! - [`Tree`]: Persistent unbalanced binary search tree
//!
//! Both structures share unchanged parts between versions: prepending to a
//! list or inserting into a tree allocates only the new nodes and reuses the
//! rest.
//!
//! With the `rayon` feature, [`PersistentList::parallel_fold_left`] and
//! friends fold the sub-lists produced by [`PersistentList::divide`] on a
//! caller-supplied thread pool.
//!
//! # Examples
//!
//! ## `PersistentList`
//!
//! ```rust
//! use treefold::persistent::PersistentList;
//!
//! let list = PersistentList::new().cons(3).cons(2).cons(1);
//! assert_eq!(list.head(), Some(&1));
//!
//! let extended = list.cons(0);
//! assert_eq!(list.len(), 3);
//! assert_eq!(extended.len(), 4);
//! ```
//!
//! ## `Tree`
//!
//! ```rust
//! use treefold::control::Outcome;
//! use treefold::persistent::Tree;
//!
//! let tree = Tree::from([4, 2, 6, 1, 3]);
//! assert!(tree.contains(&3));
//! assert_eq!(tree.max(), Outcome::Success(&6));
//!
//! let smaller = tree.remove(&6);
//! assert_eq!(tree.size(), 5);
//! assert_eq!(smaller.size(), 4);
//! ```

// =============================================================================
// Reference Counter Type Alias
// =============================================================================

/// Reference-counted smart pointer type.
///
/// When the `arc` feature is enabled, this is `std::sync::Arc`, and lists and
/// trees of `Send + Sync` elements are themselves `Send + Sync`.
///
/// Otherwise it is `std::rc::Rc`.
#[cfg(feature = "arc")]
pub(crate) type ReferenceCounter<T> = std::sync::Arc<T>;

#[cfg(not(feature = "arc"))]
pub(crate) type ReferenceCounter<T> = std::rc::Rc<T>;

mod list;
#[cfg(feature = "rayon")]
mod parallel;
mod tree;

pub use list::PersistentList;
pub use list::PersistentListIntoIterator;
pub use list::PersistentListIterator;
pub use tree::Tree;
pub use tree::TreeIterator;

// =============================================================================
// Tests
// =============================================================================
