//! Control structures.
//!
//! - [`Outcome`]: success, failure or absence, with [`Cause`] describing
//!   failures
//! - [`Either`]: a right-biased choice between two types
//! - [`Lazy`]: a shared, memoized deferred value
//! - [`Stream`]: a lazy, memoized, possibly infinite sequence
//!
//! # Examples
//!
//! ```rust
//! use treefold::control::{Lazy, Outcome};
//!
//! let deferred = Lazy::new(|| 6 * 7);
//! let checked = Outcome::success(*deferred.force()).filter(|n| *n > 40);
//! assert_eq!(checked, Outcome::Success(42));
//! ```

mod either;
mod lazy;
mod outcome;
#[cfg(feature = "persistent")]
mod stream;

#[cfg(feature = "persistent")]
pub use either::max_of;
pub use either::Either;
pub use lazy::{Lazy, LazyState};
pub use outcome::{Cause, Outcome, lift, lift2, lift3, map2};
#[cfg(feature = "persistent")]
pub use stream::Stream;

#[cfg(feature = "rayon")]
pub(crate) use outcome::catch_panic;
