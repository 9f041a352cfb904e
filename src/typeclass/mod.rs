//! Type class traits shared by the crate's containers.
//!
//! - [`Functor`] / [`FunctorMut`]: mapping over contained values
//! - [`Monad`]: sequencing dependent computations
//! - [`Foldable`]: folding a structure into a summary value
//! - [`Semigroup`] / [`Monoid`]: combining partial results
//!
//! ## Higher-Kinded Types Emulation
//!
//! Rust has no native higher-kinded types. [`TypeConstructor`] uses a generic
//! associated type so `Functor` and `Monad` can name `F<B>` from `F<A>`.
//!
//! ## Wrappers
//!
//! [`Sum`], [`Product`], [`Max`] and [`Min`] pick a combining operation for
//! numeric and ordered types. They are what `fold_map` and the parallel folds
//! reduce into.
//!
//! # Examples
//!
//! ```rust
//! use treefold::typeclass::{Monoid, Semigroup, Sum};
//!
//! let partials = vec![Sum(10), Sum(20), Sum(12)];
//! assert_eq!(Sum::combine_all(partials), Sum(42));
//! assert_eq!(String::from("a").combine(String::from("b")), "ab");
//! ```

mod foldable;
mod functor;
mod higher;
mod monad;
mod monoid;
mod semigroup;
mod wrappers;

pub use foldable::Foldable;
pub use functor::{Functor, FunctorMut};
pub use higher::TypeConstructor;
pub use monad::Monad;
pub use monoid::Monoid;
pub use semigroup::Semigroup;
pub use wrappers::{Max, Min, Product, Sum};
