//! Higher-kinded type emulation through generic associated types.
//!
//! Rust has no native higher-kinded types, so a trait cannot abstract over
//! `Outcome<_>` or `PersistentList<_>` as type constructors directly. The
//! [`TypeConstructor`] trait recovers that ability with a GAT: a value of
//! `F<A>` knows both its element type and how to name `F<B>`.
//!
//! # Example
//!
//! ```rust
//! use treefold::typeclass::TypeConstructor;
//!
//! fn rebuild<T: TypeConstructor>(_value: T) -> T::WithType<String>
//! where
//!     T::WithType<String>: Default,
//! {
//!     Default::default()
//! }
//!
//! let none_string: Option<String> = rebuild(Some(42));
//! assert_eq!(none_string, None);
//! ```

/// A type constructor applied to some type `Inner`.
///
/// For `Outcome<i32>`, `Inner` is `i32` and `WithType<String>` is
/// `Outcome<String>`.
pub trait TypeConstructor {
    /// The type this constructor is currently applied to.
    type Inner;

    /// The same constructor applied to `B`.
    type WithType<B>: TypeConstructor<Inner = B>;
}

impl<A> TypeConstructor for Option<A> {
    type Inner = A;
    type WithType<B> = Option<B>;
}

impl<T> TypeConstructor for Vec<T> {
    type Inner = T;
    type WithType<B> = Vec<B>;
}
