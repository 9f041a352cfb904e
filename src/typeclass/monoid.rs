//! Monoid type class - a semigroup with an identity element.
//!
//! # Laws
//!
//! ```text
//! Self::empty().combine(a) == a
//! a.combine(Self::empty()) == a
//! ```

use super::semigroup::Semigroup;
use super::wrappers::{Product, Sum};
use std::ops::{Add, Mul};

/// A [`Semigroup`] with an identity element.
///
/// # Examples
///
/// ```rust
/// use treefold::typeclass::{Monoid, Semigroup, Sum};
///
/// assert_eq!(Sum::<i32>::empty().combine(Sum(7)), Sum(7));
/// assert_eq!(Sum::combine_all(vec![Sum(1), Sum(2), Sum(3)]), Sum(6));
/// ```
pub trait Monoid: Semigroup {
    /// Returns the identity element.
    fn empty() -> Self;

    /// Combines every value of `iterator`, starting from [`Monoid::empty`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use treefold::typeclass::Monoid;
    ///
    /// let words = vec![String::from("a"), String::from("b")];
    /// assert_eq!(String::combine_all(words), "ab");
    /// assert_eq!(String::combine_all(Vec::new()), "");
    /// ```
    fn combine_all<I>(iterator: I) -> Self
    where
        I: IntoIterator<Item = Self>,
        Self: Sized,
    {
        iterator
            .into_iter()
            .fold(Self::empty(), |accumulator, element| {
                accumulator.combine(element)
            })
    }
}

impl Monoid for String {
    fn empty() -> Self {
        Self::new()
    }
}

impl<T> Monoid for Vec<T> {
    fn empty() -> Self {
        Self::new()
    }
}

impl<T: Semigroup> Monoid for Option<T> {
    fn empty() -> Self {
        None
    }
}

impl<A: Add<Output = A> + Default> Monoid for Sum<A> {
    fn empty() -> Self {
        Self(A::default())
    }
}

impl<A: Mul<Output = A> + From<u8>> Monoid for Product<A> {
    fn empty() -> Self {
        Self(A::from(1u8))
    }
}
