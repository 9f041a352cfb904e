//! Semigroup type class - an associative binary operation.
//!
//! # Laws
//!
//! ## Associativity
//!
//! ```text
//! (a.combine(b)).combine(c) == a.combine(b.combine(c))
//! ```
//!
//! Parallel folds rely on this law: partial results computed on different
//! workers are combined in partition order, so only associativity (not
//! commutativity) is required for a deterministic result.

use super::wrappers::{Max, Min, Product, Sum};
use std::ops::{Add, Mul};

/// A type with an associative `combine` operation.
///
/// # Examples
///
/// ```rust
/// use treefold::typeclass::Semigroup;
///
/// let a = String::from("fold");
/// let b = String::from("ing");
/// assert_eq!(a.combine(b), "folding");
/// ```
pub trait Semigroup {
    /// Combines two values into one. Must be associative.
    #[must_use]
    fn combine(self, other: Self) -> Self;

    /// Combines two borrowed values, cloning both.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use treefold::typeclass::Semigroup;
    ///
    /// let a = vec![1];
    /// let b = vec![2];
    /// assert_eq!(a.combine_ref(&b), vec![1, 2]);
    /// assert_eq!(a, vec![1]);
    /// ```
    #[must_use]
    fn combine_ref(&self, other: &Self) -> Self
    where
        Self: Clone,
    {
        self.clone().combine(other.clone())
    }

    /// Reduces a non-empty sequence of values; `None` for an empty one.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use treefold::typeclass::{Semigroup, Max};
    ///
    /// assert_eq!(Max::reduce_all([Max(3), Max(9), Max(4)]), Some(Max(9)));
    /// assert_eq!(Max::<i32>::reduce_all([]), None);
    /// ```
    fn reduce_all<I>(iterator: I) -> Option<Self>
    where
        I: IntoIterator<Item = Self>,
        Self: Sized,
    {
        iterator
            .into_iter()
            .reduce(|accumulator, element| accumulator.combine(element))
    }
}

impl Semigroup for String {
    fn combine(mut self, other: Self) -> Self {
        self.push_str(&other);
        self
    }
}

impl<T> Semigroup for Vec<T> {
    fn combine(mut self, mut other: Self) -> Self {
        self.append(&mut other);
        self
    }
}

impl<T: Semigroup> Semigroup for Option<T> {
    fn combine(self, other: Self) -> Self {
        match (self, other) {
            (Some(left), Some(right)) => Some(left.combine(right)),
            (Some(value), None) | (None, Some(value)) => Some(value),
            (None, None) => None,
        }
    }
}

impl<A: Add<Output = A>> Semigroup for Sum<A> {
    fn combine(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}

impl<A: Mul<Output = A>> Semigroup for Product<A> {
    fn combine(self, other: Self) -> Self {
        Self(self.0 * other.0)
    }
}

impl<A: Ord> Semigroup for Max<A> {
    fn combine(self, other: Self) -> Self {
        Self(self.0.max(other.0))
    }
}

impl<A: Ord> Semigroup for Min<A> {
    fn combine(self, other: Self) -> Self {
        Self(self.0.min(other.0))
    }
}
