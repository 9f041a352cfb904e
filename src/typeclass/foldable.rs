//! Foldable type class - reducing a structure to a summary value.
//!
//! Folds here borrow the structure and hand each element to the folding
//! function by reference, so persistent structures can be folded repeatedly
//! without cloning their elements.
//!
//! # Laws
//!
//! For an associative `f` with identity `z`:
//!
//! ```text
//! fa.fold_left(z, |b, a| f(b, a)) == fa.fold_right(z, |a, b| f(a, b))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use treefold::typeclass::{Foldable, Sum};
//!
//! let numbers = vec![1, 2, 3, 4];
//! assert_eq!(Foldable::fold_left(&numbers, 0, |accumulator, element| accumulator + element), 10);
//! assert_eq!(numbers.fold_map(|element| Sum(*element)), Sum(10));
//! ```

use super::higher::TypeConstructor;
use super::monoid::Monoid;

/// A structure whose elements can be folded in a defined order.
pub trait Foldable: TypeConstructor {
    /// Folds from the first element to the last.
    ///
    /// # Arguments
    ///
    /// * `init` - The initial accumulator
    /// * `function` - Receives the accumulator and the next element
    fn fold_left<B, F>(&self, init: B, function: F) -> B
    where
        F: FnMut(B, &Self::Inner) -> B;

    /// Folds from the last element to the first.
    ///
    /// # Arguments
    ///
    /// * `init` - The initial accumulator
    /// * `function` - Receives the next element and the accumulator
    fn fold_right<B, F>(&self, init: B, function: F) -> B
    where
        F: FnMut(&Self::Inner, B) -> B;

    /// Maps each element into a [`Monoid`] and combines the results left to
    /// right.
    fn fold_map<M, F>(&self, mut function: F) -> M
    where
        M: Monoid,
        F: FnMut(&Self::Inner) -> M,
    {
        self.fold_left(M::empty(), |accumulator, element| {
            accumulator.combine(function(element))
        })
    }

    /// Counts the elements.
    fn length(&self) -> usize {
        self.fold_left(0, |count, _| count + 1)
    }

    /// Returns `true` if some element satisfies `predicate`.
    fn exists<P>(&self, mut predicate: P) -> bool
    where
        P: FnMut(&Self::Inner) -> bool,
    {
        self.fold_left(false, |found, element| found || predicate(element))
    }

    /// Returns `true` if every element satisfies `predicate`.
    fn for_all<P>(&self, mut predicate: P) -> bool
    where
        P: FnMut(&Self::Inner) -> bool,
    {
        self.fold_left(true, |holds, element| holds && predicate(element))
    }
}

impl<T> Foldable for Option<T> {
    fn fold_left<B, F>(&self, init: B, mut function: F) -> B
    where
        F: FnMut(B, &T) -> B,
    {
        match self {
            Some(value) => function(init, value),
            None => init,
        }
    }

    fn fold_right<B, F>(&self, init: B, mut function: F) -> B
    where
        F: FnMut(&T, B) -> B,
    {
        match self {
            Some(value) => function(value, init),
            None => init,
        }
    }
}

impl<T> Foldable for Vec<T> {
    fn fold_left<B, F>(&self, init: B, function: F) -> B
    where
        F: FnMut(B, &T) -> B,
    {
        self.iter().fold(init, function)
    }

    fn fold_right<B, F>(&self, init: B, mut function: F) -> B
    where
        F: FnMut(&T, B) -> B,
    {
        self.iter()
            .rev()
            .fold(init, |accumulator, element| function(element, accumulator))
    }

    #[inline]
    fn length(&self) -> usize {
        self.len()
    }
}
