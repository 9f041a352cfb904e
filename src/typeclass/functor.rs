//! Functor type class - mapping over container values.
//!
//! # Laws
//!
//! ## Identity Law
//!
//! ```text
//! fa.fmap(|x| x) == fa
//! ```
//!
//! ## Composition Law
//!
//! ```text
//! fa.fmap(f).fmap(g) == fa.fmap(|x| g(f(x)))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use treefold::typeclass::Functor;
//!
//! let some_value: Option<i32> = Some(5);
//! assert_eq!(some_value.fmap(|n| n.to_string()), Some("5".to_string()));
//! ```

use super::higher::TypeConstructor;

/// A type class for single-valued containers that can have a function mapped
/// over their content.
///
/// The function is called at most once, so it is an `FnOnce`. Containers with
/// many elements implement [`FunctorMut`] instead.
pub trait Functor: TypeConstructor {
    /// Applies `function` to the contained value, preserving the structure.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use treefold::typeclass::Functor;
    ///
    /// let x: Option<i32> = Some(5);
    /// assert_eq!(x.fmap(|n| n * 2), Some(10));
    /// ```
    fn fmap<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(Self::Inner) -> B + 'static,
        B: 'static;

    /// Replaces the contained value with `value`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use treefold::typeclass::Functor;
    ///
    /// assert_eq!(Some(1).replace("done"), Some("done"));
    /// ```
    fn replace<B>(self, value: B) -> Self::WithType<B>
    where
        Self: Sized,
        B: 'static,
    {
        self.fmap(move |_| value)
    }
}

/// A type class for multi-element containers whose mapping function is
/// called once per element.
///
/// # Examples
///
/// ```rust
/// use treefold::typeclass::FunctorMut;
///
/// let doubled: Vec<i32> = vec![1, 2, 3].fmap_mut(|n| n * 2);
/// assert_eq!(doubled, vec![2, 4, 6]);
/// ```
pub trait FunctorMut: TypeConstructor {
    /// Applies `function` to every element, preserving order.
    fn fmap_mut<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnMut(Self::Inner) -> B;
}

impl<A> Functor for Option<A> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Option<B>
    where
        F: FnOnce(A) -> B + 'static,
        B: 'static,
    {
        self.map(function)
    }
}

impl<T> FunctorMut for Vec<T> {
    fn fmap_mut<B, F>(self, function: F) -> Vec<B>
    where
        F: FnMut(T) -> B,
    {
        self.into_iter().map(function).collect()
    }
}
