//! Monad type class - sequencing dependent computations.
//!
//! # Laws
//!
//! ## Left Identity
//!
//! ```text
//! Self::pure(a).flat_map(f) == f(a)
//! ```
//!
//! ## Right Identity
//!
//! ```text
//! m.flat_map(Self::pure) == m
//! ```
//!
//! ## Associativity
//!
//! ```text
//! m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use treefold::typeclass::Monad;
//!
//! fn parse_positive(text: &str) -> Option<i32> {
//!     text.parse::<i32>().ok().filter(|&n| n > 0)
//! }
//!
//! let result = Some("42").flat_map(parse_positive).flat_map(|n| Some(n * 2));
//! assert_eq!(result, Some(84));
//! ```

use super::functor::Functor;

/// A type class for containers that support chaining computations whose
/// next step depends on the previous result.
pub trait Monad: Functor {
    /// Lifts a plain value into the container.
    fn pure<B>(value: B) -> Self::WithType<B>;

    /// Applies `function` to the contained value and flattens one level.
    fn flat_map<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(Self::Inner) -> Self::WithType<B> + 'static,
        B: 'static;

    /// Sequences two computations, discarding the first value.
    fn then<B>(self, next: Self::WithType<B>) -> Self::WithType<B>
    where
        Self: Sized,
        Self::WithType<B>: 'static,
        B: 'static,
    {
        self.flat_map(move |_| next)
    }
}

impl<A> Monad for Option<A> {
    #[inline]
    fn pure<B>(value: B) -> Option<B> {
        Some(value)
    }

    #[inline]
    fn flat_map<B, F>(self, function: F) -> Option<B>
    where
        F: FnOnce(A) -> Option<B> + 'static,
        B: 'static,
    {
        self.and_then(function)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn half(n: i32) -> Option<i32> {
        if n % 2 == 0 { Some(n / 2) } else { None }
    }

    #[rstest]
    fn option_left_identity() {
        assert_eq!(<Option<()>>::pure(8).flat_map(half), half(8));
    }

    #[rstest]
    fn option_right_identity() {
        let value = Some(7);
        assert_eq!(value.flat_map(|x| Some(x)), value);
    }

    #[rstest]
    fn option_then_discards_first_value() {
        assert_eq!(Some(1).then(Some("next")), Some("next"));
        assert_eq!(None::<i32>.then(Some("next")), None);
    }
}
