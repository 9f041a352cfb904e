//! Either type - a value that is one of two types.
//!
//! `Either<L, R>` is right-biased: [`Either::map`] and [`Either::flat_map`]
//! act on `Right` and pass `Left` through untouched, so `Left` conventionally
//! carries an error.
//!
//! # Examples
//!
//! ```rust
//! use treefold::control::Either;
//!
//! let parsed: Either<String, i32> = Either::Right(20);
//! let result = parsed.map(|n| n + 1).flat_map(|n| {
//!     if n > 0 { Either::Right(n * 2) } else { Either::Left("negative".to_string()) }
//! });
//! assert_eq!(result, Either::Right(42));
//! ```

use crate::control::Outcome;
use crate::typeclass::{Functor, Monad, TypeConstructor};
use std::fmt;

#[cfg(feature = "persistent")]
use crate::persistent::PersistentList;

/// A value that is either `Left(L)` or `Right(R)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Either<L, R> {
    /// The left (error) variant.
    Left(L),
    /// The right (success) variant.
    Right(R),
}

impl<L, R> Either<L, R> {
    // =========================================================================
    // Type Checking
    // =========================================================================

    /// Returns `true` for `Left`.
    #[inline]
    #[must_use]
    pub const fn is_left(&self) -> bool {
        matches!(self, Self::Left(_))
    }

    /// Returns `true` for `Right`.
    #[inline]
    #[must_use]
    pub const fn is_right(&self) -> bool {
        matches!(self, Self::Right(_))
    }

    // =========================================================================
    // Value Extraction
    // =========================================================================

    /// The left value, if any.
    #[inline]
    pub fn left(self) -> Option<L> {
        match self {
            Self::Left(value) => Some(value),
            Self::Right(_) => None,
        }
    }

    /// The right value, if any.
    #[inline]
    pub fn right(self) -> Option<R> {
        match self {
            Self::Left(_) => None,
            Self::Right(value) => Some(value),
        }
    }

    /// Borrows the left value, if any.
    #[inline]
    pub const fn left_ref(&self) -> Option<&L> {
        match self {
            Self::Left(value) => Some(value),
            Self::Right(_) => None,
        }
    }

    /// Borrows the right value, if any.
    #[inline]
    pub const fn right_ref(&self) -> Option<&R> {
        match self {
            Self::Left(_) => None,
            Self::Right(value) => Some(value),
        }
    }

    // =========================================================================
    // Mapping
    // =========================================================================

    /// Transforms a `Right` value.
    #[inline]
    pub fn map<T, F>(self, function: F) -> Either<L, T>
    where
        F: FnOnce(R) -> T,
    {
        match self {
            Self::Left(value) => Either::Left(value),
            Self::Right(value) => Either::Right(function(value)),
        }
    }

    /// Transforms a `Left` value.
    #[inline]
    pub fn map_left<T, F>(self, function: F) -> Either<T, R>
    where
        F: FnOnce(L) -> T,
    {
        match self {
            Self::Left(value) => Either::Left(function(value)),
            Self::Right(value) => Either::Right(value),
        }
    }

    /// Chains a computation on a `Right` value.
    #[inline]
    pub fn flat_map<T, F>(self, function: F) -> Either<L, T>
    where
        F: FnOnce(R) -> Either<L, T>,
    {
        match self {
            Self::Left(value) => Either::Left(value),
            Self::Right(value) => function(value),
        }
    }

    /// Collapses both variants into one type.
    #[inline]
    pub fn fold<T, F, G>(self, left_function: F, right_function: G) -> T
    where
        F: FnOnce(L) -> T,
        G: FnOnce(R) -> T,
    {
        match self {
            Self::Left(value) => left_function(value),
            Self::Right(value) => right_function(value),
        }
    }

    /// The right value, or `default()` for `Left`.
    pub fn get_or_else<F>(self, default: F) -> R
    where
        F: FnOnce() -> R,
    {
        match self {
            Self::Left(_) => default(),
            Self::Right(value) => value,
        }
    }

    /// Keeps a `Right`, otherwise evaluates `alternative`.
    #[must_use]
    pub fn or_else<F>(self, alternative: F) -> Self
    where
        F: FnOnce() -> Self,
    {
        match self {
            Self::Left(_) => alternative(),
            right @ Self::Right(_) => right,
        }
    }

    /// Exchanges the variants.
    #[inline]
    pub fn swap(self) -> Either<R, L> {
        match self {
            Self::Left(value) => Either::Right(value),
            Self::Right(value) => Either::Left(value),
        }
    }
}

impl<L: fmt::Display, R> Either<L, R> {
    /// `Right` becomes `Success`; `Left` becomes a failure carrying the left
    /// value's text.
    pub fn into_outcome(self) -> Outcome<R> {
        match self {
            Self::Left(error) => Outcome::failure(error.to_string()),
            Self::Right(value) => Outcome::Success(value),
        }
    }
}

impl<L: fmt::Display, R: fmt::Display> fmt::Display for Either<L, R> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Left(value) => write!(formatter, "Left({value})"),
            Self::Right(value) => write!(formatter, "Right({value})"),
        }
    }
}

/// The largest element of `list`, or a `Left` explaining that the list is
/// empty.
///
/// # Examples
///
/// ```rust
/// use treefold::control::{max_of, Either};
/// use treefold::persistent::PersistentList;
///
/// assert_eq!(max_of(&PersistentList::from([3, 9, 4])), Either::Right(9));
/// assert!(max_of(&PersistentList::<i32>::new()).is_left());
/// ```
#[cfg(feature = "persistent")]
pub fn max_of<A: Ord + Clone>(list: &PersistentList<A>) -> Either<String, A> {
    match list.uncons() {
        None => Either::Left("max called on an empty list".to_string()),
        Some((head, tail)) => Either::Right(tail.fold_left(head.clone(), |largest, element| {
            if *element > largest {
                element.clone()
            } else {
                largest
            }
        })),
    }
}

// =============================================================================
// Type Class Implementations
// =============================================================================

impl<L, R> TypeConstructor for Either<L, R> {
    type Inner = R;
    type WithType<B> = Either<L, B>;
}

impl<L, R> Functor for Either<L, R> {
    fn fmap<B, F>(self, function: F) -> Either<L, B>
    where
        F: FnOnce(R) -> B + 'static,
        B: 'static,
    {
        self.map(function)
    }
}

impl<L, R> Monad for Either<L, R> {
    fn pure<B>(value: B) -> Either<L, B> {
        Either::Right(value)
    }

    fn flat_map<B, F>(self, function: F) -> Either<L, B>
    where
        F: FnOnce(R) -> Either<L, B> + 'static,
        B: 'static,
    {
        Self::flat_map(self, function)
    }
}
