//! Three-way result type: success, failure or absence.
//!
//! [`Outcome`] separates "there is no value" ([`Outcome::Empty`]) from
//! "computing the value went wrong" ([`Outcome::Failure`]). Every partial
//! accessor in this crate reports through it.
//!
//! Mapping functions run behind a panic boundary: if the closure given to
//! [`Outcome::map`] or [`Outcome::flat_map`] panics, the panic is caught and
//! the result becomes a `Failure` carrying [`Cause::Panicked`].
//!
//! # Examples
//!
//! ```rust
//! use treefold::control::{Cause, Outcome};
//!
//! let parsed = Outcome::success("42").try_map(|text| text.parse::<i32>());
//! assert_eq!(parsed, Outcome::Success(42));
//!
//! let odd = parsed.filter(|n| n % 2 == 1);
//! assert_eq!(odd, Outcome::Failure(Cause::message("Condition not matched")));
//!
//! let absent: Outcome<i32> = Outcome::empty();
//! assert_eq!(absent.get_or_else(|| 0), 0);
//! ```

use crate::typeclass::{Functor, Monad, TypeConstructor};
use std::any::Any;
use std::fmt;
use std::panic::{self, AssertUnwindSafe};
use thiserror::Error;

// =============================================================================
// Cause
// =============================================================================

/// Why an [`Outcome`] is a `Failure`.
#[derive(Debug, Error, Clone, PartialEq, Eq, Hash)]
pub enum Cause {
    /// An explicit failure message.
    #[error("{0}")]
    Message(String),

    /// A closure panicked; holds the panic payload rendered as text.
    #[error("panicked: {0}")]
    Panicked(String),

    /// A failure relabelled by [`Outcome::map_failure`].
    #[error("{message}")]
    Context {
        /// The new message.
        message: String,
        /// The failure that was relabelled.
        source: Box<Cause>,
    },

    /// A partition of a parallel fold failed.
    #[error("partition {index} failed: {reason}")]
    Partition {
        /// Position of the partition in the divided list.
        index: usize,
        /// What went wrong inside the partition.
        reason: String,
    },
}

impl Cause {
    /// Creates a [`Cause::Message`].
    #[inline]
    pub fn message(message: impl Into<String>) -> Self {
        Self::Message(message.into())
    }

    /// Builds a [`Cause::Panicked`] from a payload returned by
    /// [`std::panic::catch_unwind`].
    pub fn from_panic(payload: &(dyn Any + Send)) -> Self {
        let text = payload
            .downcast_ref::<&str>()
            .map(|message| (*message).to_string())
            .or_else(|| payload.downcast_ref::<String>().cloned())
            .unwrap_or_else(|| "unknown panic payload".to_string());
        Self::Panicked(text)
    }

    /// Follows `Context` links down to the innermost cause.
    ///
    /// ```rust
    /// use treefold::control::{Cause, Outcome};
    ///
    /// let relabelled = Outcome::<i32>::failure("disk full").map_failure("save failed");
    /// let cause = relabelled.cause().unwrap();
    /// assert_eq!(cause.to_string(), "save failed");
    /// assert_eq!(cause.root(), &Cause::message("disk full"));
    /// ```
    pub fn root(&self) -> &Self {
        let mut current = self;
        while let Self::Context { source, .. } = current {
            current = source;
        }
        current
    }
}

/// Runs `function`, turning a panic into a [`Cause::Panicked`].
pub(crate) fn catch_panic<R>(function: impl FnOnce() -> R) -> Result<R, Cause> {
    panic::catch_unwind(AssertUnwindSafe(function)).map_err(|payload| {
        let cause = Cause::from_panic(payload.as_ref());
        tracing::debug!(cause = %cause, "captured panic from closure");
        cause
    })
}

// =============================================================================
// Outcome
// =============================================================================

/// A value that is present, failed, or absent.
///
/// # Examples
///
/// ```rust
/// use treefold::control::Outcome;
///
/// let doubled = Outcome::success(21).map(|n| n * 2);
/// assert_eq!(doubled, Outcome::Success(42));
///
/// let crashed = Outcome::success(1).map(|_: i32| -> i32 { panic!("boom") });
/// assert!(crashed.is_failure());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Outcome<A> {
    /// A computed value.
    Success(A),
    /// A failed computation.
    Failure(Cause),
    /// No value, without an error.
    Empty,
}

impl<A> Outcome<A> {
    // =========================================================================
    // Construction
    // =========================================================================

    /// Wraps a value.
    #[inline]
    pub const fn success(value: A) -> Self {
        Self::Success(value)
    }

    /// Creates a failure with a plain message.
    #[inline]
    pub fn failure(message: impl Into<String>) -> Self {
        Self::Failure(Cause::message(message))
    }

    /// Creates a failure from an existing cause.
    #[inline]
    pub const fn failure_with(cause: Cause) -> Self {
        Self::Failure(cause)
    }

    /// The absent outcome.
    #[inline]
    pub const fn empty() -> Self {
        Self::Empty
    }

    /// `Some` becomes `Success`, `None` becomes `Empty`.
    pub fn from_option(option: Option<A>) -> Self {
        option.map_or(Self::Empty, Self::Success)
    }

    /// `Some` becomes `Success`, `None` becomes a failure with `message`.
    pub fn from_option_or(option: Option<A>, message: impl Into<String>) -> Self {
        option.map_or_else(|| Self::failure(message), Self::Success)
    }

    /// `Success(value)` if `predicate` holds, `Empty` otherwise.
    pub fn from_predicate<P>(value: A, predicate: P) -> Self
    where
        P: FnOnce(&A) -> bool,
    {
        Self::Success(value).flat_map(|value| {
            if predicate(&value) {
                Self::Success(value)
            } else {
                Self::Empty
            }
        })
    }

    /// `Success(value)` if `predicate` holds, a failure with `message`
    /// otherwise.
    pub fn from_predicate_or<P>(value: A, message: impl Into<String>, predicate: P) -> Self
    where
        P: FnOnce(&A) -> bool,
    {
        Self::Success(value).filter_or(message, predicate)
    }

    // =========================================================================
    // Inspection
    // =========================================================================

    /// Returns `true` for `Success`.
    #[inline]
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Returns `true` for `Failure`.
    #[inline]
    #[must_use]
    pub const fn is_failure(&self) -> bool {
        matches!(self, Self::Failure(_))
    }

    /// Returns `true` for `Empty`.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// The success value, if any.
    #[inline]
    #[must_use]
    pub const fn success_ref(&self) -> Option<&A> {
        match self {
            Self::Success(value) => Some(value),
            _ => None,
        }
    }

    /// The failure cause, if any.
    #[inline]
    #[must_use]
    pub const fn cause(&self) -> Option<&Cause> {
        match self {
            Self::Failure(cause) => Some(cause),
            _ => None,
        }
    }

    /// Borrows the success value; a failure cause is cloned.
    #[must_use]
    pub fn as_ref(&self) -> Outcome<&A> {
        match self {
            Self::Success(value) => Outcome::Success(value),
            Self::Failure(cause) => Outcome::Failure(cause.clone()),
            Self::Empty => Outcome::Empty,
        }
    }

    /// Returns `true` if this is a `Success` whose value satisfies
    /// `predicate`.
    pub fn exists<P>(&self, predicate: P) -> bool
    where
        P: FnOnce(&A) -> bool,
    {
        self.success_ref().is_some_and(predicate)
    }

    /// Runs exactly one of the three effects, depending on the variant.
    pub fn for_each<S, F, E>(&self, on_success: S, on_failure: F, on_empty: E)
    where
        S: FnOnce(&A),
        F: FnOnce(&Cause),
        E: FnOnce(),
    {
        match self {
            Self::Success(value) => on_success(value),
            Self::Failure(cause) => on_failure(cause),
            Self::Empty => on_empty(),
        }
    }

    // =========================================================================
    // Transformation
    // =========================================================================

    /// Applies `function` to a success value.
    ///
    /// A panic inside `function` becomes `Failure(Cause::Panicked(..))`.
    /// `Failure` and `Empty` pass through without calling `function`.
    pub fn map<B, F>(self, function: F) -> Outcome<B>
    where
        F: FnOnce(A) -> B,
    {
        match self {
            Self::Success(value) => match catch_panic(move || function(value)) {
                Ok(mapped) => Outcome::Success(mapped),
                Err(cause) => Outcome::Failure(cause),
            },
            Self::Failure(cause) => Outcome::Failure(cause),
            Self::Empty => Outcome::Empty,
        }
    }

    /// Applies `function` to a success value and flattens the result.
    ///
    /// A panic inside `function` becomes `Failure(Cause::Panicked(..))`.
    pub fn flat_map<B, F>(self, function: F) -> Outcome<B>
    where
        F: FnOnce(A) -> Outcome<B>,
    {
        match self {
            Self::Success(value) => {
                catch_panic(move || function(value)).unwrap_or_else(Outcome::Failure)
            }
            Self::Failure(cause) => Outcome::Failure(cause),
            Self::Empty => Outcome::Empty,
        }
    }

    /// Applies a fallible `function`; an `Err` becomes a failure carrying the
    /// error's text.
    pub fn try_map<B, E, F>(self, function: F) -> Outcome<B>
    where
        E: fmt::Display,
        F: FnOnce(A) -> Result<B, E>,
    {
        self.flat_map(|value| match function(value) {
            Ok(mapped) => Outcome::Success(mapped),
            Err(error) => Outcome::failure(error.to_string()),
        })
    }

    /// Keeps a success only if `predicate` holds; otherwise fails with
    /// `"Condition not matched"`.
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&A) -> bool,
    {
        self.filter_or("Condition not matched", predicate)
    }

    /// Like [`Outcome::filter`] with a caller-chosen failure message.
    pub fn filter_or<P>(self, message: impl Into<String>, predicate: P) -> Self
    where
        P: FnOnce(&A) -> bool,
    {
        let message = message.into();
        self.flat_map(|value| {
            if predicate(&value) {
                Self::Success(value)
            } else {
                Self::Failure(Cause::Message(message))
            }
        })
    }

    /// Relabels a failure, keeping the previous cause as its source.
    #[must_use]
    pub fn map_failure(self, message: impl Into<String>) -> Self {
        match self {
            Self::Failure(cause) => Self::Failure(Cause::Context {
                message: message.into(),
                source: Box::new(cause),
            }),
            other => other,
        }
    }

    /// Turns absence into success: `Empty` becomes `Success(())`, `Success`
    /// becomes a `"Not empty"` failure and `Failure` is kept.
    pub fn map_empty(self) -> Outcome<()> {
        match self {
            Self::Success(_) => Outcome::failure("Not empty"),
            Self::Failure(cause) => Outcome::Failure(cause),
            Self::Empty => Outcome::Success(()),
        }
    }

    // =========================================================================
    // Extraction
    // =========================================================================

    /// The success value, or `default()` for `Failure` and `Empty`.
    pub fn get_or_else<F>(self, default: F) -> A
    where
        F: FnOnce() -> A,
    {
        match self {
            Self::Success(value) => value,
            Self::Failure(_) | Self::Empty => default(),
        }
    }

    /// The success value, or `default`.
    pub fn get_or(self, default: A) -> A {
        self.get_or_else(|| default)
    }

    /// Keeps a success; otherwise evaluates `alternative`. A panic in
    /// `alternative` becomes a failure.
    #[must_use]
    pub fn or_else<F>(self, alternative: F) -> Self
    where
        F: FnOnce() -> Self,
    {
        match self {
            Self::Success(value) => Self::Success(value),
            Self::Failure(_) | Self::Empty => {
                catch_panic(alternative).unwrap_or_else(Self::Failure)
            }
        }
    }

    /// `Success(v)` becomes `Ok(Some(v))`, `Empty` becomes `Ok(None)`.
    ///
    /// # Errors
    ///
    /// Returns the cause of a `Failure`.
    pub fn into_result(self) -> Result<Option<A>, Cause> {
        match self {
            Self::Success(value) => Ok(Some(value)),
            Self::Failure(cause) => Err(cause),
            Self::Empty => Ok(None),
        }
    }

    /// Converts to an `Option`, discarding any failure cause.
    pub fn ok(self) -> Option<A> {
        match self {
            Self::Success(value) => Some(value),
            Self::Failure(_) | Self::Empty => None,
        }
    }
}

impl<A: Clone> Outcome<&A> {
    /// Clones the borrowed success value.
    #[must_use]
    pub fn cloned(self) -> Outcome<A> {
        match self {
            Outcome::Success(value) => Outcome::Success(value.clone()),
            Outcome::Failure(cause) => Outcome::Failure(cause),
            Outcome::Empty => Outcome::Empty,
        }
    }
}

impl<A> Default for Outcome<A> {
    fn default() -> Self {
        Self::Empty
    }
}

impl<A> From<Option<A>> for Outcome<A> {
    fn from(option: Option<A>) -> Self {
        Self::from_option(option)
    }
}

impl<A: fmt::Display> fmt::Display for Outcome<A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Success(value) => write!(formatter, "Success({value})"),
            Self::Failure(cause) => write!(formatter, "Failure({cause})"),
            Self::Empty => write!(formatter, "Empty"),
        }
    }
}

// =============================================================================
// Lifting
// =============================================================================

/// Lifts a plain function to work on outcomes.
///
/// # Examples
///
/// ```rust
/// use treefold::control::{lift, Outcome};
///
/// let negate = lift(|n: i32| -n);
/// assert_eq!(negate(Outcome::success(4)), Outcome::Success(-4));
/// assert_eq!(negate(Outcome::empty()), Outcome::Empty);
/// ```
pub fn lift<A, B, F>(function: F) -> impl Fn(Outcome<A>) -> Outcome<B>
where
    F: Fn(A) -> B,
{
    move |outcome| outcome.map(&function)
}

/// Lifts a two-argument function to work on outcomes.
pub fn lift2<A, B, C, F>(function: F) -> impl Fn(Outcome<A>, Outcome<B>) -> Outcome<C>
where
    F: Fn(A, B) -> C,
{
    move |first, second| map2(first, second, &function)
}

/// Lifts a three-argument function to work on outcomes.
pub fn lift3<A, B, C, D, F>(
    function: F,
) -> impl Fn(Outcome<A>, Outcome<B>, Outcome<C>) -> Outcome<D>
where
    F: Fn(A, B, C) -> D,
{
    move |first, second, third| {
        first.flat_map(|a| second.flat_map(|b| third.map(|c| function(a, b, c))))
    }
}

/// Combines two outcomes with `function`. The first non-success input
/// decides the result.
///
/// # Examples
///
/// ```rust
/// use treefold::control::{map2, Outcome};
///
/// let sum = map2(Outcome::success(2), Outcome::success(3), |a, b| a + b);
/// assert_eq!(sum, Outcome::Success(5));
///
/// let failed = map2(Outcome::<i32>::failure("no"), Outcome::success(3), |a, b| a + b);
/// assert!(failed.is_failure());
/// ```
pub fn map2<A, B, C, F>(first: Outcome<A>, second: Outcome<B>, function: F) -> Outcome<C>
where
    F: FnOnce(A, B) -> C,
{
    first.flat_map(|a| second.map(|b| function(a, b)))
}

// =============================================================================
// Type Class Implementations
// =============================================================================

impl<A> TypeConstructor for Outcome<A> {
    type Inner = A;
    type WithType<B> = Outcome<B>;
}

impl<A> Functor for Outcome<A> {
    fn fmap<B, F>(self, function: F) -> Outcome<B>
    where
        F: FnOnce(A) -> B + 'static,
        B: 'static,
    {
        self.map(function)
    }
}

impl<A> Monad for Outcome<A> {
    fn pure<B>(value: B) -> Outcome<B> {
        Outcome::Success(value)
    }

    fn flat_map<B, F>(self, function: F) -> Outcome<B>
    where
        F: FnOnce(A) -> Outcome<B> + 'static,
        B: 'static,
    {
        Self::flat_map(self, function)
    }
}
