//! Newtype wrappers selecting a combining operation.
//!
//! - [`Sum`]: addition, identity `0`
//! - [`Product`]: multiplication, identity `1`
//! - [`Max`] / [`Min`]: ordering, semigroup only

// =============================================================================
// Sum
// =============================================================================

/// Combines by addition.
///
/// # Examples
///
/// ```rust
/// use treefold::typeclass::{Semigroup, Sum};
///
/// assert_eq!(Sum(3).combine(Sum(5)), Sum(8));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Sum<A>(pub A);

impl<A> Sum<A> {
    /// Consumes the wrapper and returns the inner value.
    #[inline]
    pub fn into_inner(self) -> A {
        self.0
    }
}

// =============================================================================
// Product
// =============================================================================

/// Combines by multiplication.
///
/// # Examples
///
/// ```rust
/// use treefold::typeclass::{Semigroup, Product};
///
/// assert_eq!(Product(3).combine(Product(5)), Product(15));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Product<A>(pub A);

impl<A> Product<A> {
    /// Consumes the wrapper and returns the inner value.
    #[inline]
    pub fn into_inner(self) -> A {
        self.0
    }
}

// =============================================================================
// Max / Min
// =============================================================================

/// Keeps the larger value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Max<A>(pub A);

/// Keeps the smaller value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Min<A>(pub A);
