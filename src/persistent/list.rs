//! Persistent (immutable) singly-linked list.
//!
//! This module provides [`PersistentList`], an immutable cons list whose
//! tails are shared between versions.
//!
//! # Overview
//!
//! - O(1) `cons`, `head`, `tail`
//! - O(n) index access, `reverse`, `concat`
//! - Every traversal is a loop, including `Drop`, so lists of millions of
//!   elements can be folded and released without exhausting the stack
//! - [`PersistentList::fold_right`] is the single exception: it recurses once
//!   per element and is meant for short lists only. Use
//!   [`PersistentList::fold_right_via_fold_left`] otherwise.
//!
//! # Examples
//!
//! ```rust
//! use treefold::persistent::PersistentList;
//!
//! let list = PersistentList::new().cons(3).cons(2).cons(1);
//! assert_eq!(list.head(), Some(&1));
//! assert_eq!(list.len(), 3);
//!
//! // The original is preserved
//! let extended = list.cons(0);
//! assert_eq!(list.len(), 3);
//! assert_eq!(extended.len(), 4);
//!
//! let total = list.fold_left(0, |accumulator, element| accumulator + element);
//! assert_eq!(total, 6);
//! ```
//!
//! # Structural Sharing
//!
//! ```text
//! list1: 1 -> 2 -> 3 -> nil
//! list2 = list1.cons(0): 0 -> [1 -> 2 -> 3 -> nil]  // shares [1, 2, 3] with list1
//! ```

use std::collections::HashMap;
use std::fmt;
use std::hash::{Hash, Hasher};

use super::ReferenceCounter;
use crate::control::Outcome;
use crate::typeclass::{Foldable, FunctorMut, Monoid, Semigroup, TypeConstructor};

// =============================================================================
// Node Definition
// =============================================================================

struct Node<T> {
    element: T,
    next: Option<ReferenceCounter<Node<T>>>,
}

// =============================================================================
// PersistentList Definition
// =============================================================================

/// An immutable singly-linked list with structural sharing.
///
/// # Time Complexity
///
/// | Operation     | Complexity |
/// |---------------|------------|
/// | `new`         | O(1)       |
/// | `cons`        | O(1)       |
/// | `head`        | O(1)       |
/// | `tail`        | O(1)       |
/// | `get`         | O(n)       |
/// | `len`         | O(1)       |
/// | `concat`      | O(n)       |
/// | `reverse`     | O(n)       |
/// | `split_at`    | O(index)   |
///
/// # Examples
///
/// ```rust
/// use treefold::persistent::PersistentList;
///
/// let list: PersistentList<i32> = (1..=5).collect();
/// let evens = list.filter(|element| element % 2 == 0);
/// assert_eq!(evens, PersistentList::from([2, 4]));
/// ```
pub struct PersistentList<T> {
    head: Option<ReferenceCounter<Node<T>>>,
    length: usize,
}

impl<T> PersistentList<T> {
    // =========================================================================
    // Construction
    // =========================================================================

    /// Creates an empty list.
    ///
    /// # Complexity
    ///
    /// O(1)
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            head: None,
            length: 0,
        }
    }

    /// Creates a list with a single element.
    #[inline]
    #[must_use]
    pub fn singleton(element: T) -> Self {
        Self::new().cons(element)
    }

    fn push_front(&mut self, element: T) {
        self.head = Some(ReferenceCounter::new(Node {
            element,
            next: self.head.take(),
        }));
        self.length += 1;
    }

    fn build_from_vec(mut elements: Vec<T>) -> Self {
        let mut list = Self::new();
        while let Some(element) = elements.pop() {
            list.push_front(element);
        }
        list
    }

    /// Prepends an element, sharing `self` as the tail.
    ///
    /// # Complexity
    ///
    /// O(1)
    ///
    /// # Examples
    ///
    /// ```rust
    /// use treefold::persistent::PersistentList;
    ///
    /// let list = PersistentList::singleton(2);
    /// let extended = list.cons(1);
    /// assert_eq!(extended, PersistentList::from([1, 2]));
    /// assert_eq!(list, PersistentList::from([2]));
    /// ```
    #[inline]
    #[must_use]
    pub fn cons(&self, element: T) -> Self {
        Self {
            head: Some(ReferenceCounter::new(Node {
                element,
                next: self.head.clone(),
            })),
            length: self.length + 1,
        }
    }

    /// Builds the list `seed`'s unfolding: `step` returns the next element and
    /// state, or `None` to stop.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use treefold::persistent::PersistentList;
    ///
    /// let powers = PersistentList::unfold(1, |n| (n <= 16).then(|| (n, n * 2)));
    /// assert_eq!(powers, PersistentList::from([1, 2, 4, 8, 16]));
    /// ```
    pub fn unfold<S, F>(seed: S, mut step: F) -> Self
    where
        F: FnMut(S) -> Option<(T, S)>,
    {
        let mut elements = Vec::new();
        let mut state = seed;
        while let Some((element, next)) = step(state) {
            elements.push(element);
            state = next;
        }
        Self::build_from_vec(elements)
    }

    /// Builds `seed, next(seed), next(next(seed)), ...` for as long as
    /// `continue_while` holds.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use treefold::persistent::PersistentList;
    ///
    /// let countdown = PersistentList::unfold_while(5, |n| n - 1, |n| *n > 0);
    /// assert_eq!(countdown, PersistentList::from([5, 4, 3, 2, 1]));
    /// ```
    pub fn unfold_while<F, P>(seed: T, mut next: F, mut continue_while: P) -> Self
    where
        F: FnMut(&T) -> T,
        P: FnMut(&T) -> bool,
    {
        let mut elements = Vec::new();
        let mut current = seed;
        while continue_while(&current) {
            let following = next(&current);
            elements.push(current);
            current = following;
        }
        Self::build_from_vec(elements)
    }

    /// The half-open range `[start, end)`.
    ///
    /// ```rust
    /// use treefold::persistent::PersistentList;
    ///
    /// assert_eq!(PersistentList::range(3, 6), PersistentList::from([3, 4, 5]));
    /// assert!(PersistentList::range(6, 3).is_empty());
    /// ```
    pub fn range(start: T, end: T) -> Self
    where
        std::ops::Range<T>: Iterator<Item = T>,
    {
        (start..end).collect()
    }

    // =========================================================================
    // Access
    // =========================================================================

    /// Returns the first element, or `None` if the list is empty.
    #[inline]
    #[must_use]
    pub fn head(&self) -> Option<&T> {
        self.head.as_ref().map(|node| &node.element)
    }

    /// Returns the list without its first element; empty for an empty list.
    #[inline]
    #[must_use]
    pub fn tail(&self) -> Self {
        self.head.as_ref().map_or_else(Self::new, |node| Self {
            head: node.next.clone(),
            length: self.length - 1,
        })
    }

    /// Splits off the first element.
    #[inline]
    #[must_use]
    pub fn uncons(&self) -> Option<(&T, Self)> {
        self.head.as_ref().map(|node| {
            let tail = Self {
                head: node.next.clone(),
                length: self.length - 1,
            };
            (&node.element, tail)
        })
    }

    /// Returns the element at `index`.
    ///
    /// # Complexity
    ///
    /// O(index)
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.iter().nth(index)
    }

    /// The first element as an [`Outcome`]: `Empty` for an empty list.
    pub fn head_safe(&self) -> Outcome<&T> {
        Outcome::from_option(self.head())
    }

    /// The tail as an [`Outcome`]: `Empty` for an empty list.
    pub fn tail_safe(&self) -> Outcome<Self> {
        if self.is_empty() {
            Outcome::Empty
        } else {
            Outcome::Success(self.tail())
        }
    }

    /// The element at `index`, or a failure with `"Index out of bounds"`.
    ///
    /// ```rust
    /// use treefold::control::Outcome;
    /// use treefold::persistent::PersistentList;
    ///
    /// let list = PersistentList::from(['a', 'b']);
    /// assert_eq!(list.get_at(1), Outcome::Success(&'b'));
    /// assert_eq!(list.get_at(2), Outcome::failure("Index out of bounds"));
    /// ```
    pub fn get_at(&self, index: usize) -> Outcome<&T> {
        Outcome::from_option_or(self.get(index), "Index out of bounds")
    }

    /// The last element; `Empty` for an empty list.
    pub fn last_safe(&self) -> Outcome<&T> {
        Outcome::from_option(self.iter().last())
    }

    /// The first element.
    ///
    /// # Panics
    ///
    /// Panics if the list is empty. Use [`PersistentList::head`] or
    /// [`PersistentList::head_safe`] when emptiness is a normal case.
    #[must_use]
    pub fn expect_head(&self) -> &T {
        match self.head() {
            Some(element) => element,
            None => panic!("expect_head called on an empty list"),
        }
    }

    /// The list without its first element.
    ///
    /// # Panics
    ///
    /// Panics if the list is empty.
    #[must_use]
    pub fn expect_tail(&self) -> Self {
        assert!(!self.is_empty(), "expect_tail called on an empty list");
        self.tail()
    }

    /// Returns the number of elements.
    ///
    /// # Complexity
    ///
    /// O(1)
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.length
    }

    /// Returns `true` if the list has no elements.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Borrowing iterator from front to back.
    #[inline]
    #[must_use]
    pub fn iter(&self) -> PersistentListIterator<'_, T> {
        PersistentListIterator {
            current: self.head.as_ref(),
            remaining: self.length,
        }
    }

    // =========================================================================
    // Folds
    // =========================================================================

    /// Left fold: `combine(...combine(combine(identity, e0), e1)..., en)`.
    ///
    /// Iterative; never overflows the stack regardless of length.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use treefold::persistent::PersistentList;
    ///
    /// let list = PersistentList::from([1, 2, 3]);
    /// let text = list.fold_left(String::from("0"), |accumulator, element| {
    ///     format!("({accumulator} + {element})")
    /// });
    /// assert_eq!(text, "(((0 + 1) + 2) + 3)");
    /// ```
    pub fn fold_left<B, F>(&self, identity: B, combine: F) -> B
    where
        F: FnMut(B, &T) -> B,
    {
        self.iter().fold(identity, combine)
    }

    /// Right fold: `combine(e0, combine(e1, ...combine(en, identity)))`.
    ///
    /// Recurses once per element and overflows the stack on long lists. Use
    /// [`PersistentList::fold_right_via_fold_left`] for lists of unknown
    /// length.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use treefold::persistent::PersistentList;
    ///
    /// let list = PersistentList::from([1, 2, 3]);
    /// let text = list.fold_right(String::from("0"), |element, accumulator| {
    ///     format!("({element} + {accumulator})")
    /// });
    /// assert_eq!(text, "(1 + (2 + (3 + 0)))");
    /// ```
    pub fn fold_right<B, F>(&self, identity: B, mut combine: F) -> B
    where
        F: FnMut(&T, B) -> B,
    {
        fn fold_from<T, B, F>(node: Option<&ReferenceCounter<Node<T>>>, identity: B, combine: &mut F) -> B
        where
            F: FnMut(&T, B) -> B,
        {
            match node {
                None => identity,
                Some(node) => {
                    let rest = fold_from(node.next.as_ref(), identity, combine);
                    combine(&node.element, rest)
                }
            }
        }
        fold_from(self.head.as_ref(), identity, &mut combine)
    }

    /// Right fold computed by reversing the list and folding from the left.
    ///
    /// Same result as [`PersistentList::fold_right`], in constant stack
    /// depth.
    pub fn fold_right_via_fold_left<B, F>(&self, identity: B, mut combine: F) -> B
    where
        F: FnMut(&T, B) -> B,
    {
        let elements: Vec<&T> = self.iter().collect();
        elements
            .into_iter()
            .rev()
            .fold(identity, |accumulator, element| combine(element, accumulator))
    }

    /// Left fold that stops as soon as the accumulator equals `zero`.
    ///
    /// `zero` is an absorbing value of `combine`, so the remaining elements
    /// cannot change the result.
    ///
    /// ```rust
    /// use treefold::persistent::PersistentList;
    ///
    /// let mut visited = 0;
    /// let list = PersistentList::from([3, 0, 5, 7]);
    /// let product = list.fold_left_terminating(1, &0, |accumulator, element| {
    ///     visited += 1;
    ///     accumulator * element
    /// });
    /// assert_eq!(product, 0);
    /// assert_eq!(visited, 2);
    /// ```
    pub fn fold_left_terminating<B, F>(&self, identity: B, zero: &B, combine: F) -> B
    where
        B: PartialEq,
        F: FnMut(B, &T) -> B,
    {
        self.fold_left_and_return_remaining(identity, zero, combine).0
    }

    /// Like [`PersistentList::fold_left_terminating`], also returning the
    /// elements that were not visited.
    pub fn fold_left_and_return_remaining<B, F>(
        &self,
        identity: B,
        zero: &B,
        mut combine: F,
    ) -> (B, Self)
    where
        B: PartialEq,
        F: FnMut(B, &T) -> B,
    {
        let mut accumulator = identity;
        let mut remaining = self.clone();
        while let Some((element, rest)) = remaining.uncons() {
            if accumulator == *zero {
                break;
            }
            accumulator = combine(accumulator, element);
            remaining = rest;
        }
        (accumulator, remaining)
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// Returns `true` if some element satisfies `predicate`. Stops at the
    /// first match.
    pub fn exists<P>(&self, predicate: P) -> bool
    where
        P: FnMut(&T) -> bool,
    {
        self.iter().any(predicate)
    }

    /// Returns `true` if every element satisfies `predicate`. Stops at the
    /// first counterexample.
    pub fn for_all<P>(&self, predicate: P) -> bool
    where
        P: FnMut(&T) -> bool,
    {
        self.iter().all(predicate)
    }

    /// Position of the first element satisfying `predicate`.
    #[must_use]
    pub fn find_index<P>(&self, predicate: P) -> Option<usize>
    where
        P: FnMut(&T) -> bool,
    {
        self.iter().position(predicate)
    }

    /// Returns `true` if `prefix` is a prefix of this list. The empty list is
    /// a prefix of every list.
    pub fn starts_with(&self, prefix: &Self) -> bool
    where
        T: PartialEq,
    {
        prefix.length <= self.length
            && self
                .iter()
                .zip(prefix.iter())
                .all(|(element, expected)| element == expected)
    }

    /// Returns `true` if `sub` appears as a contiguous run in this list.
    ///
    /// ```rust
    /// use treefold::persistent::PersistentList;
    ///
    /// let list = PersistentList::from([1, 2, 3, 4]);
    /// assert!(list.has_sub_list(&PersistentList::from([2, 3])));
    /// assert!(!list.has_sub_list(&PersistentList::from([3, 2])));
    /// ```
    pub fn has_sub_list(&self, sub: &Self) -> bool
    where
        T: PartialEq,
    {
        let mut suffix = self.clone();
        loop {
            if suffix.starts_with(sub) {
                return true;
            }
            if suffix.length < sub.length || suffix.is_empty() {
                return false;
            }
            suffix = suffix.tail();
        }
    }

    // =========================================================================
    // Structure-Sharing Slices
    // =========================================================================

    /// Drops the first `count` elements, sharing the rest.
    #[must_use]
    pub fn drop_first(&self, count: usize) -> Self {
        let mut current = self.clone();
        for _ in 0..count.min(self.length) {
            current = current.tail();
        }
        current
    }

    /// Drops leading elements while `predicate` holds, sharing the rest.
    #[must_use]
    pub fn drop_while<P>(&self, mut predicate: P) -> Self
    where
        P: FnMut(&T) -> bool,
    {
        let mut current = self.clone();
        while current.head().is_some_and(&mut predicate) {
            current = current.tail();
        }
        current
    }

    // =========================================================================
    // Transformations Without Clone
    // =========================================================================

    /// Applies `function` to every element, front to back.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use treefold::persistent::PersistentList;
    ///
    /// let words = PersistentList::from(["a", "bb", "ccc"]);
    /// assert_eq!(words.map(|word| word.len()), PersistentList::from([1, 2, 3]));
    /// ```
    pub fn map<B, F>(&self, mut function: F) -> PersistentList<B>
    where
        F: FnMut(&T) -> B,
    {
        let mapped = self.fold_left(Vec::with_capacity(self.length), |mut elements, element| {
            elements.push(function(element));
            elements
        });
        PersistentList::build_from_vec(mapped)
    }

    /// Combines the two lists pairwise, truncating to the shorter one.
    ///
    /// ```rust
    /// use treefold::persistent::PersistentList;
    ///
    /// let numbers = PersistentList::from([1, 2, 3]);
    /// let letters = PersistentList::from(['a', 'b']);
    /// assert_eq!(
    ///     numbers.zip_with(&letters, |n, c| (*n, *c)),
    ///     PersistentList::from([(1, 'a'), (2, 'b')])
    /// );
    /// ```
    pub fn zip_with<U, R, F>(&self, other: &PersistentList<U>, mut function: F) -> PersistentList<R>
    where
        F: FnMut(&T, &U) -> R,
    {
        self.iter()
            .zip(other.iter())
            .map(|(left, right)| function(left, right))
            .collect()
    }

    /// Every combination of an element of `self` with an element of `other`,
    /// in row-major order.
    pub fn product<U, R, F>(&self, other: &PersistentList<U>, mut function: F) -> PersistentList<R>
    where
        F: FnMut(&T, &U) -> R,
    {
        let mut combined = Vec::with_capacity(self.length * other.length);
        for left in self {
            for right in other {
                combined.push(function(left, right));
            }
        }
        PersistentList::build_from_vec(combined)
    }

    /// Splits each element into a pair and returns the two lists.
    pub fn unzip_with<A, B, F>(&self, mut function: F) -> (PersistentList<A>, PersistentList<B>)
    where
        F: FnMut(&T) -> (A, B),
    {
        let mut firsts = Vec::with_capacity(self.length);
        let mut seconds = Vec::with_capacity(self.length);
        for element in self {
            let (first, second) = function(element);
            firsts.push(first);
            seconds.push(second);
        }
        (
            PersistentList::build_from_vec(firsts),
            PersistentList::build_from_vec(seconds),
        )
    }

    /// Applies a fallible `function` to every element. The first non-success
    /// result (failure or empty) is returned; otherwise all results are
    /// collected.
    ///
    /// ```rust
    /// use treefold::control::Outcome;
    /// use treefold::persistent::PersistentList;
    ///
    /// let texts = PersistentList::from(["1", "2", "x"]);
    /// let parsed = texts.traverse(|text| Outcome::success(*text).try_map(|t| t.parse::<i32>()));
    /// assert!(parsed.is_failure());
    /// ```
    pub fn traverse<B, F>(&self, mut function: F) -> Outcome<PersistentList<B>>
    where
        F: FnMut(&T) -> Outcome<B>,
    {
        let mut values = Vec::with_capacity(self.length);
        for element in self {
            match function(element) {
                Outcome::Success(value) => values.push(value),
                Outcome::Failure(cause) => return Outcome::Failure(cause),
                Outcome::Empty => return Outcome::Empty,
            }
        }
        Outcome::Success(PersistentList::build_from_vec(values))
    }

    /// Groups elements by `key`, keeping each group in list order.
    ///
    /// ```rust
    /// use treefold::persistent::PersistentList;
    ///
    /// let words = PersistentList::from(["apple", "avocado", "banana"]);
    /// let groups = words.group_by(|word| word.chars().next());
    /// assert_eq!(groups[&Some('a')], PersistentList::from(["apple", "avocado"]));
    /// assert_eq!(groups[&Some('b')].len(), 1);
    /// ```
    pub fn group_by<K, F>(&self, mut key: F) -> HashMap<K, Self>
    where
        K: Hash + Eq,
        T: Clone,
        F: FnMut(&T) -> K,
    {
        let mut groups: HashMap<K, Vec<T>> = HashMap::new();
        for element in self {
            groups.entry(key(element)).or_default().push(element.clone());
        }
        groups
            .into_iter()
            .map(|(group_key, elements)| (group_key, Self::build_from_vec(elements)))
            .collect()
    }
}

impl<T: Clone> PersistentList<T> {
    // =========================================================================
    // Construction From Borrowed Data
    // =========================================================================

    /// Builds a list from a slice, cloning each element.
    #[must_use]
    pub fn from_slice(slice: &[T]) -> Self {
        Self::build_from_vec(slice.to_vec())
    }

    // =========================================================================
    // Transformations
    // =========================================================================

    /// Reverses the list by folding from the left onto an empty list.
    #[must_use]
    pub fn reverse(&self) -> Self {
        self.fold_left(Self::new(), |accumulator, element| {
            accumulator.cons(element.clone())
        })
    }

    /// Keeps the elements satisfying `predicate`, in order.
    #[must_use]
    pub fn filter<P>(&self, mut predicate: P) -> Self
    where
        P: FnMut(&T) -> bool,
    {
        self.fold_right_via_fold_left(Self::new(), |element, accumulator| {
            if predicate(element) {
                accumulator.cons(element.clone())
            } else {
                accumulator
            }
        })
    }

    /// Maps each element to a list and concatenates the results in order.
    ///
    /// ```rust
    /// use treefold::persistent::PersistentList;
    ///
    /// let list = PersistentList::from([1, 2, 3]);
    /// let repeated = list.flat_map(|n| PersistentList::from(vec![*n; *n as usize]));
    /// assert_eq!(repeated, PersistentList::from([1, 2, 2, 3, 3, 3]));
    /// ```
    pub fn flat_map<B, F>(&self, mut function: F) -> PersistentList<B>
    where
        B: Clone,
        F: FnMut(&T) -> PersistentList<B>,
    {
        self.fold_right_via_fold_left(PersistentList::new(), |element, accumulator| {
            function(element).concat(&accumulator)
        })
    }

    /// Appends `other`, sharing it as the tail of the result. Stack-safe.
    ///
    /// # Complexity
    ///
    /// O(len(self))
    #[must_use]
    pub fn concat(&self, other: &Self) -> Self {
        if self.is_empty() {
            return other.clone();
        }
        let mut elements: Vec<&T> = self.iter().collect();
        let mut result = other.clone();
        while let Some(element) = elements.pop() {
            result.push_front(element.clone());
        }
        result
    }

    /// Appends `other` using [`PersistentList::fold_right`]. Overflows the
    /// stack on long lists; kept alongside [`PersistentList::concat`] for
    /// comparison.
    #[must_use]
    pub fn concat_via_fold_right(&self, other: &Self) -> Self {
        self.fold_right(other.clone(), |element, accumulator| {
            accumulator.cons(element.clone())
        })
    }

    /// The first `count` elements (all of them if `count >= len()`).
    #[must_use]
    pub fn take(&self, count: usize) -> Self {
        self.iter().take(count).cloned().collect()
    }

    /// Splits into `(first index elements, rest)`. `index` is clamped to
    /// `len()`. The second list shares structure with `self`.
    ///
    /// ```rust
    /// use treefold::persistent::PersistentList;
    ///
    /// let list = PersistentList::from([1, 2, 3, 4]);
    /// let (front, back) = list.split_at(1);
    /// assert_eq!(front, PersistentList::from([1]));
    /// assert_eq!(back, PersistentList::from([2, 3, 4]));
    ///
    /// let (all, none) = list.split_at(99);
    /// assert_eq!(all, list);
    /// assert!(none.is_empty());
    /// ```
    #[must_use]
    pub fn split_at(&self, index: usize) -> (Self, Self) {
        let index = index.min(self.length);
        (self.take(index), self.drop_first(index))
    }

    /// [`PersistentList::split_at`] as a two-element list of lists.
    #[must_use]
    pub fn split_list_at(&self, index: usize) -> PersistentList<Self> {
        let (front, back) = self.split_at(index);
        PersistentList::new().cons(back).cons(front)
    }

    /// Divides the list into contiguous sub-lists by halving, at most
    /// `depth` times, and stopping once the first sub-list has fewer than two
    /// elements. Yields at most `2^depth` sub-lists whose concatenation is
    /// `self`. An empty list yields one empty sub-list.
    ///
    /// ```rust
    /// use treefold::persistent::PersistentList;
    ///
    /// let list: PersistentList<i32> = (1..=8).collect();
    /// let parts = list.divide(2);
    /// assert_eq!(parts.len(), 4);
    /// assert_eq!(parts.expect_head(), &PersistentList::from([1, 2]));
    /// ```
    #[must_use]
    pub fn divide(&self, depth: usize) -> PersistentList<Self> {
        let mut parts = vec![self.clone()];
        let mut remaining = depth;
        while remaining > 0 && parts.first().is_some_and(|first| first.length >= 2) {
            parts = parts
                .iter()
                .flat_map(|part| {
                    let (front, back) = part.split_at(part.length / 2);
                    [front, back]
                })
                .collect();
            remaining -= 1;
        }
        PersistentList::build_from_vec(parts)
    }

    /// Pairs elements from both lists, truncating to the shorter one.
    #[must_use]
    pub fn zip<U: Clone>(&self, other: &PersistentList<U>) -> PersistentList<(T, U)> {
        self.zip_with(other, |left, right| (left.clone(), right.clone()))
    }

    /// Every element except the last; a failure for an empty list.
    pub fn init(&self) -> Outcome<Self> {
        if self.is_empty() {
            Outcome::failure("init called on an empty list")
        } else {
            Outcome::Success(self.take(self.length - 1))
        }
    }

    /// Replaces the first element; a failure for an empty list.
    pub fn set_head(&self, element: T) -> Outcome<Self> {
        if self.is_empty() {
            Outcome::failure("set_head called on an empty list")
        } else {
            Outcome::Success(self.tail().cons(element))
        }
    }
}

// =============================================================================
// Specialized Methods
// =============================================================================

impl<A: Clone, B: Clone> PersistentList<(A, B)> {
    /// Splits a list of pairs into a pair of lists.
    #[must_use]
    pub fn unzip(&self) -> (PersistentList<A>, PersistentList<B>) {
        self.unzip_with(|(first, second)| (first.clone(), second.clone()))
    }
}

impl<T: Clone> PersistentList<PersistentList<T>> {
    /// Concatenates the inner lists in order.
    #[must_use]
    pub fn flatten(&self) -> PersistentList<T> {
        self.flat_map(Clone::clone)
    }
}

impl<T: Clone> PersistentList<Outcome<T>> {
    /// `Success` of all values if every element is a success; otherwise the
    /// first failure or empty element.
    pub fn sequence(&self) -> Outcome<PersistentList<T>> {
        self.traverse(Clone::clone)
    }

    /// The success values, skipping failures and empties.
    #[must_use]
    pub fn flatten_successes(&self) -> PersistentList<T> {
        self.iter()
            .filter_map(|outcome| outcome.success_ref().cloned())
            .collect()
    }
}

// =============================================================================
// Iterator Implementation
// =============================================================================

/// Borrowing iterator over a [`PersistentList`].
pub struct PersistentListIterator<'a, T> {
    current: Option<&'a ReferenceCounter<Node<T>>>,
    remaining: usize,
}

impl<'a, T> Iterator for PersistentListIterator<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.current.map(|node| {
            self.current = node.next.as_ref();
            self.remaining -= 1;
            &node.element
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for PersistentListIterator<'_, T> {}

/// Owning iterator over a [`PersistentList`]; clones each element.
pub struct PersistentListIntoIterator<T> {
    list: PersistentList<T>,
}

impl<T: Clone> Iterator for PersistentListIntoIterator<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        let (element, tail) = self
            .list
            .uncons()
            .map(|(head, tail)| (head.clone(), tail))?;
        self.list = tail;
        Some(element)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.list.length, Some(self.list.length))
    }
}

impl<T: Clone> ExactSizeIterator for PersistentListIntoIterator<T> {}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<T> Clone for PersistentList<T> {
    fn clone(&self) -> Self {
        Self {
            head: self.head.clone(),
            length: self.length,
        }
    }
}

impl<T> Drop for PersistentList<T> {
    fn drop(&mut self) {
        let mut next = self.head.take();
        while let Some(node) = next {
            match ReferenceCounter::try_unwrap(node) {
                Ok(mut node) => next = node.next.take(),
                Err(_) => break,
            }
        }
    }
}

impl<T> Default for PersistentList<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<T> for PersistentList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::build_from_vec(iter.into_iter().collect())
    }
}

impl<T> From<Vec<T>> for PersistentList<T> {
    fn from(elements: Vec<T>) -> Self {
        Self::build_from_vec(elements)
    }
}

impl<T, const N: usize> From<[T; N]> for PersistentList<T> {
    fn from(elements: [T; N]) -> Self {
        Self::build_from_vec(Vec::from(elements))
    }
}

impl<T: Clone> IntoIterator for PersistentList<T> {
    type Item = T;
    type IntoIter = PersistentListIntoIterator<T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        PersistentListIntoIterator { list: self }
    }
}

impl<'a, T> IntoIterator for &'a PersistentList<T> {
    type Item = &'a T;
    type IntoIter = PersistentListIterator<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: PartialEq> PartialEq for PersistentList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.length == other.length && self.iter().zip(other.iter()).all(|(a, b)| a == b)
    }
}

impl<T: Eq> Eq for PersistentList<T> {}

impl<T: Hash> Hash for PersistentList<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.length.hash(state);
        for element in self {
            element.hash(state);
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for PersistentList<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_list().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for PersistentList<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "[")?;
        for (index, element) in self.iter().enumerate() {
            if index > 0 {
                write!(formatter, ", ")?;
            }
            write!(formatter, "{element}")?;
        }
        write!(formatter, "]")
    }
}

#[cfg(feature = "arc")]
static_assertions::assert_impl_all!(PersistentList<i32>: Send, Sync);

#[cfg(not(feature = "arc"))]
static_assertions::assert_not_impl_any!(PersistentList<i32>: Send, Sync);

// =============================================================================
// Type Class Implementations
// =============================================================================

impl<T> TypeConstructor for PersistentList<T> {
    type Inner = T;
    type WithType<B> = PersistentList<B>;
}

impl<T: Clone> FunctorMut for PersistentList<T> {
    fn fmap_mut<B, F>(self, mut function: F) -> PersistentList<B>
    where
        F: FnMut(T) -> B,
    {
        self.map(|element| function(element.clone()))
    }
}

impl<T> Foldable for PersistentList<T> {
    fn fold_left<B, F>(&self, init: B, function: F) -> B
    where
        F: FnMut(B, &T) -> B,
    {
        Self::fold_left(self, init, function)
    }

    fn fold_right<B, F>(&self, init: B, function: F) -> B
    where
        F: FnMut(&T, B) -> B,
    {
        self.fold_right_via_fold_left(init, function)
    }

    #[inline]
    fn length(&self) -> usize {
        self.length
    }
}

impl<T: Clone> Semigroup for PersistentList<T> {
    fn combine(self, other: Self) -> Self {
        self.concat(&other)
    }
}

impl<T: Clone> Monoid for PersistentList<T> {
    fn empty() -> Self {
        Self::new()
    }
}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::Serialize for PersistentList<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeSeq;
        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        for element in self {
            seq.serialize_element(element)?;
        }
        seq.end()
    }
}

#[cfg(feature = "serde")]
struct PersistentListVisitor<T> {
    marker: std::marker::PhantomData<T>,
}

#[cfg(feature = "serde")]
impl<'de, T> serde::de::Visitor<'de> for PersistentListVisitor<T>
where
    T: serde::Deserialize<'de>,
{
    type Value = PersistentList<T>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a sequence")
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: serde::de::SeqAccess<'de>,
    {
        const MAX_PREALLOCATE: usize = 4096;
        let capacity = seq.size_hint().unwrap_or(0).min(MAX_PREALLOCATE);
        let mut elements = Vec::with_capacity(capacity);
        while let Some(element) = seq.next_element()? {
            elements.push(element);
        }
        Ok(PersistentList::build_from_vec(elements))
    }
}

#[cfg(feature = "serde")]
impl<'de, T> serde::Deserialize<'de> for PersistentList<T>
where
    T: serde::Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_seq(PersistentListVisitor {
            marker: std::marker::PhantomData,
        })
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::control::Cause;
    use crate::typeclass::Sum;
    use rstest::rstest;

    // =========================================================================
    // Display Tests
    // =========================================================================

    #[rstest]
    #[case(PersistentList::new(), "[]")]
    #[case(PersistentList::singleton(42), "[42]")]
    #[case(PersistentList::from([1, 2, 3]), "[1, 2, 3]")]
    fn display_formats_like_a_vec(#[case] list: PersistentList<i32>, #[case] expected: &str) {
        assert_eq!(format!("{list}"), expected);
    }

    // =========================================================================
    // Construction and Access
    // =========================================================================

    #[rstest]
    fn cons_shares_tail() {
        let base = PersistentList::from([2, 3]);
        let extended = base.cons(1);
        assert_eq!(extended.len(), 3);
        assert_eq!(extended.tail(), base);
    }

    #[rstest]
    fn uncons_splits_head() {
        let list = PersistentList::from([1, 2]);
        let (head, tail) = list.uncons().unwrap();
        assert_eq!(*head, 1);
        assert_eq!(tail, PersistentList::singleton(2));
    }

    #[rstest]
    fn safe_accessors_on_empty() {
        let list: PersistentList<i32> = PersistentList::new();
        assert_eq!(list.head_safe(), Outcome::Empty);
        assert_eq!(list.tail_safe(), Outcome::Empty);
        assert_eq!(list.last_safe(), Outcome::Empty);
        assert_eq!(
            list.get_at(0),
            Outcome::Failure(Cause::message("Index out of bounds"))
        );
        assert!(list.init().is_failure());
        assert!(list.set_head(1).is_failure());
    }

    #[rstest]
    fn last_init_and_set_head() {
        let list = PersistentList::from([1, 2, 3]);
        assert_eq!(list.last_safe(), Outcome::Success(&3));
        assert_eq!(list.init(), Outcome::Success(PersistentList::from([1, 2])));
        assert_eq!(list.set_head(9), Outcome::Success(PersistentList::from([9, 2, 3])));
    }

    #[rstest]
    #[should_panic(expected = "expect_head called on an empty list")]
    fn expect_head_panics_on_empty() {
        let list: PersistentList<i32> = PersistentList::new();
        let _ = list.expect_head();
    }

    #[rstest]
    #[should_panic(expected = "expect_tail called on an empty list")]
    fn expect_tail_panics_on_empty() {
        let list: PersistentList<i32> = PersistentList::new();
        let _ = list.expect_tail();
    }

    #[rstest]
    fn range_and_unfold_agree() {
        let from_range = PersistentList::range(0, 5);
        let from_unfold = PersistentList::unfold(0, |n| (n < 5).then_some((n, n + 1)));
        assert_eq!(from_range, from_unfold);
    }

    // =========================================================================
    // Folds
    // =========================================================================

    #[rstest]
    fn fold_right_variants_agree() {
        let list: PersistentList<i32> = (1..=20).collect();
        let subtract = |element: &i32, accumulator: i32| element - accumulator;
        assert_eq!(
            list.fold_right(0, subtract),
            list.fold_right_via_fold_left(0, subtract)
        );
    }

    #[rstest]
    fn fold_left_and_return_remaining_stops_at_zero() {
        let list = PersistentList::from([2, 0, 4, 5]);
        let (product, rest) = list.fold_left_and_return_remaining(1, &0, |a, e| a * e);
        assert_eq!(product, 0);
        assert_eq!(rest, PersistentList::from([4, 5]));
    }

    // =========================================================================
    // Transformations
    // =========================================================================

    #[rstest]
    fn map_filter_flat_map_preserve_order() {
        let list = PersistentList::from([1, 2, 3, 4]);
        assert_eq!(list.map(|n| n * 10), PersistentList::from([10, 20, 30, 40]));
        assert_eq!(list.filter(|n| n % 2 == 1), PersistentList::from([1, 3]));
        assert_eq!(
            list.flat_map(|n| PersistentList::from([*n, -n])),
            PersistentList::from([1, -1, 2, -2, 3, -3, 4, -4])
        );
    }

    #[rstest]
    fn map_calls_function_front_to_back() {
        let mut seen = Vec::new();
        let _ = PersistentList::from([1, 2, 3]).map(|n| seen.push(*n));
        assert_eq!(seen, vec![1, 2, 3]);
    }

    #[rstest]
    fn concat_variants_agree() {
        let left = PersistentList::from([1, 2]);
        let right = PersistentList::from([3, 4]);
        assert_eq!(left.concat(&right), left.concat_via_fold_right(&right));
        assert_eq!(left.concat(&right).len(), 4);
    }

    #[rstest]
    #[case(0, 0, 4)]
    #[case(2, 2, 2)]
    #[case(4, 4, 0)]
    #[case(100, 4, 0)]
    fn split_at_clamps(#[case] index: usize, #[case] front: usize, #[case] back: usize) {
        let list = PersistentList::from([1, 2, 3, 4]);
        let (first, second) = list.split_at(index);
        assert_eq!((first.len(), second.len()), (front, back));
        assert_eq!(first.concat(&second), list);
    }

    #[rstest]
    #[case(10, 0, 1)]
    #[case(10, 1, 2)]
    #[case(10, 2, 4)]
    #[case(10, 3, 8)]
    #[case(10, 10, 8)]
    #[case(1, 5, 1)]
    #[case(0, 3, 1)]
    fn divide_counts(#[case] length: i32, #[case] depth: usize, #[case] expected: usize) {
        let list: PersistentList<i32> = (0..length).collect();
        let parts = list.divide(depth);
        assert_eq!(parts.len(), expected);
        assert_eq!(parts.flatten(), list);
    }

    #[rstest]
    fn zip_with_truncates() {
        let numbers = PersistentList::from([1, 2, 3]);
        let letters = PersistentList::from(['a', 'b']);
        assert_eq!(
            numbers.zip(&letters),
            PersistentList::from([(1, 'a'), (2, 'b')])
        );
    }

    #[rstest]
    fn unzip_inverts_zip() {
        let pairs = PersistentList::from([(1, 'a'), (2, 'b')]);
        let (numbers, letters) = pairs.unzip();
        assert_eq!(numbers, PersistentList::from([1, 2]));
        assert_eq!(letters, PersistentList::from(['a', 'b']));
    }

    #[rstest]
    fn product_is_row_major() {
        let rows = PersistentList::from([1, 2]);
        let columns = PersistentList::from([10, 20]);
        assert_eq!(
            rows.product(&columns, |r, c| r + c),
            PersistentList::from([11, 21, 12, 22])
        );
    }

    #[rstest]
    fn sequence_returns_first_non_success() {
        let all = PersistentList::from([Outcome::success(1), Outcome::success(2)]);
        assert_eq!(all.sequence(), Outcome::Success(PersistentList::from([1, 2])));

        let mixed = PersistentList::from([
            Outcome::success(1),
            Outcome::empty(),
            Outcome::failure("late"),
        ]);
        assert_eq!(mixed.sequence(), Outcome::Empty);
        assert_eq!(mixed.flatten_successes(), PersistentList::from([1]));
    }

    #[rstest]
    fn starts_with_and_sub_list() {
        let list = PersistentList::from([1, 2, 3]);
        assert!(list.starts_with(&PersistentList::new()));
        assert!(list.starts_with(&PersistentList::from([1, 2])));
        assert!(!list.starts_with(&PersistentList::from([2])));
        assert!(list.has_sub_list(&PersistentList::from([3])));
        assert!(PersistentList::<i32>::new().has_sub_list(&PersistentList::new()));
    }

    #[rstest]
    fn drop_while_shares_suffix() {
        let list = PersistentList::from([1, 2, 5, 1]);
        assert_eq!(list.drop_while(|n| *n < 3), PersistentList::from([5, 1]));
        assert_eq!(list.drop_first(10), PersistentList::new());
    }

    // =========================================================================
    // Type Classes
    // =========================================================================

    #[rstest]
    fn fold_map_sums_through_foldable() {
        let list = PersistentList::from([1, 2, 3]);
        assert_eq!(list.fold_map(|n| Sum(*n)), Sum(6));
    }

    #[rstest]
    fn monoid_combine_concatenates() {
        let combined = PersistentList::from([1]).combine(PersistentList::from([2]));
        assert_eq!(combined, PersistentList::from([1, 2]));
        assert!(PersistentList::<i32>::empty().is_empty());
    }

    #[rstest]
    fn fmap_mut_doubles() {
        let doubled = PersistentList::from([1, 2]).fmap_mut(|n| n * 2);
        assert_eq!(doubled, PersistentList::from([2, 4]));
    }

    // =========================================================================
    // Stack Safety
    // =========================================================================

    #[rstest]
    fn long_list_folds_and_drops() {
        let list: PersistentList<u64> = (1..=1_000_000).collect();
        assert_eq!(list.fold_left(0, |a, e| a + e), 500_000_500_000);
        assert_eq!(
            list.fold_right_via_fold_left(0, |e, a| a + e),
            500_000_500_000
        );
        assert_eq!(list.reverse().expect_head(), &1_000_000);
        drop(list);
    }
}
