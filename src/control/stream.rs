//! Lazy, memoized, possibly infinite streams.
//!
//! A [`Stream`] is a cons list whose head and tail are both [`Lazy`]. Nothing
//! is computed until it is demanded, and each element is computed at most
//! once no matter how many clones of the stream observe it.
//!
//! Operations that must walk an unknown distance (`drop_at_most`,
//! `drop_while`, `exists`, `find`, `filter`, `flat_map`, `to_list`) are
//! loops, so they stay within a constant stack depth on long streams.
//!
//! # Examples
//!
//! ```rust
//! use treefold::control::Stream;
//! use treefold::persistent::PersistentList;
//!
//! let evens = Stream::from(0).filter(|n| n % 2 == 0).take_at_most(4);
//! assert_eq!(evens.to_list(), PersistentList::from([0, 2, 4, 6]));
//! ```

use super::outcome::catch_panic;
use super::{Lazy, Outcome};
use crate::persistent::PersistentList;
use std::fmt;
use std::rc::Rc;

/// A lazy stream of values.
#[derive(Clone)]
pub enum Stream<T> {
    /// The end of the stream.
    Empty,
    /// A lazily evaluated head followed by a lazily evaluated rest.
    Cons {
        /// The first element.
        head: Lazy<T>,
        /// The rest of the stream.
        tail: Lazy<Stream<T>>,
    },
}

impl<T> Stream<T> {
    /// The empty stream.
    #[inline]
    pub const fn empty() -> Self {
        Self::Empty
    }

    /// Prepends a lazy head to a lazy tail.
    #[inline]
    pub const fn cons(head: Lazy<T>, tail: Lazy<Self>) -> Self {
        Self::Cons { head, tail }
    }

    /// Returns `true` for the empty stream.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    fn detach_evaluated_tail(&mut self) -> Option<Lazy<Self>> {
        match self {
            Self::Cons { tail, .. }
                if tail.is_unique()
                    && tail
                        .evaluated_ref()
                        .is_some_and(|rest| !rest.is_empty()) =>
            {
                Some(std::mem::replace(tail, Lazy::evaluated(Self::Empty)))
            }
            _ => None,
        }
    }
}

impl Stream<i64> {
    /// The infinite stream `start, start + 1, start + 2, ...`.
    pub fn from(start: i64) -> Self {
        Self::iterate(start, |n| n + 1)
    }
}

impl<T: Clone + 'static> Stream<T> {
    // =========================================================================
    // Construction
    // =========================================================================

    /// The infinite stream `seed, f(seed), f(f(seed)), ...`.
    ///
    /// The next value is computed when the tail is forced.
    pub fn iterate<F>(seed: T, function: F) -> Self
    where
        F: Fn(&T) -> T + 'static,
    {
        Self::iterate_shared(seed, Rc::new(function))
    }

    fn iterate_shared(seed: T, function: Rc<dyn Fn(&T) -> T>) -> Self {
        let head = Lazy::evaluated(seed);
        let source = head.clone();
        Self::cons(
            head,
            Lazy::new(move || {
                let value = function(&source.force());
                Self::iterate_shared(value, function)
            }),
        )
    }

    /// The infinite stream of values produced by calling `generator`
    /// repeatedly.
    pub fn repeat<F>(generator: F) -> Self
    where
        F: Fn() -> T + 'static,
    {
        Self::repeat_shared(Rc::new(generator))
    }

    fn repeat_shared(generator: Rc<dyn Fn() -> T>) -> Self {
        let for_head = Rc::clone(&generator);
        Self::cons(
            Lazy::new(move || for_head()),
            Lazy::new(move || Self::repeat_shared(generator)),
        )
    }

    // =========================================================================
    // Access
    // =========================================================================

    /// The first element; `Empty` for the empty stream. A panic while
    /// computing the element becomes a failure.
    pub fn head(&self) -> Outcome<T> {
        match self {
            Self::Empty => Outcome::Empty,
            Self::Cons { head, .. } => {
                catch_panic(|| head.get()).map_or_else(Outcome::Failure, Outcome::Success)
            }
        }
    }

    /// The rest of the stream; `Empty` for the empty stream.
    pub fn tail(&self) -> Outcome<Self> {
        match self {
            Self::Empty => Outcome::Empty,
            Self::Cons { tail, .. } => {
                catch_panic(|| tail.get()).map_or_else(Outcome::Failure, Outcome::Success)
            }
        }
    }

    // =========================================================================
    // Slicing
    // =========================================================================

    /// The first `count` elements, evaluated lazily.
    #[must_use]
    pub fn take_at_most(&self, count: usize) -> Self {
        match self {
            Self::Cons { head, tail } if count > 0 => {
                let rest = if count == 1 {
                    Lazy::evaluated(Self::Empty)
                } else {
                    let tail = tail.clone();
                    Lazy::new(move || tail.get().take_at_most(count - 1))
                };
                Self::cons(head.clone(), rest)
            }
            _ => Self::Empty,
        }
    }

    /// Skips up to `count` elements.
    #[must_use]
    pub fn drop_at_most(&self, count: usize) -> Self {
        let mut current = self.clone();
        for _ in 0..count {
            let next = match &current {
                Self::Empty => break,
                Self::Cons { tail, .. } => tail.get(),
            };
            current = next;
        }
        current
    }

    /// The longest prefix whose elements satisfy `predicate`, evaluated
    /// lazily.
    #[must_use]
    pub fn take_while<P>(&self, predicate: P) -> Self
    where
        P: Fn(&T) -> bool + 'static,
    {
        self.take_while_shared(Rc::new(predicate))
    }

    fn take_while_shared(&self, predicate: Rc<dyn Fn(&T) -> bool>) -> Self {
        match self {
            Self::Cons { head, tail } if predicate(&head.force()) => {
                let tail = tail.clone();
                Self::cons(
                    head.clone(),
                    Lazy::new(move || tail.get().take_while_shared(predicate)),
                )
            }
            _ => Self::Empty,
        }
    }

    /// Skips the leading elements that satisfy `predicate`.
    #[must_use]
    pub fn drop_while<P>(&self, mut predicate: P) -> Self
    where
        P: FnMut(&T) -> bool,
    {
        let mut current = self.clone();
        loop {
            let next = match &current {
                Self::Cons { head, tail } if predicate(&head.force()) => Some(tail.get()),
                _ => None,
            };
            match next {
                Some(rest) => current = rest,
                None => return current,
            }
        }
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// Returns `true` as soon as an element satisfies `predicate`. Does not
    /// terminate on an infinite stream with no such element.
    pub fn exists<P>(&self, mut predicate: P) -> bool
    where
        P: FnMut(&T) -> bool,
    {
        !self.drop_while(|element| !predicate(element)).is_empty()
    }

    /// The first element satisfying `predicate`, or `Empty`.
    pub fn find<P>(&self, mut predicate: P) -> Outcome<T>
    where
        P: FnMut(&T) -> bool,
    {
        self.drop_while(|element| !predicate(element)).head()
    }

    // =========================================================================
    // Transformation
    // =========================================================================

    /// Right fold with a lazy accumulator. `function` decides whether to
    /// force the rest of the fold, so folding an infinite stream terminates
    /// when `function` stops demanding the accumulator.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use treefold::control::{Lazy, Stream};
    ///
    /// // Stops at the first element above 10 without forcing the rest.
    /// let first_large = Stream::from(1).fold_right(Lazy::evaluated(None), |element, rest| {
    ///     if *element > 10 { Some(*element) } else { rest.get() }
    /// });
    /// assert_eq!(first_large, Some(11));
    /// ```
    pub fn fold_right<B, F>(&self, identity: Lazy<B>, function: F) -> B
    where
        B: Clone + 'static,
        F: Fn(&T, Lazy<B>) -> B + 'static,
    {
        Self::fold_right_shared(self, identity, Rc::new(function))
    }

    fn fold_right_shared<B: Clone + 'static>(
        stream: &Self,
        identity: Lazy<B>,
        function: Rc<dyn Fn(&T, Lazy<B>) -> B>,
    ) -> B {
        match stream {
            Self::Empty => identity.get(),
            Self::Cons { head, tail } => {
                let tail = tail.clone();
                let step = Rc::clone(&function);
                let rest = Lazy::new(move || Self::fold_right_shared(&tail.get(), identity, step));
                function(&head.force(), rest)
            }
        }
    }

    /// Applies `function` to each element lazily.
    pub fn map<U, F>(&self, function: F) -> Stream<U>
    where
        U: Clone + 'static,
        F: Fn(&T) -> U + 'static,
    {
        self.map_shared(Rc::new(function))
    }

    fn map_shared<U: Clone + 'static>(&self, function: Rc<dyn Fn(&T) -> U>) -> Stream<U> {
        match self {
            Self::Empty => Stream::Empty,
            Self::Cons { head, tail } => {
                let source = head.clone();
                let for_head = Rc::clone(&function);
                let tail = tail.clone();
                Stream::cons(
                    Lazy::new(move || for_head(&source.force())),
                    Lazy::new(move || tail.get().map_shared(function)),
                )
            }
        }
    }

    /// Keeps the elements satisfying `predicate`.
    ///
    /// Runs of rejected elements are skipped in a loop when the next element
    /// is demanded.
    #[must_use]
    pub fn filter<P>(&self, predicate: P) -> Self
    where
        P: Fn(&T) -> bool + 'static,
    {
        self.filter_shared(Rc::new(predicate))
    }

    fn filter_shared(&self, predicate: Rc<dyn Fn(&T) -> bool>) -> Self {
        match &self.drop_while(|element| !predicate(element)) {
            Self::Empty => Self::Empty,
            Self::Cons { head, tail } => {
                let tail = tail.clone();
                Self::cons(
                    head.clone(),
                    Lazy::new(move || tail.get().filter_shared(predicate)),
                )
            }
        }
    }

    /// This stream followed by `other`. `other` is forced only when this
    /// stream is exhausted.
    #[must_use]
    pub fn append(&self, other: Lazy<Self>) -> Self {
        match self {
            Self::Empty => other.get(),
            Self::Cons { head, tail } => {
                let tail = tail.clone();
                Self::cons(head.clone(), Lazy::new(move || tail.get().append(other)))
            }
        }
    }

    /// Replaces every element with a stream and concatenates the results.
    pub fn flat_map<U, F>(&self, function: F) -> Stream<U>
    where
        U: Clone + 'static,
        F: Fn(&T) -> Stream<U> + 'static,
    {
        self.flat_map_shared(Rc::new(function))
    }

    fn flat_map_shared<U: Clone + 'static>(
        &self,
        function: Rc<dyn Fn(&T) -> Stream<U>>,
    ) -> Stream<U> {
        let mut current = self.clone();
        loop {
            let (produced, tail) = match &current {
                Self::Empty => return Stream::Empty,
                Self::Cons { head, tail } => (function(&head.force()), tail.clone()),
            };
            if produced.is_empty() {
                current = tail.get();
                continue;
            }
            return produced.append(Lazy::new(move || tail.get().flat_map_shared(function)));
        }
    }

    /// Forces the whole stream into a list. Does not terminate on an
    /// infinite stream.
    pub fn to_list(&self) -> PersistentList<T> {
        let mut values = Vec::new();
        let mut current = self.clone();
        loop {
            let next = match &current {
                Self::Empty => break,
                Self::Cons { head, tail } => {
                    values.push(head.get());
                    tail.get()
                }
            };
            current = next;
        }
        PersistentList::from(values)
    }
}

impl<T> Default for Stream<T> {
    fn default() -> Self {
        Self::Empty
    }
}

impl<T: fmt::Debug> fmt::Debug for Stream<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => formatter.write_str("Stream::Empty"),
            Self::Cons { head, .. } => formatter
                .debug_struct("Stream::Cons")
                .field("head", head)
                .finish_non_exhaustive(),
        }
    }
}

impl<T> Drop for Stream<T> {
    fn drop(&mut self) {
        let mut pending = self.detach_evaluated_tail();
        while let Some(lazy) = pending.take() {
            if let Some(mut rest) = lazy.into_evaluated() {
                pending = rest.detach_evaluated_tail();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::cell::Cell;

    fn counted_naturals(counter: &Rc<Cell<usize>>) -> Stream<i64> {
        let counter = Rc::clone(counter);
        Stream::iterate(0, move |n| {
            counter.set(counter.get() + 1);
            n + 1
        })
    }

    #[rstest]
    fn from_produces_successive_integers() {
        let stream = Stream::from(5);
        assert_eq!(stream.take_at_most(3).to_list(), PersistentList::from([5, 6, 7]));
    }

    #[rstest]
    fn head_and_tail_of_empty_are_empty() {
        let stream: Stream<i32> = Stream::empty();
        assert_eq!(stream.head(), Outcome::Empty);
        assert!(stream.tail().is_empty());
    }

    #[rstest]
    fn take_at_most_is_lazy() {
        let counter = Rc::new(Cell::new(0));
        let taken = counted_naturals(&counter).take_at_most(1_000);
        assert_eq!(counter.get(), 0);
        assert_eq!(taken.head(), Outcome::Success(0));
        assert_eq!(counter.get(), 0);
    }

    #[rstest]
    fn elements_are_computed_once() {
        let counter = Rc::new(Cell::new(0));
        let stream = counted_naturals(&counter);
        let first = stream.take_at_most(10).to_list();
        let second = stream.take_at_most(10).to_list();
        assert_eq!(first, second);
        assert_eq!(counter.get(), 9);
    }

    #[rstest]
    fn drop_at_most_past_end_is_empty() {
        let stream = Stream::from(0).take_at_most(3);
        assert!(stream.drop_at_most(10).is_empty());
        assert_eq!(stream.drop_at_most(1).head(), Outcome::Success(1));
    }

    #[rstest]
    fn take_while_and_drop_while() {
        let stream = Stream::from(1);
        assert_eq!(
            stream.take_while(|n| *n < 4).to_list(),
            PersistentList::from([1, 2, 3])
        );
        assert_eq!(stream.drop_while(|n| *n < 4).head(), Outcome::Success(4));
    }

    #[rstest]
    fn exists_and_find_on_infinite_stream() {
        let stream = Stream::from(1);
        assert!(stream.exists(|n| *n == 500));
        assert_eq!(stream.find(|n| n % 7 == 0), Outcome::Success(7));
    }

    #[rstest]
    fn map_is_lazy_per_element() {
        let calls = Rc::new(Cell::new(0));
        let counter = Rc::clone(&calls);
        let mapped = Stream::from(1).map(move |n| {
            counter.set(counter.get() + 1);
            n * 10
        });
        assert_eq!(calls.get(), 0);
        assert_eq!(mapped.drop_at_most(2).head(), Outcome::Success(30));
        assert_eq!(calls.get(), 1);
    }

    #[rstest]
    fn filter_skips_long_runs() {
        let stream = Stream::from(0).filter(|n| n % 100_000 == 0);
        assert_eq!(
            stream.take_at_most(3).to_list(),
            PersistentList::from([0, 100_000, 200_000])
        );
    }

    #[rstest]
    fn append_concatenates() {
        let first = Stream::from(1).take_at_most(2);
        let second = Stream::from(10).take_at_most(2);
        assert_eq!(
            first.append(Lazy::evaluated(second)).to_list(),
            PersistentList::from([1, 2, 10, 11])
        );
    }

    #[rstest]
    fn flat_map_expands_and_skips_empty() {
        let stream = Stream::from(0).take_at_most(4).flat_map(|n| {
            if n % 2 == 0 {
                Stream::from(*n).take_at_most(2)
            } else {
                Stream::empty()
            }
        });
        assert_eq!(stream.to_list(), PersistentList::from([0, 1, 2, 3]));
    }

    #[rstest]
    fn fold_right_builds_prefix_lazily() {
        let doubled = Stream::from(1).take_at_most(4).fold_right(
            Lazy::evaluated(PersistentList::new()),
            |element, rest| rest.get().cons(element * 2),
        );
        assert_eq!(doubled, PersistentList::from([2, 4, 6, 8]));
    }

    #[rstest]
    fn repeat_calls_generator_per_element() {
        let calls = Rc::new(Cell::new(0));
        let counter = Rc::clone(&calls);
        let stream = Stream::repeat(move || {
            counter.set(counter.get() + 1);
            'x'
        });
        assert_eq!(stream.take_at_most(3).to_list(), PersistentList::from(['x', 'x', 'x']));
        assert_eq!(calls.get(), 3);
    }

    #[rstest]
    fn long_evaluated_stream_drops_without_overflow() {
        let stream = Stream::from(0).take_at_most(200_000);
        assert_eq!(stream.to_list().len(), 200_000);
        drop(stream);
    }

    #[rstest]
    fn debug_does_not_force() {
        let stream = Stream::cons(Lazy::new(|| 1), Lazy::new(Stream::empty));
        assert_eq!(format!("{stream:?}"), "Stream::Cons { head: Lazy(\"<uninit>\"), .. }");
    }
}
