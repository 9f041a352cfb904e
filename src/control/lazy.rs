//! Lazy evaluation with memoization.
//!
//! A [`Lazy<T>`] holds a deferred computation that runs at most once, on the
//! first [`Lazy::force`]. Clones share the same cell, so forcing any clone
//! memoizes the value for all of them. This sharing is what lets
//! [`Stream`](super::Stream) evaluate each element a single time.
//!
//! # Examples
//!
//! ```rust
//! use std::cell::Cell;
//! use std::rc::Rc;
//! use treefold::control::Lazy;
//!
//! let calls = Rc::new(Cell::new(0));
//! let counter = Rc::clone(&calls);
//! let lazy = Lazy::new(move || {
//!     counter.set(counter.get() + 1);
//!     42
//! });
//!
//! assert_eq!(calls.get(), 0);
//! assert_eq!(*lazy.force(), 42);
//! assert_eq!(*lazy.clone().force(), 42);
//! assert_eq!(calls.get(), 1);
//! ```

use std::cell::{Ref, RefCell};
use std::fmt;
use std::rc::Rc;

#[cfg(feature = "persistent")]
use super::{outcome::catch_panic, Outcome};
#[cfg(feature = "persistent")]
use crate::persistent::PersistentList;

type Thunk<T> = Box<dyn FnOnce() -> T>;

/// Evaluation state of a [`Lazy`] cell.
pub enum LazyState<T> {
    /// Not yet evaluated; holds the initializer.
    Uninit(Thunk<T>),
    /// Evaluated; holds the value.
    Init(T),
    /// The initializer panicked or re-entered its own cell.
    Poisoned,
}

/// A shared, memoized, deferred value.
///
/// Single-threaded: the cell is an `Rc<RefCell<_>>`.
pub struct Lazy<T> {
    cell: Rc<RefCell<LazyState<T>>>,
}

impl<T> Lazy<T> {
    /// Defers `initializer` until the value is first needed.
    #[inline]
    pub fn new<F>(initializer: F) -> Self
    where
        F: FnOnce() -> T + 'static,
    {
        Self {
            cell: Rc::new(RefCell::new(LazyState::Uninit(Box::new(initializer)))),
        }
    }

    /// Wraps an already computed value.
    #[inline]
    pub fn evaluated(value: T) -> Self {
        Self {
            cell: Rc::new(RefCell::new(LazyState::Init(value))),
        }
    }

    /// Evaluates the value if needed and borrows it.
    ///
    /// # Panics
    ///
    /// Panics if the cell is poisoned: a previous initializer panicked, or the
    /// initializer tried to force its own cell.
    pub fn force(&self) -> Ref<'_, T> {
        self.initialize();
        Ref::map(self.cell.borrow(), |state| match state {
            LazyState::Init(value) => value,
            LazyState::Uninit(_) | LazyState::Poisoned => {
                panic!("Lazy instance has been poisoned")
            }
        })
    }

    fn initialize(&self) {
        if !matches!(&*self.cell.borrow(), LazyState::Uninit(_)) {
            return;
        }
        let initializer = {
            let mut state = self.cell.borrow_mut();
            match std::mem::replace(&mut *state, LazyState::Poisoned) {
                LazyState::Uninit(initializer) => initializer,
                LazyState::Init(_) | LazyState::Poisoned => return,
            }
        };
        // The borrow is released while the initializer runs, so it may force
        // other cells. A panic here leaves the cell Poisoned.
        let value = initializer();
        *self.cell.borrow_mut() = LazyState::Init(value);
    }

    /// Returns `true` once the value has been computed.
    #[inline]
    #[must_use]
    pub fn is_initialized(&self) -> bool {
        matches!(&*self.cell.borrow(), LazyState::Init(_))
    }

    /// Returns `true` if the initializer panicked.
    #[inline]
    #[must_use]
    pub fn is_poisoned(&self) -> bool {
        matches!(&*self.cell.borrow(), LazyState::Poisoned)
    }

    /// Borrows the value if it has already been computed, without forcing.
    #[cfg_attr(not(feature = "persistent"), allow(dead_code))]
    pub(crate) fn evaluated_ref(&self) -> Option<Ref<'_, T>> {
        Ref::filter_map(self.cell.borrow(), |state| match state {
            LazyState::Init(value) => Some(value),
            LazyState::Uninit(_) | LazyState::Poisoned => None,
        })
        .ok()
    }

    /// Returns `true` if no clone shares this cell.
    #[cfg_attr(not(feature = "persistent"), allow(dead_code))]
    #[inline]
    pub(crate) fn is_unique(&self) -> bool {
        Rc::strong_count(&self.cell) == 1
    }

    /// Takes the value out of a cell nobody else shares, if it has been
    /// computed.
    #[cfg_attr(not(feature = "persistent"), allow(dead_code))]
    pub(crate) fn into_evaluated(self) -> Option<T> {
        Rc::try_unwrap(self.cell)
            .ok()
            .and_then(|cell| match cell.into_inner() {
                LazyState::Init(value) => Some(value),
                LazyState::Uninit(_) | LazyState::Poisoned => None,
            })
    }
}

impl<T: Clone> Lazy<T> {
    /// Forces the value and returns a clone of it.
    ///
    /// # Panics
    ///
    /// Panics if the cell is poisoned.
    pub fn get(&self) -> T {
        self.force().clone()
    }
}

impl<T: 'static> Lazy<T> {
    /// Defers applying `function` to this value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use treefold::control::Lazy;
    ///
    /// let name = Lazy::new(|| "Mickey".to_string());
    /// let greeting = name.map(|name| format!("Hello, {name}"));
    /// assert!(!name.is_initialized());
    /// assert_eq!(*greeting.force(), "Hello, Mickey");
    /// ```
    pub fn map<U, F>(&self, function: F) -> Lazy<U>
    where
        F: FnOnce(&T) -> U + 'static,
    {
        let source = self.clone();
        Lazy::new(move || function(&source.force()))
    }

    /// Defers a computation that itself produces a lazy value.
    pub fn flat_map<U, F>(&self, function: F) -> Lazy<U>
    where
        U: Clone,
        F: FnOnce(&T) -> Lazy<U> + 'static,
    {
        let source = self.clone();
        Lazy::new(move || function(&source.force()).get())
    }

    /// Lifts a binary function over two lazy arguments without forcing them.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use treefold::control::Lazy;
    ///
    /// let greet = Lazy::lift2(|greeting: &String, name: &String| format!("{greeting}, {name}"));
    /// let message = greet(&Lazy::new(|| "Hello".to_string()), &Lazy::new(|| "Donald".to_string()));
    /// assert_eq!(*message.force(), "Hello, Donald");
    /// ```
    pub fn lift2<B, C, F>(function: F) -> impl Fn(&Self, &Lazy<B>) -> Lazy<C>
    where
        B: 'static,
        F: Fn(&T, &B) -> C + 'static,
    {
        let function = Rc::new(function);
        move |first: &Self, second: &Lazy<B>| {
            let function = Rc::clone(&function);
            let first = first.clone();
            let second = second.clone();
            Lazy::new(move || function(&first.force(), &second.force()))
        }
    }
}

#[cfg(feature = "persistent")]
impl<T: Clone + 'static> Lazy<T> {
    /// Turns a list of lazy values into a lazy list, forcing nothing until
    /// the result is forced.
    pub fn sequence(list: &PersistentList<Self>) -> Lazy<PersistentList<T>> {
        let list = list.clone();
        Lazy::new(move || list.map(Self::get))
    }

    /// Like [`Lazy::sequence`], but an element whose initializer panics turns
    /// the whole result into a failure instead of propagating the panic.
    pub fn sequence_outcome(list: &PersistentList<Self>) -> Lazy<Outcome<PersistentList<T>>> {
        let list = list.clone();
        Lazy::new(move || {
            let mut values = Vec::with_capacity(list.len());
            for lazy in &list {
                match catch_panic(|| lazy.get()) {
                    Ok(value) => values.push(value),
                    Err(cause) => return Outcome::Failure(cause),
                }
            }
            Outcome::Success(PersistentList::from(values))
        })
    }
}

impl<T> Clone for Lazy<T> {
    fn clone(&self) -> Self {
        Self {
            cell: Rc::clone(&self.cell),
        }
    }
}

impl<T: Default + 'static> Default for Lazy<T> {
    fn default() -> Self {
        Self::new(T::default)
    }
}

impl<T: fmt::Debug> fmt::Debug for Lazy<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &*self.cell.borrow() {
            LazyState::Init(value) => formatter.debug_tuple("Lazy").field(value).finish(),
            LazyState::Uninit(_) => formatter.debug_tuple("Lazy").field(&"<uninit>").finish(),
            LazyState::Poisoned => formatter.debug_tuple("Lazy").field(&"<poisoned>").finish(),
        }
    }
}
