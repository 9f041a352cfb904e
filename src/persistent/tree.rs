//! Persistent unbalanced binary search tree.
//!
//! [`Tree`] stores a duplicate-free set of totally ordered values. Every
//! value in a node's left subtree is smaller than the node's value, and
//! every value in its right subtree is larger. Inserting a value equal to
//! a stored one replaces the stored value.
//!
//! Updates copy only the path from the root to the changed node; all other
//! subtrees are shared with the previous version.
//!
//! No rebalancing is performed: inserting sorted input produces a tree whose
//! height equals its size minus one. Insertion, removal, lookup, the folds,
//! iteration and list conversion all run as loops over explicit stacks, so
//! such degenerate trees are handled without exhausting the call stack.
//! [`Tree::merge`] is the exception and recurses on the shape of its inputs.
//!
//! # Examples
//!
//! ```rust
//! use treefold::persistent::{PersistentList, Tree};
//!
//! let tree = Tree::from([5, 3, 8, 1, 4]);
//! assert_eq!(tree.to_list_in_order(), PersistentList::from([1, 3, 4, 5, 8]));
//! assert_eq!(tree.height(), 2);
//! assert_eq!(tree.size(), 5);
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

use smallvec::SmallVec;

use super::{PersistentList, ReferenceCounter};
use crate::control::Outcome;
use crate::typeclass::{Foldable, TypeConstructor};

/// Path entries kept inline before spilling to the heap.
const PATH_INLINE: usize = 32;

// =============================================================================
// Node Definition
// =============================================================================

struct Node<A> {
    left: Tree<A>,
    value: A,
    right: Tree<A>,
    size: usize,
    height: isize,
}

#[derive(Clone, Copy)]
enum Side {
    Left,
    Right,
}

type Path<'a, A> = SmallVec<[(&'a Node<A>, Side); PATH_INLINE]>;

/// `(min, max)` of a subtree, `None` when it is empty.
type Bounds<A> = Option<(A, A)>;

// =============================================================================
// Tree Definition
// =============================================================================

/// An immutable, unbalanced binary search tree.
///
/// # Time Complexity
///
/// | Operation   | Complexity  |
/// |-------------|-------------|
/// | `insert`    | O(height)   |
/// | `remove`    | O(height)   |
/// | `contains`  | O(height)   |
/// | `min`/`max` | O(height)   |
/// | `size`      | O(1)        |
/// | `height`    | O(1)        |
/// | folds       | O(n)        |
pub struct Tree<A> {
    root: Option<ReferenceCounter<Node<A>>>,
}

impl<A> Tree<A> {
    // =========================================================================
    // Construction
    // =========================================================================

    /// Creates an empty tree.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self { root: None }
    }

    /// Creates a tree holding a single value.
    #[inline]
    #[must_use]
    pub fn singleton(value: A) -> Self {
        Self::node(Self::new(), value, Self::new())
    }

    /// Joins two subtrees under `value` without checking the ordering.
    fn node(left: Self, value: A, right: Self) -> Self {
        let size = left.size() + right.size() + 1;
        let height = 1 + left.height().max(right.height());
        Self {
            root: Some(ReferenceCounter::new(Node {
                left,
                value,
                right,
                size,
                height,
            })),
        }
    }

    // =========================================================================
    // Inspection
    // =========================================================================

    /// Returns `true` if the tree holds no values.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Number of values in the tree.
    #[inline]
    #[must_use]
    pub fn size(&self) -> usize {
        self.root.as_ref().map_or(0, |node| node.size)
    }

    /// Number of edges on the longest root-to-leaf path: `0` for a single
    /// node and `-1` for an empty tree.
    #[inline]
    #[must_use]
    pub fn height(&self) -> isize {
        self.root.as_ref().map_or(-1, |node| node.height)
    }

    /// The value at the root, if any.
    #[inline]
    #[must_use]
    pub fn root_value(&self) -> Option<&A> {
        self.root.as_ref().map(|node| &node.value)
    }

    /// The smallest value; `Empty` for an empty tree.
    pub fn min(&self) -> Outcome<&A> {
        let mut current = self.root.as_deref();
        let mut smallest = None;
        while let Some(node) = current {
            smallest = Some(&node.value);
            current = node.left.root.as_deref();
        }
        Outcome::from_option(smallest)
    }

    /// The largest value; `Empty` for an empty tree.
    pub fn max(&self) -> Outcome<&A> {
        let mut current = self.root.as_deref();
        let mut largest = None;
        while let Some(node) = current {
            largest = Some(&node.value);
            current = node.right.root.as_deref();
        }
        Outcome::from_option(largest)
    }

    /// Ascending iterator over the values.
    #[must_use]
    pub fn iter(&self) -> TreeIterator<'_, A> {
        let mut iterator = TreeIterator {
            stack: Vec::new(),
            remaining: self.size(),
        };
        iterator.push_left_spine(self);
        iterator
    }

    // =========================================================================
    // Folds
    // =========================================================================

    /// Bottom-up evaluation shared by the traversal folds: every empty
    /// subtree contributes `identity`, every node combines its children's
    /// results with its own value.
    fn fold_nodes<B, F>(&self, identity: B, mut combine: F) -> B
    where
        B: Clone,
        F: FnMut(B, &A, B) -> B,
    {
        enum Frame<'a, T> {
            Visit(&'a Tree<T>),
            Combine(&'a T),
        }

        let mut frames = vec![Frame::Visit(self)];
        let mut results: Vec<B> = Vec::new();
        while let Some(frame) = frames.pop() {
            match frame {
                Frame::Visit(tree) => match tree.root.as_deref() {
                    None => results.push(identity.clone()),
                    Some(node) => {
                        frames.push(Frame::Combine(&node.value));
                        frames.push(Frame::Visit(&node.right));
                        frames.push(Frame::Visit(&node.left));
                    }
                },
                Frame::Combine(value) => {
                    let right = results.pop();
                    let left = results.pop();
                    if let (Some(left), Some(right)) = (left, right) {
                        results.push(combine(left, value, right));
                    }
                }
            }
        }
        results.pop().unwrap_or(identity)
    }

    /// In-order catamorphism: each node is replaced by
    /// `f(fold(left), value, fold(right))` and each empty subtree by
    /// `identity`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use treefold::persistent::Tree;
    ///
    /// let tree = Tree::from([2, 1, 3]);
    /// let text = tree.fold_in_order(String::from("E"), |left, value, right| {
    ///     format!("({left} {value} {right})")
    /// });
    /// assert_eq!(text, "((E 1 E) 2 (E 3 E))");
    /// ```
    pub fn fold_in_order<B, F>(&self, identity: B, mut f: F) -> B
    where
        B: Clone,
        F: FnMut(B, &A, B) -> B,
    {
        self.fold_nodes(identity, |left, value, right| f(left, value, right))
    }

    /// Pre-order catamorphism: `f(value, fold(left), fold(right))`.
    pub fn fold_pre_order<B, F>(&self, identity: B, mut f: F) -> B
    where
        B: Clone,
        F: FnMut(&A, B, B) -> B,
    {
        self.fold_nodes(identity, |left, value, right| f(value, left, right))
    }

    /// Post-order catamorphism: `f(fold(left), fold(right), value)`.
    pub fn fold_post_order<B, F>(&self, identity: B, mut f: F) -> B
    where
        B: Clone,
        F: FnMut(B, B, &A) -> B,
    {
        self.fold_nodes(identity, |left, value, right| f(left, right, value))
    }

    /// Folds each node as `g(fold(right), f(fold(left), value))`.
    ///
    /// The order in which values reach `f` is an implementation detail; the
    /// result is only predictable when `f` and `g` make order irrelevant
    /// (for instance counting or summing). For an ordered fold use
    /// [`Foldable::fold_left`], which visits values in ascending order.
    pub fn fold_left<B, F, G>(&self, identity: B, mut f: F, mut g: G) -> B
    where
        B: Clone,
        F: FnMut(B, &A) -> B,
        G: FnMut(B, B) -> B,
    {
        self.fold_nodes(identity, |left, value, right| g(right, f(left, value)))
    }
}

impl<A: Clone> Tree<A> {
    // =========================================================================
    // Rotations and List Conversion
    // =========================================================================

    fn rebuild_path(mut path: Path<'_, A>, mut subtree: Self) -> Self {
        while let Some((node, side)) = path.pop() {
            subtree = match side {
                Side::Left => Self::node(subtree, node.value.clone(), node.right.clone()),
                Side::Right => Self::node(node.left.clone(), node.value.clone(), subtree),
            };
        }
        subtree
    }

    /// Promotes the left child to the root. A tree without a left child is
    /// returned unchanged.
    ///
    /// ```text
    ///       5             3
    ///      / \           / \
    ///     3   8   =>    1   5
    ///    / \               / \
    ///   1   4             4   8
    /// ```
    #[must_use]
    pub fn rotate_right(&self) -> Self {
        match self.root.as_deref() {
            Some(node) => match node.left.root.as_deref() {
                Some(left) => Self::node(
                    left.left.clone(),
                    left.value.clone(),
                    Self::node(left.right.clone(), node.value.clone(), node.right.clone()),
                ),
                None => self.clone(),
            },
            None => self.clone(),
        }
    }

    /// Promotes the right child to the root. Mirror of
    /// [`Tree::rotate_right`].
    #[must_use]
    pub fn rotate_left(&self) -> Self {
        match self.root.as_deref() {
            Some(node) => match node.right.root.as_deref() {
                Some(right) => Self::node(
                    Self::node(node.left.clone(), node.value.clone(), right.left.clone()),
                    right.value.clone(),
                    right.right.clone(),
                ),
                None => self.clone(),
            },
            None => self.clone(),
        }
    }

    /// The values in descending order.
    ///
    /// Rotates right until the root has no left child, takes the root, and
    /// continues with its right subtree. Each value is taken once, so the
    /// whole conversion runs in a single loop.
    #[must_use]
    pub fn to_list_in_order_right(&self) -> PersistentList<A> {
        let mut accumulator = PersistentList::new();
        let mut tree = self.clone();
        loop {
            let next = match tree.root.as_deref() {
                None => break,
                Some(node) if node.left.is_empty() => {
                    accumulator = accumulator.cons(node.value.clone());
                    node.right.clone()
                }
                Some(_) => tree.rotate_right(),
            };
            tree = next;
        }
        accumulator
    }

    /// The values in ascending order.
    #[must_use]
    pub fn to_list_in_order(&self) -> PersistentList<A> {
        self.to_list_in_order_right().reverse()
    }
}

impl<A: Clone + Ord> Tree<A> {
    // =========================================================================
    // Construction From Data
    // =========================================================================

    /// Inserts every element of `list`, front to back.
    #[must_use]
    pub fn from_list(list: &PersistentList<A>) -> Self {
        list.fold_left(Self::new(), |tree, value| tree.insert(value.clone()))
    }

    /// Builds a tree from two subtrees and a value.
    ///
    /// When every value of `left` is below `value` and every value of
    /// `right` above it, the parts are joined directly. When the two sides
    /// are the wrong way round they are swapped. Otherwise the parts are
    /// merged into a singleton of `value`, so the result is always a valid
    /// search tree; values that compare equal are kept once.
    #[must_use]
    pub fn from_parts(left: Self, value: A, right: Self) -> Self {
        let left_bounds = left.bounds();
        let right_bounds = right.bounds();
        Self::join(left, left_bounds.as_ref(), value, right, right_bounds.as_ref())
    }

    fn bounds(&self) -> Bounds<A> {
        match (self.min(), self.max()) {
            (Outcome::Success(smallest), Outcome::Success(largest)) => {
                Some((smallest.clone(), largest.clone()))
            }
            _ => None,
        }
    }

    /// [`Tree::from_parts`] with the `(min, max)` of each side already known.
    fn join(
        left: Self,
        left_bounds: Option<&(A, A)>,
        value: A,
        right: Self,
        right_bounds: Option<&(A, A)>,
    ) -> Self {
        let below = |bounds: Option<&(A, A)>| bounds.is_none_or(|(_, largest)| *largest < value);
        let above = |bounds: Option<&(A, A)>| bounds.is_none_or(|(smallest, _)| value < *smallest);
        let in_order = below(left_bounds) && above(right_bounds);
        let swapped = below(right_bounds) && above(left_bounds);
        if in_order {
            Self::node(left, value, right)
        } else if swapped {
            Self::node(right, value, left)
        } else {
            Self::singleton(value).merge(&left).merge(&right)
        }
    }

    /// Smallest and largest of `value` and both sides.
    fn spanning(left: Option<&(A, A)>, value: &A, right: Option<&(A, A)>) -> (A, A) {
        let mut smallest = value;
        let mut largest = value;
        for (low, high) in left.into_iter().chain(right) {
            if low < smallest {
                smallest = low;
            }
            if high > largest {
                largest = high;
            }
        }
        (smallest.clone(), largest.clone())
    }

    // =========================================================================
    // Updates
    // =========================================================================

    /// Returns a tree that also contains `value`. An equal stored value is
    /// replaced by `value`.
    ///
    /// ```rust
    /// use treefold::persistent::Tree;
    ///
    /// let tree = Tree::from([2, 1]);
    /// let larger = tree.insert(3);
    /// assert_eq!(tree.size(), 2);
    /// assert_eq!(larger.size(), 3);
    /// assert_eq!(larger.insert(3).size(), 3);
    /// ```
    #[must_use]
    pub fn insert(&self, value: A) -> Self {
        let mut path: Path<'_, A> = SmallVec::new();
        let mut current = self;
        let subtree = loop {
            match current.root.as_deref() {
                None => break Self::singleton(value),
                Some(node) => match value.cmp(&node.value) {
                    Ordering::Less => {
                        path.push((node, Side::Left));
                        current = &node.left;
                    }
                    Ordering::Greater => {
                        path.push((node, Side::Right));
                        current = &node.right;
                    }
                    Ordering::Equal => {
                        break Self::node(node.left.clone(), value, node.right.clone());
                    }
                },
            }
        };
        Self::rebuild_path(path, subtree)
    }

    /// Returns a tree without `value`. The tree is returned unchanged (and
    /// fully shared) when `value` is absent.
    #[must_use]
    pub fn remove(&self, value: &A) -> Self {
        let mut path: Path<'_, A> = SmallVec::new();
        let mut current = self;
        let subtree = loop {
            match current.root.as_deref() {
                None => return self.clone(),
                Some(node) => match value.cmp(&node.value) {
                    Ordering::Less => {
                        path.push((node, Side::Left));
                        current = &node.left;
                    }
                    Ordering::Greater => {
                        path.push((node, Side::Right));
                        current = &node.right;
                    }
                    Ordering::Equal => break node.left.remove_merge(&node.right),
                },
            }
        };
        Self::rebuild_path(path, subtree)
    }

    /// Merges two trees whose value ranges do not overlap: every value of
    /// one tree is smaller than every value of the other.
    ///
    /// `other` is attached below the leaf of `self` where its root value
    /// belongs. This is how [`Tree::remove`] joins the two children of the
    /// removed node.
    #[must_use]
    pub fn remove_merge(&self, other: &Self) -> Self {
        let Some(other_root) = other.root.as_deref() else {
            return self.clone();
        };
        let mut path: Path<'_, A> = SmallVec::new();
        let mut current = self;
        while let Some(node) = current.root.as_deref() {
            if other_root.value < node.value {
                path.push((node, Side::Left));
                current = &node.left;
            } else {
                path.push((node, Side::Right));
                current = &node.right;
            }
        }
        Self::rebuild_path(path, other.clone())
    }

    /// Merges two arbitrary trees.
    ///
    /// The root of `self` stays the root. `other` is split around it: when
    /// its root is larger, `other` without its left branch is merged into the
    /// right subtree and the left branch is merged afterwards; the smaller
    /// case is symmetrical. On equal roots the branches are merged pairwise
    /// and the value of `self` is kept.
    ///
    /// Recurses on the structure of both trees and gives no balance
    /// guarantee.
    #[must_use]
    pub fn merge(&self, other: &Self) -> Self {
        let (Some(this), Some(that)) = (self.root.as_deref(), other.root.as_deref()) else {
            return if self.is_empty() {
                other.clone()
            } else {
                self.clone()
            };
        };
        tracing::trace!(size = this.size, other_size = that.size, "merging trees");
        match that.value.cmp(&this.value) {
            Ordering::Greater => {
                let detached = Self::node(Self::new(), that.value.clone(), that.right.clone());
                Self::node(
                    this.left.clone(),
                    this.value.clone(),
                    this.right.merge(&detached),
                )
                .merge(&that.left)
            }
            Ordering::Less => {
                let detached = Self::node(that.left.clone(), that.value.clone(), Self::new());
                Self::node(
                    this.left.merge(&detached),
                    this.value.clone(),
                    this.right.clone(),
                )
                .merge(&that.right)
            }
            Ordering::Equal => Self::node(
                this.left.merge(&that.left),
                this.value.clone(),
                this.right.merge(&that.right),
            ),
        }
    }

    /// Applies `function` to every value through the in-order fold,
    /// rebuilding each node the way [`Tree::from_parts`] does. The bounds of
    /// each rebuilt subtree travel up the fold, so ordered input is mapped in
    /// linear time.
    ///
    /// An order-preserving `function` keeps the shape of the tree. Any other
    /// function still yields a valid search tree, but values it maps to equal
    /// results are kept once, so the size may shrink.
    ///
    /// ```rust
    /// use treefold::persistent::{PersistentList, Tree};
    ///
    /// let tree = Tree::from([1, 2, 3]);
    /// assert_eq!(tree.map(|n| n * 10).to_list_in_order(), PersistentList::from([10, 20, 30]));
    ///
    /// let parity = Tree::from([1, 2, 3, 4]).map(|n| n % 2);
    /// assert_eq!(parity.to_list_in_order(), PersistentList::from([0, 1]));
    /// ```
    pub fn map<B, F>(&self, mut function: F) -> Tree<B>
    where
        B: Clone + Ord,
        F: FnMut(&A) -> B,
    {
        let (mapped, _) = self.fold_in_order(
            (Tree::new(), None),
            |(left, left_bounds): (Tree<B>, Bounds<B>), value, (right, right_bounds): (Tree<B>, Bounds<B>)| {
                let value = function(value);
                let bounds = Tree::spanning(left_bounds.as_ref(), &value, right_bounds.as_ref());
                let tree = Tree::join(left, left_bounds.as_ref(), value, right, right_bounds.as_ref());
                (tree, Some(bounds))
            },
        );
        mapped
    }
}

impl<A: Ord> Tree<A> {
    /// Returns `true` if the tree holds a value equal to `value`.
    #[must_use]
    pub fn contains(&self, value: &A) -> bool {
        let mut current = self.root.as_deref();
        while let Some(node) = current {
            current = match value.cmp(&node.value) {
                Ordering::Less => node.left.root.as_deref(),
                Ordering::Greater => node.right.root.as_deref(),
                Ordering::Equal => return true,
            };
        }
        false
    }
}

// =============================================================================
// Iterator Implementation
// =============================================================================

/// Ascending iterator over a [`Tree`].
pub struct TreeIterator<'a, A> {
    stack: Vec<&'a Node<A>>,
    remaining: usize,
}

impl<'a, A> TreeIterator<'a, A> {
    fn push_left_spine(&mut self, mut tree: &'a Tree<A>) {
        while let Some(node) = tree.root.as_deref() {
            self.stack.push(node);
            tree = &node.left;
        }
    }
}

impl<'a, A> Iterator for TreeIterator<'a, A> {
    type Item = &'a A;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(&node.right);
        self.remaining -= 1;
        Some(&node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<A> ExactSizeIterator for TreeIterator<'_, A> {}

impl<'a, A> IntoIterator for &'a Tree<A> {
    type Item = &'a A;
    type IntoIter = TreeIterator<'a, A>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<A> Clone for Tree<A> {
    fn clone(&self) -> Self {
        Self {
            root: self.root.clone(),
        }
    }
}

impl<A> Drop for Tree<A> {
    fn drop(&mut self) {
        let mut pending: Vec<ReferenceCounter<Node<A>>> = self.root.take().into_iter().collect();
        while let Some(node) = pending.pop() {
            if let Ok(mut node) = ReferenceCounter::try_unwrap(node) {
                pending.extend(node.left.root.take());
                pending.extend(node.right.root.take());
            }
        }
    }
}

impl<A> Default for Tree<A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A: Clone + Ord> FromIterator<A> for Tree<A> {
    fn from_iter<I: IntoIterator<Item = A>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Self::new(), |tree, value| tree.insert(value))
    }
}

impl<A: Clone + Ord, const N: usize> From<[A; N]> for Tree<A> {
    fn from(values: [A; N]) -> Self {
        values.into_iter().collect()
    }
}

impl<A: PartialEq> PartialEq for Tree<A> {
    fn eq(&self, other: &Self) -> bool {
        self.size() == other.size() && self.iter().eq(other.iter())
    }
}

impl<A: Eq> Eq for Tree<A> {}

impl<A: Hash> Hash for Tree<A> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.size().hash(state);
        for value in self {
            value.hash(state);
        }
    }
}

impl<A: fmt::Debug> fmt::Debug for Tree<A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_set().entries(self.iter()).finish()
    }
}

impl<A: fmt::Display> fmt::Display for Tree<A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{{")?;
        for (index, value) in self.iter().enumerate() {
            if index > 0 {
                write!(formatter, ", ")?;
            }
            write!(formatter, "{value}")?;
        }
        write!(formatter, "}}")
    }
}

#[cfg(feature = "arc")]
static_assertions::assert_impl_all!(Tree<i32>: Send, Sync);

// =============================================================================
// Type Class Implementations
// =============================================================================

impl<A> TypeConstructor for Tree<A> {
    type Inner = A;
    type WithType<B> = Tree<B>;
}

impl<A> Foldable for Tree<A> {
    /// Visits values in ascending order.
    fn fold_left<B, F>(&self, init: B, function: F) -> B
    where
        F: FnMut(B, &A) -> B,
    {
        self.iter().fold(init, function)
    }

    fn fold_right<B, F>(&self, init: B, mut function: F) -> B
    where
        F: FnMut(&A, B) -> B,
    {
        let values: Vec<&A> = self.iter().collect();
        values
            .into_iter()
            .rev()
            .fold(init, |accumulator, value| function(value, accumulator))
    }

    #[inline]
    fn length(&self) -> usize {
        self.size()
    }
}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<A: serde::Serialize> serde::Serialize for Tree<A> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeSeq;
        let mut seq = serializer.serialize_seq(Some(self.size()))?;
        for value in self {
            seq.serialize_element(value)?;
        }
        seq.end()
    }
}

#[cfg(feature = "serde")]
struct TreeVisitor<A> {
    marker: std::marker::PhantomData<A>,
}

#[cfg(feature = "serde")]
impl<'de, A> serde::de::Visitor<'de> for TreeVisitor<A>
where
    A: serde::Deserialize<'de> + Clone + Ord,
{
    type Value = Tree<A>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a sequence")
    }

    fn visit_seq<S>(self, mut seq: S) -> Result<Self::Value, S::Error>
    where
        S: serde::de::SeqAccess<'de>,
    {
        let mut tree = Tree::new();
        while let Some(value) = seq.next_element()? {
            tree = tree.insert(value);
        }
        Ok(tree)
    }
}

#[cfg(feature = "serde")]
impl<'de, A> serde::Deserialize<'de> for Tree<A>
where
    A: serde::Deserialize<'de> + Clone + Ord,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_seq(TreeVisitor {
            marker: std::marker::PhantomData,
        })
    }
}

// =============================================================================
// Tests
// =============================================================================
