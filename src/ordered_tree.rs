use core::borrow::Borrow;
use core::fmt;
use core::hash::{Hash, Hasher};
use core::iter::FusedIterator;
use core::ops::{Bound, Index, RangeBounds};

use alloc::vec;

use crate::InvariantViolation;
use crate::raw::{Cursor, RawOrderedTree};

mod capacity;
mod node_ref;
mod order_statistic;

pub use crate::Rank;
pub use node_ref::NodeRef;

/// Validates that the start bound does not exceed the end bound.
///
/// # Panics
///
/// Panics if `start > end` or if `start == end` and both bounds are `Excluded`.
fn validate_range_bounds<T, R>(range: &R)
where
    T: ?Sized + Ord,
    R: RangeBounds<T>,
{
    if let (Bound::Included(start) | Bound::Excluded(start), Bound::Included(end) | Bound::Excluded(end)) =
        (range.start_bound(), range.end_bound())
    {
        let valid =
            if matches!(range.start_bound(), Bound::Excluded(_)) && matches!(range.end_bound(), Bound::Excluded(_)) {
                start < end
            } else {
                start <= end
            };
        assert!(valid, "range start is greater than range end in OrderedTree");
    }
}

/// An ordered map based on a [red-black tree] whose nodes also count their subtrees.
///
/// Given a key type with a [total order], the tree stores its entries in key order and
/// keeps every key unique: inserting an existing key replaces its value. On top of the
/// usual map operations it answers order-statistic queries in O(log n):
///
/// - [`rank`](OrderedTree::rank) - how many keys are smaller than a given key
/// - [`kth`](OrderedTree::kth) - the entry at a given sorted position
/// - [`ceiling`](OrderedTree::ceiling), [`floor`](OrderedTree::floor),
///   [`higher`](OrderedTree::higher), [`lower`](OrderedTree::lower) - nearest keys
/// - [`NodeRef::predecessor`] / [`NodeRef::successor`] - stepping from a found entry
///
/// It is a logic error for a key to be modified in such a way that the key's ordering relative to
/// any other key, as determined by the [`Ord`] trait, changes while it is in the tree. The
/// behavior resulting from such a logic error is not specified, but will be encapsulated to the
/// `OrderedTree` that observed it; [`check_invariants`](OrderedTree::check_invariants) will
/// report the damage.
///
/// Iterators borrow the tree, so the tree cannot be changed while a traversal is in
/// progress. To start over, ask for a fresh iterator.
///
/// # Examples
///
/// ```
/// use rbstat_tree::OrderedTree;
///
/// let mut tree = OrderedTree::new();
/// assert!(tree.insert(10, "ten"));
/// assert!(tree.insert(20, "twenty"));
/// assert!(tree.insert(5, "five"));
/// assert_eq!(tree.len(), 3);
///
/// assert_eq!(tree.get(&10), Some(&"ten"));
/// assert!(tree.delete(&10));
/// assert_eq!(tree.len(), 2);
/// assert_eq!(tree.get(&10), None);
///
/// // Order statistics.
/// assert_eq!(tree.rank(&20), 1);
/// assert_eq!(tree.kth(0).map(|n| *n.key()), Some(5));
///
/// // Closed range [5, 15].
/// let keys: Vec<_> = tree.range(5..=15).map(|(k, _)| *k).collect();
/// assert_eq!(keys, [5]);
/// ```
///
/// # Background
///
/// Every node is colored red or black such that the root is black, no red node has a
/// red child, and every path from a node down to a missing child passes the same number
/// of black nodes. Together these keep the height below `2 * log2(n + 1)`. Insertion and
/// deletion restore the coloring with at most three rotations, and each rotation
/// recomputes the subtree counts of the two nodes it moves.
///
/// Nodes are kept in a slot arena and link to their children and parent by index, which
/// gives O(1) parent access for rotations and neighbor walks without shared ownership.
///
/// [red-black tree]: https://en.wikipedia.org/wiki/Red%E2%80%93black_tree
/// [total order]: https://en.wikipedia.org/wiki/Total_order
pub struct OrderedTree<K, V> {
    raw: RawOrderedTree<K, V>,
}

/// An iterator over the entries of an `OrderedTree`, in ascending key order.
///
/// This `struct` is created by the [`iter`] method on [`OrderedTree`]. See its
/// documentation for more.
///
/// [`iter`]: OrderedTree::iter
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Iter<'a, K, V> {
    cursor: Cursor<'a, K, V>,
}

/// An iterator over the keys of an `OrderedTree`.
///
/// This `struct` is created by the [`keys`] method on [`OrderedTree`].
///
/// [`keys`]: OrderedTree::keys
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Keys<'a, K, V> {
    inner: Iter<'a, K, V>,
}

/// An iterator over the values of an `OrderedTree`.
///
/// This `struct` is created by the [`values`] method on [`OrderedTree`].
///
/// [`values`]: OrderedTree::values
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Values<'a, K, V> {
    inner: Iter<'a, K, V>,
}

/// An iterator over a sub-range of entries in an `OrderedTree`.
///
/// This `struct` is created by the [`range`] method on [`OrderedTree`]. See its
/// documentation for more.
///
/// [`range`]: OrderedTree::range
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Range<'a, K, V> {
    cursor: Cursor<'a, K, V>,
}

/// An owning iterator over the entries of an `OrderedTree`, sorted by key.
///
/// This `struct` is created by the [`into_iter`] method on [`OrderedTree`]
/// (provided by the [`IntoIterator`] trait).
///
/// [`into_iter`]: IntoIterator::into_iter
pub struct IntoIter<K, V> {
    inner: vec::IntoIter<(K, V)>,
}

impl<K, V> OrderedTree<K, V> {
    /// Makes a new, empty `OrderedTree`.
    ///
    /// Does not allocate anything on its own.
    ///
    /// # Complexity
    ///
    /// O(1)
    ///
    /// # Examples
    ///
    /// ```
    /// use rbstat_tree::OrderedTree;
    ///
    /// let mut tree = OrderedTree::new();
    ///
    /// // entries can now be inserted into the empty tree
    /// tree.insert(1, "a");
    /// ```
    #[must_use]
    pub const fn new() -> OrderedTree<K, V> {
        OrderedTree {
            raw: RawOrderedTree::new(),
        }
    }

    /// Clears the tree, removing all entries.
    ///
    /// # Complexity
    ///
    /// O(n)
    ///
    /// # Examples
    ///
    /// ```
    /// use rbstat_tree::OrderedTree;
    ///
    /// let mut a = OrderedTree::new();
    /// a.insert(1, "a");
    /// a.clear();
    /// assert!(a.is_empty());
    /// ```
    pub fn clear(&mut self) {
        self.raw.clear();
    }

    /// Returns the number of entries in the tree.
    ///
    /// # Complexity
    ///
    /// O(1) - read from the root's subtree count.
    ///
    /// # Examples
    ///
    /// ```
    /// use rbstat_tree::OrderedTree;
    ///
    /// let mut a = OrderedTree::new();
    /// assert_eq!(a.len(), 0);
    /// a.insert(1, "a");
    /// assert_eq!(a.len(), 1);
    /// ```
    #[must_use]
    pub fn len(&self) -> usize {
        self.raw.len()
    }

    /// Returns `true` if the tree contains no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    /// Returns the entry with the smallest key, or `None` if the tree is empty.
    ///
    /// # Complexity
    ///
    /// O(log n)
    ///
    /// # Examples
    ///
    /// ```
    /// use rbstat_tree::OrderedTree;
    ///
    /// let tree = OrderedTree::from([(20, ""), (10, ""), (30, "")]);
    /// assert_eq!(tree.min().map(|n| *n.key()), Some(10));
    /// ```
    #[must_use]
    pub fn min(&self) -> Option<NodeRef<'_, K, V>> {
        self.raw.first().map(|h| NodeRef::new(&self.raw, h))
    }

    /// Returns the entry with the largest key, or `None` if the tree is empty.
    ///
    /// # Complexity
    ///
    /// O(log n)
    ///
    /// # Examples
    ///
    /// ```
    /// use rbstat_tree::OrderedTree;
    ///
    /// let tree = OrderedTree::from([(20, ""), (10, ""), (30, "")]);
    /// assert_eq!(tree.max().map(|n| *n.key()), Some(30));
    /// ```
    #[must_use]
    pub fn max(&self) -> Option<NodeRef<'_, K, V>> {
        self.raw.last().map(|h| NodeRef::new(&self.raw, h))
    }

    /// Returns the first key-value pair in the tree.
    /// The key in this pair is the minimum key in the tree.
    #[must_use]
    pub fn first_key_value(&self) -> Option<(&K, &V)> {
        self.min().map(|n| n.key_value())
    }

    /// Returns the last key-value pair in the tree.
    /// The key in this pair is the maximum key in the tree.
    #[must_use]
    pub fn last_key_value(&self) -> Option<(&K, &V)> {
        self.max().map(|n| n.key_value())
    }

    /// Removes and returns the entry with the smallest key.
    ///
    /// # Complexity
    ///
    /// O(log n)
    ///
    /// # Examples
    ///
    /// ```
    /// use rbstat_tree::OrderedTree;
    ///
    /// let mut tree = OrderedTree::from([(1, "a"), (2, "b")]);
    /// assert_eq!(tree.pop_first(), Some((1, "a")));
    /// assert_eq!(tree.pop_first(), Some((2, "b")));
    /// assert_eq!(tree.pop_first(), None);
    /// ```
    pub fn pop_first(&mut self) -> Option<(K, V)> {
        let h = self.raw.first()?;
        Some(self.raw.remove_handle(h))
    }

    /// Removes and returns the entry with the largest key.
    ///
    /// # Complexity
    ///
    /// O(log n)
    ///
    /// # Examples
    ///
    /// ```
    /// use rbstat_tree::OrderedTree;
    ///
    /// let mut tree = OrderedTree::from([(1, "a"), (2, "b")]);
    /// assert_eq!(tree.pop_last(), Some((2, "b")));
    /// assert_eq!(tree.pop_last(), Some((1, "a")));
    /// assert_eq!(tree.pop_last(), None);
    /// ```
    pub fn pop_last(&mut self) -> Option<(K, V)> {
        let h = self.raw.last()?;
        Some(self.raw.remove_handle(h))
    }

    /// Gets an iterator over the entries of the tree, sorted by key.
    ///
    /// The walk keeps its own stack of pending ancestors, so each step is O(1)
    /// amortized and the full traversal is O(n). Calling `iter` again starts a new
    /// walk from the smallest key.
    ///
    /// # Examples
    ///
    /// ```
    /// use rbstat_tree::OrderedTree;
    ///
    /// let tree = OrderedTree::from([(3, "c"), (2, "b"), (1, "a")]);
    ///
    /// for (key, value) in tree.iter() {
    ///     println!("{key}: {value}");
    /// }
    ///
    /// let (first_key, first_value) = tree.iter().next().unwrap();
    /// assert_eq!((*first_key, *first_value), (1, "a"));
    /// ```
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter {
            cursor: Cursor::first(&self.raw),
        }
    }

    /// Gets an iterator over the keys of the tree, in sorted order.
    ///
    /// # Examples
    ///
    /// ```
    /// use rbstat_tree::OrderedTree;
    ///
    /// let tree = OrderedTree::from([(2, "b"), (1, "a")]);
    /// let keys: Vec<_> = tree.keys().copied().collect();
    /// assert_eq!(keys, [1, 2]);
    /// ```
    pub fn keys(&self) -> Keys<'_, K, V> {
        Keys { inner: self.iter() }
    }

    /// Gets an iterator over the values of the tree, in order by key.
    ///
    /// # Examples
    ///
    /// ```
    /// use rbstat_tree::OrderedTree;
    ///
    /// let tree = OrderedTree::from([(1, "hello"), (2, "goodbye")]);
    /// let values: Vec<&str> = tree.values().copied().collect();
    /// assert_eq!(values, ["hello", "goodbye"]);
    /// ```
    pub fn values(&self) -> Values<'_, K, V> {
        Values { inner: self.iter() }
    }
}

impl<K: Ord, V> OrderedTree<K, V> {
    /// Inserts a key-value pair into the tree.
    ///
    /// Returns `true` if the key was new. If the key was already present its value
    /// is overwritten in place, the tree's shape is unchanged, and `false` is
    /// returned. The key itself is not updated.
    ///
    /// # Complexity
    ///
    /// O(log n)
    ///
    /// # Examples
    ///
    /// ```
    /// use rbstat_tree::OrderedTree;
    ///
    /// let mut tree = OrderedTree::new();
    /// assert!(tree.insert(37, "a"));
    /// assert!(!tree.insert(37, "b"));
    /// assert_eq!(tree.len(), 1);
    /// assert_eq!(tree[&37], "b");
    /// ```
    pub fn insert(&mut self, key: K, value: V) -> bool {
        self.raw.insert(key, value).is_none()
    }

    /// Inserts a key-value pair, returning the value it displaced if the key was
    /// already present.
    ///
    /// # Complexity
    ///
    /// O(log n)
    ///
    /// # Examples
    ///
    /// ```
    /// use rbstat_tree::OrderedTree;
    ///
    /// let mut tree = OrderedTree::new();
    /// assert_eq!(tree.replace(37, "a"), None);
    /// assert_eq!(tree.replace(37, "b"), Some("a"));
    /// ```
    pub fn replace(&mut self, key: K, value: V) -> Option<V> {
        self.raw.insert(key, value)
    }

    /// Removes a key from the tree, returning `true` if it was present.
    ///
    /// # Complexity
    ///
    /// O(log n)
    ///
    /// # Examples
    ///
    /// ```
    /// use rbstat_tree::OrderedTree;
    ///
    /// let mut tree = OrderedTree::from([(1, "a")]);
    /// assert!(tree.delete(&1));
    /// assert!(!tree.delete(&1));
    /// ```
    pub fn delete<Q>(&mut self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.raw.remove_entry(key).is_some()
    }

    /// Removes a key from the tree, returning its value if it was present.
    ///
    /// # Complexity
    ///
    /// O(log n)
    ///
    /// # Examples
    ///
    /// ```
    /// use rbstat_tree::OrderedTree;
    ///
    /// let mut tree = OrderedTree::from([(1, "a")]);
    /// assert_eq!(tree.remove(&1), Some("a"));
    /// assert_eq!(tree.remove(&1), None);
    /// ```
    pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.raw.remove_entry(key).map(|(_, v)| v)
    }

    /// Removes a key from the tree, returning the stored key and value if the key
    /// was present.
    ///
    /// # Complexity
    ///
    /// O(log n)
    pub fn remove_entry<Q>(&mut self, key: &Q) -> Option<(K, V)>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.raw.remove_entry(key)
    }

    /// Returns a handle to the entry holding `key`, or `None` if it is absent.
    ///
    /// The handle can be used to step to neighboring entries; see [`NodeRef`].
    ///
    /// # Complexity
    ///
    /// O(log n)
    ///
    /// # Examples
    ///
    /// ```
    /// use rbstat_tree::OrderedTree;
    ///
    /// let tree = OrderedTree::from([(10, "ten"), (20, "twenty")]);
    /// assert_eq!(tree.search(&10).map(|n| *n.value()), Some("ten"));
    /// assert!(tree.search(&30).is_none());
    /// ```
    #[must_use]
    pub fn search<Q>(&self, key: &Q) -> Option<NodeRef<'_, K, V>>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.raw.search(key).map(|h| NodeRef::new(&self.raw, h))
    }

    /// Returns a reference to the value corresponding to the key.
    ///
    /// The key may be any borrowed form of the tree's key type, but the ordering
    /// on the borrowed form *must* match the ordering on the key type.
    ///
    /// # Complexity
    ///
    /// O(log n)
    ///
    /// # Examples
    ///
    /// ```
    /// use rbstat_tree::OrderedTree;
    ///
    /// let mut tree = OrderedTree::new();
    /// tree.insert(1, "a");
    /// assert_eq!(tree.get(&1), Some(&"a"));
    /// assert_eq!(tree.get(&2), None);
    /// ```
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.search(key).map(|n| n.value())
    }

    /// Returns the stored key-value pair corresponding to the supplied key.
    ///
    /// # Complexity
    ///
    /// O(log n)
    pub fn get_key_value<Q>(&self, key: &Q) -> Option<(&K, &V)>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.search(key).map(|n| n.key_value())
    }

    /// Returns a mutable reference to the value corresponding to the key.
    ///
    /// # Complexity
    ///
    /// O(log n)
    ///
    /// # Examples
    ///
    /// ```
    /// use rbstat_tree::OrderedTree;
    ///
    /// let mut tree = OrderedTree::from([(1, "a")]);
    /// if let Some(x) = tree.get_mut(&1) {
    ///     *x = "b";
    /// }
    /// assert_eq!(tree[&1], "b");
    /// ```
    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        let h = self.raw.search(key)?;
        Some(&mut self.raw.node_mut(h).value)
    }

    /// Returns `true` if the tree contains a value for the specified key.
    ///
    /// # Complexity
    ///
    /// O(log n)
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.raw.search(key).is_some()
    }

    /// Returns the entry with the smallest key greater than or equal to `key`.
    ///
    /// # Complexity
    ///
    /// O(log n)
    ///
    /// # Examples
    ///
    /// ```
    /// use rbstat_tree::OrderedTree;
    ///
    /// let tree = OrderedTree::from([(10, ()), (20, ()), (30, ())]);
    /// assert_eq!(tree.ceiling(&15).map(|n| *n.key()), Some(20));
    /// assert_eq!(tree.ceiling(&20).map(|n| *n.key()), Some(20));
    /// assert!(tree.ceiling(&31).is_none());
    /// ```
    #[must_use]
    pub fn ceiling<Q>(&self, key: &Q) -> Option<NodeRef<'_, K, V>>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.raw.ceiling(key, false).map(|h| NodeRef::new(&self.raw, h))
    }

    /// Returns the entry with the largest key less than or equal to `key`.
    ///
    /// # Complexity
    ///
    /// O(log n)
    ///
    /// # Examples
    ///
    /// ```
    /// use rbstat_tree::OrderedTree;
    ///
    /// let tree = OrderedTree::from([(10, ()), (20, ()), (30, ())]);
    /// assert_eq!(tree.floor(&25).map(|n| *n.key()), Some(20));
    /// assert!(tree.floor(&9).is_none());
    /// ```
    #[must_use]
    pub fn floor<Q>(&self, key: &Q) -> Option<NodeRef<'_, K, V>>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.raw.floor(key, false).map(|h| NodeRef::new(&self.raw, h))
    }

    /// Returns the entry with the smallest key strictly greater than `key`.
    ///
    /// # Complexity
    ///
    /// O(log n)
    ///
    /// # Examples
    ///
    /// ```
    /// use rbstat_tree::OrderedTree;
    ///
    /// let tree = OrderedTree::from([(10, ()), (20, ()), (30, ())]);
    /// assert_eq!(tree.higher(&20).map(|n| *n.key()), Some(30));
    /// assert!(tree.higher(&30).is_none());
    /// ```
    #[must_use]
    pub fn higher<Q>(&self, key: &Q) -> Option<NodeRef<'_, K, V>>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.raw.ceiling(key, true).map(|h| NodeRef::new(&self.raw, h))
    }

    /// Returns the entry with the largest key strictly less than `key`.
    ///
    /// # Complexity
    ///
    /// O(log n)
    ///
    /// # Examples
    ///
    /// ```
    /// use rbstat_tree::OrderedTree;
    ///
    /// let tree = OrderedTree::from([(10, ()), (20, ()), (30, ())]);
    /// assert_eq!(tree.lower(&20).map(|n| *n.key()), Some(10));
    /// assert!(tree.lower(&10).is_none());
    /// ```
    #[must_use]
    pub fn lower<Q>(&self, key: &Q) -> Option<NodeRef<'_, K, V>>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.raw.floor(key, true).map(|h| NodeRef::new(&self.raw, h))
    }

    /// Constructs an iterator over a sub-range of entries in the tree.
    /// `range(low..=high)` yields the keys in the closed interval `[low, high]`;
    /// `range(low..high)` leaves `high` out, and `(Bound<T>, Bound<T>)` pairs select
    /// any other combination.
    ///
    /// The iterator starts at the first key in range and stops after the last one,
    /// so keys outside the range are never visited.
    ///
    /// # Panics
    ///
    /// Panics if range `start > end`.
    /// Panics if range `start == end` and both bounds are `Excluded`.
    ///
    /// # Examples
    ///
    /// ```
    /// use rbstat_tree::OrderedTree;
    /// use std::ops::Bound::Included;
    ///
    /// let tree = OrderedTree::from([(10, "a"), (20, "b"), (30, "c")]);
    ///
    /// let keys: Vec<_> = tree.range(15..=25).map(|(k, _)| *k).collect();
    /// assert_eq!(keys, [20]);
    ///
    /// for (&key, &value) in tree.range((Included(&10), Included(&20))) {
    ///     println!("{key}: {value}");
    /// }
    /// assert_eq!(Some((&20, &"b")), tree.range(11..).next());
    /// ```
    ///
    /// # Complexity
    ///
    /// O(log n) to create the iterator; each iteration step is O(1) amortized.
    pub fn range<Q, R>(&self, range: R) -> Range<'_, K, V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
        R: RangeBounds<Q>,
    {
        validate_range_bounds(&range);

        let start = match range.start_bound() {
            Bound::Unbounded => 0,
            Bound::Included(low) => self.raw.rank(low, false),
            Bound::Excluded(low) => self.raw.rank(low, true),
        };
        let end = match range.end_bound() {
            Bound::Unbounded => self.raw.len(),
            Bound::Included(high) => self.raw.rank(high, true),
            Bound::Excluded(high) => self.raw.rank(high, false),
        };

        Range {
            cursor: Cursor::at_rank(&self.raw, start, end.saturating_sub(start)),
        }
    }

    /// Walks the whole tree and checks every structural invariant: ascending keys,
    /// red-black coloring, subtree counts and parent links.
    ///
    /// A tree only built through this API always passes; a failure means a key's
    /// [`Ord`] implementation misbehaved.
    ///
    /// # Errors
    ///
    /// Returns the first [`InvariantViolation`] found.
    ///
    /// # Complexity
    ///
    /// O(n)
    ///
    /// # Examples
    ///
    /// ```
    /// use rbstat_tree::OrderedTree;
    ///
    /// let tree: OrderedTree<_, _> = (0..100).map(|i| (i, i * i)).collect();
    /// assert_eq!(tree.check_invariants(), Ok(()));
    /// ```
    pub fn check_invariants(&self) -> Result<(), InvariantViolation> {
        self.raw.check_invariants()
    }
}

impl<K: Clone, V: Clone> Clone for OrderedTree<K, V> {
    fn clone(&self) -> Self {
        OrderedTree { raw: self.raw.clone() }
    }
}

impl<K: Hash, V: Hash> Hash for OrderedTree<K, V> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_usize(self.len());
        for elt in self {
            elt.hash(state);
        }
    }
}

impl<K: PartialEq, V: PartialEq> PartialEq for OrderedTree<K, V> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().zip(other).all(|(a, b)| a == b)
    }
}

impl<K: Eq, V: Eq> Eq for OrderedTree<K, V> {}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for OrderedTree<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<K, V> Default for OrderedTree<K, V> {
    /// Creates an empty `OrderedTree`.
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Ord, V> FromIterator<(K, V)> for OrderedTree<K, V> {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut tree = OrderedTree::new();
        tree.extend(iter);
        tree
    }
}

impl<K: Ord, V> Extend<(K, V)> for OrderedTree<K, V> {
    fn extend<T: IntoIterator<Item = (K, V)>>(&mut self, iter: T) {
        for (k, v) in iter {
            self.raw.insert(k, v);
        }
    }
}

impl<'a, K, V> IntoIterator for &'a OrderedTree<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Iter<'a, K, V> {
        self.iter()
    }
}

impl<K, V> IntoIterator for OrderedTree<K, V> {
    type Item = (K, V);
    type IntoIter = IntoIter<K, V>;

    /// Gets an owning iterator over the entries of the tree, sorted by key.
    ///
    /// # Examples
    ///
    /// ```
    /// use rbstat_tree::OrderedTree;
    ///
    /// let tree = OrderedTree::from([(3, "c"), (1, "a"), (2, "b")]);
    /// let entries: Vec<(i32, &str)> = tree.into_iter().collect();
    /// assert_eq!(entries, [(1, "a"), (2, "b"), (3, "c")]);
    /// ```
    fn into_iter(mut self) -> IntoIter<K, V> {
        IntoIter {
            inner: self.raw.drain_sorted().into_iter(),
        }
    }
}

impl<K, Q, V> Index<&Q> for OrderedTree<K, V>
where
    K: Borrow<Q> + Ord,
    Q: ?Sized + Ord,
{
    type Output = V;

    /// Returns a reference to the value corresponding to the supplied key.
    ///
    /// # Panics
    ///
    /// Panics if the key is not present in the `OrderedTree`.
    fn index(&self, key: &Q) -> &V {
        self.get(key).expect("no entry found for key")
    }
}

impl<K: Ord, V, const N: usize> From<[(K, V); N]> for OrderedTree<K, V> {
    /// Converts a `[(K, V); N]` into an `OrderedTree<K, V>`.
    ///
    /// If any entries in the array have equal keys, all but the last entry are discarded.
    fn from(arr: [(K, V); N]) -> Self {
        arr.into_iter().collect()
    }
}

impl<'a, K: 'a, V: 'a> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let tree = self.cursor.tree();
        self.cursor.next_handle().map(|h| {
            let node = tree.node(h);
            (&node.key, &node.value)
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.cursor.remaining(), Some(self.cursor.remaining()))
    }
}

impl<K, V> ExactSizeIterator for Iter<'_, K, V> {
    fn len(&self) -> usize {
        self.cursor.remaining()
    }
}

impl<K, V> FusedIterator for Iter<'_, K, V> {}

impl<K, V> Clone for Iter<'_, K, V> {
    fn clone(&self) -> Self {
        Iter {
            cursor: self.cursor.clone(),
        }
    }
}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for Iter<'_, K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}

impl<'a, K, V> Iterator for Keys<'a, K, V> {
    type Item = &'a K;

    fn next(&mut self) -> Option<&'a K> {
        self.inner.next().map(|(k, _)| k)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> ExactSizeIterator for Keys<'_, K, V> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<K, V> FusedIterator for Keys<'_, K, V> {}

impl<K, V> Clone for Keys<'_, K, V> {
    fn clone(&self) -> Self {
        Keys {
            inner: self.inner.clone(),
        }
    }
}

impl<K: fmt::Debug, V> fmt::Debug for Keys<'_, K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}

impl<'a, K, V> Iterator for Values<'a, K, V> {
    type Item = &'a V;

    fn next(&mut self) -> Option<&'a V> {
        self.inner.next().map(|(_, v)| v)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> ExactSizeIterator for Values<'_, K, V> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<K, V> FusedIterator for Values<'_, K, V> {}

impl<K, V> Clone for Values<'_, K, V> {
    fn clone(&self) -> Self {
        Values {
            inner: self.inner.clone(),
        }
    }
}

impl<K, V: fmt::Debug> fmt::Debug for Values<'_, K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}

impl<'a, K, V> Iterator for Range<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let tree = self.cursor.tree();
        self.cursor.next_handle().map(|h| {
            let node = tree.node(h);
            (&node.key, &node.value)
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.cursor.remaining(), Some(self.cursor.remaining()))
    }
}

impl<K, V> ExactSizeIterator for Range<'_, K, V> {
    fn len(&self) -> usize {
        self.cursor.remaining()
    }
}

impl<K, V> FusedIterator for Range<'_, K, V> {}

impl<K, V> Clone for Range<'_, K, V> {
    fn clone(&self) -> Self {
        Range {
            cursor: self.cursor.clone(),
        }
    }
}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for Range<'_, K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}

impl<K, V> Iterator for IntoIter<K, V> {
    type Item = (K, V);

    fn next(&mut self) -> Option<(K, V)> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> DoubleEndedIterator for IntoIter<K, V> {
    fn next_back(&mut self) -> Option<(K, V)> {
        self.inner.next_back()
    }
}

impl<K, V> ExactSizeIterator for IntoIter<K, V> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<K, V> FusedIterator for IntoIter<K, V> {}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for IntoIter<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.inner.as_slice()).finish()
    }
}

impl<K, V> Default for IntoIter<K, V> {
    /// Creates an empty `ordered_tree::IntoIter`.
    ///
    /// ```
    /// # use rbstat_tree::ordered_tree;
    /// let iter: ordered_tree::IntoIter<u8, u8> = Default::default();
    /// assert_eq!(iter.len(), 0);
    /// ```
    fn default() -> Self {
        IntoIter {
            inner: vec::Vec::new().into_iter(),
        }
    }
}
