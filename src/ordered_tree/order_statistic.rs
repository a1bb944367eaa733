use core::borrow::Borrow;
use core::ops::{Index, IndexMut};

use super::{NodeRef, OrderedTree};
use crate::Rank;

impl<K, V> OrderedTree<K, V> {
    /// Returns the entry at zero-based position `k` in sorted order, or `None`
    /// if `k >= self.len()`.
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
    /// let tree = OrderedTree::from([(10, 'a'), (20, 'b'), (30, 'c'), (40, 'd'), (50, 'e')]);
    ///
    /// assert_eq!(tree.kth(0).map(|n| *n.key()), Some(10));
    /// assert_eq!(tree.kth(3).map(|n| *n.key()), Some(40));
    /// assert!(tree.kth(5).is_none());
    /// ```
    #[must_use]
    pub fn kth(&self, k: usize) -> Option<NodeRef<'_, K, V>> {
        self.raw.kth(k).map(|h| NodeRef::new(&self.raw, h))
    }

    /// Returns the key and a mutable reference to the value at zero-based
    /// position `k`, or `None` if `k` is out of bounds.
    ///
    /// The key is shared because changing it could break the tree's ordering.
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
    /// let mut tree = OrderedTree::from([(10, "a"), (5, "b")]);
    ///
    /// if let Some((key, value)) = tree.kth_mut(0) {
    ///     assert_eq!(*key, 5);
    ///     *value = "updated";
    /// }
    ///
    /// assert_eq!(tree.get(&5), Some(&"updated"));
    /// ```
    #[must_use]
    pub fn kth_mut(&mut self, k: usize) -> Option<(&K, &mut V)> {
        let h = self.raw.kth(k)?;
        let node = self.raw.node_mut(h);
        Some((&node.key, &mut node.value))
    }
}

impl<K: Ord, V> OrderedTree<K, V> {
    /// Returns the number of keys strictly less than `key`.
    ///
    /// `key` need not be present: the result is then the position it would take
    /// if inserted.
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
    /// let tree = OrderedTree::from([(10, ()), (20, ()), (30, ()), (40, ()), (50, ())]);
    ///
    /// assert_eq!(tree.rank(&10), 0);
    /// assert_eq!(tree.rank(&25), 2);
    /// assert_eq!(tree.rank(&99), 5);
    /// ```
    #[must_use]
    pub fn rank<Q>(&self, key: &Q) -> usize
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.raw.rank(key, false)
    }
}

/// Indexes into the tree by position.
///
/// # Panics
///
/// Panics if `rank` is out of bounds.
///
/// # Examples
///
/// ```
/// use rbstat_tree::{OrderedTree, Rank};
///
/// let tree = OrderedTree::from([("a", 1), ("b", 2)]);
///
/// assert_eq!(tree[Rank(0)], 1);
/// ```
impl<K, V> Index<Rank> for OrderedTree<K, V> {
    type Output = V;

    fn index(&self, rank: Rank) -> &Self::Output {
        self.kth(rank.0).map(|n| n.value()).expect("index out of bounds")
    }
}

/// Mutably indexes into the tree by position.
///
/// # Panics
///
/// Panics if `rank` is out of bounds.
///
/// # Examples
///
/// ```
/// use rbstat_tree::{OrderedTree, Rank};
///
/// let mut tree = OrderedTree::from([("a", 1), ("b", 2)]);
/// tree[Rank(1)] = 5;
///
/// assert_eq!(tree.get(&"b"), Some(&5));
/// ```
impl<K, V> IndexMut<Rank> for OrderedTree<K, V> {
    fn index_mut(&mut self, rank: Rank) -> &mut Self::Output {
        self.kth_mut(rank.0).map(|(_, v)| v).expect("index out of bounds")
    }
}
