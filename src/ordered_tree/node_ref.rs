use core::fmt;

use crate::raw::{Handle, RawOrderedTree, Side};

/// A read-only handle to one entry of an [`OrderedTree`](crate::OrderedTree).
///
/// Returned by lookups such as [`search`](crate::OrderedTree::search),
/// [`ceiling`](crate::OrderedTree::ceiling) and [`kth`](crate::OrderedTree::kth).
/// From a handle you can step to the neighboring entries in key order without
/// searching again. A `NodeRef` borrows the tree, so it cannot outlive the next
/// mutation.
///
/// # Examples
///
/// ```
/// use rbstat_tree::OrderedTree;
///
/// let tree = OrderedTree::from([(1, "a"), (5, "b"), (9, "c")]);
/// let node = tree.search(&5).unwrap();
///
/// assert_eq!(node.key_value(), (&5, &"b"));
/// assert_eq!(node.predecessor().map(|n| *n.key()), Some(1));
/// assert_eq!(node.successor().map(|n| *n.key()), Some(9));
/// assert_eq!(node.rank(), 1);
/// ```
pub struct NodeRef<'a, K, V> {
    tree: &'a RawOrderedTree<K, V>,
    handle: Handle,
}

impl<'a, K, V> NodeRef<'a, K, V> {
    pub(crate) fn new(tree: &'a RawOrderedTree<K, V>, handle: Handle) -> Self {
        Self { tree, handle }
    }

    /// Returns the entry's key.
    #[must_use]
    pub fn key(&self) -> &'a K {
        &self.tree.node(self.handle).key
    }

    /// Returns the entry's value.
    #[must_use]
    pub fn value(&self) -> &'a V {
        &self.tree.node(self.handle).value
    }

    /// Returns the entry's key and value.
    #[must_use]
    pub fn key_value(&self) -> (&'a K, &'a V) {
        let node = self.tree.node(self.handle);
        (&node.key, &node.value)
    }

    /// Returns the entry with the next smaller key, or `None` at the minimum.
    ///
    /// # Complexity
    ///
    /// O(log n) worst case, O(1) amortized over a full walk.
    #[must_use]
    pub fn predecessor(&self) -> Option<Self> {
        self.tree.neighbor(self.handle, Side::Left).map(|h| Self::new(self.tree, h))
    }

    /// Returns the entry with the next larger key, or `None` at the maximum.
    ///
    /// # Complexity
    ///
    /// O(log n) worst case, O(1) amortized over a full walk.
    #[must_use]
    pub fn successor(&self) -> Option<Self> {
        self.tree.neighbor(self.handle, Side::Right).map(|h| Self::new(self.tree, h))
    }

    /// Returns the number of keys smaller than this entry's key, i.e. its
    /// zero-based position in sorted order.
    ///
    /// # Complexity
    ///
    /// O(log n)
    #[must_use]
    pub fn rank(&self) -> usize {
        self.tree.rank_of_handle(self.handle)
    }
}

impl<K, V> Clone for NodeRef<'_, K, V> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<K, V> Copy for NodeRef<'_, K, V> {}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for NodeRef<'_, K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (key, value) = self.key_value();
        f.debug_struct("NodeRef").field("key", key).field("value", value).finish()
    }
}
