use super::OrderedTree;
use crate::raw::RawOrderedTree;

impl<K, V> OrderedTree<K, V> {
    /// Creates an empty tree with node storage for at least `capacity` entries.
    ///
    /// This is an extension and is not part of the standard `BTreeMap` API.
    ///
    /// # Examples
    ///
    /// ```
    /// use rbstat_tree::OrderedTree;
    ///
    /// let tree: OrderedTree<i32, i32> = OrderedTree::with_capacity(32);
    /// assert!(tree.is_empty());
    /// assert!(tree.capacity() >= 32);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(capacity) for memory allocation.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        OrderedTree {
            raw: RawOrderedTree::with_capacity(capacity),
        }
    }

    /// Returns how many entries the tree can hold before its node storage grows.
    ///
    /// Slots freed by removals are reused, so capacity never shrinks on its own.
    ///
    /// # Complexity
    ///
    /// O(1)
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.raw.capacity()
    }
}
