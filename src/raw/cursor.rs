use core::cmp::Ordering;

use smallvec::SmallVec;

use super::handle::Handle;
use super::raw_ordered_tree::RawOrderedTree;

// A red-black tree of u32-addressable size is at most 64 levels deep.
type Stack = SmallVec<[Handle; 64]>;

/// Explicit-stack in-order walk over a [`RawOrderedTree`].
///
/// The stack holds the ancestors whose key has not been yielded yet; its top is
/// always the next node. `remaining` bounds the walk so a range cursor can stop
/// without comparing keys.
pub(crate) struct Cursor<'a, K, V> {
    tree: &'a RawOrderedTree<K, V>,
    stack: Stack,
    remaining: usize,
}

impl<'a, K, V> Cursor<'a, K, V> {
    /// A cursor over every entry, starting at the minimum.
    pub(crate) fn first(tree: &'a RawOrderedTree<K, V>) -> Self {
        let mut cursor = Self {
            tree,
            stack: Stack::new(),
            remaining: tree.len(),
        };
        cursor.push_left_spine(tree.root());
        cursor
    }

    /// A cursor over the `count` entries starting at zero-based position `start`.
    pub(crate) fn at_rank(tree: &'a RawOrderedTree<K, V>, start: usize, count: usize) -> Self {
        let mut stack = Stack::new();
        let remaining = count.min(tree.len().saturating_sub(start));

        // Same descent as `kth`, keeping the nodes we pass on the left.
        let mut k = start;
        let mut current = if remaining == 0 { None } else { tree.root() };
        while let Some(h) = current {
            let node = tree.node(h);
            let left_size = tree.size_of(node.left()).to_usize();
            match k.cmp(&left_size) {
                Ordering::Less => {
                    stack.push(h);
                    current = node.left();
                }
                Ordering::Equal => {
                    stack.push(h);
                    break;
                }
                Ordering::Greater => {
                    k -= left_size + 1;
                    current = node.right();
                }
            }
        }

        Self { tree, stack, remaining }
    }

    pub(crate) fn tree(&self) -> &'a RawOrderedTree<K, V> {
        self.tree
    }

    pub(crate) fn remaining(&self) -> usize {
        self.remaining
    }

    fn push_left_spine(&mut self, mut link: Option<Handle>) {
        while let Some(h) = link {
            self.stack.push(h);
            link = self.tree.node(h).left();
        }
    }

    pub(crate) fn next_handle(&mut self) -> Option<Handle> {
        if self.remaining == 0 {
            return None;
        }
        let h = self.stack.pop()?;
        self.remaining -= 1;
        self.push_left_spine(self.tree.node(h).right());
        Some(h)
    }
}

impl<K, V> Clone for Cursor<'_, K, V> {
    fn clone(&self) -> Self {
        Self {
            tree: self.tree,
            stack: self.stack.clone(),
            remaining: self.remaining,
        }
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use alloc::vec::Vec;
    use proptest::prelude::*;

    fn drain<K: Copy, V>(mut cursor: Cursor<'_, K, V>) -> Vec<K> {
        let tree = cursor.tree();
        core::iter::from_fn(|| cursor.next_handle()).map(|h| tree.node(h).key).collect()
    }

    #[test]
    fn empty_tree_yields_nothing() {
        let tree: RawOrderedTree<u32, ()> = RawOrderedTree::new();
        assert!(drain(Cursor::first(&tree)).is_empty());
        assert!(drain(Cursor::at_rank(&tree, 0, 10)).is_empty());
    }

    #[test]
    fn at_rank_clamps_to_the_end() {
        let mut tree: RawOrderedTree<u32, ()> = RawOrderedTree::new();
        for key in 0..10 {
            tree.insert(key, ());
        }
        assert_eq!(drain(Cursor::at_rank(&tree, 7, 100)), [7, 8, 9]);
        assert!(drain(Cursor::at_rank(&tree, 10, 5)).is_empty());
        assert_eq!(Cursor::at_rank(&tree, 7, 100).remaining(), 3);
    }

    #[test]
    fn clone_resumes_from_the_same_place() {
        let mut tree: RawOrderedTree<u32, ()> = RawOrderedTree::new();
        for key in 0..20 {
            tree.insert(key, ());
        }
        let mut cursor = Cursor::first(&tree);
        for _ in 0..5 {
            cursor.next_handle();
        }
        let copy = cursor.clone();
        assert_eq!(drain(cursor), drain(copy));
    }

    proptest! {
        #[test]
        fn at_rank_matches_sorted_slice(
            keys in prop::collection::btree_set(0u32..5_000, 0..300),
            start in 0usize..320,
            count in 0usize..320,
        ) {
            let mut tree: RawOrderedTree<u32, ()> = RawOrderedTree::new();
            for &key in &keys {
                tree.insert(key, ());
            }
            let sorted: Vec<u32> = keys.iter().copied().collect();
            let expected: Vec<u32> = sorted.iter().copied().skip(start).take(count).collect();
            prop_assert_eq!(drain(Cursor::at_rank(&tree, start, count)), expected);
            prop_assert_eq!(drain(Cursor::first(&tree)), sorted);
        }
    }
}
