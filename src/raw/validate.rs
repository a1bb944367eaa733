use crate::InvariantViolation;

use super::cursor::Cursor;
use super::handle::Handle;
use super::raw_ordered_tree::RawOrderedTree;
use super::size::Size;

impl<K: Ord, V> RawOrderedTree<K, V> {
    /// Walks the whole tree and reports the first broken invariant.
    ///
    /// Structure (links, colors, sizes) is checked before key order because the
    /// in-order walk trusts the sizes.
    pub(crate) fn check_invariants(&self) -> Result<(), InvariantViolation> {
        let Some(root) = self.root() else {
            return self.check_length();
        };

        let node = self.node(root);
        if node.parent.is_some() {
            return Err(InvariantViolation::RootHasParent);
        }
        if node.is_red() {
            return Err(InvariantViolation::RedRoot);
        }

        self.check_subtree(root, None)?;
        self.check_length()?;
        self.check_order()
    }

    fn check_length(&self) -> Result<(), InvariantViolation> {
        let (tree, arena) = (self.len(), self.slot_count());
        if tree == arena {
            Ok(())
        } else {
            Err(InvariantViolation::LengthMismatch { tree, arena })
        }
    }

    /// Returns the black height of the subtree at `handle` (absent leaves count one)
    /// and its node count.
    fn check_subtree(&self, handle: Handle, parent: Option<Handle>) -> Result<(usize, usize), InvariantViolation> {
        let node = self.node(handle);
        let slot = handle.to_index();

        if node.parent != parent {
            return Err(InvariantViolation::BrokenParentLink { node: slot });
        }
        if node.is_red() && (self.is_red(node.left()) || self.is_red(node.right())) {
            return Err(InvariantViolation::RedRedEdge { node: slot });
        }

        let (left, left_size) = self.check_link(node.left(), handle)?;
        let (right, right_size) = self.check_link(node.right(), handle)?;
        if left != right {
            return Err(InvariantViolation::BlackHeightMismatch { node: slot, left, right });
        }

        let actual = left_size + right_size + 1;
        let stored = node.size.to_usize();
        if stored != actual {
            return Err(InvariantViolation::SizeMismatch { node: slot, stored, actual });
        }

        Ok((left + usize::from(!node.is_red()), actual))
    }

    fn check_link(&self, link: Option<Handle>, parent: Handle) -> Result<(usize, usize), InvariantViolation> {
        match link {
            Some(child) => self.check_subtree(child, Some(parent)),
            None => Ok((1, 0)),
        }
    }

    fn check_order(&self) -> Result<(), InvariantViolation> {
        let mut cursor = Cursor::first(self);
        let Some(mut previous) = cursor.next_handle() else {
            return Ok(());
        };

        let mut position = 1;
        while let Some(current) = cursor.next_handle() {
            if self.node(previous).key >= self.node(current).key {
                return Err(InvariantViolation::KeysOutOfOrder { position });
            }
            previous = current;
            position += 1;
        }
        Ok(())
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::super::node::Color;
    use super::*;

    fn sample() -> RawOrderedTree<u32, ()> {
        let mut tree = RawOrderedTree::new();
        for key in 1..=15 {
            tree.insert(key, ());
        }
        tree
    }

    #[test]
    fn sound_trees_pass() {
        assert_eq!(RawOrderedTree::<u32, ()>::new().check_invariants(), Ok(()));
        assert_eq!(sample().check_invariants(), Ok(()));
    }

    #[test]
    fn red_root_is_reported() {
        let mut tree = sample();
        let root = tree.root().expect("non-empty");
        tree.node_mut(root).color = Color::Red;
        assert_eq!(tree.check_invariants(), Err(InvariantViolation::RedRoot));
    }

    #[test]
    fn stale_size_is_reported() {
        let mut tree = sample();
        let root = tree.root().expect("non-empty");
        tree.node_mut(root).size = Size::from_usize(99);
        assert_eq!(
            tree.check_invariants(),
            Err(InvariantViolation::SizeMismatch {
                node: root.to_index(),
                stored: 99,
                actual: 15,
            })
        );
    }

    #[test]
    fn swapped_keys_are_reported() {
        let mut tree = sample();
        let first = tree.first().expect("non-empty");
        tree.node_mut(first).key = 100;
        assert_eq!(tree.check_invariants(), Err(InvariantViolation::KeysOutOfOrder { position: 1 }));
    }

    #[test]
    fn recolored_leaf_breaks_black_height() {
        let mut tree = sample();
        // Flipping the maximum's color changes the black height of its path.
        let last = tree.last().expect("non-empty");
        let node = tree.node_mut(last);
        node.color = if node.is_red() { Color::Black } else { Color::Red };
        assert!(matches!(
            tree.check_invariants(),
            Err(InvariantViolation::BlackHeightMismatch { .. } | InvariantViolation::RedRedEdge { .. })
        ));
    }

    #[test]
    fn broken_parent_link_is_reported() {
        let mut tree = sample();
        let first = tree.first().expect("non-empty");
        tree.node_mut(first).parent = None;
        assert_eq!(
            tree.check_invariants(),
            Err(InvariantViolation::BrokenParentLink { node: first.to_index() })
        );
    }
}
