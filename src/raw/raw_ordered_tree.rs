use core::borrow::Borrow;
use core::cmp::Ordering;

use alloc::vec::Vec;
use log::{debug, trace};

use super::arena::Arena;
use super::cursor::Cursor;
use super::handle::Handle;
use super::node::{Color, Node, Side};
use super::size::Size;

/// The red-black engine backing `OrderedTree`.
///
/// Nodes live in an arena and refer to each other by [`Handle`]; parent links
/// are plain handles too, so rotations and transplants are slot reassignments
/// and never need aliased references.
#[derive(Clone)]
pub(crate) struct RawOrderedTree<K, V> {
    /// Arena storing all tree nodes.
    nodes: Arena<Node<K, V>>,
    /// Handle to the root node, if the tree is non-empty.
    root: Option<Handle>,
}

impl<K, V> RawOrderedTree<K, V> {
    /// Creates a new, empty tree.
    pub(crate) const fn new() -> Self {
        Self {
            nodes: Arena::new(),
            root: None,
        }
    }

    /// Creates a new tree with room for `capacity` nodes.
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Arena::with_capacity(capacity),
            root: None,
        }
    }

    /// Returns the number of key-value pairs, read from the root's subtree size.
    pub(crate) fn len(&self) -> usize {
        self.size_of(self.root).to_usize()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    pub(crate) fn capacity(&self) -> usize {
        self.nodes.capacity()
    }

    pub(crate) fn clear(&mut self) {
        debug!("clearing tree of {} nodes", self.nodes.len());
        self.nodes.clear();
        self.root = None;
    }

    pub(crate) fn root(&self) -> Option<Handle> {
        self.root
    }

    pub(crate) fn node(&self, handle: Handle) -> &Node<K, V> {
        self.nodes.get(handle)
    }

    pub(crate) fn node_mut(&mut self, handle: Handle) -> &mut Node<K, V> {
        self.nodes.get_mut(handle)
    }

    /// Number of occupied arena slots. Equal to [`len`](Self::len) on a sound tree.
    pub(crate) fn slot_count(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub(crate) fn size_of(&self, link: Option<Handle>) -> Size {
        link.map_or(Size::ZERO, |h| self.nodes.get(h).size)
    }

    /// Absent links count as black.
    #[inline]
    pub(crate) fn is_red(&self, link: Option<Handle>) -> bool {
        link.is_some_and(|h| self.nodes.get(h).is_red())
    }

    #[inline]
    fn set_color(&mut self, link: Option<Handle>, color: Color) {
        if let Some(h) = link {
            self.nodes.get_mut(h).color = color;
        }
    }

    #[inline]
    fn update_size(&mut self, handle: Handle) {
        let node = self.nodes.get(handle);
        let size = Size::of_parent(self.size_of(node.left()), self.size_of(node.right()));
        self.nodes.get_mut(handle).size = size;
    }

    /// Recomputes subtree sizes from `link` up to the root.
    fn repair_sizes_from(&mut self, mut link: Option<Handle>) {
        while let Some(h) = link {
            self.update_size(h);
            link = self.nodes.get(h).parent;
        }
    }

    /// Side of `parent` that `child` hangs from.
    fn side_in_parent(&self, parent: Handle, child: Option<Handle>) -> Side {
        self.nodes
            .get(parent)
            .side_of(child)
            .expect("`RawOrderedTree::side_in_parent()` - `child` is not a child of `parent`!")
    }

    /// Points `parent`'s link to `old` at `new` instead; a `None` parent means the root slot.
    fn replace_child(&mut self, parent: Option<Handle>, old: Handle, new: Option<Handle>) {
        match parent {
            None => self.root = new,
            Some(p) => {
                let side = self.side_in_parent(p, Some(old));
                self.nodes.get_mut(p)[side] = new;
            }
        }
    }

    /// Moves the subtree rooted at `v` into `u`'s position under `u`'s parent.
    fn transplant(&mut self, u: Handle, v: Option<Handle>) {
        let parent = self.nodes.get(u).parent;
        self.replace_child(parent, u, v);
        if let Some(v) = v {
            self.nodes.get_mut(v).parent = parent;
        }
    }

    /// Rotates `handle` down toward `dir`; its child on the opposite side takes its place.
    ///
    /// Only the two nodes that swap levels change subtree membership, so only their
    /// sizes are recomputed (lower one first).
    fn rotate(&mut self, handle: Handle, dir: Side) {
        let pivot = self.nodes.get(handle)[dir.opposite()].expect("`RawOrderedTree::rotate()` - pivot is missing!");
        let inner = self.nodes.get(pivot)[dir];

        self.nodes.get_mut(handle)[dir.opposite()] = inner;
        if let Some(inner) = inner {
            self.nodes.get_mut(inner).parent = Some(handle);
        }

        let parent = self.nodes.get(handle).parent;
        self.nodes.get_mut(pivot).parent = parent;
        self.replace_child(parent, handle, Some(pivot));

        self.nodes.get_mut(pivot)[dir] = Some(handle);
        self.nodes.get_mut(handle).parent = Some(pivot);

        self.update_size(handle);
        self.update_size(pivot);
    }

    fn insert_fixup(&mut self, mut node: Handle) {
        while let Some(mut parent) = self.nodes.get(node).parent
            && self.nodes.get(parent).is_red()
        {
            // A red parent is never the root, so the grandparent exists.
            let grandparent = self.nodes.get(parent).parent.expect("`RawOrderedTree::insert_fixup()` - red root!");
            let side = self.side_in_parent(grandparent, Some(parent));
            let uncle = self.nodes.get(grandparent)[side.opposite()];

            if self.is_red(uncle) {
                trace!("insert fixup: red uncle, pushing violation up");
                self.set_color(Some(parent), Color::Black);
                self.set_color(uncle, Color::Black);
                self.set_color(Some(grandparent), Color::Red);
                node = grandparent;
                continue;
            }

            if self.nodes.get(parent)[side.opposite()] == Some(node) {
                trace!("insert fixup: inner grandchild, rotating {side:?}");
                self.rotate(parent, side);
                core::mem::swap(&mut node, &mut parent);
            }

            trace!("insert fixup: black uncle, rotating grandparent {:?}", side.opposite());
            self.set_color(Some(parent), Color::Black);
            self.set_color(Some(grandparent), Color::Red);
            self.rotate(grandparent, side.opposite());
        }

        self.set_color(self.root, Color::Black);
    }

    /// Restores black height after a black node left the tree.
    ///
    /// `node` is the (possibly absent) node that filled the vacated slot and `parent`
    /// its parent; `parent` is needed because an absent node cannot be asked for it.
    fn delete_fixup(&mut self, mut node: Option<Handle>, mut parent: Option<Handle>) {
        while node != self.root && !self.is_red(node) {
            let Some(p) = parent else {
                break;
            };
            let side = self.side_in_parent(p, node);
            let mut sibling = self.sibling(p, side);

            if self.nodes.get(sibling).is_red() {
                trace!("delete fixup: red sibling, rotating {side:?}");
                self.set_color(Some(sibling), Color::Black);
                self.set_color(Some(p), Color::Red);
                self.rotate(p, side);
                sibling = self.sibling(p, side);
            }

            let near = self.nodes.get(sibling)[side];
            let far = self.nodes.get(sibling)[side.opposite()];

            if !self.is_red(near) && !self.is_red(far) {
                trace!("delete fixup: black nephews, moving deficiency up");
                self.set_color(Some(sibling), Color::Red);
                node = Some(p);
                parent = self.nodes.get(p).parent;
                continue;
            }

            if !self.is_red(far) {
                trace!("delete fixup: red near nephew, rotating sibling {:?}", side.opposite());
                self.set_color(near, Color::Black);
                self.set_color(Some(sibling), Color::Red);
                self.rotate(sibling, side.opposite());
                sibling = self.sibling(p, side);
            }

            trace!("delete fixup: red far nephew, rotating {side:?}");
            let parent_color = self.nodes.get(p).color;
            self.nodes.get_mut(sibling).color = parent_color;
            self.set_color(Some(p), Color::Black);
            let far = self.nodes.get(sibling)[side.opposite()];
            self.set_color(far, Color::Black);
            self.rotate(p, side);
            node = self.root;
            break;
        }

        self.set_color(node, Color::Black);
    }

    /// The child of `parent` opposite `side`. It exists whenever the `side` subtree is
    /// short one black node.
    fn sibling(&self, parent: Handle, side: Side) -> Handle {
        self.nodes.get(parent)[side.opposite()].expect("`RawOrderedTree::sibling()` - sibling is missing!")
    }

    /// Unlinks `z`, rebalances, and hands back its entry.
    pub(crate) fn remove_handle(&mut self, z: Handle) -> (K, V) {
        let (z_left, z_right, z_color, z_parent) = {
            let node = self.nodes.get(z);
            (node.left(), node.right(), node.color, node.parent)
        };

        // `x` is whatever now fills the vacated slot and `x_parent` its parent.
        let (x, x_parent, removed_color) = match (z_left, z_right) {
            (None, _) => {
                self.transplant(z, z_right);
                (z_right, z_parent, z_color)
            }
            (Some(_), None) => {
                self.transplant(z, z_left);
                (z_left, z_parent, z_color)
            }
            (Some(left), Some(right)) => {
                let y = self.extreme(right, Side::Left);
                let y_color = self.nodes.get(y).color;
                let x = self.nodes.get(y).right();

                let x_parent = if y == right {
                    Some(y)
                } else {
                    let y_parent = self.nodes.get(y).parent;
                    self.transplant(y, x);
                    self.nodes.get_mut(y)[Side::Right] = Some(right);
                    self.nodes.get_mut(right).parent = Some(y);
                    y_parent
                };

                self.transplant(z, Some(y));
                self.nodes.get_mut(y)[Side::Left] = Some(left);
                self.nodes.get_mut(left).parent = Some(y);
                self.nodes.get_mut(y).color = z_color;
                (x, x_parent, y_color)
            }
        };

        // Every node whose subtree lost `z` lies on the path from `x_parent` to the root.
        self.repair_sizes_from(x_parent);

        if removed_color == Color::Black {
            self.delete_fixup(x, x_parent);
        }

        let entry = self.nodes.take(z).into_entry();
        debug_assert!(!self.is_red(self.root), "`RawOrderedTree::remove_handle()` - root left red!");
        debug_assert_eq!(
            self.len(),
            self.nodes.len(),
            "`RawOrderedTree::remove_handle()` - root size out of sync with arena!"
        );
        entry
    }

    /// Follows `side` links from `handle` to the end: the minimum for `Left`, the maximum for `Right`.
    pub(crate) fn extreme(&self, mut handle: Handle, side: Side) -> Handle {
        while let Some(next) = self.nodes.get(handle)[side] {
            handle = next;
        }
        handle
    }

    pub(crate) fn first(&self) -> Option<Handle> {
        self.root.map(|root| self.extreme(root, Side::Left))
    }

    pub(crate) fn last(&self) -> Option<Handle> {
        self.root.map(|root| self.extreme(root, Side::Right))
    }

    /// In-order neighbor of `handle`: the successor for `Right`, the predecessor for `Left`.
    pub(crate) fn neighbor(&self, handle: Handle, side: Side) -> Option<Handle> {
        if let Some(child) = self.nodes.get(handle)[side] {
            return Some(self.extreme(child, side.opposite()));
        }

        // Climb until we leave a subtree hanging from the opposite side.
        let mut child = handle;
        let mut parent = self.nodes.get(handle).parent;
        while let Some(p) = parent
            && self.nodes.get(p)[side] == Some(child)
        {
            child = p;
            parent = self.nodes.get(p).parent;
        }
        parent
    }

    /// Node at zero-based position `k` in key order.
    pub(crate) fn kth(&self, mut k: usize) -> Option<Handle> {
        if k >= self.len() {
            return None;
        }

        let mut current = self.root;
        while let Some(h) = current {
            let node = self.nodes.get(h);
            let left_size = self.size_of(node.left()).to_usize();
            match k.cmp(&left_size) {
                Ordering::Less => current = node.left(),
                Ordering::Equal => return Some(h),
                Ordering::Greater => {
                    k -= left_size + 1;
                    current = node.right();
                }
            }
        }
        None
    }

    /// Position of `handle` in key order, found by climbing to the root.
    pub(crate) fn rank_of_handle(&self, handle: Handle) -> usize {
        let mut rank = self.size_of(self.nodes.get(handle).left()).to_usize();
        let mut child = handle;
        while let Some(parent) = self.nodes.get(child).parent {
            let node = self.nodes.get(parent);
            if node.right() == Some(child) {
                rank += self.size_of(node.left()).to_usize() + 1;
            }
            child = parent;
        }
        rank
    }

    /// Moves every entry out in ascending key order, leaving the tree empty.
    pub(crate) fn drain_sorted(&mut self) -> Vec<(K, V)> {
        let order: Vec<Handle> = {
            let mut cursor = Cursor::first(self);
            core::iter::from_fn(|| cursor.next_handle()).collect()
        };
        let entries = order.into_iter().map(|h| self.nodes.take(h).into_entry()).collect();
        self.nodes.clear();
        self.root = None;
        entries
    }
}

impl<K: Ord, V> RawOrderedTree<K, V> {
    /// Finds the node holding `key`.
    pub(crate) fn search<Q>(&self, key: &Q) -> Option<Handle>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        let mut current = self.root;
        while let Some(h) = current {
            let node = self.nodes.get(h);
            current = match key.cmp(node.key.borrow()) {
                Ordering::Less => node.left(),
                Ordering::Greater => node.right(),
                Ordering::Equal => return Some(h),
            };
        }
        None
    }

    /// Inserts a key-value pair, returning the displaced value if `key` was present.
    pub(crate) fn insert(&mut self, key: K, value: V) -> Option<V> {
        let mut parent = None;
        let mut side = Side::Left;
        let mut current = self.root;

        while let Some(h) = current {
            let node = self.nodes.get_mut(h);
            side = match key.cmp(&node.key) {
                Ordering::Less => Side::Left,
                Ordering::Greater => Side::Right,
                // Overwrite in place; the shape does not change.
                Ordering::Equal => return Some(core::mem::replace(&mut node.value, value)),
            };
            parent = Some(h);
            current = node[side];
        }

        let z = self.nodes.alloc(Node::new(key, value, parent));
        match parent {
            None => self.root = Some(z),
            Some(p) => self.nodes.get_mut(p)[side] = Some(z),
        }

        self.repair_sizes_from(parent);
        self.insert_fixup(z);

        debug_assert!(!self.is_red(self.root), "`RawOrderedTree::insert()` - root left red!");
        debug_assert_eq!(
            self.len(),
            self.nodes.len(),
            "`RawOrderedTree::insert()` - root size out of sync with arena!"
        );
        None
    }

    /// Removes `key`, returning its entry if it was present.
    pub(crate) fn remove_entry<Q>(&mut self, key: &Q) -> Option<(K, V)>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        let z = self.search(key)?;
        Some(self.remove_handle(z))
    }

    /// Smallest key `>= key`, or with `strict`, `> key`.
    pub(crate) fn ceiling<Q>(&self, key: &Q, strict: bool) -> Option<Handle>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        let mut best = None;
        let mut current = self.root;
        while let Some(h) = current {
            let node = self.nodes.get(h);
            match key.cmp(node.key.borrow()) {
                Ordering::Equal if !strict => return Some(h),
                Ordering::Less => {
                    best = Some(h);
                    current = node.left();
                }
                Ordering::Equal | Ordering::Greater => current = node.right(),
            }
        }
        best
    }

    /// Greatest key `<= key`, or with `strict`, `< key`.
    pub(crate) fn floor<Q>(&self, key: &Q, strict: bool) -> Option<Handle>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        let mut best = None;
        let mut current = self.root;
        while let Some(h) = current {
            let node = self.nodes.get(h);
            match key.cmp(node.key.borrow()) {
                Ordering::Equal if !strict => return Some(h),
                Ordering::Greater => {
                    best = Some(h);
                    current = node.right();
                }
                Ordering::Equal | Ordering::Less => current = node.left(),
            }
        }
        best
    }

    /// Number of keys `< key`, or with `inclusive`, `<= key`. Defined for absent keys too.
    pub(crate) fn rank<Q>(&self, key: &Q, inclusive: bool) -> usize
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        let mut rank = 0;
        let mut current = self.root;
        while let Some(h) = current {
            let node = self.nodes.get(h);
            match key.cmp(node.key.borrow()) {
                Ordering::Less => current = node.left(),
                Ordering::Greater => {
                    rank += self.size_of(node.left()).to_usize() + 1;
                    current = node.right();
                }
                Ordering::Equal => {
                    rank += self.size_of(node.left()).to_usize() + usize::from(inclusive);
                    break;
                }
            }
        }
        rank
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss, clippy::cast_sign_loss)]
mod tests {
    extern crate std;

    use super::*;
    use alloc::collections::BTreeMap;
    use proptest::prelude::*;

    impl<K, V> RawOrderedTree<K, V> {
        fn height(&self) -> usize {
            fn depth<K, V>(tree: &RawOrderedTree<K, V>, link: Option<Handle>) -> usize {
                link.map_or(0, |h| {
                    let node = tree.node(h);
                    1 + depth(tree, node.left()).max(depth(tree, node.right()))
                })
            }
            depth(self, self.root)
        }

        fn keys_in_order(&self) -> Vec<&K> {
            let mut cursor = Cursor::first(self);
            core::iter::from_fn(|| cursor.next_handle()).map(|h| &self.node(h).key).collect()
        }
    }

    fn height_bound(len: usize) -> usize {
        (2.0 * ((len + 1) as f64).log2()).floor() as usize
    }

    #[derive(Clone, Debug)]
    enum Op {
        Insert(i32),
        Remove(i32),
    }

    fn op_strategy() -> impl Strategy<Value = Op> {
        prop_oneof![
            3 => (0i32..1000).prop_map(Op::Insert),
            2 => (0i32..1000).prop_map(Op::Remove),
        ]
    }

    #[test]
    fn insert_into_full_tree_panics_without_corrupting_it() {
        let mut tree: RawOrderedTree<u32, ()> = RawOrderedTree::new();
        let max = u32::try_from(Handle::MAX).unwrap();
        for key in 0..max {
            tree.insert(key, ());
        }
        assert_eq!(tree.len(), Handle::MAX);

        let overflow = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| tree.insert(u32::MAX, ())));
        assert!(overflow.is_err());
        assert_eq!(tree.len(), Handle::MAX);
        assert_eq!(tree.check_invariants(), Ok(()));
        assert!(tree.search(&u32::MAX).is_none());

        // The tree stays usable: a removal frees a slot for the next insert.
        assert_eq!(tree.remove_entry(&0), Some((0, ())));
        assert_eq!(tree.insert(u32::MAX, ()), None);
        assert_eq!(tree.len(), Handle::MAX);
        assert_eq!(tree.check_invariants(), Ok(()));
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(50))]

        #[test]
        fn invariants_hold_after_every_operation(ops in prop::collection::vec(op_strategy(), 0..500)) {
            let mut tree: RawOrderedTree<i32, i32> = RawOrderedTree::new();
            let mut model: BTreeMap<i32, i32> = BTreeMap::new();

            for op in ops {
                match op {
                    Op::Insert(key) => {
                        prop_assert_eq!(tree.insert(key, key * 2), model.insert(key, key * 2));
                    }
                    Op::Remove(key) => {
                        prop_assert_eq!(tree.remove_entry(&key), model.remove_entry(&key));
                    }
                }
                prop_assert_eq!(tree.check_invariants(), Ok(()));
                prop_assert!(tree.height() <= height_bound(tree.len()));
            }

            let expected: Vec<&i32> = model.keys().collect();
            prop_assert_eq!(tree.keys_in_order(), expected);
        }

        #[test]
        fn kth_and_rank_are_inverse(keys in prop::collection::btree_set(-500i32..500, 1..200)) {
            let mut tree: RawOrderedTree<i32, ()> = RawOrderedTree::new();
            for &key in &keys {
                tree.insert(key, ());
            }

            for (k, key) in keys.iter().enumerate() {
                let h = tree.kth(k).expect("rank within bounds");
                prop_assert_eq!(&tree.node(h).key, key);
                prop_assert_eq!(tree.rank(key, false), k);
                prop_assert_eq!(tree.rank(key, true), k + 1);
                prop_assert_eq!(tree.rank_of_handle(h), k);
            }
            prop_assert!(tree.kth(keys.len()).is_none());
        }

        #[test]
        fn neighbors_walk_the_whole_tree(keys in prop::collection::btree_set(0i32..10_000, 1..300)) {
            let mut tree: RawOrderedTree<i32, ()> = RawOrderedTree::new();
            for &key in keys.iter().rev() {
                tree.insert(key, ());
            }

            let mut forward = Vec::new();
            let mut current = tree.first();
            while let Some(h) = current {
                forward.push(tree.node(h).key);
                current = tree.neighbor(h, Side::Right);
            }
            prop_assert_eq!(&forward, &keys.iter().copied().collect::<Vec<_>>());

            let mut backward = Vec::new();
            let mut current = tree.last();
            while let Some(h) = current {
                backward.push(tree.node(h).key);
                current = tree.neighbor(h, Side::Left);
            }
            backward.reverse();
            prop_assert_eq!(forward, backward);
        }
    }

    #[test]
    fn ascending_and_descending_inserts_stay_balanced() {
        let mut ascending: RawOrderedTree<u32, ()> = RawOrderedTree::new();
        let mut descending: RawOrderedTree<u32, ()> = RawOrderedTree::new();
        for i in 0..2_000 {
            ascending.insert(i, ());
            descending.insert(2_000 - i, ());
        }
        assert_eq!(ascending.check_invariants(), Ok(()));
        assert_eq!(descending.check_invariants(), Ok(()));
        assert!(ascending.height() <= height_bound(2_000));
        assert!(descending.height() <= height_bound(2_000));
    }

    #[test]
    fn removing_everything_empties_the_arena() {
        let mut tree: RawOrderedTree<u32, u32> = RawOrderedTree::new();
        for i in 0..512 {
            tree.insert((i * 7919) % 512, i);
        }
        for i in 0..512 {
            assert!(tree.remove_entry(&i).is_some());
            assert_eq!(tree.check_invariants(), Ok(()));
        }
        assert!(tree.is_empty());
        assert_eq!(tree.len(), 0);
        assert_eq!(tree.slot_count(), 0);
    }

    #[test]
    fn overwrite_keeps_shape() {
        let mut tree: RawOrderedTree<u32, &str> = RawOrderedTree::new();
        assert_eq!(tree.insert(10, "TEN"), None);
        assert_eq!(tree.insert(10, "ten"), Some("TEN"));
        assert_eq!(tree.len(), 1);
        let h = tree.search(&10).expect("key present");
        assert_eq!(tree.node(h).value, "ten");
    }

    #[test]
    fn approximate_lookups() {
        let mut tree: RawOrderedTree<u32, ()> = RawOrderedTree::new();
        for key in [10, 20, 30] {
            tree.insert(key, ());
        }
        let key_of = |h: Option<Handle>| h.map(|h| tree.node(h).key);

        assert_eq!(key_of(tree.ceiling(&15, false)), Some(20));
        assert_eq!(key_of(tree.ceiling(&20, false)), Some(20));
        assert_eq!(key_of(tree.ceiling(&20, true)), Some(30));
        assert_eq!(key_of(tree.ceiling(&30, true)), None);
        assert_eq!(key_of(tree.floor(&25, false)), Some(20));
        assert_eq!(key_of(tree.floor(&20, true)), Some(10));
        assert_eq!(key_of(tree.floor(&10, true)), None);
        assert_eq!(key_of(tree.floor(&5, false)), None);
    }

    #[test]
    fn rotations_keep_sizes() {
        let mut tree: RawOrderedTree<u32, ()> = RawOrderedTree::new();
        for key in [20, 10, 30, 25, 35] {
            tree.insert(key, ());
        }
        let root = tree.root().expect("non-empty");
        assert_eq!(tree.node(root).key, 20);

        tree.rotate(root, Side::Left);
        let new_root = tree.root().expect("non-empty");
        assert_eq!(tree.node(new_root).key, 30);
        assert_eq!(tree.node(new_root).size.to_usize(), 5);
        assert_eq!(tree.node(root).size.to_usize(), 3);
        assert_eq!(tree.node(root).parent, Some(new_root));
        assert_eq!(tree.keys_in_order(), [&10, &20, &25, &30, &35]);
    }
}
