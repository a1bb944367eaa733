use core::ops::{Index, IndexMut};

use super::handle::Handle;
use super::size::Size;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Color {
    Red,
    Black,
}

/// Which child of a node. Lets each mirrored rebalancing case be written once.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Side {
    Left,
    Right,
}

impl Side {
    #[inline]
    pub(crate) const fn opposite(self) -> Self {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

#[derive(Clone)]
pub(crate) struct Node<K, V> {
    pub(crate) key: K,
    pub(crate) value: V,
    pub(crate) color: Color,
    /// Absent only for the root.
    pub(crate) parent: Option<Handle>,
    children: [Option<Handle>; 2],
    /// Nodes in the subtree rooted here, this one included.
    pub(crate) size: Size,
}

impl<K, V> Node<K, V> {
    /// Creates a detached red leaf, the shape every inserted node starts in.
    pub(crate) fn new(key: K, value: V, parent: Option<Handle>) -> Self {
        Self {
            key,
            value,
            color: Color::Red,
            parent,
            children: [None, None],
            size: Size::ONE,
        }
    }

    #[inline]
    pub(crate) fn left(&self) -> Option<Handle> {
        self.children[0]
    }

    #[inline]
    pub(crate) fn right(&self) -> Option<Handle> {
        self.children[1]
    }

    #[inline]
    pub(crate) fn is_red(&self) -> bool {
        self.color == Color::Red
    }

    /// Returns the side `child` hangs from, or `None` if it is not a child of this node.
    #[inline]
    pub(crate) fn side_of(&self, child: Option<Handle>) -> Option<Side> {
        if self.children[0] == child {
            Some(Side::Left)
        } else if self.children[1] == child {
            Some(Side::Right)
        } else {
            None
        }
    }

    pub(crate) fn into_entry(self) -> (K, V) {
        (self.key, self.value)
    }
}

impl<K, V> Index<Side> for Node<K, V> {
    type Output = Option<Handle>;

    #[inline]
    fn index(&self, side: Side) -> &Self::Output {
        match side {
            Side::Left => &self.children[0],
            Side::Right => &self.children[1],
        }
    }
}

impl<K, V> IndexMut<Side> for Node<K, V> {
    #[inline]
    fn index_mut(&mut self, side: Side) -> &mut Self::Output {
        match side {
            Side::Left => &mut self.children[0],
            Side::Right => &mut self.children[1],
        }
    }
}
