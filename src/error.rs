use thiserror::Error;

/// A broken structural invariant, reported by
/// [`OrderedTree::check_invariants`](crate::OrderedTree::check_invariants).
///
/// Nodes are identified by their arena slot index. Any of these means the tree
/// was corrupted, most likely by a key whose [`Ord`] implementation is not a
/// total order or changed while the key was in the tree.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Error)]
pub enum InvariantViolation {
    /// The root is colored red.
    #[error("root node is red")]
    RedRoot,

    /// The root has a parent link.
    #[error("root node has a parent link")]
    RootHasParent,

    /// A child's parent link does not point at the node holding it.
    #[error("node {node} does not link back to its parent")]
    BrokenParentLink {
        /// Slot of the child with the stale link.
        node: usize,
    },

    /// A red node has a red child.
    #[error("red node {node} has a red child")]
    RedRedEdge {
        /// Slot of the red parent.
        node: usize,
    },

    /// The two subtrees of a node have different black heights.
    #[error("black height differs under node {node}: left {left}, right {right}")]
    BlackHeightMismatch {
        /// Slot of the unbalanced node.
        node: usize,
        /// Black height of the left subtree.
        left: usize,
        /// Black height of the right subtree.
        right: usize,
    },

    /// A node's stored subtree size is wrong.
    #[error("node {node} stores size {stored} but its subtree holds {actual} nodes")]
    SizeMismatch {
        /// Slot of the node.
        node: usize,
        /// Size recorded in the node.
        stored: usize,
        /// Size counted from its children.
        actual: usize,
    },

    /// In-order traversal is not strictly ascending.
    #[error("keys are not strictly ascending at position {position}")]
    KeysOutOfOrder {
        /// In-order position of the first key not greater than its predecessor.
        position: usize,
    },

    /// The root's size and the number of live nodes disagree.
    #[error("tree reports {tree} entries but {arena} nodes are allocated")]
    LengthMismatch {
        /// Size recorded at the root.
        tree: usize,
        /// Live nodes in the arena.
        arena: usize,
    },
}
