/// A zero-based position in the sorted order of an [`OrderedTree`](crate::OrderedTree).
///
/// Indexing a tree by `Rank` looks an entry up by position rather than by key.
///
/// # Examples
///
/// ```
/// use rbstat_tree::{OrderedTree, Rank};
///
/// let mut tree = OrderedTree::new();
/// tree.insert("b", 20);
/// tree.insert("a", 10);
///
/// assert_eq!(tree[Rank(0)], 10);
/// assert_eq!(tree[Rank(1)], 20);
/// ```
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Rank(pub usize);
