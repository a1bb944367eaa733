mod arena;
mod cursor;
mod handle;
mod node;
mod raw_ordered_tree;
mod size;
mod validate;

pub(crate) use cursor::Cursor;
pub(crate) use handle::Handle;
pub(crate) use node::Side;
pub(crate) use raw_ordered_tree::RawOrderedTree;
