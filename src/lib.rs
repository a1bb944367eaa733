//! An order-statistic red-black tree for Rust.
//!
//! This crate provides [`OrderedTree`], a sorted key-value map whose nodes also track
//! the size of their subtrees. Besides the usual insert, delete and lookup it answers
//! positional queries in O(log n):
//!
//! - [`rank`](OrderedTree::rank) - How many keys are smaller than a given key
//! - [`kth`](OrderedTree::kth) - The entry at a given sorted position
//! - [`ceiling`](OrderedTree::ceiling) / [`floor`](OrderedTree::floor) - Nearest key at or above / at or below
//! - [`higher`](OrderedTree::higher) / [`lower`](OrderedTree::lower) - Nearest key strictly above / below
//! - [`range`](OrderedTree::range) - In-order iteration over a key interval
//! - Indexing by [`Rank`] - e.g., `tree[Rank(0)]` for the first value
//!
//! # Example
//!
//! ```
//! use rbstat_tree::{OrderedTree, Rank};
//!
//! let mut scores = OrderedTree::new();
//! scores.insert(100, "Alice");
//! scores.insert(85, "Bob");
//! scores.insert(92, "Carol");
//!
//! // Map operations
//! assert_eq!(scores.get(&85), Some(&"Bob"));
//! assert_eq!(scores.len(), 3);
//!
//! // Order-statistic operations (O(log n))
//! assert_eq!(scores.rank(&92), 1);
//! assert_eq!(scores.kth(1).map(|n| *n.value()), Some("Carol"));
//! assert_eq!(scores[Rank(2)], "Alice");
//!
//! // Navigation from a found entry
//! let bob = scores.search(&85).unwrap();
//! assert_eq!(bob.successor().map(|n| *n.key()), Some(92));
//!
//! // Closed key interval [90, 100]
//! let top: Vec<_> = scores.range(90..=100).map(|(_, name)| *name).collect();
//! assert_eq!(top, ["Carol", "Alice"]);
//! ```
//!
//! # Features
//!
//! - **`no_std` compatible** - Only requires `alloc`, no standard library dependency
//! - **Guaranteed balance** - Height stays below `2 * log2(n + 1)`
//! - **O(log n) rank operations** - Via subtree size augmentation
//! - **Self-checking** - [`OrderedTree::check_invariants`] validates the whole structure
//!
//! # Implementation
//!
//! Nodes live in a slot arena and refer to their children and parent by index. Every
//! rotation recomputes the subtree counts of the two nodes it moves, and every
//! structural change repairs the counts on the path up to the root.

#![no_std]
// These forbid rules and lint groups are meant to be very restrictive.
#![forbid(unsafe_code)]
#![forbid(keyword_idents)]
#![forbid(non_ascii_idents)]
#![forbid(unreachable_pub)]
#![warn(clippy::all)]
#![warn(clippy::cargo)]
#![warn(clippy::pedantic)]
// Enable coverage attributes for nightly builds.
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

extern crate alloc;

mod error;
mod order_statistic;
mod raw;

pub mod ordered_tree;

pub use error::InvariantViolation;
pub use order_statistic::Rank;
pub use ordered_tree::{NodeRef, OrderedTree};
