//! This crate exposes an ordered Binary Search Tree (BST) mostly for educational purposes.
//!
//! ## Binary Search Tree
//!
//! A [`Tree`] stores distinct values in [`Node`]s. Each `Node` holds one value and owns at most
//! two children, and every `Node` keeps this ordering:
//!
//! 1. Values anywhere under its left child are smaller than its own value.
//! 2. Values anywhere under its right child are larger than its own value.
//!
//! Inserting a value that is already present changes nothing.
//!
//! A lookup only follows one path down from the root, so it costs `O(height)`, where `height`
//! counts the edges on the longest root-to-leaf path. This tree never rebalances, so feeding it
//! sorted values degenerates it into a chain of height `N - 1`. Visiting the left subtree, then
//! the node, then the right subtree yields the values in ascending order.

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod tree;

pub use tree::{trees_equal, Node, Order, Tree, EMPTY_TREE_LINE};
