//! This crate exposes an unbalanced Binary Search Tree (BST) over any totally
//! ordered element type, mostly for educational purposes.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to insert
//! and find stored values. BSTs are typically defined recursively using the
//! notion of a `Node`. A `Node` stores the value that was inserted and will
//! sometimes have child `Node`s. The most important invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    value less than its own value.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    value greater than its own value.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Searching for values in the tree takes `O(height)` (where `height` is defined
//! as the longest path from the root `Node` to a leaf `Node`). The tree in this
//! crate does no balancing, so the shape depends entirely on insertion order:
//! shuffled input gives an expected height of `O(lg N)` while sorted input
//! degenerates into a chain with a height of `N`. Every operation here walks
//! the tree with loops and explicit stacks instead of recursion so that even
//! a degenerate tree can't overflow the call stack.
//!
//! BSTs also naturally support sorted iteration by visiting the left subtree,
//! then the subtree root, then the right subtree.
//!
//! ```
//! use binarytree::tree::Tree;
//!
//! let tree: Tree<_> = [6, 9, 4, 13, 17, 1, 10, 5, 7, 3].into_iter().collect();
//!
//! assert_eq!(tree.as_sorted_list(), vec![1, 3, 4, 5, 6, 7, 9, 10, 13, 17]);
//! assert!(tree.contains(&10));
//! assert!(!tree.contains(&11));
//! assert_eq!(tree.elements_smaller_than(&9), vec![1, 3, 4, 5, 6, 7]);
//! ```

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod iter;
pub mod node;
pub mod tree;
