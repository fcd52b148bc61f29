//! This crate exposes a small Binary Search Tree (BST) supporting
//! insertion, search, and the classic traversal orders, mostly for
//! educational purposes.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert and find stored keys. BSTs are typically defined recursively
//! using the notion of a `Node`. A `Node` stores a key and sometimes has
//! child `Node`s. The most important invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have
//!    a key less than its own key.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have
//!    a key greater than its own key.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! The trees in this crate never store a key twice (inserting an existing
//! key is a no-op), so both invariants hold strictly.
//!
//! ## Traversals
//!
//! The invariants give searching a cost of `O(height)` and make sorted
//! iteration natural: visiting the left subtree, then the root, then the
//! right subtree ("inorder") yields the keys in ascending order. The other
//! depth-first orders move the root visit around: "preorder" visits the
//! root before its subtrees, "postorder" visits it after. "Level order" is
//! the breadth-first walk: the root first, then each deeper level of the
//! tree from left to right.
//!
//! ## Modules
//!
//! Each module implements the same operations with a different strategy so
//! they can be read side by side and benchmarked against each other:
//!
//! - [`recursive`] defines the tree as a recursive enum and lets every
//!   operation recurse down it. The shortest path from the textbook
//!   definition to working code.
//! - [`iterative`] keeps an optional boxed root and replaces recursion
//!   with loops, explicit stacks, and a queue. Deep trees cost heap
//!   instead of call stack.

#![deny(missing_docs)]

pub mod iterative;
pub mod recursive;

#[cfg(test)]
mod test;
