//! Sorted, borrowing iteration over a [`Tree`][crate::tree::Tree].
//!
//! The traversal never recurses. It keeps an explicit stack of the ancestors
//! still waiting to be emitted and a roving "current" subtree:
//!
//! 1. Descend left from the current subtree, pushing every node passed on
//!    the way. The top of the stack is now the smallest value not yet seen.
//! 2. Pop it and emit its value.
//! 3. Its right subtree holds the values between it and the next ancestor on
//!    the stack, so it becomes the current subtree and we go back to 1.
//!
//! Each node is pushed exactly once and popped exactly once, so every value
//! is emitted exactly once and in ascending order. The tree itself is never
//! touched; all progress lives on the stack, which holds at most `height`
//! nodes.

use std::fmt;
use std::iter::FusedIterator;

use crate::node::Node;

/// An iterator over the values of a [`Tree`][crate::tree::Tree] in ascending order.
///
/// Created by [`Tree::iter`][crate::tree::Tree::iter].
///
/// # Examples
///
/// ```
/// use binarytree::tree::Tree;
///
/// let tree = Tree::from_values([2, 3, 1]);
/// let mut iter = tree.iter();
///
/// assert_eq!(iter.len(), 3);
/// assert_eq!(iter.next(), Some(&1));
/// assert_eq!(iter.next(), Some(&2));
/// assert_eq!(iter.next(), Some(&3));
/// assert_eq!(iter.next(), None);
/// ```
pub struct Iter<'a, T> {
    /// Ancestors whose value hasn't been emitted yet. The top is the next value.
    pending: Vec<&'a Node<T>>,
    /// How many values are left to emit.
    remaining: usize,
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn new(root: Option<&'a Node<T>>, len: usize) -> Self {
        let mut iter = Self {
            pending: Vec::new(),
            remaining: len,
        };
        iter.descend_left(root);
        iter
    }

    fn descend_left(&mut self, mut current: Option<&'a Node<T>>) {
        while let Some(node) = current {
            self.pending.push(node);
            current = node.left();
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.pending.pop()?;
        self.descend_left(node.right());
        self.remaining -= 1;

        Some(node.value())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

/// Manual implementation of `Clone` so we don't require `T: Clone` just to copy a stack of
/// references.
impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            pending: self.pending.clone(),
            remaining: self.remaining,
        }
    }
}

impl<T> fmt::Debug for Iter<'_, T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}
