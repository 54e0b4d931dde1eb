//! An unbalanced BST that stores each distinct value exactly once.
//!
//! Values are placed by plain BST descent with no rebalancing, so the shape of
//! the tree is decided entirely by insertion order. Inserting a value that is
//! already present is rejected and leaves the tree untouched.
//!
//! # Examples
//!
//! ```
//! use binarytree::tree::Tree;
//!
//! let mut tree = Tree::new();
//!
//! // Nothing in here yet.
//! assert!(!tree.contains(&1));
//! assert!(tree.as_sorted_list().is_empty());
//!
//! assert!(tree.insert(3));
//! assert!(tree.insert(1));
//! assert!(tree.insert(2));
//!
//! // Duplicates are rejected.
//! assert!(!tree.insert(2));
//!
//! assert!(tree.contains(&2));
//! assert_eq!(tree.as_sorted_list(), vec![1, 2, 3]);
//! assert_eq!(tree.elements_smaller_than(&3), vec![1, 2]);
//! assert_eq!(tree.to_string(), "1 2 3");
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::io;

use tracing::{debug, trace};

use crate::iter::Iter;
use crate::node::{Link, Node};

/// A Binary Search Tree of distinct values. This can be used for inserting values, checking
/// membership, and reading the values back in sorted order.
pub struct Tree<T> {
    root: Link<T>,
    len: usize,
}

impl<T> Default for Tree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Tree<T> {
    /// Generate a new, empty `Tree`.
    pub fn new() -> Self {
        Self { root: None, len: 0 }
    }

    /// Builds a tree by inserting each value in the order given. Values that are already in the
    /// tree by the time they come up are skipped.
    ///
    /// The same set of values in a different order gives a tree with a different shape. Sorted
    /// input gives a chain.
    ///
    /// # Examples
    ///
    /// ```
    /// use binarytree::tree::Tree;
    ///
    /// let shuffled = Tree::from_values([2, 1, 3]);
    /// let sorted = Tree::from_values([1, 2, 3]);
    ///
    /// assert_eq!(shuffled.as_sorted_list(), sorted.as_sorted_list());
    /// assert_eq!(shuffled.height(), 2);
    /// assert_eq!(sorted.height(), 3);
    /// ```
    pub fn from_values<I>(values: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Ord,
    {
        let mut tree = Self::new();
        tree.extend(values);
        tree
    }

    /// Attempts to add `value` to the tree. Returns `true` if a new node was linked in and
    /// `false` if an equal value was already present, in which case the tree is unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use binarytree::tree::Tree;
    ///
    /// let mut tree = Tree::new();
    ///
    /// assert!(tree.insert(1));
    /// assert!(!tree.insert(1));
    /// assert_eq!(tree.len(), 1);
    /// ```
    pub fn insert(&mut self, value: T) -> bool
    where
        T: Ord,
    {
        let mut link = &mut self.root;
        let mut depth = 0;
        while let Some(node) = link {
            link = match value.cmp(&node.value) {
                Ordering::Less => &mut node.left,
                Ordering::Greater => &mut node.right,
                Ordering::Equal => {
                    trace!(depth, "rejected duplicate value");
                    return false;
                }
            };
            depth += 1;
        }

        *link = Some(Box::new(Node::new(value)));
        self.len += 1;
        trace!(depth, len = self.len, "linked new node");
        true
    }

    /// Whether a value equal to `value` is stored in the tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use binarytree::tree::Tree;
    ///
    /// let tree = Tree::from_values([2, 1, 3]);
    ///
    /// assert!(tree.contains(&3));
    /// assert!(!tree.contains(&42));
    /// ```
    pub fn contains(&self, value: &T) -> bool
    where
        T: Ord,
    {
        let mut current = self.root();
        while let Some(node) = current {
            current = match value.cmp(node.value()) {
                Ordering::Less => node.left(),
                Ordering::Greater => node.right(),
                Ordering::Equal => return true,
            };
        }

        false
    }

    /// Writes the values in ascending order to stdout, separated by spaces and followed by a
    /// newline. An empty tree prints just the newline.
    ///
    /// # Panics
    ///
    /// Like [`println!`], if writing to stdout fails. Use [`Tree::print_to`] to handle the
    /// error instead.
    pub fn print(&self)
    where
        T: fmt::Display,
    {
        println!("{self}");
    }

    /// Writes the same line as [`Tree::print`] to `out`.
    ///
    /// # Examples
    ///
    /// ```
    /// use binarytree::tree::Tree;
    ///
    /// let tree = Tree::from_values([2, 1, 3]);
    /// let mut out = Vec::new();
    /// tree.print_to(&mut out).unwrap();
    ///
    /// assert_eq!(out, b"1 2 3\n");
    /// ```
    pub fn print_to<W>(&self, mut out: W) -> io::Result<()>
    where
        W: io::Write,
        T: fmt::Display,
    {
        writeln!(out, "{self}")
    }

    /// Returns every value in the tree in ascending order.
    ///
    /// # Examples
    ///
    /// ```
    /// use binarytree::tree::Tree;
    ///
    /// let tree = Tree::from_values([6, 9, 4, 13, 17, 1, 10, 5, 7, 3]);
    ///
    /// assert_eq!(tree.as_sorted_list(), vec![1, 3, 4, 5, 6, 7, 9, 10, 13, 17]);
    /// ```
    pub fn as_sorted_list(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }

    /// Returns the values strictly smaller than `value` in ascending order.
    ///
    /// The walk stops at the first value that isn't smaller, so only the part of the tree that
    /// holds qualifying values (plus the path to it) is visited.
    ///
    /// # Examples
    ///
    /// ```
    /// use binarytree::tree::Tree;
    ///
    /// let tree = Tree::from_values([6, 9, 4, 13, 17, 1, 10, 5, 7, 3]);
    ///
    /// assert_eq!(tree.elements_smaller_than(&9), vec![1, 3, 4, 5, 6, 7]);
    /// assert!(tree.elements_smaller_than(&1).is_empty());
    /// ```
    pub fn elements_smaller_than(&self, value: &T) -> Vec<T>
    where
        T: Ord + Clone,
    {
        self.iter().take_while(|v| *v < value).cloned().collect()
    }

    /// An iterator over the values in ascending order.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self.root(), self.len)
    }

    /// The root node, or `None` if the tree is empty.
    pub fn root(&self) -> Option<&Node<T>> {
        self.root.as_deref()
    }

    /// How many values are stored in the tree.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the tree has no values.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// The number of nodes on the longest path from the root to a leaf. An empty tree has a
    /// height of 0 and a single node has a height of 1. A tree built from sorted input has a
    /// height equal to its length.
    pub fn height(&self) -> usize {
        let mut tallest = 0;
        let mut pending: Vec<_> = self.root().map(|n| (n, 1)).into_iter().collect();
        while let Some((node, depth)) = pending.pop() {
            tallest = tallest.max(depth);
            pending.extend(node.left().map(|n| (n, depth + 1)));
            pending.extend(node.right().map(|n| (n, depth + 1)));
        }

        tallest
    }
}

impl<T> Drop for Tree<T> {
    /// Tears the tree down one node at a time. Letting `Box` drop the children would recurse
    /// once per level, which a degenerate tree turns into one frame per value.
    fn drop(&mut self) {
        let mut pending: Vec<Box<Node<T>>> = self.root.take().into_iter().collect();
        while let Some(mut node) = pending.pop() {
            pending.extend(node.left.take());
            pending.extend(node.right.take());
        }
    }
}

/// Steps of the post-order walk used by [`Tree::clone`].
enum CloneStep<'a, T> {
    /// Clone the subtree rooted here (or push an empty link).
    Visit(Option<&'a Node<T>>),
    /// Both children of this node are cloned and on the output stack.
    Assemble(&'a Node<T>),
}

impl<T> Clone for Tree<T>
where
    T: Clone,
{
    /// Copies the tree node for node, keeping its exact shape.
    fn clone(&self) -> Self {
        let mut steps = vec![CloneStep::Visit(self.root())];
        let mut built: Vec<Link<T>> = Vec::new();
        while let Some(step) = steps.pop() {
            match step {
                CloneStep::Visit(None) => built.push(None),
                CloneStep::Visit(Some(node)) => {
                    steps.push(CloneStep::Assemble(node));
                    steps.push(CloneStep::Visit(node.right()));
                    steps.push(CloneStep::Visit(node.left()));
                }
                CloneStep::Assemble(node) => {
                    let right = built.pop().flatten();
                    let left = built.pop().flatten();
                    built.push(Some(Box::new(Node {
                        value: node.value.clone(),
                        left,
                        right,
                    })));
                }
            }
        }

        Self {
            root: built.pop().flatten(),
            len: self.len,
        }
    }
}

/// Formats the values in ascending order separated by single spaces.
impl<T> fmt::Display for Tree<T>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut values = self.iter();
        if let Some(first) = values.next() {
            write!(f, "{first}")?;
            for value in values {
                write!(f, " {value}")?;
            }
        }
        Ok(())
    }
}

impl<T> fmt::Debug for Tree<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<T> Extend<T> for Tree<T>
where
    T: Ord,
{
    fn extend<I>(&mut self, values: I)
    where
        I: IntoIterator<Item = T>,
    {
        let before = self.len;
        let mut rejected = 0;
        for value in values {
            if !self.insert(value) {
                rejected += 1;
            }
        }
        debug!(
            inserted = self.len - before,
            rejected,
            len = self.len,
            "bulk insert finished"
        );
    }
}

impl<T> FromIterator<T> for Tree<T>
where
    T: Ord,
{
    fn from_iter<I>(values: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        Self::from_values(values)
    }
}

impl<T> From<Vec<T>> for Tree<T>
where
    T: Ord,
{
    fn from(values: Vec<T>) -> Self {
        Self::from_values(values)
    }
}

impl<T, const N: usize> From<[T; N]> for Tree<T>
where
    T: Ord,
{
    fn from(values: [T; N]) -> Self {
        Self::from_values(values)
    }
}

impl<'a, T> IntoIterator for &'a Tree<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
