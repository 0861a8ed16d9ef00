//! An ordered BST that owns its nodes through `Box`ed child slots. Nothing is ever rebalanced,
//! so the shape of the tree is decided entirely by the order values were inserted in.
//!
//! Every walk over the tree (including `Drop`) uses an explicit stack or queue instead of
//! recursion, so a fully skewed tree can't blow the call stack.
//!
//! # Examples
//!
//! ```
//! use ordered_tree::Tree;
//!
//! let mut tree = Tree::new();
//! assert!(tree.is_empty());
//! assert_eq!(tree.height(), -1);
//!
//! for x in [8, 5, 10, 1, 6, 9] {
//!     tree.insert(x);
//! }
//!
//! assert!(tree.search(&6));
//! assert!(!tree.search(&13));
//! assert_eq!(tree.in_order(), vec![&1, &5, &6, &8, &9, &10]);
//! assert_eq!(tree.height(), 2);
//!
//! // Inserting a duplicate does nothing.
//! tree.insert(8);
//! assert_eq!(tree.in_order().len(), 6);
//! ```

use std::cmp::Ordering;
use std::collections::VecDeque;
use std::fmt;
use std::io;

use tracing::trace;

/// Line emitted by [`Tree::level_lines`] and [`Tree::write_levels`] for an empty tree.
pub const EMPTY_TREE_LINE: &str = "Tree is empty";

type Link<T> = Option<Box<Node<T>>>;

/// One vertex of a [`Tree`]. It holds a value and exclusively owns up to two children.
pub struct Node<T> {
    value: T,
    left: Link<T>,
    right: Link<T>,
}

impl<T> Node<T> {
    fn new(value: T) -> Self {
        Self {
            value,
            left: None,
            right: None,
        }
    }

    /// The value stored in this node.
    pub fn value(&self) -> &T {
        &self.value
    }

    /// The root of the left subtree, whose values are all less than [`Node::value`].
    pub fn left(&self) -> Option<&Node<T>> {
        self.left.as_deref()
    }

    /// The root of the right subtree, whose values are all greater than [`Node::value`].
    pub fn right(&self) -> Option<&Node<T>> {
        self.right.as_deref()
    }
}

/// The orders in which [`Tree::for_each`] can visit values.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Order {
    /// Node, then left subtree, then right subtree.
    Pre,
    /// Left subtree, then node, then right subtree. Yields values in ascending order.
    In,
    /// Left subtree, then right subtree, then node.
    Post,
    /// Breadth first, shallowest depth first, left to right within a depth.
    Level,
}

/// An unbalanced Binary Search Tree of distinct values. This can be used for inserting and
/// searching values and for walking them in the four classic orders.
pub struct Tree<T> {
    root: Link<T>,
}

impl<T: fmt::Debug> fmt::Debug for Node<T> {
    /// Only shows the values of the direct children, never the subtrees below them.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("value", &self.value)
            .field("left", &self.left().map(Node::value))
            .field("right", &self.right().map(Node::value))
            .finish()
    }
}

impl<T: fmt::Debug> fmt::Debug for Tree<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tree").field("levels", &self.levels()).finish()
    }
}

impl<T> Default for Tree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for Tree<T> {
    /// Tears the nodes down children first, the same order as a post-order walk. Nodes are
    /// detached onto a `Vec` first so no drop recurses through a long chain of `Box`es.
    fn drop(&mut self) {
        let mut pending: Vec<Box<Node<T>>> = self.root.take().into_iter().collect();
        let mut detached = Vec::new();
        while let Some(mut node) = pending.pop() {
            pending.extend(node.left.take());
            pending.extend(node.right.take());
            detached.push(node);
        }

        // `detached` is in node, right, left order so popping gives left, right, node.
        while let Some(node) = detached.pop() {
            drop(node);
        }
    }
}

impl<T: PartialEq> PartialEq for Tree<T> {
    fn eq(&self, other: &Self) -> bool {
        trees_equal(self, other)
    }
}

impl<T: Eq> Eq for Tree<T> {}

impl<T: Ord> FromIterator<T> for Tree<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<T: Ord> Extend<T> for Tree<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<T> Tree<T> {
    /// Generates a new, empty `Tree`.
    pub fn new() -> Self {
        Self { root: None }
    }

    /// Read-only access to the root node, `None` when the tree is empty.
    pub fn root(&self) -> Option<&Node<T>> {
        self.root.as_deref()
    }

    /// Returns `true` if the tree holds no values.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Inserts `value` as a new leaf. The descent goes left for smaller values and right for
    /// larger ones until it finds an empty slot. A value equal to one already in the tree is
    /// silently dropped.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(2);
    /// tree.insert(1);
    /// tree.insert(2);
    ///
    /// assert_eq!(tree.pre_order(), vec![&2, &1]);
    /// ```
    pub fn insert(&mut self, value: T)
    where
        T: Ord,
    {
        let mut depth = 0usize;
        let mut slot = &mut self.root;
        while let Some(node) = slot {
            slot = match value.cmp(&node.value) {
                Ordering::Less => &mut node.left,
                Ordering::Greater => &mut node.right,
                Ordering::Equal => {
                    trace!(depth, "discarding duplicate value");
                    return;
                }
            };
            depth += 1;
        }

        *slot = Some(Box::new(Node::new(value)));
        trace!(depth, "attached new node");
    }

    /// Returns `true` if a value equal to `value` is in the tree. Only the path picked out by
    /// comparisons is visited.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::Tree;
    ///
    /// let tree: Tree<_> = [8, 5, 10].into_iter().collect();
    ///
    /// assert!(tree.search(&10));
    /// assert!(!tree.search(&42));
    /// ```
    pub fn search(&self, value: &T) -> bool
    where
        T: Ord,
    {
        let mut current = self.root();
        while let Some(node) = current {
            current = match value.cmp(&node.value) {
                Ordering::Less => node.left(),
                Ordering::Greater => node.right(),
                Ordering::Equal => return true,
            };
        }
        false
    }

    /// Number of edges on the longest root-to-leaf path. A single node has height `0` and an
    /// empty tree has height `-1`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::Tree;
    ///
    /// let mut tree = Tree::new();
    /// assert_eq!(tree.height(), -1);
    ///
    /// tree.insert(1);
    /// assert_eq!(tree.height(), 0);
    ///
    /// tree.extend([2, 3]);
    /// assert_eq!(tree.height(), 2);
    /// ```
    pub fn height(&self) -> isize {
        let mut height = -1;
        self.walk_levels(|_| height += 1);
        height
    }

    /// Visits every value in the given `order`, handing each one to `visit`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::{Order, Tree};
    ///
    /// let tree: Tree<_> = [2, 1, 3].into_iter().collect();
    /// let mut sum = 0;
    /// tree.for_each(Order::Post, |x| sum += x);
    ///
    /// assert_eq!(sum, 6);
    /// ```
    pub fn for_each<'a, F>(&'a self, order: Order, mut visit: F)
    where
        F: FnMut(&'a T),
    {
        match order {
            Order::Pre => self.walk_pre(visit),
            Order::In => self.walk_in(visit),
            Order::Post => self.walk_post(visit),
            Order::Level => self.walk_levels(|level| level.iter().for_each(|v| visit(*v))),
        }
    }

    /// Values in pre-order: node, left subtree, right subtree.
    pub fn pre_order(&self) -> Vec<&T> {
        self.collect(Order::Pre)
    }

    /// Values in in-order, which for a BST is ascending order.
    pub fn in_order(&self) -> Vec<&T> {
        self.collect(Order::In)
    }

    /// Values in post-order: left subtree, right subtree, node.
    pub fn post_order(&self) -> Vec<&T> {
        self.collect(Order::Post)
    }

    /// Values breadth first, starting at the root. Empty for an empty tree.
    pub fn level_order(&self) -> Vec<&T> {
        self.collect(Order::Level)
    }

    /// Values grouped by depth. Index `d` holds every value at depth `d`, left to right.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::Tree;
    ///
    /// let tree: Tree<_> = [8, 5, 10, 1].into_iter().collect();
    ///
    /// assert_eq!(tree.levels(), vec![vec![&8], vec![&5, &10], vec![&1]]);
    /// ```
    pub fn levels(&self) -> Vec<Vec<&T>> {
        let mut levels = Vec::new();
        self.walk_levels(|level| levels.push(level.to_vec()));
        levels
    }

    /// One line per depth, formatted as `depth {d}: {values}` with values separated by single
    /// spaces. An empty tree gives the single line [`EMPTY_TREE_LINE`].
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::Tree;
    ///
    /// let tree: Tree<_> = [8, 5, 10].into_iter().collect();
    /// assert_eq!(tree.level_lines(), vec!["depth 0: 8", "depth 1: 5 10"]);
    ///
    /// let empty: Tree<i32> = Tree::new();
    /// assert_eq!(empty.level_lines(), vec!["Tree is empty"]);
    /// ```
    pub fn level_lines(&self) -> Vec<String>
    where
        T: fmt::Display,
    {
        if self.is_empty() {
            return vec![EMPTY_TREE_LINE.to_string()];
        }

        self.levels()
            .iter()
            .enumerate()
            .map(|(depth, level)| format!("depth {}: {}", depth, join(level)))
            .collect()
    }

    /// Writes [`Tree::level_lines`] to `out`, each followed by a newline.
    pub fn write_levels<W>(&self, out: &mut W) -> io::Result<()>
    where
        T: fmt::Display,
        W: io::Write,
    {
        for line in self.level_lines() {
            writeln!(out, "{}", line)?;
        }
        Ok(())
    }

    /// Writes the values in `order` to `out` on one line, separated by single spaces.
    pub fn write_order<W>(&self, order: Order, out: &mut W) -> io::Result<()>
    where
        T: fmt::Display,
        W: io::Write,
    {
        writeln!(out, "{}", join(&self.collect(order)))
    }

    fn collect(&self, order: Order) -> Vec<&T> {
        let mut values = Vec::new();
        self.for_each(order, |v| values.push(v));
        values
    }

    fn walk_pre<'a>(&'a self, mut visit: impl FnMut(&'a T)) {
        let mut stack: Vec<&Node<T>> = self.root().into_iter().collect();
        while let Some(node) = stack.pop() {
            visit(&node.value);
            stack.extend(node.right());
            stack.extend(node.left());
        }
    }

    fn walk_in<'a>(&'a self, mut visit: impl FnMut(&'a T)) {
        let mut stack = Vec::new();
        let mut current = self.root();
        loop {
            while let Some(node) = current {
                stack.push(node);
                current = node.left();
            }
            let Some(node) = stack.pop() else {
                return;
            };
            visit(&node.value);
            current = node.right();
        }
    }

    fn walk_post<'a>(&'a self, visit: impl FnMut(&'a T)) {
        // Walking node, right, left and reversing gives left, right, node.
        let mut stack: Vec<&Node<T>> = self.root().into_iter().collect();
        let mut reversed = Vec::new();
        while let Some(node) = stack.pop() {
            reversed.push(&node.value);
            stack.extend(node.left());
            stack.extend(node.right());
        }
        reversed.into_iter().rev().for_each(visit);
    }

    /// Breadth first walk handing each depth's values to `visit_level`, shallowest first.
    fn walk_levels<'a>(&'a self, mut visit_level: impl FnMut(&[&'a T])) {
        let mut queue: VecDeque<&Node<T>> = self.root().into_iter().collect();
        let mut level = Vec::new();
        while !queue.is_empty() {
            // Snapshot the size before any of this level's children are enqueued.
            let level_size = queue.len();
            level.clear();
            for _ in 0..level_size {
                let Some(node) = queue.pop_front() else {
                    break;
                };
                level.push(&node.value);
                queue.extend(node.left());
                queue.extend(node.right());
            }
            visit_level(&level);
        }
    }
}

/// Returns `true` if both trees have the same shape and hold equal values at every position.
/// Two trees holding the same values are still different if they branch differently.
///
/// # Examples
///
/// ```
/// use ordered_tree::{trees_equal, Tree};
///
/// let a: Tree<_> = [2, 1, 3].into_iter().collect();
/// let b: Tree<_> = [2, 3, 1].into_iter().collect();
/// let c: Tree<_> = [1, 2, 3].into_iter().collect();
///
/// assert!(trees_equal(&a, &b));
/// assert!(!trees_equal(&a, &c));
/// ```
pub fn trees_equal<T: PartialEq>(a: &Tree<T>, b: &Tree<T>) -> bool {
    let mut stack = vec![(a.root(), b.root())];
    while let Some(pair) = stack.pop() {
        match pair {
            (None, None) => {}
            (Some(x), Some(y)) if x.value == y.value => {
                stack.push((x.right(), y.right()));
                stack.push((x.left(), y.left()));
            }
            _ => return false,
        }
    }
    true
}

fn join<T: fmt::Display>(values: &[&T]) -> String {
    values
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}
