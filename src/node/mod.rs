//! The owned representation of a tree: nodes, links, and the algorithms
//! that rearrange them.
//!
//! A subtree is a [`Link`], an optional exclusively-owned boxed [`Node`].
//! Mutating operations are free functions over links, so a rotation can
//! take a subtree apart and hand back a new owning root without ever
//! aliasing a child.

mod iter;

pub(crate) mod show;


use compare::Compare;
use std::cmp::max;
use std::cmp::Ordering::*;
use std::mem::swap;

pub(crate) use self::iter::Iter;

/// An optional, exclusively owned subtree.
pub type Link<T> = Option<Box<Node<T>>>;

/// A single tree node: an item, its occurrence count, a cached balance
/// metric, and ownership of up to two children.
#[derive(Clone)]
pub struct Node<T> {
    left: Link<T>,
    right: Link<T>,
    item: T,
    count: usize,
    balance: i64,
}

impl<T> Node<T> {
    fn new(item: T) -> Self {
        Node { left: None, right: None, item, count: 1, balance: 0 }
    }

    /// Returns a reference to the node's item.
    pub fn item(&self) -> &T { &self.item }

    /// Returns the number of times the node's item has been inserted.
    pub fn count(&self) -> usize { self.count }

    /// Returns the node's cached balance metric.
    ///
    /// The cached value is only refreshed by [`rebalance`]; between passes
    /// it may be stale.
    pub fn balance(&self) -> i64 { self.balance }

    /// Returns a reference to the node's left child, if any.
    pub fn left(&self) -> Option<&Node<T>> { self.left.as_deref() }

    /// Returns a reference to the node's right child, if any.
    pub fn right(&self) -> Option<&Node<T>> { self.right.as_deref() }
}

pub(crate) fn insert<T, C>(link: &mut Link<T>, cmp: &C, item: T) -> bool
    where C: Compare<T> {

    match *link {
        None => {
            *link = Some(Box::new(Node::new(item)));
            true
        }
        Some(ref mut node) => match cmp.compare(&item, &node.item) {
            Equal => {
                node.count += 1;
                false
            }
            Less => insert(&mut node.left, cmp, item),
            Greater => insert(&mut node.right, cmp, item),
        },
    }
}

pub(crate) fn get<'a, T, C, Q: ?Sized>(mut link: &'a Link<T>, cmp: &C, item: &Q)
    -> Option<&'a Node<T>> where C: Compare<Q, T> {

    while let Some(node) = link.as_deref() {
        match cmp.compare(item, &node.item) {
            Equal => return Some(node),
            Less => link = &node.left,
            Greater => link = &node.right,
        }
    }

    None
}

pub(crate) fn remove<T, C, Q: ?Sized>(link: &mut Link<T>, cmp: &C, item: &Q) -> bool
    where C: Compare<Q, T> {

    match *link {
        None => false,
        Some(ref mut node) if cmp.compares_lt(item, &node.item) =>
            remove(&mut node.left, cmp, item),
        Some(ref mut node) if cmp.compares_gt(item, &node.item) =>
            remove(&mut node.right, cmp, item),
        _ => {
            delete(link);
            true
        }
    }
}

// Right-child promotion: the removed node's right subtree takes its place
// wholesale, with the old left subtree reattached under that subtree's
// leftmost node. The node is deleted even if its count is above one.
fn delete<T>(link: &mut Link<T>) {
    let node = match link.take() {
        None => return,
        Some(node) => *node,
    };

    *link = match (node.left, node.right) {
        (None, right) => right,
        (left, None) => left,
        (left, Some(mut right)) => {
            {
                let mut attach = &mut right;
                while attach.left.is_some() {
                    attach = attach.left.as_mut().unwrap();
                }
                attach.left = left;
            }
            Some(right)
        }
    };
}

/// Returns the subtree's height counted in nodes: 0 for an empty link, 1
/// for a leaf. Recomputed from scratch on every call.
pub fn height<T>(link: &Link<T>) -> usize {
    match *link {
        None => 0,
        Some(ref node) => 1 + max(height(&node.left), height(&node.right)),
    }
}

/// Returns the node's balance metric: left subtree height minus right
/// subtree height.
pub fn balance<T>(node: &Node<T>) -> i64 {
    height(&node.left) as i64 - height(&node.right) as i64
}

fn left_heavy<T>(node: &Node<T>) -> bool {
    height(&node.left) > height(&node.right)
}

fn right_heavy<T>(node: &Node<T>) -> bool {
    height(&node.right) > height(&node.left)
}

// Accumulates each node's own subtree height, counted in edges.
pub(crate) fn sum_heights<T>(link: &Link<T>, total: &mut usize) {
    if let Some(ref node) = *link {
        sum_heights(&node.left, total);
        *total += height(link) - 1;
        sum_heights(&node.right, total);
    }
}

/// Recomputes every cached balance metric in the subtree bottom-up,
/// rotating wherever the metric leaves `[-1, 1]`.
///
/// The pass deliberately visits the whole subtree rather than only the
/// path touched by the last mutation, so its cost is O(n) per call.
pub fn rebalance<T>(link: &mut Link<T>) {
    if let Some(ref mut node) = *link {
        settle(node);
    }
}

fn settle<T>(node: &mut Box<Node<T>>) {
    rebalance(&mut node.left);
    rebalance(&mut node.right);
    node.balance = balance(node);

    if node.balance > 1 {
        rotate_right(node);
    } else if node.balance < -1 {
        rotate_left(node);
    }
}

/// Re-roots the subtree at its right child.
///
/// A right child that is itself left-heavy is first rotated right, which
/// resolves the Right-Left double-rotation case before the single rotation
/// proceeds.
///
/// # Panics
///
/// Panics if the subtree has no right child.
pub fn rotate_left<T>(node: &mut Box<Node<T>>) {
    if let Some(ref mut right) = node.right {
        if left_heavy(right) {
            rotate_right(right);
        }
    }

    let mut save = node.right.take().expect("left rotation requires a right child");
    swap(&mut node.right, &mut save.left); // save.left now None
    swap(node, &mut save);
    node.left = Some(save);

    settle(node);
}

/// Re-roots the subtree at its left child.
///
/// A left child that is itself right-heavy is first rotated left, which
/// resolves the Left-Right double-rotation case before the single rotation
/// proceeds.
///
/// # Panics
///
/// Panics if the subtree has no left child.
pub fn rotate_right<T>(node: &mut Box<Node<T>>) {
    if let Some(ref mut left) = node.left {
        if right_heavy(left) {
            rotate_left(left);
        }
    }

    let mut save = node.left.take().expect("right rotation requires a left child");
    swap(&mut node.left, &mut save.right); // save.right now None
    swap(node, &mut save);
    node.right = Some(save);

    settle(node);
}

pub(crate) fn in_order<'a, T, F>(link: &'a Link<T>, visit: &mut F)
    where F: FnMut(&'a T, i64, usize) {

    if let Some(ref node) = *link {
        in_order(&node.left, visit);
        visit(&node.item, node.balance, node.count);
        in_order(&node.right, visit);
    }
}

pub(crate) fn pre_order<'a, T, F>(link: &'a Link<T>, visit: &mut F)
    where F: FnMut(&'a T, i64, usize) {

    if let Some(ref node) = *link {
        visit(&node.item, node.balance, node.count);
        pre_order(&node.left, visit);
        pre_order(&node.right, visit);
    }
}

pub(crate) fn post_order<'a, T, F>(link: &'a Link<T>, visit: &mut F)
    where F: FnMut(&'a T, i64, usize) {

    if let Some(ref node) = *link {
        post_order(&node.left, visit);
        post_order(&node.right, visit);
        visit(&node.item, node.balance, node.count);
    }
}
