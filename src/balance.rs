//! Balance disciplines for binary search trees.

use crate::node::{self, Link};

/// A discipline for restoring a tree's shape after a structural change.
///
/// [`Set`](crate::Set) invokes the discipline over the whole tree after
/// every insertion or removal that adds or removes a node; duplicate
/// insertions leave the structure untouched and skip the pass.
pub trait Balance {
    /// Re-establishes the discipline's invariant over the subtree rooted
    /// at `link`.
    fn rebalance<T>(link: &mut Link<T>);
}

/// The AVL discipline: every node's subtree heights differ by at most one.
///
/// After each structural change the whole tree is reexamined bottom-up
/// and corrective rotations are applied wherever the recomputed balance
/// metric leaves `[-1, 1]`.
#[derive(Clone, Copy, Debug, Default)]
pub struct Avl;

impl Balance for Avl {
    fn rebalance<T>(link: &mut Link<T>) {
        node::rebalance(link);
    }
}

/// No discipline at all: a plain binary search tree whose shape is
/// determined entirely by insertion order.
///
/// The whole public contract of [`Set`](crate::Set) still holds, but
/// lookups degrade to O(n) on adversarial insertion orders and every
/// node's cached balance metric stays at its initial 0. Useful as a
/// structure and performance baseline.
#[derive(Clone, Copy, Debug, Default)]
pub struct Unbalanced;

impl Balance for Unbalanced {
    fn rebalance<T>(_link: &mut Link<T>) {}
}
