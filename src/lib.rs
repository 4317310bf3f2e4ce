//! An ordered, duplicate-counting multiset based on a binary search tree.
//!
//! [`Set`] keeps one node per distinct item together with the number of
//! times the item has been inserted. After every structural change the
//! tree is rebalanced under a pluggable [`Balance`] discipline: [`Avl`]
//! (the default) restores height balance through rotations, while
//! [`Unbalanced`] leaves the shape to insertion order and serves as a
//! baseline for comparison.
//!
//! # Examples
//!
//! ```
//! let mut words = avltree::Set::new();
//!
//! for word in ["the", "quick", "brown", "fox", "the"] {
//!     words.insert(word);
//! }
//!
//! assert_eq!(words.len(), 4);
//! assert_eq!(words.count(&"the"), 2);
//!
//! let in_order: Vec<&str> = words.iter().cloned().collect();
//! assert_eq!(in_order, ["brown", "fox", "quick", "the"]);
//! ```

mod balance;

pub mod node;
pub mod set;

#[cfg(feature = "ordered_iter")]
mod ordered_iter;

#[cfg(feature = "quickcheck")]
mod quickcheck;

pub use self::balance::{Avl, Balance, Unbalanced};
pub use self::set::Set;
