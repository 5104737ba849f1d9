//! A generic 2D search tree.
//!
//! The tree divides its search space into four quadrants, recursively. What a
//! region is, how it subdivides and which values belong to it are all decided
//! by a [`SearchPredicate`] supplied by the caller, so the same tree works
//! for rectangles, circles, grid cells or anything else with a notion of
//! "this value is in here". A value may belong to more than one quadrant.
//!
//! ```
//! use std::collections::BTreeSet;
//! use search_tree_2d::{Quadrants, SearchPredicate, SearchTree};
//!
//! /// Intervals on a line, split into four equal parts.
//! struct Line;
//!
//! impl SearchPredicate<i32, (i32, i32)> for Line {
//!     fn nil_region(&self) -> (i32, i32) {
//!         (0, 0)
//!     }
//!
//!     fn build_region_from_data(&self, values: &BTreeSet<i32>) -> (i32, i32) {
//!         match (values.first(), values.last()) {
//!             (Some(&lo), Some(&hi)) => (lo, hi),
//!             _ => self.nil_region(),
//!         }
//!     }
//!
//!     fn build_quadrants_from_data(&self, &(lo, hi): &(i32, i32), _: &BTreeSet<i32>) -> Quadrants<(i32, i32)> {
//!         let step = ((hi - lo) / 4).max(1);
//!         Quadrants::new(
//!             (lo, lo + step),
//!             (lo + step, lo + 2 * step),
//!             (lo + 2 * step, lo + 3 * step),
//!             (lo + 3 * step, hi),
//!         )
//!     }
//!
//!     fn satisfies(&self, &(lo, hi): &(i32, i32), value: &i32) -> bool {
//!         (lo..=hi).contains(value)
//!     }
//!
//!     fn overlaps(&self, a: &(i32, i32), b: &(i32, i32)) -> bool {
//!         a.0 <= b.1 && b.0 <= a.1
//!     }
//! }
//!
//! let mut tree = SearchTree::new(Line);
//! for value in 0..100 {
//!     tree.add(value);
//! }
//! tree.rebalance();
//!
//! let nearby = tree.nearby_values(&(10, 12));
//! assert!(nearby.contains(&11));
//! assert!(!nearby.contains(&90));
//! ```

mod config;
mod error;
mod list;
mod predicate;
mod search_tree;


/// Receives the nodes and values of a [`SearchTree`] during
/// [`traverse`](SearchTree::traverse).
///
/// Nodes are visited depth first. A node's own values (leaf values, or
/// orphans for a branch) are reported right after the node itself.
pub trait SearchTreeVisitor<V, R> {
    fn value(&mut self, depth: usize, value: &V);
    fn leaf(&mut self, depth: usize, region: &R);
    fn branch(&mut self, depth: usize, region: &R);
}

pub use config::*;
pub use error::*;
pub use predicate::*;
pub use search_tree::*;
