//! A Fenwick tree (binary indexed tree) over an arbitrary inclusive integer range.
//!
//! [`Tree`] keeps a conceptual array of `i64` values indexed by `[min, max]`, where `min` may
//! be any integer (including negative ones), and supports two primitives in `O(log n)`:
//! - point update: [`Tree::add`]
//! - prefix sum: [`Tree::prefix`]
//!
//! Range sums, single-value reads and absolute writes ([`Tree::range`], [`Tree::value`],
//! [`Tree::set`]) are derived from those.
//!
//! The tree is a single flat array plus an offset. There are no node objects: every step
//! between blocks is computed from the lowest set bit of the internal position.
//!
//! ```
//! use fenwick::Tree;
//!
//! let mut t = Tree::new(-2, 2);
//! t.add(-2, 5);
//! t.add(1, 3);
//! assert_eq!(t.prefix(0), 5);
//! assert_eq!(t.range(-1, 2), 3);
//! t.set(1, 10);
//! assert_eq!(t.total(), 15);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod tree;
mod types;


pub use tree::Tree;
pub use types::Bounds;
