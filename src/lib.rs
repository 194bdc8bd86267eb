#![warn(rustdoc::missing_crate_level_docs)]
#![deny(rustdoc::invalid_codeblock_attributes)]
#![warn(missing_docs)]
#![warn(rustdoc::broken_intra_doc_links)]
#![warn(rustdoc::private_intra_doc_links)]

//! # kdrange
//!
//! An incrementally-built k-d tree for radius-bounded range queries.
//!
//! Points carry an opaque id and a fixed number of float co-ordinates. The dimensionality
//! is a const generic shared by the tree, its points and its queries, so mixing
//! dimensionalities is a compile error rather than a runtime check.
//!
//! The tree is created from a single root point and grows by one node per insertion. It is
//! never rebalanced. Range queries walk it with an explicit stack and skip every subtree
//! whose splitting hyperplane lies further from the query than the search radius.
//!
//! ## Installation
//!
//! Add `kdrange` to `Cargo.toml`
//! ```toml
//! [dependencies]
//! kdrange = "0.1"
//! ```
//!
//! ## Usage
//! ```rust
//! use kdrange::{KdTree, Point};
//!
//! let mut kdtree: KdTree<f32, u32, 2> = KdTree::new(Point::new(1, [0.3, 0.5]));
//!
//! kdtree.insert(Point::new(2, [-0.3, 0.5]));
//! kdtree.insert(Point::new(3, [0.9, 1.5]));
//! kdtree.insert(Point::new(4, [1.7, 1.5]));
//! kdtree.insert(Point::new(5, [3.3, 0.95]));
//! kdtree.insert(Point::new(6, [0.03, -0.5]));
//!
//! assert_eq!(kdtree.size(), 6);
//!
//! let mut ids = kdtree.query_ids(&[1.3, 0.5], 1.1);
//! ids.sort();
//! assert_eq!(ids, vec![1, 3, 4]);
//!
//! assert!(kdtree.query(&[1.3, 0.5], -1.0).is_empty());
//! ```
//!
//! ## Feature flags
//!
//! * `tracing` (default): emits `TRACE`-level events for insertions and range queries via
//!   the [`tracing`](https://docs.rs/tracing) crate.
//! * `test_utils`: exposes the random data and brute-force search helpers used by the benches.

pub mod distance_metric;
pub mod float;
pub mod neighbour;
#[doc(hidden)]
#[cfg(any(test, feature = "test_utils"))]
pub mod test_utils;
pub mod types;

pub use crate::float::distance::{Manhattan, SquaredEuclidean};
pub use crate::float::kdtree::KdTree;
pub use crate::float::point::Point;
pub use crate::neighbour::Neighbour;
