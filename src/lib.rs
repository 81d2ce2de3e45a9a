//! A binary min-heap engine that works over any storage able to compare, swap,
//! append and truncate its own elements.
//!
//! The algorithms in [`heap`] never own or allocate elements. They drive a
//! caller-supplied collection through the [`HeapStorage`] capability trait, so
//! the same engine can order a plain `Vec`, a slab of handles, or a structure
//! whose elements record their own position in the heap.
//!
//! [`VecHeap`] is a ready-made owner of a `Vec` that sorts according to a
//! runtime [`TotalOrder`] rather than the [`Ord`] trait.
//!
//! ```
//! use siftheap::{heap, HeapStorage};
//!
//! struct Jobs(Vec<(u32, &'static str)>);
//!
//! impl HeapStorage for Jobs {
//!     type Item = (u32, &'static str);
//!
//!     fn len(&self) -> usize {
//!         self.0.len()
//!     }
//!     fn less(&self, i: usize, j: usize) -> bool {
//!         self.0[i].0 < self.0[j].0
//!     }
//!     fn swap(&mut self, i: usize, j: usize) {
//!         self.0.swap(i, j)
//!     }
//!     fn push_raw(&mut self, item: Self::Item) {
//!         self.0.push(item)
//!     }
//!     fn pop_raw(&mut self) -> Option<Self::Item> {
//!         self.0.pop()
//!     }
//! }
//!
//! let mut jobs = Jobs(vec![(3, "lint"), (1, "fetch"), (2, "build")]);
//! heap::init(&mut jobs);
//! heap::push(&mut jobs, (0, "lock"));
//!
//! assert_eq!(heap::pop(&mut jobs), Ok((0, "lock")));
//! assert_eq!(heap::pop(&mut jobs), Ok((1, "fetch")));
//! assert_eq!(jobs.len(), 2);
//! ```
#![cfg_attr(not(any(feature = "std", test)), no_std)]
#![cfg_attr(feature = "error_in_core", feature(error_in_core))]
// documentation controls
#![cfg_attr(docsrs, feature(doc_auto_cfg, doc_cfg))]
#![deny(missing_docs)]
#![cfg_attr(
    test,
    allow(
        clippy::bool_assert_comparison,
        clippy::needless_range_loop,
        clippy::redundant_clone,
        clippy::uninlined_format_args,
        clippy::useless_vec,
    )
)]

extern crate alloc;

#[macro_use]
mod polyfill;

pub mod default;
mod error;
pub mod heap;
mod order;
pub mod vec_heap;

pub use default::OrdTotalOrder;
pub use error::HeapError;
pub use heap::HeapStorage;
pub use order::{CmpFn, Reversed, TotalOrder};
pub use vec_heap::VecHeap;

#[cfg(test)]
mod testing;
