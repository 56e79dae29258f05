//! # dyn_list
//!
//! A growable array that owns a fixed-size slot buffer and resizes it on
//! demand, with predicate-driven bulk removal.
//!
//! ```rust
//! use dyn_list::List;
//!
//! let mut list = List::from(vec![5, 10, 5, 2, 8, 8, 20, 11, 50, 36, 5, 8, 12]);
//! assert_eq!(list.remove_all(|v| *v > 10), 5);
//!
//! assert_eq!(list.len(), 8);
//! assert_eq!(list.capacity(), 13);
//! assert_eq!(list.to_string(), "{ 5, 10, 5, 2, 8, 8, 5, 8 }");
//! ```
//!
//! ## Growth
//!
//! ```rust
//! use dyn_list::List;
//!
//! let mut list = List::new();
//! assert_eq!(list.capacity(), 0);
//!
//! list.push(1).unwrap(); // 0 -> 4
//! assert_eq!(list.capacity(), 4);
//!
//! for v in 2..=5 {
//!     list.push(v).unwrap(); // 4 -> 8 on the fifth push
//! }
//! assert_eq!(list.capacity(), 8);
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

pub mod error;
pub mod list;
pub mod policy;
#[doc(hidden)]
pub mod storage;

pub use error::{ErrorKind, ListError, Result};
pub use list::List;
