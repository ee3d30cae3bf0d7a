//! Vehicle maintenance records kept in an AVL tree keyed by date.
//!
//! The heart of this crate is [`MaintenanceIndex`], a self-balancing binary search tree that
//! stores one [`Record`] per date and keeps every operation O(log n) regardless of the order
//! dates are added or removed in. Everything else is built on top of it:
//!
//! - [`ModelRegistry`] - one index per vehicle model, created on first insert
//! - [`report`] - the plain-text record lines used for display and export
//! - [`export`] - writes a report to a file (feature `std`)
//! - [`console`] - the interactive menu behind the `maintenance` binary (feature `cli`)
//!
//! # Example
//!
//! ```
//! use maintenance_index::{DeleteOutcome, InsertOutcome, MaintenanceIndex};
//!
//! let mut civic = MaintenanceIndex::new();
//! for day in 1..=7 {
//!     let _ = civic.insert(format!("2024-01-{day:02}"), "Inspection", 25.0);
//! }
//!
//! // Seven ascending dates would make a naive BST seven levels deep.
//! assert_eq!(civic.height(), 3);
//!
//! // Re-inserting a date is rejected rather than overwriting it.
//! assert!(!civic.insert("2024-01-03", "Brakes", 300.0).is_inserted());
//!
//! assert_eq!(civic.delete("2024-01-04"), DeleteOutcome::Deleted);
//! assert!(civic.search("2024-01-04").is_none());
//! assert_eq!(civic.len(), 6);
//! ```
//!
//! # Features
//!
//! - **`no_std` core** - the index, registry and report only need `alloc`
//! - **`std`** - file export with [`thiserror`]-based errors and [`tracing`] diagnostics
//! - **`cli`** (default) - the interactive console and the `maintenance` binary
//!
//! [`thiserror`]: https://docs.rs/thiserror
//! [`tracing`]: https://docs.rs/tracing

#![no_std]
#![forbid(unsafe_code)]
#![forbid(keyword_idents)]
#![forbid(non_ascii_idents)]
#![forbid(unreachable_pub)]
#![warn(clippy::all)]
#![warn(clippy::cargo)]
#![warn(clippy::pedantic)]
// Enable coverage attributes for nightly builds.
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

extern crate alloc;
#[cfg(any(feature = "std", test))]
extern crate std;

mod maintenance_index;
mod outcome;
mod raw;
mod record;
mod registry;

pub mod report;

#[cfg(feature = "cli")]
pub mod console;
#[cfg(feature = "std")]
pub mod export;

pub use maintenance_index::{Iter, MaintenanceIndex};
pub use outcome::{DeleteOutcome, DuplicateKey, InsertOutcome, UpdateOutcome};
pub use record::Record;
pub use registry::ModelRegistry;
