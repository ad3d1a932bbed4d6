//! Producer award-interval analysis.
//!
//! This crate provides:
//! - The `WinnerSource` trait, implemented by catalogue snapshots and stores
//! - The interval algorithm: group wins by producer, measure the gaps
//!   between consecutive wins, keep the global shortest and longest
//! - `IntervalAggregator`, which runs the algorithm against a source
//!
//! ## Example Usage
//! ```ignore
//! use awards::IntervalAggregator;
//! use catalogue::CatalogueStore;
//! use std::sync::Arc;
//!
//! let store = Arc::new(CatalogueStore::load_from_file(path)?);
//! let aggregator = IntervalAggregator::new(store);
//!
//! let result = aggregator.producer_intervals();
//! for entry in &result.max {
//!     println!("{}: {} years", entry.producer, entry.interval);
//! }
//! ```

pub mod aggregator;
pub mod intervals;
pub mod traits;

// Re-export main types
pub use aggregator::IntervalAggregator;
pub use intervals::{ProducerInterval, ProducerIntervals, producer_intervals};
pub use traits::WinnerSource;
