//! Server crate for the Razzies catalogue.
//!
//! This crate contains the service facade that answers the two public
//! calls, movie listing and producer intervals, on top of a shared
//! catalogue store.

pub mod query;
pub mod service;

pub use query::{ListMoviesQuery, parse_winner_flag};
pub use service::{MovieView, MoviesService};
