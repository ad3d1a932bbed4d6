//! Core traits for the interval aggregator.
//!
//! The aggregator never reaches into a catalogue directly; it asks a
//! `WinnerSource` for the winner set instead.

use catalogue::{Catalogue, CatalogueStore, Movie};

/// Anything that can hand out the current set of winning movies.
///
/// ## Design Note
/// - `Send + Sync` lets one source back many concurrent aggregations
/// - Each call must read from a single consistent snapshot
pub trait WinnerSource: Send + Sync {
    /// Returns the name of this source (for logging/debugging)
    fn name(&self) -> &str;

    /// All winning movies, year ascending then title
    fn winner_movies(&self) -> Vec<Movie>;
}

impl WinnerSource for Catalogue {
    fn name(&self) -> &str {
        "Catalogue"
    }

    fn winner_movies(&self) -> Vec<Movie> {
        self.find_winner_movies()
    }
}

impl WinnerSource for CatalogueStore {
    fn name(&self) -> &str {
        "CatalogueStore"
    }

    fn winner_movies(&self) -> Vec<Movie> {
        // One snapshot per call
        self.find_winner_movies()
    }
}
