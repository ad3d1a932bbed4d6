//! Catalogue snapshot and the store that hands it out.
//!
//! A `Catalogue` is an immutable, canonically ordered set of movies:
//! year ascending, then title in dictionary order. Ordering happens once,
//! at construction, so both queries only filter and slice.
//!
//! A `CatalogueStore` owns the current snapshot behind an `Arc`. Readers
//! clone the `Arc` once per query and work on that snapshot undisturbed;
//! reseeding swaps in a new `Arc` and never touches the old catalogue.

use crate::collation::collate;
use crate::error::Result;
use crate::parser;
use crate::types::*;
use parking_lot::RwLock;
use rayon::prelude::*;
use std::cmp::Ordering;
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, info, instrument};

/// Canonical listing order: year ascending, then title
pub fn canonical_order(a: &Movie, b: &Movie) -> Ordering {
    a.year
        .cmp(&b.year)
        .then_with(|| collate(&a.title, &b.title))
}

/// Immutable, ordered set of catalogue entries
#[derive(Debug, Clone, Default)]
pub struct Catalogue {
    movies: Vec<Movie>,
}

impl Catalogue {
    /// Creates an empty catalogue
    pub fn new() -> Self {
        Self { movies: Vec::new() }
    }

    /// Build a catalogue from raw records, splitting list fields once
    pub fn from_records(records: Vec<MovieRecord>) -> Self {
        let movies = records.into_par_iter().map(Movie::from_record).collect();
        Self::from_movies(movies)
    }

    /// Build a catalogue from already-split movies
    pub fn from_movies(mut movies: Vec<Movie>) -> Self {
        movies.par_sort_by(canonical_order);
        Self { movies }
    }

    /// Load and order a movie list file
    #[instrument]
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let records = parser::parse_movie_list(path)?;
        let catalogue = Self::from_records(records);
        info!(
            "Loaded {} movies ({} winners) into the catalogue",
            catalogue.len(),
            catalogue.winners().count()
        );
        Ok(catalogue)
    }

    pub fn len(&self) -> usize {
        self.movies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }

    /// Every movie, in canonical order
    pub fn movies(&self) -> &[Movie] {
        &self.movies
    }

    /// Filter, then paginate.
    ///
    /// `total` counts all matches; an out-of-range page yields no items
    /// rather than an error.
    pub fn find_movies(&self, filters: &MovieFilters, pagination: &Pagination) -> Page<Movie> {
        let window = pagination.resolve();
        let matching: Vec<&Movie> = self
            .movies
            .iter()
            .filter(|movie| filters.matches(movie))
            .collect();

        let items: Vec<Movie> = matching
            .iter()
            .skip(window.offset)
            .take(window.per_page)
            .map(|movie| (*movie).clone())
            .collect();

        debug!(
            ?filters,
            page = window.page,
            per_page = window.per_page,
            total = matching.len(),
            returned = items.len(),
            "find_movies"
        );

        Page {
            total: matching.len(),
            page: window.page,
            per_page: window.per_page,
            items,
        }
    }

    /// Borrowing iterator over winners, in canonical order
    pub fn winners(&self) -> impl Iterator<Item = &Movie> {
        self.movies.iter().filter(|movie| movie.winner)
    }

    /// All winners, in canonical order, without pagination
    pub fn find_winner_movies(&self) -> Vec<Movie> {
        self.winners().cloned().collect()
    }
}

/// Shared owner of the current catalogue snapshot
#[derive(Debug, Default)]
pub struct CatalogueStore {
    current: RwLock<Arc<Catalogue>>,
}

impl CatalogueStore {
    pub fn new(catalogue: Catalogue) -> Self {
        Self {
            current: RwLock::new(Arc::new(catalogue)),
        }
    }

    /// Build a store seeded from a movie list file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        Ok(Self::new(Catalogue::load_from_file(path)?))
    }

    /// The catalogue as of now. Later replacements do not affect it.
    pub fn snapshot(&self) -> Arc<Catalogue> {
        self.current.read().clone()
    }

    /// Atomically swap in a new catalogue, returning the previous one
    pub fn replace(&self, catalogue: Catalogue) -> Arc<Catalogue> {
        let next = Arc::new(catalogue);
        let previous = std::mem::replace(&mut *self.current.write(), next);
        info!(
            previous = previous.len(),
            current = self.current.read().len(),
            "Catalogue snapshot replaced"
        );
        previous
    }

    /// Reload from a file; the current snapshot is kept if loading fails
    pub fn reload_from_file(&self, path: &Path) -> Result<Arc<Catalogue>> {
        let catalogue = Catalogue::load_from_file(path)?;
        Ok(self.replace(catalogue))
    }

    pub fn find_movies(&self, filters: &MovieFilters, pagination: &Pagination) -> Page<Movie> {
        self.snapshot().find_movies(filters, pagination)
    }

    pub fn find_winner_movies(&self) -> Vec<Movie> {
        self.snapshot().find_winner_movies()
    }
}
