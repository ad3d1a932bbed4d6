//! # Movies Service
//!
//! The facade the outside world talks to. It answers:
//! 1. `list_movies`: filtered, paginated catalogue listing
//! 2. `producer_intervals`: shortest and longest gaps between a producer's wins
//!
//! and lets the catalogue be reseeded without disturbing calls in flight.
//! Every call works on one catalogue snapshot; the service itself holds no
//! mutable state, so clones can be shared freely across tasks.

use std::path::Path;
use std::sync::Arc;
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{info, instrument};

use awards::{IntervalAggregator, ProducerIntervals};
use catalogue::{Catalogue, CatalogueStore, Movie, MovieFilters, Page, Pagination};

use crate::query::ListMoviesQuery;

/// A movie as returned by the listing call.
///
/// Studios and producers are already split into lists.
pub type MovieView = Movie;

/// Main service answering catalogue queries
#[derive(Clone)]
pub struct MoviesService {
    store: Arc<CatalogueStore>,
    aggregator: IntervalAggregator,
}

impl MoviesService {
    /// Create a service over an already-loaded store
    pub fn new(store: Arc<CatalogueStore>) -> Self {
        let aggregator = IntervalAggregator::new(store.clone());
        Self { store, aggregator }
    }

    /// Load the movie list at `path` and serve it
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let store = CatalogueStore::load_from_file(path)
            .with_context(|| format!("Failed to load movie list from {}", path.display()))?;
        Ok(Self::new(Arc::new(store)))
    }

    /// The underlying store
    pub fn store(&self) -> &Arc<CatalogueStore> {
        &self.store
    }

    /// Filtered, paginated listing, year ascending then title
    #[instrument(skip(self))]
    pub fn list_movies(&self, filters: &MovieFilters, pagination: &Pagination) -> Page<MovieView> {
        info!(?filters, ?pagination, "Listing movies");
        let start = Instant::now();
        let page = self.store.find_movies(filters, pagination);
        info!(
            total = page.total,
            page = page.page,
            per_page = page.per_page,
            returned = page.items.len(),
            duration_ms = start.elapsed().as_millis() as u64,
            "Listed movies"
        );
        page
    }

    /// Listing from raw parameters; unusable values are ignored
    pub fn list_movies_from_query(&self, query: &ListMoviesQuery) -> Page<MovieView> {
        self.list_movies(&query.filters(), &query.pagination())
    }

    /// Shortest and longest intervals between consecutive producer wins
    #[instrument(skip(self))]
    pub fn producer_intervals(&self) -> ProducerIntervals {
        info!("Computing producer intervals");
        let start = Instant::now();
        let result = self.aggregator.producer_intervals();
        info!(
            min = result.min.len(),
            max = result.max.len(),
            duration_ms = start.elapsed().as_millis() as u64,
            "Computed producer intervals"
        );
        result
    }

    /// Replace the catalogue with the contents of `path`.
    ///
    /// Calls already running finish on the old snapshot. On failure the
    /// current catalogue stays in place. Returns the new movie count.
    #[instrument(skip(self))]
    pub fn reload_from_file(&self, path: &Path) -> Result<usize> {
        let catalogue = Catalogue::load_from_file(path)
            .with_context(|| format!("Failed to reload movie list from {}", path.display()))?;
        let count = catalogue.len();
        self.store.replace(catalogue);
        info!(movies = count, "Catalogue reloaded");
        Ok(count)
    }
}
