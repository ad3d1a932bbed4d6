//! The IntervalAggregator ties a winner source to the interval algorithm.

use crate::intervals::{self, ProducerIntervals};
use crate::traits::WinnerSource;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, instrument};

/// Computes producer award intervals on demand.
///
/// Nothing is cached: every call reads the source's current winners, so a
/// reseeded catalogue is picked up by the next call.
///
/// ## Usage
/// ```ignore
/// let store = Arc::new(CatalogueStore::load_from_file(path)?);
/// let aggregator = IntervalAggregator::new(store);
///
/// let result = aggregator.producer_intervals();
/// ```
#[derive(Clone)]
pub struct IntervalAggregator {
    source: Arc<dyn WinnerSource>,
}

impl IntervalAggregator {
    /// Create a new aggregator reading winners from `source`
    pub fn new(source: Arc<dyn WinnerSource>) -> Self {
        Self { source }
    }

    /// Min and max producer intervals over the current winner set
    #[instrument(skip(self), fields(source = self.source.name()))]
    pub fn producer_intervals(&self) -> ProducerIntervals {
        let start = Instant::now();

        let winners = self.source.winner_movies();
        let result = intervals::producer_intervals(&winners);

        debug!(
            winners = winners.len(),
            min = result.min.len(),
            max = result.max.len(),
            elapsed = ?start.elapsed(),
            "Computed producer intervals"
        );
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalogue::{Catalogue, CatalogueStore, MovieRecord};

    fn seed() -> Vec<MovieRecord> {
        vec![
            MovieRecord::new(1990, "The Adventures of Ford Fairlane", "20th Century Fox", "Steven Perry and Joel Silver", true),
            MovieRecord::new(1991, "Hudson Hawk", "TriStar Pictures", "Joel Silver", true),
            MovieRecord::new(1992, "Shining Through", "20th Century Fox", "Carol Baum and Howard Rosenman", false),
        ]
    }

    #[test]
    fn test_empty_source() {
        let aggregator = IntervalAggregator::new(Arc::new(Catalogue::new()));
        let result = aggregator.producer_intervals();
        assert!(result.min.is_empty());
        assert!(result.max.is_empty());
    }

    #[test]
    fn test_reads_current_snapshot() {
        let store = Arc::new(CatalogueStore::new(Catalogue::new()));
        let aggregator = IntervalAggregator::new(store.clone());
        assert!(aggregator.producer_intervals().is_empty());

        store.replace(Catalogue::from_records(seed()));

        let result = aggregator.producer_intervals();
        assert_eq!(result.min.len(), 1);
        assert_eq!(result.min[0].producer, "Joel Silver");
        assert_eq!(result.min[0].interval, 1);
    }

    #[test]
    fn test_repeated_calls_are_identical() {
        let aggregator = IntervalAggregator::new(Arc::new(Catalogue::from_records(seed())));
        assert_eq!(aggregator.producer_intervals(), aggregator.producer_intervals());
    }
}
