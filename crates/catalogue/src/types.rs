//! Core domain types for the award catalogue.
//!
//! This module defines the record shapes and the query inputs/outputs
//! used throughout the workspace:
//! - `MovieRecord` is a row exactly as it arrives from the movie list
//! - `Movie` is the canonical in-memory form, with studio and producer
//!   lists already split
//! - `MovieFilters`, `Pagination` and `Page<T>` describe a listing query

use serde::{Deserialize, Serialize};

// =============================================================================
// Type Aliases
// =============================================================================

/// Award-ceremony year
pub type Year = i32;

/// Page number used when none (or an unusable one) is requested
pub const DEFAULT_PAGE: usize = 1;

/// Hard ceiling on page size, also the default page size
pub const MAX_PER_PAGE: usize = 50;

// =============================================================================
// Record Types
// =============================================================================

/// One catalogue entry as supplied by the loader.
///
/// `studios` and `producers` are delimited lists held in a single string
/// ("A, B and C"). The catalogue splits them once when the record enters
/// the store, see [`Movie::from_record`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovieRecord {
    pub year: Year,
    pub title: String,
    pub studios: String,
    pub producers: String,
    pub winner: bool,
}

impl MovieRecord {
    /// Convenience constructor, mostly for seeding tests
    pub fn new(
        year: Year,
        title: impl Into<String>,
        studios: impl Into<String>,
        producers: impl Into<String>,
        winner: bool,
    ) -> Self {
        Self {
            year,
            title: title.into(),
            studios: studios.into(),
            producers: producers.into(),
            winner,
        }
    }
}

/// Canonical, immutable catalogue entry.
///
/// This is also the listing view: it serializes as
/// `{year, title, studios: [..], producers: [..], winner}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Movie {
    pub year: Year,
    pub title: String,
    /// Individual studio names, in source order
    pub studios: Vec<String>,
    /// Individual producer names, in source order; each one is a grouping key
    pub producers: Vec<String>,
    pub winner: bool,
}

impl Movie {
    /// Build the canonical form of a raw record, splitting its list fields
    pub fn from_record(record: MovieRecord) -> Self {
        Self {
            year: record.year,
            studios: crate::split::split_value_list(&record.studios),
            producers: crate::split::split_value_list(&record.producers),
            title: record.title,
            winner: record.winner,
        }
    }
}

impl From<MovieRecord> for Movie {
    fn from(record: MovieRecord) -> Self {
        Movie::from_record(record)
    }
}

// =============================================================================
// Query Types
// =============================================================================

/// Optional exact-match filters, combined with logical AND.
///
/// `None` places no constraint on that field.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovieFilters {
    pub year: Option<Year>,
    pub winner: Option<bool>,
}

impl MovieFilters {
    /// No constraints at all
    pub fn none() -> Self {
        Self::default()
    }

    pub fn with_year(mut self, year: Year) -> Self {
        self.year = Some(year);
        self
    }

    pub fn with_winner(mut self, winner: bool) -> Self {
        self.winner = Some(winner);
        self
    }

    /// Does `movie` satisfy every present filter?
    pub fn matches(&self, movie: &Movie) -> bool {
        self.year.is_none_or(|year| movie.year == year)
            && self.winner.is_none_or(|winner| movie.winner == winner)
    }
}

/// Requested page window, as supplied by the caller.
///
/// Values are kept raw (signed, optional) on purpose: anything that is not
/// a positive integer silently falls back to the default when resolved.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub page: Option<i64>,
    pub per_page: Option<i64>,
}

impl Pagination {
    pub fn new(page: i64, per_page: i64) -> Self {
        Self {
            page: Some(page),
            per_page: Some(per_page),
        }
    }

    /// Apply the defaulting and clamping rules.
    ///
    /// - page: 1-based, non-positive or absent resets to 1
    /// - per_page: non-positive or absent resets to 50, then clamped to 50
    pub fn resolve(&self) -> ResolvedPagination {
        let page = positive(self.page).unwrap_or(DEFAULT_PAGE);
        let per_page = positive(self.per_page)
            .unwrap_or(MAX_PER_PAGE)
            .min(MAX_PER_PAGE);
        ResolvedPagination {
            page,
            per_page,
            offset: (page - 1).saturating_mul(per_page),
        }
    }
}

fn positive(value: Option<i64>) -> Option<usize> {
    value
        .filter(|v| *v > 0)
        .map(|v| usize::try_from(v).unwrap_or(usize::MAX))
}

/// A pagination request after defaults and the ceiling were applied
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedPagination {
    pub page: usize,
    pub per_page: usize,
    /// Number of matching records to skip: `(page - 1) * per_page`
    pub offset: usize,
}

/// One page of a listing.
///
/// `total` counts every match before pagination; `items` may be empty when
/// the page lies past the end.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub total: usize,
    pub page: usize,
    pub per_page: usize,
    pub items: Vec<T>,
}

impl<T> Page<T> {
    /// Convert every item, keeping the page metadata
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            total: self.total,
            page: self.page,
            per_page: self.per_page,
            items: self.items.into_iter().map(f).collect(),
        }
    }
}
