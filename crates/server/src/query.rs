//! Lenient conversion of raw listing parameters.
//!
//! Values arrive as strings (query string, CLI flags). Nothing here is
//! rejected: a value that cannot be understood is treated as absent, and
//! the catalogue then applies its own defaults.

use catalogue::{MovieFilters, Pagination, Year};
use serde::Deserialize;

/// Raw listing parameters, exactly as received
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListMoviesQuery {
    pub year: Option<String>,
    pub winner: Option<String>,
    pub page: Option<String>,
    pub per_page: Option<String>,
}

impl ListMoviesQuery {
    pub fn filters(&self) -> MovieFilters {
        MovieFilters {
            year: self.year.as_deref().and_then(parse_integer::<Year>),
            winner: self.winner.as_deref().and_then(parse_winner_flag),
        }
    }

    pub fn pagination(&self) -> Pagination {
        Pagination {
            page: self.page.as_deref().and_then(parse_integer::<i64>),
            per_page: self.per_page.as_deref().and_then(parse_integer::<i64>),
        }
    }
}

/// `true/1/yes` and `false/0/no`, trimmed and case-insensitive
pub fn parse_winner_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Some(true),
        "false" | "0" | "no" => Some(false),
        _ => None,
    }
}

fn parse_integer<T: std::str::FromStr>(value: &str) -> Option<T> {
    value.trim().parse().ok()
}
