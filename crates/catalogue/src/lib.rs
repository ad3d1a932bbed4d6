//! # Catalogue Crate
//!
//! This crate holds the award movie catalogue and answers listing queries.
//!
//! ## Main Components
//!
//! - **types**: Record shapes and query types (MovieRecord, Movie, MovieFilters, Pagination, Page)
//! - **parser**: Parse the semicolon-separated movie list into records
//! - **split**: Split "A, B and C" list fields into names
//! - **collation**: Dictionary-order string comparison for titles and names
//! - **store**: Ordered catalogue snapshots and the store that swaps them
//! - **error**: Error types for catalogue loading
//!
//! ## Example Usage
//!
//! ```ignore
//! use catalogue::{CatalogueStore, MovieFilters, Pagination};
//! use std::path::Path;
//!
//! let store = CatalogueStore::load_from_file(Path::new("data/movielist.csv"))?;
//!
//! // Second page of 1980 nominees, ten per page
//! let page = store.find_movies(
//!     &MovieFilters::none().with_year(1980),
//!     &Pagination::new(2, 10),
//! );
//! println!("{} of {} movies", page.items.len(), page.total);
//!
//! // Every winner, year then title
//! let winners = store.find_winner_movies();
//! ```

pub mod collation;
pub mod error;
pub mod parser;
pub mod split;
pub mod store;
pub mod types;

// Re-export commonly used types for convenience
pub use collation::collate;
pub use error::{CatalogueError, Result};
pub use split::split_value_list;
pub use store::{Catalogue, CatalogueStore, canonical_order};
pub use types::{
    // Type aliases and limits
    Year,
    DEFAULT_PAGE,
    MAX_PER_PAGE,
    // Records
    Movie,
    MovieRecord,
    // Queries
    MovieFilters,
    Page,
    Pagination,
    ResolvedPagination,
};
