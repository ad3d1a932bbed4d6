//! Parser for the award movie list.
//!
//! Format: semicolon-separated, one header row, then
//! `year;title;studios;producers;winner`
//!
//! ```text
//! year;title;studios;producers;winner
//! 1980;Can't Stop the Music;Associated Film Distribution;Allan Carr;yes
//! 1980;Cruising;Lorimar Productions, United Artists;Jerry Weintraub;
//! ```
//!
//! The trailing `winner` column may be empty or missing entirely; only
//! `yes` (any case) marks a winner.

use crate::error::{CatalogueError, Result};
use crate::types::{MovieRecord, Year};
use csv::{ReaderBuilder, StringRecord, Trim};
use std::fs::File;
use std::io::{self, Read};
use std::path::Path;
use tracing::debug;

/// Parse a movie list file from disk
pub fn parse_movie_list(path: &Path) -> Result<Vec<MovieRecord>> {
    let file = File::open(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => CatalogueError::FileNotFound {
            path: path.display().to_string(),
        },
        _ => CatalogueError::IoError(e),
    })?;

    let source = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());

    parse_movie_list_from_reader(file, &source)
}

/// Parse a movie list from any reader.
///
/// `source` names the input in error messages.
pub fn parse_movie_list_from_reader<R: Read>(reader: R, source: &str) -> Result<Vec<MovieRecord>> {
    let mut reader = ReaderBuilder::new()
        .delimiter(b';')
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .trim(Trim::All)
        .from_reader(reader);

    let mut movies = Vec::new();
    let mut header_seen = false;
    for row in reader.records() {
        let row = row?;
        // Whitespace-only lines come through as a single empty field
        if row.iter().all(str::is_empty) {
            continue;
        }
        // The header is the first non-blank row
        if !header_seen {
            header_seen = true;
            continue;
        }
        let line = row.position().map(|p| p.line()).unwrap_or_default();
        movies.push(parse_row(&row, source, line)?);
    }

    debug!("Parsed {} rows from {}", movies.len(), source);
    Ok(movies)
}

fn parse_row(row: &StringRecord, file: &str, line: u64) -> Result<MovieRecord> {
    let year = required(row, 0, "year", file, line)?;
    let title = required(row, 1, "title", file, line)?;
    let studios = required(row, 2, "studios", file, line)?;
    let producers = required(row, 3, "producers", file, line)?;
    let winner = row.get(4).unwrap_or_default();

    Ok(MovieRecord {
        year: year.parse::<Year>().map_err(|e| CatalogueError::ParseError {
            file: file.to_string(),
            line,
            reason: format!("Invalid year {:?}: {}", year, e),
        })?,
        title: title.to_string(),
        studios: studios.to_string(),
        producers: producers.to_string(),
        winner: parse_winner(winner),
    })
}

/// Fetch a mandatory, non-empty field
fn required<'a>(
    row: &'a StringRecord,
    index: usize,
    name: &str,
    file: &str,
    line: u64,
) -> Result<&'a str> {
    row.get(index)
        .filter(|value| !value.is_empty())
        .ok_or_else(|| CatalogueError::ParseError {
            file: file.to_string(),
            line,
            reason: format!("Missing {}", name),
        })
}

/// Only "yes" (case-insensitive) marks a winner; anything else does not
fn parse_winner(value: &str) -> bool {
    value.eq_ignore_ascii_case("yes")
}
