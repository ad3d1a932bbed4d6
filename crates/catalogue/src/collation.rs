//! Dictionary ordering for titles and names.
//!
//! Plain `str::cmp` orders by code point, which puts every uppercase letter
//! before every lowercase one and sends accented letters past `z`. Listings
//! use the Unicode Collation Algorithm with root locale data instead, at
//! tertiary strength: base letters first, then accents, then case
//! (lowercase first). Punctuation is not ignorable and follows the CLDR
//! root order. Canonically equivalent strings (NFC vs NFD) compare equal.

use icu_collator::{Collator, CollatorOptions};
use std::cmp::Ordering;
use tracing::warn;

thread_local! {
    static ROOT_COLLATOR: Option<Collator> = root_collator();
}

fn root_collator() -> Option<Collator> {
    match Collator::try_new(&Default::default(), CollatorOptions::new()) {
        Ok(collator) => Some(collator),
        Err(e) => {
            warn!("Root collation data unavailable, falling back to code point order: {}", e);
            None
        }
    }
}

/// Compare two strings in dictionary order
pub fn collate(a: &str, b: &str) -> Ordering {
    ROOT_COLLATOR.with(|collator| match collator {
        Some(collator) => collator.compare(a, b),
        None => a.cmp(b),
    })
}
