//! Mapping hits back to locations and folding hit lists into context text.

use std::fmt::Write as _;

use crate::search::Hit;

/// A chapter position derived from a hit, verse discarded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    pub book: String,
    pub chapter: u32,
}

/// Where a hit lives, for jumping back into chapter navigation.
pub fn locate(hit: &Hit) -> Location {
    Location {
        book: hit.reference.book.clone(),
        chapter: hit.reference.chapter,
    }
}

/// Fold a hit list into one text block, one `"<reference>: <text>"` line per
/// hit, in hit order. This is the context surface handed to downstream
/// assistant tooling.
pub fn context_of(hits: &[Hit]) -> String {
    let mut out = String::new();
    for (i, hit) in hits.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        let _ = write!(out, "{}: {}", hit.reference, hit.text);
    }
    out
}
