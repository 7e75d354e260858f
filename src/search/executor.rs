//! Search execution over a corpus.

use serde::Serialize;
use tracing::debug;

use crate::corpus::Corpus;
use crate::model::Reference;
use crate::search::query::{CompiledQuery, QueryKind};

/// A corpus entry whose text satisfied the query.
#[derive(Debug, Clone, Serialize)]
pub struct Hit {
    pub reference: Reference,
    pub text: String,
}

/// Ordered hit list plus the labeling metadata callers display.
///
/// Hits come back in corpus declaration order, never re-sorted by relevance.
/// An empty list is an ordinary result, not an error.
#[derive(Debug, Clone)]
pub struct SearchResults {
    pub hits: Vec<Hit>,
    pub case_sensitive: bool,
    pub kind: QueryKind,
}

impl SearchResults {
    pub fn len(&self) -> usize {
        self.hits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hits.is_empty()
    }

    /// Caller-facing summary, e.g. `Found 2 case-insensitive AND result(s)`.
    pub fn summary(&self) -> String {
        let case = if self.case_sensitive {
            "case-sensitive"
        } else {
            "case-insensitive"
        };
        format!(
            "Found {} {case} {} result(s)",
            self.hits.len(),
            self.kind.label()
        )
    }
}

/// Run a compiled query against the corpus.
///
/// Tests each verse text with an unanchored match, in declaration order.
pub fn execute(query: &CompiledQuery, corpus: &Corpus) -> SearchResults {
    let hits: Vec<Hit> = corpus
        .entries()
        .filter(|entry| query.is_match(&entry.text))
        .map(|entry| Hit {
            reference: entry.reference.clone(),
            text: entry.text.clone(),
        })
        .collect();

    debug!(
        kind = query.kind().label(),
        case_sensitive = query.is_case_sensitive(),
        hits = hits.len(),
        "search executed"
    );

    SearchResults {
        hits,
        case_sensitive: query.is_case_sensitive(),
        kind: query.kind(),
    }
}
