//! Immutable verse corpus with a nested navigation index.
//!
//! A [`Corpus`] is built once from raw reference→text pairs and read-only
//! afterwards, so it can be shared freely across threads. Declaration order
//! of the raw pairs is preserved and is the order search results come back
//! in. Verse text is opaque payload: paragraph markers and `[bracketed]`
//! annotation spans pass through untouched.

use std::collections::{BTreeMap, HashMap};
use tracing::{debug, warn};

use crate::model::{Reference, ReferenceParseError};

/// One validated corpus entry, in declaration order.
#[derive(Debug, Clone)]
pub struct VerseEntry {
    pub reference: Reference,
    pub text: String,
}

/// A corpus key that failed reference parsing during the build.
///
/// Non-fatal: the entry is skipped and the build continues.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorpusDiagnostic {
    pub key: String,
    pub error: ReferenceParseError,
}

/// The searchable verse corpus.
#[derive(Debug, Default)]
pub struct Corpus {
    entries: Vec<VerseEntry>,
    // book -> chapter -> verse -> index into `entries`
    index: HashMap<String, BTreeMap<u32, BTreeMap<u32, usize>>>,
    // books in first-seen order
    book_order: Vec<String>,
    diagnostics: Vec<CorpusDiagnostic>,
}

impl Corpus {
    /// Build a corpus from raw reference→text pairs, in their given order.
    ///
    /// Malformed keys are skipped with a warning and recorded in
    /// [`diagnostics`](Self::diagnostics); one bad key never aborts the
    /// build.
    pub fn build<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut corpus = Corpus::default();

        for (key, text) in pairs {
            let key = key.as_ref();
            match key.parse::<Reference>() {
                Ok(reference) => corpus.insert(reference, text.into()),
                Err(error) => {
                    warn!(key, %error, "skipping unparseable corpus key");
                    corpus.diagnostics.push(CorpusDiagnostic {
                        key: key.to_string(),
                        error,
                    });
                }
            }
        }

        debug!(
            verses = corpus.entries.len(),
            books = corpus.book_order.len(),
            skipped = corpus.diagnostics.len(),
            "corpus built"
        );
        corpus
    }

    fn insert(&mut self, reference: Reference, text: String) {
        let idx = self.entries.len();
        if !self.index.contains_key(&reference.book) {
            self.book_order.push(reference.book.clone());
        }
        self.index
            .entry(reference.book.clone())
            .or_default()
            .entry(reference.chapter)
            .or_default()
            .insert(reference.verse, idx);
        self.entries.push(VerseEntry { reference, text });
    }

    /// Entries in declaration order.
    pub fn entries(&self) -> impl Iterator<Item = &VerseEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Keys skipped during the build, in encounter order.
    pub fn diagnostics(&self) -> &[CorpusDiagnostic] {
        &self.diagnostics
    }

    /// Book names in first-seen order.
    pub fn books(&self) -> &[String] {
        &self.book_order
    }

    /// Chapter numbers present for a book, ascending.
    pub fn chapters(&self, book: &str) -> Vec<u32> {
        self.index
            .get(book)
            .map(|chapters| chapters.keys().copied().collect())
            .unwrap_or_default()
    }

    /// Verses of one chapter as `(verse, text)` pairs, ascending.
    pub fn verses(&self, book: &str, chapter: u32) -> Vec<(u32, &str)> {
        self.index
            .get(book)
            .and_then(|chapters| chapters.get(&chapter))
            .map(|verses| {
                verses
                    .iter()
                    .map(|(&v, &idx)| (v, self.entries[idx].text.as_str()))
                    .collect()
            })
            .unwrap_or_default()
    }

    pub fn has_chapter(&self, book: &str, chapter: u32) -> bool {
        self.index
            .get(book)
            .is_some_and(|chapters| chapters.contains_key(&chapter))
    }

    /// The chapter after `chapter` in this book, if any.
    pub fn next_chapter(&self, book: &str, chapter: u32) -> Option<u32> {
        let chapters = self.index.get(book)?;
        chapters.range(chapter + 1..).next().map(|(&c, _)| c)
    }

    /// The chapter before `chapter` in this book, if any.
    pub fn prev_chapter(&self, book: &str, chapter: u32) -> Option<u32> {
        let chapters = self.index.get(book)?;
        chapters.range(..chapter).next_back().map(|(&c, _)| c)
    }

    /// Text of one verse, if present.
    pub fn get(&self, reference: &Reference) -> Option<&str> {
        self.index
            .get(&reference.book)
            .and_then(|chapters| chapters.get(&reference.chapter))
            .and_then(|verses| verses.get(&reference.verse))
            .map(|&idx| self.entries[idx].text.as_str())
    }
}
