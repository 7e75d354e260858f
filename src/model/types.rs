//! Verse reference type and its canonical string codec.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A single verse location: book, chapter, verse.
///
/// The canonical string form is `"<Book> <Chapter>:<Verse>"`, e.g.
/// `"John 3:16"` or `"1 Kings 19:12"`. Book names may themselves start with
/// a numeral token, which is why parsing works from the right: the verse is
/// whatever follows the last `:`, the chapter is the last whitespace token
/// before it, and everything earlier is the book.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Reference {
    pub book: String,
    pub chapter: u32,
    pub verse: u32,
}

/// Why a corpus key failed to parse as a [`Reference`].
///
/// Each variant carries the offending key so corpus diagnostics can name it.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ReferenceParseError {
    #[error("reference `{0}` has no `:` verse separator")]
    MissingVerseSeparator(String),

    #[error("reference `{0}` has a non-positive or non-numeric verse")]
    InvalidVerse(String),

    #[error("reference `{0}` has a non-positive or non-numeric chapter")]
    InvalidChapter(String),

    #[error("reference `{0}` has no book name before the chapter")]
    MissingBook(String),
}

impl Reference {
    pub fn new(book: impl Into<String>, chapter: u32, verse: u32) -> Self {
        Self {
            book: book.into(),
            chapter,
            verse,
        }
    }
}

fn parse_positive(s: &str) -> Option<u32> {
    match s.parse::<u32>() {
        Ok(n) if n > 0 => Some(n),
        _ => None,
    }
}

impl FromStr for Reference {
    type Err = ReferenceParseError;

    fn from_str(key: &str) -> Result<Self, Self::Err> {
        let (book_chapter, verse_str) = key
            .rsplit_once(':')
            .ok_or_else(|| ReferenceParseError::MissingVerseSeparator(key.to_string()))?;
        let verse = parse_positive(verse_str.trim())
            .ok_or_else(|| ReferenceParseError::InvalidVerse(key.to_string()))?;

        let mut tokens: Vec<&str> = book_chapter.split_whitespace().collect();
        let chapter_str = tokens
            .pop()
            .ok_or_else(|| ReferenceParseError::InvalidChapter(key.to_string()))?;
        let chapter = parse_positive(chapter_str)
            .ok_or_else(|| ReferenceParseError::InvalidChapter(key.to_string()))?;

        if tokens.is_empty() {
            return Err(ReferenceParseError::MissingBook(key.to_string()));
        }

        Ok(Reference {
            book: tokens.join(" "),
            chapter,
            verse,
        })
    }
}

impl fmt::Display for Reference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}:{}", self.book, self.chapter, self.verse)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_simple_reference() {
        let r: Reference = "John 3:16".parse().unwrap();
        assert_eq!(r, Reference::new("John", 3, 16));
    }

    #[test]
    fn parses_numbered_book() {
        let r: Reference = "1 Kings 19:12".parse().unwrap();
        assert_eq!(r, Reference::new("1 Kings", 19, 12));

        let r: Reference = "Song of Solomon 2:1".parse().unwrap();
        assert_eq!(r, Reference::new("Song of Solomon", 2, 1));
    }

    #[test]
    fn round_trips_canonical_keys() {
        for key in ["Genesis 1:1", "2 Corinthians 5:17", "Psalms 119:105"] {
            let r: Reference = key.parse().unwrap();
            assert_eq!(r.to_string(), key);
        }
    }

    #[test]
    fn rejects_missing_separator() {
        let err = "BadKey".parse::<Reference>().unwrap_err();
        assert_eq!(
            err,
            ReferenceParseError::MissingVerseSeparator("BadKey".into())
        );
    }

    #[test]
    fn rejects_bad_verse() {
        assert!(matches!(
            "John 3:sixteen".parse::<Reference>(),
            Err(ReferenceParseError::InvalidVerse(_))
        ));
        assert!(matches!(
            "John 3:0".parse::<Reference>(),
            Err(ReferenceParseError::InvalidVerse(_))
        ));
        assert!(matches!(
            "John 3:-1".parse::<Reference>(),
            Err(ReferenceParseError::InvalidVerse(_))
        ));
    }

    #[test]
    fn rejects_bad_chapter() {
        assert!(matches!(
            "John three:16".parse::<Reference>(),
            Err(ReferenceParseError::InvalidChapter(_))
        ));
        assert!(matches!(
            "John 0:16".parse::<Reference>(),
            Err(ReferenceParseError::InvalidChapter(_))
        ));
    }

    #[test]
    fn rejects_missing_book() {
        assert!(matches!(
            "3:16".parse::<Reference>(),
            Err(ReferenceParseError::MissingBook(_))
        ));
        assert!(matches!(
            ":16".parse::<Reference>(),
            Err(ReferenceParseError::InvalidChapter(_))
        ));
    }

    #[test]
    fn verse_splits_on_last_colon() {
        // A stray colon inside the book segment still leaves the final
        // segment as the verse.
        let err = "Weird:Book 3:xx".parse::<Reference>().unwrap_err();
        assert!(matches!(err, ReferenceParseError::InvalidVerse(_)));
    }
}
