//! Query compilation: raw query string → executable matcher.
//!
//! The grammar is small and informal:
//!
//! - `kingdom` — plain substring
//! - `=love` — whole word (word boundaries on both sides)
//! - `"living water"` — exact phrase
//! - `/grace.*faith/` — raw regular expression
//! - `love & joy` — all terms, any order
//! - `mercy | grace` — any term
//! - trailing `:c` / `:i` — force case-sensitive / case-insensitive
//!
//! Forms are mutually exclusive and classified in a fixed priority order in
//! a single pass; see [`compile`]. Matching defaults to case-insensitive.

use regex::{Regex, RegexBuilder};
use thiserror::Error;

/// How a query was classified, for exhaustive matching and result labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryKind {
    Substring,
    WholeWord,
    Phrase,
    Regex,
    And,
    Or,
}

impl QueryKind {
    /// Human label used in result summaries, matching the query syntax docs.
    pub fn label(&self) -> &'static str {
        match self {
            QueryKind::Substring => "substring",
            QueryKind::WholeWord => "whole-word",
            QueryKind::Phrase => "phrase",
            QueryKind::Regex => "regex",
            QueryKind::And => "AND",
            QueryKind::Or => "OR",
        }
    }
}

/// Why a query failed to compile.
///
/// Compilation fails closed: no partial or best-effort matching happens on
/// any of these.
#[derive(Debug, Error)]
pub enum QueryError {
    #[error("query is empty")]
    Empty,

    #[error("cannot mix ` & ` and ` | ` in one query")]
    MixedOperators,

    #[error("invalid regular expression: {0}")]
    InvalidRegex(#[from] regex::Error),
}

/// An immutable compiled query.
///
/// Holds one compiled regex per fragment; every fragment must find a match
/// somewhere in a text for the query to match. All forms except
/// [`QueryKind::And`] compile to a single fragment. (The `regex` crate has
/// no lookahead, so an any-order conjunction is expressed as independently
/// compiled fragments rather than one pattern.)
#[derive(Debug, Clone)]
pub struct CompiledQuery {
    patterns: Vec<Regex>,
    case_sensitive: bool,
    kind: QueryKind,
}

impl CompiledQuery {
    pub fn kind(&self) -> QueryKind {
        self.kind
    }

    pub fn is_case_sensitive(&self) -> bool {
        self.case_sensitive
    }

    /// Unanchored match test: does every fragment occur somewhere in `text`?
    pub fn is_match(&self, text: &str) -> bool {
        self.patterns.iter().all(|p| p.is_match(text))
    }
}

/// Compile a raw query string into a [`CompiledQuery`].
///
/// Classification runs strictly in this order: case-flag strip, empty
/// check, regex form, mixed-operator rejection, AND, OR, single token.
pub fn compile(raw: &str) -> Result<CompiledQuery, QueryError> {
    let (body, case_sensitive) = strip_case_flag(raw);

    if body.trim().is_empty() {
        return Err(QueryError::Empty);
    }

    // Raw regex form: interior used verbatim, before operator handling so
    // patterns may freely contain ` & ` and ` | `.
    if body.starts_with('/') && body.ends_with('/') && body.len() >= 3 {
        let pattern = build_regex(&body[1..body.len() - 1], case_sensitive)?;
        return Ok(CompiledQuery {
            patterns: vec![pattern],
            case_sensitive,
            kind: QueryKind::Regex,
        });
    }

    let has_and = body.contains(" & ");
    let has_or = body.contains(" | ");
    if has_and && has_or {
        return Err(QueryError::MixedOperators);
    }

    if has_and {
        let patterns = body
            .split(" & ")
            .map(|tok| build_regex(&token_fragment(tok.trim()).0, case_sensitive))
            .collect::<Result<Vec<_>, _>>()?;
        return Ok(CompiledQuery {
            patterns,
            case_sensitive,
            kind: QueryKind::And,
        });
    }

    if has_or {
        let alternation = body
            .split(" | ")
            .map(|tok| token_fragment(tok.trim()).0)
            .collect::<Vec<_>>()
            .join("|");
        let pattern = build_regex(&alternation, case_sensitive)?;
        return Ok(CompiledQuery {
            patterns: vec![pattern],
            case_sensitive,
            kind: QueryKind::Or,
        });
    }

    let (fragment, kind) = token_fragment(body);
    let pattern = build_regex(&fragment, case_sensitive)?;
    Ok(CompiledQuery {
        patterns: vec![pattern],
        case_sensitive,
        kind,
    })
}

/// Strip a trailing `:c` / `:i` case flag. Absent flag defaults to
/// case-insensitive.
fn strip_case_flag(raw: &str) -> (&str, bool) {
    if let Some(body) = raw.strip_suffix(":c") {
        (body, true)
    } else if let Some(body) = raw.strip_suffix(":i") {
        (body, false)
    } else {
        (raw, false)
    }
}

/// Convert one operand to a regex fragment.
///
/// Every metacharacter in the literal forms is escaped, so substring,
/// whole-word, and phrase tokens never behave as patterns.
fn token_fragment(token: &str) -> (String, QueryKind) {
    if token.len() >= 2 && token.starts_with('"') && token.ends_with('"') {
        let inner = &token[1..token.len() - 1];
        (regex::escape(inner), QueryKind::Phrase)
    } else if let Some(word) = token.strip_prefix('=') {
        (format!(r"\b{}\b", regex::escape(word)), QueryKind::WholeWord)
    } else {
        (regex::escape(token), QueryKind::Substring)
    }
}

fn build_regex(body: &str, case_sensitive: bool) -> Result<Regex, regex::Error> {
    RegexBuilder::new(body)
        .case_insensitive(!case_sensitive)
        .build()
}
