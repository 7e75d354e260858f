//! End-to-end tests of the `kjv` binary against a temp corpus file.

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Write a small corpus file. Key order in the file is the search order.
fn write_corpus(dir: &TempDir) -> PathBuf {
    let path = dir.path().join("verses.json");
    let json = r#"{
  "John 3:16": "For God so loved the world",
  "John 3:17": "For God sent not his Son into the world to condemn the world",
  "John 4:10": "he would have given thee living water",
  "Romans 5:8": "God is love",
  "BadKey": "this entry has no parseable reference"
}"#;
    fs::write(&path, json).unwrap();
    path
}

fn kjv(corpus: &PathBuf, args: &[&str]) -> std::process::Output {
    cargo_bin_cmd!("kjv")
        .arg("--corpus")
        .arg(corpus)
        .args(args)
        .env("NO_COLOR", "1")
        .output()
        .expect("run kjv")
}

#[test]
fn search_prints_summary_and_ordered_hits() {
    let dir = TempDir::new().unwrap();
    let corpus = write_corpus(&dir);

    let output = kjv(&corpus, &["search", "love"]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Found 2 case-insensitive substring result(s)"));
    let john = stdout.find("1. John 3:16: For God so loved the world").unwrap();
    let romans = stdout.find("2. Romans 5:8: God is love").unwrap();
    assert!(john < romans);
}

#[test]
fn whole_word_query_excludes_mid_word_hit() {
    let dir = TempDir::new().unwrap();
    let corpus = write_corpus(&dir);

    let output = kjv(&corpus, &["search", "=love"]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("whole-word"));
    assert!(stdout.contains("Romans 5:8"));
    assert!(!stdout.contains("John 3:16"));
}

#[test]
fn context_flag_emits_context_block() {
    let dir = TempDir::new().unwrap();
    let corpus = write_corpus(&dir);

    let output = kjv(&corpus, &["search", "--context", "\"living water\""]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("John 4:10: he would have given thee living water"));
}

#[test]
fn no_matches_is_success() {
    let dir = TempDir::new().unwrap();
    let corpus = write_corpus(&dir);

    let output = kjv(&corpus, &["search", "mercy"]);
    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("No matches found."));
}

#[test]
fn mixed_operators_fail_with_nonzero_exit() {
    let dir = TempDir::new().unwrap();
    let corpus = write_corpus(&dir);

    let output = kjv(&corpus, &["search", "love & joy | peace"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("cannot mix"));
}

#[test]
fn empty_query_fails() {
    let dir = TempDir::new().unwrap();
    let corpus = write_corpus(&dir);

    let output = kjv(&corpus, &["search", "  :i"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("query is empty"));
}

#[test]
fn malformed_corpus_key_is_skipped_not_fatal() {
    let dir = TempDir::new().unwrap();
    let corpus = write_corpus(&dir);

    // "this entry" lives only in the BadKey value; the entry is skipped at
    // build time, so nothing matches.
    let output = kjv(&corpus, &["search", "parseable"]);
    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("No matches found."));
}

#[test]
fn books_lists_first_seen_order() {
    let dir = TempDir::new().unwrap();
    let corpus = write_corpus(&dir);

    let output = kjv(&corpus, &["books"]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("1. John"));
    assert!(stdout.contains("2. Romans"));
}

#[test]
fn chapters_accepts_book_abbreviation() {
    let dir = TempDir::new().unwrap();
    let corpus = write_corpus(&dir);

    let output = kjv(&corpus, &["chapters", "jn"]);
    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("Chapters in John: 3 4"));
}

#[test]
fn read_prints_chapter_verses() {
    let dir = TempDir::new().unwrap();
    let corpus = write_corpus(&dir);

    let output = kjv(&corpus, &["read", "John", "3"]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("John 3"));
    assert!(stdout.contains("16. For God so loved the world"));
    assert!(stdout.contains("17. For God sent not his Son"));
}

#[test]
fn read_missing_chapter_fails() {
    let dir = TempDir::new().unwrap();
    let corpus = write_corpus(&dir);

    let output = kjv(&corpus, &["read", "John", "99"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("chapter 99 not found"));
}

#[test]
fn unknown_book_fails() {
    let dir = TempDir::new().unwrap();
    let corpus = write_corpus(&dir);

    let output = kjv(&corpus, &["chapters", "Hezekiah"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("book not found"));
}

#[test]
fn guide_prints_cheat_sheet() {
    let dir = TempDir::new().unwrap();
    let corpus = write_corpus(&dir);

    let output = kjv(&corpus, &["guide"]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("SEARCH CHEAT-SHEET"));
    assert!(stdout.contains("=love"));
    assert!(stdout.contains("/grace.*faith/"));
}

#[test]
fn missing_corpus_file_fails_with_context() {
    cargo_bin_cmd!("kjv")
        .args(["--corpus", "/nonexistent/verses.json", "search", "love"])
        .env("NO_COLOR", "1")
        .assert()
        .failure()
        .stderr(predicate::str::contains("reading corpus file"));
}
