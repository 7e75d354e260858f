//! Canonical book names and user-input normalization.
//!
//! Navigation commands accept loose book names ("gen", "1 kgs", "Song of
//! Songs") and resolve them against the canonical 66-book table.

use once_cell::sync::Lazy;
use std::collections::HashMap;

/// The 66 canonical book names, in traditional order.
pub const BOOKS: [&str; 66] = [
    "Genesis",
    "Exodus",
    "Leviticus",
    "Numbers",
    "Deuteronomy",
    "Joshua",
    "Judges",
    "Ruth",
    "1 Samuel",
    "2 Samuel",
    "1 Kings",
    "2 Kings",
    "1 Chronicles",
    "2 Chronicles",
    "Ezra",
    "Nehemiah",
    "Esther",
    "Job",
    "Psalms",
    "Proverbs",
    "Ecclesiastes",
    "Song of Solomon",
    "Isaiah",
    "Jeremiah",
    "Lamentations",
    "Ezekiel",
    "Daniel",
    "Hosea",
    "Joel",
    "Amos",
    "Obadiah",
    "Jonah",
    "Micah",
    "Nahum",
    "Habakkuk",
    "Zephaniah",
    "Haggai",
    "Zechariah",
    "Malachi",
    "Matthew",
    "Mark",
    "Luke",
    "John",
    "Acts",
    "Romans",
    "1 Corinthians",
    "2 Corinthians",
    "Galatians",
    "Ephesians",
    "Philippians",
    "Colossians",
    "1 Thessalonians",
    "2 Thessalonians",
    "1 Timothy",
    "2 Timothy",
    "Titus",
    "Philemon",
    "Hebrews",
    "James",
    "1 Peter",
    "2 Peter",
    "1 John",
    "2 John",
    "3 John",
    "Jude",
    "Revelation",
];

/// Common abbreviations and variants, all lowercase.
static ALIASES: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    let pairs: &[(&str, &str)] = &[
        ("gen", "Genesis"),
        ("ge", "Genesis"),
        ("gn", "Genesis"),
        ("ex", "Exodus"),
        ("exo", "Exodus"),
        ("lev", "Leviticus"),
        ("lv", "Leviticus"),
        ("num", "Numbers"),
        ("nm", "Numbers"),
        ("nu", "Numbers"),
        ("deut", "Deuteronomy"),
        ("deu", "Deuteronomy"),
        ("dt", "Deuteronomy"),
        ("jos", "Joshua"),
        ("josh", "Joshua"),
        ("jdg", "Judges"),
        ("judg", "Judges"),
        ("ru", "Ruth"),
        ("1sa", "1 Samuel"),
        ("1 sam", "1 Samuel"),
        ("i samuel", "1 Samuel"),
        ("2sa", "2 Samuel"),
        ("2 sam", "2 Samuel"),
        ("ii samuel", "2 Samuel"),
        ("1ki", "1 Kings"),
        ("1 kgs", "1 Kings"),
        ("i kings", "1 Kings"),
        ("2ki", "2 Kings"),
        ("2 kgs", "2 Kings"),
        ("ii kings", "2 Kings"),
        ("1ch", "1 Chronicles"),
        ("i chronicles", "1 Chronicles"),
        ("2ch", "2 Chronicles"),
        ("ii chronicles", "2 Chronicles"),
        ("ezr", "Ezra"),
        ("neh", "Nehemiah"),
        ("est", "Esther"),
        ("ps", "Psalms"),
        ("psa", "Psalms"),
        ("psalm", "Psalms"),
        ("pr", "Proverbs"),
        ("prov", "Proverbs"),
        ("ecc", "Ecclesiastes"),
        ("eccl", "Ecclesiastes"),
        ("song", "Song of Solomon"),
        ("sos", "Song of Solomon"),
        ("song of songs", "Song of Solomon"),
        ("isa", "Isaiah"),
        ("jer", "Jeremiah"),
        ("lam", "Lamentations"),
        ("ezek", "Ezekiel"),
        ("dan", "Daniel"),
        ("hos", "Hosea"),
        ("joe", "Joel"),
        ("amo", "Amos"),
        ("oba", "Obadiah"),
        ("jon", "Jonah"),
        ("mic", "Micah"),
        ("nah", "Nahum"),
        ("hab", "Habakkuk"),
        ("zep", "Zephaniah"),
        ("hag", "Haggai"),
        ("zec", "Zechariah"),
        ("mal", "Malachi"),
        ("mt", "Matthew"),
        ("mk", "Mark"),
        ("lk", "Luke"),
        ("jn", "John"),
        ("ac", "Acts"),
        ("rom", "Romans"),
        ("1co", "1 Corinthians"),
        ("i corinthians", "1 Corinthians"),
        ("2co", "2 Corinthians"),
        ("ii corinthians", "2 Corinthians"),
        ("gal", "Galatians"),
        ("eph", "Ephesians"),
        ("php", "Philippians"),
        ("phil", "Philippians"),
        ("col", "Colossians"),
        ("1th", "1 Thessalonians"),
        ("i thessalonians", "1 Thessalonians"),
        ("2th", "2 Thessalonians"),
        ("ii thessalonians", "2 Thessalonians"),
        ("1ti", "1 Timothy"),
        ("i timothy", "1 Timothy"),
        ("2ti", "2 Timothy"),
        ("ii timothy", "2 Timothy"),
        ("tit", "Titus"),
        ("phm", "Philemon"),
        ("heb", "Hebrews"),
        ("jas", "James"),
        ("1pe", "1 Peter"),
        ("i peter", "1 Peter"),
        ("2pe", "2 Peter"),
        ("ii peter", "2 Peter"),
        ("1jn", "1 John"),
        ("i john", "1 John"),
        ("2jn", "2 John"),
        ("ii john", "2 John"),
        ("3jn", "3 John"),
        ("iii john", "3 John"),
        ("jud", "Jude"),
        ("rev", "Revelation"),
        ("re", "Revelation"),
        ("apocalypse", "Revelation"),
    ];
    pairs.iter().copied().collect()
});

/// Resolve loose user input to a canonical book name.
///
/// Lowercases and collapses whitespace, rewrites "first/second/third" and
/// "1st/2nd/3rd" prefixes to bare numerals, then tries the alias table and
/// finally a case-insensitive match against [`BOOKS`]. Returns `None` when
/// nothing matches.
pub fn normalize_book(input: &str) -> Option<&'static str> {
    let mut s = input
        .trim()
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");

    for (from, to) in [
        ("first ", "1 "),
        ("second ", "2 "),
        ("third ", "3 "),
        ("1st ", "1 "),
        ("2nd ", "2 "),
        ("3rd ", "3 "),
    ] {
        if let Some(rest) = s.strip_prefix(from) {
            s = format!("{to}{rest}");
            break;
        }
    }

    if let Some(&canonical) = ALIASES.get(s.as_str()) {
        return Some(canonical);
    }

    BOOKS.iter().copied().find(|b| b.eq_ignore_ascii_case(&s))
}
