pub mod corpus;
pub mod model;
pub mod navigator;
pub mod search;

use anyhow::{Context, Result, bail};
use clap::{CommandFactory, Parser, Subcommand};
use colored::Colorize;
use std::path::{Path, PathBuf};
use tracing::warn;

use corpus::Corpus;

/// Command-line interface.
#[derive(Parser, Debug)]
#[command(
    name = "kjv-search",
    version,
    about = "Flexible search and navigation over a KJV verse corpus"
)]
pub struct Cli {
    /// Path to the verses JSON file (reference -> text)
    #[arg(long, env = "KJV_CORPUS", default_value = "verses-1769.json")]
    pub corpus: PathBuf,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Search the corpus (see `kjv guide` for the query syntax)
    Search {
        /// Query string, e.g. `=love`, `"living water"`, `love & joy:c`
        query: String,

        /// Also print the combined context block for the hit list
        #[arg(long, default_value_t = false)]
        context: bool,
    },
    /// List the books present in the corpus
    Books,
    /// List the chapters of one book
    Chapters {
        /// Book name or abbreviation (e.g. `gen`, `1 kgs`)
        book: String,
    },
    /// Print one chapter, verse by verse
    Read {
        /// Book name or abbreviation
        book: String,
        /// Chapter number
        chapter: u32,
    },
    /// Print the search syntax cheat-sheet
    Guide,
    /// Generate shell completions to stdout
    Completions {
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
    /// Generate man page to stdout
    Man,
}

const SEARCH_GUIDE: &str = "\
SEARCH CHEAT-SHEET
------------------
  substring   : kingdom
  whole-word  : =love
  phrase      : \"living water\"
  regex       : /grace.*faith/
  AND         : love & joy
  OR          : mercy | grace
  Case flags  : append :c (case-sensitive) or :i (ignore case)

Matching is case-insensitive unless :c is given. The AND and OR
operators need spaces around them and cannot be mixed in one query.";

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Search { query, context } => cmd_search(&cli.corpus, &query, context),
        Commands::Books => cmd_books(&cli.corpus),
        Commands::Chapters { book } => cmd_chapters(&cli.corpus, &book),
        Commands::Read { book, chapter } => cmd_read(&cli.corpus, &book, chapter),
        Commands::Guide => {
            println!("{SEARCH_GUIDE}");
            Ok(())
        }
        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            clap_complete::generate(shell, &mut cmd, "kjv", &mut std::io::stdout());
            Ok(())
        }
        Commands::Man => {
            let cmd = Cli::command();
            let man = clap_mangen::Man::new(cmd);
            let mut out = std::io::stdout();
            man.render(&mut out)?;
            Ok(())
        }
    }
}

/// Load the verses JSON and build the corpus, keeping file order.
fn load_corpus(path: &Path) -> Result<Corpus> {
    let data = std::fs::read_to_string(path)
        .with_context(|| format!("reading corpus file {}", path.display()))?;
    let raw: serde_json::Map<String, serde_json::Value> = serde_json::from_str(&data)
        .with_context(|| format!("parsing corpus file {}", path.display()))?;

    let pairs = raw.into_iter().filter_map(|(key, value)| match value {
        serde_json::Value::String(text) => Some((key, text)),
        other => {
            warn!(%key, value = %other, "skipping non-string corpus value");
            None
        }
    });

    let corpus = Corpus::build(pairs);
    if !corpus.diagnostics().is_empty() {
        warn!(
            skipped = corpus.diagnostics().len(),
            "some corpus keys could not be parsed"
        );
    }
    Ok(corpus)
}

fn cmd_search(corpus_path: &Path, raw_query: &str, with_context: bool) -> Result<()> {
    let corpus = load_corpus(corpus_path)?;
    let query = search::compile(raw_query)?;
    let results = search::execute(&query, &corpus);

    if results.is_empty() {
        println!("{}", "No matches found.".red());
        return Ok(());
    }

    println!("{}", results.summary().bold().cyan());
    for (i, hit) in results.hits.iter().enumerate() {
        println!("{}. {}: {}", i + 1, hit.reference, hit.text);
    }

    if with_context {
        println!();
        println!("{}", navigator::context_of(&results.hits));
    }
    Ok(())
}

fn cmd_books(corpus_path: &Path) -> Result<()> {
    let corpus = load_corpus(corpus_path)?;
    println!("{}", "Books:".bold().cyan());
    for (i, book) in corpus.books().iter().enumerate() {
        println!("{}. {book}", i + 1);
    }
    Ok(())
}

fn cmd_chapters(corpus_path: &Path, book: &str) -> Result<()> {
    let corpus = load_corpus(corpus_path)?;
    let book = resolve_book(&corpus, book)?;
    let chapters = corpus
        .chapters(&book)
        .iter()
        .map(u32::to_string)
        .collect::<Vec<_>>()
        .join(" ");
    println!("{} {chapters}", format!("Chapters in {book}:").bold().cyan());
    Ok(())
}

fn cmd_read(corpus_path: &Path, book: &str, chapter: u32) -> Result<()> {
    let corpus = load_corpus(corpus_path)?;
    let book = resolve_book(&corpus, book)?;
    if !corpus.has_chapter(&book, chapter) {
        bail!("chapter {chapter} not found in {book}");
    }

    println!("{}", format!("{book} {chapter}").bold().magenta());
    for (verse, text) in corpus.verses(&book, chapter) {
        println!("{} {text}", format!("{verse}.").green());
    }
    Ok(())
}

/// Resolve loose user input to a book actually present in the corpus.
fn resolve_book(corpus: &Corpus, input: &str) -> Result<String> {
    if let Some(canonical) = model::normalize_book(input)
        && corpus.books().iter().any(|b| b.as_str() == canonical)
    {
        return Ok(canonical.to_string());
    }
    // Corpora are not required to use canonical names; fall back to a
    // case-insensitive match against what is actually there.
    if let Some(book) = corpus
        .books()
        .iter()
        .find(|b| b.eq_ignore_ascii_case(input.trim()))
    {
        return Ok(book.clone());
    }
    bail!("book not found: {input}");
}
