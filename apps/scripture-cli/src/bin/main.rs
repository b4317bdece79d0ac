use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};

use scripture_cli::{init_tracing, load_settings, open_registry, resolve_dir};
use scripture_core::alignment::{assemble_search_matches, split_view};
use scripture_core::traits::bound_query;
use scripture_core::{AlignedRow, BookCatalog, Cursor, Navigator, SearchProvider, VersionProvider};
use scripture_text::VerseSearchEngine;

#[derive(Debug, Parser)]
#[command(name = "scripture", version, about = "Read, navigate and search Bible translations")]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Directory of version files, overrides `data.versions_dir`
    #[arg(long, global = true)]
    versions_dir: Option<PathBuf>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print one chapter of one version
    Read {
        #[arg(long)]
        version: Option<String>,
        #[arg(long)]
        book: String,
        #[arg(long)]
        chapter: String,
    },
    /// Print the chapter after BOOK CHAPTER
    Next {
        #[arg(long)]
        book: String,
        #[arg(long)]
        chapter: String,
    },
    /// Print the chapter before BOOK CHAPTER
    Prev {
        #[arg(long)]
        book: String,
        #[arg(long)]
        chapter: String,
    },
    /// Show several versions of a chapter side by side
    Split {
        #[arg(long, value_delimiter = ',')]
        versions: Vec<String>,
        #[arg(long)]
        book: String,
        #[arg(long)]
        chapter: String,
    },
    /// Full-text search within one version
    Search {
        #[arg(long)]
        version: String,
        query: String,
        #[arg(long)]
        limit: Option<usize>,
        /// Tantivy index directory, overrides `data.index_dir`
        #[arg(long)]
        index: Option<PathBuf>,
        /// Also print hit counts per book
        #[arg(long)]
        books: bool,
    },
    /// Number of chapters in a book
    Chapters { book: String },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.quiet, cli.verbose)?;
    let settings = load_settings()?;
    let catalog = Arc::new(BookCatalog::canonical());
    let nav = Navigator::new(&catalog);

    match cli.command {
        Command::Chapters { book } => {
            println!("{}: {} chapters", book, catalog.chapter_count(&book)?);
        }
        Command::Next { book, chapter } => {
            let cursor = nav.restore(&book, &chapter)?;
            println!("{}", nav.next_chapter(&cursor.book, cursor.chapter)?);
        }
        Command::Prev { book, chapter } => {
            let cursor = nav.restore(&book, &chapter)?;
            println!("{}", nav.previous_chapter(&cursor.book, cursor.chapter)?);
        }
        Command::Read { version, book, chapter } => {
            let cursor = nav.restore(&book, &chapter)?;
            let registry = open_registry(&resolve_dir(cli.versions_dir.as_deref(), |b| settings.versions_dir(b))?, &catalog)?;
            let version = version.unwrap_or_else(|| settings.reader.default_versions[0].clone());
            let passage = registry.get(&version)?.get_passage(&cursor.book, cursor.chapter)?;
            println!("{} ({})\n", cursor, version);
            for heading in &passage.headings {
                if !heading.heading.is_empty() { println!("  {}", heading.heading); }
                for verse in &heading.verses { println!("    {}", verse); }
            }
        }
        Command::Split { versions, book, chapter } => {
            let cursor = nav.restore(&book, &chapter)?;
            let registry = open_registry(&resolve_dir(cli.versions_dir.as_deref(), |b| settings.versions_dir(b))?, &catalog)?;
            let versions = if versions.is_empty() { settings.reader.default_versions.clone() } else { versions };
            print_split(&cursor, &versions, &split_view(&registry, &versions, &cursor)?);
        }
        Command::Search { version, query, limit, index, books } => {
            let registry = open_registry(&resolve_dir(cli.versions_dir.as_deref(), |b| settings.versions_dir(b))?, &catalog)?;
            let provider = registry.get(&version)?;
            let index_dir = resolve_dir(index.as_deref(), |b| settings.index_dir(b))?;
            let engine = VerseSearchEngine::open(&index_dir)?;
            let query = bound_query(&query, settings.search.max_query_chars);
            let limit = limit.unwrap_or(settings.search.max_results).min(settings.search.max_results);

            let hits = engine.search(query, &version, limit)?;
            let matches = assemble_search_matches(&hits, provider);
            println!("🔍 {} results for \"{}\" in {}", matches.len(), query, version);
            for (label, text) in matches.iter() { println!("  {}: {}", label, text); }

            if books {
                println!("\n📊 Hits per book:");
                for (book, count) in engine.book_counts(query, &version)? { println!("  {}: {}", book, count); }
            }
        }
    }
    Ok(())
}

fn print_split(cursor: &Cursor, versions: &[String], rows: &[AlignedRow]) {
    println!("{}\n", cursor);
    println!("{}", versions.join(" | "));
    for row in rows {
        let cells: Vec<&str> = row.cells.iter().map(|c| if c.is_empty() { "-" } else { c.as_str() }).collect();
        println!("{}", cells.join(" | "));
    }
}
