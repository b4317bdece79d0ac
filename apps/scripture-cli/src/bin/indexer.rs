use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};

use scripture_cli::{init_tracing, load_settings, resolve_dir};
use scripture_core::loader::{load_bundle, load_versions_dir};
use scripture_core::{BookCatalog, VersionProvider};
use scripture_text::VerseIndexer;

#[derive(Debug, Parser)]
#[command(name = "scripture-indexer", version, about = "Build the full-text verse index")]
struct Args {
    /// Directory of version files, overrides `data.versions_dir`
    #[arg(long)]
    versions_dir: Option<PathBuf>,

    /// Read versions from a single bundle file instead of a directory
    #[arg(long, conflicts_with = "versions_dir")]
    bundle: Option<PathBuf>,

    /// Index directory, overrides `data.index_dir`; it is rebuilt from scratch
    #[arg(long)]
    index: Option<PathBuf>,

    #[arg(short, long)]
    quiet: bool,

    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_tracing(args.quiet, args.verbose)?;
    let settings = load_settings()?;
    let catalog = Arc::new(BookCatalog::canonical());

    let versions = match &args.bundle {
        Some(bundle) => load_bundle(bundle, &catalog)?,
        None => load_versions_dir(&resolve_dir(args.versions_dir.as_deref(), |b| settings.versions_dir(b))?, &catalog)?,
    };
    if versions.is_empty() {
        anyhow::bail!("no versions to index");
    }

    let index_dir = resolve_dir(args.index.as_deref(), |b| settings.index_dir(b))?;
    println!("Scripture Indexer\n=================");
    let indexer = VerseIndexer::new(index_dir.clone())?;
    println!("Created Tantivy index at: {}", index_dir.display());

    let pb = ProgressBar::new(versions.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} versions {msg}")?
            .progress_chars("#>-"),
    );
    let mut total = 0usize;
    for version in &versions {
        pb.set_message(version.name().to_string());
        let count = indexer.index_version(version)?;
        tracing::info!(version = version.name(), verses = count, "indexed version");
        total += count;
        pb.inc(1);
    }
    pb.finish_with_message("done");

    println!("\n✅ Indexing completed successfully!");
    println!("📊 Indexed {} verses from {} versions", total, versions.len());
    println!("\n💡 To search, use: cargo run --bin scripture -- search --version <VERSION> '<query>'");
    Ok(())
}
