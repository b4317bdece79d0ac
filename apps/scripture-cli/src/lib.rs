//! Shared start-up for the `scripture` binaries: logging, settings and the
//! version registry.

use std::env;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use scripture_core::config::{expand_path, Config, Settings};
use scripture_core::loader::load_registry;
use scripture_core::{BookCatalog, VersionRegistry};

pub fn init_tracing(quiet: bool, verbose: bool) -> anyhow::Result<()> {
    let level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    };

    let filter = tracing_subscriber::EnvFilter::try_from_env("SCRIPTURE_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}

pub fn load_settings() -> anyhow::Result<Settings> {
    Config::load()?.settings()
}

/// Flag value if given, otherwise the configured directory relative to the
/// working directory.
pub fn resolve_dir(flag: Option<&Path>, configured: impl Fn(&Path) -> PathBuf) -> anyhow::Result<PathBuf> {
    match flag {
        Some(path) => Ok(expand_path(path.to_string_lossy())),
        None => Ok(configured(&env::current_dir()?)),
    }
}

pub fn open_registry(dir: &Path, catalog: &Arc<BookCatalog>) -> anyhow::Result<VersionRegistry> {
    let registry = load_registry(dir, catalog)?;
    if registry.is_empty() {
        anyhow::bail!("no versions found under {}", dir.display());
    }
    tracing::info!(versions = registry.len(), dir = %dir.display(), "version registry ready");
    Ok(registry)
}
