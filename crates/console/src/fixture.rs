//! YAML fixtures that seed the in-memory store.

use std::{fs, path::Path};

use marketplace_app::{memory::MemoryStore, paths::DataPath};
use serde_json::Value;
use tracing::info;

use crate::errors::ConsoleError;

/// Parse a fixture document. The document is the whole tree, so products
/// live under a top-level `products` mapping.
///
/// # Errors
///
/// Returns an error when the document is not valid YAML.
pub(crate) fn parse(yaml: &str) -> Result<Value, ConsoleError> {
    serde_norway::from_str(yaml).map_err(ConsoleError::FixtureParse)
}

/// Load `path` and write it at the root of `store`.
///
/// # Errors
///
/// Returns an error when the file cannot be read or parsed.
pub(crate) fn seed(store: &MemoryStore, path: &Path) -> Result<(), ConsoleError> {
    let yaml = fs::read_to_string(path).map_err(|source| ConsoleError::FixtureRead {
        path: path.to_path_buf(),
        source,
    })?;

    store.set(&DataPath::root(), parse(&yaml)?);

    info!(path = %path.display(), "seeded store from fixture");

    Ok(())
}
