//! The persisted event catalog.
//!
//! The catalog is a JSON document with two ordered sequences of opaque
//! records: `events`, which this pipeline appends to, and `overrides`,
//! hand-maintained data that is carried through every write untouched.
//!
//! Writes are all-or-nothing with respect to the output path: the document
//! is serialized to a temporary file in the same directory, fsynced, and
//! renamed into place. A reader of the output path sees either the old
//! complete file or the new complete file, never a partial one. The write
//! is not transactional against the base file, which is read once and
//! never locked.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;
use tracing::debug;

use crate::event::NormalizedEvent;

/// Errors from loading, merging, or persisting the catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The catalog file could not be read.
    #[error("failed to read catalog {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The catalog file is not valid JSON for the expected document shape.
    #[error("failed to parse catalog {path}: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The merged document could not be serialized.
    #[error("failed to serialize catalog: {0}")]
    Encode(#[source] serde_json::Error),

    /// The output file could not be written or replaced.
    #[error("failed to write catalog {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// The catalog document: materialized events plus pass-through overrides.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Catalog {
    /// Materialized events. This pipeline only ever appends here.
    pub events: Vec<Value>,

    /// Hand-maintained override records, preserved verbatim in content.
    pub overrides: Vec<Value>,
}

impl Catalog {
    /// Loads a catalog document from `path`.
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let data = fs::read_to_string(path).map_err(|source| CatalogError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        serde_json::from_str(&data).map_err(|source| CatalogError::Decode {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Appends normalized events to the `events` sequence in caller order.
    pub fn append_events(&mut self, events: &[NormalizedEvent]) -> Result<(), CatalogError> {
        for event in events {
            let record = serde_json::to_value(event).map_err(CatalogError::Encode)?;
            self.events.push(record);
        }
        Ok(())
    }

    /// Atomically writes the catalog to `path`.
    ///
    /// Serializes with two-space indentation, writes to a fresh temporary
    /// file in the target directory, fsyncs it, and renames it onto
    /// `path`. On any failure before the rename the temporary file is
    /// removed and the pre-existing output is left untouched.
    pub fn write_atomic(&self, path: &Path) -> Result<(), CatalogError> {
        let data = serde_json::to_vec_pretty(self).map_err(CatalogError::Encode)?;

        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };

        let write_err = |source: std::io::Error| CatalogError::Write {
            path: path.to_path_buf(),
            source,
        };

        // NamedTempFile removes itself on drop unless persisted, so every
        // early return below cleans up the partial file.
        let mut tmp = tempfile::Builder::new()
            .prefix(".events-materialized-")
            .suffix(".json.tmp")
            .tempfile_in(dir)
            .map_err(write_err)?;

        tmp.write_all(&data).map_err(write_err)?;
        tmp.as_file().sync_all().map_err(write_err)?;
        tmp.persist(path).map_err(|e| write_err(e.error))?;

        debug!(path = %path.display(), bytes = data.len(), "wrote catalog");
        Ok(())
    }
}

/// Merges freshly normalized events into the base catalog and persists the
/// result.
///
/// Reads the document at `base_path`, appends `new_events` to its `events`
/// sequence in the given order, and atomically writes the combined
/// document to `output_path`. Events are never reordered or deduplicated:
/// running the merge twice over the same base appends the same records
/// twice.
pub fn merge_and_write(
    base_path: &Path,
    new_events: &[NormalizedEvent],
    output_path: &Path,
) -> Result<(), CatalogError> {
    let mut catalog = Catalog::load(base_path)?;
    let base_count = catalog.events.len();

    catalog.append_events(new_events)?;
    catalog.write_atomic(output_path)?;

    debug!(
        base = base_count,
        appended = new_events.len(),
        output = %output_path.display(),
        "merged catalog"
    );
    Ok(())
}
