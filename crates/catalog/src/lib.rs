//! faqbot catalog layer.
//!
//! The catalog is the immutable set of known question/answer pairs the
//! matching engine scores queries against. It is built exactly once from a
//! JSON dataset at process start and never mutated afterwards, so any
//! number of concurrent readers can share it without locking.
//!
//! ## Dataset format
//!
//! A JSON array of records:
//!
//! ```json
//! [
//!   { "question": "What is your name?", "answer": "My full name is Suman Das." },
//!   { "question": "What are your hobbies?", "answer": "I enjoy playing the guitar." }
//! ]
//! ```
//!
//! ## Invariants worth knowing
//!
//! - Entry order is load order and is observable: the matcher breaks score
//!   ties in favor of the earliest entry.
//! - Duplicate questions are preserved as independent entries, not
//!   de-duplicated.
//! - Loading fails fast on a missing, unreadable, or malformed dataset;
//!   an empty list is valid data and loads as an empty catalog.

mod error;
mod types;

pub use crate::error::CatalogError;
pub use crate::types::CatalogEntry;

use std::fs;
use std::io::Read;
use std::path::Path;

/// An ordered, read-only collection of [`CatalogEntry`] values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    entries: Vec<CatalogEntry>,
}

impl Catalog {
    /// Builds a catalog from already-constructed entries, preserving order.
    pub fn from_entries(entries: Vec<CatalogEntry>) -> Self {
        Self { entries }
    }

    /// Parses a catalog from any JSON reader.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, CatalogError> {
        let entries: Vec<CatalogEntry> = serde_json::from_reader(reader)?;
        Ok(Self { entries })
    }

    /// Loads the catalog from a JSON dataset file.
    ///
    /// Fails fast with a [`CatalogError`] if the file is absent, unreadable,
    /// or not a valid list of question/answer records.
    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|source| {
            if source.kind() == std::io::ErrorKind::NotFound {
                CatalogError::DatasetMissing {
                    path: path.to_path_buf(),
                }
            } else {
                CatalogError::DatasetUnreadable {
                    path: path.to_path_buf(),
                    source,
                }
            }
        })?;
        let entries: Vec<CatalogEntry> = serde_json::from_str(&raw)?;
        tracing::info!(path = %path.display(), entries = entries.len(), "dataset loaded");
        Ok(Self { entries })
    }

    /// The entries in load order.
    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CatalogEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a CatalogEntry;
    type IntoIter = std::slice::Iter<'a, CatalogEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
