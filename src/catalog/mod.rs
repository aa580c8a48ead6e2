//! Dictionaries authored as JSON files and their consistency checks

mod check;
mod file;
mod indexer;

use std::path::PathBuf;

use thiserror::Error;

pub use check::{
    Catalog,
    IssueKind,
    SchemaIssue,
    check_static_table,
};
pub use file::{
    DictionaryFile,
    detect_page_and_locale,
    flatten_json,
};
pub use indexer::find_dictionary_files;

/// Errors raised while loading dictionary files
#[derive(Error, Debug)]
pub enum CatalogError {
    /// The path names no (page, locale) pair
    #[error("Cannot infer page and locale from '{}'", .0.display())]
    UnknownLayout(PathBuf),
    /// Error when failing to read a file
    #[error("Failed to read '{}': {source}", path.display())]
    Io {
        /// File being read
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },
    /// Error when a file is not valid JSON
    #[error("Failed to parse '{}': {source}", path.display())]
    Parse {
        /// File being parsed
        path: PathBuf,
        /// Underlying JSON error
        #[source]
        source: serde_json::Error,
    },
    /// The top-level JSON value is not an object
    #[error("Dictionary '{}' must be a JSON object", .0.display())]
    NotAnObject(PathBuf),
}
