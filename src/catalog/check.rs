//! Schema consistency checks
//!
//! Every locale of a page must define the same keys, and no text may be
//! empty. Typed tables get the first half from the compiler; JSON dictionaries
//! are checked here.

use std::collections::{
    BTreeMap,
    BTreeSet,
};
use std::fmt;

use super::DictionaryFile;
use crate::dict::{
    DictKey,
    DictTable,
    Dictionary,
};
use crate::locale::Locale;

/// What is wrong with a dictionary
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum IssueKind {
    /// The page has no dictionary for the locale
    MissingLocale,
    /// A sibling locale defines a key this locale lacks
    MissingKey,
    /// The text is empty or whitespace
    EmptyValue,
    /// More than one file provides the same (page, locale)
    DuplicateFile,
}

/// One consistency finding
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SchemaIssue {
    pub page: String,
    pub locale: Locale,
    pub kind: IssueKind,
    /// Offending key, for key-level issues
    pub key: Option<String>,
}

impl fmt::Display for SchemaIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let key = self.key.as_deref().unwrap_or_default();
        match self.kind {
            IssueKind::MissingLocale => {
                write!(f, "Dictionary '{}' has no '{}' entry", self.page, self.locale)
            }
            IssueKind::MissingKey => {
                write!(f, "Key '{key}' of '{}' is missing in '{}'", self.page, self.locale)
            }
            IssueKind::EmptyValue => {
                write!(f, "Key '{key}' of '{}' is empty in '{}'", self.page, self.locale)
            }
            IssueKind::DuplicateFile => {
                write!(f, "Dictionary '{}' has more than one '{}' file", self.page, self.locale)
            }
        }
    }
}

/// Loaded JSON dictionaries grouped by page.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    /// page -> locale -> dictionary
    pages: BTreeMap<String, BTreeMap<Locale, DictionaryFile>>,
    /// Files shadowed by an earlier file for the same (page, locale)
    duplicates: Vec<SchemaIssue>,
}

impl Catalog {
    /// Groups `files` by page. The first file for a (page, locale) wins.
    pub fn new(files: impl IntoIterator<Item = DictionaryFile>) -> Self {
        let mut catalog = Self::default();
        for file in files {
            let locales = catalog.pages.entry(file.page.clone()).or_default();
            if let Some(existing) = locales.get(&file.locale) {
                tracing::warn!(
                    kept = %existing.path.display(),
                    ignored = %file.path.display(),
                    "Duplicate dictionary file"
                );
                catalog.duplicates.push(SchemaIssue {
                    page: file.page,
                    locale: file.locale,
                    kind: IssueKind::DuplicateFile,
                    key: None,
                });
                continue;
            }
            locales.insert(file.locale, file);
        }
        catalog
    }

    /// Page names in sorted order.
    pub fn pages(&self) -> impl Iterator<Item = &str> {
        self.pages.keys().map(String::as_str)
    }

    #[must_use]
    pub fn get(&self, page: &str, locale: Locale) -> Option<&DictionaryFile> {
        self.pages.get(page)?.get(&locale)
    }

    /// Returns every consistency issue, sorted by page, locale, kind and key.
    #[must_use]
    pub fn check(&self) -> Vec<SchemaIssue> {
        let mut issues = self.duplicates.clone();

        for (page, files) in &self.pages {
            let all_keys: BTreeSet<&str> =
                files.values().flat_map(|file| file.keys.keys().map(String::as_str)).collect();

            for locale in Locale::all() {
                let Some(file) = files.get(&locale) else {
                    issues.push(SchemaIssue {
                        page: page.clone(),
                        locale,
                        kind: IssueKind::MissingLocale,
                        key: None,
                    });
                    continue;
                };

                for &key in &all_keys {
                    let kind = match file.keys.get(key) {
                        None => IssueKind::MissingKey,
                        Some(value) if value.trim().is_empty() => IssueKind::EmptyValue,
                        Some(_) => continue,
                    };
                    issues.push(SchemaIssue {
                        page: page.clone(),
                        locale,
                        kind,
                        key: Some(key.to_string()),
                    });
                }
            }
        }

        issues.sort();
        issues
    }
}

/// Reports empty text in a typed table.
#[must_use]
pub fn check_static_table<D: Dictionary>(table: &DictTable<D>) -> Vec<SchemaIssue> {
    table
        .iter()
        .flat_map(|(locale, dict)| {
            dict.entries().filter(|(_, text)| text.trim().is_empty()).map(move |(key, _)| {
                SchemaIssue {
                    page: D::PAGE.to_string(),
                    locale,
                    kind: IssueKind::EmptyValue,
                    key: Some(key.name().to_string()),
                }
            })
        })
        .collect()
}
