use serde::{
    Deserialize,
    Serialize,
};
use thiserror::Error;

use crate::locale::Locale;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Configuration error in '{field_path}': {message}")]
pub struct ValidationError {
    /// JSON path to the field (e.g., "dictionaries.includePatterns[0]")
    pub field_path: String,
    pub message: String,
}

impl ValidationError {
    #[must_use]
    pub fn new(field_path: impl Into<String>, message: impl Into<String>) -> Self {
        Self { field_path: field_path.into(), message: message.into() }
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration validation failed:\n{}", format_validation_errors(.0))]
    ValidationErrors(Vec<ValidationError>),

    #[error("Failed to load configuration file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse configuration: {0}")]
    ParseError(#[from] serde_json::Error),

    #[error("Project root is not a directory: {}", .0.display())]
    ProjectRootNotFound(std::path::PathBuf),

    /// Malformed JSON/JSONC text, before any field is read
    #[error("Invalid configuration syntax: {0}")]
    SyntaxError(String),
}

fn format_validation_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .enumerate()
        .map(|(i, err)| format!("  {}. {} - {}", i + 1, err.field_path, err.message))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Rendering integration enabled for the site build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Integration {
    /// Markdown/MDX page support
    Mdx,
    /// `sitemap.xml` generation
    Sitemap,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SiteSettings {
    /// Absolute deployment URL.
    pub site: String,
    /// URL path prefix every page is served under.
    pub base: String,
    /// Build integrations, in the order the build tool applies them.
    pub integrations: Vec<Integration>,
    pub dictionaries: DictionaryFilesConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DictionaryFilesConfig {
    /// Globs relative to the project root, e.g. `src/i18n/**/*.json`.
    pub include_patterns: Vec<String>,
    pub exclude_patterns: Vec<String>,
    /// Joins nested object keys when flattening dictionary files.
    pub key_separator: String,
}

impl Default for SiteSettings {
    fn default() -> Self {
        Self {
            site: "https://goth-annie.github.io/fish-dolls".to_string(),
            base: "/fish-dolls".to_string(),
            integrations: vec![Integration::Mdx, Integration::Sitemap],
            dictionaries: DictionaryFilesConfig::default(),
        }
    }
}

impl Default for DictionaryFilesConfig {
    fn default() -> Self {
        Self {
            include_patterns: vec!["src/i18n/**/*.json".to_string()],
            exclude_patterns: vec!["node_modules/**".to_string(), "dist/**".to_string()],
            key_separator: ".".to_string(),
        }
    }
}

/// Splits an absolute `http`/`https` URL into (origin, path).
///
/// Returns `None` when the scheme is missing or the host is empty.
fn split_url(url: &str) -> Option<(&str, &str)> {
    let rest = url.strip_prefix("https://").or_else(|| url.strip_prefix("http://"))?;
    let host_end = rest.find('/').unwrap_or(rest.len());
    let host = rest.get(..host_end)?;
    if host.is_empty() || host.chars().any(char::is_whitespace) {
        return None;
    }
    let origin_len = url.len() - rest.len() + host_end;
    Some((url.get(..origin_len)?, url.get(origin_len..)?))
}

impl SiteSettings {
    /// # Errors
    /// - `site` is not an absolute http(s) URL
    /// - `base` is not a normalized path prefix, or disagrees with `site`
    /// - Duplicate integration
    /// - Missing or invalid dictionary glob pattern
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        let site_path = match split_url(&self.site) {
            Some((_, path)) => Some(path.trim_end_matches('/')),
            None => {
                errors.push(ValidationError::new(
                    "site",
                    format!(
                        "'{}' is not an absolute URL. Example: \"https://example.github.io/fish-dolls\"",
                        self.site
                    ),
                ));
                None
            }
        };

        if !self.base.starts_with('/') {
            errors.push(ValidationError::new(
                "base",
                format!("The base path must start with '/'. Got '{}'", self.base),
            ));
        } else if self.base.len() > 1 && self.base.ends_with('/') {
            errors.push(ValidationError::new(
                "base",
                format!("Remove the trailing '/' from '{}'", self.base),
            ));
        } else if let Some(path) = site_path
            && !path.is_empty()
            && !path.ends_with(self.base.as_str())
        {
            errors.push(ValidationError::new(
                "base",
                format!("The site URL path '{path}' does not end with the base path '{}'", self.base),
            ));
        }

        for (index, integration) in self.integrations.iter().enumerate() {
            if self.integrations.iter().take(index).any(|seen| seen == integration) {
                errors.push(ValidationError::new(
                    format!("integrations[{index}]"),
                    format!("Integration '{integration:?}' is listed more than once"),
                ));
            }
        }

        if self.dictionaries.include_patterns.is_empty() {
            errors.push(ValidationError::new(
                "dictionaries.includePatterns",
                "At least one pattern is required. Example: [\"src/i18n/**/*.json\"]",
            ));
        }

        for (index, pattern) in self.dictionaries.include_patterns.iter().enumerate() {
            if let Err(e) = globset::Glob::new(pattern) {
                errors.push(ValidationError::new(
                    format!("dictionaries.includePatterns[{index}]"),
                    format!("Invalid glob pattern '{pattern}': {e}"),
                ));
            }
        }

        for (index, pattern) in self.dictionaries.exclude_patterns.iter().enumerate() {
            if let Err(e) = globset::Glob::new(pattern) {
                errors.push(ValidationError::new(
                    format!("dictionaries.excludePatterns[{index}]"),
                    format!("Invalid glob pattern '{pattern}': {e}"),
                ));
            }
        }

        if self.dictionaries.key_separator.is_empty() {
            errors.push(ValidationError::new(
                "dictionaries.keySeparator",
                "The separator cannot be empty. Please specify a separator, for example: \".\" (dot)",
            ));
        }

        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }

    /// Public URL of `page` in `locale`. The `home` page is the locale root.
    ///
    /// Returns `None` when `site` is not an absolute URL.
    #[must_use]
    pub fn page_url(&self, locale: Locale, page: &str) -> Option<String> {
        let (origin, _) = split_url(&self.site)?;
        let base = self.base.trim_end_matches('/');
        let url = match page.trim_matches('/') {
            "" | "home" => format!("{origin}{base}/{locale}/"),
            slug => format!("{origin}{base}/{locale}/{slug}/"),
        };
        Some(url)
    }
}
