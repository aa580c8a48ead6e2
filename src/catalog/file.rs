//! Dictionary files on disk

use std::collections::HashMap;
use std::path::{
    Path,
    PathBuf,
};

use serde_json::Value;

use super::CatalogError;
use crate::locale::Locale;

/// Directory names that group dictionaries without naming a page.
const COMMON_PARENTS: [&str; 5] = ["i18n", "locales", "messages", "translations", "lang"];

/// One page's dictionary in one locale, loaded from JSON.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DictionaryFile {
    pub page: String,
    pub locale: Locale,
    pub path: PathBuf,
    /// Flattened key map (e.g., "cta.label" -> "Learn more").
    pub keys: HashMap<String, String>,
}

impl DictionaryFile {
    /// Reads and flattens the dictionary at `path`.
    ///
    /// # Errors
    /// - Page or locale cannot be inferred from the path
    /// - File cannot be read
    /// - Content is not a JSON object
    pub fn load(path: &Path, separator: &str) -> Result<Self, CatalogError> {
        let (page, locale) = detect_page_and_locale(path)
            .ok_or_else(|| CatalogError::UnknownLayout(path.to_path_buf()))?;

        let content = std::fs::read_to_string(path)
            .map_err(|source| CatalogError::Io { path: path.to_path_buf(), source })?;

        let json: Value = serde_json::from_str(&content)
            .map_err(|source| CatalogError::Parse { path: path.to_path_buf(), source })?;
        if !json.is_object() {
            return Err(CatalogError::NotAnObject(path.to_path_buf()));
        }

        let keys = flatten_json(&json, separator, None);
        tracing::debug!(path = %path.display(), page = %page, %locale, keys = keys.len(), "Loaded dictionary");

        Ok(Self { page, locale, path: path.to_path_buf(), keys })
    }
}

/// Infers (page, locale) from a dictionary path.
///
/// # Examples
/// - `i18n/home/en.json` → `("home", En)`
/// - `i18n/ja/assets.json` → `("assets", Ja)`
/// - `i18n/en.json` → `None` (no page)
/// - `i18n/home/fr.json` → `None` (unsupported locale)
#[must_use]
pub fn detect_page_and_locale(path: &Path) -> Option<(String, Locale)> {
    let stem = path.file_stem()?.to_str()?;
    let parent = path.parent()?.file_name()?.to_str()?;

    if let Ok(locale) = stem.parse::<Locale>() {
        if COMMON_PARENTS.contains(&parent.to_lowercase().as_str()) {
            return None;
        }
        return Some((parent.to_string(), locale));
    }

    parent.parse::<Locale>().ok().map(|locale| (stem.to_string(), locale))
}

/// Flatten nested JSON object into a separator-joined key map.
///
/// # Examples
/// ```
/// use serde_json::json;
/// use fish_dolls::catalog::flatten_json;
///
/// let json = json!({
///     "hero": {
///         "title": "Welcome",
///         "cta": "Learn more"
///     }
/// });
///
/// let flattened = flatten_json(&json, ".", None);
/// assert_eq!(flattened.get("hero.title"), Some(&"Welcome".to_string()));
/// assert_eq!(flattened.get("hero.cta"), Some(&"Learn more".to_string()));
/// ```
#[must_use]
pub fn flatten_json(
    json: &Value,
    separator: &str,
    prefix: Option<&str>,
) -> HashMap<String, String> {
    let mut result = HashMap::new();
    flatten_json_value(json, separator, prefix, &mut result);
    result
}

fn flatten_json_value(
    json: &Value,
    separator: &str,
    prefix: Option<&str>,
    result: &mut HashMap<String, String>,
) {
    match json {
        Value::Object(map) => {
            for (key, value) in map {
                let full_key =
                    prefix.map_or_else(|| key.clone(), |p| format!("{p}{separator}{key}"));
                flatten_json_value(value, separator, Some(&full_key), result);
            }
        }
        Value::Array(arr) => {
            for (index, value) in arr.iter().enumerate() {
                let full_key =
                    prefix.map_or_else(|| format!("[{index}]"), |p| format!("{p}[{index}]"));
                flatten_json_value(value, separator, Some(&full_key), result);
            }
        }
        // null is text that was never written
        Value::Null => insert_flat(result, prefix, String::new()),
        Value::String(s) => insert_flat(result, prefix, s.clone()),
        _ => insert_flat(result, prefix, json.to_string()),
    }
}

/// Inserts a flattened entry. A later entry for the same key replaces the earlier one.
fn insert_flat(result: &mut HashMap<String, String>, key: Option<&str>, value: String) {
    let Some(key) = key else {
        return;
    };
    if let Some(previous) = result.insert(key.to_string(), value) {
        tracing::warn!(key, previous = %previous, "Flattened key defined more than once");
    }
}
