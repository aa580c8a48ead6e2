//! Supported locales

use std::fmt;
use std::str::FromStr;

use serde::{
    Deserialize,
    Serialize,
};

use crate::error::I18nError;

/// A locale the site is published in.
///
/// The set is closed: adding a variant forces every dictionary table to
/// provide a value for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    /// English
    En,
    /// Japanese
    Ja,
}

/// All supported locales in publication order.
pub const LOCALES: [Locale; 2] = [Locale::En, Locale::Ja];

impl Locale {
    /// Returns the locale code used in routes and file names.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Ja => "ja",
        }
    }

    /// Iterates over every supported locale.
    pub fn all() -> impl Iterator<Item = Self> {
        LOCALES.into_iter()
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Locale {
    type Err = I18nError;

    /// Parses an exact locale code. Region tags are rejected; `en-US` is not
    /// a published locale.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        LOCALES
            .into_iter()
            .find(|locale| locale.as_str() == s)
            .ok_or_else(|| I18nError::UnsupportedLocale(s.to_string()))
    }
}
