use thiserror::Error;

/// Errors raised while resolving localized strings
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum I18nError {
    /// The locale code is not one of the published locales
    #[error("Unsupported locale '{0}'")]
    UnsupportedLocale(String),
    /// The key name is not part of the page's dictionary
    #[error("Key '{key}' not found in dictionary '{page}'")]
    MissingKey {
        /// Page whose dictionary was consulted
        page: &'static str,
        /// Requested key name
        key: String,
    },
}
