//! Locale dictionary resolution
//!
//! Binds a page's [`DictTable`] to one [`Locale`] and hands back a lookup
//! function for rendering.

use crate::dict::{
    DictKey,
    DictTable,
    Dictionary,
};
use crate::error::I18nError;
use crate::locale::Locale;

/// Returns the lookup function for `locale`.
///
/// # Examples
/// ```
/// use fish_dolls::{HOME_DICT, HomeKey, Locale, create_t};
///
/// let t = create_t(&HOME_DICT, Locale::Ja);
/// assert_eq!(t(HomeKey::Title), "ようこそ");
/// ```
pub fn create_t<D: Dictionary>(
    table: &DictTable<D>,
    locale: Locale,
) -> impl Fn(D::Key) -> &'static str + '_ {
    let dict = table.get(locale);
    move |key| dict.get(key)
}

/// A page dictionary bound to one locale.
#[derive(Debug)]
pub struct Translator<'a, D: Dictionary> {
    /// Dictionary of the selected locale
    dict: &'a D,
    /// Selected locale
    locale: Locale,
}

impl<D: Dictionary> Clone for Translator<'_, D> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<D: Dictionary> Copy for Translator<'_, D> {}

impl<'a, D: Dictionary> Translator<'a, D> {
    /// Binds `table` to `locale`.
    #[must_use]
    pub const fn new(table: &'a DictTable<D>, locale: Locale) -> Self {
        Self { dict: table.get(locale), locale }
    }

    /// Binds `table` to the locale named by `code`, typically a route
    /// parameter.
    ///
    /// # Errors
    /// [`I18nError::UnsupportedLocale`] when `code` is not a published locale.
    pub fn for_code(table: &'a DictTable<D>, code: &str) -> Result<Self, I18nError> {
        let locale: Locale = code.parse()?;
        tracing::debug!(page = D::PAGE, %locale, "Resolved dictionary");
        Ok(Self::new(table, locale))
    }

    /// Returns the text for `key`.
    #[must_use]
    pub fn t(&self, key: D::Key) -> &'static str {
        self.dict.get(key)
    }

    /// Returns the text for the key named `name`.
    ///
    /// # Errors
    /// [`I18nError::MissingKey`] when the page has no such key.
    pub fn t_str(&self, name: &str) -> Result<&'static str, I18nError> {
        D::Key::from_name(name)
            .map(|key| self.t(key))
            .ok_or_else(|| I18nError::MissingKey { page: D::PAGE, key: name.to_string() })
    }

    /// Locale this translator is bound to.
    #[must_use]
    pub const fn locale(&self) -> Locale {
        self.locale
    }
}
