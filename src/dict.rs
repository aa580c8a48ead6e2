//! Typed per-page dictionaries
//!
//! A page declares its keys once as an enum and its text as a struct with one
//! field per key. A [`DictTable`] holds one struct per [`Locale`], so a table
//! whose locales disagree on keys does not compile.

use std::fmt;

use crate::locale::Locale;

/// Closed key set of one page's dictionary.
pub trait DictKey: Copy + Eq + fmt::Debug + 'static {
    /// Every key, in declaration order.
    const ALL: &'static [Self];

    /// Key name as written in templates and dictionary files.
    fn name(self) -> &'static str;

    /// Looks a key up by its template name.
    #[must_use]
    fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|key| key.name() == name)
    }
}

/// Text of one page in one locale.
pub trait Dictionary: fmt::Debug + 'static {
    /// Key set shared by every locale of the page.
    type Key: DictKey;

    /// Page identifier, used in diagnostics.
    const PAGE: &'static str;

    /// Returns the text for `key`.
    fn get(&self, key: Self::Key) -> &'static str;

    /// Iterates over every (key, text) pair in key declaration order.
    fn entries(&self) -> impl Iterator<Item = (Self::Key, &'static str)> + '_ {
        Self::Key::ALL.iter().map(move |&key| (key, self.get(key)))
    }
}

/// One dictionary per supported locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DictTable<D> {
    /// English text
    en: D,
    /// Japanese text
    ja: D,
}

impl<D: Dictionary> DictTable<D> {
    /// Creates a table from one dictionary per locale.
    #[must_use]
    pub const fn new(en: D, ja: D) -> Self {
        Self { en, ja }
    }

    /// Returns the dictionary for `locale`.
    #[must_use]
    pub const fn get(&self, locale: Locale) -> &D {
        match locale {
            Locale::En => &self.en,
            Locale::Ja => &self.ja,
        }
    }

    /// Iterates over (locale, dictionary) pairs in [`crate::LOCALES`] order.
    pub fn iter(&self) -> impl Iterator<Item = (Locale, &D)> + '_ {
        Locale::all().map(move |locale| (locale, self.get(locale)))
    }
}

/// Declares a page's key enum, its dictionary struct and the trait impls
/// tying them together.
macro_rules! define_dictionary {
    (
        page = $page:literal;
        $(#[$key_meta:meta])*
        $key_vis:vis enum $key:ident;
        $(#[$dict_meta:meta])*
        $dict_vis:vis struct $dict:ident {
            $( $variant:ident => $field:ident : $name:literal ),+ $(,)?
        }
    ) => {
        $(#[$key_meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $key_vis enum $key {
            $(
                #[doc = concat!("`", $name, "`")]
                $variant,
            )+
        }

        impl $crate::dict::DictKey for $key {
            const ALL: &'static [Self] = &[$(Self::$variant),+];

            fn name(self) -> &'static str {
                match self {
                    $(Self::$variant => $name,)+
                }
            }
        }

        $(#[$dict_meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        $dict_vis struct $dict {
            $(
                #[doc = concat!("Text for `", $name, "`")]
                pub $field: &'static str,
            )+
        }

        impl $crate::dict::Dictionary for $dict {
            type Key = $key;

            const PAGE: &'static str = $page;

            fn get(&self, key: $key) -> &'static str {
                match key {
                    $($key::$variant => self.$field,)+
                }
            }
        }
    };
}

pub(crate) use define_dictionary;

#[cfg(test)]
mod tests {
    use googletest::prelude::*;
    use rstest::rstest;

    use super::*;

    define_dictionary! {
        page = "sample";
        /// Keys of the sample page
        enum SampleKey;
        /// Sample page text
        struct SampleDict {
            Greeting => greeting: "greeting",
            CallToAction => call_to_action: "callToAction",
        }
    }

    /// Sample table
    const SAMPLE: DictTable<SampleDict> = DictTable::new(
        SampleDict { greeting: "Hello", call_to_action: "Go" },
        SampleDict { greeting: "こんにちは", call_to_action: "進む" },
    );

    #[googletest::test]
    fn test_key_names_follow_declaration() {
        let names: Vec<String> =
            SampleKey::ALL.iter().map(|key| key.name().to_string()).collect();
        assert_that!(names, elements_are![eq("greeting"), eq("callToAction")]);
    }

    #[rstest]
    #[case("greeting", Some(SampleKey::Greeting))]
    #[case("callToAction", Some(SampleKey::CallToAction))]
    #[case("call_to_action", None)]
    #[case("", None)]
    fn test_from_name(#[case] name: &str, #[case] expected: Option<SampleKey>) {
        assert_eq!(SampleKey::from_name(name), expected);
    }

    #[rstest]
    fn test_table_selects_locale() {
        assert_eq!(SAMPLE.get(Locale::En).get(SampleKey::Greeting), "Hello");
        assert_eq!(SAMPLE.get(Locale::Ja).get(SampleKey::Greeting), "こんにちは");
    }

    #[rstest]
    fn test_entries_cover_every_key() {
        let entries: Vec<_> = SAMPLE.get(Locale::Ja).entries().collect();
        assert_eq!(
            entries,
            [(SampleKey::Greeting, "こんにちは"), (SampleKey::CallToAction, "進む")]
        );
    }

    #[rstest]
    fn test_iter_visits_locales_in_order() {
        let locales: Vec<Locale> = SAMPLE.iter().map(|(locale, _)| locale).collect();
        assert_eq!(locales, [Locale::En, Locale::Ja]);
        assert_eq!(SampleDict::PAGE, "sample");
    }
}
