//! Assets page text

use crate::dict::{
    DictTable,
    define_dictionary,
};

define_dictionary! {
    page = "assets";
    /// Keys used on the assets page
    pub enum AssetsKey;
    /// Assets page text for one locale
    pub struct AssetsDict {
        Heading => heading: "heading",
        LearnMore => learn_more: "learnMore",
    }
}

/// Assets page text by locale
pub const ASSETS_DICT: DictTable<AssetsDict> = DictTable::new(
    AssetsDict { heading: "Our Assets", learn_more: "Learn more" },
    AssetsDict { heading: "公開中アセット", learn_more: "詳細を見る" },
);

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;
    use crate::dict::{
        DictKey,
        Dictionary,
    };
    use crate::locale::Locale;

    #[rstest]
    #[case(Locale::En, AssetsKey::LearnMore, "Learn more")]
    #[case(Locale::Ja, AssetsKey::LearnMore, "詳細を見る")]
    #[case(Locale::En, AssetsKey::Heading, "Our Assets")]
    #[case(Locale::Ja, AssetsKey::Heading, "公開中アセット")]
    fn test_assets_text(#[case] locale: Locale, #[case] key: AssetsKey, #[case] expected: &str) {
        assert_eq!(ASSETS_DICT.get(locale).get(key), expected);
    }

    #[rstest]
    fn test_key_names_match_templates() {
        assert_eq!(AssetsKey::LearnMore.name(), "learnMore");
        assert_eq!(AssetsKey::from_name("heading"), Some(AssetsKey::Heading));
    }
}
