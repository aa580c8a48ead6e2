//! ページ辞書と辞書ファイルチェックの結合テスト

#![allow(clippy::unwrap_used)]
#![allow(missing_docs)]

use std::fs;

use fish_dolls::catalog::{
    Catalog,
    DictionaryFile,
    IssueKind,
    find_dictionary_files,
};
use fish_dolls::config::ConfigManager;
use fish_dolls::{
    ASSETS_DICT,
    AssetsKey,
    DictKey,
    DictTable,
    Dictionary,
    HOME_DICT,
    HomeKey,
    I18nError,
    LOCALES,
    Locale,
    Translator,
    create_t,
};
use pretty_assertions::assert_eq;
use tempfile::TempDir;

/// Every key of `table` resolves to non-empty text in every locale.
fn assert_total<D: Dictionary>(table: &DictTable<D>) {
    for locale in LOCALES {
        let t = create_t(table, locale);
        for &key in D::Key::ALL {
            assert!(!t(key).is_empty(), "{}/{locale}/{} is empty", D::PAGE, key.name());
        }
    }
}

#[test]
fn test_every_key_resolves_to_text() {
    assert_total(&HOME_DICT);
    assert_total(&ASSETS_DICT);
}

#[test]
fn test_home_title_by_locale() {
    assert_eq!(create_t(&HOME_DICT, Locale::En)(HomeKey::Title), "Welcome");
    assert_eq!(create_t(&HOME_DICT, Locale::Ja)(HomeKey::Title), "ようこそ");
}

#[test]
fn test_assets_learn_more_by_locale() {
    assert_eq!(create_t(&ASSETS_DICT, Locale::En)(AssetsKey::LearnMore), "Learn more");
    assert_eq!(create_t(&ASSETS_DICT, Locale::Ja)(AssetsKey::LearnMore), "詳細を見る");
}

#[test]
fn test_route_parameter_with_unsupported_locale() {
    let result = Translator::for_code(&HOME_DICT, "de");

    assert_eq!(result.unwrap_err(), I18nError::UnsupportedLocale("de".to_string()));
}

#[test]
fn test_route_parameter_and_template_key() {
    let t = Translator::for_code(&HOME_DICT, "ja").unwrap();

    assert_eq!(t.t_str("intro"), Ok("私たちのツールで賢くゲーム制作を。"));
}

#[test]
fn test_project_dictionaries_check() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    fs::write(root.join(".fish-dolls.json"), r#"{ "dictionaries": { "includePatterns": ["i18n/**/*.json"] } }"#)
        .unwrap();
    for (relative, content) in [
        ("i18n/home/en.json", r#"{"title": "Welcome", "intro": "Build smarter games with our tools."}"#),
        ("i18n/home/ja.json", r#"{"title": "ようこそ"}"#),
        ("i18n/assets/en.json", r#"{"heading": "Our Assets", "learnMore": "Learn more"}"#),
        ("i18n/assets/ja.json", r#"{"heading": "公開中アセット", "learnMore": "詳細を見る"}"#),
    ] {
        let path = root.join(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    let mut config_manager = ConfigManager::new();
    config_manager.load_settings(Some(root.to_path_buf())).unwrap();
    let matcher = config_manager.dictionary_matcher().unwrap();
    let files: Vec<DictionaryFile> = find_dictionary_files(&matcher)
        .iter()
        .map(|path| DictionaryFile::load(path, ".").unwrap())
        .collect();

    let catalog = Catalog::new(files);
    let issues = catalog.check();

    assert_eq!(catalog.pages().collect::<Vec<_>>(), ["assets", "home"]);
    assert_eq!(issues.len(), 1);
    assert_eq!(issues[0].page, "home");
    assert_eq!(issues[0].locale, Locale::Ja);
    assert_eq!(issues[0].kind, IssueKind::MissingKey);
    assert_eq!(issues[0].key.as_deref(), Some("intro"));
}
