//! fish-dolls
//!
//! Fish Dolls サイト向けのロケール別辞書、サイト設定、辞書ファイルの整合性チェック

pub mod catalog;
pub mod config;
pub mod dict;
pub mod error;
pub mod locale;
pub mod pages;
pub mod resolver;
pub mod site;

pub use dict::{
    DictKey,
    DictTable,
    Dictionary,
};
pub use error::I18nError;
pub use locale::{
    LOCALES,
    Locale,
};
pub use pages::{
    ASSETS_DICT,
    AssetsKey,
    HOME_DICT,
    HomeKey,
};
pub use resolver::{
    Translator,
    create_t,
};
pub use site::{
    SITE_DESCRIPTION,
    SITE_TITLE,
};
