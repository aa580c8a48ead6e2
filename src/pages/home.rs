//! Home page text

use crate::dict::{
    DictTable,
    define_dictionary,
};

define_dictionary! {
    page = "home";
    /// Keys used on the home page
    pub enum HomeKey;
    /// Home page text for one locale
    pub struct HomeDict {
        Title => title: "title",
        Intro => intro: "intro",
    }
}

/// Home page text by locale
pub const HOME_DICT: DictTable<HomeDict> = DictTable::new(
    HomeDict { title: "Welcome", intro: "Build smarter games with our tools." },
    HomeDict { title: "ようこそ", intro: "私たちのツールで賢くゲーム制作を。" },
);
