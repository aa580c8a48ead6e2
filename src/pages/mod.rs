//! Dictionaries of the site's pages

pub mod assets;
pub mod home;

pub use assets::{
    ASSETS_DICT,
    AssetsDict,
    AssetsKey,
};
pub use home::{
    HOME_DICT,
    HomeDict,
    HomeKey,
};
