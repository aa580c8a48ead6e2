//! Site-wide metadata shared by every page

/// Site name shown in titles and feeds
pub const SITE_TITLE: &str = "Fish Dolls";

/// Default meta description
pub const SITE_DESCRIPTION: &str = "Welcome to my website!";
