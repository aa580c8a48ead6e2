//! Entry point for the dictionary checker.
//!
//! Usage: `fish-dolls [PROJECT_ROOT]`

use std::path::PathBuf;
use std::process::ExitCode;

use fish_dolls::catalog::{
    Catalog,
    CatalogError,
    DictionaryFile,
    check_static_table,
    find_dictionary_files,
};
use fish_dolls::config::ConfigManager;
use fish_dolls::{
    ASSETS_DICT,
    HOME_DICT,
    Locale,
    SITE_TITLE,
};
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let (writer, _guard) = tracing_appender::non_blocking(std::io::stderr());
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(writer)
        .init();

    let project_root =
        std::env::args_os().nth(1).map_or_else(|| PathBuf::from("."), PathBuf::from);

    if run(project_root) { ExitCode::SUCCESS } else { ExitCode::FAILURE }
}

/// Runs every check. Returns false when anything needs fixing.
fn run(project_root: PathBuf) -> bool {
    let mut config_manager = ConfigManager::new();
    if let Err(e) = config_manager.load_settings(Some(project_root)) {
        tracing::error!("{e}");
        return false;
    }
    let settings = config_manager.get_settings();
    tracing::info!(
        site = %settings.site,
        base = %settings.base,
        integrations = ?settings.integrations,
        "Checking {SITE_TITLE}"
    );

    let mut issues = check_static_table(&HOME_DICT);
    issues.extend(check_static_table(&ASSETS_DICT));

    let matcher = match config_manager.dictionary_matcher() {
        Ok(matcher) => matcher,
        Err(e) => {
            tracing::error!("{e}");
            return false;
        }
    };

    let mut load_failed = false;
    let mut files = Vec::new();
    for path in find_dictionary_files(&matcher) {
        match DictionaryFile::load(&path, &settings.dictionaries.key_separator) {
            Ok(file) => files.push(file),
            Err(e @ CatalogError::UnknownLayout(_)) => tracing::warn!("Skipped: {e}"),
            Err(e) => {
                tracing::error!("{e}");
                load_failed = true;
            }
        }
    }

    let catalog = Catalog::new(files);
    for page in catalog.pages() {
        for locale in Locale::all() {
            if let Some(url) = settings.page_url(locale, page) {
                tracing::debug!(page, %locale, url = %url, "Page URL");
            }
        }
    }
    issues.extend(catalog.check());

    for issue in &issues {
        tracing::warn!("{issue}");
    }
    tracing::info!(
        pages = catalog.pages().count(),
        issues = issues.len(),
        "Dictionary check finished"
    );

    !load_failed && issues.is_empty()
}
