//! Dictionary file discovery

use std::path::PathBuf;

use ignore::WalkBuilder;

use crate::config::FileMatcher;

/// Walks the project root and returns every dictionary file, sorted.
///
/// `.gitignore` rules are honored. Unreadable entries are skipped.
#[must_use]
pub fn find_dictionary_files(matcher: &FileMatcher) -> Vec<PathBuf> {
    let project_root = matcher.project_root();
    tracing::debug!(project_root = %project_root.display(), "Searching dictionary files");

    let mut found_files = Vec::new();
    for result in WalkBuilder::new(project_root)
        .hidden(false)
        .git_ignore(true)
        .git_global(true)
        .git_exclude(true)
        .follow_links(false)
        .build()
    {
        let entry = match result {
            Ok(entry) => entry,
            Err(err) => {
                tracing::warn!(?err, "Failed to read directory entry");
                continue;
            }
        };

        if !entry.file_type().is_some_and(|ft| ft.is_file()) {
            continue;
        }

        if matcher.is_dictionary_file(entry.path()) {
            found_files.push(entry.into_path());
        }
    }

    found_files.sort();
    tracing::debug!(count = found_files.len(), "Found dictionary files");
    found_files
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::fs;

    use rstest::rstest;
    use tempfile::TempDir;

    use super::*;
    use crate::config::DictionaryFilesConfig;

    fn write(root: &std::path::Path, relative: &str, content: &str) {
        let path = root.join(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    #[rstest]
    fn test_find_dictionary_files() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        write(root, "src/i18n/home/en.json", "{}");
        write(root, "src/i18n/home/ja.json", "{}");
        write(root, "src/i18n/home.ts", "");
        write(root, "package.json", "{}");
        write(root, "dist/src/i18n/home/en.json", "{}");

        let matcher =
            FileMatcher::new(root.to_path_buf(), &DictionaryFilesConfig::default()).unwrap();
        let files = find_dictionary_files(&matcher);

        assert_eq!(
            files,
            [root.join("src/i18n/home/en.json"), root.join("src/i18n/home/ja.json")]
        );
    }

    #[rstest]
    fn test_find_dictionary_files_empty_project() {
        let temp_dir = TempDir::new().unwrap();

        let matcher = FileMatcher::new(
            temp_dir.path().to_path_buf(),
            &DictionaryFilesConfig::default(),
        )
        .unwrap();

        assert!(find_dictionary_files(&matcher).is_empty());
    }
}
