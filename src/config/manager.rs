//! 設定管理を行うモジュール

use std::path::{
    Path,
    PathBuf,
};

use super::{
    ConfigError,
    FileMatcher,
    MatcherError,
    SiteSettings,
    loader,
};

/// 設定管理を行う
#[derive(Default, Debug, Clone)]
pub struct ConfigManager {
    /// 現在の設定
    current_settings: SiteSettings,

    /// プロジェクトのルートパス
    project_root: Option<PathBuf>,
}

impl ConfigManager {
    /// 新しい設定マネージャーを作成
    #[must_use]
    pub fn new() -> Self {
        Self { current_settings: SiteSettings::default(), project_root: None }
    }

    /// 設定を読み込む
    ///
    /// 設定ファイルがなければデフォルト設定を使う。
    ///
    /// # Arguments
    /// * `project_root` - プロジェクトのルートパス
    ///
    /// # Errors
    /// - プロジェクトルートがディレクトリでない
    /// - ファイル読み込みエラー
    /// - JSON パースエラー
    /// - バリデーションエラー
    pub fn load_settings(&mut self, project_root: Option<PathBuf>) -> Result<(), ConfigError> {
        tracing::debug!("Loading settings for project: {:?}", project_root);

        if let Some(root) = &project_root
            && !root.is_dir()
        {
            return Err(ConfigError::ProjectRootNotFound(root.clone()));
        }

        let settings = if let Some(root) = &project_root {
            loader::load_from_project(root)?.map_or_else(SiteSettings::default, |loaded| {
                tracing::debug!("Loaded project settings: {:?}", loaded);
                loaded
            })
        } else {
            SiteSettings::default()
        };

        settings.validate().map_err(ConfigError::ValidationErrors)?;

        self.current_settings = settings;
        self.project_root = project_root;
        tracing::debug!("Settings loaded successfully: {:?}", self.current_settings);

        Ok(())
    }

    /// 現在の設定を取得
    #[must_use]
    pub const fn get_settings(&self) -> &SiteSettings {
        &self.current_settings
    }

    /// プロジェクトルートを取得
    #[must_use]
    pub fn project_root(&self) -> Option<&Path> {
        self.project_root.as_deref()
    }

    /// 辞書ファイル用のマッチャーを作成
    ///
    /// # Errors
    /// 不正な glob パターン
    pub fn dictionary_matcher(&self) -> Result<FileMatcher, MatcherError> {
        let root = self.project_root.clone().unwrap_or_else(|| PathBuf::from("."));
        FileMatcher::new(root, &self.current_settings.dictionaries)
    }
}
