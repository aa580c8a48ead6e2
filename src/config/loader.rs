//! 設定ファイルの読み込み関数

use std::path::Path;

use jsonc_parser::ParseOptions;

use super::{
    ConfigError,
    SiteSettings,
};

/// 設定ファイル名
pub(super) const CONFIG_FILE_NAME: &str = ".fish-dolls.json";

/// プロジェクトから設定を読み込む
///
/// `.fish-dolls.json` ファイルを探して読み込む。コメントと末尾カンマを許容する。
///
/// # Arguments
/// * `project_root` - プロジェクトのルートパス
///
/// # Returns
/// - `Ok(Some(settings))`: 設定ファイルが見つかり、読み込みに成功
/// - `Ok(None)`: 設定ファイルが見つからない
/// - `Err(ConfigError)`: ファイル読み込みまたはパースエラー
///
/// # Errors
/// - ファイル読み込みエラー
/// - JSON 構文エラー
/// - フィールドの型エラー
pub(super) fn load_from_project(project_root: &Path) -> Result<Option<SiteSettings>, ConfigError> {
    let config_path = project_root.join(CONFIG_FILE_NAME);

    if !config_path.exists() {
        tracing::debug!("Configuration file not found: {:?}", config_path);
        return Ok(None);
    }

    tracing::debug!("Loading configuration from: {:?}", config_path);

    let content = std::fs::read_to_string(&config_path)?;
    parse_settings(&content).map(Some)
}

/// JSONC テキストを設定として解釈する
///
/// 空のドキュメントはデフォルト設定として扱う。
fn parse_settings(content: &str) -> Result<SiteSettings, ConfigError> {
    let value = jsonc_parser::parse_to_serde_value(content, &ParseOptions::default())
        .map_err(|e| ConfigError::SyntaxError(e.to_string()))?;

    match value {
        Some(value) => Ok(serde_json::from_value(value)?),
        None => Ok(SiteSettings::default()),
    }
}
