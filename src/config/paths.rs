//! 設定ディレクトリのパス解決と作成

use super::list::ListKind;
use crate::error::ConfigError;
use std::path::{Path, PathBuf};

/// 設定ディレクトリ名（プラットフォーム標準の設定ディレクトリ配下）
pub const APP_DIR_NAME: &str = "wraptor";

/// 設定ディレクトリを上書きする環境変数
pub const CONFIG_DIR_ENV: &str = "WRAPTOR_CONFIG_DIR";

/// プラットフォーム標準の設定ディレクトリ（例: ~/.config/wraptor）
pub fn default_config_dir() -> Result<PathBuf, ConfigError> {
    dirs::config_dir()
        .map(|base| base.join(APP_DIR_NAME))
        .ok_or(ConfigError::NoConfigBase)
}

/// `~` と環境変数を展開
pub fn expand_path(raw: &str) -> Result<PathBuf, ConfigError> {
    shellexpand::full(raw)
        .map(|expanded| PathBuf::from(expanded.as_ref()))
        .map_err(|err| ConfigError::InvalidValue {
            key: "path".to_string(),
            value: format!("{}: {}", raw, err),
        })
}

/// 足りない親ディレクトリをすべて作成する。既に存在する場合は何もしない
pub fn ensure_dir<P: AsRef<Path>>(path: P) -> Result<(), ConfigError> {
    let path = path.as_ref();
    std::fs::create_dir_all(path).map_err(|err| ConfigError::create_dir(path, err))
}

/// リストのバッキングファイル。未決定リストはファイルを持たない
pub fn list_file<P: AsRef<Path>>(dir: P, kind: ListKind) -> Option<PathBuf> {
    kind.file_name().map(|name| dir.as_ref().join(name))
}
