//! 実行時オプション
//!
//! 環境変数とコマンドライン引数から設定ディレクトリとログ出力先を決める

use crate::config::{default_config_dir, expand_path, CONFIG_DIR_ENV};
use crate::error::ConfigError;
use std::path::PathBuf;

/// ログファイルを指定する環境変数
pub const LOG_FILE_ENV: &str = "WRAPTOR_LOG";

/// 実行時オプション
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RunOptions {
    /// 設定ディレクトリ（未指定時はプラットフォーム標準の場所）
    pub config_dir: Option<PathBuf>,
    /// ログ出力先（未指定時は TUI 実行時のみ `~/.wraptor-log/wraptor.log`）
    pub log_path: Option<PathBuf>,
    /// デバッグログを有効にする
    pub verbose: bool,
}

impl RunOptions {
    /// 環境変数から構築
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(
            std::env::var(CONFIG_DIR_ENV).ok(),
            std::env::var(LOG_FILE_ENV).ok(),
        )
    }

    fn from_vars(config_dir: Option<String>, log_path: Option<String>) -> Result<Self, ConfigError> {
        Ok(Self {
            config_dir: config_dir
                .filter(|raw| !raw.is_empty())
                .map(|raw| expand_path(&raw))
                .transpose()?,
            log_path: log_path
                .filter(|raw| !raw.is_empty())
                .map(|raw| expand_path(&raw))
                .transpose()?,
            verbose: false,
        })
    }

    /// 設定ディレクトリを確定する
    pub fn resolve_config_dir(&self) -> Result<PathBuf, ConfigError> {
        match &self.config_dir {
            Some(path) => Ok(path.clone()),
            None => default_config_dir(),
        }
    }

    /// TUI 実行時のログ出力先
    pub fn resolve_log_path(&self) -> Option<PathBuf> {
        match &self.log_path {
            Some(path) => Some(path.clone()),
            None => default_log_path(),
        }
    }

    /// 指定された側の値を優先してマージ
    pub fn merged_with(&self, overrides: &RunOptions) -> RunOptions {
        RunOptions {
            config_dir: overrides
                .config_dir
                .clone()
                .or_else(|| self.config_dir.clone()),
            log_path: overrides
                .log_path
                .clone()
                .or_else(|| self.log_path.clone()),
            verbose: self.verbose || overrides.verbose,
        }
    }
}

fn default_log_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".wraptor-log").join("wraptor.log"))
}
