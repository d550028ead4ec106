//! エラーハンドリングシステム
//!
//! wraptor 全体で使用される統一されたエラー型とユーティリティを定義
//! 設定の読み込み失敗は回復可能、ディレクトリ作成失敗は起動時に致命的

use std::path::Path;
use std::time::{Duration, Instant};
use thiserror::Error;

/// アプリケーション全体のエラー型
#[derive(Error, Debug, Clone)]
pub enum WraptorError {
    /// 設定エラー
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// リスト操作エラー
    #[error("List operation failed: {0}")]
    List(#[from] ListError),

    /// UI操作エラー
    #[error("UI operation failed: {0}")]
    Ui(#[from] UiError),

    /// コマンドライン引数エラー
    #[error("Usage error: {0}")]
    Usage(String),

    /// その他の入出力エラー
    #[error("IO error: {message}")]
    Io { message: String },
}

/// 設定ディレクトリ・設定ファイル固有のエラー
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("Could not determine the per-user configuration directory")]
    NoConfigBase,

    #[error("Failed to create configuration directory {path}: {message}")]
    CreateDir { path: String, message: String },

    #[error("Failed to read {path}: {message}")]
    Read { path: String, message: String },

    #[error("Malformed list file {path}: {message}")]
    Malformed { path: String, message: String },

    #[error("Failed to write {path}: {message}")]
    Write { path: String, message: String },

    #[error("Invalid value for {key}: {value}")]
    InvalidValue { key: String, value: String },
}

impl ConfigError {
    pub(crate) fn create_dir(path: &Path, err: impl std::fmt::Display) -> Self {
        ConfigError::CreateDir {
            path: path.display().to_string(),
            message: err.to_string(),
        }
    }

    pub(crate) fn read(path: &Path, err: impl std::fmt::Display) -> Self {
        ConfigError::Read {
            path: path.display().to_string(),
            message: err.to_string(),
        }
    }

    pub(crate) fn malformed(path: &Path, err: impl std::fmt::Display) -> Self {
        ConfigError::Malformed {
            path: path.display().to_string(),
            message: err.to_string(),
        }
    }

    pub(crate) fn write(path: &Path, err: impl std::fmt::Display) -> Self {
        ConfigError::Write {
            path: path.display().to_string(),
            message: err.to_string(),
        }
    }
}

/// リスト操作固有のエラー
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ListError {
    /// 移動元に存在しない値の削除（UIと状態の不整合）
    #[error("{value} is not in the {list}")]
    ValueNotFound { value: String, list: String },

    #[error("Source and destination are both the {list}")]
    SameList { list: String },

    #[error("Unknown list name: {name}")]
    UnknownList { name: String },

    #[error("Nothing selected in the {list}")]
    EmptySelection { list: String },
}

/// UI操作固有のエラー
#[derive(Error, Debug, Clone)]
pub enum UiError {
    #[error("Terminal initialization failed: {message}")]
    TerminalInit { message: String },

    #[error("Rendering failed: {component}")]
    RenderingFailed { component: String },
}

/// エラーレベル分類
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorLevel {
    Info,
    Warning,
    Error,
    Fatal,
}

impl ErrorLevel {
    /// エラーの深刻度を判定
    pub fn of(error: &WraptorError) -> Self {
        match error {
            WraptorError::Config(ConfigError::NoConfigBase)
            | WraptorError::Config(ConfigError::CreateDir { .. })
            | WraptorError::Ui(UiError::TerminalInit { .. }) => ErrorLevel::Fatal,
            WraptorError::Config(ConfigError::Malformed { .. }) => ErrorLevel::Warning,
            WraptorError::List(ListError::EmptySelection { .. }) => ErrorLevel::Info,
            _ => ErrorLevel::Error,
        }
    }
}

/// ステータスラインに表示するメッセージ
#[derive(Debug, Clone)]
pub struct StatusMessage {
    /// メッセージ本文
    pub message: String,
    /// レベル
    pub level: ErrorLevel,
    /// 表示開始時刻
    pub start_time: Instant,
    /// 表示持続時間（5秒）
    pub duration: Duration,
}

impl StatusMessage {
    pub fn new(message: impl Into<String>, level: ErrorLevel) -> Self {
        Self {
            message: message.into(),
            level,
            start_time: Instant::now(),
            duration: Duration::from_secs(5),
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(message, ErrorLevel::Info)
    }

    pub fn from_error(error: &WraptorError) -> Self {
        Self::new(error.to_string(), ErrorLevel::of(error))
    }

    pub fn is_expired(&self) -> bool {
        self.start_time.elapsed() >= self.duration
    }
}

/// パニックハンドラの設定
///
/// 端末を raw モードのまま残さないよう、既定のフックより先に復元処理を行う
pub fn setup_panic_handler() {
    std::panic::set_hook(Box::new(|panic_info| {
        crate::frontend::tui::restore_terminal();

        let location = panic_info
            .location()
            .map(|loc| format!("{}:{}", loc.file(), loc.line()))
            .unwrap_or_else(|| "unknown".to_string());

        let message: &str = if let Some(s) = panic_info.payload().downcast_ref::<&str>() {
            s
        } else if let Some(s) = panic_info.payload().downcast_ref::<String>() {
            s
        } else {
            "Unknown panic payload"
        };

        log::error!("panic at {}: {}", location, message);
        eprintln!("PANIC at {}: {}", location, message);
        eprintln!("Stack trace: {}", std::backtrace::Backtrace::capture());

        std::process::exit(1);
    }));
}

/// プロジェクト標準のResult型
pub type Result<T> = std::result::Result<T, WraptorError>;

// std::io::Error から WraptorError への変換
impl From<std::io::Error> for WraptorError {
    fn from(error: std::io::Error) -> Self {
        WraptorError::Io { message: error.to_string() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_message_expiry() {
        let mut status = StatusMessage::info("moved markdown");
        assert!(!status.is_expired());

        // 時間経過をシミュレート
        status.start_time = Instant::now() - Duration::from_secs(6);
        assert!(status.is_expired());
    }

    #[test]
    fn test_error_levels() {
        let fatal = WraptorError::Config(ConfigError::NoConfigBase);
        assert_eq!(ErrorLevel::of(&fatal), ErrorLevel::Fatal);

        let malformed = WraptorError::Config(ConfigError::Malformed {
            path: "whitelist.json".to_string(),
            message: "expected value".to_string(),
        });
        assert_eq!(ErrorLevel::of(&malformed), ErrorLevel::Warning);

        let missing = WraptorError::List(ListError::ValueNotFound {
            value: "json".to_string(),
            list: "blacklist".to_string(),
        });
        let status = StatusMessage::from_error(&missing);
        assert_eq!(status.level, ErrorLevel::Error);
        assert!(status.message.contains("json is not in the blacklist"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let error: WraptorError = io.into();
        assert!(matches!(error, WraptorError::Io { .. }));
    }
}
