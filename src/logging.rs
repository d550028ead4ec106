//! ロギングシステム
//!
//! `log` クレートのファサードに接続するロガー。標準エラー出力とファイル出力に対応

use log::{Level, LevelFilter, Log, Metadata, Record};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// ロガー
///
/// * 通常のコマンドでは stderr へ出力
/// * TUI 実行中は画面を壊さないようファイル出力のみ
#[derive(Debug)]
pub struct Logger {
    level: LevelFilter,
    output_stderr: bool,
    output_file: Option<PathBuf>,
    write_lock: Mutex<()>,
}

impl Logger {
    /// デフォルト構築
    pub fn new(level: LevelFilter) -> Self {
        Self {
            level,
            output_stderr: true,
            output_file: None,
            write_lock: Mutex::new(()),
        }
    }

    /// ログレベルを取得
    pub fn level(&self) -> LevelFilter {
        self.level
    }

    /// ログレベルを変更
    pub fn with_level(mut self, level: LevelFilter) -> Self {
        self.level = level;
        self
    }

    /// ファイル出力を設定
    pub fn with_file_output<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.output_file = Some(path.into());
        self
    }

    /// 標準エラー出力を無効化
    pub fn without_stderr(mut self) -> Self {
        self.output_stderr = false;
        self
    }

    /// グローバルロガーとして登録（プロセスにつき一度だけ）
    pub fn init(self) -> std::result::Result<(), log::SetLoggerError> {
        let level = self.level;
        log::set_logger(Box::leak(Box::new(self)))?;
        log::set_max_level(level);
        Ok(())
    }

    fn tag(level: Level) -> &'static str {
        match level {
            Level::Trace => "TRACE",
            Level::Debug => "DEBUG",
            Level::Info => "INFO",
            Level::Warn => "WARNING",
            Level::Error => "ERROR",
        }
    }

    fn format_record(record: &Record<'_>) -> String {
        format!("{}: {} in {}", Self::tag(record.level()), record.args(), record.target())
    }

    fn write_line(&self, message: &str) {
        let _guard = self.write_lock.lock().unwrap_or_else(|poisoned| poisoned.into_inner());

        if self.output_stderr {
            eprintln!("{}", message);
        }

        if let Some(path) = &self.output_file {
            if let Ok(mut file) = open_append(path) {
                let _ = writeln!(file, "{}", message);
            }
        }
    }
}

impl Log for Logger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record<'_>) {
        if self.enabled(record.metadata()) {
            self.write_line(&Self::format_record(record));
        }
    }

    fn flush(&self) {}
}

fn open_append(path: &Path) -> std::io::Result<std::fs::File> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    OpenOptions::new().create(true).append(true).open(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn logger_respects_log_level() {
        let logger = Logger::new(LevelFilter::Debug).without_stderr();
        assert!(logger.enabled(&Metadata::builder().level(Level::Debug).build()));
        assert!(logger.enabled(&Metadata::builder().level(Level::Error).build()));

        let info_logger = Logger::new(LevelFilter::Debug)
            .with_level(LevelFilter::Info)
            .without_stderr();
        assert!(!info_logger.enabled(&Metadata::builder().level(Level::Debug).build()));
        assert!(info_logger.enabled(&Metadata::builder().level(Level::Warn).build()));
    }

    #[test]
    fn logger_appends_to_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("logs").join("wraptor.log");
        let logger = Logger::new(LevelFilter::Info)
            .without_stderr()
            .with_file_output(&path);

        logger.log(
            &Record::builder()
                .level(Level::Warn)
                .target("wraptor::config")
                .args(format_args!("whitelist.json is malformed"))
                .build(),
        );
        logger.log(
            &Record::builder()
                .level(Level::Debug)
                .target("wraptor::config")
                .args(format_args!("filtered out"))
                .build(),
        );

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(
            content,
            "WARNING: whitelist.json is malformed in wraptor::config\n"
        );
    }
}
