//! 設定モジュール
//!
//! ホワイトリスト・ブラックリストの永続化と設定ディレクトリの管理
//! - 各リストは `<config_dir>/<name>.json` の JSON 配列
//! - 変更のたびに同期的に書き戻す
//! - ファイルが無ければ空リスト、壊れていれば警告して空リスト

pub mod list;
pub mod paths;
pub mod store;

pub use list::{ListKind, NamedList};
pub use paths::{default_config_dir, ensure_dir, expand_path, list_file, APP_DIR_NAME, CONFIG_DIR_ENV};
pub use store::{ConfigStore, LoadReport, SharedConfig};
