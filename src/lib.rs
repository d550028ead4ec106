//! wraptor - 言語ごとの折り返し切り替えプラグイン
//!
//! 文書の言語に応じてビューの折り返しモードを切り替え、
//! 対象言語のリストを端末上の設定画面で編集する

// コアモジュール
pub mod app;
pub mod error;
pub mod logging;
pub mod options;

// データ層
pub mod config;
pub mod language;

// ロジック層
pub mod binder;
pub mod policy;
pub mod transfer;

// ホスト境界
pub mod host;

// 表示層
pub mod cli;
pub mod frontend;
pub mod input;
pub mod ui;

// 公開API
pub use app::Wraptor;
pub use binder::TabEventBinder;
pub use config::{ConfigStore, ListKind, NamedList, SharedConfig};
pub use error::{Result, WraptorError};
pub use frontend::ConfigApplication;
pub use language::{BuiltinRegistry, LanguageId, LanguageRegistry};
pub use policy::{decide, WrapDecision, WrapMode};
