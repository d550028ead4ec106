//! 入力処理モジュール
//!
//! キー入力を設定画面のアクションへ変換する

pub mod keybinding;

pub use keybinding::{KeyMap, PanelAction};
