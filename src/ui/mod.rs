//! UIモジュール
//!
//! ratatuiベースの設定画面

pub mod config_panel;
pub mod list_pane;
pub mod renderer;

// 公開API
pub use config_panel::ConfigPanel;
pub use list_pane::ListPane;
pub use renderer::PanelRenderer;
