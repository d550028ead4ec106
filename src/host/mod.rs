//! ホストエディタとの境界
//!
//! ホストのタブ・ビュー・文書モデルをトレイトとして表現する。
//! イベントの購読方法はホストごとに異なるため、ホスト側が `TabEventHandler` を呼び出す

pub mod memory;

use crate::policy::WrapMode;

/// 文書
pub trait Document {
    /// 検出された言語名。判定できない文書では `None`
    fn language_name(&self) -> Option<String>;
}

/// テキストビュー
pub trait View {
    fn set_wrap_mode(&mut self, mode: WrapMode);
}

/// タブ（ビューと文書の組）
pub trait Tab {
    type View: View;
    type Document: Document;

    fn view_mut(&mut self) -> &mut Self::View;
    fn document(&self) -> &Self::Document;
}

/// ウィンドウ
pub trait Window {
    type Tab: Tab;

    /// アクティブなタブ。タブが一つも無い場合は `None`
    fn active_tab_mut(&mut self) -> Option<&mut Self::Tab>;
}

/// ホストから通知されるタブイベントの受け口
pub trait TabEventHandler<W: Window> {
    /// タブが追加された
    fn on_tab_added(&mut self, tab: &mut W::Tab);

    /// アクティブなタブが変わった
    fn on_active_tab_changed(&mut self, window: &mut W);
}
