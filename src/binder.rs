//! タブイベントと折り返しポリシーの結合

use crate::config::SharedConfig;
use crate::host::{Document, Tab, TabEventHandler, View, Window};
use crate::policy::WrapDecision;

/// タブが追加・切り替えされるたびに折り返しモードを適用する
#[derive(Debug, Clone)]
pub struct TabEventBinder {
    config: SharedConfig,
}

impl TabEventBinder {
    pub fn new(config: SharedConfig) -> Self {
        Self { config }
    }

    /// タブの文書の言語に応じてビューの折り返しを設定する
    pub fn apply<T: Tab>(&self, tab: &mut T) -> WrapDecision {
        let language = tab.document().language_name();
        let decision = self.config.borrow().decide(language.as_deref());

        match decision.wrap_mode() {
            Some(mode) => {
                log::debug!("{:?} -> wrap mode {}", language, mode);
                tab.view_mut().set_wrap_mode(mode);
            }
            None => log::debug!("{:?} -> wrap mode left unchanged", language),
        }

        decision
    }

    /// アクティブなタブに適用する。タブが無ければ `None`
    pub fn apply_active<W: Window>(&self, window: &mut W) -> Option<WrapDecision> {
        window.active_tab_mut().map(|tab| self.apply(tab))
    }
}

impl<W: Window> TabEventHandler<W> for TabEventBinder {
    fn on_tab_added(&mut self, tab: &mut W::Tab) {
        self.apply(tab);
    }

    fn on_active_tab_changed(&mut self, window: &mut W) {
        self.apply_active(window);
    }
}
