//! 設定画面の状態
//!
//! ホワイトリスト・未決定・ブラックリストの三つのペインと、その間の移動を扱う。
//! 描画には依存しない

use super::list_pane::ListPane;
use crate::config::{ListKind, NamedList, SharedConfig};
use crate::error::{ListError, Result, StatusMessage, WraptorError};
use crate::input::PanelAction;
use crate::language::{LanguageId, LanguageRegistry};
use crate::transfer::move_between;

/// 設定画面
pub struct ConfigPanel {
    config: SharedConfig,
    undecided: NamedList,
    panes: [ListPane; 3],
    focus: ListKind,
    status: Option<StatusMessage>,
    running: bool,
}

impl ConfigPanel {
    /// 画面を開く。未決定リストはここで毎回作り直す
    pub fn open<R: LanguageRegistry + ?Sized>(config: SharedConfig, registry: &R) -> Self {
        let undecided = config.borrow().undecided(registry);
        log::debug!("config panel opened with {} undecided languages", undecided.len());
        Self {
            config,
            undecided,
            panes: ListKind::ALL.map(ListPane::new),
            focus: ListKind::Undecided,
            status: None,
            running: true,
        }
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn focus(&self) -> ListKind {
        self.focus
    }

    pub fn pane(&self, kind: ListKind) -> &ListPane {
        &self.panes[kind.index()]
    }

    pub fn status(&self) -> Option<&StatusMessage> {
        self.status.as_ref()
    }

    /// 期限切れのステータスメッセージを消す
    pub fn expire_status(&mut self) {
        if self.status.as_ref().is_some_and(StatusMessage::is_expired) {
            self.status = None;
        }
    }

    /// ペインに表示する行
    pub fn rows(&self, kind: ListKind) -> Vec<LanguageId> {
        self.with_list(kind, |list| list.entries().to_vec())
    }

    fn len(&self, kind: ListKind) -> usize {
        self.with_list(kind, NamedList::len)
    }

    fn with_list<T>(&self, kind: ListKind, f: impl FnOnce(&NamedList) -> T) -> T {
        match kind {
            ListKind::Undecided => f(&self.undecided),
            ListKind::Whitelist => f(self.config.borrow().whitelist()),
            ListKind::Blacklist => f(self.config.borrow().blacklist()),
        }
    }

    /// アクションを実行する。エラーはステータスラインに表示して続行
    pub fn handle(&mut self, action: PanelAction) {
        let focus = self.focus;
        let len = self.len(focus);

        match action {
            PanelAction::FocusLeft => {
                if let Some(left) = focus.left() {
                    self.focus = left;
                }
            }
            PanelAction::FocusRight => {
                if let Some(right) = focus.right() {
                    self.focus = right;
                }
            }
            PanelAction::FocusNext => {
                self.focus = focus.right().unwrap_or(ListKind::Whitelist);
            }
            PanelAction::CursorUp => self.panes[focus.index()].cursor_up(),
            PanelAction::CursorDown => self.panes[focus.index()].cursor_down(len),
            PanelAction::ToggleSelection => {
                let pane = &mut self.panes[focus.index()];
                pane.toggle(len);
                pane.cursor_down(len);
            }
            PanelAction::SelectAll => self.panes[focus.index()].select_all(len),
            PanelAction::ClearSelection => self.panes[focus.index()].clear_selection(),
            PanelAction::MoveLeft => {
                if let Some(target) = focus.left() {
                    let outcome = self.move_selection(target);
                    self.report(outcome);
                }
            }
            PanelAction::MoveRight => {
                if let Some(target) = focus.right() {
                    let outcome = self.move_selection(target);
                    self.report(outcome);
                }
            }
            PanelAction::Quit => {
                log::debug!("config panel closed");
                self.running = false;
            }
        }
    }

    /// フォーカス中のペインの選択を `target` へ移す
    pub fn move_selection(&mut self, target: ListKind) -> Result<usize> {
        let source = self.focus;
        let selection = self.with_list(source, |list| self.pane(source).selected_values(list));
        if selection.is_empty() {
            return Err(ListError::EmptySelection {
                list: source.name().to_string(),
            }
            .into());
        }

        let outcome = {
            let mut store = self.config.borrow_mut();
            move_between(&mut store, &mut self.undecided, source, target, &selection)
        };

        self.panes[source.index()].clear_selection();
        for kind in [source, target] {
            let len = self.len(kind);
            self.panes[kind.index()].clamp(len);
        }

        outcome
    }

    fn report(&mut self, outcome: Result<usize>) {
        self.status = Some(match outcome {
            Ok(count) => StatusMessage::info(format!(
                "Moved {} language{}",
                count,
                if count == 1 { "" } else { "s" }
            )),
            Err(err) => {
                if !matches!(err, WraptorError::List(ListError::EmptySelection { .. })) {
                    log::error!("move failed: {}", err);
                }
                StatusMessage::from_error(&err)
            }
        });
    }
}
