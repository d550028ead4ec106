//! キーバインド
//!
//! crossterm のキーイベントを `PanelAction` に対応付ける

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::HashMap;

/// 設定画面のアクション
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PanelAction {
    FocusLeft,
    FocusRight,
    FocusNext,
    CursorUp,
    CursorDown,
    ToggleSelection,
    SelectAll,
    ClearSelection,
    /// 選択を左のリストへ移動
    MoveLeft,
    /// 選択を右のリストへ移動
    MoveRight,
    Quit,
}

impl PanelAction {
    /// ヘルプ行に表示する説明
    pub fn description(self) -> &'static str {
        match self {
            PanelAction::FocusLeft => "focus left",
            PanelAction::FocusRight => "focus right",
            PanelAction::FocusNext => "next list",
            PanelAction::CursorUp => "up",
            PanelAction::CursorDown => "down",
            PanelAction::ToggleSelection => "select",
            PanelAction::SelectAll => "select all",
            PanelAction::ClearSelection => "clear selection",
            PanelAction::MoveLeft => "move left",
            PanelAction::MoveRight => "move right",
            PanelAction::Quit => "quit",
        }
    }
}

/// ヘルプ行に並べるキー
const HELP_ENTRIES: &[(&str, PanelAction)] = &[
    ("←", PanelAction::FocusLeft),
    ("→", PanelAction::FocusRight),
    ("space", PanelAction::ToggleSelection),
    ("a", PanelAction::SelectAll),
    ("<", PanelAction::MoveLeft),
    (">", PanelAction::MoveRight),
    ("q", PanelAction::Quit),
];

/// キーの内部表現（文字キーでは Shift を無視する）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct KeyCombination {
    code: KeyCode,
    ctrl: bool,
}

impl KeyCombination {
    fn plain(code: KeyCode) -> Self {
        Self { code, ctrl: false }
    }

    fn ctrl(ch: char) -> Self {
        Self {
            code: KeyCode::Char(ch),
            ctrl: true,
        }
    }

    fn from_event(event: &KeyEvent) -> Self {
        Self {
            code: event.code,
            ctrl: event.modifiers.contains(KeyModifiers::CONTROL),
        }
    }
}

/// キーマップ
#[derive(Debug, Clone)]
pub struct KeyMap {
    bindings: HashMap<KeyCombination, PanelAction>,
}

impl KeyMap {
    pub fn new() -> Self {
        use PanelAction::*;

        let mut bindings = HashMap::new();
        let plain = [
            (KeyCode::Left, FocusLeft),
            (KeyCode::Char('h'), FocusLeft),
            (KeyCode::Right, FocusRight),
            (KeyCode::Char('l'), FocusRight),
            (KeyCode::Tab, FocusNext),
            (KeyCode::Up, CursorUp),
            (KeyCode::Char('k'), CursorUp),
            (KeyCode::Down, CursorDown),
            (KeyCode::Char('j'), CursorDown),
            (KeyCode::Char(' '), ToggleSelection),
            (KeyCode::Char('a'), SelectAll),
            (KeyCode::Char('c'), ClearSelection),
            (KeyCode::Char('<'), MoveLeft),
            (KeyCode::Char('H'), MoveLeft),
            (KeyCode::Char('>'), MoveRight),
            (KeyCode::Char('L'), MoveRight),
            (KeyCode::Char('q'), Quit),
            (KeyCode::Esc, Quit),
        ];
        for (code, action) in plain {
            bindings.insert(KeyCombination::plain(code), action);
        }
        bindings.insert(KeyCombination::ctrl('c'), Quit);
        bindings.insert(KeyCombination::ctrl('g'), ClearSelection);

        Self { bindings }
    }

    /// キーイベントに対応するアクション
    pub fn lookup(&self, event: &KeyEvent) -> Option<PanelAction> {
        self.bindings.get(&KeyCombination::from_event(event)).copied()
    }

    /// ヘルプ行の文字列
    pub fn help_line(&self) -> String {
        HELP_ENTRIES
            .iter()
            .map(|(label, action)| format!("{} {}", label, action.description()))
            .collect::<Vec<_>>()
            .join("  ")
    }
}

impl Default for KeyMap {
    fn default() -> Self {
        Self::new()
    }
}
