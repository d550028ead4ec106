//! メモリ上のホスト実装
//!
//! テストと `wraptor simulate` で使う

use super::{Document, Tab, View, Window};
use crate::policy::WrapMode;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct MemoryDocument {
    language: Option<String>,
}

impl MemoryDocument {
    pub fn new(language: Option<&str>) -> Self {
        Self {
            language: language.map(str::to_string),
        }
    }

    pub fn language(&self) -> Option<&str> {
        self.language.as_deref()
    }
}

impl Document for MemoryDocument {
    fn language_name(&self) -> Option<String> {
        self.language.clone()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MemoryView {
    wrap_mode: WrapMode,
    /// `set_wrap_mode` が呼ばれた回数
    pub wrap_changes: usize,
}

impl MemoryView {
    pub fn new(initial: WrapMode) -> Self {
        Self {
            wrap_mode: initial,
            wrap_changes: 0,
        }
    }

    pub fn wrap_mode(&self) -> WrapMode {
        self.wrap_mode
    }
}

impl Default for MemoryView {
    fn default() -> Self {
        Self::new(WrapMode::None)
    }
}

impl View for MemoryView {
    fn set_wrap_mode(&mut self, mode: WrapMode) {
        self.wrap_mode = mode;
        self.wrap_changes += 1;
    }
}

#[derive(Debug, Clone, Default)]
pub struct MemoryTab {
    pub view: MemoryView,
    pub document: MemoryDocument,
}

impl MemoryTab {
    pub fn new(language: Option<&str>) -> Self {
        Self {
            view: MemoryView::default(),
            document: MemoryDocument::new(language),
        }
    }
}

impl Tab for MemoryTab {
    type View = MemoryView;
    type Document = MemoryDocument;

    fn view_mut(&mut self) -> &mut MemoryView {
        &mut self.view
    }

    fn document(&self) -> &MemoryDocument {
        &self.document
    }
}

#[derive(Debug, Clone, Default)]
pub struct MemoryWindow {
    tabs: Vec<MemoryTab>,
    active: Option<usize>,
}

impl MemoryWindow {
    pub fn new() -> Self {
        Self::default()
    }

    /// タブを追加してアクティブにし、その添字を返す
    pub fn push_tab(&mut self, tab: MemoryTab) -> usize {
        self.tabs.push(tab);
        let index = self.tabs.len() - 1;
        self.active = Some(index);
        index
    }

    pub fn activate(&mut self, index: usize) -> bool {
        if index < self.tabs.len() {
            self.active = Some(index);
            true
        } else {
            false
        }
    }

    pub fn tab(&self, index: usize) -> Option<&MemoryTab> {
        self.tabs.get(index)
    }

    pub fn tab_mut(&mut self, index: usize) -> Option<&mut MemoryTab> {
        self.tabs.get_mut(index)
    }

    pub fn tabs(&self) -> &[MemoryTab] {
        &self.tabs
    }
}

impl Window for MemoryWindow {
    type Tab = MemoryTab;

    fn active_tab_mut(&mut self) -> Option<&mut MemoryTab> {
        let index = self.active?;
        self.tabs.get_mut(index)
    }
}
