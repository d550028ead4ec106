//! リストペイン
//!
//! 一つのリストに対するカーソルと複数行選択。行は常にバッキングリストの現在の内容から作る

use crate::config::{ListKind, NamedList};
use crate::language::LanguageId;
use std::collections::BTreeSet;

#[derive(Debug, Clone)]
pub struct ListPane {
    kind: ListKind,
    cursor: usize,
    selected: BTreeSet<usize>,
}

impl ListPane {
    pub fn new(kind: ListKind) -> Self {
        Self {
            kind,
            cursor: 0,
            selected: BTreeSet::new(),
        }
    }

    pub fn kind(&self) -> ListKind {
        self.kind
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn is_selected(&self, row: usize) -> bool {
        self.selected.contains(&row)
    }

    pub fn selection_len(&self) -> usize {
        self.selected.len()
    }

    pub fn cursor_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn cursor_down(&mut self, len: usize) {
        if self.cursor + 1 < len {
            self.cursor += 1;
        }
    }

    /// カーソル行の選択を切り替える
    pub fn toggle(&mut self, len: usize) {
        if self.cursor >= len {
            return;
        }
        if !self.selected.remove(&self.cursor) {
            self.selected.insert(self.cursor);
        }
    }

    pub fn select_all(&mut self, len: usize) {
        self.selected = (0..len).collect();
    }

    pub fn clear_selection(&mut self) {
        self.selected.clear();
    }

    /// 選択中の値を行順で返す。何も選択されていなければカーソル行
    pub fn selected_values(&self, list: &NamedList) -> Vec<LanguageId> {
        if self.selected.is_empty() {
            return list.get(self.cursor).cloned().into_iter().collect();
        }
        self.selected
            .iter()
            .filter_map(|&row| list.get(row).cloned())
            .collect()
    }

    /// リストの長さが変わった後にカーソルと選択を範囲内に収める
    pub fn clamp(&mut self, len: usize) {
        self.selected.retain(|&row| row < len);
        if self.cursor >= len {
            self.cursor = len.saturating_sub(1);
        }
    }
}
