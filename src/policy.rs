//! 折り返しポリシー
//!
//! 文書の言語名から折り返しモードを決める純粋関数

use crate::config::NamedList;
use std::fmt;

/// ホスト側ビューの折り返しモード
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WrapMode {
    /// 単語単位で折り返す
    Word,
    /// 折り返さない
    None,
}

impl fmt::Display for WrapMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WrapMode::Word => f.write_str("word"),
            WrapMode::None => f.write_str("none"),
        }
    }
}

/// 判定結果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WrapDecision {
    Word,
    NoWrap,
    /// ビューに触れない
    Unchanged,
}

impl WrapDecision {
    /// ビューに適用するモード。`Unchanged` では `None`
    pub fn wrap_mode(self) -> Option<WrapMode> {
        match self {
            WrapDecision::Word => Some(WrapMode::Word),
            WrapDecision::NoWrap => Some(WrapMode::None),
            WrapDecision::Unchanged => None,
        }
    }
}

impl fmt::Display for WrapDecision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.wrap_mode() {
            Some(mode) => mode.fmt(f),
            None => f.write_str("unchanged"),
        }
    }
}

/// 言語名から折り返しモードを判定
///
/// 言語が無ければ `Unchanged`。両方のリストにある場合はホワイトリストが優先
pub fn decide(language_name: Option<&str>, whitelist: &NamedList, blacklist: &NamedList) -> WrapDecision {
    let Some(name) = language_name else {
        return WrapDecision::Unchanged;
    };

    let name = name.to_lowercase();
    if whitelist.contains(&name) {
        WrapDecision::Word
    } else if blacklist.contains(&name) {
        WrapDecision::NoWrap
    } else {
        WrapDecision::Unchanged
    }
}
