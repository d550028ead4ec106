//! 言語識別子と言語レジストリ
//!
//! 識別子は元の綴りを保持したまま、比較は大文字小文字を区別しない

use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};

/// 言語識別子（例: "markdown"）
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LanguageId(String);

impl LanguageId {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// 保存されている綴り
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// 比較用の正規化済み文字列
    pub fn normalized(&self) -> String {
        self.0.to_lowercase()
    }

    /// 任意の言語名と一致するか
    pub fn matches(&self, name: &str) -> bool {
        self.0.to_lowercase() == name.to_lowercase()
    }
}

impl PartialEq for LanguageId {
    fn eq(&self, other: &Self) -> bool {
        self.matches(&other.0)
    }
}

impl Eq for LanguageId {}

impl Hash for LanguageId {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.normalized().hash(state);
    }
}

impl fmt::Display for LanguageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for LanguageId {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for LanguageId {
    fn from(name: String) -> Self {
        Self(name)
    }
}

/// ホストエディタの言語レジストリ
pub trait LanguageRegistry {
    /// 既知の言語識別子をすべて返す
    fn language_ids(&self) -> Vec<LanguageId>;
}

/// 組み込みの言語一覧
const BUILTIN_LANGUAGES: &[&str] = &[
    "asciidoc",
    "c",
    "c++",
    "c#",
    "cmake",
    "css",
    "diff",
    "dockerfile",
    "go",
    "haskell",
    "html",
    "ini",
    "java",
    "javascript",
    "json",
    "kotlin",
    "latex",
    "lua",
    "makefile",
    "markdown",
    "perl",
    "php",
    "python",
    "python 3",
    "restructuredtext",
    "ruby",
    "rust",
    "scala",
    "sh",
    "sql",
    "swift",
    "texinfo",
    "toml",
    "typescript",
    "xml",
    "yaml",
];

/// ホストが無い環境（CLI/TUI）向けの固定レジストリ
#[derive(Debug, Clone, Default)]
pub struct BuiltinRegistry;

impl LanguageRegistry for BuiltinRegistry {
    fn language_ids(&self) -> Vec<LanguageId> {
        BUILTIN_LANGUAGES.iter().map(|&name| LanguageId::new(name)).collect()
    }
}

/// 任意の一覧を返すレジストリ
#[derive(Debug, Clone, Default)]
pub struct StaticRegistry {
    ids: Vec<LanguageId>,
}

impl StaticRegistry {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<LanguageId>,
    {
        Self {
            ids: names.into_iter().map(Into::into).collect(),
        }
    }
}

impl LanguageRegistry for StaticRegistry {
    fn language_ids(&self) -> Vec<LanguageId> {
        self.ids.clone()
    }
}
