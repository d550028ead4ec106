//! 名前付き言語リスト
//!
//! 順序付きの言語識別子列。バッキングファイルがある場合は変更ごとに書き戻す

use crate::error::{ConfigError, ListError, Result};
use crate::language::LanguageId;
use std::fmt;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// リストの種類
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListKind {
    /// 折り返しを有効にする言語
    Whitelist,
    /// どちらにも属さない言語（永続化しない）
    Undecided,
    /// 折り返しを無効にする言語
    Blacklist,
}

impl ListKind {
    /// 画面上の並び順
    pub const ALL: [ListKind; 3] = [ListKind::Whitelist, ListKind::Undecided, ListKind::Blacklist];

    pub fn name(self) -> &'static str {
        match self {
            ListKind::Whitelist => "whitelist",
            ListKind::Undecided => "undecided",
            ListKind::Blacklist => "blacklist",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            ListKind::Whitelist => "Wrap",
            ListKind::Undecided => "Undecided",
            ListKind::Blacklist => "No wrap",
        }
    }

    pub fn file_name(self) -> Option<&'static str> {
        match self {
            ListKind::Whitelist => Some("whitelist.json"),
            ListKind::Blacklist => Some("blacklist.json"),
            ListKind::Undecided => None,
        }
    }

    pub fn index(self) -> usize {
        match self {
            ListKind::Whitelist => 0,
            ListKind::Undecided => 1,
            ListKind::Blacklist => 2,
        }
    }

    /// 左隣のリスト
    pub fn left(self) -> Option<ListKind> {
        match self {
            ListKind::Whitelist => None,
            ListKind::Undecided => Some(ListKind::Whitelist),
            ListKind::Blacklist => Some(ListKind::Undecided),
        }
    }

    /// 右隣のリスト
    pub fn right(self) -> Option<ListKind> {
        match self {
            ListKind::Whitelist => Some(ListKind::Undecided),
            ListKind::Undecided => Some(ListKind::Blacklist),
            ListKind::Blacklist => None,
        }
    }
}

impl fmt::Display for ListKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ListKind {
    type Err = ListError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "whitelist" | "white" | "wrap" | "w" => Ok(ListKind::Whitelist),
            "undecided" | "u" => Ok(ListKind::Undecided),
            "blacklist" | "black" | "nowrap" | "no-wrap" | "b" => Ok(ListKind::Blacklist),
            _ => Err(ListError::UnknownList { name: s.to_string() }),
        }
    }
}

/// 名前付きリスト
#[derive(Debug, Clone)]
pub struct NamedList {
    kind: ListKind,
    entries: Vec<LanguageId>,
    path: Option<PathBuf>,
    /// 壊れたファイルから空で復旧し、まだ変更されていない
    recovered: bool,
}

impl NamedList {
    /// メモリ上だけのリストを作成
    pub fn new(kind: ListKind) -> Self {
        Self {
            kind,
            entries: Vec::new(),
            path: None,
            recovered: false,
        }
    }

    /// ファイルに書き戻すリストを作成（読み込みは行わない）
    pub fn persisted(kind: ListKind, path: impl Into<PathBuf>) -> Self {
        Self {
            kind,
            entries: Vec::new(),
            path: Some(path.into()),
            recovered: false,
        }
    }

    /// 初期内容を設定
    pub fn with_entries<I, S>(mut self, entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<LanguageId>,
    {
        self.entries = entries.into_iter().map(Into::into).collect();
        self
    }

    pub fn kind(&self) -> ListKind {
        self.kind
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn is_persisted(&self) -> bool {
        self.path.is_some()
    }

    /// 読み込みに失敗して空で始まり、まだ一度も変更されていないか
    pub fn is_recovered(&self) -> bool {
        self.recovered
    }

    pub fn entries(&self) -> &[LanguageId] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&LanguageId> {
        self.entries.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &LanguageId> {
        self.entries.iter()
    }

    /// 大文字小文字を区別せずに含まれるか
    pub fn contains(&self, name: &str) -> bool {
        self.entries.iter().any(|entry| entry.matches(name))
    }

    /// 末尾に追加して書き戻す。重複は検査しない
    pub fn append(&mut self, value: LanguageId) -> Result<()> {
        log::debug!("append {} to {}", value, self.kind);
        self.entries.push(value);
        self.recovered = false;
        self.persist()
    }

    /// 最初に一致した要素を削除して書き戻す
    pub fn remove(&mut self, value: &LanguageId) -> Result<LanguageId> {
        let position = self
            .entries
            .iter()
            .position(|entry| entry == value)
            .ok_or_else(|| ListError::ValueNotFound {
                value: value.to_string(),
                list: self.kind.name().to_string(),
            })?;

        log::debug!("remove {} from {}", value, self.kind);
        let removed = self.entries.remove(position);
        self.recovered = false;
        self.persist()?;
        Ok(removed)
    }

    /// 内容を丸ごと差し替える（書き戻しは行わない）
    pub(crate) fn replace_entries(&mut self, entries: Vec<LanguageId>) {
        self.entries = entries;
    }

    pub(crate) fn set_recovered(&mut self, recovered: bool) {
        self.recovered = recovered;
    }

    /// バッキングファイルへ書き戻す。ファイルを持たないリストでは何もしない
    pub fn persist(&self) -> Result<()> {
        if let Some(path) = &self.path {
            write_list_file(path, &self.entries)?;
        }
        Ok(())
    }
}

/// リストファイルを読み込む。ファイルが存在しなければ `Ok(None)`
pub(crate) fn read_list_file(path: &Path) -> std::result::Result<Option<Vec<LanguageId>>, ConfigError> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(err) if err.kind() == ErrorKind::NotFound => return Ok(None),
        Err(err) => return Err(ConfigError::read(path, err)),
    };

    serde_json::from_str::<Vec<LanguageId>>(&content)
        .map(Some)
        .map_err(|err| ConfigError::malformed(path, err))
}

/// 一時ファイルに書き込んでから置き換える
pub(crate) fn write_list_file(path: &Path, entries: &[LanguageId]) -> std::result::Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent).map_err(|err| ConfigError::create_dir(parent, err))?;
        }
    }

    let mut json = serde_json::to_string_pretty(entries).map_err(|err| ConfigError::write(path, err))?;
    json.push('\n');

    let temp_path = path.with_extension("json.tmp");
    fs::write(&temp_path, json).map_err(|err| ConfigError::write(path, err))?;
    fs::rename(&temp_path, path).map_err(|err| ConfigError::write(path, err))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::WraptorError;
    use tempfile::tempdir;

    #[test]
    fn parses_list_names() {
        assert_eq!("whitelist".parse::<ListKind>().unwrap(), ListKind::Whitelist);
        assert_eq!("Black".parse::<ListKind>().unwrap(), ListKind::Blacklist);
        assert_eq!("undecided".parse::<ListKind>().unwrap(), ListKind::Undecided);
        assert!(matches!(
            "greylist".parse::<ListKind>(),
            Err(ListError::UnknownList { .. })
        ));
    }

    #[test]
    fn neighbours_follow_screen_order() {
        assert_eq!(ListKind::Whitelist.left(), None);
        assert_eq!(ListKind::Undecided.left(), Some(ListKind::Whitelist));
        assert_eq!(ListKind::Undecided.right(), Some(ListKind::Blacklist));
        assert_eq!(ListKind::Blacklist.right(), None);
    }

    #[test]
    fn append_persists_immediately() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("whitelist.json");
        let mut list = NamedList::persisted(ListKind::Whitelist, &path);

        list.append(LanguageId::new("markdown")).unwrap();
        list.append(LanguageId::new("rst")).unwrap();

        let on_disk: Vec<String> =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(on_disk, vec!["markdown", "rst"]);
        assert!(!dir.path().join("whitelist.json.tmp").exists());
    }

    #[test]
    fn remove_takes_first_occurrence_only() {
        let mut list = NamedList::new(ListKind::Undecided).with_entries(["c", "json", "c"]);

        let removed = list.remove(&LanguageId::new("C")).unwrap();
        assert_eq!(removed.as_str(), "c");
        let names: Vec<_> = list.iter().map(LanguageId::as_str).collect();
        assert_eq!(names, vec!["json", "c"]);
    }

    #[test]
    fn remove_missing_value_is_reported() {
        let mut list = NamedList::new(ListKind::Blacklist).with_entries(["json"]);

        let err = list.remove(&LanguageId::new("yaml")).unwrap_err();
        match err {
            WraptorError::List(ListError::ValueNotFound { value, list }) => {
                assert_eq!(value, "yaml");
                assert_eq!(list, "blacklist");
            }
            other => panic!("unexpected error: {:?}", other),
        }
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn unpersisted_list_never_touches_disk() {
        let mut list = NamedList::new(ListKind::Undecided);
        list.append(LanguageId::new("go")).unwrap();
        assert!(list.path().is_none());
        assert!(list.persist().is_ok());
    }

    #[test]
    fn read_missing_file_is_none() {
        let dir = tempdir().unwrap();
        assert_eq!(read_list_file(&dir.path().join("nope.json")).unwrap(), None);
    }

    #[test]
    fn read_rejects_non_array_json() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("blacklist.json");
        fs::write(&path, r#"{"json": true}"#).unwrap();

        assert!(matches!(
            read_list_file(&path),
            Err(ConfigError::Malformed { .. })
        ));
    }
}
