//! 設定ストア
//!
//! ホワイトリストとブラックリストを所有し、読み込みと書き戻しを担当する。
//! プロセスにつき一つだけ作り、`SharedConfig` として各コンポーネントに渡す

use super::list::{read_list_file, ListKind, NamedList};
use super::paths::list_file;
use crate::error::{ConfigError, Result};
use crate::language::{LanguageId, LanguageRegistry};
use crate::policy::{self, WrapDecision};
use std::cell::RefCell;
use std::path::{Path, PathBuf};
use std::rc::Rc;

/// 共有ハンドル（単一スレッド専用）
pub type SharedConfig = Rc<RefCell<ConfigStore>>;

/// 初回起動時の既定ホワイトリスト
const DEFAULT_WHITELIST: &[&str] = &["markdown", "restructuredtext"];

/// 読み込み結果
#[derive(Debug, Clone, Default)]
pub struct LoadReport {
    /// 読み込めたリストと件数
    pub loaded: Vec<(ListKind, usize)>,
    /// ファイルが存在しなかったリスト
    pub missing: Vec<ListKind>,
    /// 空リストにフォールバックした回復可能エラー
    pub recovered: Vec<ConfigError>,
}

impl LoadReport {
    pub fn is_clean(&self) -> bool {
        self.recovered.is_empty()
    }
}

/// 設定ストア
#[derive(Debug, Clone)]
pub struct ConfigStore {
    dir: PathBuf,
    pub(crate) whitelist: NamedList,
    pub(crate) blacklist: NamedList,
}

impl ConfigStore {
    /// 空のストアを作成（ディスクには触れない）
    pub fn new<P: Into<PathBuf>>(dir: P) -> Self {
        let dir = dir.into();
        let whitelist = persisted_list(&dir, ListKind::Whitelist);
        let blacklist = persisted_list(&dir, ListKind::Blacklist);
        Self {
            dir,
            whitelist,
            blacklist,
        }
    }

    /// ストアを作成してディスクから読み込む
    pub fn open<P: Into<PathBuf>>(dir: P) -> std::result::Result<(Self, LoadReport), ConfigError> {
        let mut store = Self::new(dir);
        let report = store.load()?;
        Ok((store, report))
    }

    pub fn into_shared(self) -> SharedConfig {
        Rc::new(RefCell::new(self))
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// 両リストを読み込む
    ///
    /// ファイルが無いリストは空のまま。JSON が壊れている場合は警告を出して空にし、
    /// エラーを `LoadReport::recovered` に積む。それ以外の読み込み失敗はそのまま返す
    pub fn load(&mut self) -> std::result::Result<LoadReport, ConfigError> {
        let mut report = LoadReport::default();

        for kind in [ListKind::Whitelist, ListKind::Blacklist] {
            let Some(list) = self.persisted_mut(kind) else {
                continue;
            };
            let Some(path) = list.path().map(Path::to_path_buf) else {
                continue;
            };
            list.set_recovered(false);

            match read_list_file(&path) {
                Ok(Some(entries)) => {
                    log::info!("loaded {} entries from {}", entries.len(), path.display());
                    report.loaded.push((kind, entries.len()));
                    list.replace_entries(entries);
                }
                Ok(None) => {
                    log::debug!("{} does not exist yet, starting empty", path.display());
                    report.missing.push(kind);
                    list.replace_entries(Vec::new());
                }
                Err(err @ ConfigError::Malformed { .. }) => {
                    log::warn!("{}; falling back to an empty {}", err, kind);
                    report.recovered.push(err);
                    list.replace_entries(Vec::new());
                    list.set_recovered(true);
                }
                Err(err) => return Err(err),
            }
        }

        Ok(report)
    }

    /// 指定リストを書き戻す。未決定リストは永続化しないので何もしない
    ///
    /// 壊れたファイルから復旧したまま変更のないリストは、元のファイルを残すため書き込まない
    pub fn save(&self, kind: ListKind) -> Result<()> {
        match self.persisted(kind) {
            Some(list) if list.is_recovered() => {
                log::warn!("{} was not loaded cleanly and is unchanged, leaving the file as is", kind);
                Ok(())
            }
            Some(list) => list.persist(),
            None => Ok(()),
        }
    }

    /// 両リストを書き戻す
    pub fn save_all(&self) -> Result<()> {
        self.save(ListKind::Whitelist)?;
        self.save(ListKind::Blacklist)
    }

    pub fn whitelist(&self) -> &NamedList {
        &self.whitelist
    }

    pub fn blacklist(&self) -> &NamedList {
        &self.blacklist
    }

    /// 永続化されるリストを取得
    pub fn persisted(&self, kind: ListKind) -> Option<&NamedList> {
        match kind {
            ListKind::Whitelist => Some(&self.whitelist),
            ListKind::Blacklist => Some(&self.blacklist),
            ListKind::Undecided => None,
        }
    }

    pub fn persisted_mut(&mut self, kind: ListKind) -> Option<&mut NamedList> {
        match kind {
            ListKind::Whitelist => Some(&mut self.whitelist),
            ListKind::Blacklist => Some(&mut self.blacklist),
            ListKind::Undecided => None,
        }
    }

    /// 言語が現在属しているリスト（両方にある場合はホワイトリスト優先）
    pub fn classify(&self, name: &str) -> ListKind {
        if self.whitelist.contains(name) {
            ListKind::Whitelist
        } else if self.blacklist.contains(name) {
            ListKind::Blacklist
        } else {
            ListKind::Undecided
        }
    }

    /// 折り返しモードを判定
    pub fn decide(&self, language_name: Option<&str>) -> WrapDecision {
        policy::decide(language_name, &self.whitelist, &self.blacklist)
    }

    /// レジストリの全言語からホワイトリストとブラックリストを除いた未決定リスト
    pub fn undecided<R: LanguageRegistry + ?Sized>(&self, registry: &R) -> NamedList {
        let entries: Vec<LanguageId> = registry
            .language_ids()
            .into_iter()
            .filter(|id| !self.whitelist.contains(id.as_str()) && !self.blacklist.contains(id.as_str()))
            .collect();
        NamedList::new(ListKind::Undecided).with_entries(entries)
    }

    /// 両リストが空の場合のみ既定のホワイトリストを設定して書き戻す
    pub fn seed_defaults(&mut self) -> Result<bool> {
        if !self.whitelist.is_empty() || !self.blacklist.is_empty() {
            log::info!("lists already configured, defaults not applied");
            return Ok(false);
        }

        self.whitelist
            .replace_entries(DEFAULT_WHITELIST.iter().map(|&name| LanguageId::new(name)).collect());
        self.whitelist.set_recovered(false);
        self.whitelist.persist()?;
        log::info!("seeded whitelist with {:?}", DEFAULT_WHITELIST);
        Ok(true)
    }
}

fn persisted_list(dir: &Path, kind: ListKind) -> NamedList {
    match list_file(dir, kind) {
        Some(path) => NamedList::persisted(kind, path),
        None => NamedList::new(kind),
    }
}
