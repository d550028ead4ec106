//! プラグインのライフサイクル
//!
//! 起動時に設定ディレクトリを作成してリストを読み込み、終了時に書き戻す

use crate::binder::TabEventBinder;
use crate::config::{ensure_dir, ConfigStore, LoadReport, SharedConfig};
use crate::error::Result;
use crate::options::RunOptions;
use std::path::{Path, PathBuf};

/// プラグイン本体
pub struct Wraptor {
    config_dir: PathBuf,
    config: SharedConfig,
    binder: TabEventBinder,
    load_report: LoadReport,
}

impl Wraptor {
    /// オプションから設定ディレクトリを決めて起動
    pub fn activate(options: &RunOptions) -> Result<Self> {
        let dir = options.resolve_config_dir()?;
        Self::activate_in(dir)
    }

    /// 指定ディレクトリで起動
    ///
    /// ディレクトリ作成の失敗は致命的。壊れたリストファイルは空として扱い、続行する
    pub fn activate_in<P: Into<PathBuf>>(dir: P) -> Result<Self> {
        let config_dir = dir.into();
        ensure_dir(&config_dir)?;

        let (store, load_report) = ConfigStore::open(&config_dir)?;
        for err in &load_report.recovered {
            log::warn!("recovered from configuration error: {}", err);
        }
        log::info!(
            "activated with {} wrapped and {} unwrapped languages from {}",
            store.whitelist().len(),
            store.blacklist().len(),
            config_dir.display()
        );

        let config = store.into_shared();
        let binder = TabEventBinder::new(config.clone());
        Ok(Self {
            config_dir,
            config,
            binder,
            load_report,
        })
    }

    /// 両リストを書き戻して終了
    pub fn deactivate(self) -> Result<()> {
        self.config.borrow().save_all()?;
        log::info!("deactivated, lists flushed to {}", self.config_dir.display());
        Ok(())
    }

    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }

    /// 共有設定ストア
    pub fn config(&self) -> SharedConfig {
        self.config.clone()
    }

    /// ホストに登録するイベントハンドラー
    pub fn binder(&self) -> &TabEventBinder {
        &self.binder
    }

    pub fn binder_mut(&mut self) -> &mut TabEventBinder {
        &mut self.binder
    }

    pub fn load_report(&self) -> &LoadReport {
        &self.load_report
    }
}
