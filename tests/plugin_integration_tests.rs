use tempfile::tempdir;
use wraptor::config::ConfigStore;
use wraptor::host::memory::{MemoryTab, MemoryWindow};
use wraptor::host::TabEventHandler;
use wraptor::input::PanelAction;
use wraptor::language::StaticRegistry;
use wraptor::options::RunOptions;
use wraptor::ui::ConfigPanel;
use wraptor::{ListKind, WrapDecision, WrapMode, Wraptor};

fn registry() -> StaticRegistry {
    StaticRegistry::new(["json", "markdown", "python"])
}

#[test]
fn test_config_changes_reach_open_tabs() {
    let temp_dir = tempdir().unwrap();
    let options = RunOptions {
        config_dir: Some(temp_dir.path().join("wraptor")),
        ..RunOptions::default()
    };
    let mut plugin = Wraptor::activate(&options).expect("activate");

    let mut window = MemoryWindow::new();
    let markdown = window.push_tab(MemoryTab::new(Some("Markdown")));
    TabEventHandler::<MemoryWindow>::on_tab_added(plugin.binder_mut(), window.tab_mut(markdown).unwrap());
    assert_eq!(window.tab(markdown).unwrap().view.wrap_changes, 0);

    // 設定画面で markdown をホワイトリストへ移す
    let mut panel = ConfigPanel::open(plugin.config(), &registry());
    panel.handle(PanelAction::CursorDown);
    panel.handle(PanelAction::MoveLeft);
    panel.handle(PanelAction::Quit);

    plugin.binder_mut().on_active_tab_changed(&mut window);
    let tab = window.tab(markdown).unwrap();
    assert_eq!(tab.view.wrap_mode(), WrapMode::Word);
    assert_eq!(tab.view.wrap_changes, 1);

    plugin.deactivate().expect("deactivate");
    let (store, _) = ConfigStore::open(temp_dir.path().join("wraptor")).unwrap();
    assert_eq!(store.classify("markdown"), ListKind::Whitelist);
}

#[test]
fn test_scenarios_through_the_binder() {
    let temp_dir = tempdir().unwrap();
    let plugin = Wraptor::activate_in(temp_dir.path()).expect("activate");
    {
        let config = plugin.config();
        let mut panel = ConfigPanel::open(config, &registry());
        // json を未決定からブラックリストへ
        panel.handle(PanelAction::MoveRight);
    }

    let binder = plugin.binder();
    let mut json = MemoryTab::new(Some("JSON"));
    let mut python = MemoryTab::new(Some("python"));
    let mut plain = MemoryTab::new(None);

    assert_eq!(binder.apply(&mut json), WrapDecision::NoWrap);
    assert_eq!(binder.apply(&mut python), WrapDecision::Unchanged);
    assert_eq!(binder.apply(&mut plain), WrapDecision::Unchanged);
    assert_eq!(json.view.wrap_changes, 1);
    assert_eq!(python.view.wrap_changes, 0);
    assert_eq!(plain.view.wrap_changes, 0);
}

#[test]
fn test_undecided_is_recomputed_on_open() {
    let temp_dir = tempdir().unwrap();
    let plugin = Wraptor::activate_in(temp_dir.path()).expect("activate");

    let mut first = ConfigPanel::open(plugin.config(), &registry());
    first.handle(PanelAction::SelectAll);
    first.handle(PanelAction::MoveLeft);
    assert!(first.rows(ListKind::Undecided).is_empty());

    let second = ConfigPanel::open(plugin.config(), &StaticRegistry::new(["json", "rust"]));
    let undecided: Vec<String> = second
        .rows(ListKind::Undecided)
        .iter()
        .map(|id| id.as_str().to_string())
        .collect();
    assert_eq!(undecided, vec!["rust"]);
    assert_eq!(second.rows(ListKind::Whitelist).len(), 3);
}
