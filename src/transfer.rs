//! リスト間の移動
//!
//! 選択された言語を一つずつ「移動先に追加 → 移動元から削除」の順で移す。
//! 各操作はそれぞれのリストの書き戻しを伴う。移動元に無い値や重複した値を含む選択は、
//! どのリストにも触れる前に拒否する

use crate::config::{ConfigStore, ListKind, NamedList};
use crate::error::{ListError, Result};
use crate::language::LanguageId;

/// 選択された値を移動元から移動先へ移す
///
/// 戻り値は移動した件数。書き込みが途中で失敗した場合、それまでに移した値は移動済みのまま残る
pub fn move_selected(
    source: &mut NamedList,
    destination: &mut NamedList,
    selection: &[LanguageId],
) -> Result<usize> {
    if source.kind() == destination.kind() {
        return Err(ListError::SameList {
            list: source.kind().name().to_string(),
        }
        .into());
    }
    check_selection(source, selection)?;

    for value in selection {
        destination.append(value.clone())?;
        if let Err(err) = source.remove(value) {
            log::error!(
                "moved {} into {} but could not remove it from {}: {}",
                value,
                destination.kind(),
                source.kind(),
                err
            );
            return Err(err);
        }
        log::info!("moved {} from {} to {}", value, source.kind(), destination.kind());
    }

    Ok(selection.len())
}

/// 選択の各値が移動元に（重複分も含めて）存在することを確認する
fn check_selection(source: &NamedList, selection: &[LanguageId]) -> Result<()> {
    let mut remaining: Vec<&LanguageId> = source.iter().collect();
    for value in selection {
        match remaining.iter().position(|&entry| entry == value) {
            Some(position) => {
                remaining.swap_remove(position);
            }
            None => {
                return Err(ListError::ValueNotFound {
                    value: value.to_string(),
                    list: source.kind().name().to_string(),
                }
                .into())
            }
        }
    }
    Ok(())
}

/// ストアの二つのリスト、または未決定リストとの間で移動する
pub fn move_between(
    store: &mut ConfigStore,
    undecided: &mut NamedList,
    from: ListKind,
    to: ListKind,
    selection: &[LanguageId],
) -> Result<usize> {
    let ConfigStore {
        whitelist,
        blacklist,
        ..
    } = store;

    let (source, destination): (&mut NamedList, &mut NamedList) = match (from, to) {
        (ListKind::Whitelist, ListKind::Undecided) => (whitelist, undecided),
        (ListKind::Whitelist, ListKind::Blacklist) => (whitelist, blacklist),
        (ListKind::Undecided, ListKind::Whitelist) => (undecided, whitelist),
        (ListKind::Undecided, ListKind::Blacklist) => (undecided, blacklist),
        (ListKind::Blacklist, ListKind::Whitelist) => (blacklist, whitelist),
        (ListKind::Blacklist, ListKind::Undecided) => (blacklist, undecided),
        (same, _) => {
            return Err(ListError::SameList {
                list: same.name().to_string(),
            }
            .into())
        }
    };

    move_selected(source, destination, selection)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::WraptorError;
    use tempfile::tempdir;

    fn ids(names: &[&str]) -> Vec<LanguageId> {
        names.iter().map(|&name| LanguageId::new(name)).collect()
    }

    fn names(list: &NamedList) -> Vec<&str> {
        list.iter().map(LanguageId::as_str).collect()
    }

    #[test]
    fn moves_in_selection_order() {
        let mut undecided = NamedList::new(ListKind::Undecided).with_entries(["c", "markdown", "rst"]);
        let mut whitelist = NamedList::new(ListKind::Whitelist).with_entries(["latex"]);

        let moved = move_selected(&mut undecided, &mut whitelist, &ids(&["rst", "markdown"])).unwrap();

        assert_eq!(moved, 2);
        assert_eq!(names(&whitelist), vec!["latex", "rst", "markdown"]);
        assert_eq!(names(&undecided), vec!["c"]);
    }

    #[test]
    fn missing_source_value_leaves_both_lists_untouched() {
        let mut blacklist = NamedList::new(ListKind::Blacklist).with_entries(["json"]);
        let mut undecided = NamedList::new(ListKind::Undecided);

        let err = move_selected(&mut blacklist, &mut undecided, &ids(&["json", "yaml"])).unwrap_err();

        assert!(matches!(err, WraptorError::List(ListError::ValueNotFound { .. })));
        assert!(undecided.is_empty());
        assert_eq!(names(&blacklist), vec!["json"]);
    }

    #[test]
    fn repeated_value_is_rejected() {
        let mut undecided = NamedList::new(ListKind::Undecided).with_entries(["rust", "c"]);
        let mut whitelist = NamedList::new(ListKind::Whitelist);

        let err = move_selected(&mut undecided, &mut whitelist, &ids(&["rust", "Rust"])).unwrap_err();

        assert!(matches!(err, WraptorError::List(ListError::ValueNotFound { .. })));
        assert!(whitelist.is_empty());
        assert_eq!(names(&undecided), vec!["rust", "c"]);
    }

    #[test]
    fn failed_move_keeps_lists_disjoint_on_disk() {
        let dir = tempdir().unwrap();
        let mut store = ConfigStore::new(dir.path());
        store.blacklist.append(LanguageId::new("json")).unwrap();
        let registry = crate::language::StaticRegistry::new(["json", "markdown"]);
        let mut undecided = store.undecided(&registry);

        let err = move_between(
            &mut store,
            &mut undecided,
            ListKind::Undecided,
            ListKind::Whitelist,
            &ids(&["json"]),
        )
        .unwrap_err();

        assert!(matches!(err, WraptorError::List(ListError::ValueNotFound { .. })));
        assert!(!dir.path().join("whitelist.json").exists());
        let (reloaded, _) = ConfigStore::open(dir.path()).unwrap();
        assert!(reloaded.whitelist().is_empty());
        assert_eq!(names(reloaded.blacklist()), vec!["json"]);
    }

    #[test]
    fn same_list_is_rejected() {
        let dir = tempdir().unwrap();
        let mut store = ConfigStore::new(dir.path());
        let mut undecided = NamedList::new(ListKind::Undecided);

        let err = move_between(
            &mut store,
            &mut undecided,
            ListKind::Whitelist,
            ListKind::Whitelist,
            &ids(&["markdown"]),
        )
        .unwrap_err();
        assert!(matches!(err, WraptorError::List(ListError::SameList { .. })));
    }

    #[test]
    fn move_between_persists_both_sides() {
        let dir = tempdir().unwrap();
        let mut store = ConfigStore::new(dir.path());
        let mut undecided = NamedList::new(ListKind::Undecided).with_entries(["json", "markdown"]);

        move_between(
            &mut store,
            &mut undecided,
            ListKind::Undecided,
            ListKind::Blacklist,
            &ids(&["json"]),
        )
        .unwrap();
        move_between(
            &mut store,
            &mut undecided,
            ListKind::Blacklist,
            ListKind::Whitelist,
            &ids(&["json"]),
        )
        .unwrap();

        let white: Vec<String> =
            serde_json::from_str(&std::fs::read_to_string(dir.path().join("whitelist.json")).unwrap())
                .unwrap();
        let black: Vec<String> =
            serde_json::from_str(&std::fs::read_to_string(dir.path().join("blacklist.json")).unwrap())
                .unwrap();
        assert_eq!(white, vec!["json"]);
        assert!(black.is_empty());
        assert_eq!(names(&undecided), vec!["markdown"]);
    }
}
