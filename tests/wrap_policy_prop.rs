//! WrapPolicy と移動操作の性質テスト

use proptest::prelude::*;
use proptest::test_runner::Config as ProptestConfig;
use wraptor::config::{ListKind, NamedList};
use wraptor::language::LanguageId;
use wraptor::policy::{decide, WrapDecision};
use wraptor::transfer::move_selected;

fn language_name() -> impl Strategy<Value = String> {
    "[A-Za-z][A-Za-z0-9 +#-]{0,12}"
}

fn language_names() -> impl Strategy<Value = Vec<String>> {
    proptest::collection::vec(language_name(), 0..8)
}

fn list(kind: ListKind, names: &[String]) -> NamedList {
    NamedList::new(kind).with_entries(names.iter().cloned())
}

fn contains_lowercase(names: &[String], name: &str) -> bool {
    names.iter().any(|entry| entry.to_lowercase() == name.to_lowercase())
}

proptest! {
    #![proptest_config(ProptestConfig { cases: 128, .. ProptestConfig::default() })]

    #[test]
    fn word_iff_whitelisted(name in language_name(), white in language_names(), black in language_names()) {
        let decision = decide(Some(&name.to_lowercase()), &list(ListKind::Whitelist, &white), &list(ListKind::Blacklist, &black));
        prop_assert_eq!(decision == WrapDecision::Word, contains_lowercase(&white, &name));
    }

    #[test]
    fn unlisted_is_unchanged(name in language_name(), white in language_names(), black in language_names()) {
        prop_assume!(!contains_lowercase(&white, &name) && !contains_lowercase(&black, &name));
        let decision = decide(Some(&name), &list(ListKind::Whitelist, &white), &list(ListKind::Blacklist, &black));
        prop_assert_eq!(decision, WrapDecision::Unchanged);
    }

    #[test]
    fn missing_language_is_always_unchanged(white in language_names(), black in language_names()) {
        let decision = decide(None, &list(ListKind::Whitelist, &white), &list(ListKind::Blacklist, &black));
        prop_assert_eq!(decision, WrapDecision::Unchanged);
    }

    #[test]
    fn move_shifts_exactly_one_entry(source in language_names(), pick in any::<prop::sample::Index>(), destination in language_names()) {
        prop_assume!(!source.is_empty());
        let value = source[pick.index(source.len())].clone();
        prop_assume!(!contains_lowercase(&destination, &value));

        let mut from = list(ListKind::Undecided, &source);
        let mut to = list(ListKind::Whitelist, &destination);
        let occurrences = source.iter().filter(|name| name.to_lowercase() == value.to_lowercase()).count();

        move_selected(&mut from, &mut to, &[LanguageId::new(value.as_str())]).unwrap();

        prop_assert_eq!(to.len(), destination.len() + 1);
        prop_assert_eq!(from.len(), source.len() - 1);
        prop_assert!(to.contains(&value));
        prop_assert_eq!(from.contains(&value), occurrences > 1);
    }
}
