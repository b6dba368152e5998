//! Canonical string forms of the value types.

use guidedoc::{AccessEntry, AccessKind, Tag, TagKind, Timestamp};
use proptest::prelude::*;

fn access_entry() -> impl Strategy<Value = AccessEntry> {
    prop_oneof![
        ".*".prop_map(AccessEntry::User),
        ".*".prop_map(AccessEntry::Group),
        Just(AccessEntry::All),
    ]
}

fn tag() -> impl Strategy<Value = Tag> {
    (prop_oneof![Just(TagKind::Custom), Just(TagKind::Typed)], ".*")
        .prop_map(|(kind, value)| Tag::new(kind, value))
}

proptest! {
    #[test]
    fn prop_access_entry_round_trips(entry in access_entry()) {
        let parsed = entry.to_string().parse::<AccessEntry>();
        if entry.is_valid() {
            prop_assert_eq!(parsed.unwrap(), entry);
        } else {
            prop_assert!(parsed.unwrap_err().is_format_error());
        }
    }

    #[test]
    fn prop_tag_round_trips(tag in tag()) {
        let text = tag.to_string();
        prop_assert_eq!(text.parse::<Tag>().unwrap(), tag);
    }

    #[test]
    fn prop_unmarked_strings_are_not_tags(value in "[a-z0-9 ]+") {
        prop_assert!(value.parse::<Tag>().is_err());
    }

    #[test]
    fn prop_timestamp_from_millis_round_trips(millis in 0u64..4_102_444_800_000) {
        let stamp = Timestamp::from_millis(millis);
        let parsed: Timestamp = stamp.as_str().parse().unwrap();
        prop_assert_eq!(parsed.timestamp_millis(), millis as i64);
        prop_assert_eq!(parsed.to_string(), stamp.to_string());
    }
}

#[test]
fn custom_tag_scenario() {
    let tag: Tag = "#vip".parse().unwrap();
    assert_eq!(tag.kind(), TagKind::Custom);
    assert_eq!(tag.value(), "vip");
    assert!("vip".parse::<Tag>().is_err());
}

#[test]
fn access_entry_identifier_after_prefix() {
    let entry: AccessEntry = "@group:team:berlin".parse().unwrap();
    assert_eq!(entry.kind(), AccessKind::Group);
    assert_eq!(entry.id(), Some("team:berlin"));
}

#[test]
fn access_entry_all_is_exact() {
    assert!("@all".parse::<AccessEntry>().is_ok());
    assert!("@all:".parse::<AccessEntry>().is_err());
    assert!("@ALL".parse::<AccessEntry>().is_err());
}

#[test]
fn equal_values_hash_equal() {
    use std::collections::HashSet;

    let tags: HashSet<Tag> = ["#a", "#a", "@a"]
        .iter()
        .map(|t| t.parse().unwrap())
        .collect();
    assert_eq!(tags.len(), 2);

    let stamps: HashSet<Timestamp> = ["2020-01-01T01:00:00+01:00", "2020-01-01T00:00:00Z"]
        .iter()
        .map(|t| t.parse().unwrap())
        .collect();
    assert_eq!(stamps.len(), 1);
}
