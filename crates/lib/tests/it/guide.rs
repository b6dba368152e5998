//! Guide aggregate scenarios, round-trips and timestamp cascading.

use guidedoc::{AccessEntry, Guide, RequestOption, Step, Tag, Timestamp};

use crate::helpers::{T0, doc, fixed_clock, guide_stamp, sample_guide};

#[test]
fn build_guide_scenario() {
    let mut guide = Guide::new("g1");
    guide.set_content_id("de-DE", "c1");
    guide.grant_user_access("u1");
    guide.insert_step(0, Step::chapter("s1", "g2"));

    assert_eq!(guide.get_step("s1").and_then(Step::target), Some("g2"));
    assert_eq!(guide.index_of_step("s1"), Some(0));
    assert!(guide.has_user_access("u1"));
}

#[test]
fn insert_then_index_of() {
    let mut guide = sample_guide(fixed_clock());
    for index in [0, 2, guide.steps().len()] {
        let id = format!("new{index}");
        guide.insert_step(index, Step::action(&id));
        assert_eq!(guide.index_of_step(&id), Some(index));
    }
}

#[test]
fn grant_and_tag_idempotence() {
    let mut guide = Guide::with_clock("g1", fixed_clock());
    guide.grant_user_access("u1");
    guide.grant_user_access("u1");
    assert_eq!(guide.access_entries(), [AccessEntry::user("u1")]);

    assert!(!guide.revoke_user_access("u2"));
    assert_eq!(guide.access_entries().len(), 1);

    guide.add_custom_tag("vip");
    guide.add_custom_tag("vip");
    assert_eq!(guide.tags(), [Tag::custom("vip")]);

    guide.grant_all_access();
    assert!(guide.has_all_access());
    assert!(guide.revoke_all_access());
    assert!(!guide.has_all_access());
}

#[test]
fn export_shape_is_canonical() {
    let guide = sample_guide(fixed_clock());
    let exported = guide.to_document();
    let keys: Vec<&String> = exported.keys().collect();
    assert_eq!(keys, ["id", "lastUpdate", "content", "access", "tags", "steps"]);

    let access: Vec<&str> = exported
        .get("access")
        .and_then(|v| v.as_array())
        .unwrap()
        .iter()
        .filter_map(|v| v.as_text())
        .collect();
    assert_eq!(access, ["@user:alice", "@group:staff"]);
}

#[test]
fn round_trip_through_document() {
    let guide = sample_guide(fixed_clock());
    let exported = guide.to_document();
    let reloaded = Guide::from_document(&exported).unwrap();

    assert_eq!(reloaded.to_document(), exported);
    assert_eq!(reloaded.steps(), guide.steps());
    assert_eq!(reloaded.last_update(), guide.last_update());
}

#[test]
fn round_trip_keeps_foreign_fields() {
    let input = doc(
        r#"{
            "id": "g1",
            "lastUpdate": "2019-03-01T10:15+01:00",
            "version": 3,
            "steps": [
                {"id": "s1", "type": "milestone", "badge": {"color": "gold"}},
                {"id": "s2", "type": "branch", "content": {"de-DE": "legacy"},
                 "userRequest": {"options": [{"next": "s1", "score": 1.5}]}}
            ]
        }"#,
    );
    let guide = Guide::from_document(&input).unwrap();
    assert_eq!(guide.to_document(), input);
    assert_eq!(
        guide.last_update().map(Timestamp::as_str),
        Some("2019-03-01T10:15+01:00")
    );
}

#[test]
fn loaded_without_last_update_gets_one_on_first_change() {
    let mut guide =
        Guide::from_document_with_clock(&doc(r#"{"id":"g1"}"#), fixed_clock()).unwrap();
    assert!(guide.last_update().is_none());
    assert!(!guide.to_document().contains_key("lastUpdate"));

    guide.add_typed_tag("draft");
    assert_eq!(guide_stamp(&guide), Some(T0 as i64));
    assert_eq!(
        guide.to_document().get_text("lastUpdate"),
        Some("2024-01-01T00:00:00.000Z")
    );
}

#[test]
fn option_change_cascades_to_guide() {
    let clock = fixed_clock();
    let mut guide = sample_guide(clock.clone());
    let before = guide_stamp(&guide).unwrap();
    clock.advance(60_000);

    {
        let mut step = guide.step_mut("s2").unwrap();
        let request = step.user_request_mut().unwrap();
        request.option_mut(1).unwrap().set_content_id("en-GB", "c-no");
    }

    let after = guide_stamp(&guide).unwrap();
    assert!(after >= before + 60_000);

    let request = guide.get_step("s2").and_then(Step::user_request).unwrap();
    let option: &RequestOption = &request.options()[1];
    assert_eq!(option.content_id("en-GB"), Some("c-no"));
}

#[test]
fn reading_a_step_does_not_stamp() {
    let clock = fixed_clock();
    let mut guide = sample_guide(clock.clone());
    let before = guide_stamp(&guide);

    {
        let step = guide.step_mut("s1").unwrap();
        assert_eq!(step.next(), Some("s2"));
    }
    assert_eq!(guide_stamp(&guide), before);
    assert!(guide.step_mut("missing").is_none());
}

#[test]
fn reattached_step_stamps_new_owner_only() {
    let clock_a = fixed_clock();
    let clock_b = fixed_clock();
    let mut a = sample_guide(clock_a);
    let mut b = Guide::with_clock("g2", clock_b);

    let step = a.remove_step("s4").unwrap();
    b.add_step(step);
    let a_before = guide_stamp(&a);
    let b_before = guide_stamp(&b);

    b.step_mut("s4").unwrap().set_next("end");
    assert_eq!(guide_stamp(&a), a_before);
    assert!(guide_stamp(&b) > b_before);
}

#[test]
fn empty_containers_round_trip() {
    let input = doc(
        r#"{
            "id": "g1",
            "lastUpdate": "2024-05-01T12:00:00Z",
            "content": {},
            "access": [],
            "tags": [],
            "steps": []
        }"#,
    );
    let guide = Guide::from_document(&input).unwrap();
    assert_eq!(guide.to_document(), input);

    let keys: Vec<String> = guide.to_document().keys().cloned().collect();
    assert_eq!(keys, ["id", "lastUpdate", "content", "access", "tags", "steps"]);
}

#[test]
fn container_emptied_by_mutation_is_dropped() {
    let input = doc(r#"{"id":"g1","content":{},"tags":[]}"#);
    let mut guide = Guide::from_document_with_clock(&input, fixed_clock()).unwrap();

    guide.set_content_id("de-DE", "c1");
    guide.remove_content_id("de-DE");
    guide.add_typed_tag("draft");
    guide.remove_typed_tag("draft");

    let exported = guide.to_document();
    assert!(!exported.contains_key("content"));
    assert!(!exported.contains_key("tags"));
}

#[test]
fn empty_access_identifier_is_not_granted() {
    let clock = fixed_clock();
    let mut guide = Guide::with_clock("g1", clock.clone());
    clock.advance(1_000);
    let before = guide_stamp(&guide);

    assert!(!guide.grant_user_access(""));
    assert!(!guide.grant_group_access(""));
    assert!(!guide.grant_access(AccessEntry::User(String::new())));
    assert!(guide.access_entries().is_empty());
    assert_eq!(guide_stamp(&guide), before);

    assert!(guide.grant_user_access("u1"));
    let reloaded = guidedoc::io::read_guide(&guidedoc::io::export_guide(&guide, false)).unwrap();
    assert_eq!(reloaded.access_entries(), [AccessEntry::user("u1")]);
}

#[test]
fn same_value_writes_stamp_on_both_paths() {
    let clock = fixed_clock();
    let mut guide = sample_guide(clock.clone());

    clock.advance(1_000);
    let before = guide_stamp(&guide).unwrap();
    guide.step_mut("s1").unwrap().set_next("s2");
    let after_step = guide_stamp(&guide).unwrap();
    assert!(after_step > before);
    assert_eq!(guide.get_step("s1").and_then(Step::next), Some("s2"));

    clock.advance(1_000);
    guide.set_content_id("de-DE", "c-de");
    assert!(guide_stamp(&guide).unwrap() > after_step);
}

#[test]
fn bad_tag_error_names_its_index() {
    let input = doc(r##"{"id":"g1","tags":["#ok","@fine","plain"]}"##);
    let err = Guide::from_document(&input).unwrap_err();
    assert_eq!(err.field(), Some("tags[2]"));
    assert!(err.is_format_error());

    let input = doc(r#"{"id":"g1","access":["@all","@user:"]}"#);
    let err = Guide::from_document(&input).unwrap_err();
    assert_eq!(err.field(), Some("access[1]"));
}
