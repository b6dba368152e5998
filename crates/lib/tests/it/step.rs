//! Step variants through their public API and documents.

use guidedoc::{Guide, RequestOption, Step, StepKind, StepType};

use crate::helpers::doc;

#[test]
fn branch_with_empty_user_request_has_no_options() {
    let input = doc(r#"{"id":"g1","steps":[{"id":"s1","type":"branch","userRequest":{}}]}"#);
    let guide = Guide::from_document(&input).unwrap();

    let step = guide.get_step("s1").unwrap();
    assert_eq!(step.step_type(), StepType::Branch);
    let request = step.user_request().unwrap();
    assert!(request.options().is_empty());
    assert!(request.content_ids().is_empty());
}

#[test]
fn empty_user_request_object_is_kept_on_export() {
    let step = Step::branch("s1");
    assert_eq!(
        step.to_document().to_string(),
        r#"{"id":"s1","type":"branch","userRequest":{}}"#
    );
}

#[test]
fn kind_exposes_variant_data() {
    let step = Step::chapter("s1", "g2");
    match step.kind() {
        StepKind::Chapter { target } => assert_eq!(target, "g2"),
        other => panic!("unexpected kind {other:?}"),
    }
    assert_eq!(step.step_type().to_string(), "chapter");
    assert_eq!("milestone".parse::<StepType>().unwrap(), StepType::Milestone);
}

#[test]
fn option_documents() {
    let option = RequestOption::from_document(&doc(
        r#"{"content":{"de-DE":"c1","en-GB":"c2"},"next":"s5"}"#,
    ))
    .unwrap();
    assert_eq!(option.next(), Some("s5"));
    assert_eq!(option.content_id("en-GB"), Some("c2"));

    let mut option = option;
    option.remove_content_id("de-DE");
    option.remove_content_id("en-GB");
    option.remove_next();
    assert!(option.to_document().is_empty());
}

#[test]
fn options_keep_their_order() {
    let mut step = Step::branch("b");
    for next in ["s1", "s2", "s3"] {
        let mut option = RequestOption::new();
        option.set_next(next);
        step.add_option(option).unwrap();
    }
    step.remove_option(1).unwrap();

    let nexts: Vec<Option<&str>> = step
        .user_request()
        .unwrap()
        .options()
        .iter()
        .map(RequestOption::next)
        .collect();
    assert_eq!(nexts, [Some("s1"), Some("s3")]);
}

#[test]
fn option_mut_through_user_request() {
    let mut step = Step::branch("b");
    step.add_option(RequestOption::new()).unwrap();

    let request = step.user_request_mut().unwrap();
    request.option_mut(0).unwrap().set_next("s9");
    request.options_mut()[0].set_content_id("de-DE", "c1");
    assert!(request.option_mut(1).is_none());

    let doc = step.to_document();
    let options = doc
        .get("userRequest")
        .and_then(|v| v.as_object())
        .and_then(|r| r.get("options"))
        .and_then(|v| v.as_array())
        .unwrap();
    assert_eq!(
        options.get(0).unwrap().to_string(),
        r#"{"content":{"de-DE":"c1"},"next":"s9"}"#
    );
}

#[test]
fn chapter_round_trip() {
    let input = doc(r#"{"id":"s3","type":"chapter","target":"g2","next":"s4"}"#);
    let step = Step::from_document(&input).unwrap();
    assert_eq!(step.target(), Some("g2"));
    assert_eq!(step.to_document(), input);
}

#[test]
fn empty_containers_in_steps_round_trip() {
    let input = doc(
        r#"{
            "id": "g1",
            "steps": [
                {"id": "s1", "type": "action", "content": {}},
                {"id": "s2", "type": "branch",
                 "userRequest": {"options": [{"content": {}, "next": "s1"}], "content": {}}},
                {"id": "s3", "type": "branch", "userRequest": {"options": [], "content": {}}}
            ]
        }"#,
    );
    let guide = Guide::from_document(&input).unwrap();
    assert_eq!(guide.to_document(), input);

    let step = Step::from_document(&doc(
        r#"{"id":"s3","type":"branch","userRequest":{"options":[],"content":{}}}"#,
    ))
    .unwrap();
    assert_eq!(
        step.to_document().to_string(),
        r#"{"id":"s3","type":"branch","userRequest":{"content":{},"options":[]}}"#
    );
}

#[test]
fn filled_then_emptied_options_are_dropped() {
    let mut step = Step::from_document(&doc(
        r#"{"id":"s1","type":"branch","userRequest":{"options":[]}}"#,
    ))
    .unwrap();
    step.add_option(RequestOption::new()).unwrap();
    step.remove_option(0).unwrap();
    assert_eq!(
        step.to_document().to_string(),
        r#"{"id":"s1","type":"branch","userRequest":{}}"#
    );
}
