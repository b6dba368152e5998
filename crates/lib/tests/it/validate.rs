//! Validation of loaded documents through the public entity constructors.

use guidedoc::{Content, Error, Guide, Step, ValidationError, doc::Kind, io};

use crate::helpers::doc;

#[test]
fn step_missing_id_fails_before_any_step_is_built() {
    let input = doc(r#"{"id":"g1","steps":[{"type":"action"}]}"#);
    let err = Guide::from_document(&input).unwrap_err();
    assert_eq!(
        err,
        ValidationError::MissingField {
            field: "steps[0].id".to_string(),
            expected: Kind::Text,
        }
    );
}

#[test]
fn guide_requires_id() {
    let err = Guide::from_document(&doc(r#"{"steps":[]}"#)).unwrap_err();
    assert!(err.is_missing_field());
    assert_eq!(err.field(), Some("id"));
}

#[test]
fn wrong_container_kinds_are_rejected() {
    let cases = [
        (r#"{"id":"g1","content":[]}"#, "content"),
        (r#"{"id":"g1","content":{"de-DE":1}}"#, "content.de-DE"),
        (r#"{"id":"g1","access":"@all"}"#, "access"),
        (r#"{"id":"g1","steps":["s1"]}"#, "steps[0]"),
        (r#"{"id":7}"#, "id"),
    ];
    for (text, field) in cases {
        let err = Guide::from_document(&doc(text)).unwrap_err();
        assert!(err.is_type_error(), "for {text}");
        assert_eq!(err.field(), Some(field), "for {text}");
    }
}

#[test]
fn nested_branch_errors_name_full_path() {
    let input = doc(
        r#"{"id":"g1","steps":[
            {"id":"s1","type":"action"},
            {"id":"s2","type":"branch","userRequest":{"content":{"de-DE":null}}}
        ]}"#,
    );
    let err = Guide::from_document(&input).unwrap_err();
    assert_eq!(err.field(), Some("steps[1].userRequest.content.de-DE"));
}

#[test]
fn unknown_step_type_is_reported() {
    let err = Step::from_document(&doc(r#"{"id":"s1","type":"Action"}"#)).unwrap_err();
    assert!(err.is_format_error());
    assert_eq!(err.to_string(), "Invalid step type: Action");
}

#[test]
fn content_media_requires_both_fields() {
    let err = Content::from_document(&doc(r#"{"id":"c1","media":{"mimeType":"a/b"}}"#))
        .unwrap_err();
    assert_eq!(err.field(), Some("media.path"));
}

#[test]
fn validation_errors_convert_into_crate_error() {
    let err = io::read_guide(r#"{"id":"g1","tags":["nomarker"]}"#).unwrap_err();
    assert!(err.is_validation_error());
    assert_eq!(err.module(), "validate");
    match err {
        Error::Validation(err) => {
            assert_eq!(err.field(), Some("tags[0]"));
            assert!(matches!(err.unlocated(), ValidationError::InvalidTag { .. }));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}
