//! Document tree and JSON codec tests.

use guidedoc::{
    Error,
    doc::{Doc, Kind, List, Value, json},
};

use crate::helpers::doc;

#[test]
fn nested_get_or_create_builds_tree() {
    let mut root = Doc::new();
    root.get_or_create_object("userRequest")
        .get_or_create_array("options")
        .push(Doc::from_iter([("next", "s2")]));

    assert_eq!(
        root.to_string(),
        r#"{"userRequest":{"options":[{"next":"s2"}]}}"#
    );
}

#[test]
fn serde_json_conversions_are_lossless() {
    let raw = serde_json::json!({
        "id": "g1",
        "count": 3,
        "ratio": 0.5,
        "flags": [true, null],
        "nested": {"b": "x", "a": "y"}
    });
    let value = Value::from(raw.clone());
    assert_eq!(value.kind(), Kind::Object);

    let back = serde_json::Value::from(&value);
    assert_eq!(back, raw);
    assert_eq!(json::print(&value, false), raw.to_string());
}

#[test]
fn pretty_and_compact_parse_back_equal() {
    let original = doc(r##"{"id":"g1","tags":["#a","@b"],"content":{"de-DE":"c1"}}"##);
    let pretty = json::print_object(&original, true);
    assert!(pretty.contains('\n'));
    assert_eq!(json::parse_object(&pretty).unwrap(), original);
}

#[test]
fn list_remove_matching_on_documents() {
    let mut list: List = ["@user:a", "@all", "@user:a"].into_iter().collect();
    list.remove_matching(|v| v.as_text() == Some("@user:a"));
    assert_eq!(list.len(), 1);
    assert_eq!(list.get(0), Some(&Value::from("@all")));
}

#[test]
fn format_errors_convert_into_crate_error() {
    let err: Error = json::parse("{").unwrap_err().into();
    assert!(err.is_format_error());
    assert_eq!(err.module(), "doc");

    let err: Error = json::parse_object("\"text\"").unwrap_err().into();
    assert!(err.is_type_error());
}

#[test]
fn parse_slice_accepts_bytes() {
    let value = json::parse_slice(br#"[1, "two"]"#).unwrap();
    let list = value.as_array().unwrap();
    assert_eq!(list.len(), 2);
    assert!(list.get(1).is_some_and(|v| *v == "two"));
}
