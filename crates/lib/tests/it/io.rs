//! Text and file helpers.

use guidedoc::io;

use crate::helpers::{fixed_clock, sample_content, sample_guide};

#[test]
fn guide_file_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("guide.json");
    let guide = sample_guide(fixed_clock());

    io::write_guide(&guide, &path, true).unwrap();
    let text = std::fs::read_to_string(&path).unwrap();
    assert!(text.starts_with("{\n  \"id\": \"g1\""));

    let reloaded = io::read_guide_file(&path).unwrap();
    assert_eq!(reloaded.to_document(), guide.to_document());
}

#[test]
fn content_file_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("content.json");
    let content = sample_content(fixed_clock());

    io::write_content(&content, &path, false).unwrap();
    let reloaded = io::read_content_file(&path).unwrap();
    assert_eq!(io::export_content(&reloaded, false), io::export_content(&content, false));
}

#[test]
fn export_then_read_is_stable() {
    let guide = sample_guide(fixed_clock());
    let compact = io::export_guide(&guide, false);
    let pretty = io::export_guide(&guide, true);

    let from_compact = io::read_guide(&compact).unwrap();
    let from_pretty = io::read_guide(&pretty).unwrap();
    assert_eq!(io::export_guide(&from_compact, false), compact);
    assert_eq!(io::export_guide(&from_pretty, false), compact);
}

#[test]
fn missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = io::read_guide_file(dir.path().join("absent.json")).unwrap_err();
    assert!(err.is_io_error());
    assert_eq!(err.module(), "io");
}

#[test]
fn malformed_text_is_format_error() {
    let err = io::read_content("{\"id\": \"c1\",}").unwrap_err();
    assert!(err.is_format_error());

    let err = io::read_guide("[]").unwrap_err();
    assert!(err.is_format_error());
}
