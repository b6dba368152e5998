//! Content aggregate tests.

use guidedoc::{Content, IconizedMessage, Media};

use crate::helpers::{content_stamp, doc, fixed_clock, sample_content};

#[test]
fn duplicate_warning_survives_once() {
    let mut content = Content::with_clock("c1", fixed_clock());
    let warning = IconizedMessage::with_icon("Hot surface", "fire");
    content.add_warning(warning.clone());
    content.add_warning(warning.clone());
    assert_eq!(content.warnings(), [warning]);
}

#[test]
fn export_shape_is_canonical() {
    let content = sample_content(fixed_clock());
    let exported = content.to_document();
    let keys: Vec<&String> = exported.keys().collect();
    assert_eq!(
        keys,
        [
            "id",
            "lastUpdate",
            "languageId",
            "title",
            "description",
            "media",
            "warnings",
            "hints"
        ]
    );
    assert_eq!(
        exported.get("media").unwrap().to_string(),
        r#"{"mimeType":"image/png","path":"intro.png"}"#
    );
}

#[test]
fn round_trip_through_document() {
    let content = sample_content(fixed_clock());
    let exported = content.to_document();
    let reloaded = Content::from_document(&exported).unwrap();
    assert_eq!(reloaded.to_document(), exported);
    assert_eq!(reloaded.media(), content.media());
    assert_eq!(reloaded.hints(), content.hints());
}

#[test]
fn child_changes_stamp_content() {
    let clock = fixed_clock();
    let mut content = sample_content(clock.clone());
    clock.advance(1_000);
    let before = content_stamp(&content).unwrap();

    content.warning_mut(0).unwrap().clear_icon();
    let after_warning = content_stamp(&content).unwrap();
    assert!(after_warning > before);

    content.media_mut().unwrap().set_mime_type("image/jpeg");
    assert!(content_stamp(&content).unwrap() > after_warning);
    assert_eq!(content.media().map(Media::mime_type), Some("image/jpeg"));
    assert_eq!(content.warnings()[0].icon(), None);
}

#[test]
fn emptied_lists_disappear_from_document() {
    let mut content = sample_content(fixed_clock());
    assert!(content.remove_warning(&IconizedMessage::with_icon("Heiß", "fire")));
    assert!(content.remove_hint(&IconizedMessage::new("Handschuhe tragen")));
    content.remove_media();
    content.clear_description();

    let exported = content.to_document();
    for field in ["warnings", "hints", "media", "description"] {
        assert!(!exported.contains_key(field), "{field} still present");
    }
}

#[test]
fn loaded_duplicates_are_kept() {
    let content = Content::from_document(&doc(
        r#"{"id":"c1","hints":[{"text":"a"},{"text":"a"}]}"#,
    ))
    .unwrap();
    assert_eq!(content.hints().len(), 2);
    assert!(content.last_update().is_none());
}

#[test]
fn empty_message_lists_round_trip() {
    let input = doc(r#"{"id":"c1","lastUpdate":"2024-05-01T12:00:00Z","warnings":[],"hints":[]}"#);
    let mut content = Content::from_document_with_clock(&input, fixed_clock()).unwrap();
    assert_eq!(content.to_document(), input);

    content.add_hint(IconizedMessage::new("Tip"));
    content.remove_hint(&IconizedMessage::new("Tip"));
    let exported = content.to_document();
    assert!(!exported.contains_key("hints"));
    assert!(exported.contains_key("warnings"));
}
