//! Shared fixtures for the integration tests.

use std::sync::Arc;

use guidedoc::{
    Content, FixedClock, Guide, IconizedMessage, Media, RequestOption, Step, Timestamp,
    doc::{Doc, json},
};

/// Start time of every fixed clock handed out here (2024-01-01 00:00:00 UTC).
pub const T0: u64 = 1_704_067_200_000;

/// Creates a fixed clock starting at [`T0`].
pub fn fixed_clock() -> Arc<FixedClock> {
    Arc::new(FixedClock::new(T0))
}

/// Parses a document object, panicking on malformed test input.
pub fn doc(text: &str) -> Doc {
    json::parse_object(text).expect("test document should parse")
}

/// Returns the last update of a guide in milliseconds.
pub fn guide_stamp(guide: &Guide) -> Option<i64> {
    guide.last_update().map(Timestamp::timestamp_millis)
}

/// Returns the last update of a content descriptor in milliseconds.
pub fn content_stamp(content: &Content) -> Option<i64> {
    content.last_update().map(Timestamp::timestamp_millis)
}

/// Builds a guide exercising every field and step variant.
pub fn sample_guide(clock: Arc<FixedClock>) -> Guide {
    let mut guide = Guide::with_clock("g1", clock);
    guide.set_content_id("de-DE", "c-de");
    guide.set_content_id("en-GB", "c-en");
    guide.grant_user_access("alice");
    guide.grant_group_access("staff");
    guide.add_custom_tag("vip");
    guide.add_typed_tag("safety");

    let mut intro = Step::action("s1");
    intro.set_content_id("de-DE", "c-s1");
    intro.set_next("s2");
    guide.add_step(intro);

    let mut choice = Step::branch("s2");
    choice.set_content_id("de-DE", "c-q");
    let mut yes = RequestOption::new();
    yes.set_content_id("de-DE", "c-yes");
    yes.set_next("s3");
    let mut no = RequestOption::new();
    no.set_next("s4");
    choice.add_option(yes).expect("branch accepts options");
    choice.add_option(no).expect("branch accepts options");
    guide.add_step(choice);

    guide.add_step(Step::chapter("s3", "g2"));
    guide.add_step(Step::milestone("s4"));
    guide
}

/// Builds a content descriptor exercising every field.
pub fn sample_content(clock: Arc<FixedClock>) -> Content {
    let mut content = Content::with_clock("c1", clock);
    content.set_language_id("de-DE");
    content.set_title("Einführung");
    content.set_description("Erste Schritte");
    content.set_media(Media::new("image/png", "intro.png"));
    content.add_warning(IconizedMessage::with_icon("Heiß", "fire"));
    content.add_hint(IconizedMessage::new("Handschuhe tragen"));
    content
}
