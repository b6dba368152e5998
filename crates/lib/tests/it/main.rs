/*! Integration tests for guidedoc.
 *
 * This test suite is organized as a single integration test binary
 * following the pattern described by matklad in
 * https://matklad.github.io/2021/02/27/delete-cargo-integration-tests.html
 *
 * The module structure mirrors the main library structure:
 * - doc: Tests for the document tree and the JSON codec
 * - validate: Tests for shape validation of loaded documents
 * - values: Tests for the canonical string forms of AccessEntry, Tag and Timestamp
 * - step: Tests for step variants and their documents
 * - guide: Tests for the Guide aggregate, its scenarios and timestamp cascading
 * - content: Tests for the Content aggregate
 * - io: Tests for the text and file helpers
 */

use tracing_subscriber::EnvFilter;

#[ctor::ctor]
fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive("guidedoc=info".parse().unwrap()),
        )
        .with_test_writer()
        .try_init();
}

mod content;
mod doc;
mod guide;
mod helpers;
mod io;
mod step;
mod validate;
mod values;
