//! Fmt command - re-exports a document in canonical form.

use std::fs;

use guidedoc::doc::json;
use tracing::info;

use crate::cli::FmtArgs;
use crate::document::load;

/// Run the fmt command
pub fn run(args: &FmtArgs, pretty: bool) -> Result<(), Box<dyn std::error::Error>> {
    let loaded = load(&args.doc.file, args.doc.kind)?;
    let text = json::print_object(&loaded.to_document(), pretty);

    if args.write {
        fs::write(&args.doc.file, text)?;
        info!(path = %args.doc.file.display(), id = loaded.id(), "Rewrote document");
    } else {
        println!("{text}");
    }
    Ok(())
}
