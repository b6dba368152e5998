//! Check command - loads and validates a document.

use crate::cli::DocArgs;
use crate::document::{Loaded, load};
use crate::output::OutputFormat;

/// Run the check command
///
/// Exits with status 1 when the document is malformed or invalid.
pub fn run(args: &DocArgs, format: OutputFormat) -> Result<(), Box<dyn std::error::Error>> {
    match load(&args.file, args.kind) {
        Ok(loaded) => {
            let detail = match &loaded {
                Loaded::Guide(guide) => format!("{} steps", guide.steps().len()),
                Loaded::Content(content) => content.language_id().unwrap_or("-").to_string(),
            };
            match format {
                OutputFormat::Human => {
                    println!("ok: {} {} ({detail})", loaded.kind_name(), loaded.id());
                }
                OutputFormat::Json => {
                    let value = serde_json::json!({
                        "valid": true,
                        "kind": loaded.kind_name(),
                        "id": loaded.id(),
                    });
                    println!("{}", serde_json::to_string(&value)?);
                }
            }
            Ok(())
        }
        Err(e) => {
            match format {
                OutputFormat::Human => eprintln!("invalid: {}: {e}", args.file.display()),
                OutputFormat::Json => {
                    let value = serde_json::json!({
                        "valid": false,
                        "error": e.to_string(),
                    });
                    println!("{}", serde_json::to_string(&value)?);
                }
            }
            std::process::exit(1);
        }
    }
}
