//! Show command - prints a summary of a guide or content document.

use guidedoc::{Content, Guide, Step, StepKind};

use crate::cli::DocArgs;
use crate::document::{Loaded, load};
use crate::output::{OutputFormat, join_or_dash, print_field, print_table};

/// Run the show command
pub fn run(args: &DocArgs, format: OutputFormat) -> Result<(), Box<dyn std::error::Error>> {
    match load(&args.file, args.kind)? {
        Loaded::Guide(guide) => show_guide(&guide, format),
        Loaded::Content(content) => show_content(&content, format),
    }
}

fn last_update_text(stamp: Option<&guidedoc::Timestamp>) -> String {
    stamp.map_or_else(|| "-".to_string(), ToString::to_string)
}

/// Variant-specific column of the step table.
fn step_detail(step: &Step) -> String {
    match step.kind() {
        StepKind::Action | StepKind::Milestone => String::new(),
        StepKind::Chapter { target } => format!("-> {target}"),
        StepKind::Branch(request) => {
            let targets: Vec<&str> = request
                .options()
                .iter()
                .map(|option| option.next().unwrap_or("?"))
                .collect();
            format!("{} options [{}]", targets.len(), targets.join(", "))
        }
    }
}

fn show_guide(guide: &Guide, format: OutputFormat) -> Result<(), Box<dyn std::error::Error>> {
    match format {
        OutputFormat::Human => {
            print_field("Guide", guide.id());
            print_field("Last update", last_update_text(guide.last_update()));
            print_field(
                "Languages",
                join_or_dash(guide.content_ids().iter().map(|(l, c)| format!("{l}={c}"))),
            );
            print_field(
                "Access",
                join_or_dash(guide.access_entries().iter().map(ToString::to_string)),
            );
            print_field("Tags", join_or_dash(guide.tags().iter().map(ToString::to_string)));
            println!();

            if guide.steps().is_empty() {
                println!("No steps.");
                return Ok(());
            }
            let rows: Vec<Vec<String>> = guide
                .steps()
                .iter()
                .enumerate()
                .map(|(index, step)| {
                    vec![
                        index.to_string(),
                        step.id().to_string(),
                        step.step_type().to_string(),
                        step.next().unwrap_or("-").to_string(),
                        step_detail(step),
                    ]
                })
                .collect();
            print_table(&["#", "STEP", "TYPE", "NEXT", "DETAIL"], &rows);
        }
        OutputFormat::Json => {
            let steps: Vec<serde_json::Value> = guide
                .steps()
                .iter()
                .map(|step| {
                    serde_json::json!({
                        "id": step.id(),
                        "type": step.step_type().as_str(),
                        "next": step.next(),
                        "target": step.target(),
                        "options": step.user_request().map(|r| r.options().len()),
                    })
                })
                .collect();
            let content: serde_json::Map<String, serde_json::Value> = guide
                .content_ids()
                .iter()
                .map(|(language, id)| (language.clone(), id.as_str().into()))
                .collect();
            let value = serde_json::json!({
                "kind": "guide",
                "id": guide.id(),
                "lastUpdate": guide.last_update(),
                "content": content,
                "access": guide.access_entries(),
                "tags": guide.tags(),
                "steps": steps,
            });
            println!("{}", serde_json::to_string(&value)?);
        }
    }
    Ok(())
}

fn show_content(content: &Content, format: OutputFormat) -> Result<(), Box<dyn std::error::Error>> {
    match format {
        OutputFormat::Human => {
            print_field("Content", content.id());
            print_field("Last update", last_update_text(content.last_update()));
            print_field("Language", content.language_id().unwrap_or("-"));
            print_field("Title", content.title().unwrap_or("-"));
            print_field("Description", content.description().unwrap_or("-"));
            let media = content
                .media()
                .map_or_else(|| "-".to_string(), |m| format!("{} ({})", m.path(), m.mime_type()));
            print_field("Media", media);

            let rows: Vec<Vec<String>> = content
                .warnings()
                .iter()
                .map(|m| ("warning", m))
                .chain(content.hints().iter().map(|m| ("hint", m)))
                .map(|(kind, message)| {
                    vec![
                        kind.to_string(),
                        message.icon().unwrap_or("-").to_string(),
                        message.text().to_string(),
                    ]
                })
                .collect();
            if !rows.is_empty() {
                println!();
                print_table(&["KIND", "ICON", "TEXT"], &rows);
            }
        }
        OutputFormat::Json => {
            let messages = |list: &[guidedoc::IconizedMessage]| -> Vec<serde_json::Value> {
                list.iter()
                    .map(|m| serde_json::json!({ "text": m.text(), "icon": m.icon() }))
                    .collect()
            };
            let value = serde_json::json!({
                "kind": "content",
                "id": content.id(),
                "lastUpdate": content.last_update(),
                "languageId": content.language_id(),
                "title": content.title(),
                "description": content.description(),
                "media": content.media().map(|m| serde_json::json!({
                    "mimeType": m.mime_type(),
                    "path": m.path(),
                })),
                "warnings": messages(content.warnings()),
                "hints": messages(content.hints()),
            });
            println!("{}", serde_json::to_string(&value)?);
        }
    }
    Ok(())
}
