//! New command - prints a fresh skeleton document.

use guidedoc::{Content, Guide, io};

use crate::cli::{NewArgs, NewKind};

/// Run the new command
pub fn run(args: &NewArgs, pretty: bool) {
    let text = match args.kind {
        NewKind::Guide => io::export_guide(&Guide::new(&args.id), pretty),
        NewKind::Content => io::export_content(&Content::new(&args.id), pretty),
    };
    println!("{text}");
}
