//! Load a unit and print a few nodes from it.
//!
//! ```text
//! cargo run --example print_nodes [path/to/file.y]
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use liby::{Context, DiagnosticStyle};

const QUERIES: [&str; 4] = [
    "settings graphics",
    "settings graphics refresh",
    "settings graphics vsync",
    "settings difficulty",
];

fn main() -> ExitCode {
    let path = std::env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("demos/settings.y"));

    let mut ctx = Context::new();
    let settings = match ctx.load(&path) {
        Ok(id) => id,
        Err(err) => {
            eprintln!("{}", err.render(&DiagnosticStyle::colored()));
            return ExitCode::FAILURE;
        }
    };

    let mutable = ctx
        .node(settings)
        .and_then(|node| node.has_note("mutable"))
        .is_some();
    println!("settings mutable: {mutable}");

    for query in QUERIES {
        match ctx.find(query) {
            Ok(Some(node)) => println!("{node}"),
            Ok(None) => println!("null"),
            Err(err) => {
                eprintln!("{query}: {err}");
                return ExitCode::FAILURE;
            }
        }
    }

    ctx.delete();
    ExitCode::SUCCESS
}
