//! Command implementations for flaky-check.
//!
//! This module provides the dispatcher that routes CLI commands to their
//! implementations.

mod check;

use crate::cli::Command;
use crate::error::Result;
use crate::schema::{Schema, SchemaKind};

/// Dispatch a command to its implementation.
pub fn dispatch(command: Command) -> Result<()> {
    match command {
        Command::Check(args) => check::cmd_check(args),
        Command::Schemas => cmd_schemas(),
    }
}

fn cmd_schemas() -> Result<()> {
    print!("{}", render_schemas());
    Ok(())
}

fn render_schemas() -> String {
    let mut out = String::new();
    for kind in SchemaKind::ALL {
        let schema = Schema::for_kind(kind);
        out.push_str(&format!("{} ({})\n", kind.default_file_name(), kind));
        for (i, column) in schema.columns.iter().enumerate() {
            out.push_str(&format!("  {:>2}. {}\n", i + 1, column));
        }
        if let Some(key) = schema.sort_key {
            let names: Vec<&str> = key.fields.iter().map(|&f| schema.columns[f]).collect();
            out.push_str(&format!("  sorted by: {}\n", names.join(", ")));
        }
    }
    out
}
