use std::path::Path;

use colored::Colorize;
use comfy_table::{ContentArrangement, Table};

use kas_core::EntryKind;

pub fn run(dir: &Path, table: &str) -> Result<(), String> {
    let library = super::load_library(dir)?;
    let found = super::find_table(&library, table)?;

    println!();
    println!("  {} ({})", found.name.bold(), found.id);
    if let Some(formula) = found.roll_formula() {
        println!("  Formula: {formula}");
    } else {
        println!("  Formula: {}", "none".yellow());
    }
    if let Some(desc) = &found.description {
        println!();
        println!("  {desc}");
    }

    if found.entries.is_empty() {
        println!();
        println!("  No entries.");
        return Ok(());
    }

    println!();
    let mut out = Table::new();
    out.set_content_arrangement(ContentArrangement::Dynamic);
    out.set_header(vec!["Range", "Kind", "Content"]);
    for entry in &found.entries {
        let kind = match &entry.kind {
            EntryKind::Terminal { .. } => "text",
            EntryKind::Reference(_) => "table",
        };
        out.add_row(vec![
            entry.range.to_string(),
            kind.to_string(),
            entry.display_text(),
        ]);
    }
    println!("{out}");

    Ok(())
}
