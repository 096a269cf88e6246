use std::collections::HashSet;
use std::path::Path;

use colored::Colorize;

use kas_core::{EntryKind, RollTable, TableId, TableLibrary};

pub fn run(dir: &Path) -> Result<(), String> {
    let library = super::load_library(dir)?;
    let mut problems: Vec<String> = Vec::new();

    let mut tables: Vec<&RollTable> = library.all_tables().collect();
    tables.sort_by(|a, b| a.name.cmp(&b.name));

    for table in tables {
        if table.roll_formula().is_none() {
            problems.push(format!(
                "\"{}\": no roll formula; the table can never be drawn from",
                table.name
            ));
        }
        if let Err(e) = table.validate() {
            problems.push(e.to_string());
        }
        for entry in &table.entries {
            if let EntryKind::Reference(reference) = &entry.kind {
                if let Err(e) = library.resolve_ref(reference) {
                    problems.push(format!("\"{}\": broken reference: {e}", table.name));
                }
            }
        }
        if reaches_itself(&library, table) {
            problems.push(format!(
                "\"{}\": reference cycle leads back to the table itself",
                table.name
            ));
        }
    }

    if problems.is_empty() {
        println!(
            "  All checks passed: {} tables, {} packs.",
            library.table_count(),
            library.pack_count()
        );
        Ok(())
    } else {
        for problem in &problems {
            eprintln!("{} {problem}", "problem:".yellow().bold());
        }
        Err(format!(
            "{} problem{} found",
            problems.len(),
            if problems.len() == 1 { "" } else { "s" },
        ))
    }
}

/// Whether any chain of references starting at `table` re-enters it.
fn reaches_itself(library: &TableLibrary, table: &RollTable) -> bool {
    fn visit(
        library: &TableLibrary,
        current: &RollTable,
        start: TableId,
        seen: &mut HashSet<TableId>,
    ) -> bool {
        for entry in &current.entries {
            if let EntryKind::Reference(reference) = &entry.kind {
                if let Ok(next) = library.resolve_ref(reference) {
                    if next.id == start {
                        return true;
                    }
                    if seen.insert(next.id) && visit(library, next, start, seen) {
                        return true;
                    }
                }
            }
        }
        false
    }
    visit(library, table, table.id, &mut HashSet::new())
}
