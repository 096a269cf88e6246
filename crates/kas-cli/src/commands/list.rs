use std::path::Path;

use comfy_table::{ContentArrangement, Table};

pub fn run(dir: &Path) -> Result<(), String> {
    let library = super::load_library(dir)?;

    if library.table_count() == 0 {
        println!("  No tables found.");
        return Ok(());
    }

    let mut tables: Vec<_> = library.all_tables().collect();
    tables.sort_by(|a, b| a.name.cmp(&b.name));

    let mut out = Table::new();
    out.set_content_arrangement(ContentArrangement::Dynamic);
    out.set_header(vec!["Name", "Formula", "Entries"]);
    for table in &tables {
        let formula = table
            .roll_formula()
            .map_or_else(|| "—".to_string(), |f| f.to_string());
        out.add_row(vec![
            table.name.clone(),
            formula,
            table.entries.len().to_string(),
        ]);
    }
    println!("{out}");
    println!();
    println!("  {} tables", library.table_count());

    let mut packs: Vec<_> = library.all_packs().collect();
    packs.sort_by(|a, b| a.0.0.cmp(&b.0.0));
    for (id, pack) in packs {
        println!("  pack {} ({} documents)", id, pack.len());
    }

    Ok(())
}
