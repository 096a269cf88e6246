pub mod check;
pub mod list;
pub mod request;
pub mod roll;
pub mod show;

use std::path::Path;

use kas_core::{RollTable, TableLibrary};

/// Load the table library from a directory of JSON files.
fn load_library(dir: &Path) -> Result<TableLibrary, String> {
    TableLibrary::load_dir(dir).map_err(|e| e.to_string())
}

/// Find a local table by name, falling back to a full UUID.
fn find_table<'a>(library: &'a TableLibrary, table: &str) -> Result<&'a RollTable, String> {
    if let Some(found) = library.table_by_name(table) {
        return Ok(found);
    }
    if let Ok(uuid) = table.parse::<uuid::Uuid>() {
        if let Some(found) = library.table(kas_core::TableId(uuid)) {
            return Ok(found);
        }
    }
    Err(format!("table not found: {table}"))
}
