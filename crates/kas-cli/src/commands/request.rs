use std::path::Path;

use colored::Colorize;

use kas_resolve::RollRequest;

pub fn run(dir: &Path, table: &str, blind: bool, description: bool) -> Result<(), String> {
    let library = super::load_library(dir)?;
    let found = super::find_table(&library, table)?;

    let mut request = if blind {
        RollRequest::masked(found.id)
    } else {
        RollRequest::open(found)
    };
    if description {
        request = request.with_description(found);
    }

    println!();
    println!("  Roll request: {}", request.name.bold());
    println!("  Table ID:  {}", request.table_id);
    println!("  Thumbnail: {}", request.thumbnail);
    if request.blind {
        println!("  The roll will be blind.");
    }
    if let Some(desc) = &request.description {
        println!();
        println!("  {desc}");
    }

    Ok(())
}
