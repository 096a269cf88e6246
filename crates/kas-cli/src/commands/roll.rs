use std::path::Path;
use std::sync::Arc;

use comfy_table::{ContentArrangement, Table};

use kas_resolve::{DrawCard, Resolver};

use crate::store::{ConsoleMessenger, LibraryStore, SeededRoller};

pub async fn run(dir: &Path, table: &str, seed: Option<u64>, blind: bool) -> Result<(), String> {
    let library = super::load_library(dir)?;
    let root = super::find_table(&library, table)?.clone();

    let resolver = Resolver::new(
        Arc::new(LibraryStore::new(library)),
        Arc::new(SeededRoller::new(seed)),
        Arc::new(ConsoleMessenger),
    );

    let entries = resolver.resolve_table(&root).await;
    let mut card = DrawCard::new(&root, &entries);
    if blind {
        card = card.blind();
    }

    if card.outcomes.is_empty() {
        println!("  No outcomes.");
        return Ok(());
    }

    println!();
    let mut out = Table::new();
    out.set_content_arrangement(ContentArrangement::Dynamic);
    out.set_header(vec!["Icon", "Outcome"]);
    for outcome in &card.outcomes {
        out.add_row(vec![
            outcome.icon.as_deref().unwrap_or("—"),
            outcome.text.as_str(),
        ]);
    }
    println!("{out}");
    println!();
    println!(
        "  {} outcome{} from {}",
        card.outcomes.len(),
        if card.outcomes.len() == 1 { "" } else { "s" },
        card.table_name,
    );
    if card.blind {
        println!("  Blind draw: show to privileged viewers only.");
    }

    Ok(())
}
