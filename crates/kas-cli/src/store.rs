//! Port implementations backing the CLI.

use std::sync::Mutex;

use async_trait::async_trait;
use colored::Colorize;
use rand::SeedableRng;
use rand::rngs::StdRng;

use kas_core::{Document, Formula, PackId, RollOutcome, RollTable, TableId, TableLibrary};
use kas_resolve::{DiceRoller, DocumentStore, Messenger, RollAnnouncement};

/// Document store over the in-memory table library.
pub struct LibraryStore {
    library: TableLibrary,
}

impl LibraryStore {
    /// Wrap a loaded library.
    pub fn new(library: TableLibrary) -> Self {
        Self { library }
    }
}

#[async_trait]
impl DocumentStore for LibraryStore {
    async fn table(&self, id: TableId) -> Option<RollTable> {
        self.library.table(id).cloned()
    }

    async fn table_by_name(&self, name: &str) -> Option<RollTable> {
        self.library.table_by_name(name).cloned()
    }

    async fn pack_document(&self, pack: &PackId, id: TableId) -> Option<Document> {
        self.library.pack(pack)?.document(id).cloned()
    }
}

/// Roller over a seedable RNG that prints each announcement.
pub struct SeededRoller {
    rng: Mutex<StdRng>,
}

impl SeededRoller {
    /// Create a roller; an explicit seed makes rolls reproducible.
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self {
            rng: Mutex::new(rng),
        }
    }
}

#[async_trait]
impl DiceRoller for SeededRoller {
    async fn roll(&self, formula: &Formula) -> RollOutcome {
        let mut rng = self
            .rng
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        formula.roll(&mut rng)
    }

    async fn publish(&self, announcement: &RollAnnouncement) {
        println!(
            "  {} {} on {} {}",
            "rolled".dimmed(),
            announcement.outcome,
            announcement.table_name.bold(),
            format!("(depth {})", announcement.depth).dimmed(),
        );
    }
}

/// Messenger that prints yellow warnings to stderr.
pub struct ConsoleMessenger;

impl Messenger for ConsoleMessenger {
    fn warn(&self, message: &str) {
        eprintln!("{} {message}", "warning:".yellow().bold());
    }
}
