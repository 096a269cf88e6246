//! Port traits for the external collaborators.
//!
//! The resolver never owns documents, randomness, or user messaging — it
//! is handed these as injected trait objects, constructed once at process
//! start and passed by reference thereafter.

use async_trait::async_trait;

use kas_core::{Document, Formula, PackId, RollOutcome, RollTable, TableId};

use crate::report::RollAnnouncement;

/// Read access to the document store owning tables and compendium packs.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Get a local table by ID.
    async fn table(&self, id: TableId) -> Option<RollTable>;

    /// Find a local table by name.
    async fn table_by_name(&self, name: &str) -> Option<RollTable>;

    /// Fetch a document from a compendium pack. The document may or may
    /// not be a table.
    async fn pack_document(&self, pack: &PackId, id: TableId) -> Option<Document>;
}

/// Random rolling plus the roll-log side channel.
#[async_trait]
pub trait DiceRoller: Send + Sync {
    /// Perform one weighted roll of the formula.
    async fn roll(&self, formula: &Formula) -> RollOutcome;

    /// Announce a roll to other participants. Called once per table
    /// visited, sub-tables included.
    async fn publish(&self, announcement: &RollAnnouncement);
}

/// User-facing messaging for non-fatal branch aborts.
pub trait Messenger: Send + Sync {
    /// Surface a warning to the invoking user.
    fn warn(&self, message: &str);
}
