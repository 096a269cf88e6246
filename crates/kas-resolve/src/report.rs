//! Roll announcements, draw cards, and roll requests.
//!
//! These are the data shapes presentation logic consumes. No markup is
//! produced here; rendering belongs to the frontend.

use serde::{Deserialize, Serialize};

use kas_core::{EntryKind, Formula, RollOutcome, RollTable, TableEntry, TableId};

/// Thumbnail shown when a request hides which table is being rolled.
pub const MASKED_THUMBNAIL: &str = "icons/svg/d20-grey.svg";

/// Name shown when a request hides which table is being rolled.
pub const MASKED_NAME: &str = "???";

/// A roll-log record, published once per table visited.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RollAnnouncement {
    /// Name of the table that was rolled.
    pub table_name: String,
    /// The formula that was rolled.
    pub formula: Formula,
    /// The roll outcome.
    pub outcome: RollOutcome,
    /// Recursion depth of the table (0 for the root).
    pub depth: usize,
}

/// One displayed outcome on a draw card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Outcome {
    /// Display icon, absent for unresolved references.
    pub icon: Option<String>,
    /// Outcome text, or the reference locator for pass-throughs.
    pub text: String,
}

impl From<&TableEntry> for Outcome {
    fn from(entry: &TableEntry) -> Self {
        match &entry.kind {
            EntryKind::Terminal { icon, .. } => Self {
                icon: Some(icon.clone()),
                text: entry.display_text(),
            },
            EntryKind::Reference(_) => Self {
                icon: None,
                text: entry.display_text(),
            },
        }
    }
}

/// Presentation-ready summary of one completed draw.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DrawCard {
    /// Name of the rolled table.
    pub table_name: String,
    /// The table's thumbnail, if any.
    pub thumbnail: Option<String>,
    /// Whether the draw should only be shown to privileged viewers.
    pub blind: bool,
    /// The flattened outcomes, in draw order.
    pub outcomes: Vec<Outcome>,
}

impl DrawCard {
    /// Build a card from a table and its resolved entries.
    pub fn new(table: &RollTable, entries: &[TableEntry]) -> Self {
        Self {
            table_name: table.name.clone(),
            thumbnail: table.thumbnail.clone(),
            blind: false,
            outcomes: entries.iter().map(Outcome::from).collect(),
        }
    }

    /// Mark the card as visible to privileged viewers only.
    pub fn blind(mut self) -> Self {
        self.blind = true;
        self
    }
}

/// A "please roll this table" card, sent before anyone has rolled.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RollRequest {
    /// The table to roll.
    pub table_id: TableId,
    /// Displayed table name (masked for blind requests).
    pub name: String,
    /// Displayed thumbnail (masked for blind requests).
    pub thumbnail: String,
    /// Whether the eventual roll should be blind.
    pub blind: bool,
    /// Table description, when the requester chose to include it.
    pub description: Option<String>,
}

impl RollRequest {
    /// A request that shows which table is being rolled.
    pub fn open(table: &RollTable) -> Self {
        Self {
            table_id: table.id,
            name: table.name.clone(),
            thumbnail: table
                .thumbnail
                .clone()
                .unwrap_or_else(|| MASKED_THUMBNAIL.to_string()),
            blind: false,
            description: None,
        }
    }

    /// A request that hides which table is being rolled.
    pub fn masked(id: TableId) -> Self {
        Self {
            table_id: id,
            name: MASKED_NAME.to_string(),
            thumbnail: MASKED_THUMBNAIL.to_string(),
            blind: true,
            description: None,
        }
    }

    /// Attach the table's description. Works for masked requests too —
    /// the description may be shown even when the table name is not.
    pub fn with_description(mut self, table: &RollTable) -> Self {
        self.description = table.description.clone();
        self
    }
}
