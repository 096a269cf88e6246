//! Result entries: terminal outcomes and references to other tables.
//!
//! Entry classification is a closed tagged variant resolved at load time.
//! A reference either points into the local table namespace or into a
//! separately-addressed compendium pack.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::table::{RollRange, TableId};

/// Identifier of a compendium pack (e.g. `"world.treasure"`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PackId(pub String);

impl PackId {
    /// Create a pack ID from a string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

impl fmt::Display for PackId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A reference from one table to another.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TableRef {
    /// A table in the same root namespace.
    Local {
        /// Identifier of the referenced table.
        id: TableId,
    },
    /// A document inside an external compendium pack.
    Compendium {
        /// The pack holding the document.
        pack: PackId,
        /// Identifier of the referenced document.
        id: TableId,
    },
}

impl TableRef {
    /// The referenced document ID, regardless of namespace.
    pub fn id(&self) -> TableId {
        match self {
            Self::Local { id } | Self::Compendium { id, .. } => *id,
        }
    }
}

impl fmt::Display for TableRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Local { id } => write!(f, "@{id}"),
            Self::Compendium { pack, id } => write!(f, "{pack}@{id}"),
        }
    }
}

/// What a result entry produces when drawn.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntryKind {
    /// A terminal outcome with display icon and text.
    Terminal {
        /// Display icon (path).
        icon: String,
        /// Outcome text.
        text: String,
    },
    /// A reference to another table, expanded recursively on draw.
    Reference(TableRef),
}

impl EntryKind {
    /// Shorthand for a terminal entry.
    pub fn terminal(icon: impl Into<String>, text: impl Into<String>) -> Self {
        Self::Terminal {
            icon: icon.into(),
            text: text.into(),
        }
    }

    /// Shorthand for a local table reference.
    pub fn local_ref(id: TableId) -> Self {
        Self::Reference(TableRef::Local { id })
    }

    /// Shorthand for a compendium reference.
    pub fn pack_ref(pack: PackId, id: TableId) -> Self {
        Self::Reference(TableRef::Compendium { pack, id })
    }
}

/// One weighted slot in a roll table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableEntry {
    /// The range of totals that land on this entry.
    pub range: RollRange,
    /// What the entry produces.
    pub kind: EntryKind,
}

impl TableEntry {
    /// Create an entry covering the given range.
    pub fn new(range: RollRange, kind: EntryKind) -> Self {
        Self { range, kind }
    }

    /// The display text of this entry: terminal text, or the reference
    /// locator for entries that were passed through unresolved.
    pub fn display_text(&self) -> String {
        match &self.kind {
            EntryKind::Terminal { text, .. } => text.clone(),
            EntryKind::Reference(r) => r.to_string(),
        }
    }
}
