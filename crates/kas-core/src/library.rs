//! The table library: local namespace plus compendium packs.
//!
//! The library is the in-memory document store. Local tables live in a
//! flat namespace indexed by ID and case-insensitive name; compendium
//! packs are separately-addressed collections that may hold documents
//! other than tables.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::entry::{PackId, TableRef};
use crate::error::{KasError, KasResult};
use crate::table::{RollTable, TableId};

/// A document inside a compendium pack.
///
/// Packs are not table-only: a reference into a pack must be verified to
/// actually point at a table before it can be expanded.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Document {
    /// A roll table.
    Table(RollTable),
    /// Any other document kind (actor, item, scene, ...).
    Other {
        /// Document identifier.
        id: TableId,
        /// Document name.
        name: String,
    },
}

impl Document {
    /// The document's identifier.
    pub fn id(&self) -> TableId {
        match self {
            Self::Table(t) => t.id,
            Self::Other { id, .. } => *id,
        }
    }
}

/// A compendium pack: a named collection of documents.
#[derive(Debug, Clone, Default)]
pub struct Pack {
    documents: HashMap<TableId, Document>,
}

impl Pack {
    /// Create an empty pack.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a document to the pack.
    pub fn add(&mut self, doc: Document) {
        self.documents.insert(doc.id(), doc);
    }

    /// Get a document by ID.
    pub fn document(&self, id: TableId) -> Option<&Document> {
        self.documents.get(&id)
    }

    /// Number of documents in the pack.
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    /// Whether the pack holds no documents.
    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}

/// The full document store: local tables and compendium packs.
#[derive(Debug, Clone, Default)]
pub struct TableLibrary {
    tables: HashMap<TableId, RollTable>,
    by_name_lower: HashMap<String, TableId>,
    packs: HashMap<PackId, Pack>,
}

impl TableLibrary {
    /// Create an empty library.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a table to the local namespace. Returns the table's ID.
    pub fn add_table(&mut self, table: RollTable) -> KasResult<TableId> {
        let name_lower = table.name.to_lowercase();
        if self.by_name_lower.contains_key(&name_lower) {
            return Err(KasError::DuplicateName(table.name.clone()));
        }
        let id = table.id;
        self.by_name_lower.insert(name_lower, id);
        self.tables.insert(id, table);
        Ok(id)
    }

    /// Get a local table by ID.
    pub fn table(&self, id: TableId) -> Option<&RollTable> {
        self.tables.get(&id)
    }

    /// Find a local table by name (case-insensitive).
    pub fn table_by_name(&self, name: &str) -> Option<&RollTable> {
        self.by_name_lower
            .get(&name.to_lowercase())
            .and_then(|id| self.tables.get(id))
    }

    /// Register a compendium pack under the given ID.
    pub fn add_pack(&mut self, id: PackId, pack: Pack) {
        self.packs.insert(id, pack);
    }

    /// Get a compendium pack by ID.
    pub fn pack(&self, id: &PackId) -> Option<&Pack> {
        self.packs.get(id)
    }

    /// All local tables, in no particular order.
    pub fn all_tables(&self) -> impl Iterator<Item = &RollTable> {
        self.tables.values()
    }

    /// All pack IDs with their packs.
    pub fn all_packs(&self) -> impl Iterator<Item = (&PackId, &Pack)> {
        self.packs.iter()
    }

    /// Number of local tables.
    pub fn table_count(&self) -> usize {
        self.tables.len()
    }

    /// Number of compendium packs.
    pub fn pack_count(&self) -> usize {
        self.packs.len()
    }

    /// Resolve a reference to the table it points at.
    ///
    /// Errors on unknown packs, missing documents, and documents that are
    /// not tables. Callers that want pass-through semantics instead of
    /// errors should treat any `Err` as a broken reference.
    pub fn resolve_ref(&self, reference: &TableRef) -> KasResult<&RollTable> {
        match reference {
            TableRef::Local { id } => self
                .table(*id)
                .ok_or_else(|| KasError::TableNotFound(id.to_string())),
            TableRef::Compendium { pack, id } => {
                let found = self
                    .pack(pack)
                    .ok_or_else(|| KasError::UnknownPack(pack.to_string()))?;
                match found.document(*id) {
                    Some(Document::Table(table)) => Ok(table),
                    _ => Err(KasError::TableNotFound(format!("{pack}@{id}"))),
                }
            }
        }
    }

    /// Load a library from a directory.
    ///
    /// Every `*.json` file directly in `dir` holds a list of local
    /// tables. Every `*.json` file under `dir/packs/` holds a list of
    /// documents forming one compendium pack named by the file stem.
    pub fn load_dir(dir: &Path) -> KasResult<Self> {
        let mut library = Self::new();

        for path in json_files(dir)? {
            let text = fs::read_to_string(&path)?;
            let tables: Vec<RollTable> = serde_json::from_str(&text)?;
            for table in tables {
                library.add_table(table)?;
            }
        }

        let packs_dir = dir.join("packs");
        if packs_dir.is_dir() {
            for path in json_files(&packs_dir)? {
                let text = fs::read_to_string(&path)?;
                let documents: Vec<Document> = serde_json::from_str(&text)?;
                let stem = path
                    .file_stem()
                    .map(|s| s.to_string_lossy().into_owned())
                    .unwrap_or_default();
                let mut pack = Pack::new();
                for doc in documents {
                    pack.add(doc);
                }
                library.add_pack(PackId::new(stem), pack);
            }
        }

        Ok(library)
    }
}

/// All `*.json` files directly in `dir`, sorted for stable load order.
fn json_files(dir: &Path) -> KasResult<Vec<std::path::PathBuf>> {
    let mut files: Vec<_> = fs::read_dir(dir)?
        .filter_map(Result::ok)
        .map(|e| e.path())
        .filter(|p| p.is_file() && p.extension().is_some_and(|ext| ext == "json"))
        .collect();
    files.sort();
    Ok(files)
}
