//! The recursive resolver.
//!
//! One weighted draw is performed per table visited. Entries that
//! reference other tables are expanded depth-first; expansions replace
//! their originating reference in place, so the output is a flat ordered
//! sequence of terminal (or unresolvable) entries.
//!
//! Cycle and depth violations are branch-local: the offending branch
//! yields nothing and a warning is surfaced, but sibling branches and the
//! top-level request continue unaffected.

use std::sync::Arc;

use futures::future::{BoxFuture, join_all};

use kas_core::{Document, EntryKind, KasError, KasResult, RollTable, TableEntry, TableId, TableRef};

use crate::ports::{DiceRoller, DocumentStore, Messenger};
use crate::report::RollAnnouncement;
use crate::visited::Visited;

/// Maximum recursion depth from the root table.
pub const MAX_DEPTH: usize = 10;

/// Resolves a roll table into its flattened leaf outcomes.
///
/// Constructed once with its collaborators and shared thereafter. Holds
/// no mutable state: each resolution carries its own ancestor set.
pub struct Resolver {
    store: Arc<dyn DocumentStore>,
    roller: Arc<dyn DiceRoller>,
    messenger: Arc<dyn Messenger>,
}

impl Resolver {
    /// Create a resolver over the given collaborators.
    pub fn new(
        store: Arc<dyn DocumentStore>,
        roller: Arc<dyn DiceRoller>,
        messenger: Arc<dyn Messenger>,
    ) -> Self {
        Self {
            store,
            roller,
            messenger,
        }
    }

    /// Resolve a table into its flattened leaf outcomes.
    ///
    /// Never fails: cycles, excessive depth, empty draws, and broken
    /// references all degrade to fewer results rather than errors.
    pub async fn resolve_table(&self, table: &RollTable) -> Vec<TableEntry> {
        self.resolve_inner(table.clone(), 0, Visited::new()).await
    }

    /// Look up a local table by ID and resolve it.
    pub async fn resolve_by_id(&self, id: TableId) -> KasResult<Vec<TableEntry>> {
        let table = self
            .store
            .table(id)
            .await
            .ok_or_else(|| KasError::TableNotFound(id.to_string()))?;
        Ok(self.resolve_table(&table).await)
    }

    /// Look up a local table by name and resolve it.
    pub async fn resolve_by_name(&self, name: &str) -> KasResult<Vec<TableEntry>> {
        let table = self
            .store
            .table_by_name(name)
            .await
            .ok_or_else(|| KasError::TableNotFound(name.to_string()))?;
        Ok(self.resolve_table(&table).await)
    }

    fn resolve_inner(
        &self,
        table: RollTable,
        depth: usize,
        visited: Visited,
    ) -> BoxFuture<'_, Vec<TableEntry>> {
        Box::pin(async move {
            if visited.contains(table.id) {
                self.messenger
                    .warn("You have a circular reference of tables referencing themselves.");
                return Vec::new();
            }
            if depth >= MAX_DEPTH {
                self.messenger
                    .warn("Too many nested roll tables. I think it is time to stop...");
                return Vec::new();
            }
            let visited = visited.with(table.id);

            let Some(formula) = table.roll_formula() else {
                // A table without a formula in either field cannot be
                // drawn from; the branch yields nothing.
                return Vec::new();
            };
            let outcome = self.roller.roll(&formula).await;
            self.roller
                .publish(&RollAnnouncement {
                    table_name: table.name.clone(),
                    formula,
                    outcome: outcome.clone(),
                    depth,
                })
                .await;

            let drawn: Vec<TableEntry> = table
                .entries_for(outcome.total)
                .into_iter()
                .cloned()
                .collect();
            if drawn.is_empty() {
                return Vec::new();
            }

            // Expand every drawn entry concurrently; join_all keeps the
            // original entry order regardless of completion order.
            let expansions = drawn.into_iter().map(|entry| {
                let visited = visited.clone();
                let reference = match &entry.kind {
                    EntryKind::Terminal { .. } => None,
                    EntryKind::Reference(reference) => Some(reference.clone()),
                };
                async move {
                    let Some(reference) = reference else {
                        return vec![entry];
                    };
                    match self.fetch_table(&reference).await {
                        Some(next) => self.resolve_inner(next, depth + 1, visited).await,
                        // Broken reference: pass through as if terminal.
                        None => vec![entry],
                    }
                }
            });
            join_all(expansions).await.into_iter().flatten().collect()
        })
    }

    /// Resolve a reference to an actual table, if it points at one.
    async fn fetch_table(&self, reference: &TableRef) -> Option<RollTable> {
        match reference {
            TableRef::Local { id } => self.store.table(*id).await,
            TableRef::Compendium { pack, id } => {
                match self.store.pack_document(pack, *id).await? {
                    Document::Table(table) => Some(table),
                    Document::Other { .. } => None,
                }
            }
        }
    }
}
