//! Ancestor-chain visitation tracking.

use std::collections::HashSet;

use kas_core::TableId;

/// The set of tables on the current ancestor chain.
///
/// Branching into a sub-table copies the set, so sibling branches never
/// see each other's visitation marks — only strict ancestors count as
/// cycles.
#[derive(Debug, Clone, Default)]
pub struct Visited {
    seen: HashSet<TableId>,
}

impl Visited {
    /// An empty set, for the root of a resolution.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the table is already on the ancestor chain.
    pub fn contains(&self, id: TableId) -> bool {
        self.seen.contains(&id)
    }

    /// A copy of this set with the given table marked.
    pub fn with(&self, id: TableId) -> Self {
        let mut seen = self.seen.clone();
        seen.insert(id);
        Self { seen }
    }

    /// Number of tables on the chain.
    pub fn len(&self) -> usize {
        self.seen.len()
    }

    /// Whether the chain is empty.
    pub fn is_empty(&self) -> bool {
        self.seen.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn with_does_not_mutate_the_original() {
        let a = TableId::new();
        let b = TableId::new();

        let root = Visited::new();
        let marked = root.with(a);

        assert!(root.is_empty());
        assert!(marked.contains(a));
        assert!(!marked.contains(b));

        // Two branches from the same parent stay independent.
        let left = marked.with(b);
        assert!(!marked.contains(b));
        assert_eq!(left.len(), 2);
        assert_eq!(marked.len(), 1);
    }
}
