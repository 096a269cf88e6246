//! Roll tables, identifiers, and ranges.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::dice::Formula;
use crate::entry::TableEntry;
use crate::error::{KasError, KasResult};

/// Unique identifier for a roll table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TableId(pub Uuid);

impl TableId {
    /// Generate a new random table ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for TableId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for TableId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", &self.0.to_string()[..8])
    }
}

/// An inclusive range on a formula's output space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RollRange {
    /// Lowest total that lands on this entry.
    pub low: i64,
    /// Highest total that lands on this entry.
    pub high: i64,
}

impl RollRange {
    /// A range covering `low..=high`.
    pub fn new(low: i64, high: i64) -> Self {
        Self { low, high }
    }

    /// A range covering a single total.
    pub fn exact(value: i64) -> Self {
        Self {
            low: value,
            high: value,
        }
    }

    /// Whether the given total lands in this range.
    pub fn contains(&self, total: i64) -> bool {
        (self.low..=self.high).contains(&total)
    }
}

impl fmt::Display for RollRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.low == self.high {
            write!(f, "{}", self.low)
        } else {
            write!(f, "{}-{}", self.low, self.high)
        }
    }
}

/// A weighted random-outcome table.
///
/// Entries occupy ranges on the output space of the roll formula. Tables
/// are owned by the document store; the resolver only reads them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RollTable {
    /// Unique identifier.
    #[serde(default)]
    pub id: TableId,
    /// Display name.
    pub name: String,
    /// Display thumbnail (icon path).
    #[serde(default)]
    pub thumbnail: Option<String>,
    /// Weight-generating dice formula.
    #[serde(default)]
    pub formula: Option<Formula>,
    /// Pre-v9 location of the formula, still present in older exports.
    #[serde(default)]
    pub legacy_formula: Option<Formula>,
    /// Optional free-text description.
    #[serde(default)]
    pub description: Option<String>,
    /// Weighted result entries.
    #[serde(default)]
    pub entries: Vec<TableEntry>,
}

impl RollTable {
    /// Create an empty table with a fresh ID.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: TableId::new(),
            name: name.into(),
            thumbnail: None,
            formula: None,
            legacy_formula: None,
            description: None,
            entries: Vec::new(),
        }
    }

    /// The formula to roll, preferring the primary field and falling back
    /// to the legacy one.
    pub fn roll_formula(&self) -> Option<Formula> {
        self.formula.or(self.legacy_formula)
    }

    /// All entries whose range contains the given total, in stored order.
    pub fn entries_for(&self, total: i64) -> Vec<&TableEntry> {
        self.entries
            .iter()
            .filter(|e| e.range.contains(total))
            .collect()
    }

    /// Check structural validity of the entry ranges: no inverted ranges,
    /// and every range reachable by the roll formula.
    pub fn validate(&self) -> KasResult<()> {
        for entry in &self.entries {
            if entry.range.low > entry.range.high {
                return Err(KasError::InvalidRange(format!(
                    "\"{}\": inverted range {}-{}",
                    self.name, entry.range.low, entry.range.high
                )));
            }
            if let Some(formula) = self.roll_formula() {
                if entry.range.high < formula.min() || entry.range.low > formula.max() {
                    return Err(KasError::InvalidRange(format!(
                        "\"{}\": range {} outside the output space of {formula}",
                        self.name, entry.range
                    )));
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entry::EntryKind;

    fn terminal(low: i64, high: i64, text: &str) -> TableEntry {
        TableEntry {
            range: RollRange::new(low, high),
            kind: EntryKind::terminal("icons/d20.svg", text),
        }
    }

    #[test]
    fn range_contains() {
        let r = RollRange::new(3, 5);
        assert!(!r.contains(2));
        assert!(r.contains(3));
        assert!(r.contains(5));
        assert!(!r.contains(6));
        assert!(RollRange::exact(7).contains(7));
    }

    #[test]
    fn range_display() {
        assert_eq!(RollRange::new(1, 4).to_string(), "1-4");
        assert_eq!(RollRange::exact(5).to_string(), "5");
    }

    #[test]
    fn entries_for_picks_matching_ranges() {
        let mut table = RollTable::new("Loot");
        table.entries = vec![
            terminal(1, 2, "copper"),
            terminal(3, 4, "silver"),
            terminal(4, 6, "gold"),
        ];
        assert!(table.entries_for(7).is_empty());
        assert_eq!(table.entries_for(1).len(), 1);
        // Overlapping ranges both land, in stored order.
        let hits = table.entries_for(4);
        assert_eq!(hits.len(), 2);
    }

    #[test]
    fn roll_formula_falls_back_to_legacy() {
        let mut table = RollTable::new("Old Export");
        assert!(table.roll_formula().is_none());
        table.legacy_formula = Some(Formula::d(6));
        assert_eq!(table.roll_formula(), Some(Formula::d(6)));
        table.formula = Some(Formula::d(20));
        assert_eq!(table.roll_formula(), Some(Formula::d(20)));
    }

    #[test]
    fn table_id_short_display() {
        let id = TableId::new();
        assert_eq!(id.to_string().len(), 8);
    }

    #[test]
    fn validate_accepts_well_formed_tables() {
        let mut table = RollTable::new("Loot");
        table.formula = Some(Formula::d(6));
        table.entries = vec![terminal(1, 3, "copper"), terminal(4, 6, "silver")];
        assert!(table.validate().is_ok());
    }

    #[test]
    fn validate_rejects_inverted_range() {
        let mut table = RollTable::new("Loot");
        table.entries = vec![terminal(5, 2, "copper")];
        assert!(table.validate().is_err());
    }

    #[test]
    fn validate_rejects_unreachable_range() {
        let mut table = RollTable::new("Loot");
        table.formula = Some(Formula::d(6));
        table.entries = vec![terminal(7, 9, "never")];
        assert!(table.validate().is_err());
    }
}
