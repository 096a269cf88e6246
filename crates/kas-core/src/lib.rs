//! Core types for Kaskade: roll tables, entries, dice formulas, and the
//! table library.
//!
//! This crate defines the data model the resolver walks. It is independent
//! of any storage backend — you can construct a [`TableLibrary`]
//! programmatically or load one from a directory of JSON files.

/// Dice formulas and roll outcomes.
pub mod dice;
/// Result entries: terminal outcomes and references to other tables.
pub mod entry;
/// Error types used throughout the crate.
pub mod error;
/// The table library: local namespace plus compendium packs.
pub mod library;
/// Roll tables, identifiers, and ranges.
pub mod table;

/// Re-export dice types.
pub use dice::{Formula, RollOutcome};
/// Re-export entry types.
pub use entry::{EntryKind, PackId, TableEntry, TableRef};
/// Re-export error types.
pub use error::{KasError, KasResult};
/// Re-export library types.
pub use library::{Document, Pack, TableLibrary};
/// Re-export table types.
pub use table::{RollRange, RollTable, TableId};
