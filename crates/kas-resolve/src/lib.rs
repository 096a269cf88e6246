//! Recursive roll-table resolution engine for Kaskade.
//!
//! Given a root table, the [`Resolver`] performs one weighted draw per
//! table visited, expands entries that reference other tables depth-first,
//! and returns the flattened ordered list of terminal outcomes. Cycles and
//! excessive nesting truncate only the offending branch.

/// Port traits for the external collaborators.
pub mod ports;
/// Roll announcements, draw cards, and roll requests.
pub mod report;
/// The recursive resolver.
pub mod resolver;
/// Ancestor-chain visitation tracking.
pub mod visited;

/// Re-export port traits.
pub use ports::{DiceRoller, DocumentStore, Messenger};
/// Re-export report types.
pub use report::{DrawCard, Outcome, RollAnnouncement, RollRequest};
/// Re-export the resolver.
pub use resolver::{MAX_DEPTH, Resolver};
/// Re-export the visited set.
pub use visited::Visited;
