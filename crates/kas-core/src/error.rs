//! Error types for the Kaskade data model.

/// Alias for `Result<T, KasError>`.
pub type KasResult<T> = Result<T, KasError>;

/// Errors that can occur when building or loading a table library.
#[derive(Debug, thiserror::Error)]
pub enum KasError {
    /// No table with the given name or identifier exists.
    #[error("table not found: {0}")]
    TableNotFound(String),

    /// A table with the same name already exists in the local namespace.
    #[error("table already exists: \"{0}\"")]
    DuplicateName(String),

    /// A reference names a compendium pack that is not loaded.
    #[error("unknown pack: {0}")]
    UnknownPack(String),

    /// A dice formula could not be parsed.
    #[error("invalid formula: {0}")]
    InvalidFormula(String),

    /// An entry range is empty or inverted.
    #[error("invalid range: {0}")]
    InvalidRange(String),

    /// A table file could not be read.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// A table file could not be parsed as JSON.
    #[error("parse error: {0}")]
    Parse(#[from] serde_json::Error),
}
