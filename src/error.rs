//! Error types for the settlement engine.
//!
//! The numeric core is total and never fails; these errors belong to the
//! layers around it (configuration loading, catalog lookups and boundary
//! validation of engagement parameters).

use thiserror::Error;

/// The main error type for the settlement engine.
///
/// # Example
///
/// ```
/// use performer_settlement::error::EngineError;
///
/// let error = EngineError::UnknownEquipment {
///     id: "theremin".to_string(),
/// };
/// assert_eq!(error.to_string(), "Unknown equipment: theremin");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// Equipment identifier is not present in the catalog.
    #[error("Unknown equipment: {id}")]
    UnknownEquipment {
        /// The identifier that was requested.
        id: String,
    },

    /// Per-diem kind is not present in the rate table.
    #[error("Unknown per-diem kind: {kind}")]
    UnknownPerDiemKind {
        /// The kind that was requested.
        kind: String,
    },

    /// An engagement parameter violated its precondition.
    #[error("Invalid parameter '{field}': {message}")]
    InvalidParameter {
        /// The offending field.
        field: String,
        /// What was wrong with it.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
