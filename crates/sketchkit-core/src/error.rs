//! Error types for the document/editor core.
//!
//! Persistence failures are user-facing and propagate to the caller of
//! `save()`. Tool protocol violations are developer-facing contract
//! breaches: they are surfaced as errors so callers can reject them
//! defensively, and they never corrupt shared editor state.

use thiserror::Error;

use crate::handles::ToolId;

/// Errors surfaced by document lifecycle operations.
#[derive(Error, Debug)]
pub enum DocumentError {
    /// Writing the serialized scene to the persistence blob failed.
    /// The undo save point is left untouched, so the document still
    /// reports itself as saveable.
    #[error("failed to write \"{name}\": {source}")]
    PersistenceWriteFailed {
        name: String,
        #[source]
        source: BlobError,
    },

    /// The scene could not be serialized.
    #[error("scene serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),

    /// A tool broke the activation contract.
    #[error(transparent)]
    ToolProtocol(#[from] ToolProtocolViolation),
}

/// A breach of the tool activation contract.
///
/// These indicate a controller bug, not a recoverable runtime condition.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolProtocolViolation {
    /// `activate` was called on a tool that is already active.
    #[error("activate called on already-active tool {tool}")]
    AlreadyActive { tool: ToolId },

    /// `deactivate` was called on a tool that is not active.
    #[error("deactivate called on inactive tool {tool}")]
    NotActive { tool: ToolId },

    /// A tool tried to begin a session while another tool holds the slot.
    #[error("tool {requested} activated while {current} still holds the editor")]
    SessionOccupied { current: ToolId, requested: ToolId },

    /// A tool wrote an editor mode flag without holding the session slot.
    #[error("editor mode write from tool {tool} without an active session")]
    NotCurrentTool { tool: ToolId },
}

/// Errors from persistence blob implementations.
#[derive(Error, Debug)]
pub enum BlobError {
    /// Underlying I/O failure while writing the store.
    #[error("I/O error writing blob: {0}")]
    Io(#[from] std::io::Error),

    /// The store refused the write.
    #[error("blob store rejected write: {0}")]
    StoreRejected(String),
}

/// Result type alias for document operations.
pub type DocumentResult<T> = Result<T, DocumentError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_error_display() {
        let err = DocumentError::PersistenceWriteFailed {
            name: "drawing.skk".to_string(),
            source: BlobError::StoreRejected("disk full".to_string()),
        };
        assert_eq!(
            err.to_string(),
            "failed to write \"drawing.skk\": blob store rejected write: disk full"
        );
    }

    #[test]
    fn test_tool_protocol_violation_display() {
        let tool = ToolId::new();
        let err = ToolProtocolViolation::NotCurrentTool { tool };
        assert_eq!(
            err.to_string(),
            format!("editor mode write from tool {} without an active session", tool)
        );
    }

    #[test]
    fn test_error_conversion() {
        let tool = ToolId::new();
        let violation = ToolProtocolViolation::AlreadyActive { tool };
        let err: DocumentError = violation.into();
        assert!(matches!(err, DocumentError::ToolProtocol(_)));
    }
}
