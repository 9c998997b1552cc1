//! Error types and exit codes for edgeway
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args)
//! - 3: Data error (malformed edge list, unknown vertex, duplicate edge)

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the edgeway binary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - malformed edge list, unknown vertex (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Which endpoint of a query an unknown vertex violated
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VertexRole {
    /// The vertex a path starts from
    Source,
    /// The vertex a path must reach
    Destination,
    /// A vertex named directly by a query
    Query,
}

impl fmt::Display for VertexRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VertexRole::Source => write!(f, "source"),
            VertexRole::Destination => write!(f, "destination"),
            VertexRole::Query => write!(f, "queried"),
        }
    }
}

/// Errors that can occur during edgeway operations
#[derive(Error, Debug)]
pub enum EdgewayError {
    // Usage errors (exit code 2)
    #[error("unknown format: {0} (expected: human, json, or records)")]
    UnknownFormat(String),

    #[error("{0}")]
    UsageError(String),

    // Data errors (exit code 3)
    #[error("edge list not found: {path:?}")]
    EdgeListNotFound { path: PathBuf },

    #[error("malformed edge data: {}", .entries.join("; "))]
    MalformedEdgeData { entries: Vec<String> },

    #[error("unknown {role} vertex: {vertex}")]
    UnknownVertex { role: VertexRole, vertex: String },

    #[error("edge {from} -> {to} already exists")]
    DuplicateEdge { from: String, to: String },

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}

impl EdgewayError {
    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            // Usage errors
            EdgewayError::UnknownFormat(_) | EdgewayError::UsageError(_) => ExitCode::Usage,

            // Data errors
            EdgewayError::EdgeListNotFound { .. }
            | EdgewayError::MalformedEdgeData { .. }
            | EdgewayError::UnknownVertex { .. }
            | EdgewayError::DuplicateEdge { .. } => ExitCode::Data,

            // Generic failures
            EdgewayError::Io(_) | EdgewayError::Json(_) | EdgewayError::Other(_) => {
                ExitCode::Failure
            }
        }
    }

    /// Convert error to JSON representation for structured error output
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "code": self.exit_code() as i32,
                "type": self.error_type(),
                "message": self.to_string(),
            }
        })
    }

    /// Get the error type identifier
    fn error_type(&self) -> &'static str {
        match self {
            EdgewayError::UnknownFormat(_) => "unknown_format",
            EdgewayError::UsageError(_) => "usage_error",
            EdgewayError::EdgeListNotFound { .. } => "edge_list_not_found",
            EdgewayError::MalformedEdgeData { .. } => "malformed_edge_data",
            EdgewayError::UnknownVertex { .. } => "unknown_vertex",
            EdgewayError::DuplicateEdge { .. } => "duplicate_edge",
            EdgewayError::Io(_) => "io_error",
            EdgewayError::Json(_) => "json_error",
            EdgewayError::Other(_) => "other",
        }
    }
}

/// Result type alias for edgeway operations
pub type Result<T> = std::result::Result<T, EdgewayError>;
