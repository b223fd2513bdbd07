//! Error types for graphkit
//!
//! Every fallible operation in the crate returns [`Result`], whose error is a
//! [`GraphkitError`]. Errors are raised synchronously to the immediate caller
//! and never retried internally.

mod macros;

use thiserror::Error;

/// Errors that can occur during graphkit operations
#[derive(Error, Debug)]
pub enum GraphkitError {
    // Heap errors
    #[error("pop from an empty priority queue")]
    EmptyQueue,

    #[error("key not found in priority queue: {key}")]
    KeyNotFound { key: String },

    // Graph errors
    #[error("graph vertex capacity exceeded (capacity {capacity})")]
    CapacityExceeded { capacity: usize },

    #[error("graph has a self loop at node {node}")]
    SelfLoop { node: usize },

    // Positional container errors
    #[error("index {index} out of range for length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("cannot {operation} on an empty structure")]
    EmptyStructure { operation: String },

    #[error("invalid {context}: {value}")]
    InvalidValue { context: String, value: String },

    // Settings file failures
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSer(#[from] toml::ser::Error),
}

impl GraphkitError {
    /// Create an error for a key with no live heap entry
    pub fn key_not_found(key: &impl std::fmt::Debug) -> Self {
        GraphkitError::KeyNotFound {
            key: format!("{:?}", key),
        }
    }

    /// Create an error for an invalid argument
    pub fn invalid_value(context: &str, value: impl std::fmt::Display) -> Self {
        GraphkitError::InvalidValue {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Create an error for an operation on an empty container
    pub fn empty(operation: &str) -> Self {
        GraphkitError::EmptyStructure {
            operation: operation.to_string(),
        }
    }

    /// Get the error type identifier
    pub fn error_type(&self) -> &'static str {
        match self {
            GraphkitError::EmptyQueue => "empty_queue",
            GraphkitError::KeyNotFound { .. } => "key_not_found",
            GraphkitError::CapacityExceeded { .. } => "capacity_exceeded",
            GraphkitError::SelfLoop { .. } => "self_loop",
            GraphkitError::IndexOutOfRange { .. } => "index_out_of_range",
            GraphkitError::EmptyStructure { .. } => "empty_structure",
            GraphkitError::InvalidValue { .. } => "invalid_value",
            GraphkitError::Io(_) => "io_error",
            GraphkitError::Toml(_) | GraphkitError::TomlSer(_) => "toml_error",
        }
    }

    /// Convert error to JSON representation for structured error output.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "type": self.error_type(),
                "message": self.to_string(),
            }
        })
    }
}

/// Result type alias for graphkit operations
pub type Result<T> = std::result::Result<T, GraphkitError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_not_found_uses_debug_rendering() {
        let err = GraphkitError::key_not_found(&"task-a");
        assert_eq!(
            err.to_string(),
            "key not found in priority queue: \"task-a\""
        );
        assert_eq!(err.error_type(), "key_not_found");
    }

    #[test]
    fn test_to_json_shape() {
        let err = GraphkitError::SelfLoop { node: 4 };
        let json = err.to_json();
        assert_eq!(json["error"]["type"], "self_loop");
        assert_eq!(json["error"]["message"], "graph has a self loop at node 4");
    }

    #[test]
    fn test_index_out_of_range_message() {
        let err = GraphkitError::IndexOutOfRange { index: 7, len: 3 };
        assert_eq!(err.to_string(), "index 7 out of range for length 3");
    }

    #[test]
    fn test_empty_structure_message() {
        let err = GraphkitError::empty("pop");
        assert_eq!(err.to_string(), "cannot pop on an empty structure");
        assert_eq!(err.error_type(), "empty_structure");
    }

    #[test]
    fn test_io_error_converts() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: GraphkitError = io.into();
        assert_eq!(err.error_type(), "io_error");
    }
}
