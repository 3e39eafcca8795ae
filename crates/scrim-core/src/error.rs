//! Runtime faults raised by the object substrate
//!
//! The layer mechanism itself never constructs errors; everything here is
//! raised by the substrate (calling a non-callable, writing a property on
//! a primitive, a coercion hook returning an object) and propagates
//! through handler chains unmodified.

/// Faults raised while evaluating an interception operation
#[derive(Debug, thiserror::Error)]
pub enum RuntimeError {
    /// Type error
    #[error("Type error: {0}")]
    TypeError(String),
}

impl RuntimeError {
    /// Shorthand for a `TypeError` with a formatted message
    pub fn type_error(msg: impl Into<String>) -> Self {
        Self::TypeError(msg.into())
    }
}

/// Result alias for substrate operations
pub type RunResult<T> = Result<T, RuntimeError>;
