//! Error types for IR construction

use thiserror::Error;

/// Result type alias for IR operations
pub type Result<T> = std::result::Result<T, IrError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum IrError {
    #[error("function @{0} is already defined")]
    DuplicateFunction(String),

    #[error("function @{0} is not defined in this module")]
    UnknownFunction(String),

    #[error("@{name} was declared as ({expected}) but called with ({actual})")]
    SignatureMismatch {
        name: String,
        expected: String,
        actual: String,
    },

    #[error("function @{0} already ends with a terminator")]
    Terminated(String),

    #[error("builder has no insertion point")]
    NoInsertionPoint,
}
