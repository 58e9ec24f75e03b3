//! # Todo Error Types
//!
//! The data-access layer deliberately keeps a flat taxonomy: either the store
//! answered without a row, or the client layer failed and its error is passed
//! through untouched.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum TodoError {
    /// The statement ran but produced no row (insert returned nothing, or no
    /// todo matched the requested id).
    #[error("Something went wrong")]
    OperationFailed,

    #[error(transparent)]
    Database(#[from] sqlx::Error),
}

impl TodoError {
    pub fn is_operation_failed(&self) -> bool {
        matches!(self, TodoError::OperationFailed)
    }
}

pub type Result<T> = std::result::Result<T, TodoError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operation_failed_display() {
        assert_eq!(TodoError::OperationFailed.to_string(), "Something went wrong");
        assert!(TodoError::OperationFailed.is_operation_failed());
    }

    #[test]
    fn test_database_error_is_transparent() {
        let error = TodoError::from(sqlx::Error::RowNotFound);
        assert_eq!(error.to_string(), sqlx::Error::RowNotFound.to_string());
        assert!(!error.is_operation_failed());
    }
}
