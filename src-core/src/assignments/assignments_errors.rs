use diesel::result::Error as DieselError;
use thiserror::Error;

/// Custom error type for assignment-related operations
#[derive(Debug, Error)]
pub enum AssignmentError {
    #[error("Database error: {0}")]
    DatabaseError(String),
    #[error("Not found: {0}")]
    NotFound(String),
    #[error("Invalid data: {0}")]
    InvalidData(String),
    #[error("Already assigned: {0}")]
    AlreadyAssigned(String),
    #[error("Not assigned: {0}")]
    NotAssigned(String),
    #[error("Concurrent modification: {0}")]
    ConcurrentModification(String),
}

pub type Result<T> = std::result::Result<T, AssignmentError>;

impl From<DieselError> for AssignmentError {
    fn from(err: DieselError) -> Self {
        match err {
            DieselError::NotFound => AssignmentError::NotFound("Record not found".to_string()),
            _ => AssignmentError::DatabaseError(err.to_string()),
        }
    }
}

impl From<r2d2::Error> for AssignmentError {
    fn from(err: r2d2::Error) -> Self {
        AssignmentError::DatabaseError(err.to_string())
    }
}
