use diesel::result::Error as DieselError;
use thiserror::Error;

/// Custom error type for organizational-unit operations
#[derive(Debug, Error)]
pub enum OrgError {
    #[error("Database error: {0}")]
    DatabaseError(String),
    #[error("Not found: {0}")]
    NotFound(String),
    #[error("Invalid data: {0}")]
    InvalidData(String),
}

pub type Result<T> = std::result::Result<T, OrgError>;

impl From<DieselError> for OrgError {
    fn from(err: DieselError) -> Self {
        match err {
            DieselError::NotFound => OrgError::NotFound("Record not found".to_string()),
            _ => OrgError::DatabaseError(err.to_string()),
        }
    }
}

impl From<r2d2::Error> for OrgError {
    fn from(err: r2d2::Error) -> Self {
        OrgError::DatabaseError(err.to_string())
    }
}
