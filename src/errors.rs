use thiserror::Error;
use uuid::Uuid;

pub type Result<T> = std::result::Result<T, FinanceError>;

/// Unified error type for the repository, storage, and advisory layers.
#[derive(Debug, Error)]
pub enum FinanceError {
    #[error("User not found: {0}")]
    UserNotFound(String),
    #[error("Debt not found: {0}")]
    DebtNotFound(Uuid),
    #[error("Goal not found: {0}")]
    GoalNotFound(Uuid),
    #[error("No user is signed in")]
    NoSession,
    #[error("Incorrect email or password")]
    InvalidCredentials,
    #[error("Email already registered: {0}")]
    EmailTaken(String),
    #[error("Invalid input: {0}")]
    Validation(String),
    #[error("Persistence error: {0}")]
    Storage(String),
}

impl From<std::io::Error> for FinanceError {
    fn from(err: std::io::Error) -> Self {
        FinanceError::Storage(err.to_string())
    }
}

impl From<serde_json::Error> for FinanceError {
    fn from(err: serde_json::Error) -> Self {
        FinanceError::Storage(err.to_string())
    }
}
