//! Error types for the library catalog

use thiserror::Error;

/// Numeric error codes handed to front ends alongside the message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum ErrorCode {
    NoSuchUser = 4,
    ItemNotAvailable = 7,
    Duplicate = 8,
    BadValue = 18,
    NotBorrowed = 22,
}

/// Main application error type.
///
/// Every variant is an expected, recoverable condition; nothing in the core aborts.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AppError {
    #[error("User already exists: {0}")]
    UserAlreadyExists(String),

    #[error("User does not exist: {0}")]
    UserNotFound(String),

    #[error("Book not available: {0}")]
    BookUnavailable(String),

    #[error("Book not issued to user {user}: {title}")]
    NotIssuedToUser { user: String, title: String },

    #[error("Too many copies of {0}")]
    CopyLimitExceeded(String),

    #[error("Due date out of range for {0}")]
    DueDateOutOfRange(String),
}

impl AppError {
    /// Code reported to the caller for this error
    pub fn code(&self) -> ErrorCode {
        match self {
            AppError::UserAlreadyExists(_) => ErrorCode::Duplicate,
            AppError::UserNotFound(_) => ErrorCode::NoSuchUser,
            AppError::BookUnavailable(_) => ErrorCode::ItemNotAvailable,
            AppError::NotIssuedToUser { .. } => ErrorCode::NotBorrowed,
            AppError::CopyLimitExceeded(_) | AppError::DueDateOutOfRange(_) => ErrorCode::BadValue,
        }
    }
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;
