//! Unified error types and result handling.
//!
//! Every layer returns [`Result`]. The HTTP boundary turns each variant into a
//! status code in [`crate::api::error`].

use sea_orm::{DbErr, SqlErr};
use thiserror::Error;

/// Crate-wide error type
#[derive(Debug, Error)]
pub enum Error {
    /// Input failed a presence or shape check
    #[error("{message}")]
    Validation {
        /// Human-readable reason, returned to the caller as-is
        message: String,
    },

    /// The addressed record does not exist
    #[error("{message}")]
    NotFound {
        /// Human-readable reason, returned to the caller as-is
        message: String,
    },

    /// A uniqueness rule was violated by the store
    #[error("{message}")]
    Conflict {
        /// Human-readable reason, returned to the caller as-is
        message: String,
    },

    /// The AI provider failed or returned something unusable
    #[error("{message}")]
    Ai {
        /// Provider failure description
        message: String,
    },

    /// Startup or configuration problem
    #[error("Configuration error: {message}")]
    Config {
        /// What was wrong with the configuration
        message: String,
    },

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] DbErr),

    /// Outbound HTTP failure
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Password hashing failure
    #[error("Password hashing error: {0}")]
    Bcrypt(#[from] bcrypt::BcryptError),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Shorthand for a [`Error::Validation`] with the given message.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Shorthand for a [`Error::NotFound`] with the given message.
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    /// Maps a unique-constraint violation to [`Error::Conflict`] carrying `message`,
    /// leaving every other database error untouched.
    pub fn conflict_on_unique(err: DbErr, message: impl Into<String>) -> Self {
        match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(_)) => Self::Conflict {
                message: message.into(),
            },
            _ => Self::Database(err),
        }
    }
}

/// Convenience `Result` type
pub type Result<T> = std::result::Result<T, Error>;
