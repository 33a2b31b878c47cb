//! Domain-level error types.

use thiserror::Error;

use crate::ports::AuthError;

/// One field-level violation found by the input validator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub message: String,
}

/// Ordered set of violations collected in a single validation pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors(Vec<ValidationError>);

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, message: impl Into<String>) {
        self.0.push(ValidationError {
            message: message.into(),
        });
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ValidationError> {
        self.0.iter()
    }

    pub fn messages(&self) -> Vec<&str> {
        self.0.iter().map(|e| e.message.as_str()).collect()
    }

    /// Fail with a 422 carrying every collected violation, if there are any.
    pub fn into_result(self, message: &'static str) -> Result<(), DomainError> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(DomainError::Validation {
                message,
                errors: self,
            })
        }
    }
}

/// Domain errors - business logic failures.
///
/// Every variant maps to a fixed client-visible code through [`DomainError::code`];
/// variants without a code are internal failures.
#[derive(Debug, Error)]
pub enum DomainError {
    /// The caller presented no valid token.
    #[error("Not authenticated")]
    NotAuthenticated,

    /// A credential or caller lookup failed (login, post creation).
    #[error("{0}")]
    Unauthorized(&'static str),

    #[error("Not authorized")]
    Forbidden,

    #[error("{0} not found")]
    NotFound(&'static str),

    #[error("{message}")]
    Validation {
        message: &'static str,
        errors: ValidationErrors,
    },

    #[error("{0}")]
    Duplicate(String),

    #[error("{0}")]
    Internal(String),

    #[error(transparent)]
    Repository(#[from] RepoError),

    #[error(transparent)]
    Auth(#[from] AuthError),
}

impl DomainError {
    /// Client-visible status code; `None` for unexpected failures.
    pub fn code(&self) -> Option<u16> {
        match self {
            Self::NotAuthenticated | Self::Unauthorized(_) => Some(401),
            Self::Forbidden => Some(403),
            Self::NotFound(_) => Some(404),
            Self::Validation { .. } => Some(422),
            Self::Duplicate(_) | Self::Internal(_) | Self::Repository(_) | Self::Auth(_) => None,
        }
    }

    pub fn validation_errors(&self) -> Option<&ValidationErrors> {
        match self {
            Self::Validation { errors, .. } => Some(errors),
            _ => None,
        }
    }
}

/// Repository-level errors.
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Database connection failed: {0}")]
    Connection(String),

    #[error("Query execution failed: {0}")]
    Query(String),

    #[error("Entity not found")]
    NotFound,

    #[error("Constraint violation: {0}")]
    Constraint(String),
}
