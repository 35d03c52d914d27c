use thiserror::Error;

use crate::domain::errors::DomainError;

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid catalog: {0}")]
    Catalog(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl AppError {
    /// Process exit code for the binary.
    pub fn exit_code(&self) -> u8 {
        match self {
            AppError::Domain(DomainError::InvalidArgument(_)) => 2,
            AppError::Domain(DomainError::NotFound(_)) => 3,
            AppError::Config(_) => 78,
            AppError::Domain(DomainError::Internal(_))
            | AppError::Catalog(_)
            | AppError::Io(_) => 1,
        }
    }
}
