use thiserror::Error;

pub const INVALID_CPF: &str = "Invalid CPF";
pub const INVALID_PARAMETER: &str = "Invalid parameter";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    #[error("{0}")]
    InvalidArgument(String),
    #[error("Not found: {0}")]
    NotFound(String),
    #[error("Internal error: {0}")]
    Internal(String),
}

impl DomainError {
    pub fn invalid_cpf() -> Self {
        DomainError::InvalidArgument(INVALID_CPF.to_string())
    }

    pub fn invalid_parameter() -> Self {
        DomainError::InvalidArgument(INVALID_PARAMETER.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_argument_displays_bare_message() {
        assert_eq!(DomainError::invalid_cpf().to_string(), "Invalid CPF");
        assert_eq!(
            DomainError::invalid_parameter().to_string(),
            "Invalid parameter"
        );
    }

    #[test]
    fn not_found_display() {
        assert_eq!(
            DomainError::NotFound("item 7".to_string()).to_string(),
            "Not found: item 7"
        );
    }
}
