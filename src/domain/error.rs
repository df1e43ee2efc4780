use thiserror::Error;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("domain invariant violated: {message}")]
    Invariant { message: String },
}

impl DomainError {
    pub fn invariant(message: impl Into<String>) -> Self {
        Self::Invariant {
            message: message.into(),
        }
    }
}

/// Fail with [`DomainError::Invariant`] when `condition` does not hold.
pub fn ensure(condition: bool, message: impl FnOnce() -> String) -> Result<(), DomainError> {
    if condition {
        Ok(())
    } else {
        Err(DomainError::invariant(message()))
    }
}
