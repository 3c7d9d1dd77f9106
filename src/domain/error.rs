//! Domain-level errors (no external dependencies)

use thiserror::Error;

/// Domain errors represent choices outside the closed sets the collector knows.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid option, you must pick one of dev, staging, prod")]
    UnsupportedEnvironment(String),

    #[error("Sorry, we do not support {0} at the moment")]
    UnsupportedService(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_unsupported_choices_when_displayed_then_operator_messages() {
        assert_eq!(
            DomainError::UnsupportedEnvironment("qa".into()).to_string(),
            "Invalid option, you must pick one of dev, staging, prod"
        );
        assert_eq!(
            DomainError::UnsupportedService("sms".into()).to_string(),
            "Sorry, we do not support sms at the moment"
        );
    }
}
