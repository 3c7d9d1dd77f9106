//! Domain entities: core data structures

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use crate::domain::DomainError;

/// Deployment environment the operator is configuring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Environment {
    #[default]
    Dev,
    Staging,
    Prod,
}

impl Environment {
    pub const ALL: [Environment; 3] = [Environment::Dev, Environment::Staging, Environment::Prod];

    /// Name the operator types at the prompt.
    pub fn name(self) -> &'static str {
        match self {
            Environment::Dev => "dev",
            Environment::Staging => "staging",
            Environment::Prod => "prod",
        }
    }

    /// Value written to the store.
    pub fn canonical(self) -> &'static str {
        match self {
            Environment::Dev => "development",
            Environment::Staging => "staging",
            Environment::Prod => "prod",
        }
    }

    /// Menu hint, e.g. `dev/staging/prod`.
    pub fn menu() -> String {
        Self::ALL
            .iter()
            .map(|e| e.name())
            .collect::<Vec<_>>()
            .join("/")
    }
}

impl FromStr for Environment {
    type Err = DomainError;

    /// Exact, case-sensitive match on [`Environment::name`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|e| e.name() == s)
            .ok_or_else(|| DomainError::UnsupportedEnvironment(s.to_string()))
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Service-qualified key in the configuration store: `service.variable`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ConfigKey {
    pub service: String,
    pub variable: String,
}

impl ConfigKey {
    pub fn new(service: impl Into<String>, variable: impl Into<String>) -> Self {
        Self {
            service: service.into(),
            variable: variable.into(),
        }
    }

    /// Whether the value behind this key should be masked in output.
    pub fn is_sensitive(&self) -> bool {
        let variable = self.variable.to_ascii_lowercase();
        variable.contains("password") || variable.contains("secret")
    }
}

impl fmt::Display for ConfigKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.service, self.variable)
    }
}

/// How a collector session ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Variables collected and snapshot written to `path`.
    Exported { path: PathBuf },
    /// Export accepted, but the sink had no snapshot (dry run); `path` untouched.
    ExportSkipped { path: PathBuf },
    /// Variables collected, operator declined the snapshot.
    ExportDeclined,
    /// Operator left the service prompt empty.
    Aborted,
}

/// Expand `~`, `$VAR` and `${VAR}`; returns the input unchanged on failure.
pub fn expand_env_vars(path: &str) -> String {
    shellexpand::full(path)
        .map(|s| s.into_owned())
        .unwrap_or_else(|_| path.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_key_when_displayed_then_joins_with_dot() {
        let key = ConfigKey::new("email", "email_username");
        assert_eq!(key.to_string(), "email.email_username");
    }

    #[test]
    fn given_password_or_secret_variable_when_checked_then_sensitive() {
        assert!(ConfigKey::new("email", "email_password").is_sensitive());
        assert!(ConfigKey::new("environment", "session_secret").is_sensitive());
        assert!(!ConfigKey::new("connections", "host").is_sensitive());
    }

    #[test]
    fn given_uppercase_environment_when_parsing_then_rejected() {
        let err = "DEV".parse::<Environment>().unwrap_err();
        assert_eq!(err, DomainError::UnsupportedEnvironment("DEV".into()));
    }

    #[test]
    fn given_default_environment_then_dev() {
        assert_eq!(Environment::default(), Environment::Dev);
        assert_eq!(Environment::menu(), "dev/staging/prod");
    }
}
