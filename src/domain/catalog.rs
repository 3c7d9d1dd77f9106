//! Static catalog of configurable services
//!
//! Each service owns an ordered list of variable names. The order is the
//! order in which the collector prompts for them.

/// Service holding the deployment environment settings.
pub const ENVIRONMENT_SERVICE: &str = "environment";

/// Variable of [`ENVIRONMENT_SERVICE`] that stores the canonical environment name.
pub const ENVIRONMENT_VARIABLE: &str = "env";

/// A named group of configuration variables.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Service {
    pub name: &'static str,
    pub variables: &'static [&'static str],
}

/// All services the collector can configure, in menu order.
pub static SERVICE_CATALOG: &[Service] = &[
    Service {
        name: ENVIRONMENT_SERVICE,
        // "maintainance" is the key already deployed in existing stores
        variables: &[ENVIRONMENT_VARIABLE, "maintainance", "session_secret"],
    },
    Service {
        name: "email",
        variables: &["email_username", "email_password"],
    },
    Service {
        name: "connections",
        variables: &["protocol", "host"],
    },
];

impl Service {
    /// Find a service by exact (case-sensitive) name.
    pub fn lookup(name: &str) -> Option<&'static Service> {
        SERVICE_CATALOG.iter().find(|s| s.name == name)
    }

    /// Menu hint listing every service, e.g. `environment/email/connections`.
    pub fn menu() -> String {
        SERVICE_CATALOG
            .iter()
            .map(|s| s.name)
            .collect::<Vec<_>>()
            .join("/")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_email_service_when_lookup_then_returns_ordered_variables() {
        let service = Service::lookup("email").expect("email in catalog");
        assert_eq!(service.variables, &["email_username", "email_password"]);
    }

    #[test]
    fn given_wrong_case_when_lookup_then_returns_none() {
        assert!(Service::lookup("Email").is_none());
        assert!(Service::lookup("").is_none());
    }

    #[test]
    fn given_catalog_when_rendering_menu_then_keeps_catalog_order() {
        assert_eq!(Service::menu(), "environment/email/connections");
    }

    #[test]
    fn given_catalog_when_checking_names_then_all_unique() {
        let mut names: Vec<_> = SERVICE_CATALOG.iter().map(|s| s.name).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), SERVICE_CATALOG.len());
    }
}
