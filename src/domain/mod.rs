//! Domain layer: service catalog, environment choice, config keys
//!
//! This layer is independent of external concerns (no I/O, no CLI, no config loading).

pub mod catalog;
pub mod entities;
pub mod error;

pub use catalog::{Service, ENVIRONMENT_SERVICE, ENVIRONMENT_VARIABLE, SERVICE_CATALOG};
pub use entities::*;
pub use error::DomainError;
