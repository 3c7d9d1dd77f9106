//! Application services
//!
//! Concrete service implementations that orchestrate domain logic.
//! Services depend on I/O boundary traits (Prompter, ConfigSink, FileSystem)
//! but are themselves concrete structs, not traits.

mod collector;

pub use collector::{CollectorService, EXPORT_PROMPT};
