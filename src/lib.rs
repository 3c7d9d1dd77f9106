//! fbenv: interactive setup for a project's functions config store
//!
//! Prompts for an environment and one service's variables, forwards each
//! answer to the platform CLI, and optionally saves a local snapshot.

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod infrastructure;
pub mod util;
