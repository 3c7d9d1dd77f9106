//! Config sinks backed by the platform CLI
//!
//! `ToolConfigSink` runs `<program> <namespace>:set key=value` and
//! `<program> <namespace>:get` directly, without a shell, so values are
//! passed through verbatim. `DryRunSink` only prints what would run.

use std::io::{self, Write};
use std::sync::{Arc, Mutex};

use colored::Colorize;
use tracing::{debug, warn};

use crate::config::ToolSettings;
use crate::domain::ConfigKey;
use crate::infrastructure::traits::{CommandRunner, ConfigSink};

const MASK: &str = "***";

/// Argument vectors for the configuration tool.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolInvocation {
    pub program: String,
    pub namespace: String,
}

impl ToolInvocation {
    pub fn new(tool: &ToolSettings) -> Self {
        Self {
            program: tool.program.clone(),
            namespace: tool.namespace.clone(),
        }
    }

    /// Arguments for storing one value.
    pub fn set_args(&self, key: &ConfigKey, value: &str) -> Vec<String> {
        vec![
            format!("{}:set", self.namespace),
            format!("{}={}", key, value),
        ]
    }

    /// Arguments for exporting everything.
    pub fn get_args(&self) -> Vec<String> {
        vec![format!("{}:get", self.namespace)]
    }

    /// Human readable set command, masking sensitive values.
    pub fn display_set(&self, key: &ConfigKey, value: &str) -> String {
        let shown = if key.is_sensitive() { MASK } else { value };
        format!("{} {}:set {}={}", self.program, self.namespace, key, shown)
    }

    /// Human readable export command.
    pub fn display_get(&self) -> String {
        format!("{} {}:get", self.program, self.namespace)
    }
}

/// Sink that forwards every call to the external tool.
pub struct ToolConfigSink {
    cmd: Arc<dyn CommandRunner>,
    invocation: ToolInvocation,
}

impl ToolConfigSink {
    pub fn new(cmd: Arc<dyn CommandRunner>, tool: &ToolSettings) -> Self {
        Self {
            cmd,
            invocation: ToolInvocation::new(tool),
        }
    }

    /// Run the tool; returns stdout, or None when it could not be spawned.
    fn run(&self, args: &[String], command: &str) -> Option<Vec<u8>> {
        let args: Vec<&str> = args.iter().map(String::as_str).collect();
        match self.cmd.run(&self.invocation.program, &args) {
            Ok(output) => {
                if !output.status.success() {
                    warn!(
                        "'{}' exited with {}: {}",
                        command,
                        output.status,
                        String::from_utf8_lossy(&output.stderr).trim()
                    );
                }
                Some(output.stdout)
            }
            Err(e) => {
                warn!("cannot run '{}': {}", command, e);
                None
            }
        }
    }
}

impl ConfigSink for ToolConfigSink {
    fn set(&self, key: &ConfigKey, value: &str) {
        let command = self.invocation.display_set(key, value);
        debug!("set: {}", command);
        self.run(&self.invocation.set_args(key, value), &command);
    }

    /// Always a snapshot: a tool that cannot be spawned yields empty content.
    fn export_all(&self) -> Option<Vec<u8>> {
        let command = self.invocation.display_get();
        debug!("export_all: {}", command);
        Some(self.run(&self.invocation.get_args(), &command).unwrap_or_default())
    }
}

/// Sink that prints the commands instead of running them.
///
/// `export_all` returns None, so no snapshot is ever written.
pub struct DryRunSink<W = io::Stdout> {
    invocation: ToolInvocation,
    out: Mutex<W>,
}

impl DryRunSink {
    pub fn new(tool: &ToolSettings) -> Self {
        Self::with_writer(tool, io::stdout())
    }
}

impl<W: Write + Send> DryRunSink<W> {
    pub fn with_writer(tool: &ToolSettings, out: W) -> Self {
        Self {
            invocation: ToolInvocation::new(tool),
            out: Mutex::new(out),
        }
    }

    /// Consume the sink and return its writer.
    pub fn into_writer(self) -> W {
        self.out.into_inner().unwrap_or_else(|e| e.into_inner())
    }

    fn print(&self, command: &str) {
        let mut out = self.out.lock().unwrap_or_else(|e| e.into_inner());
        // write errors are ignored
        let _ = writeln!(out, "{} {}", "dry-run:".yellow(), command);
    }
}

impl<W: Write + Send> ConfigSink for DryRunSink<W> {
    fn set(&self, key: &ConfigKey, value: &str) {
        self.print(&self.invocation.display_set(key, value));
    }

    fn export_all(&self) -> Option<Vec<u8>> {
        self.print(&self.invocation.display_get());
        None
    }
}
