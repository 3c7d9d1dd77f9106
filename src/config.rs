//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/fbenv/fbenv.toml`
//! 3. Local config: `<project_dir>/.fbenv.toml`
//! 4. Environment variables: `FBENV_*` prefix, `__` between sections
//!    (e.g. `FBENV_TOOL__PROGRAM`)

use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment, File};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::application::ApplicationError;
use crate::domain::expand_env_vars;

/// External configuration tool.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ToolSettings {
    /// Executable, looked up on PATH (default: firebase)
    pub program: String,
    /// Command namespace; `:set` and `:get` are appended (default: functions:config)
    pub namespace: String,
}

impl Default for ToolSettings {
    fn default() -> Self {
        Self {
            program: "firebase".into(),
            namespace: "functions:config".into(),
        }
    }
}

/// Unified configuration for fbenv.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Snapshot file for local development, relative to the project directory
    pub snapshot_path: PathBuf,
    /// Clear the terminal before the session starts
    pub clear_screen: bool,
    /// Print tool commands instead of running them
    pub dry_run: bool,
    /// External tool invocation
    pub tool: ToolSettings,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            snapshot_path: PathBuf::from(".runtimeconfig.json"),
            clear_screen: true,
            dry_run: false,
            tool: ToolSettings::default(),
        }
    }
}

/// Get the XDG config directory for fbenv.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "fbenv").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("fbenv.toml"))
}

/// Get the path to the local config file in a project directory.
pub fn local_config_path(project_dir: &Path) -> PathBuf {
    project_dir.join(".fbenv.toml")
}

impl Settings {
    /// Expand shell variables and tilde in path-like fields.
    fn expand_paths(&mut self) {
        let expanded = expand_env_vars(self.snapshot_path.to_string_lossy().as_ref());
        self.snapshot_path = PathBuf::from(expanded);

        // program may be a path like ~/bin/firebase
        self.tool.program = expand_env_vars(&self.tool.program);
    }

    /// Load settings with layered precedence.
    ///
    /// # Arguments
    /// * `project_dir` - Optional project directory holding `.fbenv.toml`
    ///
    /// Later layers override single keys; unspecified keys fall through to
    /// the layer below.
    pub fn load(project_dir: Option<&Path>) -> Result<Self, ApplicationError> {
        let defaults = Settings::default();
        let mut builder = Config::builder()
            .set_default(
                "snapshot_path",
                defaults.snapshot_path.to_string_lossy().to_string(),
            )
            .map_err(config_err)?
            .set_default("clear_screen", defaults.clear_screen)
            .map_err(config_err)?
            .set_default("dry_run", defaults.dry_run)
            .map_err(config_err)?
            .set_default("tool.program", defaults.tool.program.clone())
            .map_err(config_err)?
            .set_default("tool.namespace", defaults.tool.namespace.clone())
            .map_err(config_err)?;

        if let Some(global_path) = global_config_path() {
            builder = builder.add_source(File::from(global_path).required(false));
        }

        if let Some(dir) = project_dir {
            builder = builder.add_source(File::from(local_config_path(dir)).required(false));
        }

        builder = builder.add_source(
            Environment::with_prefix("FBENV")
                .prefix_separator("_")
                .separator("__"),
        );

        let config = builder.build().map_err(config_err)?;
        let mut settings: Self = config.try_deserialize().map_err(config_err)?;

        settings.expand_paths();

        Ok(settings)
    }

    /// Show the effective configuration as TOML.
    pub fn to_toml(&self) -> Result<String, ApplicationError> {
        toml::to_string_pretty(self).map_err(|e| ApplicationError::Config {
            message: format!("serialize config: {e}"),
        })
    }

    /// Generate a template config file.
    pub fn template() -> String {
        r#"# fbenv configuration
#
# Locations (by precedence, lowest to highest):
#   Global: ~/.config/fbenv/fbenv.toml
#   Local:  <project_dir>/.fbenv.toml
#   Env:    FBENV_* environment variables, e.g. FBENV_TOOL__PROGRAM=firebase

# Snapshot written when saving settings for local development
# snapshot_path = ".runtimeconfig.json"

# Clear the terminal before prompting
# clear_screen = true

# Print tool commands instead of running them
# dry_run = false

[tool]
# Configuration CLI
# program = "firebase"

# Namespace; ":set" and ":get" are appended
# namespace = "functions:config"
"#
        .to_string()
    }
}

fn config_err(e: ConfigError) -> ApplicationError {
    ApplicationError::Config {
        message: e.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_defaults_then_targets_firebase_functions_config() {
        let settings = Settings::default();
        assert_eq!(settings.tool.program, "firebase");
        assert_eq!(settings.tool.namespace, "functions:config");
        assert_eq!(settings.snapshot_path, PathBuf::from(".runtimeconfig.json"));
        assert!(!settings.dry_run);
    }

    #[test]
    fn given_tilde_in_snapshot_path_when_expand_paths_then_expands_to_home() {
        let mut settings = Settings {
            snapshot_path: PathBuf::from("~/snapshots/runtime.json"),
            tool: ToolSettings {
                program: "$HOME/bin/firebase".into(),
                ..ToolSettings::default()
            },
            ..Settings::default()
        };

        settings.expand_paths();

        let home = std::env::var("HOME").expect("HOME should be set");
        let snapshot = settings.snapshot_path.to_string_lossy();
        assert!(
            snapshot.starts_with(&home),
            "snapshot_path should start with home dir: {}",
            snapshot
        );
        assert!(!snapshot.contains('~'));
        assert!(
            settings.tool.program.starts_with(&home),
            "program should expand $HOME: {}",
            settings.tool.program
        );
    }

    #[test]
    fn given_settings_when_to_toml_then_contains_tool_section() {
        let toml = Settings::default().to_toml().expect("serialize");
        assert!(toml.contains("[tool]"));
        assert!(toml.contains("program = \"firebase\""));
    }

    #[test]
    fn given_template_when_parsed_then_is_valid_toml() {
        let parsed: Settings = toml::from_str(&Settings::template()).expect("template parses");
        assert_eq!(parsed, Settings::default());
    }
}
