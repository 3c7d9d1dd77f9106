//! Interactive configuration collector
//!
//! Walks the operator through one linear session:
//! environment → service → that service's variables → optional snapshot export.
//! There is no way back to an earlier step; empty or unknown input at a
//! selection prompt ends the session.

use std::path::PathBuf;
use std::sync::Arc;

use tracing::{debug, info, instrument};

use crate::application::{ApplicationError, ApplicationResult, IoResultExt};
use crate::config::Settings;
use crate::domain::{
    ConfigKey, DomainError, Environment, Outcome, Service, ENVIRONMENT_SERVICE,
    ENVIRONMENT_VARIABLE,
};
use crate::infrastructure::traits::{ConfigSink, FileSystem, Prompter};

/// Prompt shown after the last variable of a service.
pub const EXPORT_PROMPT: &str = "Would you like to save the settings for local development? [y/N]";

const BANNER: &[&str] = &[
    "We will begin by setting up the configuration variables",
    "For email username and password, a throwaway account at ethereal.email works well",
];

/// Drives one configuration session against a [`ConfigSink`].
pub struct CollectorService {
    prompter: Arc<dyn Prompter>,
    sink: Arc<dyn ConfigSink>,
    fs: Arc<dyn FileSystem>,
    settings: Arc<Settings>,
    snapshot_path: PathBuf,
}

impl CollectorService {
    /// Create a collector writing its snapshot to `snapshot_path`.
    pub fn new(
        prompter: Arc<dyn Prompter>,
        sink: Arc<dyn ConfigSink>,
        fs: Arc<dyn FileSystem>,
        settings: Arc<Settings>,
        snapshot_path: PathBuf,
    ) -> Self {
        Self {
            prompter,
            sink,
            fs,
            settings,
            snapshot_path,
        }
    }

    /// Run the full session.
    #[instrument(skip(self))]
    pub fn run(&self) -> ApplicationResult<Outcome> {
        if self.settings.clear_screen {
            self.prompter.clear();
        }
        for line in BANNER {
            self.prompter.say(line);
        }

        let environment = self.select_environment()?;
        info!("environment set to {}", environment.canonical());

        let Some(service) = self.select_service()? else {
            debug!("run: empty service choice, aborting");
            return Ok(Outcome::Aborted);
        };

        let written = self.collect_variables(service)?;
        info!("{}: {} variable(s) written", service.name, written);

        self.offer_export()
    }

    /// Ask for the environment and write its canonical value.
    ///
    /// Empty input selects [`Environment::Dev`]. Anything outside the closed
    /// set is an error and nothing is written.
    pub fn select_environment(&self) -> ApplicationResult<Environment> {
        let prompt = format!(
            "What environment would you like to set up? [{}]",
            Environment::menu()
        );
        let choice = self.ask(&prompt)?;

        let environment = if choice.is_empty() {
            self.prompter.say("defaulting to dev");
            Environment::default()
        } else {
            let environment: Environment = choice.parse()?;
            match environment {
                Environment::Dev => self.prompter.say("Setting up development environment"),
                other => self
                    .prompter
                    .say(&format!("Setting up {} environment", other)),
            }
            environment
        };

        let key = ConfigKey::new(ENVIRONMENT_SERVICE, ENVIRONMENT_VARIABLE);
        self.sink.set(&key, environment.canonical());
        Ok(environment)
    }

    /// Ask which service to configure.
    ///
    /// Returns `None` when the operator leaves the prompt empty.
    pub fn select_service(&self) -> ApplicationResult<Option<&'static Service>> {
        let prompt = format!(
            "What service would you like to configure? [{}]",
            Service::menu()
        );
        let choice = self.ask(&prompt)?;
        if choice.is_empty() {
            return Ok(None);
        }

        let service = Service::lookup(&choice)
            .ok_or(DomainError::UnsupportedService(choice))?;
        self.prompter
            .say(&format!("Setting up variables for {} service", service.name));
        Ok(Some(service))
    }

    /// Prompt for every variable of `service`, in catalog order.
    ///
    /// Empty answers keep the stored value; each non-empty answer is one
    /// sink write. Returns the number of writes.
    pub fn collect_variables(&self, service: &Service) -> ApplicationResult<usize> {
        let mut written = 0;
        for variable in service.variables {
            let value = self.ask(&format!("{}:", variable))?;
            if value.is_empty() {
                self.prompter.say("Leaving old value");
                continue;
            }
            let key = ConfigKey::new(service.name, *variable);
            debug!("collect_variables: writing {}", key);
            self.sink.set(&key, &value);
            written += 1;
        }
        self.prompter.say("Done");
        Ok(written)
    }

    /// Ask whether to export; only `y`/`Y` triggers the export.
    pub fn offer_export(&self) -> ApplicationResult<Outcome> {
        let answer = self.ask(EXPORT_PROMPT)?;
        if !answer.eq_ignore_ascii_case("y") {
            debug!("offer_export: declined with {:?}", answer);
            return Ok(Outcome::ExportDeclined);
        }
        self.export_snapshot()
    }

    /// Export the whole store and write it verbatim to the snapshot path.
    ///
    /// A sink without a snapshot leaves the file untouched.
    pub fn export_snapshot(&self) -> ApplicationResult<Outcome> {
        let path = self.snapshot_path.clone();
        let Some(contents) = self.sink.export_all() else {
            debug!("export_snapshot: no snapshot, {} untouched", path.display());
            self.prompter
                .say(&format!("Would save settings to {}", path.display()));
            return Ok(Outcome::ExportSkipped { path });
        };
        debug!(
            "export_snapshot: {} bytes -> {}",
            contents.len(),
            path.display()
        );

        self.fs
            .ensure_parent(&path)
            .with_path_context("create directory for", &path)?;
        self.fs
            .write(&path, &contents)
            .with_path_context("write snapshot", &path)?;

        self.prompter
            .success(&format!("Saved settings to {}", path.display()));
        Ok(Outcome::Exported { path })
    }

    fn ask(&self, prompt: &str) -> ApplicationResult<String> {
        self.prompter
            .ask(prompt)
            .with_context("read operator input")?
            .ok_or_else(|| ApplicationError::InputClosed {
                prompt: prompt.to_string(),
            })
    }
}
