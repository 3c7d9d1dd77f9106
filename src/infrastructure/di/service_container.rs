//! Service container for dependency injection
//!
//! Wires up all services with their dependencies.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::application::services::CollectorService;
use crate::config::Settings;
use crate::infrastructure::sink::{DryRunSink, ToolConfigSink};
use crate::infrastructure::traits::{
    CommandRunner, ConfigSink, FileSystem, Prompter, RealCommandRunner, RealFileSystem,
    StdioPrompter,
};

/// Container holding all application services.
pub struct ServiceContainer {
    /// Application settings
    pub settings: Arc<Settings>,

    /// Directory the relative snapshot path is resolved against
    pub project_dir: PathBuf,

    /// Filesystem abstraction
    pub fs: Arc<dyn FileSystem>,

    /// Operator dialogue
    pub prompter: Arc<dyn Prompter>,

    /// Configuration store
    pub sink: Arc<dyn ConfigSink>,
}

impl ServiceContainer {
    /// Create a new service container with real implementations.
    ///
    /// A dry-run setting swaps the tool-backed sink for one that only prints.
    pub fn new(settings: Settings, project_dir: &Path) -> Self {
        let sink: Arc<dyn ConfigSink> = if settings.dry_run {
            Arc::new(DryRunSink::new(&settings.tool))
        } else {
            let cmd: Arc<dyn CommandRunner> = Arc::new(RealCommandRunner);
            Arc::new(ToolConfigSink::new(cmd, &settings.tool))
        };

        Self::with_deps(
            settings,
            project_dir,
            Arc::new(RealFileSystem),
            Arc::new(StdioPrompter::stdio()),
            sink,
        )
    }

    /// Create a service container with custom dependencies (for testing).
    pub fn with_deps(
        settings: Settings,
        project_dir: &Path,
        fs: Arc<dyn FileSystem>,
        prompter: Arc<dyn Prompter>,
        sink: Arc<dyn ConfigSink>,
    ) -> Self {
        Self {
            settings: Arc::new(settings),
            project_dir: project_dir.to_path_buf(),
            fs,
            prompter,
            sink,
        }
    }

    /// Snapshot path; relative settings paths live under the project directory.
    pub fn snapshot_path(&self) -> PathBuf {
        self.project_dir.join(&self.settings.snapshot_path)
    }

    /// Build the configuration collector.
    pub fn collector(&self) -> CollectorService {
        CollectorService::new(
            Arc::clone(&self.prompter),
            Arc::clone(&self.sink),
            Arc::clone(&self.fs),
            Arc::clone(&self.settings),
            self.snapshot_path(),
        )
    }
}
