//! Command dispatch

use std::io;
use std::path::PathBuf;

use clap::CommandFactory;
use clap_complete::generate;
use tracing::{debug, instrument};

use crate::cli::args::Cli;
use crate::cli::output;
use crate::cli::{CliError, CliResult};
use crate::config::Settings;
use crate::domain::Outcome;
use crate::infrastructure::di::ServiceContainer;

pub fn execute_command(cli: &Cli) -> CliResult<()> {
    if let Some(generator) = cli.generator {
        let mut cmd = Cli::command();
        let name = cmd.get_name().to_string();
        generate(generator, &mut cmd, name, &mut io::stdout());
        return Ok(());
    }
    if cli.config_template {
        output::info(&Settings::template());
        return Ok(());
    }

    let project_dir = resolve_project_dir(cli)?;
    let mut settings = Settings::load(Some(&project_dir))?;
    if cli.dry_run {
        settings.dry_run = true;
    }

    if cli.show_config {
        output::info(&settings.to_toml()?);
        return Ok(());
    }

    let container = ServiceContainer::new(settings, &project_dir);
    run_session(&container)
}

#[instrument(skip(container), fields(project_dir = %container.project_dir.display()))]
fn run_session(container: &ServiceContainer) -> CliResult<()> {
    let outcome = container.collector().run()?;
    match outcome {
        Outcome::Exported { path } => debug!("session done, snapshot at {}", path.display()),
        Outcome::ExportSkipped { path } => {
            debug!("session done, dry run left {} untouched", path.display())
        }
        Outcome::ExportDeclined => debug!("session done, snapshot declined"),
        Outcome::Aborted => debug!("session aborted at service prompt"),
    }
    Ok(())
}

fn resolve_project_dir(cli: &Cli) -> CliResult<PathBuf> {
    match &cli.project_dir {
        Some(dir) if dir.is_dir() => Ok(dir.clone()),
        Some(dir) => Err(CliError::Usage(format!(
            "project directory does not exist: {}",
            dir.display()
        ))),
        None => Ok(PathBuf::from(".")),
    }
}
