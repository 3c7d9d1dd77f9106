//! I/O boundary traits for testability
//!
//! These traits abstract external I/O operations, allowing services
//! to be tested with mock implementations.

use std::io::{self, BufRead, Write};
use std::path::Path;
use std::process::Output;
use std::sync::Mutex;

use colored::Colorize;

use crate::domain::ConfigKey;

/// Filesystem abstraction for testability.
pub trait FileSystem: Send + Sync {
    /// Write bytes to file, replacing any previous content.
    fn write(&self, path: &Path, content: &[u8]) -> io::Result<()>;

    /// Create parent directories if needed.
    fn ensure_parent(&self, path: &Path) -> io::Result<()>;
}

/// External command runner abstraction.
pub trait CommandRunner: Send + Sync {
    /// Run a command with arguments and capture its output.
    fn run(&self, cmd: &str, args: &[&str]) -> io::Result<Output>;
}

/// Line-oriented operator dialogue.
pub trait Prompter: Send + Sync {
    /// Show `prompt` and read one answer.
    /// Returns None when input is closed.
    fn ask(&self, prompt: &str) -> io::Result<Option<String>>;

    /// Show an informational line.
    fn say(&self, msg: &str);

    /// Show a completed action.
    fn success(&self, msg: &str) {
        self.say(msg);
    }

    /// Clear the screen before a session, where supported.
    fn clear(&self) {}
}

/// Write side of the external configuration store.
///
/// Implementations are fire-and-forget: failures of the external tool are
/// reported through logging only and never reach the caller.
pub trait ConfigSink: Send + Sync {
    /// Store `value` under `key`.
    fn set(&self, key: &ConfigKey, value: &str);

    /// Export the complete stored configuration in the tool's own format.
    /// Returns None when there is nothing to snapshot (dry run).
    fn export_all(&self) -> Option<Vec<u8>>;
}

// ============================================================
// REAL IMPLEMENTATIONS
// ============================================================

/// Real filesystem implementation.
#[derive(Debug, Default)]
pub struct RealFileSystem;

impl FileSystem for RealFileSystem {
    fn write(&self, path: &Path, content: &[u8]) -> io::Result<()> {
        std::fs::write(path, content)
    }

    fn ensure_parent(&self, path: &Path) -> io::Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        Ok(())
    }
}

/// Real command runner implementation.
#[derive(Debug, Default)]
pub struct RealCommandRunner;

impl CommandRunner for RealCommandRunner {
    fn run(&self, cmd: &str, args: &[&str]) -> io::Result<Output> {
        std::process::Command::new(cmd).args(args).output()
    }
}

/// Prompter over any line reader and writer.
///
/// Answers are returned without their line terminator; all other
/// whitespace is kept as typed.
pub struct LinePrompter<R, W> {
    input: Mutex<R>,
    output: Mutex<W>,
    terminal: bool,
}

/// Prompter bound to the process stdin/stdout.
pub type StdioPrompter = LinePrompter<io::BufReader<io::Stdin>, io::Stdout>;

impl StdioPrompter {
    pub fn stdio() -> Self {
        use std::io::IsTerminal;

        let terminal = io::stdout().is_terminal();
        LinePrompter::new(io::BufReader::new(io::stdin()), io::stdout()).with_terminal(terminal)
    }
}

impl<R, W> LinePrompter<R, W>
where
    R: BufRead + Send,
    W: Write + Send,
{
    pub fn new(input: R, output: W) -> Self {
        Self {
            input: Mutex::new(input),
            output: Mutex::new(output),
            terminal: false,
        }
    }

    /// Mark the output as an interactive terminal (enables screen clearing).
    pub fn with_terminal(mut self, terminal: bool) -> Self {
        self.terminal = terminal;
        self
    }

    /// Consume the prompter and return its reader and writer.
    pub fn into_parts(self) -> (R, W) {
        let input = self.input.into_inner().unwrap_or_else(|e| e.into_inner());
        let output = self.output.into_inner().unwrap_or_else(|e| e.into_inner());
        (input, output)
    }

    fn emit(&self, text: &str) {
        let mut out = self.output.lock().unwrap_or_else(|e| e.into_inner());
        // write errors are ignored
        let _ = out.write_all(text.as_bytes()).and_then(|_| out.flush());
    }
}

impl<R, W> Prompter for LinePrompter<R, W>
where
    R: BufRead + Send,
    W: Write + Send,
{
    fn ask(&self, prompt: &str) -> io::Result<Option<String>> {
        self.emit(&format!("{} ", prompt.cyan()));

        let mut line = String::new();
        let read = self
            .input
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .read_line(&mut line)?;
        if read == 0 {
            return Ok(None);
        }
        Ok(Some(strip_line_ending(line)))
    }

    fn say(&self, msg: &str) {
        self.emit(&format!("{}\n", msg));
    }

    fn success(&self, msg: &str) {
        self.emit(&format!("{} {}\n", "✓".green(), msg));
    }

    fn clear(&self) {
        if self.terminal {
            self.emit("\x1b[2J\x1b[H");
        }
    }
}

fn strip_line_ending(mut line: String) -> String {
    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }
    line
}
