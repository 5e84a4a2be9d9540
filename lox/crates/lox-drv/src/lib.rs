//! lox-drv - Driver for the Lox scanner
//!
//! This crate wires the lexer to the outside world: it parses the command
//! line, loads configuration, sets up logging, reads source text and writes
//! the token dump and diagnostics.
//!
//! # Output
//!
//! Tokens go to the output stream, one per line, in the form
//! `<KIND> <lexeme> <literal>`, always ending with `EOF  null`. Diagnostics go
//! to the error stream as `[line <N>] Error: <message>`, before the tokens of
//! the same source.
//!
//! # Example
//!
//! ```
//! use lox_drv::{Config, Session};
//!
//! let mut session = Session::new(Config::default());
//! let mut out = Vec::new();
//! let mut err = Vec::new();
//! session.run("(1)", &mut out, &mut err).unwrap();
//!
//! assert_eq!(
//!     String::from_utf8(out).unwrap(),
//!     "LEFT_PAREN ( null\nNUMBER 1 1\nRIGHT_PAREN ) null\nEOF  null\n"
//! );
//! assert!(err.is_empty());
//! ```

#![warn(missing_docs)]

pub mod cli;
pub mod config;
pub mod error;
pub mod logging;

use std::borrow::Cow;
use std::io::{self, BufRead, Write};
use std::path::Path;

use lox_lex::tokenize;
use lox_util::Handler;

pub use cli::{Cli, Commands};
pub use config::Config;
pub use error::{DriverError, Result};

/// A scanning session.
///
/// The session owns the diagnostic handler for everything it scans. A file
/// run fails if the handler holds any error when the scan ends; the prompt
/// clears it before each line.
pub struct Session {
    config: Config,
    handler: Handler,
}

impl Session {
    /// Creates a session with an empty handler.
    pub fn new(config: Config) -> Self {
        Self {
            config,
            handler: Handler::new(),
        }
    }

    /// The session's configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Diagnostics collected so far.
    pub fn handler(&self) -> &Handler {
        &self.handler
    }

    /// Scans `source`, writing diagnostics to `err` and then every token to
    /// `out`.
    ///
    /// Lexical errors are recorded in the handler, not returned.
    pub fn run<W: Write, E: Write>(&mut self, source: &str, out: &mut W, err: &mut E) -> Result<()> {
        let already_reported = self.handler.diagnostics().len();
        let tokens = tokenize(source, &mut self.handler);

        for diagnostic in &self.handler.diagnostics()[already_reported..] {
            if let Some(code) = diagnostic.code {
                tracing::debug!(%code, line = diagnostic.span.line, "lexical error");
            }
            writeln!(err, "{}", diagnostic)?;
        }
        err.flush()?;

        for token in &tokens {
            writeln!(out, "{}", token)?;
        }
        out.flush()?;
        Ok(())
    }

    /// Reads and scans the file at `path`.
    ///
    /// # Errors
    ///
    /// [`DriverError::Io`] if the file cannot be read, and
    /// [`DriverError::LexicalErrors`] if the scan reported any error. The
    /// tokens are written either way.
    pub fn run_file<W: Write, E: Write>(&mut self, path: &Path, out: &mut W, err: &mut E) -> Result<()> {
        tracing::debug!(path = %path.display(), "reading source file");
        let bytes = std::fs::read(path).map_err(|source| DriverError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(bytes = bytes.len(), "source file read");

        self.run(&decode(&bytes), out, err)?;

        if self.handler.has_errors() {
            let count = self.handler.error_count();
            tracing::debug!(errors = count, "scan reported lexical errors");
            return Err(DriverError::LexicalErrors(count));
        }
        Ok(())
    }

    /// Runs the interactive prompt until `input` is exhausted.
    ///
    /// Each line is scanned on its own: errors on one line are printed but do
    /// not affect later lines or the exit status.
    pub fn run_prompt<R: BufRead, W: Write, E: Write>(
        &mut self,
        mut input: R,
        out: &mut W,
        err: &mut E,
    ) -> Result<()> {
        write_prompt(out, &self.config.prompt.prompt)?;

        let mut buf = Vec::new();
        loop {
            buf.clear();
            if input.read_until(b'\n', &mut buf)? == 0 {
                break;
            }
            let decoded = decode(&buf);
            let line = decoded.strip_suffix('\n').unwrap_or(&decoded);
            let line = line.strip_suffix('\r').unwrap_or(line);

            self.handler.clear();
            self.run(line, out, err)?;
            write_prompt(out, &self.config.prompt.prompt)?;
        }

        write!(out, "{}", self.config.prompt.exit_message)?;
        out.flush()?;
        Ok(())
    }
}

/// Decodes source bytes, replacing each invalid UTF-8 sequence with U+FFFD.
///
/// The lexer then reports every replacement as an unexpected character.
fn decode(bytes: &[u8]) -> Cow<'_, str> {
    let text = String::from_utf8_lossy(bytes);
    if let Cow::Owned(_) = text {
        tracing::debug!("source is not valid UTF-8, invalid bytes replaced");
    }
    text
}

fn write_prompt<W: Write>(out: &mut W, prompt: &str) -> io::Result<()> {
    write!(out, "{}", prompt)?;
    out.flush()
}

/// Executes the parsed command line against the process's standard streams.
///
/// Loads configuration, initializes logging and dispatches the command.
pub fn run(cli: Cli) -> Result<()> {
    let (config, config_path) = Config::load(cli.config.as_deref())?;

    logging::init_logging(cli.verbose || config.verbose, cli.no_color)?;
    match &config_path {
        Some(path) => tracing::debug!(path = %path.display(), "configuration loaded"),
        None => tracing::debug!("no configuration file found, using defaults"),
    }

    let stdin = io::stdin();
    let stdout = io::stdout();
    let stderr = io::stderr();
    execute_command(
        cli.command,
        config,
        stdin.lock(),
        &mut stdout.lock(),
        &mut stderr.lock(),
    )
}

/// Dispatches `command` with explicit streams.
pub fn execute_command<R: BufRead, W: Write, E: Write>(
    command: Option<Commands>,
    config: Config,
    input: R,
    out: &mut W,
    err: &mut E,
) -> Result<()> {
    let mut session = Session::new(config);

    match command {
        Some(Commands::Tokenize {
            filename: Some(path),
        }) => {
            tracing::debug!(command = "tokenize", "dispatching command");
            session.run_file(&path, out, err)
        },
        Some(Commands::Prompt) => {
            tracing::debug!(command = "prompt", "dispatching command");
            session.run_prompt(input, out, err)
        },
        Some(Commands::External(args)) => Err(DriverError::UnknownCommand(
            args.into_iter().next().unwrap_or_default(),
        )),
        Some(Commands::Tokenize { filename: None }) | None => Err(DriverError::Usage),
    }
}
