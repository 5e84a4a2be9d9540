//! Command-line interface definition.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Lox - scanner for the Lox programming language
#[derive(Parser, Debug)]
#[command(name = "lox")]
#[command(author = "Lox Team")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Tokenize Lox source files", long_about = None)]
#[command(propagate_version = true)]
#[command(disable_help_subcommand = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true, env = "LOX_VERBOSE")]
    pub verbose: bool,

    /// Path to configuration file
    #[arg(short, long, global = true, env = "LOX_CONFIG")]
    pub config: Option<PathBuf>,

    /// Disable color output
    #[arg(long, global = true, env = "LOX_NO_COLOR")]
    pub no_color: bool,

    /// Command to run
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands for the lox CLI.
#[derive(Subcommand, Debug, PartialEq)]
pub enum Commands {
    /// Scan a source file and print one token per line
    ///
    /// Lexical errors are written to stderr and make the run exit with
    /// status 65; the tokens that were recognised are still printed.
    Tokenize {
        /// Lox source file
        filename: Option<PathBuf>,
    },

    /// Scan lines typed at an interactive prompt
    Prompt,

    /// Any other command; rejected when run
    #[command(external_subcommand)]
    External(Vec<String>),
}
