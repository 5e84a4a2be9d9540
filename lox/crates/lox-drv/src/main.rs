//! Lox CLI - scans Lox source files.
//!
//! This is the main entry point for the `lox` binary. It is the only place
//! that decides the process exit status.

use std::process;

use clap::Parser;

use lox_drv::{run, Cli};

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            // --help and --version land here too, on stdout with status 0.
            let code = if err.use_stderr() { 1 } else { 0 };
            let _ = err.print();
            process::exit(code);
        },
    };

    if let Err(err) = run(cli) {
        if err.should_print() {
            eprintln!("{}", err);
        }
        process::exit(err.exit_code());
    }
}
