//! Diagnostic module - Error reporting infrastructure.
//!
//! A [`Diagnostic`] is a structured, line-stamped error message. A
//! [`Handler`] collects them in the order they were reported. Nothing here
//! prints: the driver reads the handler and writes each diagnostic to its
//! side channel, where it renders as
//!
//! ```text
//! [line <N>] Error<where>: <message>
//! ```
//!
//! # Examples
//!
//! ```
//! use lox_util::diagnostic::Handler;
//!
//! let mut handler = Handler::new();
//! handler.report(2, " at end", "Expect ';' after value.");
//! handler.error(4, "Unterminated string.");
//!
//! let rendered: Vec<String> = handler
//!     .diagnostics()
//!     .iter()
//!     .map(ToString::to_string)
//!     .collect();
//! assert_eq!(
//!     rendered,
//!     [
//!         "[line 2] Error at end: Expect ';' after value.",
//!         "[line 4] Error: Unterminated string.",
//!     ]
//! );
//! ```

mod builder;
mod codes;

pub use builder::DiagnosticBuilder;
pub use codes::DiagnosticCode;

use crate::Span;
use std::fmt;

/// An error diagnostic with its location
#[derive(Clone, Debug, PartialEq)]
pub struct Diagnostic {
    /// Main diagnostic message
    pub message: String,
    /// Source location
    pub span: Span,
    /// Text inserted between `Error` and the colon, e.g. `" at end"`
    pub location: String,
    /// Optional diagnostic code
    pub code: Option<DiagnosticCode>,
}

impl Diagnostic {
    /// Create an error diagnostic
    ///
    /// # Examples
    ///
    /// ```
    /// use lox_util::{Diagnostic, Span};
    ///
    /// let diag = Diagnostic::error("something went wrong", Span::point(1));
    /// assert_eq!(diag.to_string(), "[line 1] Error: something went wrong");
    /// ```
    pub fn error(message: impl Into<String>, span: Span) -> Self {
        Self {
            message: message.into(),
            span,
            location: String::new(),
            code: None,
        }
    }

    /// Set the location fragment
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = location.into();
        self
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[line {}] Error{}: {}",
            self.span.line, self.location, self.message
        )
    }
}

/// Handler for collecting diagnostics
///
/// The handler is the per-run replacement for a process-wide "had error"
/// flag: each scan gets its own handler, and the run fails if
/// [`Handler::has_errors`] is true once scanning is done. Diagnostics are kept
/// in report order and only dropped by [`Handler::clear`].
#[derive(Debug, Default)]
pub struct Handler {
    diagnostics: Vec<Diagnostic>,
}

impl Handler {
    /// Create a new handler
    pub fn new() -> Self {
        Self {
            diagnostics: Vec::new(),
        }
    }

    /// Report an error at `line` with a location fragment
    ///
    /// The rendered form is `[line <line>] Error<location>: <message>`.
    pub fn report(&mut self, line: u32, location: impl Into<String>, message: impl Into<String>) {
        let diag = Diagnostic::error(message, Span::point(line)).with_location(location);
        self.push(diag);
    }

    /// Report an error at `line` with no location fragment
    ///
    /// # Examples
    ///
    /// ```
    /// use lox_util::diagnostic::Handler;
    ///
    /// let mut handler = Handler::new();
    /// handler.error(1, "Unexpected character: #");
    /// assert_eq!(handler.error_count(), 1);
    /// ```
    pub fn error(&mut self, line: u32, message: impl Into<String>) {
        self.report(line, "", message);
    }

    fn push(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    /// Check if any errors have been reported
    pub fn has_errors(&self) -> bool {
        !self.diagnostics.is_empty()
    }

    /// Get the number of errors
    pub fn error_count(&self) -> usize {
        self.diagnostics.len()
    }

    /// Get all diagnostics in report order
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Clear all diagnostics
    pub fn clear(&mut self) {
        self.diagnostics.clear();
    }
}
