//! lox-util - Shared foundation types for the Lox front end
//!
//! This crate holds the pieces every phase needs and that do not belong to
//! any single phase:
//!
//! - [`span`] - source locations (byte range plus 1-based line)
//! - [`diagnostic`] - structured diagnostics and the [`Handler`] that
//!   collects them
//!
//! Diagnostics are never written to a global. Each phase receives a
//! `&mut Handler`, pushes what it finds, and the caller decides when and where
//! to print them and which exit code a run ends with.
//!
//! # Example
//!
//! ```
//! use lox_util::Handler;
//!
//! let mut handler = Handler::new();
//! handler.error(3, "Unexpected character: @");
//!
//! assert!(handler.has_errors());
//! assert_eq!(
//!     handler.diagnostics()[0].to_string(),
//!     "[line 3] Error: Unexpected character: @"
//! );
//! ```

#![warn(missing_docs)]

pub mod diagnostic;
pub mod span;

pub use diagnostic::{Diagnostic, DiagnosticBuilder, DiagnosticCode, Handler};
pub use span::Span;
