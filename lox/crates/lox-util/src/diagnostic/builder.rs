//! Diagnostic builder for fluent diagnostic construction.

use super::{Diagnostic, DiagnosticCode, Handler, Span};

/// Builder for constructing diagnostics with a fluent API
///
/// # Examples
///
/// ```
/// use lox_util::diagnostic::{DiagnosticBuilder, DiagnosticCode, Handler};
/// use lox_util::Span;
///
/// let mut handler = Handler::new();
/// DiagnosticBuilder::error("Unterminated string.")
///     .code(DiagnosticCode::E_LEXER_UNTERMINATED_STRING)
///     .span(Span::new(0, 6, 1))
///     .emit(&mut handler);
///
/// assert_eq!(handler.error_count(), 1);
/// ```
#[must_use = "a diagnostic builder does nothing until it is emitted"]
pub struct DiagnosticBuilder {
    message: String,
    span: Span,
    code: Option<DiagnosticCode>,
}

impl DiagnosticBuilder {
    /// Create an error builder
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            span: Span::default(),
            code: None,
        }
    }

    /// Set the diagnostic code
    pub fn code(mut self, code: DiagnosticCode) -> Self {
        self.code = Some(code);
        self
    }

    /// Set the source span
    pub fn span(mut self, span: Span) -> Self {
        self.span = span;
        self
    }

    /// Build the diagnostic and hand it to `handler`
    pub fn emit(self, handler: &mut Handler) {
        let mut diagnostic = Diagnostic::error(self.message, self.span);
        diagnostic.code = self.code;
        handler.push(diagnostic);
    }
}
