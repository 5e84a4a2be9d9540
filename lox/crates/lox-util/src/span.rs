//! Span module - Source location tracking.
//!
//! A [`Span`] ties a diagnostic back to the text it came from: a byte range
//! into the source plus the 1-based line the scanner had reached.

/// Source location span
///
/// Byte offsets are half-open (`start..end`).
///
/// # Examples
///
/// ```
/// use lox_util::span::Span;
///
/// let source = "var answer = 42;";
/// let span = Span::new(4, 10, 1);
/// assert_eq!(&source[span.start..span.end], "answer");
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Span {
    /// Start byte offset in source
    pub start: usize,
    /// End byte offset in source (exclusive)
    pub end: usize,
    /// Line number (1-based)
    pub line: u32,
}

impl Span {
    /// Create a new span
    ///
    /// # Arguments
    ///
    /// * `start` - Start byte offset
    /// * `end` - End byte offset (exclusive)
    /// * `line` - Line number (1-based)
    #[inline]
    pub const fn new(start: usize, end: usize, line: u32) -> Self {
        Self { start, end, line }
    }

    /// Create a span that only knows its line
    ///
    /// Used by the `report(line, where, message)` entry point of the
    /// [`Handler`], which has no byte offsets.
    ///
    /// [`Handler`]: crate::Handler
    #[inline]
    pub const fn point(line: u32) -> Self {
        Self::new(0, 0, line)
    }
}
