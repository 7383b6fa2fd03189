use alloc::string::String;

use bstr::ByteSlice;
use thiserror::Error;

use crate::tokenizer::{ErrorKind, SyntaxError};

/// Longest stretch of input kept in [`ParseError::snippet`].
pub(crate) const SNIPPET_LEN: usize = 63;

/// Why [`Document::parse`](crate::Document::parse) or
/// [`validate`](crate::validate) rejected an input, and where.
///
/// Lines and columns are 1-based. Only `\n` starts a new line, and columns
/// count characters, not bytes.
///
/// ```rust
/// use laxjson::{Document, ErrorKind};
///
/// let err = Document::parse("{\n  'a': 1,\n  'b': 1e\n}").unwrap_err();
/// assert_eq!(err.to_string(), "exponent in numbers must be followed by [0-9+-] and a digit at 3:10");
/// assert_eq!(err.kind(), ErrorKind::Lexical);
/// assert_eq!(err.snippet(), "{\n  'a': 1,\n  'b': 1e");
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{source} at {line}:{column}")]
pub struct ParseError {
    pub source: SyntaxError,
    /// Byte offset of the failure point.
    pub offset: usize,
    pub line: usize,
    pub column: usize,
    snippet: String,
}

impl ParseError {
    pub(crate) fn new(input: &[u8], offset: usize, source: SyntaxError) -> Self {
        let offset = offset.min(input.len());
        let before = &input[..offset];
        let line_start = before.rfind_byte(b'\n').map_or(0, |nl| nl + 1);

        Self {
            source,
            offset,
            line: before.find_iter(b"\n").count() + 1,
            column: before[line_start..].chars().count() + 1,
            snippet: snippet(input, offset),
        }
    }

    #[must_use]
    pub fn syntax_error(&self) -> &SyntaxError {
        &self.source
    }

    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        self.source.kind()
    }

    /// Up to 63 bytes of input ending at the failure point, decoded lossily.
    #[must_use]
    pub fn snippet(&self) -> &str {
        &self.snippet
    }
}

/// The input right before `offset`, at most [`SNIPPET_LEN`] bytes long.
pub(crate) fn snippet(input: &[u8], offset: usize) -> String {
    let end = offset.min(input.len());
    let start = end.saturating_sub(SNIPPET_LEN);
    input[start..end].to_str_lossy().into_owned()
}
