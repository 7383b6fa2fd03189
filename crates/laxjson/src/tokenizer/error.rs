use thiserror::Error;

/// Broad classification of a [`SyntaxError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A bracket, brace, colon or comma is missing where the grammar needs
    /// one.
    Structural,
    /// A malformed number, string or keyword.
    Lexical,
    /// A container holding only separators, such as `[,]` or `{,}`.
    Empty,
}

/// A grammar violation reported by the tokenizer.
///
/// The `Display` output is the human-readable message handed to
/// [`TokenConsumer::on_error`](super::TokenConsumer::on_error).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SyntaxError {
    #[error("object must start with a '{{'")]
    ExpectedObjectOpen,
    #[error("object must end with a '}}'")]
    UnclosedObject,
    #[error("array must start with a '['")]
    ExpectedArrayOpen,
    #[error("array must end with a ']'")]
    UnclosedArray,
    #[error("key and value must be separated by a ':' in a pair")]
    MissingColon,
    #[error("pair is missing its value")]
    MissingPairValue,
    #[error("key must be a string starting with a '\"' or a '''")]
    ExpectedKey,
    #[error("unexpected characters after the document")]
    TrailingCharacters,

    #[error("string must start with a '\"' or a '''")]
    ExpectedString,
    #[error("reached the end of input while parsing a string")]
    UnterminatedString,
    #[error("unknown escape sequence '\\{0}'")]
    UnknownEscape(char),
    #[error("number must start with [0-9+-]")]
    ExpectedNumber,
    #[error("number sign must be followed by a digit")]
    DanglingSign,
    #[error("dot in numbers must be followed by one digit at least")]
    DanglingDecimalPoint,
    #[error("exponent in numbers must be followed by [0-9+-] and a digit")]
    MissingExponentDigit,
    #[error("syntax error, was expecting null, true or false")]
    UnknownKeyword,

    #[error("{0} holds a separator but no item")]
    EmptyContainer(&'static str),
}

impl SyntaxError {
    /// The class this error belongs to.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::ExpectedObjectOpen
            | Self::UnclosedObject
            | Self::ExpectedArrayOpen
            | Self::UnclosedArray
            | Self::MissingColon
            | Self::MissingPairValue
            | Self::ExpectedKey
            | Self::TrailingCharacters => ErrorKind::Structural,
            Self::ExpectedString
            | Self::UnterminatedString
            | Self::UnknownEscape(_)
            | Self::ExpectedNumber
            | Self::DanglingSign
            | Self::DanglingDecimalPoint
            | Self::MissingExponentDigit
            | Self::UnknownKeyword => ErrorKind::Lexical,
            Self::EmptyContainer(_) => ErrorKind::Empty,
        }
    }
}
