//! Push-style recursive-descent tokenizer for the permissive JSON grammar.
//!
//! Each grammar production is a free function taking a [`TokenConsumer`], the
//! input bytes and a cursor (byte offset). Productions never allocate or build
//! any structure: every recognized unit is reported to the consumer as an
//! event carrying its [`Span`], and the production returns a [`Step`] holding
//! the outcome and the updated cursor.
//!
//! Grammar
//! - strings are delimited by `"` or `'`, and end only at the delimiter they
//!   started with; the escapes `\" \\ \/ \b \f \n \r \t \u` are recognized
//!   but not decoded,
//! - numbers follow `[+-]? digit+ ('.' digit+)? ([eE] [+-]? digit+)?`,
//! - `null`, `true` and `false` match in any letter case,
//! - arrays and objects accept one trailing comma after at least one item,
//! - whitespace is exactly space, tab and newline.
//!
//! The end of the buffer terminates the input.
//!
//! ```
//! use laxjson::tokenizer::{self, ParseResult};
//!
//! let step = tokenizer::read_number(&mut (), b"123e", 0);
//! assert_eq!(step.result, ParseResult::Error);
//! assert_eq!(step.end, 4);
//! ```

mod consumer;
mod error;

pub use consumer::TokenConsumer;
pub use error::{ErrorKind, SyntaxError};

/// Escape characters accepted after a backslash inside a string.
const ESCAPES: &[u8] = b"\"\\/bfnrtu";

/// Outcome of a grammar production.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParseResult {
    /// The production failed; the consumer has seen an error event.
    Error,
    /// No production matched at the cursor. Only [`read_value`] reports this.
    NoMatch,
    /// The production matched.
    Ok,
}

/// Result of running a production: the outcome and where the cursor ended.
///
/// On `Ok` the cursor sits right after the recognized unit, on `Error` at the
/// failure point, and on `NoMatch` at the first non-whitespace byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Step {
    pub result: ParseResult,
    pub end: usize,
}

impl Step {
    const fn ok(end: usize) -> Self {
        Self {
            result: ParseResult::Ok,
            end,
        }
    }

    const fn no_match(end: usize) -> Self {
        Self {
            result: ParseResult::NoMatch,
            end,
        }
    }

    const fn error(end: usize) -> Self {
        Self {
            result: ParseResult::Error,
            end,
        }
    }

    #[must_use]
    pub fn is_ok(&self) -> bool {
        self.result == ParseResult::Ok
    }

    #[must_use]
    pub fn is_error(&self) -> bool {
        self.result == ParseResult::Error
    }
}

/// Half-open byte range `[start, end)` into the input buffer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    #[must_use]
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.end - self.start
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// The bytes covered by this span.
    ///
    /// # Panics
    ///
    /// Panics if the span lies outside `input`.
    #[must_use]
    pub fn slice<'a>(&self, input: &'a [u8]) -> &'a [u8] {
        &input[self.start..self.end]
    }
}

#[inline]
fn peek(input: &[u8], pos: usize) -> Option<u8> {
    input.get(pos).copied()
}

#[inline]
fn is_digit(byte: Option<u8>) -> bool {
    byte.is_some_and(|b| b.is_ascii_digit())
}

fn skip_digits(input: &[u8], mut pos: usize) -> usize {
    while is_digit(peek(input, pos)) {
        pos += 1;
    }
    pos
}

fn fail<C: TokenConsumer + ?Sized>(
    consumer: &mut C,
    start: usize,
    at: usize,
    error: SyntaxError,
) -> Step {
    consumer.on_error(Span::new(start, at), &error);
    Step::error(at)
}

/// Returns the position of the first byte at or after `pos` that is not a
/// space, tab or newline.
#[must_use]
pub fn skip_whitespace(input: &[u8], mut pos: usize) -> usize {
    while matches!(peek(input, pos), Some(b' ' | b'\t' | b'\n')) {
        pos += 1;
    }
    pos
}

#[must_use]
pub fn is_one_of(byte: u8, set: &[u8]) -> bool {
    set.contains(&byte)
}

#[must_use]
pub fn is_string_delimiter(byte: u8) -> bool {
    byte == b'"' || byte == b'\''
}

/// Reads a number lexeme and reports it through
/// [`TokenConsumer::on_number`]. Interpreting the digits is left to the
/// consumer.
pub fn read_number<C: TokenConsumer + ?Sized>(consumer: &mut C, input: &[u8], pos: usize) -> Step {
    let start = pos;
    let mut cur = pos;

    match peek(input, cur) {
        Some(b'+' | b'-') => {
            cur += 1;
            if !is_digit(peek(input, cur)) {
                return fail(consumer, start, cur, SyntaxError::DanglingSign);
            }
        }
        Some(b'0'..=b'9') => {}
        _ => return fail(consumer, start, cur, SyntaxError::ExpectedNumber),
    }
    cur = skip_digits(input, cur);

    if peek(input, cur) == Some(b'.') {
        cur += 1;
        if !is_digit(peek(input, cur)) {
            return fail(consumer, start, cur, SyntaxError::DanglingDecimalPoint);
        }
        cur = skip_digits(input, cur);
    }

    if matches!(peek(input, cur), Some(b'e' | b'E')) {
        cur += 1;
        if matches!(peek(input, cur), Some(b'+' | b'-')) {
            cur += 1;
        }
        if !is_digit(peek(input, cur)) {
            return fail(consumer, start, cur, SyntaxError::MissingExponentDigit);
        }
        cur = skip_digits(input, cur);
    }

    let span = Span::new(start, cur);
    consumer.on_number(span, span.slice(input));
    Step::ok(cur)
}

fn matches_ignore_case(input: &[u8], pos: usize, word: &[u8]) -> bool {
    input
        .get(pos..pos + word.len())
        .is_some_and(|s| s.eq_ignore_ascii_case(word))
}

/// Reads `null`, `true` or `false` in any letter case.
pub fn read_keyword<C: TokenConsumer + ?Sized>(
    consumer: &mut C,
    input: &[u8],
    pos: usize,
) -> Step {
    if matches_ignore_case(input, pos, b"null") {
        let span = Span::new(pos, pos + 4);
        consumer.on_null(span);
        return Step::ok(span.end);
    }
    if matches_ignore_case(input, pos, b"true") {
        let span = Span::new(pos, pos + 4);
        consumer.on_true(span);
        return Step::ok(span.end);
    }
    if matches_ignore_case(input, pos, b"false") {
        let span = Span::new(pos, pos + 5);
        consumer.on_false(span);
        return Step::ok(span.end);
    }
    fail(consumer, pos, pos, SyntaxError::UnknownKeyword)
}

/// Reads a delimited string. The reported span includes both delimiters.
pub fn read_string<C: TokenConsumer + ?Sized>(consumer: &mut C, input: &[u8], pos: usize) -> Step {
    let start = pos;
    let Some(delimiter) = peek(input, pos).filter(|&b| is_string_delimiter(b)) else {
        return fail(consumer, start, pos, SyntaxError::ExpectedString);
    };

    let mut cur = pos + 1;
    loop {
        match peek(input, cur) {
            None => return fail(consumer, start, cur, SyntaxError::UnterminatedString),
            Some(b'\\') => {
                cur += 1;
                match peek(input, cur) {
                    None => return fail(consumer, start, cur, SyntaxError::UnterminatedString),
                    Some(b) if is_one_of(b, ESCAPES) => cur += 1,
                    Some(_) => {
                        let (ch, _) = bstr::decode_utf8(&input[cur..]);
                        let ch = ch.unwrap_or(char::REPLACEMENT_CHARACTER);
                        return fail(consumer, start, cur, SyntaxError::UnknownEscape(ch));
                    }
                }
            }
            Some(b) if b == delimiter => {
                cur += 1;
                let span = Span::new(start, cur);
                consumer.on_string(span, span.slice(input));
                return Step::ok(cur);
            }
            Some(_) => cur += 1,
        }
    }
}

/// Skips whitespace and reads whichever value production matches the next
/// byte. Returns `NoMatch` when no value starts there, which array and
/// object loops use to detect the end of their items.
pub fn read_value<C: TokenConsumer + ?Sized>(consumer: &mut C, input: &[u8], pos: usize) -> Step {
    let cur = skip_whitespace(input, pos);
    match peek(input, cur) {
        Some(b) if is_string_delimiter(b) => read_string(consumer, input, cur),
        Some(b'{') => read_object(consumer, input, cur),
        Some(b'[') => read_array(consumer, input, cur),
        Some(b'0'..=b'9' | b'+' | b'-') => read_number(consumer, input, cur),
        Some(b) if is_one_of(b, b"nNtTfF") => read_keyword(consumer, input, cur),
        _ => Step::no_match(cur),
    }
}

/// Reads `[ value, value, ... ]`, accepting one trailing comma.
pub fn read_array<C: TokenConsumer + ?Sized>(consumer: &mut C, input: &[u8], pos: usize) -> Step {
    let start = pos;
    if peek(input, pos) != Some(b'[') {
        return fail(consumer, start, pos, SyntaxError::ExpectedArrayOpen);
    }
    consumer.on_begin_array(pos);

    let mut cur = pos + 1;
    let mut items = 0usize;
    loop {
        if items > 0 {
            // a separating comma must come before any further item
            cur = skip_whitespace(input, cur);
            if peek(input, cur) != Some(b',') {
                break;
            }
            cur += 1;
        }

        cur = skip_whitespace(input, cur);
        consumer.on_new_array_item(cur);

        let step = read_value(consumer, input, cur);
        cur = step.end;
        match step.result {
            ParseResult::Ok => items += 1,
            ParseResult::NoMatch => break,
            ParseResult::Error => return step,
        }
    }

    if peek(input, cur) != Some(b']') {
        let error = if items == 0 && peek(input, cur) == Some(b',') {
            SyntaxError::EmptyContainer("array")
        } else {
            SyntaxError::UnclosedArray
        };
        return fail(consumer, start, cur, error);
    }

    cur += 1;
    consumer.on_end_array(cur);
    Step::ok(cur)
}

/// Reads `'key' : value`.
pub fn read_pair<C: TokenConsumer + ?Sized>(consumer: &mut C, input: &[u8], pos: usize) -> Step {
    let start = pos;
    if !peek(input, pos).is_some_and(is_string_delimiter) {
        return fail(consumer, start, pos, SyntaxError::ExpectedKey);
    }
    consumer.on_begin_pair(pos);

    let key = read_string(consumer, input, pos);
    if !key.is_ok() {
        return key;
    }

    let mut cur = skip_whitespace(input, key.end);
    if peek(input, cur) != Some(b':') {
        return fail(consumer, start, cur, SyntaxError::MissingColon);
    }
    cur = skip_whitespace(input, cur + 1);

    let value = read_value(consumer, input, cur);
    match value.result {
        ParseResult::Ok => {
            consumer.on_end_pair(value.end);
            value
        }
        ParseResult::NoMatch => fail(consumer, start, value.end, SyntaxError::MissingPairValue),
        ParseResult::Error => value,
    }
}

/// Reads `{ pair, pair, ... }`, accepting one trailing comma.
pub fn read_object<C: TokenConsumer + ?Sized>(consumer: &mut C, input: &[u8], pos: usize) -> Step {
    let start = pos;
    if peek(input, pos) != Some(b'{') {
        return fail(consumer, start, pos, SyntaxError::ExpectedObjectOpen);
    }
    consumer.on_begin_object(pos);

    let mut cur = pos + 1;
    let mut pairs = 0usize;
    loop {
        if pairs > 0 {
            cur = skip_whitespace(input, cur);
            if peek(input, cur) != Some(b',') {
                break;
            }
            cur += 1;
        }

        cur = skip_whitespace(input, cur);
        match peek(input, cur) {
            Some(b'}') => break,
            Some(b',') if pairs == 0 => {
                return fail(consumer, start, cur, SyntaxError::EmptyContainer("object"));
            }
            _ => {}
        }

        let step = read_pair(consumer, input, cur);
        if !step.is_ok() {
            return step;
        }
        cur = step.end;
        pairs += 1;
    }

    if peek(input, cur) != Some(b'}') {
        return fail(consumer, start, cur, SyntaxError::UnclosedObject);
    }

    cur += 1;
    consumer.on_end_object(cur);
    Step::ok(cur)
}

/// Reads a document: optional whitespace, then one object. Whatever follows
/// the closing brace is left unread, and the returned cursor points right
/// after it.
pub fn read_document<C: TokenConsumer + ?Sized>(consumer: &mut C, input: &[u8]) -> Step {
    let start = skip_whitespace(input, 0);
    read_object(consumer, input, start)
}

/// Like [`read_document`], but only whitespace may follow the object; any
/// other byte is a [`SyntaxError::TrailingCharacters`] error.
pub fn read_complete_document<C: TokenConsumer + ?Sized>(
    consumer: &mut C,
    input: &[u8],
) -> Step {
    let step = read_document(consumer, input);
    if !step.is_ok() {
        return step;
    }

    let rest = skip_whitespace(input, step.end);
    if rest < input.len() {
        return fail(consumer, step.end, rest, SyntaxError::TrailingCharacters);
    }
    Step::ok(rest)
}
