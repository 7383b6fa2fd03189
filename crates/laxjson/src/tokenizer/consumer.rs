use super::{Span, SyntaxError};

/// Receives the events recognized by the tokenizer.
///
/// Every method defaults to a no-op so an implementation only overrides the
/// events it cares about. Structural events carry the cursor position at
/// which they fire; leaf events carry the span of the lexeme together with
/// the raw, undecoded bytes it covers (delimiters included for strings).
///
/// `()` implements the trait with all defaults, which turns the tokenizer
/// into a validator:
///
/// ```
/// use laxjson::tokenizer::{self, ParseResult};
///
/// let step = tokenizer::read_object(&mut (), b"{ 'a': [1, 2,], }", 0);
/// assert_eq!(step.result, ParseResult::Ok);
/// ```
#[allow(unused_variables)]
pub trait TokenConsumer {
    fn on_begin_object(&mut self, at: usize) {}
    fn on_end_object(&mut self, at: usize) {}
    fn on_begin_array(&mut self, at: usize) {}
    fn on_end_array(&mut self, at: usize) {}
    /// Fires before every attempt to read an array item, including the
    /// attempt that finds no further item.
    fn on_new_array_item(&mut self, at: usize) {}
    fn on_begin_pair(&mut self, at: usize) {}
    fn on_end_pair(&mut self, at: usize) {}
    fn on_string(&mut self, span: Span, raw: &[u8]) {}
    fn on_number(&mut self, span: Span, raw: &[u8]) {}
    fn on_null(&mut self, span: Span) {}
    fn on_true(&mut self, span: Span) {}
    fn on_false(&mut self, span: Span) {}
    /// `span` runs from the start of the failing production to the failure
    /// point.
    fn on_error(&mut self, span: Span, error: &SyntaxError) {}
}

impl TokenConsumer for () {}

impl<C: TokenConsumer + ?Sized> TokenConsumer for &mut C {
    fn on_begin_object(&mut self, at: usize) {
        (**self).on_begin_object(at);
    }

    fn on_end_object(&mut self, at: usize) {
        (**self).on_end_object(at);
    }

    fn on_begin_array(&mut self, at: usize) {
        (**self).on_begin_array(at);
    }

    fn on_end_array(&mut self, at: usize) {
        (**self).on_end_array(at);
    }

    fn on_new_array_item(&mut self, at: usize) {
        (**self).on_new_array_item(at);
    }

    fn on_begin_pair(&mut self, at: usize) {
        (**self).on_begin_pair(at);
    }

    fn on_end_pair(&mut self, at: usize) {
        (**self).on_end_pair(at);
    }

    fn on_string(&mut self, span: Span, raw: &[u8]) {
        (**self).on_string(span, raw);
    }

    fn on_number(&mut self, span: Span, raw: &[u8]) {
        (**self).on_number(span, raw);
    }

    fn on_null(&mut self, span: Span) {
        (**self).on_null(span);
    }

    fn on_true(&mut self, span: Span) {
        (**self).on_true(span);
    }

    fn on_false(&mut self, span: Span) {
        (**self).on_false(span);
    }

    fn on_error(&mut self, span: Span, error: &SyntaxError) {
        (**self).on_error(span, error);
    }
}
