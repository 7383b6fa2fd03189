//! Turns tokenizer events into a [`Tree`].
//!
//! The tokenizer's own recursion provides the nesting, so building needs no
//! stack: [`BuildContext`] only remembers the container new values go into
//! and the key waiting for its value. [`DocumentBuilder`] pairs that context
//! with the tree under construction and implements [`TokenConsumer`].

use alloc::{string::String, vec::Vec};

use bstr::ByteSlice;
use tracing::{debug, warn};

use crate::{
    document::Document,
    error::{ParseError, snippet},
    tokenizer::{ParseResult, Span, Step, SyntaxError, TokenConsumer},
    tree::{NodeId, NodeKind, Tree, Value},
};

/// Where the next value goes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildContext {
    current: Option<NodeId>,
    pending_key: Option<String>,
    key_expected: bool,
    rooted: bool,
}

impl BuildContext {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The container receiving new values; `None` before the root object
    /// opens and after it closes.
    #[must_use]
    pub fn current(&self) -> Option<NodeId> {
        self.current
    }

    /// The decoded key of the pair being read, until its value is added.
    #[must_use]
    pub fn pending_key(&self) -> Option<&str> {
        self.pending_key.as_deref()
    }

    /// Whether the next string is a key rather than a value.
    #[must_use]
    pub fn key_expected(&self) -> bool {
        self.key_expected
    }

    /// The first object becomes the root of `tree`; later ones are added to
    /// the current container and entered.
    pub fn begin_object(&mut self, tree: &mut Tree) {
        if !self.rooted {
            self.rooted = true;
            self.current = Some(NodeId::ROOT);
            return;
        }
        self.enter(tree, Value::Object(Vec::new()));
    }

    pub fn begin_array(&mut self, tree: &mut Tree) {
        self.enter(tree, Value::Array(Vec::new()));
    }

    /// Leaves the current container for its parent.
    pub fn end_container(&mut self, tree: &Tree) {
        self.current = self.current.and_then(|id| tree.parent_of(id));
    }

    pub fn new_array_item(&mut self) {
        self.pending_key = None;
        self.key_expected = false;
    }

    pub fn begin_pair(&mut self) {
        self.pending_key = None;
        self.key_expected = true;
    }

    /// Handles a raw string lexeme, delimiters included: a key when a pair
    /// has just begun, a value otherwise.
    pub fn string(&mut self, tree: &mut Tree, raw: &[u8]) {
        let text = decode_string(raw);
        if self.key_expected {
            self.pending_key = Some(text);
            self.key_expected = false;
        } else {
            self.add(tree, Value::String(text));
        }
    }

    /// Handles a raw number lexeme. Magnitudes beyond `f32` become
    /// infinities.
    pub fn number(&mut self, tree: &mut Tree, raw: &[u8]) {
        let text = raw.to_str_lossy();
        let value = text.parse::<f32>().unwrap_or_else(|_| {
            warn!(%text, "unreadable number stored as NaN");
            f32::NAN
        });
        self.add(tree, Value::Number(value));
    }

    pub fn null(&mut self, tree: &mut Tree) {
        self.add(tree, Value::Null);
    }

    pub fn boolean(&mut self, tree: &mut Tree, value: bool) {
        self.add(tree, Value::Bool(value));
    }

    fn enter(&mut self, tree: &mut Tree, value: Value) {
        if let Some(id) = self.add(tree, value) {
            self.current = Some(id);
        }
    }

    // Events the grammar cannot produce in this position are dropped rather
    // than treated as a usage error, so a hand-driven builder never panics.
    fn add(&mut self, tree: &mut Tree, value: Value) -> Option<NodeId> {
        let Some(parent) = self.current else {
            warn!(kind = ?value.kind(), "value outside of the root object ignored");
            return None;
        };

        let name = self.pending_key.take();
        let container = tree.node(parent).kind();
        let fits = match container {
            Some(NodeKind::Object) => name.is_some(),
            Some(NodeKind::Array) => name.is_none(),
            _ => false,
        };
        if !fits {
            warn!(?container, ?name, "value does not fit its container, ignored");
            return None;
        }
        Some(tree.push_child(parent, name.as_deref(), value))
    }
}

/// Decodes a raw string lexeme: strips the delimiters and resolves the
/// escapes `\" \\ \/ \b \f \n \r \t`. A `\u` escape is kept as written.
/// Invalid UTF-8 is replaced with U+FFFD.
pub(crate) fn decode_string(raw: &[u8]) -> String {
    let body = match raw {
        [_, body @ .., _] => body,
        _ => &[],
    };

    let mut out = Vec::with_capacity(body.len());
    let mut bytes = body.iter().copied();
    while let Some(b) = bytes.next() {
        if b != b'\\' {
            out.push(b);
            continue;
        }
        match bytes.next() {
            Some(b'b') => out.push(0x08),
            Some(b'f') => out.push(0x0c),
            Some(b'n') => out.push(b'\n'),
            Some(b'r') => out.push(b'\r'),
            Some(b't') => out.push(b'\t'),
            Some(b'u') => out.extend_from_slice(b"\\u"),
            Some(other) => out.push(other),
            None => out.push(b'\\'),
        }
    }

    String::from_utf8(out).unwrap_or_else(|e| e.as_bytes().to_str_lossy().into_owned())
}

/// A [`TokenConsumer`] building a [`Document`] from the events of one input.
///
/// Errors are logged and the first one is kept; the builder itself never
/// fails. Whether the parse succeeded is decided by the [`Step`] the
/// tokenizer returns, which [`DocumentBuilder::finish`] takes.
///
/// ```rust
/// use laxjson::{DocumentBuilder, tokenizer};
///
/// let input = b"{ 'a': [1, 2] }";
/// let mut builder = DocumentBuilder::new(input);
/// let step = tokenizer::read_document(&mut builder, input);
/// let doc = builder.finish(step).unwrap();
/// assert_eq!(doc.get("a").len(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct DocumentBuilder<'src> {
    input: &'src [u8],
    tree: Tree,
    ctx: BuildContext,
    first_error: Option<(Span, SyntaxError)>,
}

impl<'src> DocumentBuilder<'src> {
    /// A builder for events read from `input`, which is only used to
    /// describe errors.
    #[must_use]
    pub fn new(input: &'src [u8]) -> Self {
        Self {
            input,
            tree: Tree::object(),
            ctx: BuildContext::new(),
            first_error: None,
        }
    }

    #[must_use]
    pub fn context(&self) -> &BuildContext {
        &self.ctx
    }

    /// The tree built so far.
    #[must_use]
    pub fn tree(&self) -> &Tree {
        &self.tree
    }

    /// The first error reported, with the span of the failing production.
    #[must_use]
    pub fn first_error(&self) -> Option<(Span, &SyntaxError)> {
        self.first_error.as_ref().map(|(span, error)| (*span, error))
    }

    /// Completes the build with the outcome of the tokenizer run.
    ///
    /// Anything but [`ParseResult::Ok`] drops the partial tree and reports
    /// the first error seen. A bare `NoMatch` without any reported error
    /// means no document was found and is reported as
    /// [`SyntaxError::ExpectedObjectOpen`] at the cursor.
    pub fn finish(self, step: Step) -> Result<Document, ParseError> {
        match (step.result, self.first_error) {
            (ParseResult::Ok, _) => Ok(Document::from_tree(self.tree)),
            (_, Some((span, error))) => Err(ParseError::new(self.input, span.end, error)),
            (_, None) => Err(ParseError::new(
                self.input,
                step.end,
                SyntaxError::ExpectedObjectOpen,
            )),
        }
    }
}

impl TokenConsumer for DocumentBuilder<'_> {
    fn on_begin_object(&mut self, _at: usize) {
        self.ctx.begin_object(&mut self.tree);
    }

    fn on_end_object(&mut self, _at: usize) {
        self.ctx.end_container(&self.tree);
    }

    fn on_begin_array(&mut self, _at: usize) {
        self.ctx.begin_array(&mut self.tree);
    }

    fn on_end_array(&mut self, _at: usize) {
        self.ctx.end_container(&self.tree);
    }

    fn on_new_array_item(&mut self, _at: usize) {
        self.ctx.new_array_item();
    }

    fn on_begin_pair(&mut self, _at: usize) {
        self.ctx.begin_pair();
    }

    fn on_string(&mut self, _span: Span, raw: &[u8]) {
        self.ctx.string(&mut self.tree, raw);
    }

    fn on_number(&mut self, _span: Span, raw: &[u8]) {
        self.ctx.number(&mut self.tree, raw);
    }

    fn on_null(&mut self, _span: Span) {
        self.ctx.null(&mut self.tree);
    }

    fn on_true(&mut self, _span: Span) {
        self.ctx.boolean(&mut self.tree, true);
    }

    fn on_false(&mut self, _span: Span) {
        self.ctx.boolean(&mut self.tree, false);
    }

    fn on_error(&mut self, span: Span, error: &SyntaxError) {
        debug!(
            offset = span.end,
            snippet = %snippet(self.input, span.end),
            "parse error: {error}"
        );
        if self.first_error.is_none() {
            self.first_error = Some((span, error.clone()));
        }
    }
}
