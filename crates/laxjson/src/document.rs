use alloc::string::String;
use core::{fmt, str::FromStr};

use tracing::trace;

use crate::{
    builder::DocumentBuilder,
    error::ParseError,
    options::RenderOptions,
    tokenizer::{self, Span, SyntaxError, TokenConsumer},
    tree::{ChildKey, Node, NodeMut, Tree},
    visitor::Visitor,
};

/// A parsed or hand-built document: a [`Tree`] whose root is an object.
///
/// ```rust
/// use laxjson::Document;
///
/// let doc = Document::parse("{ 'Name' : 'Marco', 'Level' : 100, }").unwrap();
/// assert_eq!(doc.get("Name").get_string(), "Marco");
/// assert_eq!(doc.get("Level").get_number(), 100.0);
///
/// assert!(Document::parse("{ 'Name' : 'Marco' 'Level' : 100 }").is_err());
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Document {
    tree: Tree,
}

impl Document {
    /// An empty document to be filled through [`Document::root_mut`].
    #[must_use]
    pub fn create() -> Self {
        Self::default()
    }

    /// Parses the object at the start of `text`.
    ///
    /// Leading spaces, tabs and newlines are skipped. Parsing ends at the
    /// root object's closing brace and whatever follows it is ignored; use
    /// [`Document::parse_complete`] to reject it. Nothing of a failed parse
    /// is kept.
    ///
    /// ```rust
    /// use laxjson::Document;
    ///
    /// let doc = Document::parse("{ 'a': 1 } and then some").unwrap();
    /// assert_eq!(doc.get("a").get_number(), 1.0);
    /// ```
    ///
    /// # Errors
    ///
    /// Returns the first grammar violation found, located in `text`.
    pub fn parse(text: impl AsRef<[u8]>) -> Result<Self, ParseError> {
        Self::build(text.as_ref(), false)
    }

    /// Parses `text` as exactly one object, allowing only whitespace after
    /// it.
    ///
    /// # Errors
    ///
    /// Same as [`Document::parse`], plus
    /// [`SyntaxError::TrailingCharacters`] when anything else follows the
    /// root object.
    pub fn parse_complete(text: impl AsRef<[u8]>) -> Result<Self, ParseError> {
        Self::build(text.as_ref(), true)
    }

    fn build(input: &[u8], complete: bool) -> Result<Self, ParseError> {
        let mut builder = DocumentBuilder::new(input);
        let step = if complete {
            tokenizer::read_complete_document(&mut builder, input)
        } else {
            tokenizer::read_document(&mut builder, input)
        };
        let doc = builder.finish(step)?;
        trace!(
            bytes = input.len(),
            read = step.end,
            nodes = doc.tree.node_count(),
            "document parsed"
        );
        Ok(doc)
    }

    pub(crate) fn from_tree(tree: Tree) -> Self {
        Self { tree }
    }

    #[must_use]
    pub fn root(&self) -> Node<'_> {
        self.tree.root()
    }

    pub fn root_mut(&mut self) -> NodeMut<'_> {
        self.tree.root_mut()
    }

    /// Shorthand for `self.root().get(key)`.
    #[must_use]
    pub fn get<K: ChildKey>(&self, key: K) -> Node<'_> {
        self.root().get(key)
    }

    /// Walks the whole document, see [`visit`](crate::visit).
    pub fn visit<V: Visitor + ?Sized>(&self, visitor: &mut V) -> bool {
        self.root().visit(visitor)
    }

    #[must_use]
    pub fn render(&self, options: RenderOptions) -> String {
        self.tree.render(options)
    }

    #[must_use]
    pub fn tree(&self) -> &Tree {
        &self.tree
    }

    #[must_use]
    pub fn into_tree(self) -> Tree {
        self.tree
    }
}

impl From<Document> for Tree {
    fn from(doc: Document) -> Self {
        doc.tree
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.tree, f)
    }
}

impl FromStr for Document {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(any(test, feature = "serde"))]
impl serde::Serialize for Document {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serde::Serialize::serialize(&self.tree, serializer)
    }
}

#[derive(Default)]
struct FirstError(Option<(Span, SyntaxError)>);

impl TokenConsumer for FirstError {
    fn on_error(&mut self, span: Span, error: &SyntaxError) {
        self.0.get_or_insert_with(|| (span, error.clone()));
    }
}

/// Checks `text` against the grammar without building anything. Accepts
/// exactly what [`Document::parse`] accepts.
///
/// ```rust
/// assert!(laxjson::validate("{ 'a': [1, 2,] }").is_ok());
/// assert!(laxjson::validate("{ 'a': [,] }").is_err());
/// assert!(laxjson::validate("{ 'a': 1 } x").is_ok());
/// ```
///
/// # Errors
///
/// Returns the same error [`Document::parse`] would.
pub fn validate(text: impl AsRef<[u8]>) -> Result<(), ParseError> {
    let input = text.as_ref();
    let mut first = FirstError::default();
    let step = tokenizer::read_document(&mut first, input);
    match first.0 {
        Some((span, error)) if !step.is_ok() => Err(ParseError::new(input, span.end, error)),
        _ => Ok(()),
    }
}
