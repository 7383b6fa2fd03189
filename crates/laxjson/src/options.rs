/// Layout options for [`Renderer`](crate::Renderer) and
/// [`Tree::render`](crate::Tree::render).
///
/// The produced text always uses the permissive grammar accepted by
/// [`Document::parse`](crate::Document::parse): strings and names in single
/// quotes (double quotes when the text itself contains a single quote),
/// `name: value` pairs and a comma after every element except the last one of
/// its container.
///
/// # Examples
///
/// ```rust
/// use laxjson::{Document, RenderOptions};
///
/// let doc = Document::parse("{ 'pets': ['Yoda', 'Doki'] }").unwrap();
///
/// assert_eq!(
///     doc.render(RenderOptions::default()),
///     "{'pets': ['Yoda', 'Doki']}"
/// );
/// assert_eq!(
///     doc.render(RenderOptions::pretty(2)),
///     "{\n  'pets': [\n    'Yoda',\n    'Doki'\n  ]\n}\n"
/// );
/// ```
///
/// # Default
///
/// Compact output on a single line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct RenderOptions {
    /// Whether every element goes on its own line.
    ///
    /// When `false`, siblings are separated by `", "` and no newline is
    /// written at all.
    ///
    /// # Default
    ///
    /// `false`
    pub line_breaks: bool,

    /// Number of spaces per nesting level. Only used together with
    /// `line_breaks`, and capped at [`RenderOptions::MAX_INDENT`].
    ///
    /// # Default
    ///
    /// `0`
    pub indent: usize,
}

impl RenderOptions {
    /// Widest indent a single nesting level gets.
    pub const MAX_INDENT: usize = 32;

    /// One element per line, nested levels indented by `indent` spaces.
    #[must_use]
    pub const fn pretty(indent: usize) -> Self {
        Self {
            line_breaks: true,
            indent,
        }
    }

    /// Spaces in front of an element nested `level` deep.
    pub(crate) fn indent_width(&self, level: usize) -> usize {
        level.saturating_mul(self.indent.min(Self::MAX_INDENT))
    }
}
