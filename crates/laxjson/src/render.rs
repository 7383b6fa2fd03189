//! Writes a tree back out as text.
//!
//! Rendering is just another [`Visitor`]: [`Renderer`] prints each node as the
//! walk reaches it, so the output order is the depth-first order of the tree.
//! Everything it produces is accepted again by
//! [`Document::parse`](crate::Document::parse), and parsing the rendered text
//! of a parsed document yields an equal tree as long as every number is finite.
//!
//! Numbers are printed with the shortest representation that reads back to
//! the same `f32`. Infinities are written as `1e39` and `-1e39`, which read
//! back as infinities; NaN has no spelling in the grammar and is written as
//! `null`.

use alloc::string::String;
use core::fmt::{self, Write};

use crate::{options::RenderOptions, tree::Node, visitor::Visitor};

/// A [`Visitor`] printing every node it is shown into a [`fmt::Write`] sink.
///
/// ```rust
/// use laxjson::{Document, RenderOptions, Renderer};
///
/// let doc = Document::parse("{ 'a': [1, 'two', null] }").unwrap();
/// let mut renderer = Renderer::new(String::new(), RenderOptions::default());
/// doc.visit(&mut renderer);
///
/// assert_eq!(renderer.finish().unwrap(), "{'a': [1, 'two', null]}");
/// ```
#[derive(Debug)]
pub struct Renderer<W> {
    out: W,
    options: RenderOptions,
    level: usize,
    failed: bool,
}

impl<W: Write> Renderer<W> {
    pub fn new(out: W, options: RenderOptions) -> Self {
        Self {
            out,
            options,
            level: 0,
            failed: false,
        }
    }

    /// Returns the sink, or the error if any write into it failed. A failed
    /// write also stops the walk that was feeding this renderer.
    pub fn finish(self) -> Result<W, fmt::Error> {
        if self.failed { Err(fmt::Error) } else { Ok(self.out) }
    }

    fn indent(&mut self) -> fmt::Result {
        if self.options.line_breaks {
            for _ in 0..self.options.indent_width(self.level) {
                self.out.write_char(' ')?;
            }
        }
        Ok(())
    }

    fn head(&mut self, node: Node<'_>) -> fmt::Result {
        self.indent()?;
        if let Some(name) = node.name() {
            write_quoted(&mut self.out, name)?;
            self.out.write_str(": ")?;
        }
        Ok(())
    }

    // The node the walk started from has no sibling in the output even when
    // it has one in the tree.
    fn tail(&mut self, node: Node<'_>) -> fmt::Result {
        if self.level > 0 && !node.is_last_child() {
            self.out.write_char(',')?;
            self.out.write_char(if self.options.line_breaks { '\n' } else { ' ' })
        } else if self.options.line_breaks {
            self.out.write_char('\n')
        } else {
            Ok(())
        }
    }

    fn open(&mut self, node: Node<'_>, bracket: char) -> fmt::Result {
        self.head(node)?;
        self.out.write_char(bracket)?;
        self.level += 1;
        if self.options.line_breaks && !node.is_empty() {
            self.out.write_char('\n')?;
        }
        Ok(())
    }

    fn close(&mut self, node: Node<'_>, bracket: char) -> fmt::Result {
        self.level = self.level.saturating_sub(1);
        if !node.is_empty() {
            self.indent()?;
        }
        self.out.write_char(bracket)?;
        self.tail(node)
    }

    fn scalar(&mut self, node: Node<'_>) -> fmt::Result {
        self.head(node)?;
        if let Some(b) = node.as_bool() {
            self.out.write_str(if b { "true" } else { "false" })?;
        } else if let Some(n) = node.as_number() {
            write_number(&mut self.out, n)?;
        } else if let Some(s) = node.as_str() {
            write_quoted(&mut self.out, s)?;
        } else {
            self.out.write_str("null")?;
        }
        self.tail(node)
    }

    fn keep_going(&mut self, written: fmt::Result) -> bool {
        self.failed |= written.is_err();
        !self.failed
    }
}

impl<W: Write> Visitor for Renderer<W> {
    fn on_null(&mut self, node: Node<'_>) -> bool {
        let written = self.scalar(node);
        self.keep_going(written)
    }

    fn on_bool(&mut self, node: Node<'_>) -> bool {
        let written = self.scalar(node);
        self.keep_going(written)
    }

    fn on_number(&mut self, node: Node<'_>) -> bool {
        let written = self.scalar(node);
        self.keep_going(written)
    }

    fn on_string(&mut self, node: Node<'_>) -> bool {
        let written = self.scalar(node);
        self.keep_going(written)
    }

    fn on_array_begin(&mut self, node: Node<'_>) -> bool {
        let written = self.open(node, '[');
        self.keep_going(written)
    }

    fn on_array_end(&mut self, node: Node<'_>) -> bool {
        let written = self.close(node, ']');
        self.keep_going(written)
    }

    fn on_object_begin(&mut self, node: Node<'_>) -> bool {
        let written = self.open(node, '{');
        self.keep_going(written)
    }

    fn on_object_end(&mut self, node: Node<'_>) -> bool {
        let written = self.close(node, '}');
        self.keep_going(written)
    }
}

fn write_number<W: Write>(out: &mut W, n: f32) -> fmt::Result {
    if n.is_nan() {
        out.write_str("null")
    } else if n.is_infinite() {
        out.write_str(if n > 0.0 { "1e39" } else { "-1e39" })
    } else {
        write!(out, "{n}")
    }
}

/// Writes `text` between quotes, escaping what the tokenizer would otherwise
/// read differently.
fn write_quoted<W: Write>(out: &mut W, text: &str) -> fmt::Result {
    let delimiter = if text.contains('\'') { '"' } else { '\'' };
    out.write_char(delimiter)?;
    for ch in text.chars() {
        match ch {
            '\\' => out.write_str("\\\\")?,
            '\n' => out.write_str("\\n")?,
            '\r' => out.write_str("\\r")?,
            '\t' => out.write_str("\\t")?,
            '\u{8}' => out.write_str("\\b")?,
            '\u{c}' => out.write_str("\\f")?,
            c if c == delimiter => {
                out.write_char('\\')?;
                out.write_char(c)?;
            }
            c => out.write_char(c)?,
        }
    }
    out.write_char(delimiter)
}

/// Renders `node` and its subtree into a new string.
#[must_use]
pub fn to_string(node: Node<'_>, options: RenderOptions) -> String {
    let mut renderer = Renderer::new(String::new(), options);
    node.visit(&mut renderer);
    // writing into a String cannot fail
    renderer.out
}

pub(crate) fn write_node(
    f: &mut fmt::Formatter<'_>,
    node: Node<'_>,
    options: RenderOptions,
) -> fmt::Result {
    let mut renderer = Renderer::new(f, options);
    node.visit(&mut renderer);
    renderer.finish().map(drop)
}
