//! A permissive JSON-like parser with an owned document tree.
//!
//! The accepted grammar is JSON with a few relaxations: strings and keys may
//! use single or double quotes, `null`/`true`/`false` match in any letter
//! case, numbers may carry a leading `+`, and arrays and objects accept one
//! trailing comma after at least one item. A document is always a single
//! object.
//!
//! The crate is layered:
//! - [`tokenizer`] recognizes the grammar and pushes events into a
//!   [`TokenConsumer`](tokenizer::TokenConsumer) without allocating,
//! - [`DocumentBuilder`] is the consumer that turns those events into a
//!   [`Tree`],
//! - [`Node`] and [`NodeMut`] read and extend the tree, and [`Visitor`]
//!   walks it; [`Renderer`] is the visitor that prints it back out.
//!
//! ```rust
//! use laxjson::{Document, RenderOptions};
//!
//! let doc = Document::parse("{ 'name': 'Yoda', 'pets': ['Doki', 'Kuzko',], 'ok': TRUE }")?;
//! assert_eq!(doc.get("pets").get(1).get_string(), "Kuzko");
//! assert!(doc.get("ok").get_bool());
//! assert!(!doc.get("pets").get(9).get("x").is_valid());
//!
//! assert_eq!(
//!     doc.render(RenderOptions::default()),
//!     "{'name': 'Yoda', 'pets': ['Doki', 'Kuzko'], 'ok': true}"
//! );
//! # Ok::<(), laxjson::ParseError>(())
//! ```

#![no_std]
#![allow(missing_docs)]
extern crate alloc;

#[cfg(test)]
extern crate std;

mod builder;
mod document;
mod error;
mod options;
mod render;
mod tree;
mod visitor;

pub mod tokenizer;

#[cfg(test)]
mod tests;

pub use builder::{BuildContext, DocumentBuilder};
pub use document::{Document, validate};
pub use error::ParseError;
pub use options::RenderOptions;
pub use render::{Renderer, to_string};
pub use tokenizer::{ErrorKind, SyntaxError};
pub use tree::{ChildKey, Children, INVALID_NODE_STRING, Node, NodeId, NodeKind, NodeMut, Tree};
pub use visitor::{Visitor, visit};
