//! Depth-first traversal of a built tree.

use crate::tree::{Node, NodeKind};

/// Per-kind callbacks invoked by [`visit`].
///
/// Each callback returns whether the walk should continue; the defaults
/// always continue, so a visitor only overrides what it needs.
#[allow(unused_variables)]
pub trait Visitor {
    fn on_null(&mut self, node: Node<'_>) -> bool {
        true
    }

    fn on_bool(&mut self, node: Node<'_>) -> bool {
        true
    }

    fn on_number(&mut self, node: Node<'_>) -> bool {
        true
    }

    fn on_string(&mut self, node: Node<'_>) -> bool {
        true
    }

    fn on_array_begin(&mut self, node: Node<'_>) -> bool {
        true
    }

    fn on_array_end(&mut self, node: Node<'_>) -> bool {
        true
    }

    fn on_object_begin(&mut self, node: Node<'_>) -> bool {
        true
    }

    fn on_object_end(&mut self, node: Node<'_>) -> bool {
        true
    }
}

/// Walks `node` depth-first, children in insertion order.
///
/// Containers get their begin callback, then every child, then their end
/// callback. The walk stops as soon as any callback returns `false`, and
/// that `false` is returned. Visiting the sentinel node does nothing and
/// returns `true`.
pub fn visit<V: Visitor + ?Sized>(node: Node<'_>, visitor: &mut V) -> bool {
    let Some(kind) = node.kind() else {
        return true;
    };
    match kind {
        NodeKind::Null => visitor.on_null(node),
        NodeKind::Bool => visitor.on_bool(node),
        NodeKind::Number => visitor.on_number(node),
        NodeKind::String => visitor.on_string(node),
        NodeKind::Array => {
            visitor.on_array_begin(node)
                && node.children().all(|child| visit(child, visitor))
                && visitor.on_array_end(node)
        }
        NodeKind::Object => {
            visitor.on_object_begin(node)
                && node.children().all(|child| visit(child, visitor))
                && visitor.on_object_end(node)
        }
    }
}
