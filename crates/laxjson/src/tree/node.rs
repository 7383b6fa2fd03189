use alloc::string::String;
use core::{fmt, iter::FusedIterator, slice};

use super::{NodeId, NodeKind, Tree, Value};
use crate::visitor::{self, Visitor};

/// What [`Node::get_string`] returns for the sentinel node.
pub const INVALID_NODE_STRING: &str = "! invalid node";

/// Read-only handle to a node of a [`Tree`].
///
/// A handle either points at a real node or is the sentinel
/// ([`Node::INVALID`]) returned by failed lookups. The sentinel answers every
/// query with a harmless default and every lookup with itself, so chained
/// lookups need no guard:
///
/// ```
/// use laxjson::Document;
///
/// let doc = Document::parse("{ 'a': { 'b': [10, 20] } }").unwrap();
/// assert_eq!(doc.get("a").get("b").get(1).get_number(), 20.0);
///
/// let missing = doc.get("a").get("nope").get("b").get(0);
/// assert!(!missing.is_valid());
/// assert_eq!(missing.get_number(), 0.0);
/// ```
#[derive(Clone, Copy)]
pub struct Node<'a> {
    at: Option<(&'a Tree, NodeId)>,
}

impl<'a> Node<'a> {
    /// The sentinel node.
    pub const INVALID: Node<'static> = Node { at: None };

    pub(crate) fn new(tree: &'a Tree, id: NodeId) -> Self {
        Self {
            at: Some((tree, id)),
        }
    }

    fn value(&self) -> Option<&'a Value> {
        self.at.map(|(tree, id)| &tree.slot(id).value)
    }

    /// `false` only for the sentinel.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.at.is_some()
    }

    #[must_use]
    pub fn id(&self) -> Option<NodeId> {
        self.at.map(|(_, id)| id)
    }

    /// The node kind, or `None` for the sentinel.
    #[must_use]
    pub fn kind(&self) -> Option<NodeKind> {
        self.value().map(Value::kind)
    }

    /// The key this node is stored under; set exactly for children of
    /// objects.
    #[must_use]
    pub fn name(&self) -> Option<&'a str> {
        let (tree, id) = self.at?;
        tree.slot(id).name.as_deref()
    }

    #[must_use]
    pub fn parent(&self) -> Option<Node<'a>> {
        let (tree, id) = self.at?;
        tree.parent_of(id).map(|p| Node::new(tree, p))
    }

    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self.value(), Some(Value::Null))
    }

    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self.value()? {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_number(&self) -> Option<f32> {
        match self.value()? {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_str(&self) -> Option<&'a str> {
        match self.value()? {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// # Panics
    ///
    /// Panics if the node is valid but not a bool. The sentinel returns
    /// `false`.
    #[must_use]
    #[track_caller]
    pub fn get_bool(&self) -> bool {
        match self.value() {
            None => false,
            Some(Value::Bool(b)) => *b,
            Some(other) => panic!("wrong node type, {:?} is not a bool", other.kind()),
        }
    }

    /// # Panics
    ///
    /// Panics if the node is valid but not a number. The sentinel returns
    /// `0.0`.
    #[must_use]
    #[track_caller]
    pub fn get_number(&self) -> f32 {
        match self.value() {
            None => 0.0,
            Some(Value::Number(n)) => *n,
            Some(other) => panic!("wrong node type, {:?} is not a number", other.kind()),
        }
    }

    /// # Panics
    ///
    /// Panics if the node is valid but not a string. The sentinel returns
    /// [`INVALID_NODE_STRING`].
    #[must_use]
    #[track_caller]
    pub fn get_string(&self) -> &'a str {
        match self.value() {
            None => INVALID_NODE_STRING,
            Some(Value::String(s)) => s,
            Some(other) => panic!("wrong node type, {:?} is not a string", other.kind()),
        }
    }

    /// Number of children; zero for scalars and the sentinel.
    #[must_use]
    pub fn len(&self) -> usize {
        self.value().map_or(0, |v| v.children().len())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Children in insertion order.
    #[must_use]
    pub fn children(&self) -> Children<'a> {
        match self.at {
            Some((tree, id)) => Children {
                tree: Some(tree),
                ids: tree.slot(id).value.children().iter(),
            },
            None => Children {
                tree: None,
                ids: [].iter(),
            },
        }
    }

    /// First child of an object stored under `name`. Duplicate keys are
    /// kept, so later children with the same name are only reachable by
    /// position.
    #[must_use]
    pub fn child(&self, name: &str) -> Option<Node<'a>> {
        if self.kind() != Some(NodeKind::Object) {
            return None;
        }
        self.children().find(|c| c.name() == Some(name))
    }

    #[must_use]
    pub fn child_at(&self, index: usize) -> Option<Node<'a>> {
        let (tree, id) = self.at?;
        let child = *tree.slot(id).value.children().get(index)?;
        Some(Node::new(tree, child))
    }

    /// Looks a child up by name (`&str`) or position (`usize`), returning
    /// the sentinel when there is no such child.
    #[must_use]
    pub fn get<K: ChildKey>(&self, key: K) -> Node<'a> {
        key.find_in(*self).unwrap_or(Node::INVALID)
    }

    /// Whether this is the final child of its parent. Parentless nodes and
    /// the sentinel report `true`.
    #[must_use]
    pub fn is_last_child(&self) -> bool {
        let Some((tree, id)) = self.at else {
            return true;
        };
        match tree.parent_of(id) {
            None => true,
            Some(parent) => tree.slot(parent).value.children().last() == Some(&id),
        }
    }

    /// Walks the subtree rooted here, see [`visitor::visit`].
    pub fn visit<V: Visitor + ?Sized>(&self, visitor: &mut V) -> bool {
        visitor::visit(*self, visitor)
    }

    #[must_use]
    pub fn tree(&self) -> Option<&'a Tree> {
        self.at.map(|(tree, _)| tree)
    }
}

/// Structural equality of the subtrees, names included.
impl PartialEq for Node<'_> {
    fn eq(&self, other: &Self) -> bool {
        if self.name() != other.name() {
            return false;
        }
        match (self.value(), other.value()) {
            (None, None) => true,
            (Some(Value::Array(a)), Some(Value::Array(b)))
            | (Some(Value::Object(a)), Some(Value::Object(b))) => {
                a.len() == b.len() && self.children().zip(other.children()).all(|(x, y)| x == y)
            }
            (Some(a), Some(b)) => a == b,
            _ => false,
        }
    }
}

impl fmt::Debug for Node<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some(value) = self.value() else {
            return f.write_str("Node::INVALID");
        };
        if let Some(name) = self.name() {
            write!(f, "{name:?}: ")?;
        }
        match value {
            Value::Null => f.write_str("Null"),
            Value::Bool(b) => write!(f, "Bool({b})"),
            Value::Number(n) => write!(f, "Number({n})"),
            Value::String(s) => write!(f, "String({s:?})"),
            Value::Array(_) => f.debug_list().entries(self.children()).finish(),
            Value::Object(_) => f.debug_set().entries(self.children()).finish(),
        }
    }
}

/// Iterator over the children of a node.
#[derive(Debug, Clone)]
pub struct Children<'a> {
    tree: Option<&'a Tree>,
    ids: slice::Iter<'a, NodeId>,
}

impl<'a> Iterator for Children<'a> {
    type Item = Node<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let id = *self.ids.next()?;
        self.tree.map(|tree| Node::new(tree, id))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.ids.size_hint()
    }
}

impl DoubleEndedIterator for Children<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        let id = *self.ids.next_back()?;
        self.tree.map(|tree| Node::new(tree, id))
    }
}

impl ExactSizeIterator for Children<'_> {}

impl FusedIterator for Children<'_> {}

/// Anything [`Node::get`] can look a child up by.
pub trait ChildKey {
    fn find_in<'a>(&self, node: Node<'a>) -> Option<Node<'a>>;
}

impl ChildKey for &str {
    fn find_in<'a>(&self, node: Node<'a>) -> Option<Node<'a>> {
        node.child(self)
    }
}

impl ChildKey for String {
    fn find_in<'a>(&self, node: Node<'a>) -> Option<Node<'a>> {
        node.child(self)
    }
}

impl ChildKey for &String {
    fn find_in<'a>(&self, node: Node<'a>) -> Option<Node<'a>> {
        node.child(self)
    }
}

impl ChildKey for usize {
    fn find_in<'a>(&self, node: Node<'a>) -> Option<Node<'a>> {
        node.child_at(*self)
    }
}
