//! Owned document tree.
//!
//! A [`Tree`] stores its nodes in an arena and addresses them by [`NodeId`].
//! Containers own the ordered list of their children's ids; every node keeps
//! a non-owning link to its parent, which is only used for upward queries
//! such as [`Node::is_last_child`]. Nodes are never detached or moved, so the
//! arena always describes a single acyclic tree rooted at slot 0.
//!
//! Read access goes through the copyable [`Node`] handle, mutation through
//! [`NodeMut`].
//!
//! ```
//! use laxjson::Tree;
//!
//! let mut tree = Tree::array();
//! let mut root = tree.root_mut();
//! root.add_number(None, 1.0);
//! root.add_object(None).add_string(Some("name"), "Yoda");
//!
//! assert_eq!(tree.root().get(1).get("name").get_string(), "Yoda");
//! assert!(!tree.root().get(7).is_valid());
//! ```

mod node;
mod node_mut;
#[cfg(any(test, feature = "serde"))]
mod serde_impls;

use alloc::{string::String, vec, vec::Vec};
use core::fmt;

pub use node::{ChildKey, Children, INVALID_NODE_STRING, Node};
pub use node_mut::NodeMut;

use crate::{options::RenderOptions, render};

/// Index of a node inside its [`Tree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(usize);

impl NodeId {
    pub(crate) const ROOT: Self = Self(0);

    #[must_use]
    pub fn index(self) -> usize {
        self.0
    }
}

/// The kind of a node, fixed when the node is created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(any(test, feature = "serde"), derive(serde::Serialize))]
pub enum NodeKind {
    Null,
    Bool,
    Number,
    String,
    Array,
    Object,
}

impl NodeKind {
    /// Whether nodes of this kind own children.
    #[must_use]
    pub fn is_container(self) -> bool {
        matches!(self, Self::Array | Self::Object)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Value {
    Null,
    Bool(bool),
    Number(f32),
    String(String),
    Array(Vec<NodeId>),
    Object(Vec<NodeId>),
}

impl Value {
    pub(crate) fn kind(&self) -> NodeKind {
        match self {
            Self::Null => NodeKind::Null,
            Self::Bool(_) => NodeKind::Bool,
            Self::Number(_) => NodeKind::Number,
            Self::String(_) => NodeKind::String,
            Self::Array(_) => NodeKind::Array,
            Self::Object(_) => NodeKind::Object,
        }
    }

    fn children(&self) -> &[NodeId] {
        match self {
            Self::Array(ids) | Self::Object(ids) => ids,
            _ => &[],
        }
    }

    fn children_mut(&mut self) -> Option<&mut Vec<NodeId>> {
        match self {
            Self::Array(ids) | Self::Object(ids) => Some(ids),
            _ => None,
        }
    }
}

#[derive(Debug, Clone)]
pub(crate) struct Slot {
    pub(crate) parent: Option<NodeId>,
    pub(crate) name: Option<String>,
    pub(crate) value: Value,
}

/// A tree of nodes with a root of any kind.
///
/// Parsed documents always have an object root (see
/// [`Document`](crate::Document)); a `Tree` built by hand may start from any
/// value and can be grafted into another tree with [`NodeMut::attach`].
#[derive(Debug, Clone)]
pub struct Tree {
    slots: Vec<Slot>,
}

impl Tree {
    fn with_root(value: Value) -> Self {
        Self {
            slots: vec![Slot {
                parent: None,
                name: None,
                value,
            }],
        }
    }

    #[must_use]
    pub fn object() -> Self {
        Self::with_root(Value::Object(Vec::new()))
    }

    #[must_use]
    pub fn array() -> Self {
        Self::with_root(Value::Array(Vec::new()))
    }

    #[must_use]
    pub fn null() -> Self {
        Self::with_root(Value::Null)
    }

    #[must_use]
    pub fn root(&self) -> Node<'_> {
        Node::new(self, NodeId::ROOT)
    }

    pub fn root_mut(&mut self) -> NodeMut<'_> {
        NodeMut::new(self, NodeId::ROOT)
    }

    /// Handle to the node with the given id, or the sentinel if the id does
    /// not belong to this tree.
    #[must_use]
    pub fn node(&self, id: NodeId) -> Node<'_> {
        if id.0 < self.slots.len() {
            Node::new(self, id)
        } else {
            Node::INVALID
        }
    }

    /// Total number of nodes, root included.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.slots.len()
    }

    /// Renders the tree with the given options.
    #[must_use]
    pub fn render(&self, options: RenderOptions) -> String {
        render::to_string(self.root(), options)
    }

    pub(crate) fn slot(&self, id: NodeId) -> &Slot {
        &self.slots[id.0]
    }

    pub(crate) fn parent_of(&self, id: NodeId) -> Option<NodeId> {
        self.slots[id.0].parent
    }

    /// Appends a new child to `parent`.
    ///
    /// # Panics
    ///
    /// Panics when `parent` is not a container or when `name` does not match
    /// the container kind.
    #[track_caller]
    pub(crate) fn push_child(&mut self, parent: NodeId, name: Option<&str>, value: Value) -> NodeId {
        check_name(self.slots[parent.0].value.kind(), name);

        let id = NodeId(self.slots.len());
        self.slots.push(Slot {
            parent: Some(parent),
            name: name.map(String::from),
            value,
        });
        self.link(parent, id);
        id
    }

    /// Moves every node of `other` into this tree under `parent`.
    ///
    /// # Panics
    ///
    /// Same conditions as [`Tree::push_child`].
    #[track_caller]
    pub(crate) fn graft(&mut self, parent: NodeId, name: Option<&str>, other: Tree) -> NodeId {
        check_name(self.slots[parent.0].value.kind(), name);

        let base = self.slots.len();
        let id = NodeId(base);
        self.slots.extend(other.slots.into_iter().map(|mut slot| {
            slot.parent = slot.parent.map(|p| NodeId(p.0 + base));
            if let Some(ids) = slot.value.children_mut() {
                for child in ids.iter_mut() {
                    child.0 += base;
                }
            }
            slot
        }));

        let root = &mut self.slots[base];
        root.parent = Some(parent);
        root.name = name.map(String::from);
        self.link(parent, id);
        id
    }

    fn link(&mut self, parent: NodeId, child: NodeId) {
        if let Some(ids) = self.slots[parent.0].value.children_mut() {
            ids.push(child);
        }
    }
}

#[track_caller]
fn check_name(container: NodeKind, name: Option<&str>) {
    match (container, name) {
        (NodeKind::Object, Some(_)) | (NodeKind::Array, None) => {}
        (NodeKind::Object, None) => panic!("children of an object node need a name"),
        (NodeKind::Array, Some(name)) => {
            panic!("children of an array node cannot be named (got {name:?})")
        }
        (kind, _) => panic!("cannot add a child to a {kind:?} node"),
    }
}

impl Default for Tree {
    fn default() -> Self {
        Self::object()
    }
}

impl From<bool> for Tree {
    fn from(b: bool) -> Self {
        Self::with_root(Value::Bool(b))
    }
}

impl From<f32> for Tree {
    fn from(n: f32) -> Self {
        Self::with_root(Value::Number(n))
    }
}

impl From<String> for Tree {
    fn from(s: String) -> Self {
        Self::with_root(Value::String(s))
    }
}

impl From<&str> for Tree {
    fn from(s: &str) -> Self {
        Self::with_root(Value::String(s.into()))
    }
}

/// Structural equality: same shape, names and values, regardless of the
/// order in which nodes were allocated.
impl PartialEq for Tree {
    fn eq(&self, other: &Self) -> bool {
        self.root() == other.root()
    }
}

impl fmt::Display for Tree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render::write_node(f, self.root(), RenderOptions::default())
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::float_cmp)]

    use alloc::{string::ToString, vec::Vec};

    use super::*;

    fn pets() -> Tree {
        let mut tree = Tree::object();
        let mut root = tree.root_mut();
        root.add_string(Some("first_name"), "Marc");
        root.add_string(Some("surname"), "Fascia");
        let mut pets = root.add_array(Some("pets"));
        for name in ["Chiffon", "Yoda", "Phoebe", "Kuzko", "Doki"] {
            pets.add_string(None, name);
        }
        tree
    }

    #[test]
    fn add_appends_in_insertion_order() {
        let tree = pets();
        let root = tree.root();
        let names: Vec<_> = root.children().map(|c| c.name().unwrap()).collect();
        assert_eq!(names, ["first_name", "surname", "pets"]);

        let pets: Vec<_> = root.get("pets").children().map(|c| c.get_string()).collect();
        assert_eq!(pets, ["Chiffon", "Yoda", "Phoebe", "Kuzko", "Doki"]);
        assert_eq!(tree.node_count(), 9);
    }

    #[test]
    fn names_exist_only_under_objects() {
        let tree = pets();
        let root = tree.root();
        assert_eq!(root.name(), None);
        assert!(root.parent().is_none());
        for child in root.children() {
            assert!(child.name().is_some());
        }
        for pet in root.get("pets").children() {
            assert_eq!(pet.name(), None);
            assert_eq!(pet.parent().unwrap().kind(), Some(NodeKind::Array));
        }
    }

    #[test]
    fn is_last_child_marks_only_the_final_element() {
        let tree = pets();
        let root = tree.root();
        assert!(root.is_last_child());

        let flags: Vec<_> = root.children().map(|c| c.is_last_child()).collect();
        assert_eq!(flags, [false, false, true]);
        let flags: Vec<_> = root.get("pets").children().map(|c| c.is_last_child()).collect();
        assert_eq!(flags, [false, false, false, false, true]);
    }

    #[test]
    fn attach_grafts_a_detached_tree() {
        let mut inner = Tree::array();
        inner.root_mut().add_bool(None, true);
        inner.root_mut().add_object(None).add_null(Some("nothing"));

        let mut tree = pets();
        let mut root = tree.root_mut();
        let attached = root.attach(Some("extra"), inner.clone());
        assert_eq!(attached.as_node().name(), Some("extra"));

        let extra = tree.root().get("extra");
        assert_eq!(extra.kind(), Some(NodeKind::Array));
        assert!(extra.get(0).get_bool());
        assert!(extra.get(1).get("nothing").is_null());
        assert_eq!(extra.get(1).get("nothing").parent(), Some(extra.get(1)));
        assert!(extra.is_last_child());
        assert!(!tree.root().get("pets").is_last_child());

        assert!(extra.children().eq(inner.root().children()));
    }

    #[test]
    fn attach_a_scalar_tree() {
        let mut tree = Tree::array();
        tree.root_mut().attach(None, Tree::from("hello"));
        tree.root_mut().attach(None, Tree::from(2.5_f32));
        assert_eq!(tree.root().get(0).get_string(), "hello");
        assert_eq!(tree.root().get(1).get_number(), 2.5);
    }

    #[test]
    #[should_panic(expected = "children of an object node need a name")]
    fn object_child_without_name_panics() {
        Tree::object().root_mut().add_null(None);
    }

    #[test]
    #[should_panic(expected = "children of an array node cannot be named")]
    fn array_child_with_name_panics() {
        Tree::array().root_mut().add_null(Some("x"));
    }

    #[test]
    #[should_panic(expected = "cannot add a child to a String node")]
    fn scalar_cannot_hold_children() {
        let mut tree = Tree::from("leaf");
        tree.root_mut().add_bool(None, false);
    }

    #[test]
    #[should_panic(expected = "children of an object node need a name")]
    fn attach_enforces_the_name_rule() {
        Tree::object().root_mut().attach(None, Tree::null());
    }

    #[test]
    fn structural_equality_ignores_allocation_order() {
        let mut a = Tree::object();
        {
            let mut root = a.root_mut();
            root.add_array(Some("list")).add_number(None, 1.0);
            root.add_bool(Some("flag"), true);
        }

        let mut b = Tree::object();
        b.root_mut().add_array(Some("list"));
        b.root_mut().add_bool(Some("flag"), true);
        b.root_mut().child_mut("list").unwrap().add_number(None, 1.0);

        assert_eq!(a, b);
        b.root_mut().add_null(Some("more"));
        assert_ne!(a, b);
    }

    #[test]
    fn display_renders_compactly() {
        assert_eq!(
            pets().to_string(),
            "{'first_name': 'Marc', 'surname': 'Fascia', \
             'pets': ['Chiffon', 'Yoda', 'Phoebe', 'Kuzko', 'Doki']}"
        );
    }
}
