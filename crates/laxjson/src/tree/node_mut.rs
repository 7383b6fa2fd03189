use alloc::{string::String, vec::Vec};

use super::{Node, NodeId, Tree, Value};

/// Mutable handle to a node of a [`Tree`].
///
/// The `add_*` methods append a new child to a container and return a
/// handle to it, so nested structures can be built in one expression. The
/// `name` argument must be `Some` when adding to an object and `None` when
/// adding to an array; any other combination is a usage error and panics.
///
/// ```
/// use laxjson::Document;
///
/// let mut doc = Document::create();
/// let mut root = doc.root_mut();
/// root.add_string(Some("first_name"), "Marc");
/// let mut pets = root.add_array(Some("pets"));
/// pets.add_string(None, "Chiffon");
/// pets.add_string(None, "Yoda");
///
/// assert_eq!(doc.get("pets").len(), 2);
/// assert!(doc.get("pets").get(1).is_last_child());
/// ```
#[derive(Debug)]
pub struct NodeMut<'a> {
    tree: &'a mut Tree,
    id: NodeId,
}

impl<'a> NodeMut<'a> {
    pub(crate) fn new(tree: &'a mut Tree, id: NodeId) -> Self {
        Self { tree, id }
    }

    #[must_use]
    pub fn id(&self) -> NodeId {
        self.id
    }

    /// Read-only view of this node.
    #[must_use]
    pub fn as_node(&self) -> Node<'_> {
        Node::new(self.tree, self.id)
    }

    /// Handle to the parent container, `None` at the root.
    #[must_use]
    pub fn parent(self) -> Option<NodeMut<'a>> {
        let parent = self.tree.parent_of(self.id)?;
        Some(NodeMut::new(self.tree, parent))
    }

    /// Mutable handle to the first child named `name` of an object.
    pub fn child_mut(&mut self, name: &str) -> Option<NodeMut<'_>> {
        let id = self.as_node().child(name)?.id()?;
        Some(NodeMut::new(self.tree, id))
    }

    pub fn child_at_mut(&mut self, index: usize) -> Option<NodeMut<'_>> {
        let id = self.as_node().child_at(index)?.id()?;
        Some(NodeMut::new(self.tree, id))
    }

    #[track_caller]
    fn add(&mut self, name: Option<&str>, value: Value) -> NodeMut<'_> {
        let id = self.tree.push_child(self.id, name, value);
        NodeMut::new(self.tree, id)
    }

    /// # Panics
    ///
    /// Panics if this node is not a container or `name` breaks the naming
    /// rule.
    #[track_caller]
    pub fn add_null(&mut self, name: Option<&str>) -> NodeMut<'_> {
        self.add(name, Value::Null)
    }

    /// # Panics
    ///
    /// See [`NodeMut::add_null`].
    #[track_caller]
    pub fn add_bool(&mut self, name: Option<&str>, value: bool) -> NodeMut<'_> {
        self.add(name, Value::Bool(value))
    }

    /// # Panics
    ///
    /// See [`NodeMut::add_null`].
    #[track_caller]
    pub fn add_number(&mut self, name: Option<&str>, value: f32) -> NodeMut<'_> {
        self.add(name, Value::Number(value))
    }

    /// # Panics
    ///
    /// See [`NodeMut::add_null`].
    #[track_caller]
    pub fn add_string(&mut self, name: Option<&str>, value: impl Into<String>) -> NodeMut<'_> {
        self.add(name, Value::String(value.into()))
    }

    /// # Panics
    ///
    /// See [`NodeMut::add_null`].
    #[track_caller]
    pub fn add_array(&mut self, name: Option<&str>) -> NodeMut<'_> {
        self.add(name, Value::Array(Vec::new()))
    }

    /// # Panics
    ///
    /// See [`NodeMut::add_null`].
    #[track_caller]
    pub fn add_object(&mut self, name: Option<&str>) -> NodeMut<'_> {
        self.add(name, Value::Object(Vec::new()))
    }

    /// Moves a separately built tree in as the last child of this node.
    ///
    /// # Panics
    ///
    /// See [`NodeMut::add_null`].
    #[track_caller]
    pub fn attach(&mut self, name: Option<&str>, subtree: Tree) -> NodeMut<'_> {
        let id = self.tree.graft(self.id, name, subtree);
        NodeMut::new(self.tree, id)
    }
}
