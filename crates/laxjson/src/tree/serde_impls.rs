// Objects serialize as maps in child order. Duplicate keys are written as
// repeated entries; what happens to them is up to the serializer.
use serde::{
    Serialize, Serializer,
    ser::{SerializeMap, SerializeSeq},
};

use super::{Node, NodeKind, Tree};

impl Serialize for Node<'_> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self.kind() {
            None | Some(NodeKind::Null) => serializer.serialize_unit(),
            Some(NodeKind::Bool) => serializer.serialize_bool(self.get_bool()),
            Some(NodeKind::Number) => serializer.serialize_f32(self.get_number()),
            Some(NodeKind::String) => serializer.serialize_str(self.get_string()),
            Some(NodeKind::Array) => {
                let mut seq = serializer.serialize_seq(Some(self.len()))?;
                for child in self.children() {
                    seq.serialize_element(&child)?;
                }
                seq.end()
            }
            Some(NodeKind::Object) => {
                let mut map = serializer.serialize_map(Some(self.len()))?;
                for child in self.children() {
                    map.serialize_entry(child.name().unwrap_or_default(), &child)?;
                }
                map.end()
            }
        }
    }
}

impl Serialize for Tree {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.root().serialize(serializer)
    }
}
