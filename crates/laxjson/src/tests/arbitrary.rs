use alloc::string::String;

use quickcheck::{Arbitrary, Gen};

use crate::{Document, NodeKind, NodeMut, RenderOptions};

#[derive(Debug, Copy, Clone, PartialEq)]
pub(crate) struct FiniteNumber(pub(crate) f32);

impl Arbitrary for FiniteNumber {
    fn arbitrary(g: &mut Gen) -> Self {
        let mut value = f32::arbitrary(g);
        while !value.is_finite() {
            value = f32::arbitrary(g);
        }

        Self(value)
    }
}

fn fill(g: &mut Gen, mut node: NodeMut<'_>, depth: usize) {
    let is_object = node.as_node().kind() == Some(NodeKind::Object);
    let len = usize::arbitrary(g) % 4;
    for _ in 0..len {
        let key = String::arbitrary(g);
        let name = is_object.then_some(key.as_str());
        let choices = if depth == 0 { 4 } else { 6 };
        match usize::arbitrary(g) % choices {
            0 => {
                node.add_null(name);
            }
            1 => {
                node.add_bool(name, bool::arbitrary(g));
            }
            2 => {
                node.add_number(name, FiniteNumber::arbitrary(g).0);
            }
            3 => {
                node.add_string(name, String::arbitrary(g));
            }
            4 => {
                let child = node.add_array(name);
                fill(g, child, depth - 1);
            }
            _ => {
                let child = node.add_object(name);
                fill(g, child, depth - 1);
            }
        }
    }
}

/// Documents built through the `add_*` API with finite numbers only, so
/// that rendering them loses nothing.
impl Arbitrary for Document {
    fn arbitrary(g: &mut Gen) -> Self {
        let mut doc = Document::create();
        let depth = usize::arbitrary(g) % 3;
        fill(g, doc.root_mut(), depth);
        doc
    }
}

impl Arbitrary for RenderOptions {
    fn arbitrary(g: &mut Gen) -> Self {
        Self {
            line_breaks: bool::arbitrary(g),
            indent: usize::arbitrary(g) % 5,
        }
    }
}
