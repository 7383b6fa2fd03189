use alloc::{string::ToString, vec::Vec};

use quickcheck::QuickCheck;

use crate::{Document, Node, NodeKind, RenderOptions, Visitor};

fn tests() -> u64 {
    if is_ci::cached() { 10_000 } else { 1_000 }
}

/// Every node of the subtree, depth-first.
fn all_nodes(node: Node<'_>) -> Vec<Node<'_>> {
    let mut out = Vec::new();
    let mut stack = Vec::from([node]);
    while let Some(node) = stack.pop() {
        out.push(node);
        stack.extend(node.children().rev());
    }
    out
}

/// Property: rendering a document and parsing the text back yields an equal
/// tree, names included, whatever the layout options.
#[test]
fn render_parse_roundtrip_quickcheck() {
    #[allow(clippy::needless_pass_by_value)]
    fn prop(doc: Document, options: RenderOptions) -> bool {
        let text = doc.render(options);
        Document::parse(&text).is_ok_and(|parsed| parsed == doc)
    }

    QuickCheck::new()
        .tests(tests())
        .quickcheck(prop as fn(Document, RenderOptions) -> bool);
}

/// Property: `is_last_child` holds for exactly the final child of every
/// container, and for the root.
#[test]
fn last_child_quickcheck() {
    #[allow(clippy::needless_pass_by_value)]
    fn prop(doc: Document) -> bool {
        all_nodes(doc.root()).into_iter().all(|node| {
            let flags: Vec<bool> = node.children().map(|c| c.is_last_child()).collect();
            let expected = (0..flags.len()).map(|i| i + 1 == flags.len());
            flags.iter().copied().eq(expected)
        }) && doc.root().is_last_child()
    }

    QuickCheck::new()
        .tests(tests())
        .quickcheck(prop as fn(Document) -> bool);
}

/// Property: a node has a name exactly when its parent is an object, and
/// names survive a render/parse cycle unchanged.
#[test]
fn names_quickcheck() {
    #[allow(clippy::needless_pass_by_value)]
    fn prop(doc: Document) -> bool {
        let named_right = all_nodes(doc.root()).into_iter().all(|node| {
            let under_object = node.parent().and_then(|p| p.kind()) == Some(NodeKind::Object);
            node.name().is_some() == under_object
        });

        let Ok(parsed) = Document::parse(doc.to_string()) else {
            return false;
        };
        let names = |d: &Document| -> Vec<Option<alloc::string::String>> {
            all_nodes(d.root()).iter().map(|n| n.name().map(Into::into)).collect()
        };
        named_right && names(&doc) == names(&parsed)
    }

    QuickCheck::new()
        .tests(tests())
        .quickcheck(prop as fn(Document) -> bool);
}

/// Property: a walk reaches every node exactly once, and returning `false`
/// from any callback stops it right there.
#[test]
fn visit_order_quickcheck() {
    #[derive(Default)]
    struct Count {
        seen: usize,
        stop_at: Option<usize>,
    }

    impl Count {
        fn step(&mut self) -> bool {
            self.seen += 1;
            self.stop_at != Some(self.seen)
        }
    }

    impl Visitor for Count {
        fn on_null(&mut self, _: Node<'_>) -> bool {
            self.step()
        }
        fn on_bool(&mut self, _: Node<'_>) -> bool {
            self.step()
        }
        fn on_number(&mut self, _: Node<'_>) -> bool {
            self.step()
        }
        fn on_string(&mut self, _: Node<'_>) -> bool {
            self.step()
        }
        fn on_array_begin(&mut self, _: Node<'_>) -> bool {
            self.step()
        }
        fn on_object_begin(&mut self, _: Node<'_>) -> bool {
            self.step()
        }
    }

    #[allow(clippy::needless_pass_by_value)]
    fn prop(doc: Document, stop: usize) -> bool {
        let total = doc.tree().node_count();

        let mut full = Count::default();
        let walked = doc.visit(&mut full);

        let stop_at = 1 + stop % total;
        let mut partial = Count {
            stop_at: Some(stop_at),
            ..Count::default()
        };
        let stopped = !doc.visit(&mut partial);

        walked && full.seen == total && stopped && partial.seen == stop_at
    }

    QuickCheck::new()
        .tests(tests())
        .quickcheck(prop as fn(Document, usize) -> bool);
}
