#![allow(clippy::float_cmp)]

use alloc::{format, string::String, vec::Vec};

use rstest::rstest;

use crate::{Document, Node, NodeKind, Visitor};

/// Collects the leaves of a walk as `kind:value` strings.
#[derive(Default)]
struct Leaves(Vec<String>);

impl Visitor for Leaves {
    fn on_null(&mut self, _: Node<'_>) -> bool {
        self.0.push("null".into());
        true
    }

    fn on_bool(&mut self, node: Node<'_>) -> bool {
        self.0.push(format!("bool:{}", node.get_bool()));
        true
    }

    fn on_number(&mut self, node: Node<'_>) -> bool {
        self.0.push(format!("num:{}", node.get_number()));
        true
    }

    fn on_string(&mut self, node: Node<'_>) -> bool {
        self.0.push(format!("str:{}", node.get_string()));
        true
    }
}

fn leaves(text: &str) -> Vec<String> {
    let doc = Document::parse(text).unwrap();
    let mut leaves = Leaves::default();
    assert!(doc.visit(&mut leaves));
    leaves.0
}

const GLOSSARY: &str = r#"{
    "glossary": {
        "title": "example glossary",
        "GlossDiv": {
            "title": "S",
            "GlossList": {
                "GlossEntry": {
                    "ID": "SGML",
                    "SortAs": "SGML",
                    "GlossTerm": "Standard Generalized Markup Language",
                    "Acronym": "SGML",
                    "Abbrev": "ISO 8879:1986",
                    "GlossDef": {
                        "para": "A meta-markup language, used to create markup languages such as DocBook.",
                        "GlossSeeAlso": ["GML", "XML"]
                    },
                    "GlossSee": "markup"
                }
            }
        }
    }
}"#;

#[test]
fn strict_json_is_accepted() {
    let doc = Document::parse(GLOSSARY).unwrap();
    let entry = doc
        .get("glossary")
        .get("GlossDiv")
        .get("GlossList")
        .get("GlossEntry");
    assert_eq!(entry.len(), 7);
    assert_eq!(entry.get("Abbrev").get_string(), "ISO 8879:1986");
    assert_eq!(entry.get("GlossDef").get("GlossSeeAlso").get(0).get_string(), "GML");
    assert_eq!(
        leaves(GLOSSARY),
        [
            "str:example glossary",
            "str:S",
            "str:SGML",
            "str:SGML",
            "str:Standard Generalized Markup Language",
            "str:SGML",
            "str:ISO 8879:1986",
            "str:A meta-markup language, used to create markup languages such as DocBook.",
            "str:GML",
            "str:XML",
            "str:markup",
        ]
    );
}

#[test]
fn leaves_follow_source_order() {
    let text = "{ 'a': [1, 'two', NULL, tRuE], 'b': { 'c': -2.5e1, 'd': \"it's\" }, 'e': FALSE, }";
    assert_eq!(
        leaves(text),
        [
            "num:1",
            "str:two",
            "null",
            "bool:true",
            "num:-25",
            "str:it's",
            "bool:false",
        ]
    );
}

#[rstest]
#[case::empty("{}", 0)]
#[case::empty_spaced("{ \n\t }", 0)]
#[case::one_pair("{'a':1}", 1)]
#[case::trailing_comma("{ 'a': 1, 'b': 2, }", 2)]
#[case::nested_trailing_commas("{ 'a': [1, [2,], {'x': 3,},], }", 1)]
#[case::mixed_quotes(r#"{ "a": 'b', 'c': "d" }"#, 2)]
#[case::no_spaces("{'a':[1,2],'b':{'c':null}}", 2)]
#[case::signed_numbers("{ 'p': +1, 'm': -1, 'e': 1E+2 }", 3)]
#[case::duplicate_keys("{ 'k': 1, 'k': 2 }", 2)]
fn accepted(#[case] text: &str, #[case] children: usize) {
    let doc = Document::parse(text).unwrap();
    assert_eq!(doc.root().len(), children);
    assert_eq!(doc.root().kind(), Some(NodeKind::Object));
}

#[test]
fn readme_scenarios() {
    let doc = Document::parse("{ 'list': [ 'abc', 'def' ] }").unwrap();
    let list = doc.get("list");
    assert_eq!(list.kind(), Some(NodeKind::Array));
    assert_eq!(list.len(), 2);
    assert_eq!(list.get(0).get_string(), "abc");
    assert_eq!(list.get(1).get_string(), "def");

    let doc = Document::parse("{ 'a': 1, 'b': 2, }").unwrap();
    let pairs: Vec<_> = doc
        .root()
        .children()
        .map(|c| (c.name().unwrap(), c.get_number()))
        .collect();
    assert_eq!(pairs, [("a", 1.0), ("b", 2.0)]);

    let doc = Document::parse("{ 'n': 123.456e789 }").unwrap();
    assert_eq!(doc.get("n").get_number(), f32::INFINITY);
}

#[test]
fn escapes_are_decoded_once() {
    let doc = Document::parse(r#"{ 'path': 'C:\\dir\/file', 'quote': "\"q\"", 'lines': 'a\nb', 'u': '\u00e9' }"#).unwrap();
    assert_eq!(doc.get("path").get_string(), "C:\\dir/file");
    assert_eq!(doc.get("quote").get_string(), "\"q\"");
    assert_eq!(doc.get("lines").get_string(), "a\nb");
    assert_eq!(doc.get("u").get_string(), "\\u00e9");
}

#[test]
fn keys_may_be_empty_or_odd() {
    let doc = Document::parse("{ '': 1, ' ': 2, '{': 3, \"'\": 4 }").unwrap();
    assert_eq!(doc.get("").get_number(), 1.0);
    assert_eq!(doc.get(" ").get_number(), 2.0);
    assert_eq!(doc.get("{").get_number(), 3.0);
    assert_eq!(doc.get("'").get_number(), 4.0);
}

#[test]
fn large_document() {
    let mut text = String::from("{ 'items': [");
    for i in 0..5_000 {
        text.push_str(&format!("{{ 'id': {i}, 'name': 'item {i}', 'ok': {} }},", i % 2 == 0));
    }
    text.push_str("] }");

    let doc = Document::parse(&text).unwrap();
    let items = doc.get("items");
    assert_eq!(items.len(), 5_000);
    assert_eq!(items.get(4_321).get("name").get_string(), "item 4321");
    assert!(!items.get(4_321).get("ok").get_bool());
    assert!(items.get(4_999).is_last_child());
}
