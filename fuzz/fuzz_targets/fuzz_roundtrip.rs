#![no_main]
use arbitrary::Arbitrary;
use laxjson::{Document, NodeMut, RenderOptions};
use libfuzzer_sys::fuzz_target;

const MAX_DEPTH: usize = 32;

#[derive(Arbitrary, Debug)]
enum Value {
    Null,
    Bool(bool),
    Number(f32),
    String(String),
    Array(Vec<Value>),
    Object(Vec<(String, Value)>),
}

#[derive(Arbitrary, Debug)]
struct Input {
    members: Vec<(String, Value)>,
    line_breaks: bool,
    indent: u8,
}

fn add(parent: &mut NodeMut<'_>, name: Option<&str>, value: &Value, depth: usize) {
    match value {
        Value::Null => {
            parent.add_null(name);
        }
        Value::Bool(b) => {
            parent.add_bool(name, *b);
        }
        // NaN and infinities do not survive a round trip unchanged.
        Value::Number(n) => {
            parent.add_number(name, if n.is_finite() { *n } else { 0.0 });
        }
        Value::String(s) => {
            parent.add_string(name, s.as_str());
        }
        Value::Array(items) => {
            let mut array = parent.add_array(name);
            if depth < MAX_DEPTH {
                for item in items {
                    add(&mut array, None, item, depth + 1);
                }
            }
        }
        Value::Object(members) => {
            let mut object = parent.add_object(name);
            if depth < MAX_DEPTH {
                for (key, item) in members {
                    add(&mut object, Some(key), item, depth + 1);
                }
            }
        }
    }
}

// Structured documents: whatever gets built renders to text that parses
// back into the same tree, in both layouts.
fuzz_target!(|input: Input| {
    let mut doc = Document::create();
    {
        let mut root = doc.root_mut();
        for (key, value) in &input.members {
            add(&mut root, Some(key), value, 1);
        }
    }

    let options = RenderOptions {
        line_breaks: input.line_breaks,
        indent: usize::from(input.indent % 8),
    };
    let text = doc.render(options);
    let reparsed = Document::parse(&text).unwrap_or_else(|err| panic!("{err}\n{text}"));
    assert_eq!(reparsed, doc, "{text}");
});
