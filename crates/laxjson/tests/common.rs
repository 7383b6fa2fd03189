#![allow(missing_docs)]
#![allow(dead_code)]

use laxjson::{Document, Tree};

pub const GLOSSARY: &str = "{
    'glossary': {
        'title': 'example glossary',
        'GlossDiv': {
            'title': 'S',
            'GlossList': {
                'GlossEntry': {
                    'ID': 'SGML',
                    'GlossDef': {
                        'para': 'A meta-markup language.',
                        'GlossSeeAlso': ['GML', 'XML']
                    },
                    'GlossSee': 'markup'
                }
            }
        }
    }
}";

/// The pets document, built node by node.
pub fn pets() -> Document {
    let mut doc = Document::create();
    let mut root = doc.root_mut();
    root.add_string(Some("first_name"), "Marc");
    root.add_string(Some("surname"), "Fascia");
    {
        let mut pets = root.add_array(Some("pets"));
        for name in ["Chiffon", "Yoda", "Phoebe", "Kuzko", "Doki"] {
            pets.add_string(None, name);
        }
    }
    root.add_number(Some("age"), 42.0);
    root.add_bool(Some("retired"), false);
    root.add_null(Some("notes"));
    root.add_string(Some("nickname"), "Marc'o");
    root.attach(Some("empty"), Tree::array());
    doc
}
