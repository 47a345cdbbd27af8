use proptest::prelude::*;
use svdf::{Node, Value, Warning};

fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for c in s.chars() {
        match c {
            '\t' => out.push_str("\\t"),
            '\n' => out.push_str("\\n"),
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            c => out.push(c),
        }
    }
    out.push('"');
    out
}

fn emit_value(out: &mut String, value: &Value, depth: usize) {
    match value {
        Value::Leaf(s) => {
            out.push_str("\t\t");
            out.push_str(&escape(s));
            out.push('\n');
        }
        Value::Node(node) => {
            out.push('\n');
            out.push_str(&"\t".repeat(depth));
            out.push_str("{\n");
            for (k, v) in node {
                out.push_str(&"\t".repeat(depth + 1));
                out.push_str(&escape(k));
                emit_value(out, v, depth + 1);
            }
            out.push_str(&"\t".repeat(depth));
            out.push_str("}\n");
        }
    }
}

/// Writes a document in the layout Steam uses.
fn emit(name: &str, value: &Value) -> String {
    let mut out = escape(name);
    emit_value(&mut out, value, 0);
    out
}

fn text() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9 _.\t\n\"\\\\{}é]{0,8}"
}

fn value_strategy() -> impl Strategy<Value = Value> {
    let leaf = text().prop_map(Value::from);
    leaf.prop_recursive(4, 48, 6, |inner| {
        prop::collection::btree_map(text(), inner, 0..6).prop_map(|m| Value::Node(Node::from(m)))
    })
}

#[test]
fn emitter_layout_is_canonical() -> Result<(), Box<dyn std::error::Error>> {
    let root: Node = [("appid", Value::from("10")), ("UserConfig", Value::Node(Node::new()))]
        .into_iter()
        .collect();
    let text = emit("AppState", &Value::Node(root));
    assert_eq!(
        text,
        "\"AppState\"\n{\n\t\"UserConfig\"\n\t{\n\t}\n\t\"appid\"\t\t\"10\"\n}\n"
    );
    let mut warnings: Vec<Warning> = Vec::new();
    let doc = svdf::parse_with(text.as_bytes(), &svdf::ParseOptions::default(), &mut warnings)?;
    assert!(warnings.is_empty(), "{warnings:?}");
    assert_eq!(doc.lookup_string(&["appid"])?, "10");
    Ok(())
}

proptest! {
    #[test]
    fn parse_inverts_emit(name in text(), value in value_strategy()) {
        let text = emit(&name, &value);
        let mut warnings: Vec<Warning> = Vec::new();
        let doc = svdf::parse_with(text.as_bytes(), &svdf::ParseOptions::default(), &mut warnings)
            .map_err(|e| TestCaseError::fail(e.to_string()))?;
        prop_assert!(warnings.is_empty(), "{:?}\n{}", warnings, text);
        prop_assert_eq!(doc.root_name(), name.as_str());
        prop_assert_eq!(doc.root_value(), &value);
    }
}
