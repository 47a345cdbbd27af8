#![cfg(feature = "json")]
use serde_json::json;

const SRC: &[u8] = b"\"AppState\"\n{\n\t\"appid\"\t\t\"10\"\n\t\"UserConfig\"\n\t{\n\t\t\"language\"\t\t\"english\"\n\t}\n\t\"Empty\"\n\t{\n\t}\n}\n";

#[test]
fn document_to_json_nests_root() -> Result<(), Box<dyn std::error::Error>> {
    let doc = svdf::parse(SRC)?;
    assert_eq!(
        doc.to_json(),
        json!({"AppState": {"appid": "10", "UserConfig": {"language": "english"}, "Empty": {}}})
    );
    Ok(())
}

#[test]
fn serialize_matches_to_json() -> Result<(), Box<dyn std::error::Error>> {
    let doc = svdf::parse(SRC)?;
    assert_eq!(serde_json::to_value(&doc)?, doc.to_json());
    assert_eq!(serde_json::to_value(doc.root_value())?, doc.root_value().to_json());
    Ok(())
}

#[test]
fn numbers_stay_strings() -> Result<(), Box<dyn std::error::Error>> {
    let doc = svdf::parse(b"\"r\"\t\t\"42\"\n")?;
    assert_eq!(serde_json::to_string(&doc)?, r#"{"r":"42"}"#);
    Ok(())
}

#[test]
fn keys_serialize_in_sorted_order() -> Result<(), Box<dyn std::error::Error>> {
    let doc = svdf::parse(SRC)?;
    let node = doc.lookup_node::<&str>(&[])?;
    let text = serde_json::to_string(node)?;
    assert_eq!(text, r#"{"Empty":{},"UserConfig":{"language":"english"},"appid":"10"}"#);
    Ok(())
}
