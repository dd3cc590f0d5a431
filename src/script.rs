//! `<script type="application/ld+json">` rendering.
//!
//! JSON-LD is embedded verbatim in HTML, so `<`, `>` and `&` are written as
//! JSON unicode escapes. The payload stays valid JSON with identical values
//! and can never contain `</script>`.

use tasca_jsonld::SchemaObject;

const OPEN: &str = r#"<script type="application/ld+json">"#;
const CLOSE: &str = "</script>";

/// Compact script tag.
pub fn script_tag(document: &SchemaObject) -> Result<String, serde_json::Error> {
    let json = serde_json::to_string(document)?;
    Ok(wrap(&json))
}

/// Indented script tag, for debugging output.
pub fn script_tag_pretty(document: &SchemaObject) -> Result<String, serde_json::Error> {
    let json = serde_json::to_string_pretty(document)?;
    Ok(format!("{}\n{}\n{}", OPEN, escape_html(&json), CLOSE))
}

fn wrap(json: &str) -> String {
    format!("{}{}{}", OPEN, escape_html(json), CLOSE)
}

fn escape_html(json: &str) -> String {
    json.replace('&', "\\u0026")
        .replace('<', "\\u003c")
        .replace('>', "\\u003e")
}
