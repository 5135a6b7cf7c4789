//! Lenient decoding of model replies that are expected to contain JSON.
//!
//! The upstream model is not contract-bound to emit valid JSON, so decoding
//! never fails: a reply that does not parse comes back as [`Decoded::Raw`],
//! untouched. Callers that need structure decide what a raw reply means.

use serde_json::Value;

/// Result of decoding a model reply.
///
/// # Examples
///
/// ```
/// use linguatale_generate::{decode, Decoded};
///
/// match decode("not json at all") {
///     Decoded::Raw(text) => assert_eq!(text, "not json at all"),
///     Decoded::Json(_) => unreachable!(),
/// }
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Decoded {
    /// The reply parsed as strict JSON
    Json(Value),
    /// The original reply, verbatim, when parsing failed
    Raw(String),
}

impl Decoded {
    /// The decoded object's fields, if the reply parsed to a JSON object.
    pub fn as_object(&self) -> Option<&serde_json::Map<String, Value>> {
        match self {
            Decoded::Json(Value::Object(map)) => Some(map),
            _ => None,
        }
    }
}

/// Decode a model reply that should contain a JSON payload.
///
/// Strips a leading markdown code-fence marker (a `json`-tagged or bare
/// fence) and a trailing closing fence, trims, and attempts a strict JSON
/// parse. On parse failure the *original* input is returned untouched.
///
/// # Examples
///
/// ```
/// use linguatale_generate::{decode, Decoded};
/// use serde_json::json;
///
/// let plain = decode(r#"{"a":1}"#);
/// let fenced = decode("```json\n{\"a\":1}\n```");
/// assert_eq!(plain, Decoded::Json(json!({"a":1})));
/// assert_eq!(plain, fenced);
/// ```
pub fn decode(raw: &str) -> Decoded {
    let mut cleaned = raw.trim();

    if let Some(rest) = cleaned.strip_prefix("```json") {
        cleaned = rest;
    } else if let Some(rest) = cleaned.strip_prefix("```") {
        cleaned = rest;
    }
    if let Some(rest) = cleaned.strip_suffix("```") {
        cleaned = rest;
    }
    let cleaned = cleaned.trim();

    match serde_json::from_str(cleaned) {
        Ok(value) => Decoded::Json(value),
        Err(_) => Decoded::Raw(raw.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn clean_json_parses() {
        assert_eq!(decode(r#"{"a":1}"#), Decoded::Json(json!({"a":1})));
        assert_eq!(decode("[1, 2, 3]"), Decoded::Json(json!([1, 2, 3])));
    }

    #[test]
    fn fenced_json_decodes_to_the_same_value() {
        let plain = decode(r#"{"a":1}"#);
        assert_eq!(decode("```json\n{\"a\":1}\n```"), plain);
        assert_eq!(decode("```\n{\"a\":1}\n```"), plain);
        assert_eq!(decode("  ```json\n{\"a\":1}\n```  "), plain);
    }

    #[test]
    fn unparseable_input_comes_back_verbatim() {
        assert_eq!(
            decode("not json at all"),
            Decoded::Raw("not json at all".to_string())
        );
        // The original, not the fence-stripped remainder
        assert_eq!(
            decode("```json\nbroken {\n```"),
            Decoded::Raw("```json\nbroken {\n```".to_string())
        );
    }

    #[test]
    fn as_object_rejects_non_objects() {
        assert!(decode(r#"{"a":1}"#).as_object().is_some());
        assert!(decode("[1]").as_object().is_none());
        assert!(decode("plain").as_object().is_none());
    }
}
