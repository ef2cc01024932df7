//! Boundary helpers for validating untrusted submission payloads.

use serde::Serialize;
use serde_json::Value;

/// Ordered, human-readable validation failures for one submission.
///
/// Endpoints collect every field violation before rejecting, so a caller can
/// fix the whole form in one round trip.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors(Vec<String>);

impl FieldErrors {
    pub fn push(&mut self, message: impl Into<String>) {
        self.0.push(message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn messages(&self) -> &[String] {
        &self.0
    }

    pub fn into_messages(self) -> Vec<String> {
        self.0
    }
}

/// One field of an untrusted JSON payload, before validation.
///
/// JSON `null` counts as missing, exactly like an absent key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RawField<'a> {
    Missing,
    NotAString,
    Text(&'a str),
}

/// Looks up `key` in the payload. Non-object payloads have no fields, so
/// every lookup on them reports [`RawField::Missing`].
pub fn string_field<'a>(payload: &'a Value, key: &str) -> RawField<'a> {
    match payload.get(key) {
        None | Some(Value::Null) => RawField::Missing,
        Some(Value::String(value)) => RawField::Text(value),
        Some(_) => RawField::NotAString,
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn string_field_classification() {
        let payload = json!({
            "text": "hello",
            "number": 7,
            "null": null,
        });

        assert_eq!(string_field(&payload, "text"), RawField::Text("hello"));
        assert_eq!(string_field(&payload, "number"), RawField::NotAString);
        assert_eq!(string_field(&payload, "null"), RawField::Missing);
        assert_eq!(string_field(&payload, "absent"), RawField::Missing);
    }

    #[test]
    fn non_object_payload_has_no_fields() {
        assert_eq!(string_field(&json!([1, 2, 3]), "name"), RawField::Missing);
        assert_eq!(string_field(&json!("text"), "name"), RawField::Missing);
    }
}
