use serde_json::Value;

/// Decode a successful response body without imposing a schema.
///
/// JSON bodies are returned as-is. A blank body becomes `null` and any other
/// non-JSON body is returned as a JSON string.
pub fn decode_payload(body: &str) -> Value {
    if body.trim().is_empty() {
        return Value::Null;
    }
    serde_json::from_str(body).unwrap_or_else(|_| Value::String(body.to_owned()))
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn json_body_is_passed_through() {
        assert_eq!(decode_payload(r#"{"balance":100}"#), json!({ "balance": 100 }));
        assert_eq!(decode_payload("[1,2]"), json!([1, 2]));
    }

    #[test]
    fn blank_body_is_null() {
        assert_eq!(decode_payload(""), Value::Null);
        assert_eq!(decode_payload("  \n"), Value::Null);
    }

    #[test]
    fn non_json_body_is_kept_as_text() {
        assert_eq!(
            decode_payload("Message Sent"),
            Value::String("Message Sent".to_owned())
        );
    }
}
