//! JSON bodies exchanged with the `/ask` endpoint.

use serde::Serialize;
use serde_json::Value;

use crate::error::Error;

/// Client → server: `{"query": "..."}`.
#[derive(Debug, Clone, Serialize)]
pub struct AskRequest<'a> {
    pub query: &'a str,
}

impl<'a> AskRequest<'a> {
    pub fn new(query: &'a str) -> Self {
        Self { query }
    }
}

/// Server → client: any JSON document, expected to carry an `answer` field.
///
/// The body is kept as a raw `Value` because the shape is not validated
/// beyond looking up `answer`.
#[derive(Debug, Clone)]
pub struct AskResponse {
    body: Value,
}

impl AskResponse {
    /// Decode a response body. Fails if the body is not JSON, or is a bare
    /// `null` that no `answer` can be looked up on.
    pub fn from_body(body: &str) -> Result<Self, Error> {
        let body: Value = serde_json::from_str(body)?;
        if body.is_null() {
            return Err(Error::serialization("Response body is null"));
        }
        Ok(Self { body })
    }

    pub fn from_value(body: Value) -> Self {
        Self { body }
    }

    /// The `answer` field, if the body is an object that has one.
    pub fn answer(&self) -> Option<&Value> {
        self.body.get("answer")
    }

    /// Text to display for this response.
    ///
    /// Strings are shown verbatim; a missing or `null` answer shows nothing;
    /// any other JSON value is shown as its JSON text.
    pub fn answer_text(&self) -> String {
        match self.answer() {
            None | Some(Value::Null) => String::new(),
            Some(Value::String(s)) => s.clone(),
            Some(other) => other.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_request_body() {
        let body = serde_json::to_value(AskRequest::new("What is CAM?")).unwrap();
        assert_eq!(body, json!({ "query": "What is CAM?" }));
    }

    #[test]
    fn test_request_keeps_whitespace() {
        let body = serde_json::to_string(&AskRequest::new("  padded \n")).unwrap();
        assert_eq!(body, r#"{"query":"  padded \n"}"#);
    }

    #[test]
    fn test_string_answer() {
        let resp = AskResponse::from_body(r#"{"answer": "42"}"#).unwrap();
        assert_eq!(resp.answer_text(), "42");
    }

    #[test]
    fn test_extra_fields_ignored() {
        let resp =
            AskResponse::from_body(r#"{"answer": "CAM is...", "sources": ["a.pdf"]}"#).unwrap();
        assert_eq!(resp.answer_text(), "CAM is...");
    }

    #[test]
    fn test_missing_or_null_answer_is_empty() {
        assert_eq!(AskResponse::from_body("{}").unwrap().answer_text(), "");
        assert_eq!(
            AskResponse::from_body(r#"{"answer": null}"#).unwrap().answer_text(),
            ""
        );
        assert_eq!(
            AskResponse::from_body(r#"{"detail": "Not Found"}"#)
                .unwrap()
                .answer_text(),
            ""
        );
    }

    #[test]
    fn test_non_object_body_has_no_answer() {
        assert_eq!(AskResponse::from_body("[1, 2]").unwrap().answer_text(), "");
        assert_eq!(AskResponse::from_body(r#""answer""#).unwrap().answer_text(), "");
    }

    #[test]
    fn test_null_body_is_error() {
        let err = AskResponse::from_body("null").unwrap_err();
        assert!(matches!(err, Error::Serialization(_)));
    }

    #[test]
    fn test_non_string_answer_shown_as_json() {
        assert_eq!(
            AskResponse::from_value(json!({ "answer": 42 })).answer_text(),
            "42"
        );
        assert_eq!(
            AskResponse::from_value(json!({ "answer": true })).answer_text(),
            "true"
        );
    }

    #[test]
    fn test_invalid_json_is_error() {
        let err = AskResponse::from_body("<html>502 Bad Gateway</html>").unwrap_err();
        assert!(matches!(err, Error::Serialization(_)));
    }
}
