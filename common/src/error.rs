use serde_json::Value;
use thiserror::Error;

/// Every way a dashboard action can fail.
///
/// All variants end up as a single line of text next to the panel that
/// triggered the action; none of them stops the application.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// The request never produced an HTTP response.
    #[error("network error: {0}")]
    Network(String),

    /// The service answered with a non-success status. `detail` holds the
    /// service-provided explanation when the body carried a usable one.
    #[error("request failed with status {status}")]
    Status { status: u16, detail: Option<String> },

    /// Rejected before sending anything.
    #[error("{0}")]
    InvalidInput(String),

    /// The request body could not be serialized.
    #[error("could not encode request body: {0}")]
    Encode(String),

    /// A success response whose body did not match the expected shape.
    #[error("unexpected response body: {0}")]
    Decode(String),

    /// A browser API refused the operation (e.g. building form data).
    #[error("browser error: {0}")]
    Browser(String),
}

impl ApiError {
    /// Builds a `Status` error from a failed response, pulling `detail` out
    /// of the body when present.
    pub fn from_status(status: u16, body: &str) -> Self {
        ApiError::Status {
            status,
            detail: extract_detail(body),
        }
    }

    /// Text shown to the user. Server-provided details and client-side
    /// validation messages are shown as-is; everything else collapses to
    /// `fallback`.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            ApiError::Status {
                detail: Some(detail),
                ..
            } => detail.clone(),
            ApiError::InvalidInput(message) => message.clone(),
            _ => fallback.to_string(),
        }
    }
}

/// Reads the `detail` field of an error body.
///
/// Accepts a plain string or a list of validation entries carrying `msg`,
/// which are joined with `"; "`. Returns `None` for anything else.
pub fn extract_detail(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    match value.get("detail")? {
        Value::String(detail) if !detail.trim().is_empty() => Some(detail.clone()),
        Value::Array(entries) => {
            let messages: Vec<&str> = entries
                .iter()
                .filter_map(|entry| entry.get("msg").and_then(Value::as_str))
                .collect();
            if messages.is_empty() {
                None
            } else {
                Some(messages.join("; "))
            }
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FALLBACK: &str = "검색 중 오류가 발생했습니다.";

    #[test]
    fn string_detail_is_extracted() {
        let body = r#"{"detail": "이력서를 찾을 수 없습니다."}"#;
        assert_eq!(
            extract_detail(body).as_deref(),
            Some("이력서를 찾을 수 없습니다.")
        );
    }

    #[test]
    fn validation_entries_are_joined() {
        let body = r#"{"detail": [
            {"loc": ["body", "keyword"], "msg": "field required"},
            {"loc": ["body", "max_results"], "msg": "ensure this value is less than or equal to 100"}
        ]}"#;
        assert_eq!(
            extract_detail(body).as_deref(),
            Some("field required; ensure this value is less than or equal to 100")
        );
    }

    #[test]
    fn missing_or_unusable_detail_is_none() {
        assert_eq!(extract_detail(""), None);
        assert_eq!(extract_detail("<html>Bad Gateway</html>"), None);
        assert_eq!(extract_detail(r#"{"error": "boom"}"#), None);
        assert_eq!(extract_detail(r#"{"detail": 42}"#), None);
        assert_eq!(extract_detail(r#"{"detail": "   "}"#), None);
        assert_eq!(extract_detail(r#"{"detail": [{"loc": []}]}"#), None);
    }

    #[test]
    fn status_with_detail_shows_detail() {
        let err = ApiError::from_status(404, r#"{"detail": "채용 공고를 찾을 수 없습니다."}"#);
        assert_eq!(err.user_message(FALLBACK), "채용 공고를 찾을 수 없습니다.");
    }

    #[test]
    fn status_without_detail_falls_back() {
        let err = ApiError::from_status(502, "Bad Gateway");
        assert_eq!(
            err,
            ApiError::Status {
                status: 502,
                detail: None
            }
        );
        assert_eq!(err.user_message(FALLBACK), FALLBACK);
    }

    #[test]
    fn transport_and_decode_failures_fall_back() {
        assert_eq!(
            ApiError::Network("connection refused".into()).user_message(FALLBACK),
            FALLBACK
        );
        assert_eq!(
            ApiError::Decode("missing field `jobs`".into()).user_message(FALLBACK),
            FALLBACK
        );
        assert_eq!(
            ApiError::Encode("key must be a string".into()).user_message(FALLBACK),
            FALLBACK
        );
    }

    #[test]
    fn invalid_input_shows_its_own_message() {
        let err = ApiError::InvalidInput("검색 키워드를 입력하세요".into());
        assert_eq!(err.user_message(FALLBACK), "검색 키워드를 입력하세요");
    }
}
