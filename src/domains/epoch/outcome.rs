//! Outcome of a single call to the epoch server.
//!
//! Every request ends in exactly one of these variants; the tool handlers
//! render each variant into text, so no outcome is ever silently dropped.

use serde_json::Value;

/// Result of one HTTP exchange with the epoch server.
///
/// The three variants cover the three layers a call can fail (or succeed)
/// at: the remote answered with a 2xx and a decodable body, the remote
/// answered with an error status, or no HTTP response was obtained at all.
#[derive(Debug, Clone)]
pub enum HttpOutcome {
    /// The remote answered 2xx and the body decoded as JSON.
    Success(Value),

    /// The remote answered with a non-2xx status.
    ///
    /// `detail` is the error body: decoded JSON rendered compactly when the
    /// body parses, otherwise the raw response text.
    HttpError { status: u16, detail: String },

    /// No usable HTTP response: connection refused, timeout, DNS failure,
    /// or a body that could not be read/decoded.
    TransportFailure(String),
}

impl HttpOutcome {
    /// Build the error detail from a raw response body.
    ///
    /// Tries to decode the body as JSON for structured detail; keeps the
    /// raw text when decoding fails.
    pub fn error_detail(raw: &str) -> String {
        match serde_json::from_str::<Value>(raw) {
            Ok(value) => value.to_string(),
            Err(_) => raw.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_detail_json_body() {
        let detail = HttpOutcome::error_detail(r#"{"error": "boom"}"#);
        assert_eq!(detail, r#"{"error":"boom"}"#);
    }

    #[test]
    fn test_error_detail_plain_text_body() {
        let detail = HttpOutcome::error_detail("boom");
        assert_eq!(detail, "boom");
    }

    #[test]
    fn test_error_detail_empty_body() {
        let detail = HttpOutcome::error_detail("");
        assert_eq!(detail, "");
    }

    #[test]
    fn test_error_detail_json_array_body() {
        let detail = HttpOutcome::error_detail(r#"[1, 2]"#);
        assert_eq!(detail, "[1,2]");
    }
}
