use deny_filter::DenyFilter;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Instant;
use tracing::{debug, info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Method {
    /// true when the message contains no deny-listed word
    Validate,
    /// true when the message contains a deny-listed word
    Exists,
    /// message with deny-listed words masked
    Filter,
}

impl Method {
    pub fn as_str(self) -> &'static str {
        match self {
            Method::Validate => "validate",
            Method::Exists => "exists",
            Method::Filter => "filter",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One request line
#[derive(Debug, Clone, Deserialize)]
pub struct Request {
    pub method: Method,
    #[serde(default)]
    pub message: String,
}

/// One response line
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Response {
    Verdict { result: bool },
    Text { result: String },
    Error { error: String },
}

impl Response {
    pub fn to_line(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|e| encoding_failure(&e))
    }
}

fn encoding_failure(e: &dyn fmt::Display) -> String {
    serde_json::json!({ "error": format!("failed to encode response: {e}") }).to_string()
}

/// Runs one request against the current dictionary
pub fn dispatch(filter: &DenyFilter, request: &Request) -> Response {
    let started = Instant::now();
    let response = match request.method {
        Method::Validate => Response::Verdict {
            result: filter.validate(&request.message),
        },
        Method::Exists => Response::Verdict {
            result: filter.exists(&request.message),
        },
        Method::Filter => Response::Text {
            result: filter.filter(&request.message),
        },
    };

    info!(
        method = %request.method,
        chars = request.message.chars().count(),
        took = ?started.elapsed(),
        "Request handled"
    );
    debug!(text = %request.message, response = ?response);
    response
}

/// Parses and runs one input line; blank lines produce no response
pub fn handle_line(filter: &DenyFilter, line: &str) -> Option<Response> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }

    match serde_json::from_str::<Request>(line) {
        Ok(request) => Some(dispatch(filter, &request)),
        Err(e) => {
            warn!("Rejected request: {e}");
            Some(Response::Error {
                error: format!("invalid request: {e}"),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use deny_filter::FilterConfig;

    fn filter() -> DenyFilter {
        DenyFilter::from_words(FilterConfig::default(), ["bad", "worse"])
    }

    #[test]
    fn test_validate_and_exists() {
        let f = filter();
        assert_eq!(
            handle_line(&f, r#"{"method":"validate","message":"all good"}"#),
            Some(Response::Verdict { result: true })
        );
        assert_eq!(
            handle_line(&f, r#"{"method":"validate","message":"BAD news"}"#),
            Some(Response::Verdict { result: false })
        );
        assert_eq!(
            handle_line(&f, r#"{"method":"exists","message":"worse"}"#),
            Some(Response::Verdict { result: true })
        );
    }

    #[test]
    fn test_filter() {
        let f = filter();
        assert_eq!(
            handle_line(&f, r#"{"method":"filter","message":"bad to worse"}"#),
            Some(Response::Text {
                result: "*** to *****".to_string()
            })
        );
    }

    #[test]
    fn test_missing_message_is_empty_text() {
        let f = filter();
        assert_eq!(
            handle_line(&f, r#"{"method":"filter"}"#),
            Some(Response::Text {
                result: String::new()
            })
        );
    }

    #[test]
    fn test_blank_line_is_ignored() {
        assert_eq!(handle_line(&filter(), "   "), None);
    }

    #[test]
    fn test_malformed_requests() {
        let f = filter();
        for line in ["not json", r#"{"method":"delete","message":"x"}"#, r#"{"message":"x"}"#] {
            match handle_line(&f, line) {
                Some(Response::Error { error }) => assert!(error.starts_with("invalid request")),
                other => panic!("expected error for {line}, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_response_encoding() {
        assert_eq!(Response::Verdict { result: true }.to_line(), r#"{"result":true}"#);
        assert_eq!(
            Response::Text {
                result: "a*b".to_string()
            }
            .to_line(),
            r#"{"result":"a*b"}"#
        );
        assert_eq!(
            Response::Error {
                error: "oops".to_string()
            }
            .to_line(),
            r#"{"error":"oops"}"#
        );
    }

    #[test]
    fn test_encoding_failure_is_valid_json() {
        let line = encoding_failure(&"bad \"key\"\nat line 1");
        let value: serde_json::Value = serde_json::from_str(&line).unwrap();
        assert_eq!(
            value["error"],
            "failed to encode response: bad \"key\"\nat line 1"
        );
        assert!(!line.contains('\n'));
    }
}
