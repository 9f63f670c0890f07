//! API Errors

use meal_domain::DomainError;
use serde_json::Value;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("The server did not answer within {0} ms")]
    Timeout(u32),

    #[error("Your session has expired, please log in again")]
    Unauthorized,

    #[error("{message} (HTTP {status})")]
    Status { status: u16, message: String },

    #[error("Unexpected response from the server: {0}")]
    Decode(String),

    #[error("Browser storage unavailable: {0}")]
    Storage(String),

    #[error(transparent)]
    Domain(#[from] DomainError),
}

pub type ApiResult<T> = Result<T, ApiError>;

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            ApiError::Decode(e.to_string())
        } else {
            ApiError::Network(e.to_string())
        }
    }
}

/// Human readable text out of an error body.
///
/// The backend answers `{"error": ".."}`, `{"detail": ".."}` or a map of
/// field names to message lists.
pub fn error_message(body: &str) -> String {
    let Ok(Value::Object(map)) = serde_json::from_str::<Value>(body) else {
        let body = body.trim();
        return if body.is_empty() || body.starts_with('<') {
            "Request failed".to_string()
        } else {
            body.chars().take(200).collect()
        };
    };

    for key in ["error", "detail", "non_field_errors"] {
        if let Some(text) = map.get(key).and_then(flatten) {
            return text;
        }
    }

    let fields: Vec<String> = map
        .iter()
        .filter_map(|(field, value)| flatten(value).map(|text| format!("{field}: {text}")))
        .collect();
    if fields.is_empty() {
        "Request failed".to_string()
    } else {
        fields.join("; ")
    }
}

fn flatten(value: &Value) -> Option<String> {
    match value {
        Value::String(text) => Some(text.clone()),
        Value::Array(items) => {
            let parts: Vec<String> = items.iter().filter_map(flatten).collect();
            (!parts.is_empty()).then(|| parts.join(" "))
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_and_detail_keys() {
        assert_eq!(error_message(r#"{"error": "User not found"}"#), "User not found");
        assert_eq!(
            error_message(r#"{"detail": "No active account found with the given credentials"}"#),
            "No active account found with the given credentials"
        );
    }

    #[test]
    fn test_field_errors_are_joined() {
        let body = r#"{"username": ["A user with that username already exists."]}"#;
        assert_eq!(error_message(body), "username: A user with that username already exists.");
    }

    #[test]
    fn test_non_json_bodies() {
        assert_eq!(error_message(""), "Request failed");
        assert_eq!(error_message("<html>500</html>"), "Request failed");
        assert_eq!(error_message("Bad Gateway"), "Bad Gateway");
    }

    #[test]
    fn test_display_includes_status() {
        let e = ApiError::Status { status: 400, message: "Invalid date range".into() };
        assert_eq!(e.to_string(), "Invalid date range (HTTP 400)");
    }
}
