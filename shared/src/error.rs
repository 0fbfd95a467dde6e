use serde::Deserialize;
use thiserror::Error;

/// Message used when a failed response carries no usable `message` field.
pub const FALLBACK_ERROR_MESSAGE: &str = "Something went wrong";

/// The one error the console knows about: a request failed and here is a
/// message an operator can read.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ApiError {
    pub message: String,
}

#[derive(Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

impl ApiError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Translate the body of a non-2xx response.
    pub fn from_failure_body(body: &str) -> Self {
        let message = serde_json::from_str::<ErrorBody>(body)
            .ok()
            .and_then(|parsed| parsed.message)
            .filter(|message| !message.is_empty())
            .unwrap_or_else(|| FALLBACK_ERROR_MESSAGE.to_string());
        Self::new(message)
    }

    pub fn network(detail: impl std::fmt::Debug) -> Self {
        Self::new(format!("Network error: {:?}", detail))
    }

    pub fn parse(detail: impl std::fmt::Debug) -> Self {
        Self::new(format!("Parse error: {:?}", detail))
    }

    pub fn serialize(detail: impl std::fmt::Debug) -> Self {
        Self::new(format!("Serialize error: {:?}", detail))
    }

    /// `Error: <message>`, the form most info dialogs use.
    pub fn prefixed(&self) -> String {
        format!("Error: {}", self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_message_is_carried_through() {
        let err = ApiError::from_failure_body(r#"{"message":"not found"}"#);
        assert_eq!(err.message, "not found");
        assert_eq!(err.prefixed(), "Error: not found");
        assert_eq!(err.to_string(), "not found");
    }

    #[test]
    fn unusable_bodies_fall_back() {
        let bodies = [
            "",
            "<html>502</html>",
            "{}",
            r#"{"message":""}"#,
            r#"{"message":null}"#,
            r#"{"message":5}"#,
        ];
        for body in bodies {
            assert_eq!(
                ApiError::from_failure_body(body).message,
                FALLBACK_ERROR_MESSAGE,
                "body: {body}"
            );
        }
    }
}
