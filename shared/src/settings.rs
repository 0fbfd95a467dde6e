//! Settings panel: wire types, database maintenance and the API key field.

use serde::{Deserialize, Serialize};

/// Current values returned by `GET /admin/settings`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    pub login_attempts: u32,
    pub session_timeout: u32,
    pub video_quality: String,
}

/// Security half of the settings form; posted on its own.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SecuritySettingsUpdate {
    pub login_attempts: u32,
    pub session_timeout: u32,
}

/// System half of the settings form; posted on its own.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SystemSettingsUpdate {
    pub video_quality: String,
}

pub const VIDEO_QUALITIES: [&str; 3] = ["720p", "1080p", "4k"];

impl SecuritySettingsUpdate {
    /// Build from raw form input, naming the first field that is not a
    /// whole number.
    pub fn parse(login_attempts: &str, session_timeout: &str) -> Result<Self, String> {
        let login_attempts = login_attempts
            .trim()
            .parse::<u32>()
            .map_err(|_| "Login attempts must be a whole number.".to_string())?;
        let session_timeout = session_timeout
            .trim()
            .parse::<u32>()
            .map_err(|_| "Session timeout must be a whole number.".to_string())?;
        Ok(Self {
            login_attempts,
            session_timeout,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DatabaseAction {
    Backup,
    Optimize,
    Clear,
}

/// Body of `POST /admin/database`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatabaseRequest {
    pub action: DatabaseAction,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatabaseResponse {
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub success: bool,
}

impl DatabaseAction {
    /// Confirmation dialog title and message for the actions that ask first.
    /// `Clear` has its own typed-confirmation dialog instead.
    pub fn confirmation(self) -> Option<(&'static str, &'static str)> {
        match self {
            DatabaseAction::Backup => {
                Some(("Backup Database", "Are you sure you want to back up the database?"))
            },
            DatabaseAction::Optimize => {
                Some(("Optimize Database", "Are you sure you want to optimize the database?"))
            },
            DatabaseAction::Clear => None,
        }
    }
}

/// Literal the operator must type before all data is cleared.
pub const CLEAR_CONFIRMATION_LITERAL: &str = "DELETE";

pub fn clear_confirmed(typed: &str) -> bool {
    typed == CLEAR_CONFIRMATION_LITERAL
}

/// The database feedback line under the maintenance buttons.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Feedback {
    pub message: String,
    pub success: bool,
}

impl Feedback {
    pub fn from_response(response: &DatabaseResponse) -> Self {
        Self {
            message: response.message.clone(),
            success: response.success,
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            success: false,
        }
    }

    pub fn class(&self) -> &'static str {
        if self.success {
            "feedback-message success"
        } else {
            "feedback-message error"
        }
    }
}

/// What the panel does once a clear-all-data request resolves. On
/// `reload_directories` the dialog closes and both directories restart from
/// page 1; otherwise only the feedback line changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClearOutcome {
    pub feedback: Feedback,
    pub reload_directories: bool,
}

impl ClearOutcome {
    pub fn from_response(response: &DatabaseResponse) -> Self {
        Self {
            feedback: Feedback::from_response(response),
            reload_directories: response.success,
        }
    }

    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            feedback: Feedback::failure(message),
            reload_directories: false,
        }
    }
}

/// Reply of `GET /admin/api_key`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiKeyResponse {
    pub api_key: String,
}

/// Shown in place of the key whenever it is not revealed.
pub const SECRET_MASK: &str = "••••••••••••••••";

/// The API key field. The real value only lives in `Revealed`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SecretField {
    #[default]
    Masked,
    /// A fetch is in flight.
    Revealing,
    Revealed(String),
}

/// What the caller must do after a toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SecretToggle {
    /// Fetch the key, then call [`SecretField::revealed`] or
    /// [`SecretField::reveal_failed`].
    Fetch,
    /// Nothing to do; the field already shows the mask again.
    Hidden,
    /// A fetch is already running.
    Ignored,
}

impl SecretField {
    pub fn toggle(&mut self) -> SecretToggle {
        match self {
            SecretField::Masked => {
                *self = SecretField::Revealing;
                SecretToggle::Fetch
            },
            SecretField::Revealing => SecretToggle::Ignored,
            SecretField::Revealed(_) => {
                *self = SecretField::Masked;
                SecretToggle::Hidden
            },
        }
    }

    pub fn revealed(&mut self, value: String) {
        if matches!(self, SecretField::Revealing) {
            *self = SecretField::Revealed(value);
        }
    }

    pub fn reveal_failed(&mut self) {
        if matches!(self, SecretField::Revealing) {
            *self = SecretField::Masked;
        }
    }

    pub fn display_value(&self) -> &str {
        match self {
            SecretField::Revealed(value) => value,
            _ => SECRET_MASK,
        }
    }

    pub fn input_type(&self) -> &'static str {
        match self {
            SecretField::Revealed(_) => "text",
            _ => "password",
        }
    }

    pub fn button_label(&self) -> &'static str {
        match self {
            SecretField::Revealed(_) => "Hide",
            _ => "Reveal",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clear_requires_exact_literal() {
        assert!(clear_confirmed("DELETE"));
        for typed in ["delete", "DELETE ", " DELETE", "DELET", "", "Delete"] {
            assert!(!clear_confirmed(typed), "typed: {typed:?}");
        }
    }

    #[test]
    fn reveal_fetches_once_per_transition() {
        let mut field = SecretField::default();
        assert_eq!(field.display_value(), SECRET_MASK);

        assert_eq!(field.toggle(), SecretToggle::Fetch);
        assert_eq!(field.toggle(), SecretToggle::Ignored);
        field.revealed("sk-live-123".to_string());
        assert_eq!(field.display_value(), "sk-live-123");
        assert_eq!(field.input_type(), "text");
        assert_eq!(field.button_label(), "Hide");

        assert_eq!(field.toggle(), SecretToggle::Hidden);
        assert_eq!(field, SecretField::Masked);
        assert_eq!(field.display_value(), SECRET_MASK);
        assert_eq!(field.input_type(), "password");

        assert_eq!(field.toggle(), SecretToggle::Fetch);
    }

    #[test]
    fn failed_reveal_returns_to_mask() {
        let mut field = SecretField::default();
        field.toggle();
        field.reveal_failed();
        assert_eq!(field, SecretField::Masked);
        assert_eq!(field.button_label(), "Reveal");
    }

    #[test]
    fn late_reveal_after_hide_is_dropped() {
        let mut field = SecretField::Masked;
        field.revealed("stale".to_string());
        assert_eq!(field, SecretField::Masked);
    }

    #[test]
    fn security_form_parsing() {
        assert_eq!(
            SecuritySettingsUpdate::parse(" 5", "30 "),
            Ok(SecuritySettingsUpdate {
                login_attempts: 5,
                session_timeout: 30
            })
        );
        assert!(SecuritySettingsUpdate::parse("five", "30").is_err());
        assert!(SecuritySettingsUpdate::parse("5", "-1").is_err());
    }

    #[test]
    fn feedback_styling() {
        let ok = Feedback::from_response(&DatabaseResponse {
            message: "Backup complete".to_string(),
            success: true,
        });
        assert_eq!(ok.class(), "feedback-message success");
        assert_eq!(Feedback::failure("boom").class(), "feedback-message error");
        assert_eq!(DatabaseAction::Clear.confirmation(), None);
    }

    #[test]
    fn only_successful_clear_reloads_directories() {
        let refused = ClearOutcome::from_response(&DatabaseResponse {
            message: "Database is locked".to_string(),
            success: false,
        });
        assert!(!refused.reload_directories);
        assert_eq!(refused.feedback.message, "Database is locked");

        let failed = ClearOutcome::failed("Error: offline");
        assert!(!failed.reload_directories);
        assert!(!failed.feedback.success);
    }
}
