//! Wire models and platform-independent state for the ReelGen admin console.
//!
//! Everything in this crate compiles for both the host and `wasm32`, so the
//! console's behaviour can be tested without a browser.

use serde::{Deserialize, Serialize};

pub mod dialog;
pub mod endpoints;
pub mod error;
pub mod listing;
pub mod navigation;
pub mod settings;

pub use error::ApiError;

// 用户列表行 / 详情
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserRow {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub created_at: String,
    #[serde(default)]
    pub video_count: Option<u64>,
    #[serde(default)]
    pub is_admin: bool,
    #[serde(default)]
    pub is_paid: bool,
}

/// Status badge shown in the user table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserStatus {
    Admin,
    Active,
}

impl UserStatus {
    pub fn label(self) -> &'static str {
        match self {
            UserStatus::Admin => "Admin",
            UserStatus::Active => "Active",
        }
    }

    pub fn badge_class(self) -> &'static str {
        match self {
            UserStatus::Admin => "status-admin",
            UserStatus::Active => "status-active",
        }
    }
}

impl UserRow {
    pub fn status(&self) -> UserStatus {
        if self.is_admin {
            UserStatus::Admin
        } else {
            UserStatus::Active
        }
    }

    pub fn subscription_label(&self) -> &'static str {
        if self.is_paid {
            "Paid"
        } else {
            "Free"
        }
    }

    pub fn video_count_or_zero(&self) -> u64 {
        self.video_count.unwrap_or(0)
    }
}

// 视频列表行
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VideoRow {
    pub id: i64,
    #[serde(default)]
    pub title: Option<String>,
    pub user_name: String,
    pub created_at: String,
    #[serde(default)]
    pub duration: Option<f64>,
    #[serde(default)]
    pub music_style: Option<String>,
    #[serde(default)]
    pub full_video_url: Option<String>,
}

impl VideoRow {
    pub fn display_title(&self) -> &str {
        self.title
            .as_deref()
            .filter(|title| !title.is_empty())
            .unwrap_or("Untitled")
    }

    /// Duration in seconds with two decimals, or `N/A` when unknown or zero.
    pub fn duration_label(&self) -> String {
        match self.duration {
            Some(seconds) if seconds != 0.0 => format!("{seconds:.2}s"),
            _ => "N/A".to_string(),
        }
    }

    pub fn music_style_label(&self) -> &str {
        self.music_style
            .as_deref()
            .filter(|style| !style.is_empty())
            .unwrap_or("N/A")
    }
}

/// One page of `GET /admin/get_users`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UsersPage {
    pub users: Vec<UserRow>,
    pub page: u32,
    pub total: u64,
}

/// One page of `GET /admin/get_videos`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VideosPage {
    pub videos: Vec<VideoRow>,
    pub page: u32,
    pub total: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityType {
    User,
    Video,
    Payment,
    #[serde(other)]
    Other,
}

impl ActivityType {
    /// Font Awesome icon class for the activity feed.
    pub fn icon_class(self) -> Option<&'static str> {
        match self {
            ActivityType::User => Some("fa-user-plus"),
            ActivityType::Video => Some("fa-video"),
            ActivityType::Payment => Some("fa-dollar-sign"),
            ActivityType::Other => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityItem {
    pub activity_type: ActivityType,
    pub message: String,
    pub created_at: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SystemMetrics {
    pub cpu_usage: f64,
    pub memory_usage: f64,
    pub disk_usage: f64,
}

/// Render a usage figure the way the dashboard shows it: `12.3%`.
pub fn format_percent(value: f64) -> String {
    format!("{value:.1}%")
}

impl SystemMetrics {
    pub fn cpu_label(&self) -> String {
        format_percent(self.cpu_usage)
    }

    pub fn memory_label(&self) -> String {
        format_percent(self.memory_usage)
    }

    pub fn disk_label(&self) -> String {
        format_percent(self.disk_usage)
    }
}

/// Payload of `GET /admin/dashboard_data`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardData {
    pub total_users: u64,
    pub total_videos: u64,
    #[serde(default)]
    pub recent_activity: Vec<ActivityItem>,
    pub system_metrics: SystemMetrics,
}

/// Generic `{message}` reply of the mutating user/video endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessageResponse {
    #[serde(default)]
    pub message: String,
}

/// Body of `POST /admin/users`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewUserRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub is_admin: bool,
}

/// Roles offered by the add-user form. Only `admin` grants the admin flag.
pub const USER_ROLES: [&str; 3] = ["user", "editor", "admin"];

pub fn role_grants_admin(role: &str) -> bool {
    role == "admin"
}

impl NewUserRequest {
    pub fn from_form(name: &str, email: &str, password: &str, role: &str) -> Self {
        Self {
            name: name.to_string(),
            email: email.to_string(),
            password: password.to_string(),
            is_admin: role_grants_admin(role),
        }
    }
}

/// Body of `PUT /admin/users/:id`. Only the fields that are set go on the wire.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserUpdateRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

impl UserUpdateRequest {
    pub fn profile(name: &str, email: &str) -> Self {
        Self {
            name: Some(name.to_string()),
            email: Some(email.to_string()),
            password: None,
        }
    }

    /// Password reset body; `None` when the new password is empty and no
    /// request should be sent.
    pub fn password_reset(password: &str) -> Option<Self> {
        if password.is_empty() {
            return None;
        }
        Some(Self {
            password: Some(password.to_string()),
            ..Self::default()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(is_admin: bool, is_paid: bool) -> UserRow {
        UserRow {
            id: 7,
            name: "Jane".to_string(),
            email: "jane@example.com".to_string(),
            created_at: "2024-05-01T10:00:00Z".to_string(),
            video_count: None,
            is_admin,
            is_paid,
        }
    }

    #[test]
    fn admin_role_is_the_only_admin_grant() {
        assert!(NewUserRequest::from_form("a", "a@x", "pw", "admin").is_admin);
        assert!(!NewUserRequest::from_form("a", "a@x", "pw", "editor").is_admin);
        assert!(!NewUserRequest::from_form("a", "a@x", "pw", "Admin").is_admin);
        assert!(!NewUserRequest::from_form("a", "a@x", "pw", "").is_admin);
    }

    #[test]
    fn status_and_subscription_labels() {
        assert_eq!(user(true, false).status(), UserStatus::Admin);
        assert_eq!(user(false, false).status().badge_class(), "status-active");
        assert_eq!(user(false, true).subscription_label(), "Paid");
        assert_eq!(user(false, false).subscription_label(), "Free");
        assert_eq!(user(false, false).video_count_or_zero(), 0);
    }

    #[test]
    fn video_row_fallbacks() {
        let video = VideoRow {
            id: 1,
            title: None,
            user_name: "jane".to_string(),
            created_at: "2024-05-01".to_string(),
            duration: Some(12.346),
            music_style: Some(String::new()),
            full_video_url: None,
        };
        assert_eq!(video.display_title(), "Untitled");
        assert_eq!(video.duration_label(), "12.35s");
        assert_eq!(video.music_style_label(), "N/A");

        let no_duration = VideoRow {
            duration: None,
            ..video
        };
        assert_eq!(no_duration.duration_label(), "N/A");
    }

    #[test]
    fn percent_has_one_decimal() {
        assert_eq!(format_percent(12.34), "12.3%");
        assert_eq!(format_percent(0.0), "0.0%");
        assert_eq!(format_percent(99.96), "100.0%");
    }

    #[test]
    fn update_bodies_only_carry_their_fields() {
        let profile = serde_json::to_value(UserUpdateRequest::profile("Jane", "j@x"))
            .expect("encode profile");
        assert_eq!(profile, serde_json::json!({ "name": "Jane", "email": "j@x" }));

        let reset = UserUpdateRequest::password_reset("s3cret").expect("non-empty password");
        assert_eq!(
            serde_json::to_value(reset).expect("encode reset"),
            serde_json::json!({ "password": "s3cret" })
        );
        assert!(UserUpdateRequest::password_reset("").is_none());
    }
}
