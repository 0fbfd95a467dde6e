#[cfg(test)]
mod tests {
    use reelgen_admin_shared::{
        dialog::{Dialog, DialogId, DialogRegistry},
        listing::{ListingState, PageInfo},
        settings::{ApiKeyResponse, DatabaseAction, DatabaseRequest, DatabaseResponse, Settings},
        ActivityType, ApiError, DashboardData, NewUserRequest, UsersPage, VideosPage,
    };
    use serde_json::json;

    fn user_json(id: i64) -> serde_json::Value {
        json!({
            "id": id,
            "name": format!("Jane {id}"),
            "email": format!("jane{id}@example.com"),
            "created_at": "2024-05-01T10:00:00Z",
            "video_count": id * 2,
            "is_admin": id == 11,
            "is_paid": id % 2 == 0
        })
    }

    #[test]
    fn second_user_page_disables_next() {
        let body = json!({
            "users": (11..19).map(user_json).collect::<Vec<_>>(),
            "page": 2,
            "total": 18
        });
        let page: UsersPage = serde_json::from_value(body).expect("decode users page");
        assert_eq!(page.users.len(), 8);

        let info = PageInfo::from_reported(page.page, page.total);
        assert_eq!(info.label(), "Page 2 of 2");
        assert!(info.next_disabled());
        assert!(!info.previous_disabled());

        let requested = ListingState::new("jane".to_string()).at_page(2);
        assert_eq!(requested.synced_to(page.page), requested);
        assert_eq!(page.users[0].status().label(), "Admin");
    }

    #[test]
    fn user_rows_tolerate_missing_optional_fields() {
        let page: UsersPage = serde_json::from_value(json!({
            "users": [{
                "id": 1,
                "name": "Sam",
                "email": "sam@example.com",
                "created_at": "2024-01-01"
            }],
            "page": 1,
            "total": 1
        }))
        .expect("decode sparse user");
        let user = &page.users[0];
        assert_eq!(user.video_count_or_zero(), 0);
        assert!(!user.is_admin);
        assert_eq!(user.subscription_label(), "Free");
    }

    #[test]
    fn video_page_with_nulls() {
        let page: VideosPage = serde_json::from_value(json!({
            "videos": [{
                "id": 3,
                "title": null,
                "user_name": "sam",
                "created_at": "2024-02-02T08:00:00Z",
                "duration": 31.5,
                "music_style": null,
                "full_video_url": "/uploads/final_3.mp4"
            }],
            "page": 1,
            "total": 1
        }))
        .expect("decode videos page");
        let video = &page.videos[0];
        assert_eq!(video.display_title(), "Untitled");
        assert_eq!(video.duration_label(), "31.50s");
        assert_eq!(video.music_style_label(), "N/A");
    }

    #[test]
    fn dashboard_payload() {
        let data: DashboardData = serde_json::from_value(json!({
            "total_users": 42,
            "total_videos": 108,
            "recent_activity": [
                {
                    "activity_type": "user",
                    "message": "New user Jane",
                    "created_at": "2024-05-01T10:00:00Z"
                },
                {
                    "activity_type": "payment",
                    "message": "Jane upgraded",
                    "created_at": "2024-05-01T10:05:00Z"
                },
                {
                    "activity_type": "refund",
                    "message": "Refund issued",
                    "created_at": "2024-05-01T10:06:00Z"
                }
            ],
            "system_metrics": { "cpu_usage": 12.345, "memory_usage": 48.0, "disk_usage": 71.26 }
        }))
        .expect("decode dashboard");
        assert_eq!(data.recent_activity[0].activity_type.icon_class(), Some("fa-user-plus"));
        assert_eq!(data.recent_activity[1].activity_type.icon_class(), Some("fa-dollar-sign"));
        assert_eq!(data.recent_activity[2].activity_type, ActivityType::Other);
        assert_eq!(data.system_metrics.cpu_label(), "12.3%");
        assert_eq!(data.system_metrics.memory_label(), "48.0%");
        assert_eq!(data.system_metrics.disk_label(), "71.3%");
    }

    #[test]
    fn settings_and_database_bodies() {
        let settings: Settings = serde_json::from_value(json!({
            "login_attempts": 5,
            "session_timeout": 30,
            "video_quality": "1080p"
        }))
        .expect("decode settings");
        assert_eq!(settings.video_quality, "1080p");

        let request = serde_json::to_value(DatabaseRequest {
            action: DatabaseAction::Optimize,
        })
        .expect("encode database request");
        assert_eq!(request, json!({ "action": "optimize" }));

        let response: DatabaseResponse =
            serde_json::from_value(json!({ "message": "Database cleared", "success": true }))
                .expect("decode database response");
        assert!(response.success);

        let key: ApiKeyResponse =
            serde_json::from_value(json!({ "api_key": "sk-123" })).expect("decode api key");
        assert_eq!(key.api_key, "sk-123");
    }

    #[test]
    fn create_user_body_maps_role() {
        let admin = serde_json::to_value(NewUserRequest::from_form("A", "a@x", "pw", "admin"))
            .expect("encode new user");
        assert_eq!(
            admin,
            json!({ "name": "A", "email": "a@x", "password": "pw", "is_admin": true })
        );
        let editor = serde_json::to_value(NewUserRequest::from_form("B", "b@x", "pw", "editor"))
            .expect("encode new user");
        assert_eq!(editor["is_admin"], json!(false));
    }

    #[test]
    fn failed_delete_reports_server_message() {
        let err = ApiError::from_failure_body(r#"{"message":"not found"}"#);
        let mut dialogs: DialogRegistry<()> = DialogRegistry::default();
        dialogs.show_info("Error", err.prefixed());
        assert_eq!(
            dialogs.get(DialogId::Info),
            Some(&Dialog::Info {
                title: "Error".to_string(),
                message: "Error: not found".to_string()
            })
        );
    }
}
