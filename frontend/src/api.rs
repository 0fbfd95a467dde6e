#[cfg(not(feature = "mock"))]
use gloo_net::http::{Request, Response};
use reelgen_admin_shared::{
    listing::{ListingState, VideoFilter},
    settings::{
        DatabaseAction, DatabaseResponse, SecuritySettingsUpdate, Settings, SystemSettingsUpdate,
    },
    ApiError, DashboardData, MessageResponse, NewUserRequest, UserRow, UserUpdateRequest,
    UsersPage, VideosPage,
};
#[cfg(not(feature = "mock"))]
use reelgen_admin_shared::{
    endpoints,
    settings::{ApiKeyResponse, DatabaseRequest},
};
#[cfg(not(feature = "mock"))]
use serde::{de::DeserializeOwned, Serialize};

#[cfg(not(feature = "mock"))]
use crate::config::api_url;
#[cfg(feature = "mock")]
use crate::models;

/// The single place where HTTP responses become payloads or [`ApiError`]s.
/// Failed responses never surface as raw HTTP errors: the server's
/// `message` (or a generic fallback) is all the caller sees.
#[cfg(not(feature = "mock"))]
async fn handle_response<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    if !response.ok() {
        let body = response.text().await.unwrap_or_default();
        return Err(ApiError::from_failure_body(&body));
    }
    response.json::<T>().await.map_err(ApiError::parse)
}

#[cfg(not(feature = "mock"))]
async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    let response = Request::get(&api_url(path))
        .header("Cache-Control", "no-cache, no-store, max-age=0")
        .send()
        .await
        .map_err(ApiError::network)?;
    handle_response(response).await
}

#[cfg(not(feature = "mock"))]
async fn post_json<B: Serialize, T: DeserializeOwned>(path: &str, body: &B) -> Result<T, ApiError> {
    let response = Request::post(&api_url(path))
        .header("Content-Type", "application/json")
        .json(body)
        .map_err(ApiError::serialize)?
        .send()
        .await
        .map_err(ApiError::network)?;
    handle_response(response).await
}

/// 仪表盘统计
pub async fn fetch_dashboard_data() -> Result<DashboardData, ApiError> {
    #[cfg(feature = "mock")]
    {
        return Ok(models::mock_dashboard());
    }

    #[cfg(not(feature = "mock"))]
    {
        get_json(endpoints::DASHBOARD_DATA).await
    }
}

pub async fn fetch_settings() -> Result<Settings, ApiError> {
    #[cfg(feature = "mock")]
    {
        return Ok(models::mock_settings());
    }

    #[cfg(not(feature = "mock"))]
    {
        get_json(endpoints::SETTINGS).await
    }
}

pub async fn save_security_settings(
    update: &SecuritySettingsUpdate,
) -> Result<MessageResponse, ApiError> {
    #[cfg(feature = "mock")]
    {
        let _ = update;
        return Ok(MessageResponse {
            message: "Settings updated".to_string(),
        });
    }

    #[cfg(not(feature = "mock"))]
    {
        post_json(endpoints::SETTINGS, update).await
    }
}

pub async fn save_system_settings(
    update: &SystemSettingsUpdate,
) -> Result<MessageResponse, ApiError> {
    #[cfg(feature = "mock")]
    {
        let _ = update;
        return Ok(MessageResponse {
            message: "Settings updated".to_string(),
        });
    }

    #[cfg(not(feature = "mock"))]
    {
        post_json(endpoints::SETTINGS, update).await
    }
}

/// Backup / optimize / clear, all through `POST /admin/database`.
pub async fn run_database_action(action: DatabaseAction) -> Result<DatabaseResponse, ApiError> {
    #[cfg(feature = "mock")]
    {
        return Ok(models::mock_database_response(action));
    }

    #[cfg(not(feature = "mock"))]
    {
        post_json(endpoints::DATABASE, &DatabaseRequest {
            action,
        })
        .await
    }
}

pub async fn fetch_api_key() -> Result<String, ApiError> {
    #[cfg(feature = "mock")]
    {
        return Ok("sk-mock-0123456789abcdef".to_string());
    }

    #[cfg(not(feature = "mock"))]
    {
        let response: ApiKeyResponse = get_json(endpoints::API_KEY).await?;
        Ok(response.api_key)
    }
}

/// 用户列表（服务端分页 + 搜索）
pub async fn fetch_users(state: &ListingState<String>) -> Result<UsersPage, ApiError> {
    #[cfg(feature = "mock")]
    {
        return Ok(models::mock_users_page(state));
    }

    #[cfg(not(feature = "mock"))]
    {
        get_json(&endpoints::get_users(state)).await
    }
}

pub async fn fetch_user(id: i64) -> Result<UserRow, ApiError> {
    #[cfg(feature = "mock")]
    {
        return models::mock_user(id).ok_or_else(|| ApiError::new("User not found"));
    }

    #[cfg(not(feature = "mock"))]
    {
        get_json(&endpoints::user(id)).await
    }
}

pub async fn create_user(request: &NewUserRequest) -> Result<MessageResponse, ApiError> {
    #[cfg(feature = "mock")]
    {
        return Ok(MessageResponse {
            message: format!("User {} created", request.name),
        });
    }

    #[cfg(not(feature = "mock"))]
    {
        post_json(endpoints::USERS, request).await
    }
}

/// `PUT /admin/users/:id`, used by both the edit form and password reset.
pub async fn update_user(id: i64, request: &UserUpdateRequest) -> Result<MessageResponse, ApiError> {
    #[cfg(feature = "mock")]
    {
        let _ = request;
        return models::mock_user(id)
            .map(|_| MessageResponse {
                message: "User updated successfully".to_string(),
            })
            .ok_or_else(|| ApiError::new("User not found"));
    }

    #[cfg(not(feature = "mock"))]
    {
        let response = Request::put(&api_url(&endpoints::user(id)))
            .header("Content-Type", "application/json")
            .json(request)
            .map_err(ApiError::serialize)?
            .send()
            .await
            .map_err(ApiError::network)?;
        handle_response(response).await
    }
}

pub async fn delete_user(id: i64) -> Result<MessageResponse, ApiError> {
    #[cfg(feature = "mock")]
    {
        return models::mock_user(id)
            .map(|_| MessageResponse {
                message: "User deleted".to_string(),
            })
            .ok_or_else(|| ApiError::new("not found"));
    }

    #[cfg(not(feature = "mock"))]
    {
        let response = Request::delete(&api_url(&endpoints::user(id)))
            .send()
            .await
            .map_err(ApiError::network)?;
        handle_response(response).await
    }
}

/// 视频列表（服务端分页 + 过滤）
pub async fn fetch_videos(state: &ListingState<VideoFilter>) -> Result<VideosPage, ApiError> {
    #[cfg(feature = "mock")]
    {
        return Ok(models::mock_videos_page(state));
    }

    #[cfg(not(feature = "mock"))]
    {
        get_json(&endpoints::get_videos(state)).await
    }
}

pub async fn delete_video(id: i64) -> Result<MessageResponse, ApiError> {
    #[cfg(feature = "mock")]
    {
        let _ = id;
        return Ok(MessageResponse {
            message: "Video deleted".to_string(),
        });
    }

    #[cfg(not(feature = "mock"))]
    {
        let response = Request::delete(&api_url(&endpoints::video(id)))
            .send()
            .await
            .map_err(ApiError::network)?;
        handle_response(response).await
    }
}
