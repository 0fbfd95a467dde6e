//! Paths of the admin API, relative to the API origin.

use crate::listing::{ListingState, VideoFilter, PAGE_SIZE};

pub const DASHBOARD_DATA: &str = "/admin/dashboard_data";
pub const SETTINGS: &str = "/admin/settings";
pub const DATABASE: &str = "/admin/database";
pub const API_KEY: &str = "/admin/api_key";
pub const USERS: &str = "/admin/users";

pub fn get_users(state: &ListingState<String>) -> String {
    format!(
        "/admin/get_users?page={}&per_page={}&search={}",
        state.page,
        PAGE_SIZE,
        urlencoding::encode(&state.filter)
    )
}

pub fn get_videos(state: &ListingState<VideoFilter>) -> String {
    format!(
        "/admin/get_videos?page={}&per_page={}&filter={}",
        state.page,
        PAGE_SIZE,
        state.filter.as_query()
    )
}

pub fn user(id: i64) -> String {
    format!("{USERS}/{id}")
}

/// Full-page navigation target for impersonating a user.
pub fn login_as(id: i64) -> String {
    format!("/admin/login_as/{id}")
}

pub fn video(id: i64) -> String {
    format!("/admin/videos/{id}")
}

/// Stream URL, used both by the preview player and the download link.
pub fn video_stream(id: i64) -> String {
    format!("/videos/{id}/view")
}

pub fn video_download_name(id: i64) -> String {
    format!("video-{id}.mp4")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_listing_path_echoes_state() {
        let state = ListingState::new("jane".to_string()).at_page(2);
        assert_eq!(get_users(&state), "/admin/get_users?page=2&per_page=10&search=jane");

        let spaced = ListingState::new("jane doe&co".to_string());
        assert_eq!(
            get_users(&spaced),
            "/admin/get_users?page=1&per_page=10&search=jane%20doe%26co"
        );
    }

    #[test]
    fn video_listing_path_uses_filter_value() {
        let state = ListingState::new(VideoFilter::Week).at_page(3);
        assert_eq!(get_videos(&state), "/admin/get_videos?page=3&per_page=10&filter=week");
        assert_eq!(
            get_videos(&ListingState::default()),
            "/admin/get_videos?page=1&per_page=10&filter=all"
        );
    }

    #[test]
    fn record_paths() {
        assert_eq!(user(5), "/admin/users/5");
        assert_eq!(login_as(5), "/admin/login_as/5");
        assert_eq!(video(9), "/admin/videos/9");
        assert_eq!(video_stream(9), "/videos/9/view");
        assert_eq!(video_download_name(9), "video-9.mp4");
    }
}
