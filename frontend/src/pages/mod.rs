pub mod admin;
pub mod admin_dashboard;
pub mod admin_settings;
pub mod admin_users;
pub mod admin_videos;
pub mod not_found;
