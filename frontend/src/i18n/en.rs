pub mod common {
    pub const SUCCESS: &str = "Success";
    pub const ERROR: &str = "Error";
    pub const CANCEL: &str = "Cancel";
    pub const CONFIRM: &str = "Confirm";
    pub const OK: &str = "OK";
    pub const CLOSE_ARIA: &str = "Close dialog";
    pub const LOADING: &str = "Loading...";
    pub const VIEW: &str = "View";
    pub const DELETE: &str = "Delete";
    pub const SAVE: &str = "Save";
}

pub mod console {
    pub const BRAND_NAME: &str = "ReelGen Admin";
    pub const NAV_ARIA: &str = "Admin sections";
}

pub mod pager {
    pub const ARIA_NAV: &str = "Pagination";
    pub const PREV: &str = "Previous";
    pub const NEXT: &str = "Next";
}

pub mod dashboard {
    pub const TITLE: &str = "Dashboard";
    pub const TOTAL_USERS: &str = "Total Users";
    pub const TOTAL_VIDEOS: &str = "Total Videos";
    pub const RECENT_ACTIVITY: &str = "Recent Activity";
    pub const NO_ACTIVITY: &str = "No recent activity.";
    pub const SYSTEM_STATUS: &str = "System Status";
    pub const CPU: &str = "CPU Usage";
    pub const MEMORY: &str = "Memory Usage";
    pub const DISK: &str = "Disk Usage";
    pub const FETCH_FAILED_LOG: &str = "Error fetching dashboard data: {}";
}

pub mod users {
    pub const TITLE: &str = "User Management";
    pub const SEARCH_PLACEHOLDER: &str = "Search users...";
    pub const ADD_USER: &str = "Add User";
    pub const COL_NAME: &str = "Name";
    pub const COL_EMAIL: &str = "Email";
    pub const COL_JOINED: &str = "Joined";
    pub const COL_VIDEOS: &str = "Videos";
    pub const COL_STATUS: &str = "Status";
    pub const COL_ACTIONS: &str = "Actions";
    pub const EMPTY: &str = "No users found.";
    pub const FETCH_FAILED_LOG: &str = "Error fetching users: {}";

    pub const DETAIL_TITLE: &str = "User Details";
    pub const VIDEOS_CREATED: &str = "Videos Created";
    pub const SUBSCRIPTION: &str = "Subscription";
    pub const JOINED: &str = "Joined";
    pub const RESET_PASSWORD: &str = "Reset Password";
    pub const LOGIN_AS: &str = "Login as User";
    pub const EDIT: &str = "Edit User";

    pub const RESET_TITLE: &str = "Reset Password";
    pub const NEW_PASSWORD: &str = "New Password";
    pub const SUBMIT_RESET: &str = "Reset";

    pub const EDIT_TITLE: &str = "Edit User";
    pub const ADD_TITLE: &str = "Add New User";
    pub const FIELD_NAME: &str = "Name";
    pub const FIELD_EMAIL: &str = "Email";
    pub const FIELD_PASSWORD: &str = "Password";
    pub const FIELD_ROLE: &str = "Role";
    pub const SUBMIT_ADD: &str = "Add User";

    pub const ADDED: &str = "User added successfully";
    pub const DELETED: &str = "User deleted successfully.";
    pub const DELETE_TITLE: &str = "Delete User";
    pub const DELETE_CONFIRM_TEMPLATE: &str = "Are you sure you want to delete user {}?";
}

pub mod videos {
    pub const TITLE: &str = "Video Management";
    pub const FILTER_ARIA: &str = "Filter videos";
    pub const COL_TITLE: &str = "Title";
    pub const COL_USER: &str = "User";
    pub const COL_CREATED: &str = "Created";
    pub const COL_DURATION: &str = "Duration";
    pub const COL_MUSIC: &str = "Music";
    pub const COL_ACTIONS: &str = "Actions";
    pub const EMPTY: &str = "No videos found.";
    pub const FETCH_FAILED_LOG: &str = "Error fetching videos: {}";

    pub const DETAIL_TITLE: &str = "Video Preview";
    pub const UNSUPPORTED: &str = "Your browser does not support the video tag.";
    pub const DOWNLOAD: &str = "Download";

    pub const DELETED: &str = "Video deleted successfully.";
    pub const DELETE_TITLE: &str = "Delete Video";
    pub const DELETE_CONFIRM_TEMPLATE: &str = "Are you sure you want to delete video {}?";
}

pub mod settings {
    pub const TITLE: &str = "Settings";
    pub const SECURITY: &str = "Security Settings";
    pub const LOGIN_ATTEMPTS: &str = "Max Login Attempts";
    pub const SESSION_TIMEOUT: &str = "Session Timeout (minutes)";
    pub const SAVE_SECURITY: &str = "Save Security Settings";
    pub const SECURITY_SAVED: &str = "Security settings saved.";

    pub const SYSTEM: &str = "System Settings";
    pub const VIDEO_QUALITY: &str = "Default Video Quality";
    pub const SAVE_SYSTEM: &str = "Save System Settings";
    pub const SYSTEM_SAVED: &str = "System settings saved.";

    pub const API: &str = "API Access";
    pub const API_KEY: &str = "API Key";
    pub const API_KEY_FAILED: &str = "Could not fetch API key.";

    pub const DATABASE: &str = "Database";
    pub const BACKUP: &str = "Backup Database";
    pub const OPTIMIZE: &str = "Optimize Database";
    pub const CLEAR: &str = "Clear All Data";
    pub const CLEAR_TITLE: &str = "Clear All Data";
    pub const CLEAR_WARNING: &str =
        "This permanently deletes every user and video. Type DELETE to confirm.";
    pub const CLEAR_SUBMIT: &str = "Delete Everything";
    pub const CLEAR_NEEDS_LITERAL: &str = "Please type \"DELETE\" to confirm.";
    pub const CONFIRMATION_REQUIRED: &str = "Confirmation required";

    pub const FETCH_FAILED_LOG: &str = "Error fetching settings: {}";
}

pub mod not_found {
    pub const TITLE: &str = "Page not found";
    pub const BACK: &str = "Back to the admin console";
}
