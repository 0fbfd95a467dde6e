//! Configuration for the admin console.

/// API origin, read at compile time. Empty means same origin, which is how
/// the console is served in production (`/admin` next to the API).
pub const API_BASE: &str = match option_env!("REELGEN_ADMIN_API_BASE") {
    Some(url) => url,
    None => "",
};

/// Dashboard polling period.
pub const DASHBOARD_REFRESH_MS: u32 = 30_000;

/// Helper function to construct absolute API URLs
pub fn api_url(path: &str) -> String {
    let base = API_BASE.strip_suffix('/').unwrap_or(API_BASE);
    format!("{}{}", base, path)
}
