// =============== Mock 数据 ===============
//
// Stand-in for the admin API when built with `--features mock`. Search,
// filtering and paging happen here the way the server would do them; the
// console itself never filters client-side.

use reelgen_admin_shared::{
    listing::{ListingState, VideoFilter, PAGE_SIZE},
    settings::{DatabaseAction, DatabaseResponse, Settings},
    ActivityItem, ActivityType, DashboardData, SystemMetrics, UserRow, UsersPage, VideoRow,
    VideosPage,
};

const MOCK_USER_COUNT: i64 = 23;
const MOCK_VIDEO_COUNT: i64 = 17;

fn mock_users() -> Vec<UserRow> {
    let names = ["Jane", "Omar", "Priya", "Lukas", "Mei", "Tom"];
    (1..=MOCK_USER_COUNT)
        .map(|id| {
            let name = format!("{} {}", names[(id as usize) % names.len()], id);
            UserRow {
                id,
                email: format!("{}@example.com", name.to_lowercase().replace(' ', ".")),
                name,
                created_at: format!("2024-{:02}-{:02}T09:30:00Z", (id % 12) + 1, (id % 27) + 1),
                video_count: (id % 4 != 0).then_some((id * 3 % 11) as u64),
                is_admin: id == 1,
                is_paid: id % 3 == 0,
            }
        })
        .collect()
}

pub fn mock_user(id: i64) -> Option<UserRow> {
    mock_users().into_iter().find(|user| user.id == id)
}

fn page_of<T: Clone>(items: &[T], page: u32) -> Vec<T> {
    let start = (page.max(1) as usize - 1) * PAGE_SIZE as usize;
    items.iter().skip(start).take(PAGE_SIZE as usize).cloned().collect()
}

pub fn mock_users_page(state: &ListingState<String>) -> UsersPage {
    let needle = state.filter.to_lowercase();
    let matching: Vec<UserRow> = mock_users()
        .into_iter()
        .filter(|user| {
            needle.is_empty()
                || user.name.to_lowercase().contains(&needle)
                || user.email.to_lowercase().contains(&needle)
        })
        .collect();
    UsersPage {
        users: page_of(&matching, state.page),
        page: state.page,
        total: matching.len() as u64,
    }
}

pub fn mock_videos_page(state: &ListingState<VideoFilter>) -> VideosPage {
    let styles = ["lofi", "cinematic", "upbeat"];
    let keep_every = match state.filter {
        VideoFilter::All => 1,
        VideoFilter::Month => 2,
        VideoFilter::Week => 3,
        VideoFilter::Today => 5,
    };
    let videos: Vec<VideoRow> = (1..=MOCK_VIDEO_COUNT)
        .filter(|id| id % keep_every == 0)
        .map(|id| VideoRow {
            id,
            title: (id % 5 != 0).then(|| format!("Reel #{id}")),
            user_name: format!("Jane {}", id % 7 + 1),
            created_at: format!("2024-06-{:02}T12:00:00Z", id % 28 + 1),
            duration: (id % 6 != 0).then_some(12.5 + id as f64),
            music_style: (id % 4 != 0).then(|| styles[(id as usize) % styles.len()].to_string()),
            full_video_url: Some(format!("/uploads/final_{id}.mp4")),
        })
        .collect();
    VideosPage {
        videos: page_of(&videos, state.page),
        page: state.page,
        total: videos.len() as u64,
    }
}

pub fn mock_dashboard() -> DashboardData {
    let now = js_sys::Date::now();
    DashboardData {
        total_users: MOCK_USER_COUNT as u64,
        total_videos: MOCK_VIDEO_COUNT as u64,
        recent_activity: vec![
            ActivityItem {
                activity_type: ActivityType::User,
                message: "Jane 12 signed up".to_string(),
                created_at: "2024-06-14T08:12:00Z".to_string(),
            },
            ActivityItem {
                activity_type: ActivityType::Video,
                message: "Reel #17 finished rendering".to_string(),
                created_at: "2024-06-14T08:40:00Z".to_string(),
            },
            ActivityItem {
                activity_type: ActivityType::Payment,
                message: "Omar 3 upgraded to paid".to_string(),
                created_at: "2024-06-14T09:05:00Z".to_string(),
            },
        ],
        // Vary a little between polls so refreshes are visible.
        system_metrics: SystemMetrics {
            cpu_usage: 20.0 + (now / 1000.0) % 30.0,
            memory_usage: 48.25,
            disk_usage: 71.6,
        },
    }
}

pub fn mock_settings() -> Settings {
    Settings {
        login_attempts: 5,
        session_timeout: 30,
        video_quality: "1080p".to_string(),
    }
}

pub fn mock_database_response(action: DatabaseAction) -> DatabaseResponse {
    let message = match action {
        DatabaseAction::Backup => "Database backup created",
        DatabaseAction::Optimize => "Database optimized",
        DatabaseAction::Clear => "All data cleared",
    };
    DatabaseResponse {
        message: message.to_string(),
        success: true,
    }
}
