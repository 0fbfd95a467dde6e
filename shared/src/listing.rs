//! Page/filter state for the paginated directories.
//!
//! The server owns pagination: the client only echoes a page number and a
//! filter value, then re-synchronizes from each response's `page`/`total`.

/// Fixed page size for both directories.
pub const PAGE_SIZE: u32 = 10;

/// What a directory should request next.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingState<F> {
    pub page: u32,
    pub filter: F,
}

impl<F: Default> Default for ListingState<F> {
    fn default() -> Self {
        Self {
            page: 1,
            filter: F::default(),
        }
    }
}

impl<F: Clone> ListingState<F> {
    pub fn new(filter: F) -> Self {
        Self {
            page: 1,
            filter,
        }
    }

    /// A changed search/filter always restarts from the first page.
    pub fn with_filter(&self, filter: F) -> Self {
        Self::new(filter)
    }

    /// Same filter, explicit page.
    pub fn at_page(&self, page: u32) -> Self {
        Self {
            page: page.max(1),
            filter: self.filter.clone(),
        }
    }

    /// Previous page, or `None` when already on the first one.
    pub fn previous(&self) -> Option<Self> {
        (self.page > 1).then(|| self.at_page(self.page - 1))
    }

    pub fn next(&self) -> Self {
        self.at_page(self.page.saturating_add(1))
    }

    /// Adopt the page number the server reported.
    pub fn synced_to(&self, reported_page: u32) -> Self {
        self.at_page(reported_page)
    }

    /// Same page, with the filter value currently on screen.
    pub fn filtered_by(&self, filter: F) -> Self {
        Self {
            page: self.page,
            filter,
        }
    }

    /// State to show once the request for `self` resolves. `reported_page`
    /// is `None` when the request failed; the result is then `None` too and
    /// the shown state stays as it was.
    pub fn settle(&self, reported_page: Option<u32>) -> Option<Self> {
        reported_page.map(|page| self.synced_to(page))
    }
}

/// Owned by the console shell. Every bump sends both directories back to
/// `ListingState::default()`, i.e. page 1 with no search or filter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct ReloadEpoch(u64);

impl ReloadEpoch {
    pub fn bumped(self) -> Self {
        Self(self.0.wrapping_add(1))
    }
}

/// Dropdown filter of the video directory, passed through to the server.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum VideoFilter {
    #[default]
    All,
    Today,
    Week,
    Month,
}

impl VideoFilter {
    pub const ALL: [VideoFilter; 4] =
        [VideoFilter::All, VideoFilter::Today, VideoFilter::Week, VideoFilter::Month];

    pub fn as_query(self) -> &'static str {
        match self {
            VideoFilter::All => "all",
            VideoFilter::Today => "today",
            VideoFilter::Week => "week",
            VideoFilter::Month => "month",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            VideoFilter::All => "All Videos",
            VideoFilter::Today => "Today",
            VideoFilter::Week => "This Week",
            VideoFilter::Month => "This Month",
        }
    }

    pub fn from_query(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|filter| filter.as_query() == value)
    }
}

/// Pager view derived from one response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageInfo {
    pub page: u32,
    pub total: u64,
    pub total_pages: u64,
}

pub fn total_pages(total: u64, per_page: u32) -> u64 {
    let per_page = u64::from(per_page.max(1));
    total.div_ceil(per_page)
}

impl PageInfo {
    pub fn from_reported(page: u32, total: u64) -> Self {
        Self {
            page,
            total,
            total_pages: total_pages(total, PAGE_SIZE),
        }
    }

    pub fn previous_disabled(&self) -> bool {
        self.page == 1
    }

    // An empty listing reports zero pages, so "next" stays enabled there.
    pub fn next_disabled(&self) -> bool {
        u64::from(self.page) == self.total_pages
    }

    pub fn label(&self) -> String {
        format!("Page {} of {}", self.page, self.total_pages)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filter_change_resets_to_first_page() {
        let state = ListingState::new(String::new()).at_page(4);
        let searched = state.with_filter("j".to_string());
        assert_eq!(searched.page, 1);
        assert_eq!(searched.filter, "j");

        let again = searched.at_page(3).with_filter("ja".to_string());
        assert_eq!(again.page, 1);
    }

    #[test]
    fn previous_stops_at_first_page() {
        let state = ListingState::new(String::new());
        assert!(state.previous().is_none());
        let third = state.at_page(3);
        assert_eq!(third.previous().map(|s| s.page), Some(2));
        assert_eq!(third.next().page, 4);
        assert_eq!(third.next().filter, "");
    }

    #[test]
    fn failed_request_keeps_shown_page() {
        let shown = ListingState::new("jane".to_string()).at_page(3);
        let requested = shown.next();
        assert_eq!(requested.settle(None), None);
        // Nothing moved, so the retry asks for the same page.
        assert_eq!(shown.next().page, 4);

        let loaded = requested.settle(Some(4)).expect("loaded");
        assert_eq!(loaded.page, 4);
        assert_eq!(loaded.filter, "jane");
    }

    #[test]
    fn server_page_wins_over_requested_one() {
        let requested = ListingState::new(String::new()).at_page(7);
        assert_eq!(requested.settle(Some(3)).map(|state| state.page), Some(3));
    }

    #[test]
    fn filtered_by_keeps_page() {
        let shown = ListingState::new("ja".to_string()).at_page(5);
        let retargeted = shown.filtered_by("jane".to_string());
        assert_eq!(retargeted.page, 5);
        assert_eq!(retargeted.filter, "jane");
    }

    #[test]
    fn reload_epoch_changes_on_every_bump() {
        let start = ReloadEpoch::default();
        let once = start.bumped();
        assert_ne!(start, once);
        assert_ne!(once, once.bumped());
    }

    #[test]
    fn sync_adopts_reported_page() {
        let state = ListingState::new("x".to_string()).at_page(9);
        assert_eq!(state.synced_to(2).page, 2);
        assert_eq!(state.synced_to(2).filter, "x");
    }

    #[test]
    fn pager_buttons_follow_reported_page_and_total() {
        let info = PageInfo::from_reported(2, 18);
        assert_eq!(info.label(), "Page 2 of 2");
        assert!(info.next_disabled());
        assert!(!info.previous_disabled());

        let first = PageInfo::from_reported(1, 35);
        assert_eq!(first.total_pages, 4);
        assert!(first.previous_disabled());
        assert!(!first.next_disabled());

        let single = PageInfo::from_reported(1, 10);
        assert!(single.previous_disabled());
        assert!(single.next_disabled());
    }

    #[test]
    fn empty_listing_reports_zero_pages() {
        let info = PageInfo::from_reported(1, 0);
        assert_eq!(info.label(), "Page 1 of 0");
        assert!(info.previous_disabled());
        assert!(!info.next_disabled());
    }

    #[test]
    fn video_filter_query_values() {
        assert_eq!(VideoFilter::default().as_query(), "all");
        assert_eq!(VideoFilter::from_query("week"), Some(VideoFilter::Week));
        assert_eq!(VideoFilter::from_query("year"), None);
        let state = ListingState::<VideoFilter>::default().at_page(3);
        assert_eq!(state.with_filter(VideoFilter::Month).page, 1);
    }

    #[test]
    fn total_pages_rounds_up() {
        assert_eq!(total_pages(0, 10), 0);
        assert_eq!(total_pages(1, 10), 1);
        assert_eq!(total_pages(10, 10), 1);
        assert_eq!(total_pages(11, 10), 2);
        assert_eq!(total_pages(5, 0), 5);
    }
}
