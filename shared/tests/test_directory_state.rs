#[cfg(test)]
mod tests {
    use reelgen_admin_shared::{
        endpoints,
        listing::{ListingState, ReloadEpoch, VideoFilter},
        settings::{ClearOutcome, DatabaseResponse},
    };

    /// A user directory as the page drives it: the state on screen, the
    /// search box text and the reload epoch it last reacted to.
    struct UserDirectory {
        shown: ListingState<String>,
        search: String,
        epoch: ReloadEpoch,
    }

    impl UserDirectory {
        fn at(page: u32, search: &str) -> Self {
            Self {
                shown: ListingState::new(search.to_string()).at_page(page),
                search: search.to_string(),
                epoch: ReloadEpoch::default(),
            }
        }

        fn next_request(&self) -> ListingState<String> {
            self.shown.filtered_by(self.search.clone()).next()
        }

        fn previous_request(&self) -> Option<ListingState<String>> {
            self.shown.filtered_by(self.search.clone()).previous()
        }

        fn refresh_request(&self) -> ListingState<String> {
            self.shown.filtered_by(self.search.clone())
        }

        fn search_request(&mut self, text: &str) -> ListingState<String> {
            self.search = text.to_string();
            self.shown.with_filter(text.to_string())
        }

        fn answer(&mut self, requested: &ListingState<String>, reported: Option<u32>) {
            if let Some(shown) = requested.settle(reported) {
                self.shown = shown;
            }
        }

        fn observe(&mut self, epoch: ReloadEpoch) -> Option<ListingState<String>> {
            if epoch == self.epoch {
                return None;
            }
            self.epoch = epoch;
            self.search.clear();
            Some(ListingState::default())
        }
    }

    #[test]
    fn failed_next_is_retried_for_the_same_page() {
        let mut users = UserDirectory::at(3, "");
        let first = users.next_request();
        assert_eq!(first.page, 4);
        users.answer(&first, None);

        let retry = users.next_request();
        assert_eq!(retry.page, 4);
        assert_eq!(endpoints::get_users(&retry), "/admin/get_users?page=4&per_page=10&search=");
    }

    #[test]
    fn double_click_before_response_requests_one_page_ahead() {
        let mut users = UserDirectory::at(3, "");
        let first = users.next_request();
        let second = users.next_request();
        assert_eq!(first, second);

        users.answer(&first, Some(4));
        users.answer(&second, Some(4));
        assert_eq!(users.shown.page, 4);
        assert_eq!(users.next_request().page, 5);
    }

    #[test]
    fn refresh_after_failure_uses_the_shown_page() {
        let mut users = UserDirectory::at(2, "ja");
        let next = users.next_request();
        users.answer(&next, None);
        assert_eq!(users.refresh_request(), ListingState::new("ja".to_string()).at_page(2));
    }

    #[test]
    fn pager_keeps_typed_search_after_failed_search() {
        let mut users = UserDirectory::at(2, "ja");
        let search = users.search_request("jane");
        assert_eq!(search.page, 1);
        users.answer(&search, None);

        // The table still shows page 2 of "ja"; the box says "jane".
        assert_eq!(users.shown.filter, "ja");
        let previous = users.previous_request().expect("page 2 has a previous page");
        assert_eq!(previous, ListingState::new("jane".to_string()).at_page(1));
        assert_eq!(users.next_request().filter, "jane");
    }

    #[test]
    fn successful_clear_restarts_both_directories() {
        let mut users = UserDirectory::at(4, "jane");
        let mut videos = ListingState::new(VideoFilter::Month).at_page(3);
        let mut video_epoch = ReloadEpoch::default();
        let mut console_epoch = ReloadEpoch::default();

        let outcome = ClearOutcome::from_response(&DatabaseResponse {
            message: "All data cleared".to_string(),
            success: true,
        });
        assert!(outcome.reload_directories);
        assert!(outcome.feedback.success);
        if outcome.reload_directories {
            console_epoch = console_epoch.bumped();
        }

        let user_request = users.observe(console_epoch).expect("users reload");
        assert_eq!(user_request, ListingState::default());
        assert!(users.search.is_empty());
        assert_eq!(
            endpoints::get_users(&user_request),
            "/admin/get_users?page=1&per_page=10&search="
        );

        assert_ne!(video_epoch, console_epoch);
        video_epoch = console_epoch;
        let video_request = ListingState::<VideoFilter>::default();
        assert_eq!(
            endpoints::get_videos(&video_request),
            "/admin/get_videos?page=1&per_page=10&filter=all"
        );
        videos = video_request.settle(Some(1)).unwrap_or(videos);
        assert_eq!(videos.page, 1);
        assert_eq!(video_epoch, console_epoch);
    }

    #[test]
    fn failed_clear_leaves_directories_alone() {
        let mut users = UserDirectory::at(4, "jane");
        let mut console_epoch = ReloadEpoch::default();

        for outcome in [
            ClearOutcome::from_response(&DatabaseResponse {
                message: "Database is locked".to_string(),
                success: false,
            }),
            ClearOutcome::failed("offline"),
        ] {
            assert!(!outcome.feedback.success);
            if outcome.reload_directories {
                console_epoch = console_epoch.bumped();
            }
        }

        assert_eq!(users.observe(console_epoch), None);
        assert_eq!(users.shown.page, 4);
        assert_eq!(users.search, "jane");
    }

    #[test]
    fn repeated_clears_each_trigger_a_reload() {
        let mut users = UserDirectory::at(1, "");
        let first = ReloadEpoch::default().bumped();
        let second = first.bumped();
        assert!(users.observe(first).is_some());
        assert!(users.observe(first).is_none());
        assert!(users.observe(second).is_some());
    }
}
