// Reusable components live here.

pub mod admin_nav;
pub mod loading_spinner;
pub mod modal;
pub mod pager;
pub mod stats_card;
