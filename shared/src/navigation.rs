//! Sections of the console and which one is showing.

/// Sections of the admin console; exactly one is active.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Section {
    #[default]
    Dashboard,
    Users,
    Videos,
    Settings,
}

impl Section {
    pub const ALL: [Section; 4] =
        [Section::Dashboard, Section::Users, Section::Videos, Section::Settings];

    /// Stable key carried by nav links.
    pub fn key(self) -> &'static str {
        match self {
            Section::Dashboard => "dashboard",
            Section::Users => "users",
            Section::Videos => "videos",
            Section::Settings => "settings",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|section| section.key() == key)
    }

    pub fn label(self) -> &'static str {
        match self {
            Section::Dashboard => "Dashboard",
            Section::Users => "Users",
            Section::Videos => "Videos",
            Section::Settings => "Settings",
        }
    }

    pub fn icon_class(self) -> &'static str {
        match self {
            Section::Dashboard => "fa-gauge",
            Section::Users => "fa-users",
            Section::Videos => "fa-film",
            Section::Settings => "fa-gear",
        }
    }

    /// Section to show after a nav link with `key` is clicked.
    pub fn activate(self, key: &str) -> Self {
        Self::from_key(key).unwrap_or(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_round_trip() {
        for section in Section::ALL {
            assert_eq!(Section::from_key(section.key()), Some(section));
        }
    }

    #[test]
    fn unknown_key_keeps_current_section() {
        assert_eq!(Section::Users.activate("videos"), Section::Videos);
        assert_eq!(Section::Users.activate("billing"), Section::Users);
        assert_eq!(Section::default(), Section::Dashboard);
    }
}
