//! Navigation targets exposed to the presentation layer.
//!
//! The core never switches views itself; mutators return the [`Tab`] the
//! presentation should show next.

use std::fmt::{Display, Formatter};

/// Top-level view of the organizer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Tab {
    #[default]
    Home,
    Notes,
    Games,
    Music,
    Advice,
    About,
}

impl Tab {
    /// Every tab in display order.
    pub const ALL: [Tab; 6] = [
        Tab::Home,
        Tab::Notes,
        Tab::Games,
        Tab::Music,
        Tab::Advice,
        Tab::About,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::Notes => "notes",
            Self::Games => "games",
            Self::Music => "music",
            Self::Advice => "advice",
            Self::About => "about",
        }
    }
}

impl Display for Tab {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::Tab;

    use std::collections::HashSet;

    #[test]
    fn home_is_the_default_tab() {
        assert_eq!(Tab::default(), Tab::Home);
        assert_eq!(Tab::ALL[0], Tab::default());
    }

    #[test]
    fn display_uses_unique_lowercase_names() {
        let names: HashSet<String> = Tab::ALL.iter().map(Tab::to_string).collect();
        assert_eq!(names.len(), Tab::ALL.len());
        assert_eq!(Tab::Notes.to_string(), "notes");
    }
}
