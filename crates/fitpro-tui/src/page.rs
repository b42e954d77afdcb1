//! Page identifiers and routing.
//!
//! Pages are a closed enum dispatched through a compile-time lookup table,
//! so navigation-by-id (from search results or `:page` commands) is a single
//! map probe and adding a page without wiring it up fails to compile.

use phf::phf_map;

/// One top-level page of the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Page {
    Home,
    Exercises,
    Calculator,
    Nutrition,
    Dashboard,
    Trainers,
}

/// Stable string id → page. Ids are the wire form used by search-result
/// navigation and the `:page` command.
static PAGES_BY_ID: phf::Map<&'static str, Page> = phf_map! {
    "home" => Page::Home,
    "exercises" => Page::Exercises,
    "calculator" => Page::Calculator,
    "nutrition" => Page::Nutrition,
    "dashboard" => Page::Dashboard,
    "trainers" => Page::Trainers,
};

impl Page {
    /// All pages in tab-bar order.
    pub const ALL: [Page; 6] = [
        Page::Home,
        Page::Exercises,
        Page::Calculator,
        Page::Nutrition,
        Page::Dashboard,
        Page::Trainers,
    ];

    /// Resolve a string id. Unknown ids return `None`; callers fall back to
    /// [`Page::Home`].
    pub fn from_id(id: &str) -> Option<Page> {
        PAGES_BY_ID.get(id).copied()
    }

    /// Stable string id of this page.
    pub fn id(self) -> &'static str {
        match self {
            Page::Home => "home",
            Page::Exercises => "exercises",
            Page::Calculator => "calculator",
            Page::Nutrition => "nutrition",
            Page::Dashboard => "dashboard",
            Page::Trainers => "trainers",
        }
    }

    /// Tab-bar label.
    pub fn title(self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::Exercises => "Exercises",
            Page::Calculator => "Calculator",
            Page::Nutrition => "Nutrition",
            Page::Dashboard => "Dashboard",
            Page::Trainers => "Trainers",
        }
    }

    /// Position within [`Page::ALL`].
    pub fn index(self) -> usize {
        Page::ALL.iter().position(|p| *p == self).unwrap_or(0)
    }

    /// The page to the right in the tab bar, wrapping.
    pub fn next(self) -> Page {
        Page::ALL[(self.index() + 1) % Page::ALL.len()]
    }

    /// The page to the left in the tab bar, wrapping.
    pub fn prev(self) -> Page {
        Page::ALL[(self.index() + Page::ALL.len() - 1) % Page::ALL.len()]
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_page_round_trips_through_its_id() {
        for page in Page::ALL {
            assert_eq!(Page::from_id(page.id()), Some(page));
        }
    }

    #[test]
    fn unknown_id_resolves_to_none() {
        assert_eq!(Page::from_id("settings"), None);
        assert_eq!(Page::from_id(""), None);
        assert_eq!(Page::from_id("Exercises"), None);
    }

    #[test]
    fn next_and_prev_are_inverse() {
        for page in Page::ALL {
            assert_eq!(page.next().prev(), page);
            assert_eq!(page.prev().next(), page);
        }
    }

    #[test]
    fn next_wraps_around() {
        assert_eq!(Page::Trainers.next(), Page::Home);
        assert_eq!(Page::Home.prev(), Page::Trainers);
    }
}
