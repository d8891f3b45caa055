//! Core data types for sairyware
//!
//! This module defines the tab set and the portfolio entry records shared
//! throughout the application.

use chrono::{Datelike, Local};

/// A portfolio project shown as a card on the Projects tab
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub tags: &'static [&'static str],
    pub icon: &'static str,
}

/// A downloadable script shown on the Scripts tab
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Script {
    pub name: &'static str,
    pub description: &'static str,
    pub download_url: &'static str,
}

/// Application tabs
///
/// Exactly one tab is active at any time: the active tab is a single enum
/// field on `App`, and both the tab-bar highlight and the visible panel are
/// derived from it, so they can never disagree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Home,
    Projects,
    Scripts,
    Snippet,
}

impl Tab {
    pub fn all() -> &'static [Tab] {
        &[Tab::Home, Tab::Projects, Tab::Scripts, Tab::Snippet]
    }

    pub fn index(&self) -> usize {
        match self {
            Tab::Home => 0,
            Tab::Projects => 1,
            Tab::Scripts => 2,
            Tab::Snippet => 3,
        }
    }

    pub fn from_index(idx: usize) -> Self {
        match idx {
            0 => Tab::Home,
            1 => Tab::Projects,
            2 => Tab::Scripts,
            3 => Tab::Snippet,
            _ => Tab::Home,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Tab::Home => "Home",
            Tab::Projects => "Projects",
            Tab::Scripts => "Scripts",
            Tab::Snippet => "Snippet",
        }
    }

    /// The tab after this one, wrapping around (used by the Tab key)
    pub fn next(&self) -> Self {
        Tab::from_index((self.index() + 1) % Tab::all().len())
    }
}

/// Current calendar year for the footer stamp
pub fn current_year() -> i32 {
    Local::now().year()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tab_index_roundtrip() {
        for tab in Tab::all() {
            assert_eq!(Tab::from_index(tab.index()), *tab);
        }
    }

    #[test]
    fn test_tab_from_index_out_of_range() {
        assert_eq!(Tab::from_index(99), Tab::Home);
    }

    #[test]
    fn test_tab_next_cycles() {
        let mut tab = Tab::Home;
        for _ in 0..Tab::all().len() {
            tab = tab.next();
        }
        assert_eq!(tab, Tab::Home);
    }

    #[test]
    fn test_default_tab_is_home() {
        assert_eq!(Tab::default(), Tab::Home);
    }

    #[test]
    fn test_current_year_is_sane() {
        assert!(current_year() >= 2024);
    }
}
