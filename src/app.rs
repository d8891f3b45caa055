//! Application state and event handling
//!
//! This is the core of sairyware, managing:
//! - The active tab (exactly one at any time)
//! - Theme toggling and persistence
//! - Clipboard copy with a timed acknowledgment
//! - Keyboard input dispatch

use crate::config::Config;
use crate::content::{PROJECTS, SCRIPTS, SNIPPET};
use crate::types::Tab;
use crate::ui::Theme;
use arboard::Clipboard;
use crossterm::event::{KeyCode, KeyEvent};
use std::time::{Duration, Instant};

/// How long the "Copied!" acknowledgment stays on screen
pub const COPY_ACK_DURATION: Duration = Duration::from_millis(2000);

/// How long flash messages stay on screen
const FLASH_DURATION: Duration = Duration::from_secs(3);

/// Main application state
pub struct App {
    // Core state
    pub should_quit: bool,
    pub active_tab: Tab,
    pub config: Config,
    pub theme: Theme,

    // Clipboard backend, absent when none is available (e.g. over SSH)
    clipboard: Option<Clipboard>,

    // Per-tab cursors and scroll
    pub projects_selected: usize,
    pub scripts_selected: usize,
    pub snippet_scroll: u16,

    // Copy acknowledgment ("Copied!" label swap), reverts after 2s
    pub copy_ack: Option<Instant>,

    // Flash message (temporary feedback)
    pub flash_message: Option<(String, bool, Instant)>, // (message, is_error, timestamp)
}

impl App {
    /// Create the app with the system clipboard (if one exists)
    pub fn new(config: Config) -> Self {
        Self::with_clipboard(config, Clipboard::new().ok())
    }

    /// Create the app with an explicit clipboard backend
    pub fn with_clipboard(config: Config, clipboard: Option<Clipboard>) -> Self {
        let theme = Theme::from_name(config.theme);

        Self {
            should_quit: false,
            active_tab: Tab::default(),
            config,
            theme,
            clipboard,
            projects_selected: 0,
            scripts_selected: 0,
            snippet_scroll: 0,
            copy_ack: None,
            flash_message: None,
        }
    }

    /// Switch to a tab, scrolling its content back to the top
    pub fn select_tab(&mut self, tab: Tab) {
        self.active_tab = tab;
        self.snippet_scroll = 0;
    }

    /// Flip light/dark, rebuild the palette, and persist the preference
    pub fn toggle_theme(&mut self) {
        self.config.toggle_theme();
        self.apply_theme();
        // Persistence unavailability is never surfaced; next start uses the default
        if let Err(e) = self.config.save() {
            tracing::warn!("could not persist theme preference: {e:#}");
        }
    }

    /// Rebuild the palette from the configured theme name
    pub fn apply_theme(&mut self) {
        self.theme = Theme::from_name(self.config.theme);
    }

    /// Copy the featured snippet to the system clipboard
    pub fn copy_snippet(&mut self) {
        let result = match self.clipboard.as_mut() {
            Some(cb) => cb.set_text(SNIPPET.to_string()).map_err(|e| e.to_string()),
            None => Err("no clipboard backend available".to_string()),
        };

        match result {
            Ok(()) => {
                self.copy_ack = Some(Instant::now());
            }
            Err(e) => {
                tracing::warn!("clipboard write failed: {e}");
                self.show_flash("Copy failed: clipboard unavailable", true);
            }
        }
    }

    /// Whether the "Copied!" acknowledgment should currently be shown
    pub fn copy_ack_active(&self) -> bool {
        self.copy_ack
            .is_some_and(|since| since.elapsed() < COPY_ACK_DURATION)
    }

    /// Expire timed UI state; called once per main-loop iteration
    pub fn tick(&mut self) {
        if let Some(since) = self.copy_ack {
            if since.elapsed() >= COPY_ACK_DURATION {
                self.copy_ack = None;
            }
        }

        if let Some((_, _, since)) = &self.flash_message {
            if since.elapsed() >= FLASH_DURATION {
                self.flash_message = None;
            }
        }
    }

    /// Handle a key event
    pub fn handle_key(&mut self, key: KeyEvent) {
        // Global keys (work in all tabs)
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
                return;
            }
            KeyCode::Char('t') => {
                self.toggle_theme();
                return;
            }
            KeyCode::Char(c @ '1'..='4') => {
                let idx = c as usize - '1' as usize;
                self.select_tab(Tab::from_index(idx));
                return;
            }
            KeyCode::Tab => {
                self.select_tab(self.active_tab.next());
                return;
            }
            _ => {}
        }

        // Tab-specific handling
        match self.active_tab {
            Tab::Home => {}
            Tab::Projects => self.handle_projects_key(key),
            Tab::Scripts => self.handle_scripts_key(key),
            Tab::Snippet => self.handle_snippet_key(key),
        }
    }

    fn handle_projects_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('j') | KeyCode::Down => {
                if self.projects_selected < PROJECTS.len().saturating_sub(1) {
                    self.projects_selected += 1;
                }
            }
            KeyCode::Char('k') | KeyCode::Up => {
                self.projects_selected = self.projects_selected.saturating_sub(1);
            }
            KeyCode::Char('g') => self.projects_selected = 0,
            KeyCode::Char('G') => {
                self.projects_selected = PROJECTS.len().saturating_sub(1);
            }
            _ => {}
        }
    }

    fn handle_scripts_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('j') | KeyCode::Down => {
                if self.scripts_selected < SCRIPTS.len().saturating_sub(1) {
                    self.scripts_selected += 1;
                }
            }
            KeyCode::Char('k') | KeyCode::Up => {
                self.scripts_selected = self.scripts_selected.saturating_sub(1);
            }
            KeyCode::Char('g') => self.scripts_selected = 0,
            KeyCode::Char('G') => {
                self.scripts_selected = SCRIPTS.len().saturating_sub(1);
            }
            _ => {}
        }
    }

    fn handle_snippet_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('c') => self.copy_snippet(),
            KeyCode::Char('j') | KeyCode::Down => {
                self.snippet_scroll = self.snippet_scroll.saturating_add(1);
            }
            KeyCode::Char('k') | KeyCode::Up => {
                self.snippet_scroll = self.snippet_scroll.saturating_sub(1);
            }
            KeyCode::Char('g') => self.snippet_scroll = 0,
            _ => {}
        }
    }

    /// Show a flash message
    pub fn show_flash(&mut self, message: &str, is_error: bool) {
        self.flash_message = Some((message.into(), is_error, Instant::now()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ThemeName;

    fn test_app() -> App {
        App::with_clipboard(Config::default(), None)
    }

    #[test]
    fn test_starts_on_home_with_dark_theme() {
        let app = test_app();
        assert_eq!(app.active_tab, Tab::Home);
        assert_eq!(app.config.theme, ThemeName::Dark);
    }

    #[test]
    fn test_select_tab_resets_scroll() {
        let mut app = test_app();
        app.snippet_scroll = 7;

        app.select_tab(Tab::Projects);
        assert_eq!(app.active_tab, Tab::Projects);
        assert_eq!(app.snippet_scroll, 0);
    }

    #[test]
    fn test_number_keys_switch_tabs() {
        let mut app = test_app();
        for (key, expected) in [
            ('1', Tab::Home),
            ('2', Tab::Projects),
            ('3', Tab::Scripts),
            ('4', Tab::Snippet),
        ] {
            app.handle_key(KeyEvent::from(KeyCode::Char(key)));
            assert_eq!(app.active_tab, expected);
        }
    }

    #[test]
    fn test_apply_theme_is_involution() {
        let mut app = test_app();
        let original_bg = app.theme.bg;

        app.config.toggle_theme();
        app.apply_theme();
        assert_ne!(app.theme.bg, original_bg);

        app.config.toggle_theme();
        app.apply_theme();
        assert_eq!(app.theme.bg, original_bg);
    }

    #[test]
    fn test_copy_without_clipboard_flashes_error() {
        let mut app = test_app();
        app.active_tab = Tab::Snippet;

        app.handle_key(KeyEvent::from(KeyCode::Char('c')));

        assert!(app.copy_ack.is_none());
        let (_, is_error, _) = app.flash_message.as_ref().expect("flash expected");
        assert!(is_error);
    }

    #[test]
    fn test_copy_ack_expires_after_duration() {
        let mut app = test_app();

        app.copy_ack = Some(Instant::now());
        assert!(app.copy_ack_active());

        app.copy_ack = Some(Instant::now() - Duration::from_secs(3));
        assert!(!app.copy_ack_active());
        app.tick();
        assert!(app.copy_ack.is_none());
    }

    #[test]
    fn test_flash_expires_after_duration() {
        let mut app = test_app();
        app.flash_message = Some(("hi".into(), false, Instant::now() - Duration::from_secs(4)));
        app.tick();
        assert!(app.flash_message.is_none());
    }

    #[test]
    fn test_projects_cursor_stays_in_bounds() {
        let mut app = test_app();
        app.select_tab(Tab::Projects);

        for _ in 0..20 {
            app.handle_key(KeyEvent::from(KeyCode::Char('j')));
        }
        assert_eq!(app.projects_selected, PROJECTS.len() - 1);

        for _ in 0..20 {
            app.handle_key(KeyEvent::from(KeyCode::Char('k')));
        }
        assert_eq!(app.projects_selected, 0);
    }

    #[test]
    fn test_quit_key() {
        let mut app = test_app();
        app.handle_key(KeyEvent::from(KeyCode::Char('q')));
        assert!(app.should_quit);
    }
}
