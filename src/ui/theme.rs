//! Theme definitions for sairyware
//!
//! Two palettes, mirroring the light/dark modes of the portfolio site.
//! Each theme defines colors for all UI elements.

use crate::config::ThemeName;
use ratatui::style::{Color, Modifier, Style};

/// Complete theme with all required colors
#[derive(Debug, Clone)]
pub struct Theme {
    // Base colors
    pub bg: Color,
    pub fg: Color,
    pub fg_dim: Color,

    // Accent colors
    pub accent: Color,
    pub accent_dim: Color,

    // Status colors
    pub success: Color,
    pub error: Color,

    // UI element colors
    pub border: Color,
    pub border_focused: Color,
    pub selection_bg: Color,
    pub selection_fg: Color,

    // Content colors
    pub tag_fg: Color,
    pub tag_bg: Color,
    pub code_fg: Color,
    pub link: Color,
}

impl Theme {
    /// Create a theme from a persisted theme name
    pub fn from_name(name: ThemeName) -> Self {
        match name {
            ThemeName::Light => Self::light(),
            ThemeName::Dark => Self::dark(),
        }
    }

    /// Dark theme (default)
    pub fn dark() -> Self {
        Self {
            // Base
            bg: Color::Rgb(18, 18, 24),            // #121218
            fg: Color::Rgb(224, 224, 230),         // #e0e0e6
            fg_dim: Color::Rgb(128, 128, 140),     // #80808c

            // Accent (violet)
            accent: Color::Rgb(167, 139, 250),     // #a78bfa
            accent_dim: Color::Rgb(109, 89, 180),  // #6d59b4

            // Status
            success: Color::Rgb(74, 222, 128),     // #4ade80
            error: Color::Rgb(248, 113, 113),      // #f87171

            // UI elements
            border: Color::Rgb(58, 58, 72),        // #3a3a48
            border_focused: Color::Rgb(167, 139, 250),
            selection_bg: Color::Rgb(58, 58, 72),
            selection_fg: Color::Rgb(224, 224, 230),

            // Content
            tag_fg: Color::Rgb(18, 18, 24),
            tag_bg: Color::Rgb(109, 89, 180),
            code_fg: Color::Rgb(134, 239, 172),    // #86efac
            link: Color::Rgb(96, 165, 250),        // #60a5fa
        }
    }

    /// Light theme
    pub fn light() -> Self {
        Self {
            // Base
            bg: Color::Rgb(248, 248, 250),         // #f8f8fa
            fg: Color::Rgb(30, 30, 40),            // #1e1e28
            fg_dim: Color::Rgb(120, 120, 132),     // #787884

            // Accent (violet)
            accent: Color::Rgb(109, 40, 217),      // #6d28d9
            accent_dim: Color::Rgb(139, 92, 246),  // #8b5cf6

            // Status
            success: Color::Rgb(22, 163, 74),      // #16a34a
            error: Color::Rgb(220, 38, 38),        // #dc2626

            // UI elements
            border: Color::Rgb(210, 210, 220),     // #d2d2dc
            border_focused: Color::Rgb(109, 40, 217),
            selection_bg: Color::Rgb(226, 222, 246), // #e2def6
            selection_fg: Color::Rgb(30, 30, 40),

            // Content
            tag_fg: Color::Rgb(248, 248, 250),
            tag_bg: Color::Rgb(139, 92, 246),
            code_fg: Color::Rgb(21, 128, 61),      // #15803d
            link: Color::Rgb(29, 78, 216),         // #1d4ed8
        }
    }

    // Style helpers for common UI patterns

    /// Default text style
    pub fn text(&self) -> Style {
        Style::default().fg(self.fg).bg(self.bg)
    }

    /// Dimmed text style
    pub fn text_dim(&self) -> Style {
        Style::default().fg(self.fg_dim).bg(self.bg)
    }

    /// Title/header style
    pub fn title(&self) -> Style {
        Style::default()
            .fg(self.accent)
            .bg(self.bg)
            .add_modifier(Modifier::BOLD)
    }

    /// Selected item style
    pub fn selected(&self) -> Style {
        Style::default()
            .fg(self.selection_fg)
            .bg(self.selection_bg)
            .add_modifier(Modifier::BOLD)
    }

    /// Border style (unfocused)
    pub fn border(&self) -> Style {
        Style::default().fg(self.border).bg(self.bg)
    }

    /// Border style (focused)
    pub fn border_focused(&self) -> Style {
        Style::default().fg(self.border_focused).bg(self.bg)
    }

    /// Background fill for whole-area blocks
    pub fn block_style(&self) -> Style {
        Style::default().bg(self.bg)
    }

    /// Tab style (inactive)
    pub fn tab_inactive(&self) -> Style {
        Style::default().fg(self.fg_dim).bg(self.bg)
    }

    /// Tab style (active)
    pub fn tab_active(&self) -> Style {
        Style::default()
            .fg(self.accent)
            .bg(self.bg)
            .add_modifier(Modifier::BOLD)
    }

    /// Success message style
    pub fn success(&self) -> Style {
        Style::default().fg(self.success).bg(self.bg)
    }

    /// Error message style
    pub fn error(&self) -> Style {
        Style::default().fg(self.error).bg(self.bg)
    }

    /// Project tag pill
    pub fn tag(&self) -> Style {
        Style::default().fg(self.tag_fg).bg(self.tag_bg)
    }

    /// Code block text
    pub fn code(&self) -> Style {
        Style::default().fg(self.code_fg).bg(self.bg)
    }

    /// Download link text
    pub fn link(&self) -> Style {
        Style::default()
            .fg(self.link)
            .bg(self.bg)
            .add_modifier(Modifier::UNDERLINED)
    }
}
