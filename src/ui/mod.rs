//! User Interface layer
//!
//! This module contains all UI-related code:
//! - Theme palettes and styles
//! - Pure fragment builders for cards and rows
//! - Main render loop

pub mod theme;
pub mod render;
pub mod widgets;

pub use theme::Theme;
pub use render::render;
