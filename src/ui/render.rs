//! Main rendering module
//!
//! Handles rendering the complete UI including:
//! - Header with tab bar and theme indicator
//! - Active tab content
//! - Status bar with keybinding hints and the year stamp
//! - Flash messages

use crate::app::App;
use crate::content::{INTRO, PROJECTS, SCRIPTS, SNIPPET};
use crate::types::{current_year, Project, Tab};
use crate::ui::{theme::Theme, widgets};
use ratatui::{
    layout::{Constraint, Layout, Rect},
    text::Line,
    widgets::{Block, Borders, Paragraph, Tabs, Wrap},
    Frame,
};

/// Main render function - entry point for all UI rendering
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();

    // Fill the background so theme toggles repaint everything
    frame.render_widget(Block::default().style(app.theme.block_style()), area);

    // Main layout: header, content, status bar
    let layout = Layout::vertical([
        Constraint::Length(3),  // Header + tabs
        Constraint::Min(5),     // Content
        Constraint::Length(1),  // Status bar
    ])
    .split(area);

    render_header(frame, app, layout[0]);
    render_tab_content(frame, app, layout[1]);
    render_status_bar(frame, app, layout[2]);

    // Flash message (error/success feedback)
    if let Some((msg, is_error, _)) = &app.flash_message {
        widgets::render_flash_message(frame, msg, *is_error, &app.theme, area);
    }
}

/// Render header with title, tab bar, and theme mode indicator
fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;

    let header_block = Block::default()
        .style(theme.block_style())
        .title(" sairyware · portfolio ")
        .title_style(theme.title())
        .borders(Borders::BOTTOM)
        .border_style(theme.border());

    frame.render_widget(header_block, area);

    // Tab bar
    let tab_titles: Vec<Line> = Tab::all()
        .iter()
        .enumerate()
        .map(|(i, tab)| {
            let style = if app.active_tab == *tab {
                theme.tab_active()
            } else {
                theme.tab_inactive()
            };
            Line::styled(format!("[{}] {}", i + 1, tab.label()), style)
        })
        .collect();

    let tabs = Tabs::new(tab_titles)
        .select(app.active_tab.index())
        .divider(" │ ")
        .style(theme.text());

    let tabs_area = Rect {
        x: area.x + 2,
        y: area.y + 1,
        width: area.width.saturating_sub(4),
        height: 1,
    };
    frame.render_widget(tabs, tabs_area);

    // Theme mode indicator (the toggle button icon analogue)
    let mode = app.config.theme;
    let indicator = format!("{} {} [t]", mode.icon(), mode.as_str());
    let indicator_len = indicator.chars().count() as u16;
    let indicator_area = Rect {
        x: area.x + area.width.saturating_sub(indicator_len + 2),
        y: area.y + 1,
        width: indicator_len.min(area.width),
        height: 1,
    };
    frame.render_widget(Paragraph::new(indicator).style(theme.text_dim()), indicator_area);
}

/// Render the active tab's content
fn render_tab_content(frame: &mut Frame, app: &App, area: Rect) {
    match app.active_tab {
        Tab::Home => render_home_tab(frame, app, area),
        Tab::Projects => render_projects_tab(frame, app, area),
        Tab::Scripts => render_scripts_tab(frame, app, area),
        Tab::Snippet => render_snippet_tab(frame, app, area),
    }
}

/// Render status bar with keybindings and the footer year stamp
fn render_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;

    let hints = match app.active_tab {
        Tab::Home => " [1-4] Tabs  [t] Theme  [q] Quit",
        Tab::Projects => " [j/k] Navigate  [1-4] Tabs  [t] Theme  [q] Quit",
        Tab::Scripts => " [j/k] Navigate  [1-4] Tabs  [t] Theme  [q] Quit",
        Tab::Snippet => " [c] Copy  [j/k] Scroll  [t] Theme  [q] Quit",
    };

    let footer = format!("© {} SairyWare ", current_year());
    widgets::render_status_bar(frame, hints, &footer, theme, area);
}

// === TAB RENDERERS ===

/// Home tab: intro blurb
fn render_home_tab(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;

    let block = Block::default()
        .style(theme.block_style())
        .title(" Welcome ")
        .title_style(theme.title())
        .borders(Borders::ALL)
        .border_style(theme.border());

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut lines: Vec<Line> = vec![Line::raw("")];
    lines.extend(INTRO.iter().map(|l| Line::styled(*l, theme.text())));

    let intro = Paragraph::new(lines)
        .style(theme.text())
        .wrap(Wrap { trim: false });
    frame.render_widget(intro, inner);
}

/// Projects tab: card grid, two columns on wide terminals
fn render_projects_tab(frame: &mut Frame, app: &App, area: Rect) {
    let columns = if area.width >= 100 { 2 } else { 1 };
    let card_height = 6u16;
    let rows = PROJECTS.len().div_ceil(columns);

    let mut constraints: Vec<Constraint> = vec![Constraint::Length(card_height); rows];
    constraints.push(Constraint::Min(0));
    let row_areas = Layout::vertical(constraints).split(area);

    for row in 0..rows {
        let col_areas = Layout::horizontal(vec![
            Constraint::Ratio(1, columns as u32);
            columns
        ])
        .split(row_areas[row]);

        for col in 0..columns {
            let idx = row * columns + col;
            if let Some(project) = PROJECTS.get(idx) {
                render_project_card(
                    frame,
                    project,
                    idx == app.projects_selected,
                    &app.theme,
                    col_areas[col],
                );
            }
        }
    }
}

/// Render one project card with its border
fn render_project_card(
    frame: &mut Frame,
    project: &Project,
    selected: bool,
    theme: &Theme,
    area: Rect,
) {
    let border_style = if selected {
        theme.border_focused()
    } else {
        theme.border()
    };

    let block = Block::default()
        .style(theme.block_style())
        .borders(Borders::ALL)
        .border_style(border_style);

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let card = Paragraph::new(widgets::project_card_lines(project, theme))
        .wrap(Wrap { trim: false });
    frame.render_widget(card, inner);
}

/// Scripts tab: one row per downloadable script
fn render_scripts_tab(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;

    let block = Block::default()
        .style(theme.block_style())
        .title(format!(" Scripts ({}) ", SCRIPTS.len()))
        .title_style(theme.title())
        .borders(Borders::ALL)
        .border_style(theme.border());

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let lines: Vec<Line> = SCRIPTS
        .iter()
        .enumerate()
        .flat_map(|(i, script)| {
            widgets::script_lines(script, i == app.scripts_selected, theme)
        })
        .collect();

    let list = Paragraph::new(lines).wrap(Wrap { trim: false });
    frame.render_widget(list, inner);
}

/// Snippet tab: featured Lua code block with the copy action
fn render_snippet_tab(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;

    let layout = Layout::vertical([
        Constraint::Min(3),     // Code block
        Constraint::Length(1),  // Copy "button"
    ])
    .split(area);

    let block = Block::default()
        .style(theme.block_style())
        .title(" featured · module_template.lua ")
        .title_style(theme.title())
        .borders(Borders::ALL)
        .border_style(theme.border());

    let inner = block.inner(layout[0]);
    frame.render_widget(block, layout[0]);

    let code_lines: Vec<Line> = SNIPPET
        .lines()
        .map(|l| Line::styled(l, theme.code()))
        .collect();

    let code = Paragraph::new(code_lines).scroll((app.snippet_scroll, 0));
    frame.render_widget(code, inner);

    let button_area = Rect {
        x: layout[1].x + 2,
        y: layout[1].y,
        width: layout[1].width.saturating_sub(2),
        height: 1,
    };
    frame.render_widget(
        Paragraph::new(widgets::copy_button_line(app.copy_ack_active(), theme)),
        button_area,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use ratatui::{backend::TestBackend, Terminal};

    fn draw(app: &App, width: u16, height: u16) -> String {
        let backend = TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|frame| render(frame, app)).unwrap();

        let buffer = terminal.backend().buffer().clone();
        buffer.content.iter().map(|cell| cell.symbol()).collect()
    }

    #[test]
    fn test_render_home_shows_tab_bar() {
        let app = App::with_clipboard(Config::default(), None);
        let screen = draw(&app, 120, 40);
        assert!(screen.contains("Projects"));
        assert!(screen.contains("SairyWare"));
    }

    #[test]
    fn test_render_projects_one_card_per_entry() {
        let mut app = App::with_clipboard(Config::default(), None);
        app.select_tab(Tab::Projects);

        let screen = draw(&app, 120, 40);
        for project in PROJECTS {
            assert!(screen.contains(project.title), "missing {}", project.title);
        }
    }

    #[test]
    fn test_render_is_idempotent() {
        let mut app = App::with_clipboard(Config::default(), None);
        app.select_tab(Tab::Projects);

        let first = draw(&app, 120, 40);
        let second = draw(&app, 120, 40);
        assert_eq!(first, second);
    }

    #[test]
    fn test_render_scripts_lists_every_entry() {
        let mut app = App::with_clipboard(Config::default(), None);
        app.select_tab(Tab::Scripts);

        let screen = draw(&app, 120, 40);
        for script in SCRIPTS {
            assert!(screen.contains(script.name), "missing {}", script.name);
        }
    }

    #[test]
    fn test_render_snippet_copy_button_states() {
        let mut app = App::with_clipboard(Config::default(), None);
        app.select_tab(Tab::Snippet);

        let screen = draw(&app, 120, 40);
        assert!(screen.contains("Copy snippet"));

        app.copy_ack = Some(std::time::Instant::now());
        let screen = draw(&app, 120, 40);
        assert!(screen.contains("Copied!"));
    }

    #[test]
    fn test_render_survives_tiny_terminal() {
        let mut app = App::with_clipboard(Config::default(), None);
        for tab in Tab::all() {
            app.select_tab(*tab);
            draw(&app, 20, 8);
        }
    }
}
