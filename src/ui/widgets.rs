//! Reusable UI pieces
//!
//! The card/row builders are pure functions from an entry record to
//! structured `Line` fragments. Content never passes through markup text,
//! so there is no escaping boundary; the fragments are the render contract
//! and the unit-testable surface.

use crate::types::{Project, Script};
use crate::ui::Theme;
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Clear, Paragraph},
    Frame,
};

/// Build the text fragments for one project card (without the border)
pub fn project_card_lines(project: &Project, theme: &Theme) -> Vec<Line<'static>> {
    let mut tag_spans: Vec<Span> = Vec::new();
    for (i, tag) in project.tags.iter().enumerate() {
        if i > 0 {
            tag_spans.push(Span::styled(" ", theme.text()));
        }
        tag_spans.push(Span::styled(format!(" {tag} "), theme.tag()));
    }

    vec![
        Line::from(vec![
            Span::styled(format!("{} ", project.icon), theme.title()),
            Span::styled(project.title, theme.title()),
        ]),
        Line::styled(project.description, theme.text()),
        Line::raw(""),
        Line::from(tag_spans),
    ]
}

/// Build the text fragments for one script row
pub fn script_lines(script: &Script, selected: bool, theme: &Theme) -> Vec<Line<'static>> {
    let name_style = if selected { theme.selected() } else { theme.title() };
    let marker = if selected { "▸ " } else { "  " };

    vec![
        Line::from(vec![
            Span::styled(marker, name_style),
            Span::styled(script.name, name_style),
        ]),
        Line::from(vec![
            Span::styled("  ", theme.text()),
            Span::styled(script.description, theme.text()),
        ]),
        Line::from(vec![
            Span::styled("  ⤓ ", theme.text_dim()),
            Span::styled(script.download_url, theme.link()),
        ]),
        Line::raw(""),
    ]
}

/// Build the copy "button" line under the snippet block
pub fn copy_button_line(ack_active: bool, theme: &Theme) -> Line<'static> {
    if ack_active {
        Line::from(vec![
            Span::styled("[c] ", theme.text_dim()),
            Span::styled("✓ Copied!", theme.success()),
        ])
    } else {
        Line::from(vec![
            Span::styled("[c] ", theme.text_dim()),
            Span::styled("⧉ Copy snippet", theme.text()),
        ])
    }
}

/// Render a flash message on the bottom line (success or error feedback)
pub fn render_flash_message(
    frame: &mut Frame,
    message: &str,
    is_error: bool,
    theme: &Theme,
    area: Rect,
) {
    let style = if is_error { theme.error() } else { theme.success() };
    let prefix = if is_error { "✗ " } else { "✓ " };

    let flash_area = Rect {
        x: area.x,
        y: area.y + area.height.saturating_sub(1),
        width: area.width,
        height: 1,
    };

    frame.render_widget(Clear, flash_area);
    let flash = Paragraph::new(Line::from(vec![
        Span::styled(prefix, style),
        Span::styled(message.to_string(), style),
    ]))
    .style(Style::default().bg(theme.bg));
    frame.render_widget(flash, flash_area);
}

/// Render the status bar: hints on the left, footer stamp on the right
pub fn render_status_bar(
    frame: &mut Frame,
    left_content: &str,
    right_content: &str,
    theme: &Theme,
    area: Rect,
) {
    let status_area = Rect {
        x: area.x,
        y: area.y + area.height.saturating_sub(1),
        width: area.width,
        height: 1,
    };

    frame.render_widget(Clear, status_area);

    let left_widget = Paragraph::new(left_content).style(theme.text_dim());

    let right_len = right_content.chars().count() as u16;
    let right_area = Rect {
        x: status_area.x + status_area.width.saturating_sub(right_len + 1),
        y: status_area.y,
        width: right_len.min(status_area.width),
        height: 1,
    };
    let right_widget = Paragraph::new(right_content).style(theme.text_dim());

    frame.render_widget(left_widget, status_area);
    frame.render_widget(right_widget, right_area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{PROJECTS, SCRIPTS};

    #[test]
    fn test_project_card_has_title_and_tags() {
        let theme = Theme::dark();
        let lines = project_card_lines(&PROJECTS[0], &theme);

        assert_eq!(lines.len(), 4);
        let title: String = lines[0].spans.iter().map(|s| s.content.as_ref()).collect();
        assert!(title.contains(PROJECTS[0].title));

        // One pill per tag, separated by spacers
        let tag_line = &lines[3];
        let pills = tag_line
            .spans
            .iter()
            .filter(|s| s.content.starts_with(' ') && s.content.len() > 1)
            .count();
        assert_eq!(pills, PROJECTS[0].tags.len());
    }

    #[test]
    fn test_card_builder_is_pure() {
        let theme = Theme::dark();
        let first = project_card_lines(&PROJECTS[1], &theme);
        let second = project_card_lines(&PROJECTS[1], &theme);
        assert_eq!(first.len(), second.len());
    }

    #[test]
    fn test_script_row_carries_download_url() {
        let theme = Theme::light();
        let lines = script_lines(&SCRIPTS[0], false, &theme);
        let joined: String = lines
            .iter()
            .flat_map(|l| l.spans.iter())
            .map(|s| s.content.as_ref())
            .collect();
        assert!(joined.contains(SCRIPTS[0].download_url));
    }

    #[test]
    fn test_selected_script_is_marked() {
        let theme = Theme::dark();
        let lines = script_lines(&SCRIPTS[1], true, &theme);
        assert!(lines[0].spans[0].content.contains('▸'));
    }

    #[test]
    fn test_copy_button_label_swap() {
        let theme = Theme::dark();
        let idle: String = copy_button_line(false, &theme)
            .spans
            .iter()
            .map(|s| s.content.as_ref())
            .collect();
        let acked: String = copy_button_line(true, &theme)
            .spans
            .iter()
            .map(|s| s.content.as_ref())
            .collect();

        assert!(idle.contains("Copy snippet"));
        assert!(acked.contains("Copied!"));
    }
}
