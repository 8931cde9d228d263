use ratatui::{
    Frame,
    prelude::{Position, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Tabs},
};

use crate::state::{AppState, Focus};
use crate::theme::theme;

/// Hint shown in the empty search box.
const SEARCH_PLACEHOLDER: &str = "Search apps by name, description, tag, or author";

/// Render the search input and place the cursor when it has focus.
pub fn render_search(f: &mut Frame, app: &AppState, area: Rect) {
    let th = theme();
    let focused = matches!(app.focus, Focus::Search);
    let body = if app.input.is_empty() {
        Span::styled(SEARCH_PLACEHOLDER, Style::default().fg(th.overlay1))
    } else {
        Span::styled(
            app.input.clone(),
            Style::default().fg(if focused { th.text } else { th.subtext0 }),
        )
    };
    let line = Line::from(vec![
        Span::styled(
            "> ",
            Style::default().fg(if focused { th.sapphire } else { th.overlay1 }),
        ),
        body,
    ]);
    let para = Paragraph::new(line).block(
        Block::default()
            .title(Span::styled(
                "Search",
                Style::default().fg(if focused { th.mauve } else { th.overlay1 }),
            ))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(if focused { th.sapphire } else { th.surface1 })),
    );
    f.render_widget(para, area);

    if focused {
        let typed = u16::try_from(unicode_width::UnicodeWidthStr::width(app.input.as_str()))
            .unwrap_or(u16::MAX);
        let x = area
            .x
            .saturating_add(3)
            .saturating_add(typed)
            .min(area.right().saturating_sub(2));
        f.set_cursor_position(Position::new(x, area.y + 1));
    }
}

/// Render category tabs with the active one highlighted.
pub fn render_category_tabs(f: &mut Frame, app: &AppState, area: Rect) {
    let th = theme();
    let titles: Vec<Line> = app
        .category_ids
        .iter()
        .map(|id| Line::from(app.category_label(id)))
        .collect();
    let tabs = Tabs::new(titles)
        .select(app.category_idx)
        .style(Style::default().fg(th.subtext0))
        .highlight_style(
            Style::default()
                .fg(th.base)
                .bg(th.lavender)
                .add_modifier(Modifier::BOLD),
        )
        .divider(Span::styled("│", Style::default().fg(th.overlay1)))
        .block(
            Block::default()
                .title(Span::styled("Categories", Style::default().fg(th.overlay1)))
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(th.surface1)),
        );
    f.render_widget(tabs, area);
}
