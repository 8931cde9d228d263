use ratatui::{
    Frame,
    layout::Alignment,
    prelude::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph, Wrap},
};

use crate::catalog::AppStatus;
use crate::state::{AppState, Focus};
use crate::theme::{Theme, theme};
use crate::util::{apps_available, truncate_to_width};

/// Text shown when no entry passes the filters.
pub const EMPTY_RESULTS_TEXT: &str = "No apps found";

/// Color for an entry status badge.
pub const fn status_color(status: AppStatus, th: &Theme) -> ratatui::style::Color {
    match status {
        AppStatus::Live => th.green,
        AppStatus::Beta => th.yellow,
        AppStatus::ComingSoon => th.overlay1,
    }
}

/// Render the results list, titled with the result count.
///
/// Falls back to an empty-state message when nothing matches.
pub fn render_results(f: &mut Frame, app: &mut AppState, area: Rect) {
    let th = theme();
    let focused = matches!(app.focus, Focus::Results);
    let block = Block::default()
        .title(Span::styled(
            apps_available(app.results.len()),
            Style::default().fg(if focused { th.mauve } else { th.overlay1 }),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(if focused { th.sapphire } else { th.surface1 }));

    if app.results.is_empty() {
        let msg = Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled(
                EMPTY_RESULTS_TEXT,
                Style::default().fg(th.text).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                "Try adjusting your search or filters (Esc clears)",
                Style::default().fg(th.subtext0),
            )),
        ])
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(block);
        f.render_widget(msg, area);
        return;
    }

    // Width left for the description after borders, highlight symbol, and name column.
    let desc_width = usize::from(area.width.saturating_sub(4 + 2 + 24));
    let items: Vec<ListItem> = app
        .results
        .iter()
        .map(|e| {
            let mut segs = vec![
                Span::styled("● ", Style::default().fg(status_color(e.status, &th))),
                Span::styled(
                    format!("{:<22}", truncate_to_width(&e.name, 22)),
                    Style::default().fg(th.text).add_modifier(Modifier::BOLD),
                ),
            ];
            if desc_width > 0 {
                segs.push(Span::styled(
                    truncate_to_width(&e.description, desc_width),
                    Style::default().fg(th.subtext0),
                ));
            }
            ListItem::new(Line::from(segs))
        })
        .collect();

    let list = List::new(items)
        .style(Style::default().fg(th.text).bg(th.base))
        .block(block)
        .highlight_style(Style::default().fg(th.base).bg(th.lavender))
        .highlight_symbol("> ");
    f.render_stateful_widget(list, area, &mut app.list_state);
}
