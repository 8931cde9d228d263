//! TUI rendering for CortexHub.
//!
//! Layout, top to bottom: header with network stats, search input, category
//! tabs, then results (left) beside the detail pane (right), and a key hint
//! footer. Modals and toasts draw last.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Paragraph},
};

use crate::state::{AppState, Focus};
use crate::theme::theme;

pub mod details;
pub mod header;
pub mod modals;
pub mod results;
pub mod search;

pub use details::{detail_lines, detail_text};

/// Render one frame of the application.
pub fn ui(f: &mut Frame, app: &mut AppState) {
    let th = theme();
    let area = f.area();

    let bg = Block::default().style(Style::default().bg(th.base));
    f.render_widget(bg, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .split(area);

    header::render_header(f, app.displayed_stats(), rows[0]);
    search::render_search(f, app, rows[1]);
    search::render_category_tabs(f, app, rows[2]);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(rows[3]);
    results::render_results(f, app, body[0]);
    details::render_details(f, app, body[1]);

    let hint = match app.focus {
        Focus::Search => "Type to search  Tab: category  Enter: open  Esc: clear/results  F1: help  Ctrl+C: quit",
        Focus::Results => "/: search  g: GitHub  Enter: open  J/K: scroll details  ?: help  q: quit",
    };
    f.render_widget(
        Paragraph::new(Line::from(Span::styled(
            hint,
            Style::default().fg(th.overlay1),
        ))),
        rows[4],
    );

    modals::render_modals(f, app, area);
    modals::render_toast(f, app, area);
}
