use ratatui::{
    Frame,
    prelude::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
};

use crate::state::{AppState, Modal};
use crate::theme::{Theme, theme};

/// Key bindings listed in the help overlay as `(keys, action)`.
pub const HELP_BINDINGS: &[(&str, &str)] = &[
    ("type", "Edit search (search box focused)"),
    ("Backspace / Ctrl+U", "Delete character / clear query"),
    ("Up / Down / PgUp / PgDn", "Move selection"),
    ("Left / Right / Tab", "Previous / next category"),
    ("Enter", "Open the app website"),
    ("Esc", "Clear filters, then focus results"),
    ("Ctrl+L", "Clear search and category"),
    ("/ or i", "Focus search (results focused)"),
    ("j / k, Home / End", "Move selection (results focused)"),
    ("J / K", "Scroll details (results focused)"),
    ("g / o", "Open GitHub / website (results focused)"),
    ("? or F1", "Toggle this help"),
    ("q / Ctrl+C", "Quit (q only when results focused)"),
];

/// What: Rectangle of at most `w`×`h` centered in `area`.
#[must_use]
pub fn centered_rect(area: Rect, w: u16, h: u16) -> Rect {
    let width = w.min(area.width);
    let height = h.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

fn render_help(f: &mut Frame, area: Rect, th: &Theme) {
    let h = u16::try_from(HELP_BINDINGS.len() + 4).unwrap_or(u16::MAX);
    let rect = centered_rect(area, 72, h);
    f.render_widget(Clear, rect);
    let mut lines: Vec<Line<'static>> = vec![
        Line::from(Span::styled(
            "CortexHub Help",
            Style::default().fg(th.mauve).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];
    for (keys, action) in HELP_BINDINGS {
        lines.push(Line::from(vec![
            Span::styled(
                format!("{keys:24}"),
                Style::default().fg(th.overlay1).add_modifier(Modifier::BOLD),
            ),
            Span::styled((*action).to_string(), Style::default().fg(th.text)),
        ]));
    }
    let para = Paragraph::new(lines)
        .style(Style::default().bg(th.mantle))
        .block(
            Block::default()
                .title(Span::styled(" Help ", Style::default().fg(th.lavender)))
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .border_style(Style::default().fg(th.lavender)),
        );
    f.render_widget(para, rect);
}

fn render_alert(f: &mut Frame, area: Rect, message: &str, th: &Theme) {
    let rect = centered_rect(area, 60, 7);
    f.render_widget(Clear, rect);
    let para = Paragraph::new(vec![
        Line::from(Span::styled(message.to_string(), Style::default().fg(th.text))),
        Line::from(""),
        Line::from(Span::styled(
            "Press any key to close",
            Style::default().fg(th.subtext0),
        )),
    ])
    .wrap(Wrap { trim: true })
    .style(Style::default().bg(th.mantle))
    .block(
        Block::default()
            .title(Span::styled(" Notice ", Style::default().fg(th.yellow)))
            .borders(Borders::ALL)
            .border_type(BorderType::Double)
            .border_style(Style::default().fg(th.yellow)),
    );
    f.render_widget(para, rect);
}

/// Render the active modal, if any, above everything else.
pub fn render_modals(f: &mut Frame, app: &AppState, area: Rect) {
    let th = theme();
    match &app.modal {
        Modal::None => {}
        Modal::Help => render_help(f, area, &th),
        Modal::Alert { message } => render_alert(f, area, message, &th),
    }
}

/// Render the toast message in the bottom-right corner.
pub fn render_toast(f: &mut Frame, app: &AppState, area: Rect) {
    let Some(msg) = app.toast_message.as_deref() else {
        return;
    };
    let th = theme();
    let w = u16::try_from(unicode_width::UnicodeWidthStr::width(msg) + 4)
        .unwrap_or(u16::MAX)
        .min(area.width);
    let h = 3.min(area.height);
    let rect = Rect {
        x: area.right().saturating_sub(w),
        y: area.bottom().saturating_sub(h),
        width: w,
        height: h,
    };
    f.render_widget(Clear, rect);
    let para = Paragraph::new(Span::styled(msg.to_string(), Style::default().fg(th.text)))
        .style(Style::default().bg(th.mantle))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(th.sapphire)),
        );
    f.render_widget(para, rect);
}
