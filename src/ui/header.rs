//! Header row: app title and the network status widget.

use ratatui::{
    Frame,
    prelude::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::sources::NetworkStats;
use crate::theme::{Theme, theme};

/// Placeholder shown while a stats poll is in flight.
pub const LOADING_TEXT: &str = "Loading…";

/// What: Build the network status line.
///
/// Inputs:
/// - `stats`: Summary to show, or `None` while a poll is in flight
/// - `th`: Palette
///
/// Output:
/// - `Loading…` placeholder, or online/offline state, miner and session counts,
///   and a `Demo Mode` badge for the synthetic summary.
#[must_use]
pub fn stats_line(stats: Option<&NetworkStats>, th: &Theme) -> Line<'static> {
    let Some(s) = stats else {
        return Line::from(Span::styled(
            LOADING_TEXT,
            Style::default().fg(th.overlay1),
        ));
    };
    let (state, color) = if s.is_online {
        ("Network Online", th.green)
    } else {
        ("Network Offline", th.red)
    };
    let mut spans = vec![
        Span::styled("● ", Style::default().fg(color)),
        Span::styled(state, Style::default().fg(color).add_modifier(Modifier::BOLD)),
        Span::styled("  │  ", Style::default().fg(th.overlay1)),
        Span::styled("Miners ", Style::default().fg(th.subtext0)),
        Span::styled(
            s.miner_count.to_string(),
            Style::default().fg(th.text).add_modifier(Modifier::BOLD),
        ),
        Span::styled("  │  ", Style::default().fg(th.overlay1)),
        Span::styled("Sessions ", Style::default().fg(th.subtext0)),
        Span::styled(
            s.session_count.to_string(),
            Style::default().fg(th.text).add_modifier(Modifier::BOLD),
        ),
    ];
    if s.is_demo() {
        spans.push(Span::raw("  "));
        spans.push(Span::styled(
            " Demo Mode ",
            Style::default()
                .fg(th.base)
                .bg(th.yellow)
                .add_modifier(Modifier::BOLD),
        ));
    }
    Line::from(spans)
}

/// Render the header block into `area`.
pub fn render_header(f: &mut Frame, stats: Option<&NetworkStats>, area: Rect) {
    let th = theme();
    let title = Line::from(vec![
        Span::styled(
            "CortexHub",
            Style::default().fg(th.mauve).add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            "  apps built on Cortensor",
            Style::default().fg(th.subtext0),
        ),
    ]);
    let para = Paragraph::new(stats_line(stats, &th))
        .right_aligned()
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(th.surface1)),
        );
    f.render_widget(para, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sources::demo_stats;

    fn text(line: &Line<'_>) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    /// What: Status line covers loading, live, offline, and demo summaries.
    fn stats_line_variants() {
        let th = Theme::default();
        assert_eq!(text(&stats_line(None, &th)), LOADING_TEXT);

        let live = NetworkStats {
            is_online: true,
            miner_count: 3,
            session_count: 1,
            status: "ok".into(),
        };
        let t = text(&stats_line(Some(&live), &th));
        assert!(t.contains("Network Online"));
        assert!(t.contains("Miners 3"));
        assert!(t.contains("Sessions 1"));
        assert!(!t.contains("Demo Mode"));

        let offline = NetworkStats {
            is_online: false,
            ..live
        };
        assert!(text(&stats_line(Some(&offline), &th)).contains("Network Offline"));

        let demo = text(&stats_line(Some(&demo_stats()), &th));
        assert!(demo.contains("Miners 45"));
        assert!(demo.contains("Sessions 12"));
        assert!(demo.contains("Demo Mode"));
    }
}
