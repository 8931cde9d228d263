//! Detail pane for the highlighted catalog entry.

use ratatui::{
    Frame,
    prelude::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
};

use crate::catalog::{Catalog, CatalogEntry, RELATED_LIMIT};
use crate::state::AppState;
use crate::theme::{Theme, theme};

use super::results::status_color;

fn heading(text: &str, th: &Theme) -> Line<'static> {
    Line::from(Span::styled(
        text.to_string(),
        Style::default().fg(th.mauve).add_modifier(Modifier::BOLD),
    ))
}

fn field(label: &str, value: String, th: &Theme) -> Line<'static> {
    Line::from(vec![
        Span::styled(
            format!("{label:<10}"),
            Style::default().fg(th.overlay1).add_modifier(Modifier::BOLD),
        ),
        Span::styled(value, Style::default().fg(th.text)),
    ])
}

/// What: Build the detail page for an entry.
///
/// Inputs:
/// - `catalog`: Catalog used for category labels and related entries
/// - `entry`: Entry to describe
/// - `th`: Palette
///
/// Output:
/// - Styled lines: title and status, author, long description, features, tags,
///   category, date added, tech stack, links, and up to three related apps.
///
/// Details:
/// - Optional sections are omitted when the entry has no data for them.
/// - The same lines back the CLI `--show` output, rendered without styles.
#[must_use]
pub fn detail_lines(catalog: &Catalog, entry: &CatalogEntry, th: &Theme) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::from(vec![
            Span::styled(
                format!("[{}] ", entry.initial()),
                Style::default().fg(th.lavender).add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                entry.name.clone(),
                Style::default().fg(th.text).add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
            Span::styled(
                entry.status.label().to_string(),
                Style::default().fg(status_color(entry.status, th)),
            ),
        ]),
        Line::from(vec![
            Span::styled("by ", Style::default().fg(th.subtext0)),
            Span::styled(entry.author.clone(), Style::default().fg(th.sapphire)),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            entry.display_description().to_string(),
            Style::default().fg(th.text),
        )),
    ];

    if !entry.features().is_empty() {
        lines.push(Line::from(""));
        lines.push(heading("Features", th));
        for feat in entry.features() {
            lines.push(Line::from(vec![
                Span::styled("  ✓ ", Style::default().fg(th.green)),
                Span::styled(feat.clone(), Style::default().fg(th.text)),
            ]));
        }
    }

    lines.push(Line::from(""));
    lines.push(heading("Details", th));
    if !entry.tags.is_empty() {
        let tags = entry
            .tags
            .iter()
            .map(|t| format!("#{t}"))
            .collect::<Vec<_>>()
            .join(" ");
        lines.push(field("Tags", tags, th));
    }
    let category = catalog
        .category(&entry.category)
        .map_or_else(|| entry.category.clone(), crate::catalog::Category::label);
    lines.push(field("Category", category, th));
    if let Some(date) = entry.formatted_date_added() {
        lines.push(field("Added", date, th));
    }
    if !entry.tech_stack().is_empty() {
        lines.push(field("Stack", entry.tech_stack().join(" · "), th));
    }
    if let Some(url) = &entry.author_url {
        lines.push(field("Author", url.clone(), th));
    }
    if let Some(url) = &entry.url {
        lines.push(field("Website", url.clone(), th));
    }
    if let Some(url) = &entry.github {
        lines.push(field("GitHub", url.clone(), th));
    }

    let related = catalog.related(entry, RELATED_LIMIT);
    if !related.is_empty() {
        lines.push(Line::from(""));
        lines.push(heading("Related Apps", th));
        for r in related {
            lines.push(Line::from(vec![
                Span::styled("  • ", Style::default().fg(th.overlay1)),
                Span::styled(
                    r.name.clone(),
                    Style::default().fg(th.text).add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    format!(": {}", r.description),
                    Style::default().fg(th.subtext0),
                ),
            ]));
        }
    }
    lines
}

/// What: Plain-text rendering of [`detail_lines`] for terminal output.
#[must_use]
pub fn detail_text(catalog: &Catalog, entry: &CatalogEntry) -> String {
    detail_lines(catalog, entry, &Theme::default())
        .iter()
        .map(|l| {
            l.spans
                .iter()
                .map(|s| s.content.as_ref())
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Render the detail pane for the highlighted entry.
pub fn render_details(f: &mut Frame, app: &AppState, area: Rect) {
    let th = theme();
    let block = Block::default()
        .title(Span::styled("Details", Style::default().fg(th.overlay1)))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(th.surface1));
    let lines = app.selected_entry().map_or_else(
        || {
            vec![Line::from(Span::styled(
                "Select an app to see its details",
                Style::default().fg(th.subtext0),
            ))]
        },
        |e| detail_lines(&app.catalog, e, &th),
    );
    let para = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .scroll((app.details_scroll, 0))
        .block(block);
    f.render_widget(para, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// What: Detail text lists the entry's sections and related apps from the same category.
    fn detail_text_sections() {
        let catalog = Catalog::bundled().expect("bundled");
        let entry = catalog.find("telegram-scout").expect("entry");
        let text = detail_text(&catalog, entry);
        assert!(text.contains(&entry.name));
        assert!(text.contains("by botsmith"));
        assert!(text.contains(entry.status.label()));
        assert!(text.contains("Category  🤖 Bot"));
        assert!(text.contains("Related Apps"));
        assert!(text.contains("Discord Sage"));
        assert!(!text.contains("Truth Relay"));
    }
}
