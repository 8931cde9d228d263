use crate::state::AppState;
use crate::util::open_url;

/// Which link of an entry to open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkKind {
    /// The live app (`url`).
    Website,
    /// The source repository (`github`).
    Github,
}

/// What: Open a link of the highlighted entry in the browser.
///
/// Details:
/// - Shows a toast naming what was opened, or that the entry has no such link.
pub fn open_selected_link(app: &mut AppState, kind: LinkKind) {
    let Some(entry) = app.selected_entry() else {
        return;
    };
    let (link, label) = match kind {
        LinkKind::Website => (entry.url.clone(), "website"),
        LinkKind::Github => (entry.github.clone(), "repository"),
    };
    let name = entry.name.clone();
    match link.filter(|l| !l.trim().is_empty()) {
        Some(url) => {
            open_url(&url);
            app.show_toast(format!("Opened {label} for {name}"));
        }
        None => app.show_toast(format!("{name} has no {label} link")),
    }
}
