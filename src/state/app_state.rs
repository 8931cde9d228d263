//! Central `AppState` container.

use ratatui::widgets::ListState;
use std::time::{Duration, Instant};

use crate::catalog::{ALL_CATEGORIES, Catalog, CatalogEntry};
use crate::sources::NetworkStats;
use crate::state::types::{Focus, Modal, StatsUpdate};

/// How long a toast stays visible.
pub const TOAST_DURATION: Duration = Duration::from_secs(3);

/// Global application state shared by the event, worker, and UI layers.
///
/// `results` is always derived from `catalog.apps`, the current `input`, and the
/// active category; see [`crate::logic::apply_filters_preserve_selection`].
#[derive(Debug)]
pub struct AppState {
    /// Loaded catalog; never mutated after startup.
    pub catalog: Catalog,
    /// Current search input text.
    pub input: String,
    /// Category filter ids in tab order, `"all"` first.
    pub category_ids: Vec<String>,
    /// Index into `category_ids` of the active tab.
    pub category_idx: usize,
    /// Entries passing the current filters, in catalog order.
    pub results: Vec<CatalogEntry>,
    /// Index into `results` that is currently highlighted.
    pub selected: usize,
    /// List selection state for the results list.
    pub list_state: ListState,
    /// Which pane currently receives key input.
    pub focus: Focus,
    /// Active modal dialog, if any.
    pub modal: Modal,
    /// Latest network summary; `None` until the first poll resolves.
    pub stats: Option<NetworkStats>,
    /// Number of stats polls started but not yet resolved.
    pub stats_in_flight: usize,
    /// Vertical scroll offset of the details pane.
    pub details_scroll: u16,
    /// Transient toast message (bottom-right).
    pub toast_message: Option<String>,
    /// Deadline after which the toast is automatically hidden.
    pub toast_expires_at: Option<Instant>,
}

impl AppState {
    /// What: Build the initial state for a catalog.
    ///
    /// Inputs:
    /// - `catalog`: Loaded catalog
    ///
    /// Output:
    /// - State with an empty query, the `All` tab active, every app listed, and the first one selected.
    #[must_use]
    pub fn new(catalog: Catalog) -> Self {
        let mut category_ids = vec![ALL_CATEGORIES.to_string()];
        category_ids.extend(catalog.category_ids().into_iter().map(str::to_string));
        let results = catalog.apps.clone();
        let mut list_state = ListState::default();
        if !results.is_empty() {
            list_state.select(Some(0));
        }
        Self {
            catalog,
            input: String::new(),
            category_ids,
            category_idx: 0,
            results,
            selected: 0,
            list_state,
            focus: Focus::default(),
            modal: Modal::default(),
            stats: None,
            stats_in_flight: 0,
            details_scroll: 0,
            toast_message: None,
            toast_expires_at: None,
        }
    }

    /// Id of the active category tab (`"all"` when none is chosen).
    #[must_use]
    pub fn active_category(&self) -> &str {
        self.category_ids
            .get(self.category_idx)
            .map_or(ALL_CATEGORIES, String::as_str)
    }

    /// What: Tab label for a category id.
    ///
    /// Output:
    /// - `"All"` for the `"all"` sentinel, `"{icon} {name}"` for known categories, else the id.
    #[must_use]
    pub fn category_label(&self, id: &str) -> String {
        if id == ALL_CATEGORIES {
            return "All".to_string();
        }
        self.catalog
            .category(id)
            .map_or_else(|| id.to_string(), crate::catalog::Category::label)
    }

    /// The highlighted entry, if any.
    #[must_use]
    pub fn selected_entry(&self) -> Option<&CatalogEntry> {
        self.results.get(self.selected)
    }

    /// What: Apply a message from the stats poller.
    ///
    /// Details:
    /// - Polls may overlap, so loading lasts until every started poll has resolved.
    pub fn apply_stats_update(&mut self, update: StatsUpdate) {
        match update {
            StatsUpdate::Started => self.stats_in_flight += 1,
            StatsUpdate::Resolved(stats) => {
                self.stats_in_flight = self.stats_in_flight.saturating_sub(1);
                self.stats = Some(stats);
            }
        }
    }

    /// Whether the header should show the loading placeholder.
    #[must_use]
    pub const fn stats_loading(&self) -> bool {
        self.stats_in_flight > 0 || self.stats.is_none()
    }

    /// Summary for the header, or `None` while a poll is in flight.
    #[must_use]
    pub fn displayed_stats(&self) -> Option<&NetworkStats> {
        if self.stats_loading() {
            None
        } else {
            self.stats.as_ref()
        }
    }

    /// What: Show a transient toast for [`TOAST_DURATION`].
    pub fn show_toast(&mut self, message: impl Into<String>) {
        self.toast_message = Some(message.into());
        self.toast_expires_at = Some(Instant::now() + TOAST_DURATION);
    }

    /// What: Clear the toast once its deadline has passed.
    ///
    /// Output:
    /// - `true` when a toast was removed and the UI should redraw.
    pub fn expire_toast(&mut self, now: Instant) -> bool {
        if let Some(deadline) = self.toast_expires_at
            && now >= deadline
        {
            self.toast_message = None;
            self.toast_expires_at = None;
            return true;
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// What: Initial state lists every app under the `All` tab.
    fn new_state_lists_everything() {
        let catalog = Catalog::bundled().expect("bundled");
        let total = catalog.apps.len();
        let categories = catalog.categories.len();
        let app = AppState::new(catalog);
        assert_eq!(app.results.len(), total);
        assert_eq!(app.active_category(), "all");
        assert_eq!(app.category_ids.len(), categories + 1);
        assert_eq!(app.category_label("all"), "All");
        assert_eq!(app.category_label("oracle"), "🔮 Oracle");
        assert_eq!(app.category_label("nope"), "nope");
        assert_eq!(app.list_state.selected(), Some(0));
        assert!(app.stats.is_none());
    }

    #[test]
    /// What: Every poll start shows the loading placeholder again until it resolves.
    ///
    /// - Input: Start/resolve, then a second start, then overlapping starts
    /// - Output: Summary hidden while any poll is in flight; the last result is kept
    fn stats_loading_follows_each_poll() {
        use crate::sources::demo_stats;
        let mut app = AppState::new(Catalog::bundled().expect("bundled"));
        assert!(app.stats_loading());

        app.apply_stats_update(StatsUpdate::Started);
        app.apply_stats_update(StatsUpdate::Resolved(demo_stats()));
        assert!(!app.stats_loading());
        assert_eq!(app.displayed_stats(), Some(&demo_stats()));

        app.apply_stats_update(StatsUpdate::Started);
        assert!(app.stats_loading());
        assert_eq!(app.displayed_stats(), None);
        assert_eq!(app.stats, Some(demo_stats()));

        app.apply_stats_update(StatsUpdate::Started);
        app.apply_stats_update(StatsUpdate::Resolved(demo_stats()));
        assert!(app.stats_loading());
        app.apply_stats_update(StatsUpdate::Resolved(demo_stats()));
        assert!(!app.stats_loading());
    }

    #[test]
    /// What: Toasts expire only after their deadline.
    fn toast_expiry() {
        let mut app = AppState::new(Catalog::bundled().expect("bundled"));
        app.show_toast("hi");
        let now = Instant::now();
        assert!(!app.expire_toast(now));
        assert!(app.expire_toast(now + TOAST_DURATION + Duration::from_millis(1)));
        assert!(app.toast_message.is_none());
    }
}
