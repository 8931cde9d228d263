use crate::catalog::filter_refs;
use crate::state::AppState;

/// What: Recompute `app.results` from the catalog, query, and active category.
///
/// Inputs:
/// - `app`: Mutable application state containing the catalog, input, and selection
///
/// Output:
/// - Updates `app.results` and keeps the highlighted entry when it still matches.
///
/// Details:
/// - Selection is restored by id when present; otherwise clamped or cleared if the list is empty.
/// - Resets the details scroll whenever the highlighted entry changes.
pub fn apply_filters_preserve_selection(app: &mut AppState) {
    let prev_id = app.results.get(app.selected).map(|e| e.id.clone());

    let category = app.active_category().to_string();
    app.results = filter_refs(&app.catalog.apps, &app.input, &category)
        .into_iter()
        .cloned()
        .collect();
    tracing::trace!(
        query = %app.input,
        category = %category,
        matches = app.results.len(),
        "filters applied"
    );

    if app.results.is_empty() {
        app.selected = 0;
        app.list_state.select(None);
        app.details_scroll = 0;
        return;
    }
    if let Some(id) = prev_id
        && let Some(pos) = app.results.iter().position(|e| e.id == id)
    {
        app.selected = pos;
    } else {
        app.selected = app.selected.min(app.results.len() - 1);
        app.details_scroll = 0;
    }
    app.list_state.select(Some(app.selected));
}

/// What: Cycle the active category tab by `delta`, wrapping at both ends, and refilter.
pub fn cycle_category(app: &mut AppState, delta: isize) {
    let len = app.category_ids.len();
    if len == 0 {
        return;
    }
    let len_i = isize::try_from(len).unwrap_or(isize::MAX);
    let cur = isize::try_from(app.category_idx).unwrap_or(0);
    let next = (cur + delta).rem_euclid(len_i);
    app.category_idx = usize::try_from(next).unwrap_or(0);
    apply_filters_preserve_selection(app);
}

/// What: Reset the query and category to their defaults and refilter.
///
/// Output:
/// - `true` when anything changed.
pub fn clear_filters(app: &mut AppState) -> bool {
    let changed = !app.input.is_empty() || app.category_idx != 0;
    app.input.clear();
    app.category_idx = 0;
    apply_filters_preserve_selection(app);
    changed
}
