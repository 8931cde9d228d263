use crate::state::AppState;

/// Move the selection by `delta`, clamped to the result range.
///
/// Resets the details scroll when the highlighted entry changes.
pub fn move_sel(app: &mut AppState, delta: isize) {
    if app.results.is_empty() {
        return;
    }
    let last = app.results.len() - 1;
    let next = app.selected.saturating_add_signed(delta).min(last);
    if next != app.selected {
        app.details_scroll = 0;
    }
    app.selected = next;
    app.list_state.select(Some(app.selected));
}

/// Jump to the first (`to_end == false`) or last result.
pub fn jump_sel(app: &mut AppState, to_end: bool) {
    if app.results.is_empty() {
        return;
    }
    let target = if to_end { app.results.len() - 1 } else { 0 };
    let delta = isize::try_from(target).unwrap_or(isize::MAX)
        - isize::try_from(app.selected).unwrap_or(0);
    move_sel(app, delta);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    #[test]
    /// What: Selection clamps at both ends of the list.
    fn move_sel_clamps() {
        let mut app = AppState::new(Catalog::bundled().expect("bundled"));
        let last = app.results.len() - 1;
        move_sel(&mut app, -3);
        assert_eq!(app.selected, 0);
        move_sel(&mut app, 2);
        assert_eq!(app.selected, 2);
        move_sel(&mut app, 100);
        assert_eq!(app.selected, last);
        jump_sel(&mut app, false);
        assert_eq!(app.list_state.selected(), Some(0));
        jump_sel(&mut app, true);
        assert_eq!(app.selected, last);
    }
}
