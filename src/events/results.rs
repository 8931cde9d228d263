use crossterm::event::{KeyCode, KeyEvent};

use crate::logic::{jump_sel, move_sel};
use crate::state::{AppState, Focus, Modal};

use super::utils::{LinkKind, open_selected_link};

/// What: Handle single-key shortcuts while the results list has focus.
///
/// Inputs:
/// - `ke`: Key event from terminal
/// - `app`: Mutable application state
///
/// Output:
/// - `true` when the user asked to quit.
pub fn handle_results_key(ke: &KeyEvent, app: &mut AppState) -> bool {
    match ke.code {
        KeyCode::Char('q') => return true,
        KeyCode::Char('?') => app.modal = Modal::Help,
        KeyCode::Char('g') => open_selected_link(app, LinkKind::Github),
        KeyCode::Char('o') => open_selected_link(app, LinkKind::Website),
        KeyCode::Char('j') => move_sel(app, 1),
        KeyCode::Char('k') => move_sel(app, -1),
        KeyCode::Home => jump_sel(app, false),
        KeyCode::End | KeyCode::Char('G') => jump_sel(app, true),
        KeyCode::Char('J') => app.details_scroll = app.details_scroll.saturating_add(1),
        KeyCode::Char('K') => app.details_scroll = app.details_scroll.saturating_sub(1),
        KeyCode::Char('/' | 'i') => app.focus = Focus::Search,
        KeyCode::Backspace => {
            app.focus = Focus::Search;
            super::search::handle_search_key(ke, app);
        }
        _ => {}
    }
    false
}
