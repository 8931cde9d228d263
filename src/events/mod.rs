//! Event handling layer for the CortexHub TUI.
//!
//! [`handle_event`] resolves modals and global shortcuts here, then delegates
//! to the handler for the focused pane.

use crossterm::event::{Event as CEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::logic::{clear_filters, cycle_category, move_sel};
use crate::state::{AppState, Focus, Modal};

mod mouse;
mod results;
mod search;
mod utils;


/// Dispatch a single terminal event and mutate the [`AppState`].
///
/// Returns `true` to signal the application should exit; otherwise `false`.
pub fn handle_event(ev: &CEvent, app: &mut AppState) -> bool {
    match ev {
        CEvent::Key(ke) => {
            if ke.kind != KeyEventKind::Press {
                return false;
            }
            handle_key(ke, app)
        }
        CEvent::Mouse(me) => {
            mouse::handle_mouse_event(me, app);
            false
        }
        _ => false,
    }
}

fn handle_key(ke: &KeyEvent, app: &mut AppState) -> bool {
    let ctrl = ke.modifiers.contains(KeyModifiers::CONTROL);
    if ctrl && matches!(ke.code, KeyCode::Char('c')) {
        return true;
    }

    match &app.modal {
        Modal::Alert { .. } => {
            app.modal = Modal::None;
            return false;
        }
        Modal::Help => {
            if matches!(
                ke.code,
                KeyCode::Esc | KeyCode::Enter | KeyCode::Char('?' | 'q') | KeyCode::F(1)
            ) {
                app.modal = Modal::None;
            }
            return false;
        }
        Modal::None => {}
    }

    // Global shortcuts (regardless of focus)
    match ke.code {
        KeyCode::F(1) => {
            app.modal = Modal::Help;
            return false;
        }
        KeyCode::Char('l') if ctrl => {
            clear_filters(app);
            return false;
        }
        KeyCode::Esc => {
            if !clear_filters(app) && app.focus == Focus::Search {
                app.focus = Focus::Results;
            }
            return false;
        }
        KeyCode::Tab | KeyCode::Right => {
            cycle_category(app, 1);
            return false;
        }
        KeyCode::BackTab | KeyCode::Left => {
            cycle_category(app, -1);
            return false;
        }
        KeyCode::Up => {
            move_sel(app, -1);
            return false;
        }
        KeyCode::Down => {
            move_sel(app, 1);
            return false;
        }
        KeyCode::PageUp => {
            move_sel(app, -10);
            return false;
        }
        KeyCode::PageDown => {
            move_sel(app, 10);
            return false;
        }
        KeyCode::Enter => {
            utils::open_selected_link(app, utils::LinkKind::Website);
            return false;
        }
        _ => {}
    }

    match app.focus {
        Focus::Search => {
            search::handle_search_key(ke, app);
            false
        }
        Focus::Results => results::handle_results_key(ke, app),
    }
}
