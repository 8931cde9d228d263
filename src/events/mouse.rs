use crossterm::event::{MouseEvent, MouseEventKind};

use crate::logic::move_sel;
use crate::state::{AppState, Modal};

/// What: Scroll the results list with the mouse wheel.
///
/// Details:
/// - Ignored while a modal is open.
pub fn handle_mouse_event(me: &MouseEvent, app: &mut AppState) {
    if app.modal != Modal::None {
        return;
    }
    match me.kind {
        MouseEventKind::ScrollDown => move_sel(app, 1),
        MouseEventKind::ScrollUp => move_sel(app, -1),
        _ => {}
    }
}
