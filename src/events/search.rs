use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::logic::apply_filters_preserve_selection;
use crate::state::AppState;

/// What: Handle keys while the search input has focus.
///
/// Inputs:
/// - `ke`: Key event from terminal
/// - `app`: Mutable application state
///
/// Details:
/// - Printable characters append to the query; `Backspace` removes the last character.
/// - Every edit re-runs the filter immediately.
/// - `Ctrl+U` clears the query but keeps the category.
pub fn handle_search_key(ke: &KeyEvent, app: &mut AppState) {
    let ctrl = ke.modifiers.contains(KeyModifiers::CONTROL);
    let edited = match ke.code {
        KeyCode::Char('u') if ctrl => {
            let had = !app.input.is_empty();
            app.input.clear();
            had
        }
        KeyCode::Char(ch) if !ctrl => {
            app.input.push(ch);
            true
        }
        KeyCode::Backspace => app.input.pop().is_some(),
        _ => false,
    };
    if edited {
        apply_filters_preserve_selection(app);
    }
}
