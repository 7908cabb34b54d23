//! Keyboard input handling.
//!
//! Maps terminal key events to [`App`] actions.  Every binding is one match
//! arm in [`handle_key_event`] calling one `App` method; keep the status-bar
//! help in `ui::draw_status_bar` and the README table in step.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};

use crate::app::App;
use crate::feed::SortMode;

/// Apply one key event to the app.
///
/// Release and repeat events are ignored.
pub fn handle_key_event(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    match key.code {
        KeyCode::Char('q') => app.quit = true,
        KeyCode::Esc => app.back(),
        KeyCode::Enter => app.toggle_details(),
        KeyCode::Down | KeyCode::Char('j') => app.select_next(),
        KeyCode::Up | KeyCode::Char('k') => app.select_previous(),
        KeyCode::Home | KeyCode::Char('g') => app.select_first(),
        KeyCode::End | KeyCode::Char('G') => app.select_last(),
        KeyCode::Char('s') => app.cycle_sort(),
        KeyCode::Char(c @ '1'..='4') => {
            let index = c as usize - '1' as usize;
            app.set_sort(SortMode::ALL[index]);
        }
        KeyCode::Char('r') => app.refresh(),
        KeyCode::Char('t') => app.toggle_theme(),
        _ => {}
    }
}
