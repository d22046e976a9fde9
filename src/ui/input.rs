use crate::ui::app::App;
use crate::ui::browser::BrowserIntent;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'c') {
        app.request_quit();
        return;
    }

    let page = app.page_rows() as isize;
    let intent = match key.code {
        KeyCode::Char('q') | KeyCode::Esc => {
            app.request_quit();
            return;
        }
        KeyCode::Char('r') => {
            app.activate();
            return;
        }
        KeyCode::Char('s') => BrowserIntent::NextStatus,
        KeyCode::Char('S') => BrowserIntent::PreviousStatus,
        KeyCode::Char('g') => BrowserIntent::NextGender,
        KeyCode::Char('G') => BrowserIntent::PreviousGender,
        KeyCode::Char('a') => BrowserIntent::ResetFilters,
        KeyCode::Down | KeyCode::Char('j') => BrowserIntent::ScrollBy(1),
        KeyCode::Up | KeyCode::Char('k') => BrowserIntent::ScrollBy(-1),
        KeyCode::PageDown => BrowserIntent::ScrollBy(page),
        KeyCode::PageUp => BrowserIntent::ScrollBy(-page),
        KeyCode::Home => BrowserIntent::ScrollToTop,
        _ => return,
    };
    app.dispatch(intent);
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}
