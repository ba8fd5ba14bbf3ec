use crate::app::state::{App, PAGE_STEP};
use crossterm::event::KeyCode;
use tracing::debug;

pub fn handle_dashboard_input(app: &mut App, key: KeyCode) {
    match key {
        KeyCode::Left | KeyCode::Char('h') => app.prev_section(),
        KeyCode::Right | KeyCode::Char('l') => app.next_section(),
        KeyCode::Char(digit @ '1'..='9') => {
            if let Some(position) = digit.to_digit(10) {
                app.select_index(position as usize - 1);
            }
        }
        KeyCode::Down | KeyCode::Char('j') => app.scroll_down(1),
        KeyCode::Up | KeyCode::Char('k') => app.scroll_up(1),
        KeyCode::PageDown => app.scroll_down(PAGE_STEP),
        KeyCode::PageUp => app.scroll_up(PAGE_STEP),
        KeyCode::Home => app.scroll_to_top(),
        KeyCode::Tab => app.focus_next(),
        KeyCode::BackTab => app.focus_prev(),
        KeyCode::Char('/') => app.open_jump(),
        KeyCode::Char('q') | KeyCode::Esc => {
            debug!("quit requested");
            app.quit();
        }
        _ => {}
    }
}
