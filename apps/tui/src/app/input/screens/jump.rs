use crate::app::state::App;
use crossterm::event::KeyCode;

pub fn handle_jump_input(app: &mut App, key: KeyCode) {
    match key {
        KeyCode::Enter => app.submit_jump(),
        KeyCode::Esc => app.close_jump(),
        KeyCode::Backspace => {
            if let Some(query) = app.jump_query.as_mut() {
                query.pop();
            }
        }
        KeyCode::Char(ch) => {
            if let Some(query) = app.jump_query.as_mut() {
                query.push(ch);
            }
        }
        _ => {}
    }
}
