pub mod screens;

use crate::app::state::App;
use crossterm::event::KeyEvent;

pub fn handle_input(app: &mut App, key: KeyEvent) {
    screens::dispatch_input(app, key);
}
