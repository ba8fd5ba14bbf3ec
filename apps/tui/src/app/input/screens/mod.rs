use crate::app::state::App;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tracing::debug;

mod dashboard;
mod help;
mod jump;

pub fn dispatch_input(app: &mut App, key: KeyEvent) {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        debug!("ctrl-c");
        app.quit();
        return;
    }

    if app.jump_query.is_some() {
        jump::handle_jump_input(app, key.code);
        return;
    }

    if help::handle_help_toggle(app, key.code) {
        return;
    }

    dashboard::handle_dashboard_input(app, key.code);
}

#[cfg(test)]
mod tests {
    use super::*;
    use offense_dashboard_core::Section;
    use pretty_assertions::assert_eq;

    fn press(app: &mut App, code: KeyCode) {
        dispatch_input(app, KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn type_text(app: &mut App, text: &str) {
        for ch in text.chars() {
            press(app, KeyCode::Char(ch));
        }
    }

    #[test]
    fn arrows_and_vim_keys_wrap_tabs() {
        let mut app = App::new(Section::Summary);
        press(&mut app, KeyCode::Left);
        assert_eq!(app.active(), Section::Implications);
        press(&mut app, KeyCode::Char('l'));
        assert_eq!(app.active(), Section::Summary);
        press(&mut app, KeyCode::Right);
        press(&mut app, KeyCode::Char('h'));
        assert_eq!(app.active(), Section::Summary);
    }

    #[test]
    fn arrow_tab_change_resets_scroll_and_focus() {
        let mut app = App::new(Section::Frequency);
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Right);
        assert_eq!(app.active(), Section::Composition);
        assert_eq!(app.scroll, 0);
        assert_eq!(app.focus, None);
    }

    #[test]
    fn digits_select_by_position() {
        let mut app = App::new(Section::Summary);
        press(&mut app, KeyCode::Char('4'));
        assert_eq!(app.active(), Section::Composition);
        press(&mut app, KeyCode::Char('6'));
        assert_eq!(app.active(), Section::Implications);
        press(&mut app, KeyCode::Char('7'));
        press(&mut app, KeyCode::Char('0'));
        assert_eq!(app.active(), Section::Implications);
    }

    #[test]
    fn scroll_keys_move_by_element() {
        let mut app = App::new(Section::Statistics);
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Char('j'));
        assert_eq!(app.scroll, 2);
        press(&mut app, KeyCode::Char('k'));
        assert_eq!(app.scroll, 1);
        press(&mut app, KeyCode::PageDown);
        assert_eq!(app.scroll, 4);
        press(&mut app, KeyCode::PageUp);
        assert_eq!(app.scroll, 1);
        press(&mut app, KeyCode::Home);
        assert_eq!(app.scroll, 0);
    }

    #[test]
    fn tab_key_focuses_chart_data() {
        let mut app = App::new(Section::Frequency);
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.focused_tooltip().as_deref(), Some("Brooklyn: Count: 24"));
        press(&mut app, KeyCode::BackTab);
        assert_eq!(app.focused_tooltip().as_deref(), Some("Dangerous Drugs: Count: 27"));
    }

    #[test]
    fn quick_jump_selects_fuzzy_match() {
        let mut app = App::new(Section::Summary);
        press(&mut app, KeyCode::Char('/'));
        type_text(&mut app, "stax");
        press(&mut app, KeyCode::Backspace);
        assert_eq!(app.jump_query.as_deref(), Some("sta"));
        press(&mut app, KeyCode::Char('t'));
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.active(), Section::Statistics);
        assert!(app.running);
    }

    #[test]
    fn quick_jump_keys_do_not_leak() {
        let mut app = App::new(Section::Summary);
        press(&mut app, KeyCode::Char('/'));
        type_text(&mut app, "q3");
        press(&mut app, KeyCode::Esc);
        assert!(app.running);
        assert_eq!(app.active(), Section::Summary);
        assert_eq!(app.jump_query, None);
    }

    #[test]
    fn help_swallows_keys_until_closed() {
        let mut app = App::new(Section::Summary);
        press(&mut app, KeyCode::Char('?'));
        assert!(app.show_help);
        press(&mut app, KeyCode::Right);
        assert_eq!(app.active(), Section::Summary);
        press(&mut app, KeyCode::Esc);
        assert!(!app.show_help);
        assert!(app.running);
        press(&mut app, KeyCode::F(1));
        assert!(app.show_help);
    }

    #[test]
    fn quit_keys() {
        for key in [
            KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE),
            KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE),
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
        ] {
            let mut app = App::new(Section::Summary);
            dispatch_input(&mut app, key);
            assert!(!app.running, "{key:?} should quit");
        }
    }
}
