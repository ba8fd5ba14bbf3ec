use crate::app::jump::resolve_section;
use offense_dashboard_core::{format_tooltip, Dashboard, Dataset, Panel, Section};
use tracing::debug;

/// Elements moved by PgUp/PgDn.
pub const PAGE_STEP: usize = 3;

#[derive(Debug)]
pub struct App {
    pub running: bool,
    pub dashboard: Dashboard,
    pub dataset: Dataset,
    panel: Panel,
    /// Leading panel elements scrolled out of view.
    pub scroll: usize,
    /// Index into the active panel's data points.
    pub focus: Option<usize>,
    pub show_help: bool,
    /// `Some` while the quick-jump prompt is open.
    pub jump_query: Option<String>,
    pub status_message: String,
}

impl App {
    pub fn new(start: Section) -> Self {
        let dataset = Dataset::nyc();
        let dashboard = Dashboard::starting_at(start);
        Self {
            running: true,
            panel: dashboard.render(&dataset),
            dashboard,
            dataset,
            scroll: 0,
            focus: None,
            show_help: false,
            jump_query: None,
            status_message: String::new(),
        }
    }

    pub const fn active(&self) -> Section {
        self.dashboard.active()
    }

    pub const fn panel(&self) -> &Panel {
        &self.panel
    }

    pub fn quit(&mut self) {
        self.running = false;
    }

    /// Activates `section` and resets everything scoped to the old tab.
    pub fn select(&mut self, section: Section) {
        self.dashboard.select(section);
        self.panel = self.dashboard.render(&self.dataset);
        self.scroll = 0;
        self.focus = None;
        self.status_message.clear();
    }

    /// Registry-id selection. Unknown ids leave the tab as it was.
    pub fn select_id(&mut self, id: &str) -> bool {
        let before = self.active();
        if !self.dashboard.select_section(id) {
            return false;
        }
        if self.active() != before || self.scroll != 0 || self.focus.is_some() {
            self.select(self.active());
        }
        true
    }

    pub fn next_section(&mut self) {
        self.select(self.active().next());
    }

    pub fn prev_section(&mut self) {
        self.select(self.active().prev());
    }

    pub fn select_index(&mut self, index: usize) {
        if let Some(section) = Section::from_index(index) {
            self.select(section);
        }
    }

    fn max_scroll(&self) -> usize {
        self.panel.elements.len().saturating_sub(1)
    }

    pub fn scroll_down(&mut self, step: usize) {
        self.scroll = (self.scroll + step).min(self.max_scroll());
    }

    pub fn scroll_up(&mut self, step: usize) {
        self.scroll = self.scroll.saturating_sub(step);
    }

    pub fn scroll_to_top(&mut self) {
        self.scroll = 0;
    }

    pub fn focus_next(&mut self) {
        let len = self.panel.data_points().len();
        self.focus = match (self.focus, len) {
            (_, 0) => None,
            (None, _) => Some(0),
            (Some(index), len) => Some((index + 1) % len),
        };
    }

    pub fn focus_prev(&mut self) {
        let len = self.panel.data_points().len();
        self.focus = match (self.focus, len) {
            (_, 0) => None,
            (None | Some(0), len) => Some(len - 1),
            (Some(index), _) => Some(index - 1),
        };
    }

    pub fn focused_tooltip(&self) -> Option<String> {
        let points = self.panel.data_points();
        self.focus
            .and_then(|index| points.get(index).copied())
            .map(format_tooltip)
    }

    pub fn open_jump(&mut self) {
        self.jump_query = Some(String::new());
    }

    pub fn close_jump(&mut self) {
        self.jump_query = None;
    }

    /// Resolve the prompt text to a section id and select it.
    pub fn submit_jump(&mut self) {
        let Some(query) = self.jump_query.take() else {
            return;
        };
        match resolve_section(&query) {
            Some(section) => {
                debug!(query, %section, "quick jump");
                self.select_id(section.id());
            }
            None => {
                self.status_message = format!("No section matches '{}'", query.trim());
            }
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(Section::Summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn tab_change_resets_scroll_and_focus() {
        let mut app = App::new(Section::Frequency);
        app.scroll_down(2);
        app.focus_next();
        assert_eq!(app.scroll, 2);
        assert!(app.focus.is_some());

        app.next_section();
        app.prev_section();
        assert_eq!(app.active(), Section::Frequency);
        assert_eq!(app.scroll, 0);
        assert_eq!(app.focus, None);
    }

    #[test]
    fn scroll_is_clamped_to_elements() {
        let mut app = App::new(Section::Frequency);
        let last = app.panel().elements.len() - 1;
        app.scroll_down(100);
        assert_eq!(app.scroll, last);
        app.scroll_up(100);
        assert_eq!(app.scroll, 0);
    }

    #[test]
    fn focus_cycles_through_bars() {
        let mut app = App::new(Section::Frequency);
        assert_eq!(app.focused_tooltip(), None);
        app.focus_next();
        assert_eq!(app.focused_tooltip().as_deref(), Some("Brooklyn: Count: 24"));
        app.focus_next();
        assert_eq!(app.focused_tooltip().as_deref(), Some("Manhattan: Count: 28"));
        app.focus_prev();
        app.focus_prev();
        let points = app.panel().data_points().len();
        assert_eq!(app.focus, Some(points - 1));
    }

    #[test]
    fn focus_is_inert_without_charts() {
        let mut app = App::new(Section::Summary);
        app.focus_next();
        assert_eq!(app.focus, None);
    }

    #[test]
    fn unknown_id_keeps_state() {
        let mut app = App::new(Section::Composition);
        app.scroll_down(1);
        assert!(!app.select_id("settings"));
        assert_eq!(app.active(), Section::Composition);
        assert_eq!(app.scroll, 1);
    }

    #[test]
    fn jump_with_no_match_reports_and_stays() {
        let mut app = App::new(Section::Dataset);
        app.open_jump();
        app.jump_query = Some("zzz".to_string());
        app.submit_jump();
        assert_eq!(app.active(), Section::Dataset);
        assert_eq!(app.jump_query, None);
        assert_eq!(app.status_message, "No section matches 'zzz'");
    }
}
