use crate::dataset::Dataset;
use crate::section::Section;
use crate::view::Panel;
use tracing::debug;

/// Owns the one piece of mutable dashboard state: which tab is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dashboard {
    active: Section,
}

impl Dashboard {
    pub const fn new() -> Self {
        Self::starting_at(Section::Summary)
    }

    pub const fn starting_at(section: Section) -> Self {
        Self { active: section }
    }

    pub const fn active(&self) -> Section {
        self.active
    }

    /// Activates the section with registry id `id`. Unknown ids leave the
    /// active section untouched; the return value says whether `id` was known.
    pub fn select_section(&mut self, id: &str) -> bool {
        match Section::parse(id) {
            Some(section) => {
                self.select(section);
                true
            }
            None => {
                debug!(id, "ignoring unknown section id");
                false
            }
        }
    }

    pub fn select(&mut self, section: Section) {
        if self.active != section {
            debug!(from = %self.active, to = %section, "section selected");
        }
        self.active = section;
    }

    pub fn render(&self, data: &Dataset) -> Panel {
        self.active.render(data)
    }
}

impl Default for Dashboard {
    fn default() -> Self {
        Self::new()
    }
}
