use crate::dataset::Dataset;
use crate::panels;
use crate::view::Panel;
use serde::Serialize;
use std::fmt;

/// The six tabs of the dashboard, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Section {
    Summary,
    Dataset,
    Frequency,
    Composition,
    Statistics,
    Implications,
}

impl Section {
    pub const ALL: [Self; 6] = [
        Self::Summary,
        Self::Dataset,
        Self::Frequency,
        Self::Composition,
        Self::Statistics,
        Self::Implications,
    ];

    pub const fn id(self) -> &'static str {
        match self {
            Self::Summary => "summary",
            Self::Dataset => "dataset",
            Self::Frequency => "frequency",
            Self::Composition => "composition",
            Self::Statistics => "statistics",
            Self::Implications => "implications",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Summary => "Executive Summary",
            Self::Dataset => "Dataset Overview",
            Self::Frequency => "Borough Frequency",
            Self::Composition => "Composition Analysis",
            Self::Statistics => "Statistical Context",
            Self::Implications => "Strategic Implications",
        }
    }

    pub const fn icon(self) -> &'static str {
        match self {
            Self::Summary => "↗",
            Self::Dataset => "◫",
            Self::Frequency => "▮",
            Self::Composition => "▦",
            Self::Statistics => "!",
            Self::Implications => "✦",
        }
    }

    /// Exact id match only; the registry is closed.
    pub fn parse(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|section| section.id() == id)
    }

    pub const fn index(self) -> usize {
        match self {
            Self::Summary => 0,
            Self::Dataset => 1,
            Self::Frequency => 2,
            Self::Composition => 3,
            Self::Statistics => 4,
            Self::Implications => 5,
        }
    }

    pub const fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Self::Summary),
            1 => Some(Self::Dataset),
            2 => Some(Self::Frequency),
            3 => Some(Self::Composition),
            4 => Some(Self::Statistics),
            5 => Some(Self::Implications),
            _ => None,
        }
    }

    pub const fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub const fn prev(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    pub fn render(self, data: &Dataset) -> Panel {
        match self {
            Self::Summary => panels::summary::render(data),
            Self::Dataset => panels::overview::render(data),
            Self::Frequency => panels::frequency::render(data),
            Self::Composition => panels::composition::render(data),
            Self::Statistics => panels::statistics::render(data),
            Self::Implications => panels::implications::render(data),
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_parse_back() {
        for section in Section::ALL {
            assert_eq!(Section::parse(section.id()), Some(section));
            assert_eq!(Section::from_index(section.index()), Some(section));
        }
        assert_eq!(Section::parse("Summary"), None);
        assert_eq!(Section::parse("settings"), None);
        assert_eq!(Section::from_index(6), None);
    }

    #[test]
    fn navigation_wraps() {
        assert_eq!(Section::Implications.next(), Section::Summary);
        assert_eq!(Section::Summary.prev(), Section::Implications);
        assert_eq!(Section::Dataset.next(), Section::Frequency);
    }

    #[test]
    fn each_section_renders_its_own_panel() {
        let data = Dataset::nyc();
        for section in Section::ALL {
            assert_eq!(section.render(&data).section, section);
        }
    }
}
