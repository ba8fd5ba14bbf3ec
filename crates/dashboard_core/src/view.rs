//! Renderer-agnostic description of what a panel shows.
//!
//! Panels build these values from a [`Dataset`](crate::Dataset); the terminal and
//! browser front ends only translate them into widgets. `Display` gives a plain
//! text rendering used for headless output.

use crate::dataset::{Borough, Rgb};
use crate::heatmap::{Intensity, TextContrast};
use crate::section::Section;
use crate::tooltip::ChartDatum;
use serde::Serialize;
use std::fmt;

/// Presentation hint for blocks that are colored by meaning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Tone {
    Info,
    Success,
    Warning,
    Accent,
    Danger,
    Neutral,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Run {
    pub text: String,
    pub strong: bool,
}

/// A paragraph of runs, some of them emphasised.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RichText {
    pub runs: Vec<Run>,
}

impl RichText {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn plain(text: impl Into<String>) -> Self {
        Self::new().text(text)
    }

    #[must_use]
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.runs.push(Run {
            text: text.into(),
            strong: false,
        });
        self
    }

    #[must_use]
    pub fn strong(mut self, text: impl Into<String>) -> Self {
        self.runs.push(Run {
            text: text.into(),
            strong: true,
        });
        self
    }

    pub fn to_plain(&self) -> String {
        self.runs.iter().map(|run| run.text.as_str()).collect()
    }
}

impl From<&str> for RichText {
    fn from(value: &str) -> Self {
        Self::plain(value)
    }
}

impl From<String> for RichText {
    fn from(value: String) -> Self {
        Self::plain(value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Callout {
    pub title: String,
    pub body: RichText,
    pub tone: Tone,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatCard {
    pub value: String,
    pub label: String,
    pub tone: Tone,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListItem {
    pub heading: Option<String>,
    pub body: RichText,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BulletList {
    pub title: Option<String>,
    pub marker: char,
    pub tone: Tone,
    pub items: Vec<ListItem>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BarChart {
    pub title: String,
    pub subtitle: Option<String>,
    pub value_axis: Option<String>,
    pub color: Rgb,
    /// Declared table order; never re-sorted.
    pub bars: Vec<ChartDatum>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShareSector {
    pub borough: Borough,
    pub value: u32,
    pub percent: f64,
    pub color: Rgb,
    /// `"{borough}: {percent:.1}%"`
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShareChart {
    pub title: String,
    pub subtitle: Option<String>,
    pub sectors: Vec<ShareSector>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeatmapCell {
    pub count: u32,
    pub intensity: Intensity,
    pub fill: Rgb,
    pub text: TextContrast,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeatmapRow {
    pub label: String,
    pub cells: Vec<HeatmapCell>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LegendEntry {
    pub label: String,
    pub color: Rgb,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Heatmap {
    pub columns: Vec<String>,
    /// Short forms of `columns`, same order.
    pub column_codes: Vec<String>,
    pub rows: Vec<HeatmapRow>,
    pub legend: Vec<LegendEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoadmapStage {
    pub name: String,
    pub capability: String,
    pub detail: Option<String>,
    pub needs: Option<String>,
    pub unlocks: Option<String>,
    pub tone: Tone,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Roadmap {
    pub title: String,
    pub stages: Vec<RoadmapStage>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Element {
    Heading { text: String },
    Paragraph { text: RichText, tone: Tone },
    Callout(Callout),
    StatCards { cards: Vec<StatCard> },
    BulletList(BulletList),
    Columns { children: Vec<Element> },
    BarChart(BarChart),
    ShareChart(ShareChart),
    Heatmap(Heatmap),
    Roadmap(Roadmap),
}

impl Element {
    pub fn heading(text: impl Into<String>) -> Self {
        Self::Heading { text: text.into() }
    }

    pub fn paragraph(text: impl Into<RichText>, tone: Tone) -> Self {
        Self::Paragraph {
            text: text.into(),
            tone,
        }
    }

    pub fn callout(title: impl Into<String>, body: impl Into<RichText>, tone: Tone) -> Self {
        Self::Callout(Callout {
            title: title.into(),
            body: body.into(),
            tone,
        })
    }

    /// Focusable chart data inside this element, in render order.
    pub fn data_points(&self) -> Vec<&ChartDatum> {
        let mut points = Vec::new();
        self.collect_data_points(&mut points);
        points
    }

    fn collect_data_points<'a>(&'a self, out: &mut Vec<&'a ChartDatum>) {
        match self {
            Self::BarChart(chart) => out.extend(chart.bars.iter()),
            Self::Columns { children } => {
                for child in children {
                    child.collect_data_points(out);
                }
            }
            _ => {}
        }
    }
}

/// Everything one tab shows.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Panel {
    pub section: Section,
    pub title: String,
    pub subtitle: Option<String>,
    pub elements: Vec<Element>,
}

impl Panel {
    pub fn new(section: Section, title: impl Into<String>) -> Self {
        Self {
            section,
            title: title.into(),
            subtitle: None,
            elements: Vec::new(),
        }
    }

    #[must_use]
    pub fn subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = Some(subtitle.into());
        self
    }

    #[must_use]
    pub fn push(mut self, element: Element) -> Self {
        self.elements.push(element);
        self
    }

    /// Focusable chart data in render order.
    pub fn data_points(&self) -> Vec<&ChartDatum> {
        let mut points = Vec::new();
        for element in &self.elements {
            element.collect_data_points(&mut points);
        }
        points
    }
}

impl fmt::Display for Panel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.title)?;
        writeln!(f, "{}", "=".repeat(self.title.chars().count()))?;
        if let Some(subtitle) = &self.subtitle {
            writeln!(f, "{subtitle}")?;
        }
        for element in &self.elements {
            writeln!(f)?;
            write_element(f, element)?;
        }
        Ok(())
    }
}

fn write_element(f: &mut fmt::Formatter<'_>, element: &Element) -> fmt::Result {
    match element {
        Element::Heading { text } => writeln!(f, "## {text}"),
        Element::Paragraph { text, .. } => writeln!(f, "{}", text.to_plain()),
        Element::Callout(callout) => {
            writeln!(f, "[{}]", callout.title)?;
            writeln!(f, "{}", callout.body.to_plain())
        }
        Element::StatCards { cards } => {
            for card in cards {
                writeln!(f, "{:>10}  {}", card.value, card.label)?;
            }
            Ok(())
        }
        Element::BulletList(list) => {
            if let Some(title) = &list.title {
                writeln!(f, "{title}")?;
            }
            for item in &list.items {
                match &item.heading {
                    Some(heading) => {
                        writeln!(f, "  {} {heading}: {}", list.marker, item.body.to_plain())?;
                    }
                    None => writeln!(f, "  {} {}", list.marker, item.body.to_plain())?,
                }
            }
            Ok(())
        }
        Element::Columns { children } => {
            for (index, child) in children.iter().enumerate() {
                if index > 0 {
                    writeln!(f)?;
                }
                write_element(f, child)?;
            }
            Ok(())
        }
        Element::BarChart(chart) => {
            writeln!(f, "{}", chart.title)?;
            if let Some(subtitle) = &chart.subtitle {
                writeln!(f, "{subtitle}")?;
            }
            let width = chart
                .bars
                .iter()
                .map(|bar| bar.label().chars().count())
                .max()
                .unwrap_or(0);
            for bar in &chart.bars {
                let bar_len = usize::try_from(bar.value).unwrap_or(usize::MAX);
                writeln!(
                    f,
                    "  {:<width$}  {:>3} {}",
                    bar.label(),
                    bar.value,
                    "#".repeat(bar_len)
                )?;
            }
            Ok(())
        }
        Element::ShareChart(chart) => {
            writeln!(f, "{}", chart.title)?;
            if let Some(subtitle) = &chart.subtitle {
                writeln!(f, "{subtitle}")?;
            }
            for sector in &chart.sectors {
                writeln!(f, "  {}", sector.label)?;
            }
            Ok(())
        }
        Element::Heatmap(heatmap) => {
            let label_width = heatmap
                .rows
                .iter()
                .map(|row| row.label.chars().count())
                .max()
                .unwrap_or(0);
            write!(f, "{:<label_width$}", "")?;
            for column in &heatmap.columns {
                write!(f, " {column:>12}")?;
            }
            writeln!(f)?;
            for row in &heatmap.rows {
                write!(f, "{:<label_width$}", row.label)?;
                for cell in &row.cells {
                    write!(f, " {:>12}", cell.count)?;
                }
                writeln!(f)?;
            }
            let legend = heatmap
                .legend
                .iter()
                .map(|entry| format!("{} {}", entry.color, entry.label))
                .collect::<Vec<_>>()
                .join("  ");
            writeln!(f, "Scale: {legend}")
        }
        Element::Roadmap(roadmap) => {
            writeln!(f, "{}", roadmap.title)?;
            for stage in &roadmap.stages {
                writeln!(f, "  - {}", stage.name)?;
                writeln!(f, "    Capability: {}", stage.capability)?;
                if let Some(detail) = &stage.detail {
                    writeln!(f, "    {detail}")?;
                }
                if let Some(needs) = &stage.needs {
                    writeln!(f, "    Needs: {needs}")?;
                }
                if let Some(unlocks) = &stage.unlocks {
                    writeln!(f, "    Unlocks: {unlocks}")?;
                }
            }
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rich_text_flattens_runs() {
        let text = RichText::new().text("a ").strong("bold").text(" end");
        assert_eq!(text.to_plain(), "a bold end");
        assert!(text.runs[1].strong);
    }

    #[test]
    fn data_points_descend_into_columns() {
        let chart = BarChart {
            title: "t".to_string(),
            subtitle: None,
            value_axis: None,
            color: Rgb(0, 0, 0),
            bars: vec![ChartDatum::borough(Borough::Bronx, 16)],
        };
        let panel = Panel::new(Section::Frequency, "p").push(Element::Columns {
            children: vec![Element::heading("x"), Element::BarChart(chart)],
        });
        assert_eq!(panel.data_points().len(), 1);
    }

    #[test]
    fn panel_serializes_with_element_kinds() -> Result<(), serde_json::Error> {
        let panel = Panel::new(Section::Summary, "Title").push(Element::heading("Hi"));
        let json = serde_json::to_value(&panel)?;
        assert_eq!(json["section"], "summary");
        assert_eq!(json["elements"][0]["kind"], "heading");
        Ok(())
    }
}
