use crate::dataset::Dataset;
use crate::section::Section;
use crate::view::{BulletList, Element, ListItem, Panel, RichText, StatCard, Tone};

const SIGNIFICANCE_THRESHOLD: f64 = 0.05;

const LIMITATIONS: [(&str, &str); 4] = [
    (
        "Small sample size:",
        "records provide directional insight but lack statistical power for strong inference",
    ),
    (
        "No population adjustment:",
        "Raw counts do not account for borough population differences",
    ),
    (
        "Sparse categories:",
        "Some borough-offense combinations have very low counts, violating chi-square assumptions",
    ),
    (
        "Missing confounders:",
        "Cannot control for socioeconomic, demographic, or temporal factors",
    ),
];

const RECOMMENDED: [(&str, &str); 3] = [
    (
        "Exploratory insight",
        "Identify spatial patterns worth investigating with larger datasets",
    ),
    (
        "Hypothesis generation",
        "Guide questions for future research linking offense exposure to health outcomes",
    ),
    (
        "Proof of concept",
        "Demonstrate feasibility of spatial safety analysis for health applications",
    ),
];

const NOT_RECOMMENDED: [(&str, &str); 3] = [
    (
        "Definitive conclusions",
        "Sample size insufficient for strong causal or population-level claims",
    ),
    (
        "Direct policy recommendations",
        "Findings require validation with comprehensive data before informing decisions",
    ),
    (
        "Rate comparisons",
        "Cannot normalize by population or calculate true per-capita exposure rates",
    ),
];

fn usage_list(title: &str, marker: char, tone: Tone, entries: &[(&str, &str)]) -> Element {
    Element::BulletList(BulletList {
        title: Some(title.to_string()),
        marker,
        tone,
        items: entries
            .iter()
            .map(|(heading, body)| ListItem {
                heading: Some((*heading).to_string()),
                body: RichText::plain(*body),
            })
            .collect(),
    })
}

pub fn render(data: &Dataset) -> Panel {
    let stats = data.statistics;
    let total = data.total_records();

    let cards = vec![
        StatCard {
            value: format!("{:.3}", stats.chi_square),
            label: "Chi-square (χ²)".to_string(),
            tone: Tone::Info,
        },
        StatCard {
            value: stats.degrees_of_freedom.to_string(),
            label: "Degrees of Freedom".to_string(),
            tone: Tone::Info,
        },
        StatCard {
            value: format!("{:.3}", stats.p_value),
            label: "P-value".to_string(),
            tone: Tone::Info,
        },
    ];

    let verdict = if stats.p_value < SIGNIFICANCE_THRESHOLD {
        "A statistically significant association was detected"
    } else {
        "No statistically significant association was detected"
    };
    let position = if stats.p_value < SIGNIFICANCE_THRESHOLD {
        "below"
    } else {
        "above"
    };
    let meaning = RichText::new()
        .text(format!(
            "{verdict} between offense type and borough (p = {:.3}, {position} the \
             {SIGNIFICANCE_THRESHOLD:.2} threshold). However, this is ",
            stats.p_value
        ))
        .strong("likely due to small sample size")
        .text(format!(
            " (n={total}) and sparse category counts rather than true absence of spatial \
             patterns. The test is underpowered."
        ));

    let limitations = Element::BulletList(BulletList {
        title: Some("Analytical Limitations".to_string()),
        marker: '•',
        tone: Tone::Warning,
        items: LIMITATIONS
            .iter()
            .enumerate()
            .map(|(index, (heading, body))| ListItem {
                heading: None,
                body: RichText::new().strong(*heading).text(if index == 0 {
                    format!(" {total} {body}")
                } else {
                    format!(" {body}")
                }),
            })
            .collect(),
    });

    Panel::new(Section::Statistics, "Statistical Context")
        .push(Element::heading("Chi-Square Test: Offense Type × Borough"))
        .push(Element::StatCards { cards })
        .push(Element::callout("What This Means", meaning, Tone::Info))
        .push(limitations)
        .push(Element::heading("Appropriate Use of These Findings"))
        .push(Element::Columns {
            children: vec![
                usage_list("Recommended Uses", '✓', Tone::Success, &RECOMMENDED),
                usage_list("Not Recommended", '✗', Tone::Danger, &NOT_RECOMMENDED),
            ],
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shows_stored_constants() {
        let text = render(&Dataset::nyc()).to_string();
        assert!(text.contains("5.844  Chi-square (χ²)"));
        assert!(text.contains("8  Degrees of Freedom"));
        assert!(text.contains("0.665  P-value"));
        assert!(text.contains("(p = 0.665, above the 0.05 threshold)"));
        assert!(text.contains("(n=94)"));
        assert!(text.contains("Small sample size: 94 records provide directional insight"));
    }

    #[test]
    fn lists_three_uses_each_way() {
        let panel = render(&Dataset::nyc());
        let Some(Element::Columns { children }) = panel.elements.last() else {
            panic!("statistics panel should end with the usage columns");
        };
        for child in children {
            let Element::BulletList(list) = child else {
                panic!("usage column is not a list");
            };
            assert_eq!(list.items.len(), 3);
        }
    }
}
