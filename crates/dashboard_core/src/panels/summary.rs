use super::exposure_ratio_label;
use crate::dataset::Dataset;
use crate::section::Section;
use crate::view::{BulletList, Element, ListItem, Panel, RichText, StatCard, Tone};

const WHY_IT_MATTERS: [(&str, &str); 4] = [
    (
        "Risk Stratification",
        "Location-based offense exposure can inform mental health risk models and resource allocation",
    ),
    (
        "Environmental Context",
        "Understanding spatial safety patterns enables better population health interventions",
    ),
    (
        "Targeting Precision",
        "High-exposure areas may benefit from tailored mental health support and preventive services",
    ),
    (
        "Data-Driven Strategy",
        "Spatial analysis provides foundation for linking safety exposure to health outcomes",
    ),
];

pub fn render(data: &Dataset) -> Panel {
    let ratio = exposure_ratio_label(data);

    let insight = match (data.busiest(), data.quietest()) {
        (Some(busiest), Some(quietest)) => RichText::new()
            .text(format!("{} experiences ", busiest.borough))
            .strong(format!("{ratio} more offense incidents"))
            .text(format!(
                " than {}, despite similar offense type distributions across all boroughs. \
                 This reveals that ",
                quietest.borough
            ))
            .strong("exposure intensity varies dramatically by location")
            .text(", not offense composition."),
        _ => RichText::plain("No borough records available."),
    };

    let columns = WHY_IT_MATTERS
        .chunks(2)
        .map(|pair| {
            Element::BulletList(BulletList {
                title: None,
                marker: '•',
                tone: Tone::Info,
                items: pair
                    .iter()
                    .map(|(heading, body)| ListItem {
                        heading: Some((*heading).to_string()),
                        body: RichText::plain(*body),
                    })
                    .collect(),
            })
        })
        .collect();

    let cards = vec![
        StatCard {
            value: data.total_records().to_string(),
            label: "Total Records".to_string(),
            tone: Tone::Info,
        },
        StatCard {
            value: data.borough_counts.len().to_string(),
            label: "Boroughs Analyzed".to_string(),
            tone: Tone::Info,
        },
        StatCard {
            value: ratio,
            label: "Exposure Range".to_string(),
            tone: Tone::Info,
        },
    ];

    Panel::new(Section::Summary, "Executive Summary")
        .push(Element::callout("Key Insight", insight, Tone::Info))
        .push(Element::heading("Why This Matters for Health Tech"))
        .push(Element::Columns { children: columns })
        .push(Element::StatCards { cards })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn headline_numbers_come_from_the_dataset() {
        let panel = render(&Dataset::nyc());
        let Some(Element::StatCards { cards }) = panel.elements.last() else {
            panic!("summary should end with stat cards");
        };
        let values: Vec<&str> = cards.iter().map(|card| card.value.as_str()).collect();
        assert_eq!(values, vec!["94", "5", "3.5x"]);
    }

    #[test]
    fn insight_names_the_extremes() {
        let text = render(&Dataset::nyc()).to_string();
        assert!(text.contains("Manhattan experiences 3.5x more offense incidents than Staten Island"));
        assert!(text.contains("Data-Driven Strategy"));
    }
}
