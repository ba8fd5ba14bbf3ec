use crate::dataset::{Dataset, OffenseCategory};
use crate::section::Section;
use crate::view::{
    BulletList, Element, ListItem, Panel, RichText, ShareChart, ShareSector, StatCard, Tone,
};

fn plain_list(title: &str, tone: Tone, items: &[&str]) -> Element {
    Element::BulletList(BulletList {
        title: Some(title.to_string()),
        marker: '•',
        tone,
        items: items
            .iter()
            .map(|item| ListItem {
                heading: None,
                body: RichText::plain(*item),
            })
            .collect(),
    })
}

fn share_chart(data: &Dataset) -> ShareChart {
    let sectors = data
        .borough_shares
        .iter()
        .map(|share| {
            let percent = data.share_percent(share.value);
            ShareSector {
                borough: share.borough,
                value: share.value,
                percent,
                color: share.color,
                label: format!("{}: {percent:.1}%", share.borough),
            }
        })
        .collect();

    ShareChart {
        title: "Share of Records by Borough".to_string(),
        subtitle: Some(
            "Distribution of offense records across boroughs (not population-normalized)"
                .to_string(),
        ),
        sectors,
    }
}

/// "Manhattan and Brooklyn account for over 55% of records in this subset"
fn top_two_caption(chart: &ShareChart) -> Option<String> {
    let mut ranked: Vec<&ShareSector> = chart.sectors.iter().collect();
    ranked.sort_by(|a, b| b.value.cmp(&a.value));
    let [first, second, ..] = ranked.as_slice() else {
        return None;
    };
    let combined = (first.percent + second.percent).floor();
    Some(format!(
        "{} and {} account for over {combined:.0}% of records in this subset",
        first.borough, second.borough
    ))
}

pub fn render(data: &Dataset) -> Panel {
    let cards = vec![
        StatCard {
            value: data.total_records().to_string(),
            label: "Total Records".to_string(),
            tone: Tone::Info,
        },
        StatCard {
            value: data.borough_counts.len().to_string(),
            label: "Boroughs Covered".to_string(),
            tone: Tone::Success,
        },
        StatCard {
            value: OffenseCategory::ALL.len().to_string(),
            label: "Offense Categories".to_string(),
            tone: Tone::Accent,
        },
        StatCard {
            value: "Multiple".to_string(),
            label: "Precinct Codes".to_string(),
            tone: Tone::Warning,
        },
    ];

    let coverage = plain_list(
        "Coverage",
        Tone::Success,
        &[
            "Subset after cleaning (duplicates removed, categories standardized)",
            "All 5 NYC boroughs represented",
            "Focus on negligent homicide and drug-related offenses",
        ],
    );
    let constraints = plain_list(
        "Key Constraints",
        Tone::Warning,
        &[
            "No time variable available",
            "No population denominators for rate calculation",
            "No geographic coordinates for precise mapping",
        ],
    );

    let focus = RichText::new().strong("Analysis Focus:").text(
        " This analysis examines spatial variation in offense exposure intensity across NYC \
         boroughs. Findings are exploratory and directional given the subset nature of the data.",
    );

    let chart = share_chart(data);
    let caption = top_two_caption(&chart);

    let mut panel = Panel::new(Section::Dataset, "Dataset Overview")
        .push(Element::StatCards { cards })
        .push(Element::Columns {
            children: vec![coverage, constraints],
        })
        .push(Element::paragraph(focus, Tone::Neutral))
        .push(Element::ShareChart(chart));
    if let Some(caption) = caption {
        panel = panel.push(Element::paragraph(caption, Tone::Neutral));
    }
    panel
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::Borough;
    use pretty_assertions::assert_eq;

    fn sectors(panel: &Panel) -> Vec<ShareSector> {
        panel
            .elements
            .iter()
            .find_map(|element| match element {
                Element::ShareChart(chart) => Some(chart.sectors.clone()),
                _ => None,
            })
            .unwrap_or_default()
    }

    #[test]
    fn one_sector_per_borough_with_rounded_percent() {
        let sectors = sectors(&render(&Dataset::nyc()));
        assert_eq!(sectors.len(), Borough::ALL.len());
        let labels: Vec<&str> = sectors.iter().map(|sector| sector.label.as_str()).collect();
        assert_eq!(
            labels,
            vec![
                "Brooklyn: 25.5%",
                "Manhattan: 29.8%",
                "Queens: 19.1%",
                "Bronx: 17.0%",
                "Staten Island: 8.5%",
            ]
        );
    }

    #[test]
    fn caption_is_derived_from_the_two_largest_shares() {
        let text = render(&Dataset::nyc()).to_string();
        assert!(text.contains("Manhattan and Brooklyn account for over 55% of records"));
        assert!(text.contains("3  Offense Categories"));
    }
}
