use super::exposure_ratio_label;
use crate::dataset::Dataset;
use crate::section::Section;
use crate::view::{Element, Panel, RichText, Roadmap, RoadmapStage, Tone};

const NARRATIVES: [(&str, &str, Tone); 3] = [
    (
        "Location-Aware Risk Modeling",
        "Spatial offense exposure could serve as a proxy for environmental stress in mental \
         health risk stratification models. Integrating neighborhood safety data with clinical \
         information may improve prediction of crisis events or treatment needs.",
        Tone::Info,
    ),
    (
        "Targeted Resource Allocation",
        "High-exposure boroughs (Manhattan, Brooklyn) may benefit from increased access to \
         trauma-informed care, crisis intervention services, and preventive mental health \
         programs. Geographic targeting ensures resources reach populations most likely facing \
         environmental stressors.",
        Tone::Success,
    ),
    (
        "Population Health Context",
        "Understanding that offense types are similar across boroughs but volumes differ allows \
         for standardized intervention frameworks that scale in intensity rather than requiring \
         location-specific customization.",
        Tone::Accent,
    ),
];

fn roadmap() -> Roadmap {
    Roadmap {
        title: "Data Roadmap: What Would Unlock Stronger Insights".to_string(),
        stages: vec![
            RoadmapStage {
                name: "Now: Current Dataset".to_string(),
                capability: "Directional spatial signal".to_string(),
                detail: Some(
                    "Subset counts only, no time dimension, no population normalization"
                        .to_string(),
                ),
                needs: None,
                unlocks: None,
                tone: Tone::Info,
            },
            RoadmapStage {
                name: "Next: Data Enrichment".to_string(),
                capability: "Stronger inference and trend detection".to_string(),
                detail: None,
                needs: Some(
                    "Add temporal dimension, population denominators, broader offense coverage"
                        .to_string(),
                ),
                unlocks: Some("Per-capita rates, time trends, seasonality patterns".to_string()),
                tone: Tone::Success,
            },
            RoadmapStage {
                name: "Scale: Health Tech Integration".to_string(),
                capability: "Risk modeling and demand forecasting".to_string(),
                detail: None,
                needs: Some(
                    "Link to ER visits, injury outcomes, mental health utilization data"
                        .to_string(),
                ),
                unlocks: Some(
                    "Predictive models, targeted interventions, operational deployment"
                        .to_string(),
                ),
                tone: Tone::Accent,
            },
        ],
    }
}

pub fn render(data: &Dataset) -> Panel {
    let bottom_line = RichText::new()
        .text("This exploratory analysis demonstrates that ")
        .strong("spatial patterns in offense exposure exist and are measurable")
        .text(format!(
            ". While current data constraints limit definitive conclusions, the {} variation in \
             exposure intensity across boroughs provides a compelling signal for health tech \
             applications. With expanded data (time, population, health outcomes), these spatial \
             patterns could power location-aware risk models and guide precision deployment of \
             mental health resources.",
            exposure_ratio_label(data)
        ));

    let mut panel = Panel::new(Section::Implications, "Strategic Implications for Health Tech");
    for (number, (title, body, tone)) in NARRATIVES.iter().enumerate() {
        panel = panel.push(Element::callout(
            format!("{}  {title}", number + 1),
            *body,
            *tone,
        ));
    }
    panel
        .push(Element::Roadmap(roadmap()))
        .push(Element::callout("Bottom Line", bottom_line, Tone::Warning))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn three_numbered_blocks_then_roadmap_then_summary() {
        let panel = render(&Dataset::nyc());
        let titles: Vec<String> = panel
            .elements
            .iter()
            .filter_map(|element| match element {
                Element::Callout(callout) => Some(callout.title.clone()),
                _ => None,
            })
            .collect();
        assert_eq!(
            titles,
            vec![
                "1  Location-Aware Risk Modeling",
                "2  Targeted Resource Allocation",
                "3  Population Health Context",
                "Bottom Line",
            ]
        );
        let Some(Element::Roadmap(roadmap)) = panel.elements.get(3) else {
            panic!("roadmap should follow the narrative blocks");
        };
        assert_eq!(roadmap.stages.len(), 3);
        assert!(render(&Dataset::nyc()).to_string().contains("the 3.5x variation"));
    }
}
