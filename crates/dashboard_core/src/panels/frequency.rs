use super::exposure_ratio_label;
use crate::dataset::{Dataset, Rgb};
use crate::section::Section;
use crate::tooltip::ChartDatum;
use crate::view::{BarChart, Element, Panel, RichText, Tone};

const BOROUGH_BAR: Rgb = Rgb(0x3b, 0x82, 0xf6);
const OFFENSE_BAR: Rgb = Rgb(0x8b, 0x5c, 0xf6);

pub fn render(data: &Dataset) -> Panel {
    let borough_chart = BarChart {
        title: "Offense Records by Borough".to_string(),
        subtitle: Some(
            "Boroughs differ in offense record volume within the dataset subset".to_string(),
        ),
        value_axis: Some("Number of Records".to_string()),
        color: BOROUGH_BAR,
        bars: data
            .borough_counts
            .iter()
            .map(|row| ChartDatum::borough(row.borough, row.count))
            .collect(),
    };

    let offense_chart = BarChart {
        title: "Distribution of Offense Types".to_string(),
        subtitle: Some("Offense categories are concentrated in three main types".to_string()),
        value_axis: None,
        color: OFFENSE_BAR,
        bars: data
            .offense_types
            .iter()
            .map(|row| ChartDatum::offense(row.offense, row.count))
            .collect(),
    };

    let finding = match (data.busiest(), data.quietest()) {
        (Some(busiest), Some(quietest)) => RichText::new()
            .text(format!(
                "{} shows the highest offense count ({} records), while {} has the lowest ({} records). This ",
                busiest.borough, busiest.count, quietest.borough, quietest.count
            ))
            .strong(format!("{} difference", exposure_ratio_label(data)))
            .text(" suggests significant spatial variation in offense exposure across the city."),
        _ => RichText::plain("No borough records available."),
    };

    Panel::new(Section::Frequency, "Borough Frequency")
        .push(Element::BarChart(borough_chart))
        .push(Element::callout("Key Finding", finding, Tone::Info))
        .push(Element::callout(
            "Why This Matters",
            "Exposure intensity varies by borough, which could correlate with mental health \
             burden, stress levels, and healthcare utilization patterns. This spatial signal is \
             valuable for targeting preventive interventions and allocating crisis response \
             resources.",
            Tone::Warning,
        ))
        .push(Element::BarChart(offense_chart))
        .push(Element::paragraph(
            "Three categories dominate this subset: negligent homicide offenses and dangerous \
             drug incidents",
            Tone::Neutral,
        ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::Borough;
    use crate::tooltip::format_tooltip;
    use pretty_assertions::assert_eq;

    #[test]
    fn bars_keep_declared_table_order() {
        let panel = render(&Dataset::nyc());
        let labels: Vec<&str> = panel.data_points().iter().map(|datum| datum.label()).collect();
        assert_eq!(
            labels,
            vec![
                "Brooklyn",
                "Manhattan",
                "Queens",
                "Bronx",
                "Staten Island",
                "Homicide-Negligent, Unclassified",
                "Homicide-Negligent-Vehicle",
                "Dangerous Drugs",
            ]
        );
    }

    #[test]
    fn tooltips_use_the_right_label_field() {
        let panel = render(&Dataset::nyc());
        let points = panel.data_points();
        assert_eq!(points[0].borough, Some(Borough::Brooklyn));
        assert_eq!(format_tooltip(points[1]), "Manhattan: Count: 28");
        assert_eq!(format_tooltip(points[7]), "Dangerous Drugs: Count: 27");
    }

    #[test]
    fn finding_quotes_the_extremes() {
        let text = render(&Dataset::nyc()).to_string();
        assert!(text.contains("Manhattan shows the highest offense count (28 records)"));
        assert!(text.contains("Staten Island has the lowest (8 records)"));
        assert!(text.contains("3.5x difference"));
    }
}
