use crate::dataset::{Borough, Dataset, OffenseCategory};
use crate::heatmap::Intensity;
use crate::section::Section;
use crate::view::{Element, Heatmap, HeatmapCell, HeatmapRow, LegendEntry, Panel, RichText, Tone};

fn heatmap(data: &Dataset) -> Heatmap {
    let rows = OffenseCategory::ALL
        .into_iter()
        .map(|category| HeatmapRow {
            label: category.label().to_string(),
            cells: Borough::ALL
                .into_iter()
                .map(|borough| {
                    let count = data.lookup_cross_tab(borough, category);
                    let intensity = Intensity::classify(count);
                    HeatmapCell {
                        count,
                        intensity,
                        fill: intensity.color(),
                        text: intensity.text_contrast(),
                    }
                })
                .collect(),
        })
        .collect();

    Heatmap {
        columns: Borough::ALL
            .iter()
            .map(|borough| borough.short_label().to_string())
            .collect(),
        column_codes: Borough::ALL
            .iter()
            .map(|borough| borough.code().to_string())
            .collect(),
        rows,
        legend: Intensity::ALL
            .iter()
            .map(|band| LegendEntry {
                label: band.label().to_string(),
                color: band.color(),
            })
            .collect(),
    }
}

pub fn render(data: &Dataset) -> Panel {
    let finding = RichText::new()
        .text(
            "All three offense types appear in every borough, showing consistent categorical \
             presence citywide. However, Manhattan and Brooklyn consistently show higher counts \
             across categories, while Staten Island shows lower exposure. The variation is in ",
        )
        .strong("volume, not variety")
        .text(".");

    let implication = RichText::new()
        .text(
            "Since offense types are consistent across locations, health tech interventions \
             can use ",
        )
        .strong("standardized frameworks")
        .text(
            " that scale in intensity rather than requiring borough-specific customization. \
             Focus should be on deploying more resources to high-exposure areas rather than \
             developing different intervention types per borough.",
        );

    Panel::new(Section::Composition, "Offense Type by Borough")
        .subtitle("Same categories appear across boroughs, but frequencies vary")
        .push(Element::Heatmap(heatmap(data)))
        .push(Element::callout("Key Finding", finding, Tone::Success))
        .push(Element::callout("Strategic Implication", implication, Tone::Warning))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::heatmap::TextContrast;
    use pretty_assertions::assert_eq;

    fn grid(panel: &Panel) -> Option<&Heatmap> {
        panel.elements.iter().find_map(|element| match element {
            Element::Heatmap(heatmap) => Some(heatmap),
            _ => None,
        })
    }

    #[test]
    fn grid_is_three_by_five_with_four_band_legend() {
        let panel = render(&Dataset::nyc());
        let Some(heatmap) = grid(&panel) else {
            panic!("composition panel has no heatmap");
        };
        assert_eq!(heatmap.rows.len(), 3);
        assert!(heatmap.rows.iter().all(|row| row.cells.len() == 5));
        assert_eq!(heatmap.columns[4], "Staten Is.");
        assert_eq!(heatmap.column_codes.len(), heatmap.columns.len());
        let legend: Vec<&str> = heatmap.legend.iter().map(|entry| entry.label.as_str()).collect();
        assert_eq!(legend, vec!["Low", "Medium", "High", "Very High"]);
    }

    #[test]
    fn manhattan_negligent_homicide_is_very_high() {
        let panel = render(&Dataset::nyc());
        let Some(heatmap) = grid(&panel) else {
            panic!("composition panel has no heatmap");
        };
        let row = &heatmap.rows[0];
        assert_eq!(row.label, "Homicide-Negligent");
        let cell = &row.cells[1];
        assert_eq!(cell.count, 10);
        assert_eq!(cell.intensity, Intensity::VeryHigh);
        assert_eq!(cell.text, TextContrast::Light);
        assert_eq!(cell.fill.to_string(), "#dc2626");

        let staten_island_drugs = &heatmap.rows[2].cells[4];
        assert_eq!(staten_island_drugs.count, 2);
        assert_eq!(staten_island_drugs.intensity, Intensity::Low);
        assert_eq!(staten_island_drugs.text, TextContrast::Dark);
    }
}
