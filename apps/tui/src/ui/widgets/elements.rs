use crate::ui::widgets::charts::{
    bar_chart_height, heatmap_height, render_bar_chart, render_heatmap, render_share_chart,
    share_chart_height,
};
use crate::ui::widgets::palette::{tone_color, ACCENT, MUTED};
use crate::ui::widgets::text::{rich_line, rich_spans, wrapped_height};
use offense_dashboard_core::view::{BulletList, Callout, ListItem, Roadmap, StatCard};
use offense_dashboard_core::{Element, Tone};
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line as TextLine, Span, Text};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

const STAT_CARD_HEIGHT: u16 = 4;

fn bordered(title: Option<&str>, tone: Tone) -> Block<'static> {
    let color = tone_color(tone);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color));
    match title {
        Some(title) => block
            .title(format!(" {title} "))
            .title_style(Style::default().fg(color).add_modifier(Modifier::BOLD)),
        None => block,
    }
}

fn list_item_text(marker: char, item: &ListItem) -> String {
    match &item.heading {
        Some(heading) => format!("{marker} {heading}: {}", item.body.to_plain()),
        None => format!("{marker} {}", item.body.to_plain()),
    }
}

fn roadmap_lines(roadmap: &Roadmap) -> Vec<(String, Option<&'static str>, Tone)> {
    let mut lines = Vec::new();
    for stage in &roadmap.stages {
        lines.push((stage.name.clone(), None, stage.tone));
        lines.push((stage.capability.clone(), Some("Capability"), stage.tone));
        if let Some(detail) = &stage.detail {
            lines.push((detail.clone(), Some(""), stage.tone));
        }
        if let Some(needs) = &stage.needs {
            lines.push((needs.clone(), Some("Needs"), stage.tone));
        }
        if let Some(unlocks) = &stage.unlocks {
            lines.push((unlocks.clone(), Some("Unlocks"), stage.tone));
        }
    }
    lines
}

fn column_areas(area: Rect, count: usize) -> Vec<Rect> {
    let count = u32::try_from(count).unwrap_or(1).max(1);
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints((0..count).map(|_| Constraint::Ratio(1, count)))
        .split(area)
        .to_vec()
}

/// Rows `element` occupies at `width`, not counting the gap after it.
pub fn element_height(element: &Element, width: u16) -> u16 {
    let inner = width.saturating_sub(2);
    match element {
        Element::Heading { .. } => 1,
        Element::Paragraph { text, .. } => wrapped_height(&text.to_plain(), width),
        Element::Callout(callout) => wrapped_height(&callout.body.to_plain(), inner) + 2,
        Element::StatCards { .. } => STAT_CARD_HEIGHT,
        Element::BulletList(list) => {
            let items: u16 = list
                .items
                .iter()
                .map(|item| wrapped_height(&list_item_text(list.marker, item), inner))
                .sum();
            items + 2
        }
        Element::Columns { children } => {
            let areas = column_areas(Rect::new(0, 0, width, 1), children.len());
            children
                .iter()
                .zip(areas)
                .map(|(child, area)| element_height(child, area.width))
                .max()
                .unwrap_or(0)
        }
        Element::BarChart(chart) => bar_chart_height(chart),
        Element::ShareChart(chart) => share_chart_height(chart),
        Element::Heatmap(heatmap) => heatmap_height(heatmap),
        Element::Roadmap(roadmap) => {
            let lines: u16 = roadmap_lines(roadmap)
                .iter()
                .map(|(text, prefix, _)| {
                    let indent = if prefix.is_some() { 2 } else { 0 };
                    let prefix_len =
                        prefix.map_or(0, |p| if p.is_empty() { 0 } else { p.len() + 2 });
                    let prefix_len = u16::try_from(prefix_len).unwrap_or(0);
                    wrapped_height(text, inner.saturating_sub(indent + prefix_len))
                })
                .sum();
            lines + 2
        }
    }
}

/// Draws `element`. `focus` is the index of the highlighted data point
/// counted from this element's first one.
pub fn render_element(f: &mut Frame<'_>, area: Rect, element: &Element, focus: Option<usize>) {
    match element {
        Element::Heading { text } => {
            let heading = Paragraph::new(TextLine::from(Span::styled(
                text.clone(),
                Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
            )));
            f.render_widget(heading, area);
        }
        Element::Paragraph { text, tone } => {
            let style = match tone {
                Tone::Neutral => Style::default().fg(MUTED).add_modifier(Modifier::ITALIC),
                other => Style::default().fg(tone_color(*other)),
            };
            let paragraph = Paragraph::new(rich_line(text, style)).wrap(Wrap { trim: true });
            f.render_widget(paragraph, area);
        }
        Element::Callout(callout) => render_callout(f, area, callout),
        Element::StatCards { cards } => render_stat_cards(f, area, cards),
        Element::BulletList(list) => render_bullet_list(f, area, list),
        Element::Columns { children } => {
            let mut offset = 0;
            for (child, child_area) in children.iter().zip(column_areas(area, children.len())) {
                let points = child.data_points().len();
                let child_focus = focus
                    .and_then(|index| index.checked_sub(offset))
                    .filter(|index| *index < points);
                render_element(f, child_area, child, child_focus);
                offset += points;
            }
        }
        Element::BarChart(chart) => render_bar_chart(f, area, chart, focus),
        Element::ShareChart(chart) => render_share_chart(f, area, chart),
        Element::Heatmap(heatmap) => render_heatmap(f, area, heatmap),
        Element::Roadmap(roadmap) => render_roadmap(f, area, roadmap),
    }
}

fn render_callout(f: &mut Frame<'_>, area: Rect, callout: &Callout) {
    let body = rich_line(&callout.body, Style::default().fg(Color::White));
    let paragraph = Paragraph::new(body)
        .block(bordered(Some(&callout.title), callout.tone))
        .wrap(Wrap { trim: true });
    f.render_widget(paragraph, area);
}

fn render_stat_cards(f: &mut Frame<'_>, area: Rect, cards: &[StatCard]) {
    for (card, card_area) in cards.iter().zip(column_areas(area, cards.len())) {
        let color = tone_color(card.tone);
        let lines = vec![
            TextLine::from(Span::styled(
                card.value.clone(),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            )),
            TextLine::from(Span::styled(card.label.clone(), Style::default().fg(MUTED))),
        ];
        let paragraph = Paragraph::new(Text::from(lines))
            .block(bordered(None, card.tone))
            .alignment(Alignment::Center);
        f.render_widget(paragraph, card_area);
    }
}

fn render_bullet_list(f: &mut Frame<'_>, area: Rect, list: &BulletList) {
    let marker_style = Style::default().fg(tone_color(list.tone));
    let lines: Vec<TextLine<'_>> = list
        .items
        .iter()
        .map(|item| {
            let mut spans = vec![Span::styled(format!("{} ", list.marker), marker_style)];
            if let Some(heading) = &item.heading {
                spans.push(Span::styled(
                    format!("{heading}: "),
                    Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
                ));
            }
            spans.extend(rich_spans(&item.body, Style::default().fg(Color::White)));
            TextLine::from(spans)
        })
        .collect();

    let paragraph = Paragraph::new(Text::from(lines))
        .block(bordered(list.title.as_deref(), list.tone))
        .wrap(Wrap { trim: true });
    f.render_widget(paragraph, area);
}

fn render_roadmap(f: &mut Frame<'_>, area: Rect, roadmap: &Roadmap) {
    let lines: Vec<TextLine<'_>> = roadmap_lines(roadmap)
        .into_iter()
        .map(|(text, prefix, tone)| match prefix {
            None => TextLine::from(Span::styled(
                text,
                Style::default().fg(tone_color(tone)).add_modifier(Modifier::BOLD),
            )),
            Some("") => TextLine::from(vec![
                Span::raw("  "),
                Span::styled(text, Style::default().fg(MUTED)),
            ]),
            Some(label) => TextLine::from(vec![
                Span::raw("  "),
                Span::styled(format!("{label}: "), Style::default().fg(MUTED)),
                Span::styled(text, Style::default().fg(Color::White)),
            ]),
        })
        .collect();

    let paragraph = Paragraph::new(Text::from(lines))
        .block(bordered(Some(&roadmap.title), Tone::Neutral))
        .wrap(Wrap { trim: false });
    f.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use offense_dashboard_core::{Dataset, Section};

    #[test]
    fn columns_take_the_tallest_child() {
        let panel = Section::Statistics.render(&Dataset::nyc());
        let Some(columns @ Element::Columns { children }) = panel.elements.last() else {
            panic!("statistics ends with columns");
        };
        let tallest = column_areas(Rect::new(0, 0, 80, 1), children.len())
            .iter()
            .zip(children)
            .map(|(area, child)| element_height(child, area.width))
            .max();
        assert_eq!(Some(element_height(columns, 80)), tallest);
    }

    #[test]
    fn fixed_height_elements() {
        let panel = Section::Composition.render(&Dataset::nyc());
        let heatmap = panel
            .elements
            .iter()
            .find(|element| matches!(element, Element::Heatmap(_)));
        assert_eq!(heatmap.map(|element| element_height(element, 100)), Some(7));
        assert_eq!(element_height(&Element::heading("x"), 10), 1);
    }
}
