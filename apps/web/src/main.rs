use std::cell::RefCell;
use std::io;
use std::rc::Rc;

use offense_dashboard_core::view::{BarChart, BulletList, Heatmap, Roadmap, ShareChart};
use offense_dashboard_core::{Dashboard, Dataset, Element, Panel, RichText, Rgb, Section, Tone};
use ratzilla::ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Margin, Rect},
    style::{Color, Modifier, Style},
    text::{Line as TextLine, Span, Text},
    widgets::{Block, Borders, Paragraph, Tabs},
    Terminal,
};
use ratzilla::{DomBackend, WebRenderer};
use wasm_bindgen::JsValue;

const BAR_WIDTH: usize = 40;

/// Tab plus the element the view is scrolled to.
#[derive(Clone, Copy)]
struct ViewState {
    dashboard: Dashboard,
    scroll: usize,
}

impl ViewState {
    fn select(&mut self, section: Section) {
        self.dashboard.select(section);
        self.scroll = 0;
        web_sys::console::log_1(&JsValue::from_str(&format!("section: {section}")));
    }
}

fn main() -> io::Result<()> {
    let data = Dataset::nyc();
    let state = Rc::new(RefCell::new(ViewState {
        dashboard: Dashboard::new(),
        scroll: 0,
    }));

    let backend = DomBackend::new()?;
    let mut terminal = Terminal::new(backend)?;

    terminal.on_key_event({
        let state = state.clone();
        move |event| {
            let mut state = state.borrow_mut();
            let active = state.dashboard.active();
            match event.code {
                ratzilla::event::KeyCode::Left => state.select(active.prev()),
                ratzilla::event::KeyCode::Right => state.select(active.next()),
                ratzilla::event::KeyCode::Up => state.scroll = state.scroll.saturating_sub(1),
                ratzilla::event::KeyCode::Down => {
                    let last = active.render(&data).elements.len().saturating_sub(1);
                    state.scroll = (state.scroll + 1).min(last);
                }
                ratzilla::event::KeyCode::Char(digit @ '1'..='6') => {
                    let index = digit.to_digit(10).map_or(0, |d| d as usize - 1);
                    if let Some(section) = Section::from_index(index) {
                        state.select(section);
                    }
                }
                _ => {}
            }
        }
    });

    terminal.draw_web(move |f| {
        let area = f.area();
        let block = Block::default()
            .title("NYC Offense Exposure Analysis")
            .title_style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Gray));
        let inner = block.inner(area).inner(Margin::new(1, 1));
        f.render_widget(block, area);

        let state = *state.borrow();
        let panel = state.dashboard.render(&data);
        render_dashboard(&panel, state.scroll, f, inner);
    });

    Ok(())
}

fn render_dashboard(
    panel: &Panel,
    scroll: usize,
    f: &mut ratzilla::ratatui::Frame<'_>,
    area: Rect,
) {
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(5),
            Constraint::Length(1),
        ])
        .split(area);

    let titles = Section::ALL
        .iter()
        .map(|section| TextLine::from(format!("{} {}", section.icon(), section.label())))
        .collect::<Vec<_>>();
    let tabs = Tabs::new(titles)
        .select(panel.section.index())
        .style(Style::default().fg(Color::Gray))
        .highlight_style(
            Style::default()
                .fg(Color::White)
                .bg(Color::Rgb(0x3b, 0x82, 0xf6))
                .add_modifier(Modifier::BOLD),
        )
        .divider(Span::raw("|"));
    f.render_widget(tabs, layout[0]);

    let (lines, starts) = panel_lines(panel);
    let offset = starts.get(scroll).copied().unwrap_or(0);
    let body = Paragraph::new(Text::from(lines))
        .block(
            Block::default()
                .title(format!(" {} ", panel.title))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        )
        .scroll((u16::try_from(offset).unwrap_or(u16::MAX), 0));
    f.render_widget(body, layout[2]);

    let hint = Paragraph::new(TextLine::from(Span::styled(
        "←/→ or 1-6: section   ↑/↓: scroll",
        Style::default().fg(Color::Gray),
    )))
    .alignment(Alignment::Center);
    f.render_widget(hint, layout[3]);
}

const fn rgb(color: Rgb) -> Color {
    Color::Rgb(color.0, color.1, color.2)
}

const fn tone_color(tone: Tone) -> Color {
    match tone {
        Tone::Info => Color::Rgb(0x3b, 0x82, 0xf6),
        Tone::Success => Color::Rgb(0x10, 0xb9, 0x81),
        Tone::Warning => Color::Rgb(0xf5, 0x9e, 0x0b),
        Tone::Accent => Color::Rgb(0x8b, 0x5c, 0xf6),
        Tone::Danger => Color::Rgb(0xef, 0x44, 0x44),
        Tone::Neutral => Color::Gray,
    }
}

fn rich(text: &RichText, base: Style) -> TextLine<'static> {
    TextLine::from(
        text.runs
            .iter()
            .map(|run| {
                let style = if run.strong {
                    base.add_modifier(Modifier::BOLD)
                } else {
                    base
                };
                Span::styled(run.text.clone(), style)
            })
            .collect::<Vec<_>>(),
    )
}

/// Lines for the whole panel plus the first line of each element, so scrolling
/// can move by element. The body is drawn unwrapped so each line is one row.
fn panel_lines(panel: &Panel) -> (Vec<TextLine<'static>>, Vec<usize>) {
    let mut lines = Vec::new();
    if let Some(subtitle) = &panel.subtitle {
        lines.push(TextLine::from(Span::styled(
            subtitle.clone(),
            Style::default().fg(Color::Gray),
        )));
        lines.push(TextLine::from(""));
    }
    let mut starts = Vec::with_capacity(panel.elements.len());
    for element in &panel.elements {
        starts.push(lines.len());
        push_element(&mut lines, element);
        lines.push(TextLine::from(""));
    }
    (lines, starts)
}

fn push_element(lines: &mut Vec<TextLine<'static>>, element: &Element) {
    match element {
        Element::Heading { text } => lines.push(TextLine::from(Span::styled(
            text.clone(),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ))),
        Element::Paragraph { text, tone } => {
            lines.push(rich(text, Style::default().fg(tone_color(*tone))));
        }
        Element::Callout(callout) => {
            lines.push(TextLine::from(Span::styled(
                format!("▌ {}", callout.title),
                Style::default()
                    .fg(tone_color(callout.tone))
                    .add_modifier(Modifier::BOLD),
            )));
            lines.push(rich(&callout.body, Style::default().fg(Color::White)));
        }
        Element::StatCards { cards } => {
            let mut spans = Vec::new();
            for card in cards {
                spans.push(Span::styled(
                    card.value.clone(),
                    Style::default()
                        .fg(tone_color(card.tone))
                        .add_modifier(Modifier::BOLD),
                ));
                spans.push(Span::styled(
                    format!(" {}    ", card.label),
                    Style::default().fg(Color::Gray),
                ));
            }
            lines.push(TextLine::from(spans));
        }
        Element::BulletList(list) => push_list(lines, list),
        Element::Columns { children } => {
            for child in children {
                push_element(lines, child);
            }
        }
        Element::BarChart(chart) => push_bar_chart(lines, chart),
        Element::ShareChart(chart) => push_share_chart(lines, chart),
        Element::Heatmap(heatmap) => push_heatmap(lines, heatmap),
        Element::Roadmap(roadmap) => push_roadmap(lines, roadmap),
    }
}

fn push_list(lines: &mut Vec<TextLine<'static>>, list: &BulletList) {
    let color = tone_color(list.tone);
    if let Some(title) = &list.title {
        lines.push(TextLine::from(Span::styled(
            title.clone(),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )));
    }
    for item in &list.items {
        let mut line = rich(&item.body, Style::default().fg(Color::White));
        if let Some(heading) = &item.heading {
            line.spans.insert(
                0,
                Span::styled(
                    format!("{heading}: "),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
            );
        }
        line.spans
            .insert(0, Span::styled(format!("  {} ", list.marker), Style::default().fg(color)));
        lines.push(line);
    }
}

fn bar(value: u32, largest: u32, color: Color) -> Span<'static> {
    let fill = (value as usize * BAR_WIDTH) / largest.max(1) as usize;
    Span::styled("█".repeat(fill.max(usize::from(value > 0))), Style::default().fg(color))
}

fn push_bar_chart(lines: &mut Vec<TextLine<'static>>, chart: &BarChart) {
    lines.push(TextLine::from(Span::styled(
        chart.title.clone(),
        Style::default().add_modifier(Modifier::BOLD),
    )));
    let largest = chart.bars.iter().map(|datum| datum.value).max().unwrap_or(0);
    let width = chart
        .bars
        .iter()
        .map(|datum| datum.label().chars().count())
        .max()
        .unwrap_or(0);
    for datum in &chart.bars {
        lines.push(TextLine::from(vec![
            Span::raw(format!("{:<width$} ", datum.label())),
            bar(datum.value, largest, rgb(chart.color)),
            Span::raw(format!(" {}", datum.value)),
        ]));
    }
}

fn push_share_chart(lines: &mut Vec<TextLine<'static>>, chart: &ShareChart) {
    lines.push(TextLine::from(Span::styled(
        chart.title.clone(),
        Style::default().add_modifier(Modifier::BOLD),
    )));
    let largest = chart
        .sectors
        .iter()
        .map(|sector| sector.value)
        .max()
        .unwrap_or(0);
    for sector in &chart.sectors {
        lines.push(TextLine::from(vec![
            Span::styled("■ ", Style::default().fg(rgb(sector.color))),
            Span::raw(format!("{:<22}", sector.label)),
            bar(sector.value, largest, rgb(sector.color)),
        ]));
    }
}

fn push_heatmap(lines: &mut Vec<TextLine<'static>>, heatmap: &Heatmap) {
    let label_width = heatmap
        .rows
        .iter()
        .map(|row| row.label.chars().count())
        .max()
        .unwrap_or(0);
    let mut header = vec![Span::raw(" ".repeat(label_width))];
    header.extend(
        heatmap
            .columns
            .iter()
            .map(|column| Span::styled(format!(" {column:^11}"), Style::default().fg(Color::Gray))),
    );
    lines.push(TextLine::from(header));

    for row in &heatmap.rows {
        let mut spans = vec![Span::raw(format!("{:<label_width$}", row.label))];
        for cell in &row.cells {
            spans.push(Span::raw(" "));
            spans.push(Span::styled(
                format!("{:^11}", cell.count),
                Style::default()
                    .bg(rgb(cell.fill))
                    .fg(rgb(cell.text.color()))
                    .add_modifier(Modifier::BOLD),
            ));
        }
        lines.push(TextLine::from(spans));
    }

    let mut legend = vec![Span::styled("Scale:", Style::default().fg(Color::Gray))];
    for entry in &heatmap.legend {
        legend.push(Span::raw("  "));
        legend.push(Span::styled("  ", Style::default().bg(rgb(entry.color))));
        legend.push(Span::raw(format!(" {}", entry.label)));
    }
    lines.push(TextLine::from(legend));
}

fn push_roadmap(lines: &mut Vec<TextLine<'static>>, roadmap: &Roadmap) {
    lines.push(TextLine::from(Span::styled(
        roadmap.title.clone(),
        Style::default().add_modifier(Modifier::BOLD),
    )));
    for stage in &roadmap.stages {
        lines.push(TextLine::from(Span::styled(
            stage.name.clone(),
            Style::default()
                .fg(tone_color(stage.tone))
                .add_modifier(Modifier::BOLD),
        )));
        lines.push(TextLine::from(format!("  Capability: {}", stage.capability)));
        for (label, value) in [
            ("", &stage.detail),
            ("Needs: ", &stage.needs),
            ("Unlocks: ", &stage.unlocks),
        ] {
            if let Some(value) = value {
                lines.push(TextLine::from(format!("  {label}{value}")));
            }
        }
    }
}
