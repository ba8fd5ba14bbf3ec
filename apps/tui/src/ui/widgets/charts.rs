use crate::ui::widgets::palette::{contrast_color, rgb, KEY, MUTED};
use offense_dashboard_core::view::{BarChart as BarChartView, Heatmap, ShareChart};
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line as TextLine, Span, Text};
use ratatui::widgets::{Bar, BarChart, BarGroup, Block, Borders, Cell, Paragraph, Row, Table};
use ratatui::Frame;

const SHARE_LABEL_WIDTH: usize = 22;

fn chart_block(title: &str, color: Color) -> Block<'static> {
    Block::default()
        .title(format!(" {title} "))
        .title_style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(MUTED))
}

/// Splits off a one-row subtitle when there is one.
fn with_subtitle(f: &mut Frame<'_>, inner: Rect, subtitle: Option<&String>) -> Rect {
    let Some(subtitle) = subtitle else {
        return inner;
    };
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(0)])
        .split(inner);
    let caption = Paragraph::new(TextLine::from(Span::styled(
        subtitle.clone(),
        Style::default().fg(MUTED).add_modifier(Modifier::ITALIC),
    )));
    f.render_widget(caption, rows[0]);
    rows[1]
}

pub fn bar_chart_height(chart: &BarChartView) -> u16 {
    let bars = u16::try_from(chart.bars.len()).unwrap_or(u16::MAX);
    2 + u16::from(chart.subtitle.is_some()) + bars.saturating_mul(2).saturating_sub(1).max(1)
}

/// Horizontal bars in declared order. `focused` indexes into `chart.bars`.
pub fn render_bar_chart(
    f: &mut Frame<'_>,
    area: Rect,
    chart: &BarChartView,
    focused: Option<usize>,
) {
    let color = rgb(chart.color);
    let mut block = chart_block(&chart.title, color);
    if let Some(axis) = &chart.value_axis {
        block = block.title_bottom(
            TextLine::from(Span::styled(format!(" {axis} "), Style::default().fg(MUTED)))
                .alignment(Alignment::Right),
        );
    }
    let inner = block.inner(area);
    f.render_widget(block, area);
    let bars_area = with_subtitle(f, inner, chart.subtitle.as_ref());

    let bars: Vec<Bar<'_>> = chart
        .bars
        .iter()
        .enumerate()
        .map(|(index, datum)| {
            let is_focused = focused == Some(index);
            let (bar_style, label_style) = if is_focused {
                (
                    Style::default().fg(KEY),
                    Style::default().fg(KEY).add_modifier(Modifier::BOLD),
                )
            } else {
                (Style::default().fg(color), Style::default().fg(Color::White))
            };
            Bar::default()
                .value(u64::from(datum.value))
                .label(TextLine::from(Span::styled(datum.label(), label_style)))
                .style(bar_style)
                .value_style(
                    Style::default()
                        .fg(Color::Black)
                        .bg(if is_focused { KEY } else { color })
                        .add_modifier(Modifier::BOLD),
                )
        })
        .collect();

    let max_value = chart
        .bars
        .iter()
        .map(|datum| u64::from(datum.value))
        .max()
        .unwrap_or(0)
        .max(1);

    let widget = BarChart::default()
        .direction(Direction::Horizontal)
        .data(BarGroup::default().bars(&bars))
        .max(max_value)
        .bar_width(1)
        .bar_gap(1);

    f.render_widget(widget, bars_area);
}

pub fn share_chart_height(chart: &ShareChart) -> u16 {
    let rows = u16::try_from(chart.sectors.len()).unwrap_or(u16::MAX);
    2 + u16::from(chart.subtitle.is_some()) + rows.max(1)
}

/// One proportional row per sector, scaled against the largest share.
#[allow(clippy::cast_precision_loss, clippy::cast_sign_loss)]
pub fn render_share_chart(f: &mut Frame<'_>, area: Rect, chart: &ShareChart) {
    let block = chart_block(&chart.title, Color::White);
    let inner = block.inner(area);
    f.render_widget(block, area);
    let rows_area = with_subtitle(f, inner, chart.subtitle.as_ref());

    let largest = chart
        .sectors
        .iter()
        .map(|sector| sector.value)
        .max()
        .unwrap_or(0)
        .max(1);
    let bar_width = usize::from(rows_area.width).saturating_sub(SHARE_LABEL_WIDTH + 4);

    let lines: Vec<TextLine<'_>> = chart
        .sectors
        .iter()
        .map(|sector| {
            let color = rgb(sector.color);
            let fill = (f64::from(sector.value) / f64::from(largest) * bar_width as f64).round()
                as usize;
            let fill = fill.max(usize::from(sector.value > 0)).min(bar_width);
            TextLine::from(vec![
                Span::styled("■ ", Style::default().fg(color)),
                Span::styled(
                    format!("{:<SHARE_LABEL_WIDTH$}", sector.label),
                    Style::default().fg(Color::White),
                ),
                Span::styled("█".repeat(fill), Style::default().fg(color)),
                Span::styled(
                    "░".repeat(bar_width - fill),
                    Style::default().fg(MUTED).add_modifier(Modifier::DIM),
                ),
            ])
        })
        .collect();

    f.render_widget(Paragraph::new(Text::from(lines)), rows_area);
}

pub fn heatmap_height(heatmap: &Heatmap) -> u16 {
    let rows = u16::try_from(heatmap.rows.len()).unwrap_or(u16::MAX);
    2 + 1 + rows + 1
}

/// Full column labels when each fits its share of `available`, codes otherwise.
fn heatmap_headers(heatmap: &Heatmap, available: u16) -> &[String] {
    let widest = heatmap
        .columns
        .iter()
        .map(|column| column.chars().count())
        .max()
        .unwrap_or(0);
    let needed = heatmap.columns.len() * (widest + 1);
    if usize::from(available) < needed && heatmap.column_codes.len() == heatmap.columns.len() {
        &heatmap.column_codes
    } else {
        &heatmap.columns
    }
}

/// Count grid with each cell filled by its intensity band, legend underneath.
pub fn render_heatmap(f: &mut Frame<'_>, area: Rect, heatmap: &Heatmap) {
    let block = chart_block("Offense Category × Borough", Color::White);
    let inner = block.inner(area);
    f.render_widget(block, area);

    let rows_len = u16::try_from(heatmap.rows.len()).unwrap_or(u16::MAX);
    let sections = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(rows_len + 1), Constraint::Length(1)])
        .split(inner);

    let label_width = heatmap
        .rows
        .iter()
        .map(|row| row.label.chars().count())
        .max()
        .unwrap_or(0);
    let label_width = u16::try_from(label_width).unwrap_or(u16::MAX);

    let headers = heatmap_headers(heatmap, inner.width.saturating_sub(label_width + 1));
    let header = Row::new(
        std::iter::once(Cell::from(""))
            .chain(headers.iter().map(|column| {
                Cell::from(TextLine::from(column.as_str()).alignment(Alignment::Center))
            }))
            .collect::<Vec<_>>(),
    )
    .style(Style::default().fg(MUTED).add_modifier(Modifier::BOLD));

    let rows = heatmap.rows.iter().map(|row| {
        let cells = std::iter::once(Cell::from(row.label.as_str())).chain(row.cells.iter().map(
            |cell| {
                Cell::from(TextLine::from(cell.count.to_string()).alignment(Alignment::Center))
                    .style(
                        Style::default()
                            .bg(rgb(cell.fill))
                            .fg(contrast_color(cell.text))
                            .add_modifier(Modifier::BOLD),
                    )
            },
        ));
        Row::new(cells.collect::<Vec<_>>())
    });

    let columns = u32::try_from(heatmap.columns.len()).unwrap_or(1).max(1);
    let widths = std::iter::once(Constraint::Length(label_width + 1))
        .chain(heatmap.columns.iter().map(|_| Constraint::Ratio(1, columns)))
        .collect::<Vec<_>>();

    let table = Table::new(rows, widths).header(header).column_spacing(1);
    f.render_widget(table, sections[0]);

    let mut legend = vec![Span::styled("Scale:", Style::default().fg(MUTED))];
    for entry in &heatmap.legend {
        legend.push(Span::raw("  "));
        legend.push(Span::styled("  ", Style::default().bg(rgb(entry.color))));
        legend.push(Span::styled(
            format!(" {}", entry.label),
            Style::default().fg(Color::White),
        ));
    }
    f.render_widget(Paragraph::new(TextLine::from(legend)), sections[1]);
}
