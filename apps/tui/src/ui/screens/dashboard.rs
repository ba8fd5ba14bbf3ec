use crate::app::App;
use crate::ui::widgets::elements::{element_height, render_element};
use crate::ui::widgets::palette::{ACCENT, KEY, MUTED};
use crate::ui::widgets::text::wrapped_height;
use offense_dashboard_core::Section;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Margin, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line as TextLine, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Tabs, Wrap};
use ratatui::Frame;

const TITLE: &str = "NYC Offense Exposure Analysis";
const SUBTITLE: &str =
    "Spatial variation in public safety incidents across New York City boroughs";
const FULL_TAB_WIDTH: u16 = 150;

pub fn render_dashboard(app: &App, f: &mut Frame<'_>) {
    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Length(3), // Tabs
            Constraint::Min(5),    // Panel
            Constraint::Length(3), // Status area
            Constraint::Length(1), // Shortcuts hint
        ])
        .split(f.area().inner(Margin::new(1, 0)));

    render_header(f, main_layout[0]);
    render_tabs(app, f, main_layout[1]);
    render_panel(app, f, main_layout[2]);
    render_status_section(app, f, main_layout[3]);
    render_shortcuts(f, main_layout[4]);
}

fn render_header(f: &mut Frame<'_>, area: Rect) {
    let block = Block::default()
        .title(format!(" {TITLE} "))
        .title_style(Style::default().fg(ACCENT).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(ACCENT));
    let subtitle = Paragraph::new(TextLine::from(Span::styled(
        SUBTITLE,
        Style::default().fg(MUTED),
    )))
    .block(block);
    f.render_widget(subtitle, area);
}

fn render_tabs(app: &App, f: &mut Frame<'_>, area: Rect) {
    // Full labels need roughly 150 columns; narrower terminals get the ids
    let compact = area.width < FULL_TAB_WIDTH;
    let titles = Section::ALL
        .iter()
        .map(|section| {
            let name = if compact { section.id() } else { section.label() };
            TextLine::from(format!("{} {name}", section.icon()))
        })
        .collect::<Vec<_>>();

    let tabs = Tabs::new(titles)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(MUTED)),
        )
        .select(app.active().index())
        .style(Style::default().fg(MUTED))
        .highlight_style(
            Style::default()
                .fg(Color::Black)
                .bg(ACCENT)
                .add_modifier(Modifier::BOLD),
        )
        .divider(Span::raw("|"));

    f.render_widget(tabs, area);
}

fn render_panel(app: &App, f: &mut Frame<'_>, area: Rect) {
    let panel = app.panel();
    let total = panel.elements.len();

    let mut block = Block::default()
        .title(format!(" {} ", panel.title))
        .title_style(Style::default().fg(Color::White).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(ACCENT));
    if app.scroll > 0 {
        block = block.title_bottom(
            TextLine::from(Span::styled(
                format!(" ↑ {}/{total} ", app.scroll + 1),
                Style::default().fg(MUTED),
            ))
            .alignment(Alignment::Right),
        );
    }
    let inner = block.inner(area).inner(Margin::new(1, 0));
    f.render_widget(block, area);

    let bottom = inner.bottom();
    let mut y = inner.y;

    if let Some(subtitle) = &panel.subtitle {
        let height = wrapped_height(subtitle, inner.width).min(bottom.saturating_sub(y));
        let caption = Paragraph::new(TextLine::from(Span::styled(
            subtitle.clone(),
            Style::default().fg(MUTED).add_modifier(Modifier::ITALIC),
        )))
        .wrap(Wrap { trim: true });
        f.render_widget(caption, Rect::new(inner.x, y, inner.width, height));
        y = y.saturating_add(height).saturating_add(1);
    }

    let mut point_offset = 0;
    for (index, element) in panel.elements.iter().enumerate() {
        let points = element.data_points().len();
        if index >= app.scroll && y < bottom {
            let height = element_height(element, inner.width).min(bottom - y);
            let focus = app
                .focus
                .and_then(|focus| focus.checked_sub(point_offset))
                .filter(|focus| *focus < points);
            render_element(f, Rect::new(inner.x, y, inner.width, height), element, focus);
            y = y.saturating_add(height).saturating_add(1);
        }
        point_offset += points;
    }
}

fn render_status_section(app: &App, f: &mut Frame<'_>, area: Rect) {
    let status_block = Block::default()
        .title(" Status ")
        .title_style(Style::default().fg(KEY))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(KEY));

    let line = if let Some(query) = &app.jump_query {
        TextLine::from(vec![
            Span::styled("Jump to: ", Style::default().fg(KEY).add_modifier(Modifier::BOLD)),
            Span::styled(format!("{query}_"), Style::default().fg(Color::White)),
        ])
    } else if let Some(tooltip) = app.focused_tooltip() {
        TextLine::from(Span::styled(
            tooltip,
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        ))
    } else if !app.status_message.is_empty() {
        TextLine::from(Span::styled(
            app.status_message.clone(),
            Style::default().fg(Color::Red),
        ))
    } else {
        TextLine::from(Span::styled(
            format!(
                "{} of {}: {}",
                app.active().index() + 1,
                Section::ALL.len(),
                app.active().label()
            ),
            Style::default().fg(MUTED),
        ))
    };

    f.render_widget(Paragraph::new(line).block(status_block), area);
}

fn render_shortcuts(f: &mut Frame<'_>, area: Rect) {
    let keys = [
        ("←/→", "Section"),
        ("1-6", "Jump"),
        ("↑/↓", "Scroll"),
        ("Tab", "Focus data"),
        ("/", "Search"),
        ("?", "Help"),
        ("q", "Quit"),
    ];
    let mut spans = Vec::new();
    for (index, (key, action)) in keys.iter().enumerate() {
        spans.push(Span::styled(
            *key,
            Style::default().fg(KEY).add_modifier(Modifier::BOLD),
        ));
        let separator = if index + 1 < keys.len() { " | " } else { "" };
        spans.push(Span::styled(
            format!(": {action}{separator}"),
            Style::default().fg(MUTED),
        ));
    }
    f.render_widget(
        Paragraph::new(TextLine::from(spans)).alignment(Alignment::Center),
        area,
    );
}

#[cfg(test)]
mod tests {
    use crate::app::App;
    use crate::ui::ui;
    use offense_dashboard_core::Section;
    use pretty_assertions::assert_eq;
    use ratatui::backend::TestBackend;
    use ratatui::buffer::Buffer;
    use ratatui::style::Color;
    use ratatui::Terminal;

    fn draw(app: &App) -> Buffer {
        draw_sized(app, 120, 80)
    }

    fn draw_sized(app: &App, width: u16, height: u16) -> Buffer {
        let Ok(mut terminal) = Terminal::new(TestBackend::new(width, height)) else {
            panic!("test backend");
        };
        if let Err(e) = terminal.draw(|f| ui(app, f)) {
            panic!("draw failed: {e}");
        }
        terminal.backend().buffer().clone()
    }

    fn text(buffer: &Buffer) -> String {
        let area = buffer.area;
        let mut out = String::new();
        for y in area.top()..area.bottom() {
            for x in area.left()..area.right() {
                out.push_str(buffer[(x, y)].symbol());
            }
            out.push('\n');
        }
        out
    }

    #[test]
    fn every_section_redraws_identically_after_switching_back() {
        let mut app = App::new(Section::Summary);
        for section in Section::ALL {
            app.select(section);
            let first = draw(&app);
            app.scroll_down(1);
            app.focus_next();
            app.select(section.next());
            draw(&app);
            app.select(section);
            assert_eq!(first, draw(&app), "{section} changed after re-selection");
        }
    }

    #[test]
    fn summary_shows_headline_figures() {
        let screen = text(&draw(&App::new(Section::Summary)));
        assert!(screen.contains("NYC Offense Exposure Analysis"));
        assert!(screen.contains("Executive Summary"));
        assert!(screen.contains("94"));
        assert!(screen.contains("3.5x"));
    }

    #[test]
    fn dataset_tab_lists_share_labels() {
        let screen = text(&draw(&App::new(Section::Dataset)));
        assert!(screen.contains("Manhattan: 29.8%"));
        assert!(screen.contains("Staten Island: 8.5%"));
    }

    #[test]
    fn composition_cells_use_band_colors() {
        let buffer = draw(&App::new(Section::Composition));
        let very_high = Color::Rgb(220, 38, 38);
        assert!(buffer
            .content
            .iter()
            .any(|cell| cell.bg == very_high && cell.symbol() == "1"));
        let screen = text(&buffer);
        assert!(screen.contains("Staten Is."));
        assert!(screen.contains("Very High"));
    }

    #[test]
    fn focused_bar_shows_tooltip() {
        let mut app = App::new(Section::Frequency);
        app.focus_next();
        app.focus_next();
        let screen = text(&draw(&app));
        assert!(screen.contains("Manhattan: Count: 28"));
    }

    #[test]
    fn help_popup_overlays_the_dashboard() {
        let mut app = App::new(Section::Summary);
        app.show_help = true;
        let screen = text(&draw(&app));
        assert!(screen.contains("Help & Keyboard Shortcuts"));
        assert!(screen.contains("Quick jump by section name"));
    }

    #[test]
    fn long_subtitle_wraps_instead_of_clipping() {
        let app = App::new(Section::Composition);
        let screen = text(&draw_sized(&app, 64, 80));
        assert!(screen.contains("frequencies"), "{screen}");
        assert!(screen.contains("vary"), "subtitle tail clipped:\n{screen}");
    }
}
