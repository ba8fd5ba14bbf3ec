use crate::ui::widgets::palette::{ACCENT, KEY, MUTED};
use crate::ui::widgets::popup::centered_rect;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line as TextLine, Span, Text};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

const SHORTCUTS: [(&str, &str); 9] = [
    ("←/→, h/l", "Previous / next section"),
    ("1-6", "Jump to section by position"),
    ("↑/↓, j/k", "Scroll the panel"),
    ("PgUp/PgDn, Home", "Scroll by page / back to top"),
    ("Tab, Shift+Tab", "Focus chart data and show its tooltip"),
    ("/", "Quick jump by section name"),
    ("F1, ?", "Toggle this help"),
    ("Esc", "Close popup / quit"),
    ("q, Ctrl+C", "Quit"),
];

pub fn render_help_popup(f: &mut Frame<'_>) {
    let popup_area = centered_rect(70, 70, f.area());
    f.render_widget(Clear, popup_area);

    let help_block = Block::default()
        .title("== Help & Keyboard Shortcuts ==")
        .title_style(Style::default().fg(KEY).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(KEY));

    let help_paragraph = Paragraph::new(Text::from(build_help_lines()))
        .block(help_block)
        .wrap(Wrap { trim: true });
    f.render_widget(help_paragraph, popup_area);

    let hint = Paragraph::new(TextLine::from(Span::styled(
        "Press ? or Esc to close",
        Style::default().fg(MUTED),
    )))
    .alignment(Alignment::Center);
    let hint_area = Rect {
        x: popup_area.x,
        y: popup_area.y + popup_area.height.saturating_sub(2),
        width: popup_area.width,
        height: 1,
    };
    f.render_widget(hint, hint_area);
}

fn build_help_lines() -> Vec<TextLine<'static>> {
    let mut lines = vec![
        TextLine::from(Span::styled(
            "NYC Offense Exposure Analysis",
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        )),
        TextLine::from(""),
        TextLine::from(
            "Six views of a 94-record subset of NYC offense data, from the executive summary to \
             the health tech implications.",
        ),
        TextLine::from(""),
        TextLine::from(Span::styled(
            "Keyboard Shortcuts:",
            Style::default().add_modifier(Modifier::BOLD),
        )),
    ];
    lines.extend(SHORTCUTS.iter().map(|(keys, action)| {
        TextLine::from(vec![
            Span::styled(
                format!("  {keys:<18}"),
                Style::default().fg(KEY).add_modifier(Modifier::BOLD),
            ),
            Span::raw(*action),
        ])
    }));
    lines
}
