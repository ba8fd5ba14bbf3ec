use offense_dashboard_core::RichText;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

/// Runs become spans; strong runs are bolded on top of `base`.
pub fn rich_spans(text: &RichText, base: Style) -> Vec<Span<'static>> {
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
        .collect()
}

pub fn rich_line(text: &RichText, base: Style) -> Line<'static> {
    Line::from(rich_spans(text, base))
}

/// Rows `text` needs when word-wrapped into `width` columns.
pub fn wrapped_height(text: &str, width: u16) -> u16 {
    let width = usize::from(width.max(1));
    let mut lines = 1_usize;
    let mut current = 0_usize;

    for word in text.split_whitespace() {
        let len = word.chars().count();
        if current == 0 {
            current = len;
        } else if current + 1 + len <= width {
            current += 1 + len;
        } else {
            lines += 1;
            current = len;
        }
        // Words longer than a row are split
        while current > width {
            lines += 1;
            current -= width;
        }
    }

    u16::try_from(lines).unwrap_or(u16::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wraps_on_word_boundaries() {
        assert_eq!(wrapped_height("", 10), 1);
        assert_eq!(wrapped_height("short", 10), 1);
        assert_eq!(wrapped_height("one two three", 7), 2);
        assert_eq!(wrapped_height("one two three", 5), 3);
        assert_eq!(wrapped_height("abcdefghij", 4), 3);
    }

    #[test]
    fn strong_runs_are_bold() {
        let text = RichText::new().text("a ").strong("b");
        let spans = rich_spans(&text, Style::default());
        assert!(!spans[0].style.add_modifier.contains(Modifier::BOLD));
        assert!(spans[1].style.add_modifier.contains(Modifier::BOLD));
    }
}
