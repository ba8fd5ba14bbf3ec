use color_eyre::eyre::eyre;
use color_eyre::Result;
use crossterm::event::{self, Event, KeyEventKind};
use offense_dashboard_core::{Dashboard, Dataset, Panel, Section};
use ratatui::backend::Backend;
use ratatui::Terminal;
use std::time::Duration;
use tracing::{debug, info};

use crate::app::{handle_input, App};
use crate::config::DashboardConfig;
use crate::ui;

/// Run the application in headless mode (no UI)
pub fn run_headless(config: &DashboardConfig, all: bool, json: bool) -> Result<()> {
    let sections: Vec<Section> = if all {
        Section::ALL.to_vec()
    } else {
        vec![config.start_section]
    };
    info!(count = sections.len(), json, "rendering headless");
    println!("{}", render_headless(&sections, json)?);
    Ok(())
}

/// Plain text (sections separated by a blank line) or pretty JSON. A single
/// section serializes as one panel object, several as an array.
pub fn render_headless(sections: &[Section], json: bool) -> Result<String> {
    let data = Dataset::nyc();
    let panels: Vec<Panel> = sections
        .iter()
        .map(|section| Dashboard::starting_at(*section).render(&data))
        .collect();

    if json {
        let rendered = match panels.as_slice() {
            [panel] => serde_json::to_string_pretty(panel)?,
            _ => serde_json::to_string_pretty(&panels)?,
        };
        return Ok(rendered);
    }

    Ok(panels
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n"))
}

/// Run the main application event loop
pub async fn run<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    poll_interval: Duration,
) -> Result<()> {
    while app.running {
        terminal
            .draw(|f| ui::ui(app, f))
            .map_err(|e| eyre!("Terminal draw error: {e}"))?;

        match event::poll(Duration::ZERO) {
            Ok(true) => match event::read() {
                Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => {
                    debug!(code = ?key.code, section = %app.active(), "key");
                    handle_input(app, key);
                }
                // Resize and other events just trigger the next draw
                Ok(_) => {}
                Err(e) => return Err(eyre!("Failed to read terminal event: {e}")),
            },
            Ok(false) => tokio::time::sleep(poll_interval).await,
            Err(e) => return Err(eyre!("Failed to poll terminal events: {e}")),
        }
    }

    info!("dashboard closed");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn headless_text_matches_panel_display() -> Result<()> {
        let text = render_headless(&[Section::Statistics], false)?;
        assert_eq!(text, Section::Statistics.render(&Dataset::nyc()).to_string());
        assert!(text.starts_with("Statistical Context\n"));
        Ok(())
    }

    #[test]
    fn headless_all_covers_every_section() -> Result<()> {
        let text = render_headless(&Section::ALL, false)?;
        for section in Section::ALL {
            let title = section.render(&Dataset::nyc()).title;
            assert!(text.contains(&title), "missing {title}");
        }
        Ok(())
    }

    #[test]
    fn headless_json_shapes() -> Result<()> {
        let one: serde_json::Value =
            serde_json::from_str(&render_headless(&[Section::Composition], true)?)?;
        assert_eq!(one["section"], "composition");

        let all: serde_json::Value = serde_json::from_str(&render_headless(&Section::ALL, true)?)?;
        let Some(panels) = all.as_array() else {
            panic!("--all --json should print an array");
        };
        assert_eq!(panels.len(), 6);
        assert_eq!(panels[5]["section"], "implications");
        Ok(())
    }
}
