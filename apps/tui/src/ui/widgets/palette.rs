use offense_dashboard_core::{Rgb, TextContrast, Tone};
use ratatui::style::Color;

pub const ACCENT: Color = Color::Cyan;
pub const MUTED: Color = Color::Gray;
pub const KEY: Color = Color::Yellow;

pub const fn rgb(color: Rgb) -> Color {
    Color::Rgb(color.0, color.1, color.2)
}

pub const fn tone_color(tone: Tone) -> Color {
    match tone {
        Tone::Info => Color::Rgb(0x3b, 0x82, 0xf6),
        Tone::Success => Color::Rgb(0x10, 0xb9, 0x81),
        Tone::Warning => Color::Rgb(0xf5, 0x9e, 0x0b),
        Tone::Accent => Color::Rgb(0x8b, 0x5c, 0xf6),
        Tone::Danger => Color::Rgb(0xef, 0x44, 0x44),
        Tone::Neutral => MUTED,
    }
}

pub const fn contrast_color(contrast: TextContrast) -> Color {
    rgb(contrast.color())
}
