use crate::dataset::Rgb;
use serde::Serialize;

/// Severity band for a composition grid cell, ordered from least to most severe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Intensity {
    Low,
    Medium,
    High,
    VeryHigh,
}

/// Whether text drawn on top of a band color should be light or dark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TextContrast {
    Light,
    Dark,
}

impl Intensity {
    /// Legend order.
    pub const ALL: [Self; 4] = [Self::Low, Self::Medium, Self::High, Self::VeryHigh];

    pub const fn classify(count: u32) -> Self {
        match count {
            9.. => Self::VeryHigh,
            7..=8 => Self::High,
            5..=6 => Self::Medium,
            _ => Self::Low,
        }
    }

    pub const fn color(self) -> Rgb {
        match self {
            Self::Low => Rgb(0xd1, 0xd5, 0xdb),
            Self::Medium => Rgb(0xfb, 0xbf, 0x24),
            Self::High => Rgb(0xf5, 0x9e, 0x0b),
            Self::VeryHigh => Rgb(0xdc, 0x26, 0x26),
        }
    }

    pub const fn text_contrast(self) -> TextContrast {
        match self {
            Self::High | Self::VeryHigh => TextContrast::Light,
            Self::Low | Self::Medium => TextContrast::Dark,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
            Self::VeryHigh => "Very High",
        }
    }
}

impl TextContrast {
    pub const fn color(self) -> Rgb {
        match self {
            Self::Light => Rgb(0xff, 0xff, 0xff),
            Self::Dark => Rgb(0x37, 0x41, 0x51),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn band_boundaries() {
        assert_eq!(Intensity::classify(9), Intensity::VeryHigh);
        assert_eq!(Intensity::classify(8), Intensity::High);
        assert_eq!(Intensity::classify(7), Intensity::High);
        assert_eq!(Intensity::classify(6), Intensity::Medium);
        assert_eq!(Intensity::classify(5), Intensity::Medium);
        assert_eq!(Intensity::classify(4), Intensity::Low);
        assert_eq!(Intensity::classify(0), Intensity::Low);
        assert_eq!(Intensity::classify(u32::MAX), Intensity::VeryHigh);
    }

    #[test]
    fn severity_never_drops_as_count_grows() {
        let mut previous = Intensity::classify(0);
        for count in 1..=20 {
            let current = Intensity::classify(count);
            assert!(current >= previous, "{count} dropped to {current:?}");
            previous = current;
        }
    }

    #[test]
    fn light_text_from_seven_up() {
        assert_eq!(Intensity::classify(6).text_contrast(), TextContrast::Dark);
        assert_eq!(Intensity::classify(7).text_contrast(), TextContrast::Light);
        assert_eq!(Intensity::classify(10).text_contrast(), TextContrast::Light);
        assert_eq!(Intensity::VeryHigh.color().to_string(), "#dc2626");
    }
}
