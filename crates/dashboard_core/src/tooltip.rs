use crate::dataset::Borough;
use serde::Serialize;

/// One bar or sector a user can focus. Borough charts fill `borough`, offense
/// charts fill `offense`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ChartDatum {
    pub borough: Option<Borough>,
    pub offense: Option<&'static str>,
    pub value: u32,
}

impl ChartDatum {
    pub const fn borough(borough: Borough, value: u32) -> Self {
        Self {
            borough: Some(borough),
            offense: None,
            value,
        }
    }

    pub const fn offense(offense: &'static str, value: u32) -> Self {
        Self {
            borough: None,
            offense: Some(offense),
            value,
        }
    }

    /// Axis label: the borough, else the offense, else empty.
    pub fn label(&self) -> &'static str {
        self.borough
            .map(Borough::label)
            .or(self.offense)
            .unwrap_or_default()
    }
}

pub fn format_tooltip(datum: &ChartDatum) -> String {
    let label = datum.borough.map(Borough::label).or(datum.offense);
    match label {
        Some(label) => format!("{label}: Count: {}", datum.value),
        None => format!("Count: {}", datum.value),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn borough_label_wins() {
        let datum = ChartDatum {
            borough: Some(Borough::Queens),
            offense: Some("Dangerous Drugs"),
            value: 18,
        };
        assert_eq!(format_tooltip(&datum), "Queens: Count: 18");
    }

    #[test]
    fn falls_back_to_offense_label() {
        let datum = ChartDatum::offense("Homicide-Negligent-Vehicle", 32);
        assert_eq!(format_tooltip(&datum), "Homicide-Negligent-Vehicle: Count: 32");
    }

    #[test]
    fn omits_label_when_neither_is_set() {
        let datum = ChartDatum {
            borough: None,
            offense: None,
            value: 7,
        };
        assert_eq!(format_tooltip(&datum), "Count: 7");
        assert_eq!(datum.label(), "");
    }
}
