use serde::{Serialize, Serializer};
use std::fmt;

/// The five NYC boroughs. Every table in the dataset is keyed on this enum, so
/// the borough set cannot drift between tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Borough {
    Brooklyn,
    Manhattan,
    Queens,
    Bronx,
    StatenIsland,
}

impl Borough {
    pub const ALL: [Self; 5] = [
        Self::Brooklyn,
        Self::Manhattan,
        Self::Queens,
        Self::Bronx,
        Self::StatenIsland,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            Self::Brooklyn => "Brooklyn",
            Self::Manhattan => "Manhattan",
            Self::Queens => "Queens",
            Self::Bronx => "Bronx",
            Self::StatenIsland => "Staten Island",
        }
    }

    /// Column header used where horizontal space is tight.
    pub const fn short_label(self) -> &'static str {
        match self {
            Self::StatenIsland => "Staten Is.",
            other => other.label(),
        }
    }

    /// Two-letter code for narrow column headers.
    pub const fn code(self) -> &'static str {
        match self {
            Self::Brooklyn => "BK",
            Self::Manhattan => "MN",
            Self::Queens => "QN",
            Self::Bronx => "BX",
            Self::StatenIsland => "SI",
        }
    }
}

impl fmt::Display for Borough {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Offense groupings used by the borough cross-tabulation. These are coarser
/// than the raw labels in [`OffenseTypeCount`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OffenseCategory {
    HomicideNegligent,
    VehicleRelated,
    DangerousDrugs,
}

impl OffenseCategory {
    pub const ALL: [Self; 3] = [
        Self::HomicideNegligent,
        Self::VehicleRelated,
        Self::DangerousDrugs,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            Self::HomicideNegligent => "Homicide-Negligent",
            Self::VehicleRelated => "Vehicle-Related",
            Self::DangerousDrugs => "Dangerous Drugs",
        }
    }
}

impl fmt::Display for OffenseCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A display color, rendered as `#rrggbb`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
    }
}

impl Serialize for Rgb {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BoroughCount {
    pub borough: Borough,
    pub count: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BoroughShare {
    pub borough: Borough,
    /// Relative weight; the chart normalizes against the sum of all shares.
    pub value: u32,
    pub color: Rgb,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct OffenseTypeCount {
    pub offense: &'static str,
    pub count: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CrossTabCell {
    pub borough: Borough,
    pub category: OffenseCategory,
    pub count: u32,
}

/// Chi-square test result for offense category × borough. Supplied with the
/// data, not recomputed from the cross-tab.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StatisticalSummary {
    pub chi_square: f64,
    pub degrees_of_freedom: u32,
    pub p_value: f64,
}

pub const DECLARED_TOTAL_RECORDS: u32 = 94;

pub const BOROUGH_COUNTS: [BoroughCount; 5] = [
    BoroughCount {
        borough: Borough::Brooklyn,
        count: 24,
    },
    BoroughCount {
        borough: Borough::Manhattan,
        count: 28,
    },
    BoroughCount {
        borough: Borough::Queens,
        count: 18,
    },
    BoroughCount {
        borough: Borough::Bronx,
        count: 16,
    },
    BoroughCount {
        borough: Borough::StatenIsland,
        count: 8,
    },
];

pub const BOROUGH_SHARES: [BoroughShare; 5] = [
    BoroughShare {
        borough: Borough::Brooklyn,
        value: 24,
        color: Rgb(0x3b, 0x82, 0xf6),
    },
    BoroughShare {
        borough: Borough::Manhattan,
        value: 28,
        color: Rgb(0xef, 0x44, 0x44),
    },
    BoroughShare {
        borough: Borough::Queens,
        value: 18,
        color: Rgb(0xf5, 0x9e, 0x0b),
    },
    BoroughShare {
        borough: Borough::Bronx,
        value: 16,
        color: Rgb(0x8b, 0x5c, 0xf6),
    },
    BoroughShare {
        borough: Borough::StatenIsland,
        value: 8,
        color: Rgb(0x6b, 0x72, 0x80),
    },
];

pub const OFFENSE_TYPE_COUNTS: [OffenseTypeCount; 3] = [
    OffenseTypeCount {
        offense: "Homicide-Negligent, Unclassified",
        count: 35,
    },
    OffenseTypeCount {
        offense: "Homicide-Negligent-Vehicle",
        count: 32,
    },
    OffenseTypeCount {
        offense: "Dangerous Drugs",
        count: 27,
    },
];

const fn cell(borough: Borough, category: OffenseCategory, count: u32) -> CrossTabCell {
    CrossTabCell {
        borough,
        category,
        count,
    }
}

pub const CROSS_TAB: [CrossTabCell; 15] = [
    cell(Borough::Brooklyn, OffenseCategory::HomicideNegligent, 8),
    cell(Borough::Manhattan, OffenseCategory::HomicideNegligent, 10),
    cell(Borough::Queens, OffenseCategory::HomicideNegligent, 7),
    cell(Borough::Bronx, OffenseCategory::HomicideNegligent, 6),
    cell(Borough::StatenIsland, OffenseCategory::HomicideNegligent, 4),
    cell(Borough::Brooklyn, OffenseCategory::VehicleRelated, 9),
    cell(Borough::Manhattan, OffenseCategory::VehicleRelated, 10),
    cell(Borough::Queens, OffenseCategory::VehicleRelated, 6),
    cell(Borough::Bronx, OffenseCategory::VehicleRelated, 5),
    cell(Borough::StatenIsland, OffenseCategory::VehicleRelated, 2),
    cell(Borough::Brooklyn, OffenseCategory::DangerousDrugs, 7),
    cell(Borough::Manhattan, OffenseCategory::DangerousDrugs, 8),
    cell(Borough::Queens, OffenseCategory::DangerousDrugs, 5),
    cell(Borough::Bronx, OffenseCategory::DangerousDrugs, 5),
    cell(Borough::StatenIsland, OffenseCategory::DangerousDrugs, 2),
];

pub const STATISTICAL_SUMMARY: StatisticalSummary = StatisticalSummary {
    chi_square: 5.844,
    degrees_of_freedom: 8,
    p_value: 0.665,
};

/// Something [`Dataset::check_consistency`] found wrong with a set of tables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConsistencyIssue {
    MissingBoroughCount(Borough),
    DuplicateBoroughCount(Borough),
    MissingBoroughShare(Borough),
    DuplicateBoroughShare(Borough),
    MissingCrossTabCell(Borough, OffenseCategory),
    DuplicateCrossTabCell(Borough, OffenseCategory),
    TotalMismatch { declared: u32, counted: u32 },
}

/// Read-only view over the five tables every panel draws from.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Dataset {
    pub borough_counts: &'static [BoroughCount],
    pub borough_shares: &'static [BoroughShare],
    pub offense_types: &'static [OffenseTypeCount],
    pub cross_tab: &'static [CrossTabCell],
    pub statistics: StatisticalSummary,
    pub declared_total: u32,
}

impl Dataset {
    /// The compiled-in NYC subset.
    pub const fn nyc() -> Self {
        Self {
            borough_counts: &BOROUGH_COUNTS,
            borough_shares: &BOROUGH_SHARES,
            offense_types: &OFFENSE_TYPE_COUNTS,
            cross_tab: &CROSS_TAB,
            statistics: STATISTICAL_SUMMARY,
            declared_total: DECLARED_TOTAL_RECORDS,
        }
    }

    /// Count for a borough/category pair. Pairs missing from the table count as zero.
    pub fn lookup_cross_tab(&self, borough: Borough, category: OffenseCategory) -> u32 {
        self.cross_tab
            .iter()
            .find(|cell| cell.borough == borough && cell.category == category)
            .map_or(0, |cell| cell.count)
    }

    pub fn total_records(&self) -> u32 {
        self.borough_counts.iter().map(|row| row.count).sum()
    }

    pub fn busiest(&self) -> Option<BoroughCount> {
        self.borough_counts.iter().copied().max_by_key(|row| row.count)
    }

    pub fn quietest(&self) -> Option<BoroughCount> {
        self.borough_counts.iter().copied().min_by_key(|row| row.count)
    }

    /// Ratio between the busiest and the quietest borough.
    pub fn exposure_ratio(&self) -> Option<f64> {
        let busiest = self.busiest()?;
        let quietest = self.quietest()?;
        if quietest.count == 0 {
            return None;
        }
        Some(f64::from(busiest.count) / f64::from(quietest.count))
    }

    /// `value` as a percentage of all share weights.
    pub fn share_percent(&self, value: u32) -> f64 {
        let total: u32 = self.borough_shares.iter().map(|share| share.value).sum();
        if total == 0 {
            return 0.0;
        }
        f64::from(value) / f64::from(total) * 100.0
    }

    pub fn check_consistency(&self) -> Vec<ConsistencyIssue> {
        let mut issues = Vec::new();

        for borough in Borough::ALL {
            match self.borough_counts.iter().filter(|row| row.borough == borough).count() {
                0 => issues.push(ConsistencyIssue::MissingBoroughCount(borough)),
                1 => {}
                _ => issues.push(ConsistencyIssue::DuplicateBoroughCount(borough)),
            }
            match self.borough_shares.iter().filter(|row| row.borough == borough).count() {
                0 => issues.push(ConsistencyIssue::MissingBoroughShare(borough)),
                1 => {}
                _ => issues.push(ConsistencyIssue::DuplicateBoroughShare(borough)),
            }
            for category in OffenseCategory::ALL {
                let matches = self
                    .cross_tab
                    .iter()
                    .filter(|cell| cell.borough == borough && cell.category == category)
                    .count();
                match matches {
                    0 => issues.push(ConsistencyIssue::MissingCrossTabCell(borough, category)),
                    1 => {}
                    _ => issues.push(ConsistencyIssue::DuplicateCrossTabCell(borough, category)),
                }
            }
        }

        let counted = self.total_records();
        if counted != self.declared_total {
            issues.push(ConsistencyIssue::TotalMismatch {
                declared: self.declared_total,
                counted,
            });
        }

        issues
    }
}

impl Default for Dataset {
    fn default() -> Self {
        Self::nyc()
    }
}
