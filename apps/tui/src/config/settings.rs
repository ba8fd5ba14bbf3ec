use dotenv::dotenv;
use offense_dashboard_core::Section;
use std::env;
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

pub const DEFAULT_POLL_MS: u64 = 50;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("unknown section id `{0}` in DASHBOARD_SECTION")]
    UnknownSection(String),

    #[error("invalid DASHBOARD_POLL_MS value `{0}`: expected a positive number of milliseconds")]
    InvalidPollInterval(String),
}

/// Runtime settings, resolved from `.env`, the environment and CLI overrides.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardConfig {
    pub start_section: Section,
    pub log_file: Option<PathBuf>,
    pub poll_interval: Duration,
    pub debug: bool,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            start_section: Section::Summary,
            log_file: None,
            poll_interval: Duration::from_millis(DEFAULT_POLL_MS),
            debug: false,
        }
    }
}

impl DashboardConfig {
    /// Loads `.env` (if present) and reads the process environment, with
    /// `overrides` taking precedence key by key.
    pub fn from_env(overrides: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        dotenv().ok();
        Self::from_layers(overrides, |key| env::var(key).ok())
    }

    pub fn from_layers(
        overrides: impl Fn(&str) -> Option<String>,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        Self::from_lookup(|key| overrides(key).or_else(|| lookup(key)))
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(id) = lookup("DASHBOARD_SECTION").filter(|value| !value.trim().is_empty()) {
            config.start_section =
                Section::parse(id.trim()).ok_or(ConfigError::UnknownSection(id))?;
        }

        if let Some(path) = lookup("DASHBOARD_LOG").filter(|value| !value.trim().is_empty()) {
            config.log_file = Some(PathBuf::from(path));
        }

        if let Some(raw) = lookup("DASHBOARD_POLL_MS") {
            let millis = raw
                .trim()
                .parse::<u64>()
                .ok()
                .filter(|millis| *millis > 0)
                .ok_or_else(|| ConfigError::InvalidPollInterval(raw.clone()))?;
            config.poll_interval = Duration::from_millis(millis);
        }

        config.debug = lookup("DEBUG").is_some_and(|value| is_truthy(&value));

        Ok(config)
    }
}

fn is_truthy(value: &str) -> bool {
    !matches!(
        value.trim().to_lowercase().as_str(),
        "" | "0" | "false" | "no" | "off"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(key, value)| ((*key).to_string(), (*value).to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        assert_eq!(DashboardConfig::from_lookup(lookup(&[])), Ok(DashboardConfig::default()));
    }

    #[test]
    fn reads_every_variable() {
        let config = DashboardConfig::from_lookup(lookup(&[
            ("DASHBOARD_SECTION", "statistics"),
            ("DASHBOARD_LOG", "dashboard.log"),
            ("DASHBOARD_POLL_MS", "125"),
            ("DEBUG", "1"),
        ]));
        assert_eq!(
            config,
            Ok(DashboardConfig {
                start_section: Section::Statistics,
                log_file: Some(PathBuf::from("dashboard.log")),
                poll_interval: Duration::from_millis(125),
                debug: true,
            })
        );
    }

    #[test]
    fn rejects_bad_values() {
        assert_eq!(
            DashboardConfig::from_lookup(lookup(&[("DASHBOARD_SECTION", "settings")])),
            Err(ConfigError::UnknownSection("settings".to_string()))
        );
        assert_eq!(
            DashboardConfig::from_lookup(lookup(&[("DASHBOARD_POLL_MS", "0")])),
            Err(ConfigError::InvalidPollInterval("0".to_string()))
        );
    }

    #[test]
    fn debug_flag_accepts_common_spellings() {
        for (value, expected) in [("true", true), ("0", false), ("off", false), ("yes", true)] {
            let config = DashboardConfig::from_lookup(lookup(&[("DEBUG", value)]));
            assert_eq!(config.map(|config| config.debug), Ok(expected), "DEBUG={value}");
        }
    }
}
