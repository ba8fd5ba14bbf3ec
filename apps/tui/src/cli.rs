use clap::Parser;
use offense_dashboard_core::Section;

#[derive(Debug, Parser)]
#[command(name = "offense_dashboard", version, about = "NYC offense exposure dashboard")]
pub struct CliArgs {
    /// Section to open first (summary, dataset, frequency, composition, statistics, implications)
    #[arg(long, value_name = "ID", value_parser = parse_section)]
    pub section: Option<Section>,

    /// Print the section as text and exit
    #[arg(long)]
    pub headless: bool,

    /// Print headless output as JSON
    #[arg(long)]
    pub json: bool,

    /// Print every section in headless mode
    #[arg(long)]
    pub all: bool,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,

    /// Write logs to this file
    #[arg(long = "log-file", value_name = "PATH")]
    pub log_file: Option<String>,
}

impl CliArgs {
    /// Value a flag sets for the environment key it overrides, if given.
    pub fn env_override(&self, key: &str) -> Option<String> {
        match key {
            "DASHBOARD_SECTION" => self.section.map(|section| section.id().to_string()),
            "DASHBOARD_LOG" => self.log_file.clone(),
            "DEBUG" => self.debug.then(|| "1".to_string()),
            _ => None,
        }
    }
}

fn parse_section(value: &str) -> Result<Section, String> {
    Section::parse(value).ok_or_else(|| {
        let known = Section::ALL.map(Section::id).join(", ");
        format!("unknown section `{value}` (expected one of: {known})")
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DashboardConfig;
    use std::path::PathBuf;

    #[test]
    fn parses_section_and_flags() -> Result<(), clap::Error> {
        let args = CliArgs::try_parse_from([
            "offense_dashboard",
            "--section",
            "composition",
            "--headless",
            "--json",
        ])?;
        assert_eq!(args.section, Some(Section::Composition));
        assert!(args.headless);
        assert!(args.json);
        assert!(!args.all);
        Ok(())
    }

    #[test]
    fn rejects_unknown_section() {
        let result = CliArgs::try_parse_from(["offense_dashboard", "--section", "settings"]);
        assert!(result.is_err());
    }

    #[test]
    fn flags_win_over_environment_values() -> Result<(), Box<dyn std::error::Error>> {
        let args = CliArgs::try_parse_from([
            "offense_dashboard",
            "--section",
            "statistics",
            "--debug",
            "--log-file",
            "cli.log",
        ])?;
        let env = |key: &str| match key {
            "DASHBOARD_SECTION" => Some("summary".to_string()),
            "DASHBOARD_LOG" => Some("env.log".to_string()),
            "DEBUG" => Some("0".to_string()),
            _ => None,
        };
        let config = DashboardConfig::from_layers(|key| args.env_override(key), env)?;
        assert_eq!(config.start_section, Section::Statistics);
        assert_eq!(config.log_file, Some(PathBuf::from("cli.log")));
        assert!(config.debug);
        Ok(())
    }

    #[test]
    fn absent_flags_leave_the_environment_in_charge() -> Result<(), Box<dyn std::error::Error>> {
        let args = CliArgs::try_parse_from(["offense_dashboard"])?;
        let env = |key: &str| (key == "DASHBOARD_SECTION").then(|| "frequency".to_string());
        let config = DashboardConfig::from_layers(|key| args.env_override(key), env)?;
        assert_eq!(config.start_section, Section::Frequency);
        assert!(!config.debug);
        Ok(())
    }
}
