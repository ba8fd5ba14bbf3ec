mod settings;

pub use settings::{ConfigError, DashboardConfig, DEFAULT_POLL_MS};
