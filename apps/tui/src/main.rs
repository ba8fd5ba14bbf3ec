use clap::Parser;
use color_eyre::Result;
use offense_dashboard::app::App;
use offense_dashboard::cli::CliArgs;
use offense_dashboard::config::DashboardConfig;
use offense_dashboard::{event, logging, terminal};
use tracing::info;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Setup error handling
    color_eyre::install()?;

    let args = CliArgs::parse();
    let config = DashboardConfig::from_env(|key| args.env_override(key))?;
    let headless = args.headless || !is_terminal();
    logging::init_tracing(&config, headless)?;

    if headless {
        return event::run_headless(&config, args.all, args.json);
    }

    info!(section = %config.start_section, "starting dashboard");
    let mut app = App::new(config.start_section);

    let mut terminal = terminal::setup_terminal()?;
    let result = event::run(&mut terminal, &mut app, config.poll_interval).await;

    // Restore the terminal even when the loop failed
    terminal::cleanup_terminal_state(true, true);

    result
}

// Check if we're running in a terminal
fn is_terminal() -> bool {
    atty::is(atty::Stream::Stdout)
}
