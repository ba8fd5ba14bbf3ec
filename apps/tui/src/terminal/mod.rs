mod setup;

pub use setup::{cleanup_terminal_state, setup_terminal, DashboardTerminal, TerminalError};
