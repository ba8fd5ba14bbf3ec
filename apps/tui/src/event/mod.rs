mod loop_handler;

pub use loop_handler::{render_headless, run, run_headless};
