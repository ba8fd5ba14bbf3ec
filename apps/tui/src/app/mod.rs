// App module for the offense dashboard
// Holds UI state and keyboard handling

pub mod input;
pub mod jump;
pub mod state;

pub use input::handle_input;
pub use state::App;
