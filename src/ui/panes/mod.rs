//! TUI pane rendering modules
//!
//! One stateless `render_*` function per visible pane:
//!
//! - [`menu`]: the operation menu
//! - [`input`]: the prompt and input buffer for entry modes
//! - [`output`]: the session transcript
//! - [`history`]: persisted calculation records with per-operation totals
//! - [`status`]: status bar with the mode badge and keybind hints
//!
//! Panes receive their data and scroll offsets from [`App`], render into the
//! given area, and hold no state of their own.
//!
//! [`App`]: crate::ui::app::App

pub mod history;
pub mod input;
pub mod menu;
pub mod output;
pub mod status;

// Re-export render functions for convenience
pub use history::render_history_pane;
pub use input::render_input_pane;
pub use menu::render_menu_pane;
pub use output::render_output_pane;
pub use status::render_status_bar;
