//! UI state types for the TUI layer.
//!
//! Pure data types with no IO and no ratatui dependency. Used by the engine
//! (state ownership) and the tui crate (rendering/input).

mod island;
mod morph;
mod view_state;

pub use island::{IslandConfig, IslandState};
pub use morph::MorphEffect;
pub use view_state::{UiOptions, ViewState};
