//! Application module
//!
//! Contains the comparison state and its operations, split into:
//! - `state`: App struct and tree accessors
//! - `refresh`: reloading the tree and switching the base reference
//! - `events`: change notifications for subscribers

mod events;
mod refresh;
mod state;

pub use events::AppEvent;
pub use state::App;
