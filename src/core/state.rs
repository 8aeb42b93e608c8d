//! # Application State
//!
//! Core business state for reckon. This module contains domain state only -
//! no TUI-specific types. Presentation state (hover, button flash) lives in
//! the `tui` module.
//!
//! ```text
//! App
//! ├── engine: Engine            // calculator registers + display string
//! └── status_message: String    // title bar text
//! ```
//!
//! State changes only happen through `update(app, action)` in action.rs.
//! This keeps things predictable, so no surprise mutations.

use crate::core::engine::Engine;

pub struct App {
    pub engine: Engine,
    pub status_message: String,
}

impl App {
    pub fn new() -> Self {
        Self {
            engine: Engine::new(),
            status_message: String::from("Ready"),
        }
    }
}
