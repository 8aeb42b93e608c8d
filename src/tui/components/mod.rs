//! # TUI Components
//!
//! This module contains all UI components for the terminal interface.
//!
//! ## Component Architecture
//!
//! Components in this directory follow two patterns:
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! Simple display components rebuilt from app state every frame:
//! - `TitleBar`: Top status line showing app name and status
//! - `Display`: The calculator screen, rendering the expression string
//!
//! ### Stateful Components (Event-Driven)
//!
//! Components that manage local state and emit events:
//! - `Keypad`: The button grid, with hover tracking, press flash, and
//!   mouse hit-testing
//!
//! ## Co-location of Concerns
//!
//! Each component file contains everything related to that component:
//! state types, rendering logic, event handling, and tests. You can read
//! one file to understand how a component works.
//!
//! ## Module Structure
//!
//! ```text
//! components/
//! ├── mod.rs           (this file)
//! ├── title_bar.rs     (Top status line)
//! ├── display.rs       (Calculator screen)
//! └── keypad.rs        (Button grid)
//! ```

pub mod display;
pub mod keypad;
pub mod title_bar;

pub use display::Display;
pub use keypad::{Keypad, PadKey};
pub use title_bar::TitleBar;
