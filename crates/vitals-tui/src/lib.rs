//! # vitals-tui
//!
//! Interactive wellness dashboard using ratatui with Elm architecture.

pub mod bmi_view;
pub mod cards;
pub mod fields;
pub mod footer;
pub mod glucose_view;
pub mod header;
pub mod keymap;
pub mod medication_view;
pub mod messages;
pub mod modal;
pub mod model;
pub mod steps_view;
pub mod styles;
pub mod water_view;

pub use keymap::{InputMode, KeyAction};
pub use messages::TuiMessage;
pub use model::TuiApp;
