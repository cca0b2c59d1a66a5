//! # vitals-core
//!
//! Wellness tool logic for the Vitals dashboard: glucose and BMI
//! evaluators, the medication, step and water counters, and the
//! [`Dashboard`](coordinator::Dashboard) that decides which tool is open.

pub mod bmi;
pub mod constants;
pub mod coordinator;
pub mod error;
pub mod glucose;
pub mod interfaces;
pub mod medication;
pub mod steps;
pub mod text;
pub mod tool;
pub mod water;

pub use coordinator::{Dashboard, ToolSession};
pub use error::VitalsError;
pub use tool::{ToolKind, CARDS};
