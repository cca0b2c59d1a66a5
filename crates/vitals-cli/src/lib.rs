//! # vitals-cli
//!
//! Console output for one-shot evaluations, and shell completion.

pub mod completion;
pub mod output;
pub mod presenter;
pub mod ui;

pub use presenter::CLIResultPresenter;
