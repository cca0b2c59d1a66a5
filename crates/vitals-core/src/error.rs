//! Error type shared across the workspace.

/// Errors surfaced outside the widgets themselves.
///
/// Widgets never fail: bad input degrades to an absent or `Invalid`
/// result. These variants exist for the one-shot CLI path and for the
/// terminal lifecycle.
#[derive(Debug, thiserror::Error)]
pub enum VitalsError {
    /// A glucose reading was empty or not a number.
    #[error("invalid glucose reading: {0:?}")]
    InvalidReading(String),

    /// Weight or height was missing, zero, or not a number.
    #[error("weight and height must both be non-zero numbers")]
    IncompleteBmi,

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),

    /// Terminal I/O failed.
    #[error("terminal error: {0}")]
    Terminal(#[from] std::io::Error),
}
