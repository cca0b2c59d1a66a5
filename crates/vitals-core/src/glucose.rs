//! Blood-sugar check.

use std::fmt;

use tracing::debug;

use crate::constants::{GLUCOSE_HIGH_THRESHOLD, GLUCOSE_LOW_THRESHOLD};
use crate::text::{parse_number, TextField};

/// Classification of a single glucose reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GlucoseClassification {
    /// Below 70 mg/dL.
    Low,
    /// 70 to 180 mg/dL inclusive.
    Normal,
    /// Above 180 mg/dL.
    High,
    /// The reading was not a number.
    Invalid,
}

impl GlucoseClassification {
    /// Message shown to the user.
    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            Self::Low => "Low glucose (hypoglycemia).",
            Self::Normal => "Normal glucose level.",
            Self::High => "High glucose (hyperglycemia).",
            Self::Invalid => "Enter a numeric reading in mg/dL.",
        }
    }

    /// Short label for compact output.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Normal => "normal",
            Self::High => "high",
            Self::Invalid => "invalid",
        }
    }
}

impl fmt::Display for GlucoseClassification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Classify a reading in mg/dL. Both thresholds belong to `Normal`.
#[must_use]
pub fn classify(mg_dl: f64) -> GlucoseClassification {
    if mg_dl.is_nan() {
        GlucoseClassification::Invalid
    } else if mg_dl < GLUCOSE_LOW_THRESHOLD {
        GlucoseClassification::Low
    } else if mg_dl > GLUCOSE_HIGH_THRESHOLD {
        GlucoseClassification::High
    } else {
        GlucoseClassification::Normal
    }
}

/// Evaluate raw form input. An empty string yields no message at all.
#[must_use]
pub fn evaluate_input(raw: &str) -> Option<GlucoseClassification> {
    if raw.is_empty() {
        return None;
    }
    Some(classify(parse_number(raw)))
}

/// Form state of the blood-sugar modal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlucoseForm {
    pub level: TextField,
    result: Option<GlucoseClassification>,
}

impl GlucoseForm {
    #[must_use]
    pub fn new() -> Self {
        Self {
            level: TextField::numeric(),
            result: None,
        }
    }

    /// Last evaluated classification, `None` when no message is shown.
    #[must_use]
    pub fn result(&self) -> Option<GlucoseClassification> {
        self.result
    }

    /// Evaluate the current input (form submit).
    pub fn evaluate(&mut self) -> Option<GlucoseClassification> {
        self.result = evaluate_input(self.level.value());
        debug!(input = self.level.value(), result = ?self.result, "glucose evaluated");
        self.result
    }
}

impl Default for GlucoseForm {
    fn default() -> Self {
        Self::new()
    }
}
