//! Body mass index calculator.

use std::fmt;

use tracing::debug;

use crate::constants::{BMI_NORMAL_BELOW, BMI_OVERWEIGHT_BELOW, BMI_UNDERWEIGHT_BELOW};
use crate::text::{parse_number, TextField};

/// BMI category. Each boundary belongs to the higher category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BmiCategory {
    Underweight,
    Normal,
    Overweight,
    Obese,
}

impl BmiCategory {
    /// Categorize a computed index.
    #[must_use]
    pub fn from_index(index: f64) -> Self {
        if index < BMI_UNDERWEIGHT_BELOW {
            Self::Underweight
        } else if index < BMI_NORMAL_BELOW {
            Self::Normal
        } else if index < BMI_OVERWEIGHT_BELOW {
            Self::Overweight
        } else {
            Self::Obese
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Underweight => "Underweight",
            Self::Normal => "Normal",
            Self::Overweight => "Overweight",
            Self::Obese => "Obese",
        }
    }
}

/// A computed index with its category.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BmiResult {
    pub index: f64,
    pub category: BmiCategory,
}

impl fmt::Display for BmiResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BMI: {:.1} ({})", self.index, self.category.label())
    }
}

/// Zero and NaN count as "no value", like an unset form field.
fn is_present(v: f64) -> bool {
    v != 0.0 && !v.is_nan()
}

/// Compute the BMI from weight in kilograms and height in centimeters.
///
/// Returns `None` when either value is zero or NaN.
#[must_use]
pub fn compute(weight_kg: f64, height_cm: f64) -> Option<BmiResult> {
    let height_m = height_cm / 100.0;
    if !is_present(weight_kg) || !is_present(height_m) {
        return None;
    }
    let index = weight_kg / (height_m * height_m);
    Some(BmiResult {
        index,
        category: BmiCategory::from_index(index),
    })
}

/// Evaluate raw form input.
#[must_use]
pub fn evaluate_input(weight: &str, height: &str) -> Option<BmiResult> {
    compute(parse_number(weight), parse_number(height))
}

/// Which BMI input has keyboard focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BmiField {
    Weight,
    Height,
}

/// Form state of the BMI modal.
#[derive(Debug, Clone, PartialEq)]
pub struct BmiForm {
    pub weight: TextField,
    pub height: TextField,
    focus: BmiField,
    result: Option<BmiResult>,
}

impl BmiForm {
    #[must_use]
    pub fn new() -> Self {
        Self {
            weight: TextField::numeric(),
            height: TextField::numeric(),
            focus: BmiField::Weight,
            result: None,
        }
    }

    #[must_use]
    pub fn result(&self) -> Option<BmiResult> {
        self.result
    }

    #[must_use]
    pub fn focus(&self) -> BmiField {
        self.focus
    }

    /// Move focus to the other input.
    pub fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            BmiField::Weight => BmiField::Height,
            BmiField::Height => BmiField::Weight,
        };
    }

    /// The input currently receiving keystrokes.
    pub fn focused_mut(&mut self) -> &mut TextField {
        match self.focus {
            BmiField::Weight => &mut self.weight,
            BmiField::Height => &mut self.height,
        }
    }

    /// Evaluate the current inputs (form submit).
    pub fn evaluate(&mut self) -> Option<BmiResult> {
        self.result = evaluate_input(self.weight.value(), self.height.value());
        debug!(
            weight = self.weight.value(),
            height = self.height.value(),
            result = ?self.result,
            "bmi evaluated"
        );
        self.result
    }
}

impl Default for BmiForm {
    fn default() -> Self {
        Self::new()
    }
}
