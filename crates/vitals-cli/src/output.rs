//! CLI output formatting.

use vitals_core::bmi::BmiResult;
use vitals_core::glucose::GlucoseClassification;

/// Format a number without a trailing `.0` for whole values.
#[must_use]
pub fn format_measure(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{value:.0}")
    } else {
        format!("{value}")
    }
}

/// Full line for a glucose evaluation.
#[must_use]
pub fn format_glucose(reading: &str, classification: GlucoseClassification) -> String {
    format!("{} mg/dL: {}", reading.trim(), classification.message())
}

/// Full line for a BMI evaluation.
#[must_use]
pub fn format_bmi(weight_kg: f64, height_cm: f64, result: &BmiResult) -> String {
    format!(
        "{} kg, {} cm -> {result}",
        format_measure(weight_kg),
        format_measure(height_cm)
    )
}

/// Bare BMI value for quiet mode, e.g. `22.9 Normal`.
#[must_use]
pub fn format_bmi_quiet(result: &BmiResult) -> String {
    format!("{:.1} {}", result.index, result.category.label())
}
