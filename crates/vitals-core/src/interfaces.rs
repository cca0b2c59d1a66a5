//! Presentation seam for one-shot evaluations.

use crate::bmi::BmiResult;
use crate::glucose::GlucoseClassification;

/// Trait for presenting evaluation results to the user.
pub trait ResultPresenter {
    /// Present a glucose classification for the given reading.
    fn present_glucose(&self, reading: &str, classification: GlucoseClassification);

    /// Present a computed BMI.
    fn present_bmi(&self, weight_kg: f64, height_cm: f64, result: &BmiResult);
}

/// Presenter that discards everything.
pub struct NullPresenter;

impl ResultPresenter for NullPresenter {
    fn present_glucose(&self, _reading: &str, _classification: GlucoseClassification) {}
    fn present_bmi(&self, _weight_kg: f64, _height_cm: f64, _result: &BmiResult) {}
}
