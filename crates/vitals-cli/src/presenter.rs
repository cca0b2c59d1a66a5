//! CLI result presenter.

use tracing::debug;

use vitals_core::bmi::{BmiCategory, BmiResult};
use vitals_core::glucose::GlucoseClassification;
use vitals_core::interfaces::ResultPresenter;

use crate::output::{format_bmi, format_bmi_quiet, format_glucose};
use crate::ui::{print_header, print_result, Tone};

/// CLI result presenter.
pub struct CLIResultPresenter {
    quiet: bool,
}

impl CLIResultPresenter {
    #[must_use]
    pub fn new(quiet: bool) -> Self {
        Self { quiet }
    }
}

fn glucose_tone(classification: GlucoseClassification) -> Tone {
    match classification {
        GlucoseClassification::Normal => Tone::Ok,
        _ => Tone::Attention,
    }
}

fn bmi_tone(category: BmiCategory) -> Tone {
    match category {
        BmiCategory::Normal => Tone::Ok,
        _ => Tone::Attention,
    }
}

impl ResultPresenter for CLIResultPresenter {
    fn present_glucose(&self, reading: &str, classification: GlucoseClassification) {
        debug!(reading, ?classification, "presenting glucose");
        if self.quiet {
            println!("{}", classification.label());
            return;
        }
        print_header("Blood sugar");
        print_result(
            &format_glucose(reading, classification),
            glucose_tone(classification),
        );
    }

    fn present_bmi(&self, weight_kg: f64, height_cm: f64, result: &BmiResult) {
        debug!(weight_kg, height_cm, index = result.index, "presenting bmi");
        if self.quiet {
            println!("{}", format_bmi_quiet(result));
            return;
        }
        print_header("BMI");
        print_result(
            &format_bmi(weight_kg, height_cm, result),
            bmi_tone(result.category),
        );
    }
}
