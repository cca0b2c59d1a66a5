//! Thresholds, goals and seeds used by the wellness tools.

/// Readings strictly below this are hypoglycemic (mg/dL).
pub const GLUCOSE_LOW_THRESHOLD: f64 = 70.0;

/// Readings strictly above this are hyperglycemic (mg/dL).
pub const GLUCOSE_HIGH_THRESHOLD: f64 = 180.0;

/// Suggested input range for a glucose reading (mg/dL). Hint only.
pub const GLUCOSE_INPUT_RANGE: (u32, u32) = (20, 500);

/// BMI below this is underweight.
pub const BMI_UNDERWEIGHT_BELOW: f64 = 18.5;

/// BMI below this (and not underweight) is normal.
pub const BMI_NORMAL_BELOW: f64 = 25.0;

/// BMI below this (and not normal) is overweight. Everything else is obese.
pub const BMI_OVERWEIGHT_BELOW: f64 = 30.0;

/// Suggested minimum weight entry (kg). Hint only.
pub const BMI_MIN_WEIGHT_KG: u32 = 20;

/// Suggested minimum height entry (cm). Hint only.
pub const BMI_MIN_HEIGHT_CM: u32 = 80;

/// Daily step goal, informational.
pub const STEPS_GOAL: u32 = 3000;

/// Amount added or removed by one step-counter press.
pub const STEPS_INCREMENT: u32 = 10;

/// Step count shown when the dashboard starts.
pub const STEPS_SEED: u32 = 131;

/// Recommended glasses of water per day, informational.
pub const WATER_RECOMMENDED_GLASSES: (u32, u32) = (6, 8);

/// Process exit codes.
pub mod exit_codes {
    /// Successful execution.
    pub const SUCCESS: i32 = 0;
    /// Generic error.
    pub const ERROR_GENERIC: i32 = 1;
    /// A reading could not be evaluated.
    pub const ERROR_INVALID_READING: i32 = 2;
    /// Invalid configuration.
    pub const ERROR_CONFIG: i32 = 4;
}
