//! Water intake counter.

use tracing::debug;

use crate::constants::WATER_RECOMMENDED_GLASSES;

/// Glasses drunk during the current modal session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WaterCounter {
    glasses: u32,
}

impl WaterCounter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn glasses(self) -> u32 {
        self.glasses
    }

    pub fn increment(&mut self) {
        self.glasses = self.glasses.saturating_add(1);
        debug!(glasses = self.glasses, "water glass added");
    }

    pub fn reset(&mut self) {
        self.glasses = 0;
        debug!("water counter reset");
    }

    #[must_use]
    pub fn display(self) -> String {
        format!("{} glasses", self.glasses)
    }
}

/// Informational reminder line.
#[must_use]
pub fn recommendation() -> String {
    let (low, high) = WATER_RECOMMENDED_GLASSES;
    format!("Drink {low}-{high} glasses a day")
}
