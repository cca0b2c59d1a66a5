//! The five wellness tools and the fixed card order.

use std::fmt;

/// Identifier of a wellness tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ToolKind {
    BloodSugar,
    Bmi,
    Medication,
    Steps,
    Water,
}

/// Cards in display order.
pub const CARDS: [ToolKind; 5] = [
    ToolKind::BloodSugar,
    ToolKind::Bmi,
    ToolKind::Medication,
    ToolKind::Steps,
    ToolKind::Water,
];

/// How keyboard input is interpreted while a tool's modal is open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputStyle {
    /// Typed characters go into a form field.
    Form,
    /// Single keys drive a counter.
    Counter,
}

impl ToolKind {
    /// Title shown on the card.
    #[must_use]
    pub fn card_title(self) -> &'static str {
        match self {
            Self::BloodSugar => "Blood sugar",
            Self::Bmi => "Calculate BMI",
            Self::Medication => "Medication reminder",
            Self::Steps => "Step counter",
            Self::Water => "Water reminder",
        }
    }

    /// Title shown on the modal.
    #[must_use]
    pub fn modal_title(self) -> &'static str {
        match self {
            Self::BloodSugar => "Blood sugar monitoring",
            Self::Bmi => "BMI calculator",
            Self::Medication => "Medication reminder",
            Self::Steps => "Step counter",
            Self::Water => "Water reminder",
        }
    }

    #[must_use]
    pub fn input_style(self) -> InputStyle {
        match self {
            Self::BloodSugar | Self::Bmi | Self::Medication => InputStyle::Form,
            Self::Steps | Self::Water => InputStyle::Counter,
        }
    }

    /// Zero-based position in [`CARDS`].
    #[must_use]
    pub fn card_index(self) -> usize {
        match self {
            Self::BloodSugar => 0,
            Self::Bmi => 1,
            Self::Medication => 2,
            Self::Steps => 3,
            Self::Water => 4,
        }
    }

    /// Tool at a zero-based card position.
    #[must_use]
    pub fn from_card_index(index: usize) -> Option<Self> {
        CARDS.get(index).copied()
    }
}

impl fmt::Display for ToolKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.card_title())
    }
}
