//! Dashboard coordinator: which tool is open, plus the shared step count.

use tracing::debug;

use crate::bmi::BmiForm;
use crate::glucose::GlucoseForm;
use crate::medication::MedicationForm;
use crate::steps::StepCounter;
use crate::tool::ToolKind;
use crate::water::WaterCounter;

/// State of the tool whose modal is open.
///
/// Built fresh when the modal opens and dropped when it closes. The step
/// counter is the exception: it lives on [`Dashboard`] so the steps
/// session carries no state of its own.
#[derive(Debug, Clone, PartialEq)]
pub enum ToolSession {
    BloodSugar(GlucoseForm),
    Bmi(BmiForm),
    Medication(MedicationForm),
    Steps,
    Water(WaterCounter),
}

impl ToolSession {
    /// Fresh state for a tool.
    #[must_use]
    pub fn open(kind: ToolKind) -> Self {
        match kind {
            ToolKind::BloodSugar => Self::BloodSugar(GlucoseForm::new()),
            ToolKind::Bmi => Self::Bmi(BmiForm::new()),
            ToolKind::Medication => Self::Medication(MedicationForm::new()),
            ToolKind::Steps => Self::Steps,
            ToolKind::Water => Self::Water(WaterCounter::new()),
        }
    }

    #[must_use]
    pub fn kind(&self) -> ToolKind {
        match self {
            Self::BloodSugar(_) => ToolKind::BloodSugar,
            Self::Bmi(_) => ToolKind::Bmi,
            Self::Medication(_) => ToolKind::Medication,
            Self::Steps => ToolKind::Steps,
            Self::Water(_) => ToolKind::Water,
        }
    }
}

/// Root state of the dashboard.
#[derive(Debug, Clone, PartialEq)]
pub struct Dashboard {
    active: Option<ToolSession>,
    steps: StepCounter,
}

impl Dashboard {
    /// Dashboard with no tool open and the default step seed.
    #[must_use]
    pub fn new() -> Self {
        Self::with_steps(StepCounter::default())
    }

    #[must_use]
    pub fn with_steps(steps: StepCounter) -> Self {
        Self {
            active: None,
            steps,
        }
    }

    /// Tool whose modal is open, if any.
    #[must_use]
    pub fn active_tool(&self) -> Option<ToolKind> {
        self.active.as_ref().map(ToolSession::kind)
    }

    #[must_use]
    pub fn session(&self) -> Option<&ToolSession> {
        self.active.as_ref()
    }

    pub fn session_mut(&mut self) -> Option<&mut ToolSession> {
        self.active.as_mut()
    }

    /// Whether the modal for `kind` is open.
    #[must_use]
    pub fn is_open(&self, kind: ToolKind) -> bool {
        self.active_tool() == Some(kind)
    }

    #[must_use]
    pub fn steps(&self) -> StepCounter {
        self.steps
    }

    pub fn steps_mut(&mut self) -> &mut StepCounter {
        &mut self.steps
    }

    /// Open the modal for `kind`, closing whichever one was open.
    ///
    /// Selecting the tool that is already open keeps its session.
    pub fn select_tool(&mut self, kind: ToolKind) {
        if self.is_open(kind) {
            return;
        }
        debug!(tool = ?kind, previous = ?self.active_tool(), "tool selected");
        self.active = Some(ToolSession::open(kind));
    }

    /// Close the open modal, discarding its session.
    pub fn close_tool(&mut self) {
        if let Some(session) = self.active.take() {
            debug!(tool = ?session.kind(), "tool closed");
        }
    }
}

impl Default for Dashboard {
    fn default() -> Self {
        Self::new()
    }
}
