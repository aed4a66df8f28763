use haven_model::{Position, SosAlertRequest};

/// The SOS flow, one invocation at a time.
///
/// `Confirming` and `ManualEntry` own the modal input buffers;
/// `Submitting` owns the payload for the in-flight request, which is
/// discarded when the request resolves.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum SosFlow {
    #[default]
    Idle,
    Locating,
    Confirming {
        position: Position,
        message_input: String,
    },
    ManualEntry {
        location_input: String,
        message_input: String,
    },
    Submitting {
        request: SosAlertRequest,
    },
}

impl SosFlow {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Idle => "Idle",
            Self::Locating => "Locating",
            Self::Confirming { .. } => "Confirming",
            Self::ManualEntry { .. } => "ManualEntry",
            Self::Submitting { .. } => "Submitting",
        }
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }
}
