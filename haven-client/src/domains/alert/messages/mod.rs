use haven_model::{Position, SosAlertAck};

use crate::domains::alert::errors::{AlertError, LocationError};

#[derive(Clone)]
pub enum Message {
    /// Either SOS control was activated.
    SosPressed,

    /// Position acquisition finished for the given flow generation.
    LocationResolved {
        generation: u64,
        result: Result<Position, LocationError>,
    },

    // Confirmation modal
    ConfirmMessageChanged(String),
    ConfirmSend,

    // Manual-location modal
    ManualLocationChanged(String),
    ManualMessageChanged(String),
    ManualSend,

    /// Cancel from either modal, or a click on the manual modal backdrop.
    Cancel,

    /// Alert delivery finished for the given flow generation.
    SubmitResolved {
        generation: u64,
        result: Result<SosAlertAck, AlertError>,
    },
}

impl Message {
    pub fn name(&self) -> &'static str {
        match self {
            Self::SosPressed => "Sos::Pressed",
            Self::LocationResolved { .. } => "Sos::LocationResolved",
            Self::ConfirmMessageChanged(_) => "Sos::ConfirmMessageChanged",
            Self::ConfirmSend => "Sos::ConfirmSend",
            Self::ManualLocationChanged(_) => "Sos::ManualLocationChanged",
            Self::ManualMessageChanged(_) => "Sos::ManualMessageChanged",
            Self::ManualSend => "Sos::ManualSend",
            Self::Cancel => "Sos::Cancel",
            Self::SubmitResolved { .. } => "Sos::SubmitResolved",
        }
    }
}

impl std::fmt::Debug for Message {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::SosPressed => write!(f, "Sos::Pressed"),
            Self::LocationResolved { generation, result } => match result {
                Ok(position) => {
                    write!(f, "Sos::LocationResolved(gen={generation}, Ok: {position})")
                }
                Err(err) => {
                    write!(f, "Sos::LocationResolved(gen={generation}, Err: {err})")
                }
            },
            Self::ConfirmMessageChanged(_) => write!(f, "Sos::ConfirmMessageChanged"),
            Self::ConfirmSend => write!(f, "Sos::ConfirmSend"),
            Self::ManualLocationChanged(_) => write!(f, "Sos::ManualLocationChanged"),
            Self::ManualMessageChanged(_) => write!(f, "Sos::ManualMessageChanged"),
            Self::ManualSend => write!(f, "Sos::ManualSend"),
            Self::Cancel => write!(f, "Sos::Cancel"),
            Self::SubmitResolved { generation, result } => match result {
                Ok(ack) => {
                    write!(f, "Sos::SubmitResolved(gen={generation}, Ok: id={:?})", ack.id)
                }
                Err(err) => write!(f, "Sos::SubmitResolved(gen={generation}, Err: {err})"),
            },
        }
    }
}
