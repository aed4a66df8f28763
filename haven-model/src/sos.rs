//! SOS alert wire types.
//!
//! `SosAlertRequest` is the body of `POST /api/sos-alert/`. Exactly one
//! location form must be present: coordinates, or a free-text location
//! description collected when positioning is unavailable. Absent fields
//! are omitted from the serialized body.

use serde::{Deserialize, Serialize};

use crate::error::{PayloadError, Result};
use crate::position::Position;

/// Outbound SOS alert payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SosAlertRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location_description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl SosAlertRequest {
    /// Build an alert from acquired coordinates and an optional message.
    pub fn from_position(position: Position, message: Option<&str>) -> Self {
        Self {
            latitude: Some(position.latitude),
            longitude: Some(position.longitude),
            location_description: None,
            message: optional_text(message),
        }
    }

    /// Build an alert from a manually entered location description.
    pub fn from_description(location: &str, message: Option<&str>) -> Self {
        Self {
            latitude: None,
            longitude: None,
            location_description: optional_text(Some(location)),
            message: optional_text(message),
        }
    }

    /// Enforce the one-location-form invariant.
    pub fn validate(&self) -> Result<()> {
        let has_coordinates = self.latitude.is_some() && self.longitude.is_some();
        match (&self.location_description, has_coordinates) {
            (Some(description), false) => {
                if description.trim().is_empty() {
                    Err(PayloadError::EmptyDescription)
                } else {
                    Ok(())
                }
            }
            (None, true) => Ok(()),
            (Some(_), true) => Err(PayloadError::ConflictingLocation),
            (None, false) => Err(PayloadError::MissingLocation),
        }
    }
}

/// Server acknowledgement for an SOS alert.
///
/// The backend replies with `status`/`message`/`id`, but every field is
/// optional so empty or partial bodies still parse.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct SosAlertAck {
    pub status: Option<String>,
    pub message: Option<String>,
    pub id: Option<i64>,
}

fn optional_text(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|text| !text.is_empty())
        .map(str::to_owned)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coordinate_alert_serializes_without_absent_fields() {
        let request = SosAlertRequest::from_position(
            Position::new(6.5, 3.3),
            Some("trapped on 3rd floor"),
        );

        let body = serde_json::to_string(&request).unwrap();
        assert_eq!(
            body,
            r#"{"latitude":6.5,"longitude":3.3,"message":"trapped on 3rd floor"}"#
        );
    }

    #[test]
    fn descriptive_alert_serializes_location_only() {
        let request =
            SosAlertRequest::from_description("Near Unity Fountain, Abuja", None);

        let body = serde_json::to_string(&request).unwrap();
        assert_eq!(
            body,
            r#"{"location_description":"Near Unity Fountain, Abuja"}"#
        );
    }

    #[test]
    fn messages_are_trimmed_and_blank_messages_dropped() {
        let request = SosAlertRequest::from_position(
            Position::new(6.5, 3.3),
            Some("  help  "),
        );
        assert_eq!(request.message.as_deref(), Some("help"));

        let request =
            SosAlertRequest::from_position(Position::new(6.5, 3.3), Some("   "));
        assert_eq!(request.message, None);
    }

    #[test]
    fn validate_requires_exactly_one_location_form() {
        let coordinates =
            SosAlertRequest::from_position(Position::new(6.5, 3.3), None);
        assert_eq!(coordinates.validate(), Ok(()));

        let descriptive =
            SosAlertRequest::from_description("Wuse Market", None);
        assert_eq!(descriptive.validate(), Ok(()));

        let neither = SosAlertRequest {
            latitude: None,
            longitude: None,
            location_description: None,
            message: None,
        };
        assert_eq!(neither.validate(), Err(PayloadError::MissingLocation));

        let both = SosAlertRequest {
            latitude: Some(6.5),
            longitude: Some(3.3),
            location_description: Some("Wuse Market".to_owned()),
            message: None,
        };
        assert_eq!(both.validate(), Err(PayloadError::ConflictingLocation));
    }

    #[test]
    fn ack_parses_full_and_partial_bodies() {
        let ack: SosAlertAck = serde_json::from_str(
            r#"{"status":"success","message":"Alert received","id":7}"#,
        )
        .unwrap();
        assert_eq!(ack.status.as_deref(), Some("success"));
        assert_eq!(ack.message.as_deref(), Some("Alert received"));
        assert_eq!(ack.id, Some(7));

        let empty: SosAlertAck = serde_json::from_str("{}").unwrap();
        assert_eq!(empty, SosAlertAck::default());
    }
}
