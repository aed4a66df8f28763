//! End-to-end SOS flow transitions, driven through the root router so
//! cross-domain notice events land in the UI state exactly as they do at
//! runtime. Async completions are injected as messages, the same way the
//! runtime delivers them.

use haven_client::app::AppConfig;
use haven_client::common::messages::DomainMessage;
use haven_client::domains::alert::errors::{AlertError, LocationError};
use haven_client::domains::alert::flow::SosFlow;
use haven_client::domains::alert::messages::Message as AlertMessage;
use haven_client::state::State;
use haven_client::update::update;

use haven_model::{Position, SosAlertAck};
use reqwest::StatusCode;

fn test_state() -> State {
    State::new(&AppConfig::new("http://localhost:8000"))
}

fn send(state: &mut State, message: AlertMessage) {
    let _ = update(state, DomainMessage::Alert(message));
}

fn flow(state: &State) -> &SosFlow {
    &state.domains.alert.state.flow
}

fn generation(state: &State) -> u64 {
    state.domains.alert.state.generation
}

fn notice_texts(state: &State) -> Vec<String> {
    state
        .domains
        .ui
        .state
        .notices
        .iter()
        .map(|notice| notice.text.clone())
        .collect()
}

fn enter_confirming(state: &mut State, position: Position) {
    send(state, AlertMessage::SosPressed);
    let generation = generation(state);
    send(
        state,
        AlertMessage::LocationResolved {
            generation,
            result: Ok(position),
        },
    );
}

fn enter_manual_entry(state: &mut State) {
    send(state, AlertMessage::SosPressed);
    let generation = generation(state);
    send(
        state,
        AlertMessage::LocationResolved {
            generation,
            result: Err(LocationError::Denied),
        },
    );
}

#[tokio::test]
async fn pressing_sos_starts_locating_and_notifies() {
    let mut state = test_state();

    send(&mut state, AlertMessage::SosPressed);

    assert!(matches!(flow(&state), SosFlow::Locating));
    assert_eq!(notice_texts(&state), vec!["Locating...".to_string()]);
}

#[tokio::test]
async fn pressing_sos_again_mid_flow_is_ignored() {
    let mut state = test_state();

    send(&mut state, AlertMessage::SosPressed);
    let first_generation = generation(&state);

    send(&mut state, AlertMessage::SosPressed);

    assert!(matches!(flow(&state), SosFlow::Locating));
    assert_eq!(generation(&state), first_generation);
    assert_eq!(notice_texts(&state).len(), 1);
}

#[tokio::test]
async fn unsupported_positioning_goes_straight_to_manual_entry() {
    let config = AppConfig::new("http://localhost:8000").without_positioning();
    let mut state = State::new(&config);

    send(&mut state, AlertMessage::SosPressed);

    assert!(matches!(flow(&state), SosFlow::ManualEntry { .. }));
    // No locating notice when there is nothing to locate with.
    assert!(notice_texts(&state).is_empty());
}

#[tokio::test]
async fn position_success_opens_the_confirmation_modal() {
    let mut state = test_state();

    enter_confirming(&mut state, Position::new(6.5, 3.3));

    match flow(&state) {
        SosFlow::Confirming {
            position,
            message_input,
        } => {
            assert_eq!(*position, Position::new(6.5, 3.3));
            assert!(message_input.is_empty());
        }
        other => panic!("expected Confirming, got {other:?}"),
    }
}

#[tokio::test]
async fn position_failure_opens_the_manual_modal() {
    let mut state = test_state();

    enter_manual_entry(&mut state);

    assert!(matches!(flow(&state), SosFlow::ManualEntry { .. }));
}

#[tokio::test]
async fn confirmed_send_submits_coordinates_and_message() {
    let mut state = test_state();
    enter_confirming(&mut state, Position::new(6.5, 3.3));

    send(
        &mut state,
        AlertMessage::ConfirmMessageChanged("trapped on 3rd floor".to_string()),
    );
    send(&mut state, AlertMessage::ConfirmSend);

    match flow(&state) {
        SosFlow::Submitting { request } => {
            let body = serde_json::to_string(request).unwrap();
            assert_eq!(
                body,
                r#"{"latitude":6.5,"longitude":3.3,"message":"trapped on 3rd floor"}"#
            );
        }
        other => panic!("expected Submitting, got {other:?}"),
    }
}

#[tokio::test]
async fn blank_confirmation_messages_are_omitted_from_the_payload() {
    let mut state = test_state();
    enter_confirming(&mut state, Position::new(6.5, 3.3));

    send(
        &mut state,
        AlertMessage::ConfirmMessageChanged("   ".to_string()),
    );
    send(&mut state, AlertMessage::ConfirmSend);

    match flow(&state) {
        SosFlow::Submitting { request } => {
            assert_eq!(
                serde_json::to_string(request).unwrap(),
                r#"{"latitude":6.5,"longitude":3.3}"#
            );
        }
        other => panic!("expected Submitting, got {other:?}"),
    }
}

#[tokio::test]
async fn manual_send_requires_a_location() {
    let mut state = test_state();
    enter_manual_entry(&mut state);

    send(
        &mut state,
        AlertMessage::ManualLocationChanged("   ".to_string()),
    );
    send(&mut state, AlertMessage::ManualSend);

    assert!(matches!(flow(&state), SosFlow::ManualEntry { .. }));
    assert!(
        notice_texts(&state)
            .iter()
            .any(|text| text == "Please enter your location or nearby landmarks.")
    );
}

#[tokio::test]
async fn manual_send_submits_the_location_description() {
    let mut state = test_state();
    enter_manual_entry(&mut state);

    send(
        &mut state,
        AlertMessage::ManualLocationChanged("Near Unity Fountain, Abuja".to_string()),
    );
    send(&mut state, AlertMessage::ManualSend);

    match flow(&state) {
        SosFlow::Submitting { request } => {
            assert_eq!(
                serde_json::to_string(request).unwrap(),
                r#"{"location_description":"Near Unity Fountain, Abuja"}"#
            );
        }
        other => panic!("expected Submitting, got {other:?}"),
    }
}

#[tokio::test]
async fn successful_delivery_returns_to_idle_with_a_success_notice() {
    let mut state = test_state();
    enter_confirming(&mut state, Position::new(6.5, 3.3));
    send(&mut state, AlertMessage::ConfirmSend);

    let generation = generation(&state);
    send(
        &mut state,
        AlertMessage::SubmitResolved {
            generation,
            result: Ok(SosAlertAck {
                status: Some("success".to_string()),
                message: Some("Alert received".to_string()),
                id: Some(7),
            }),
        },
    );

    assert!(flow(&state).is_idle());
    assert!(
        notice_texts(&state)
            .iter()
            .any(|text| text == "SOS sent — help is being notified.")
    );
}

#[tokio::test]
async fn server_rejections_surface_the_server_message() {
    let mut state = test_state();
    enter_confirming(&mut state, Position::new(6.5, 3.3));
    send(&mut state, AlertMessage::ConfirmSend);

    let generation = generation(&state);
    send(
        &mut state,
        AlertMessage::SubmitResolved {
            generation,
            result: Err(AlertError::Rejected {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                message: Some("server overloaded".to_string()),
            }),
        },
    );

    assert!(flow(&state).is_idle());
    assert!(
        notice_texts(&state)
            .iter()
            .any(|text| text.contains("server overloaded"))
    );
}

#[tokio::test]
async fn transport_failures_produce_the_generic_network_notice() {
    let mut state = test_state();
    enter_manual_entry(&mut state);
    send(
        &mut state,
        AlertMessage::ManualLocationChanged("Wuse Market".to_string()),
    );
    send(&mut state, AlertMessage::ManualSend);

    let generation = generation(&state);
    send(
        &mut state,
        AlertMessage::SubmitResolved {
            generation,
            result: Err(AlertError::Transport("connection refused".to_string())),
        },
    );

    assert!(flow(&state).is_idle());
    assert!(
        notice_texts(&state)
            .iter()
            .any(|text| text == "Network error sending SOS.")
    );
}

#[tokio::test]
async fn cancel_closes_the_modal_and_notifies() {
    let mut state = test_state();
    enter_confirming(&mut state, Position::new(6.5, 3.3));

    send(&mut state, AlertMessage::Cancel);

    assert!(flow(&state).is_idle());
    assert!(
        notice_texts(&state)
            .iter()
            .any(|text| text == "SOS cancelled.")
    );
}

#[tokio::test]
async fn completions_from_a_cancelled_flow_are_dropped() {
    let mut state = test_state();
    enter_confirming(&mut state, Position::new(6.5, 3.3));
    let stale_generation = generation(&state);

    send(&mut state, AlertMessage::Cancel);

    // A submission result from the detached flow must not resurrect it.
    send(
        &mut state,
        AlertMessage::SubmitResolved {
            generation: stale_generation,
            result: Ok(SosAlertAck::default()),
        },
    );
    // Likewise a position result from before the cancel.
    send(
        &mut state,
        AlertMessage::LocationResolved {
            generation: stale_generation,
            result: Ok(Position::new(1.0, 1.0)),
        },
    );

    assert!(flow(&state).is_idle());
    assert!(
        !notice_texts(&state)
            .iter()
            .any(|text| text.contains("SOS sent"))
    );
}

#[tokio::test]
async fn a_new_flow_after_cancel_starts_fresh() {
    let mut state = test_state();
    enter_manual_entry(&mut state);
    send(
        &mut state,
        AlertMessage::ManualLocationChanged("Old entry".to_string()),
    );

    send(&mut state, AlertMessage::Cancel);
    send(&mut state, AlertMessage::SosPressed);

    assert!(matches!(flow(&state), SosFlow::Locating));

    let generation = generation(&state);
    send(
        &mut state,
        AlertMessage::LocationResolved {
            generation,
            result: Err(LocationError::Timeout),
        },
    );

    match flow(&state) {
        SosFlow::ManualEntry {
            location_input,
            message_input,
        } => {
            assert!(location_input.is_empty());
            assert!(message_input.is_empty());
        }
        other => panic!("expected ManualEntry, got {other:?}"),
    }
}
