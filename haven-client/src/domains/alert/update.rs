//! SOS flow state machine.
//!
//! Every failure is absorbed into a notice and the flow returns to
//! `Idle`; nothing here propagates an error to the runtime. Stale async
//! completions are dropped by comparing their generation against the
//! current one, so a cancelled or finished flow can never double-submit.

use std::sync::Arc;

use iced::Task;
use iced::widget::text_input;

use haven_model::{Position, SosAlertAck, SosAlertRequest};

use crate::common::messages::{CrossDomainEvent, DomainMessage, DomainUpdateResult};
use crate::domains::alert::AlertState;
use crate::domains::alert::errors::{AlertError, LocationError};
use crate::domains::alert::flow::SosFlow;
use crate::domains::alert::location;
use crate::domains::alert::messages::Message;
use crate::domains::ui::feedback_ui::NoticeLevel;
use crate::domains::ui::views::sos_modals;
use crate::state::State;

const NOTICE_LOCATING: &str = "Locating...";
const NOTICE_SENT: &str = "SOS sent — help is being notified.";
const NOTICE_CANCELLED: &str = "SOS cancelled.";
const NOTICE_LOCATION_REQUIRED: &str = "Please enter your location or nearby landmarks.";

pub fn update_alert(state: &mut State, message: Message) -> DomainUpdateResult {
    match message {
        Message::SosPressed => handle_sos_pressed(state),
        Message::LocationResolved { generation, result } => {
            handle_location_resolved(state, generation, result)
        }
        Message::ConfirmMessageChanged(value) => {
            if let SosFlow::Confirming { message_input, .. } =
                &mut state.domains.alert.state.flow
            {
                *message_input = value;
            }
            DomainUpdateResult::task(Task::none())
        }
        Message::ConfirmSend => handle_confirm_send(state),
        Message::ManualLocationChanged(value) => {
            if let SosFlow::ManualEntry { location_input, .. } =
                &mut state.domains.alert.state.flow
            {
                *location_input = value;
            }
            DomainUpdateResult::task(Task::none())
        }
        Message::ManualMessageChanged(value) => {
            if let SosFlow::ManualEntry { message_input, .. } =
                &mut state.domains.alert.state.flow
            {
                *message_input = value;
            }
            DomainUpdateResult::task(Task::none())
        }
        Message::ManualSend => handle_manual_send(state),
        Message::Cancel => handle_cancel(state),
        Message::SubmitResolved { generation, result } => {
            handle_submit_resolved(state, generation, result)
        }
    }
}

fn handle_sos_pressed(state: &mut State) -> DomainUpdateResult {
    let alert = &mut state.domains.alert.state;

    if !alert.flow.is_idle() {
        log::debug!(
            "[Sos] trigger ignored while {} is in progress",
            alert.flow.name()
        );
        return DomainUpdateResult::task(Task::none());
    }

    alert.generation += 1;
    let generation = alert.generation;

    let Some(provider) = alert.locator.clone() else {
        log::info!("[Sos] positioning unsupported, collecting location manually");
        alert.flow = SosFlow::ManualEntry {
            location_input: String::new(),
            message_input: String::new(),
        };
        return DomainUpdateResult::task(text_input::focus(sos_modals::location_input_id()));
    };

    alert.flow = SosFlow::Locating;
    let query = alert.locate_query.clone();

    let task = Task::perform(
        async move { location::acquire_position(provider, query).await },
        move |result| DomainMessage::Alert(Message::LocationResolved { generation, result }),
    );

    DomainUpdateResult::with_events(task, vec![notice(NoticeLevel::Info, NOTICE_LOCATING)])
}

fn handle_location_resolved(
    state: &mut State,
    generation: u64,
    result: Result<Position, LocationError>,
) -> DomainUpdateResult {
    let alert = &mut state.domains.alert.state;

    if generation != alert.generation || !matches!(alert.flow, SosFlow::Locating) {
        log::debug!("[Sos] dropping stale position result (gen {generation})");
        return DomainUpdateResult::task(Task::none());
    }

    match result {
        Ok(position) => {
            log::info!("[Sos] position acquired: {position}");
            alert.flow = SosFlow::Confirming {
                position,
                message_input: String::new(),
            };
            DomainUpdateResult::task(text_input::focus(sos_modals::message_input_id()))
        }
        Err(err) => {
            log::warn!("[Sos] position acquisition failed: {err}");
            alert.flow = SosFlow::ManualEntry {
                location_input: String::new(),
                message_input: String::new(),
            };
            DomainUpdateResult::task(text_input::focus(sos_modals::location_input_id()))
        }
    }
}

fn handle_confirm_send(state: &mut State) -> DomainUpdateResult {
    let alert = &mut state.domains.alert.state;

    let (position, message_input) = match &alert.flow {
        SosFlow::Confirming {
            position,
            message_input,
        } => (*position, message_input.clone()),
        other => {
            log::debug!("[Sos] send ignored in {} state", other.name());
            return DomainUpdateResult::task(Task::none());
        }
    };

    let request = SosAlertRequest::from_position(position, Some(&message_input));
    submit_alert(alert, request)
}

fn handle_manual_send(state: &mut State) -> DomainUpdateResult {
    let alert = &mut state.domains.alert.state;

    let (location_input, message_input) = match &alert.flow {
        SosFlow::ManualEntry {
            location_input,
            message_input,
        } => (location_input.clone(), message_input.clone()),
        other => {
            log::debug!("[Sos] send ignored in {} state", other.name());
            return DomainUpdateResult::task(Task::none());
        }
    };

    let location = location_input.trim();
    if location.is_empty() {
        return DomainUpdateResult::with_events(
            Task::none(),
            vec![notice(NoticeLevel::Warning, NOTICE_LOCATION_REQUIRED)],
        );
    }

    let request = SosAlertRequest::from_description(location, Some(&message_input));
    submit_alert(alert, request)
}

fn handle_cancel(state: &mut State) -> DomainUpdateResult {
    let alert = &mut state.domains.alert.state;

    if !matches!(
        alert.flow,
        SosFlow::Confirming { .. } | SosFlow::ManualEntry { .. }
    ) {
        log::debug!("[Sos] cancel ignored in {} state", alert.flow.name());
        return DomainUpdateResult::task(Task::none());
    }

    alert.generation += 1;
    alert.flow = SosFlow::Idle;
    log::info!("[Sos] flow cancelled");
    DomainUpdateResult::with_events(
        Task::none(),
        vec![notice(NoticeLevel::Info, NOTICE_CANCELLED)],
    )
}

fn handle_submit_resolved(
    state: &mut State,
    generation: u64,
    result: Result<SosAlertAck, AlertError>,
) -> DomainUpdateResult {
    let alert = &mut state.domains.alert.state;

    if generation != alert.generation || !matches!(alert.flow, SosFlow::Submitting { .. }) {
        log::debug!("[Sos] dropping stale submission result (gen {generation})");
        return DomainUpdateResult::task(Task::none());
    }

    alert.flow = SosFlow::Idle;

    match result {
        Ok(ack) => {
            log::info!("[Sos] alert acknowledged (id: {:?})", ack.id);
            DomainUpdateResult::with_events(
                Task::none(),
                vec![notice(NoticeLevel::Success, NOTICE_SENT)],
            )
        }
        Err(err) => {
            log::error!("[Sos] alert delivery failed: {err}");
            DomainUpdateResult::with_events(
                Task::none(),
                vec![notice(NoticeLevel::Error, err.notice_text())],
            )
        }
    }
}

/// Close the active modal, detach its flow, and launch the request.
fn submit_alert(alert: &mut AlertState, request: SosAlertRequest) -> DomainUpdateResult {
    alert.generation += 1;
    let generation = alert.generation;

    let gateway = Arc::clone(&alert.gateway);
    alert.flow = SosFlow::Submitting {
        request: request.clone(),
    };

    let task = Task::perform(
        async move { gateway.send_alert(&request).await },
        move |result| DomainMessage::Alert(Message::SubmitResolved { generation, result }),
    );

    DomainUpdateResult::task(task)
}

fn notice(level: NoticeLevel, text: impl Into<String>) -> CrossDomainEvent {
    CrossDomainEvent::NoticeRaised {
        level,
        text: text.into(),
    }
}
