//! Root-level message routing

use iced::Task;

use crate::common::messages::{CrossDomainEvent, DomainMessage, DomainUpdateResult};
use crate::domains::{alert, ui};
use crate::state::State;

pub fn update(state: &mut State, message: DomainMessage) -> Task<DomainMessage> {
    log::trace!("[Update] {}", message.name());

    let DomainUpdateResult { task, events } = match message {
        DomainMessage::Ui(msg) => ui::update::update_ui(state, msg),
        DomainMessage::Alert(msg) => alert::update::update_alert(state, msg),
        DomainMessage::Event(event) => apply_event(state, event),
        DomainMessage::NoOp => DomainUpdateResult::task(Task::none()),
    };

    if events.is_empty() {
        return task;
    }

    let mut tasks = vec![task];
    for event in events {
        tasks.push(apply_event(state, event).task);
    }
    Task::batch(tasks)
}

/// Deliver a cross-domain event to the domain that owns it.
fn apply_event(state: &mut State, event: CrossDomainEvent) -> DomainUpdateResult {
    match event {
        CrossDomainEvent::NoticeRaised { level, text } => {
            state.domains.ui.state.push_notice(level, text);
            DomainUpdateResult::task(Task::none())
        }
    }
}
