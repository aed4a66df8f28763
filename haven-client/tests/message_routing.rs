//! Tests for message routing infrastructure
//!
//! Validates that domain messages convert into the router type, that
//! names are stable for logging, and that every router variant stays
//! handled.

use haven_client::common::messages::{CrossDomainEvent, DomainMessage};
use haven_client::domains::alert::messages::Message as AlertMessage;
use haven_client::domains::ui::feedback_ui::{FeedbackMessage, NoticeLevel};
use haven_client::domains::ui::nav_ui::NavMessage;

#[test]
fn domain_messages_convert_into_the_router_type() {
    let _alert: DomainMessage = AlertMessage::SosPressed.into();
    let _nav: DomainMessage = haven_client::domains::ui::messages::Message::Nav(
        NavMessage::FrameTick,
    )
    .into();
    let _feedback: DomainMessage =
        haven_client::domains::ui::messages::Message::Feedback(FeedbackMessage::PruneExpired)
            .into();
}

#[test]
fn message_names_are_stable_for_logging() {
    let msg: DomainMessage = AlertMessage::SosPressed.into();
    assert_eq!(msg.name(), "Sos::Pressed");

    let msg = DomainMessage::Event(CrossDomainEvent::NoticeRaised {
        level: NoticeLevel::Info,
        text: "hello".to_string(),
    });
    assert_eq!(msg.name(), "DomainMessage::Event");
}

#[test]
fn no_router_variants_are_missing() {
    // If this fails to compile after adding a new domain, the routing
    // needs to be updated.
    fn exhaustive_match(msg: DomainMessage) -> &'static str {
        match msg {
            DomainMessage::Ui(_) => "ui",
            DomainMessage::Alert(_) => "alert",
            DomainMessage::NoOp => "noop",
            DomainMessage::Event(_) => "event",
        }
    }

    let _ = exhaustive_match(DomainMessage::NoOp);
}
