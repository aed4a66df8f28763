// Message types are defined in their respective domains; this module
// holds the router and the cross-domain event bus.

use crate::domains::alert;
use crate::domains::ui;
use crate::domains::ui::feedback_ui::NoticeLevel;

use iced::Task;

/// Result of a domain update that includes both a task and events to emit
pub struct DomainUpdateResult {
    /// The task to execute (may produce more messages)
    pub task: Task<DomainMessage>,
    /// Events to broadcast to other domains immediately
    pub events: Vec<CrossDomainEvent>,
}

impl DomainUpdateResult {
    /// Create a result with just a task
    pub fn task(task: Task<DomainMessage>) -> Self {
        Self {
            task,
            events: Vec::new(),
        }
    }

    /// Create a result with task and events
    pub fn with_events(task: Task<DomainMessage>, events: Vec<CrossDomainEvent>) -> Self {
        Self { task, events }
    }

    /// Add an event to this result
    pub fn add_event(mut self, event: CrossDomainEvent) -> Self {
        self.events.push(event);
        self
    }
}

impl std::fmt::Debug for DomainUpdateResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DomainUpdateResult")
            .field("events", &self.events)
            .finish_non_exhaustive()
    }
}

/// The main domain message router
#[derive(Clone)]
pub enum DomainMessage {
    /// UI/View domain (nav bar, feedback notices)
    Ui(ui::messages::Message),

    /// SOS alert domain
    Alert(alert::messages::Message),

    /// Cross-domain coordination messages
    NoOp,
    Event(CrossDomainEvent),
}

// Automatic routing from domain messages
impl From<ui::messages::Message> for DomainMessage {
    fn from(msg: ui::messages::Message) -> Self {
        DomainMessage::Ui(msg)
    }
}

impl From<alert::messages::Message> for DomainMessage {
    fn from(msg: alert::messages::Message) -> Self {
        DomainMessage::Alert(msg)
    }
}

impl DomainMessage {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Ui(msg) => msg.name(),
            Self::Alert(msg) => msg.name(),
            Self::NoOp => "DomainMessage::NoOp",
            Self::Event(_) => "DomainMessage::Event",
        }
    }
}

impl std::fmt::Debug for DomainMessage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Ui(msg) => write!(f, "DomainMessage::Ui({msg:?})"),
            Self::Alert(msg) => write!(f, "DomainMessage::Alert({msg:?})"),
            Self::NoOp => write!(f, "DomainMessage::NoOp"),
            Self::Event(event) => write!(f, "DomainMessage::Event({event:?})"),
        }
    }
}

/// Cross-domain event bus for coordination
#[derive(Clone, Debug)]
pub enum CrossDomainEvent {
    /// A user-visible notice was raised somewhere in the app; the UI
    /// domain owns presentation (overlay card plus log mirror).
    NoticeRaised { level: NoticeLevel, text: String },
}
