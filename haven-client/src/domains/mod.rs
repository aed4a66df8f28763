pub mod alert;
pub mod ui;

/// Per-domain state containers, mirrored by the message router.
#[derive(Debug)]
pub struct Domains {
    pub ui: ui::UiDomain,
    pub alert: alert::AlertDomain,
}
