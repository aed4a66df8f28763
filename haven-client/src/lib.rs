//! Haven client library
//!
//! This crate contains the desktop client's library surfaces used by the
//! executable in `src/main.rs`. Modules here are application glue, UI
//! domains, and the alert delivery flow.
//!
//! Notes
//! - Public items are subject to change while the UI and domains stabilize.
//! - Most consumers should use the `haven-client` binary; the library is
//!   exposed mainly to enable testing and internal reuse.

pub mod app;
pub mod common;
pub mod domains;
pub mod state;
pub mod subscriptions;
pub mod update;
pub mod view;
