// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/stegpanel

//! Extraction progress over a namespaced event channel.
//!
//! The server pushes `connect`, `progress_update`, `error`, and `disconnect`
//! events on the extract namespace; this side emits nothing back (form
//! submission is a separate plain request). The layer splits into:
//!
//! - [`event`]: wire names and payload decoding into [`ChannelEvent`],
//! - [`session`]: the pure six-state session machine,
//! - [`consumer`]: a bounded inbox drained in arrival order, with the
//!   [`ProgressSink`] seam toward the progress UI.
//!
//! One session exists per page lifetime. Terminal states (`Succeeded`,
//! `Failed`, `Disconnected`) end it; a new session requires a fresh channel
//! open, never an automatic resume.

pub mod consumer;
pub mod event;
pub mod session;

pub use consumer::{inbox, prime, run, ProgressSink, INBOX_CAPACITY};
pub use event::{ChannelEvent, WireError};
pub use session::{Effect, ProgressSession, SessionState};

/// Namespace scoping which events this page session receives.
pub const EXTRACT_NAMESPACE: &str = "/extract";
