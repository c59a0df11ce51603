// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/stegpanel

//! Wire events from the extraction channel.
//!
//! Payloads are JSON. [`ChannelEvent::from_wire`] maps an event name plus raw
//! payload into the typed union; unknown names and malformed payloads are
//! decode errors and never reach the state machine — the transport adapter
//! logs and drops them.

use core::fmt;

use serde::Deserialize;

/// Wire names of the inbound events.
pub const EVENT_CONNECT: &str = "connect";
pub const EVENT_PROGRESS: &str = "progress_update";
pub const EVENT_ERROR: &str = "error";
pub const EVENT_DISCONNECT: &str = "disconnect";

/// A typed inbound event from the extraction channel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChannelEvent {
    /// Transport established.
    Connect,
    /// Extraction progress, percent in `[0, 100]`.
    ProgressUpdate { percent: u8 },
    /// Server-reported extraction failure, with a message for the user.
    Error { message: String },
    /// Transport lost.
    Disconnect,
}

/// `progress_update` payload: `{"progress": <int>}`.
#[derive(Deserialize)]
struct ProgressPayload {
    progress: i64,
}

/// `error` payload: `{"message": <string>}`.
#[derive(Deserialize)]
struct ErrorPayload {
    message: String,
}

/// Failures decoding a wire event.
#[derive(Debug)]
pub enum WireError {
    /// Event name not part of the extraction protocol.
    UnknownEvent(String),
    /// Payload missing or not the expected JSON shape.
    BadPayload(serde_json::Error),
}

impl fmt::Display for WireError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownEvent(name) => write!(f, "unknown channel event {name:?}"),
            Self::BadPayload(e) => write!(f, "bad event payload: {e}"),
        }
    }
}

impl std::error::Error for WireError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::BadPayload(e) => Some(e),
            Self::UnknownEvent(_) => None,
        }
    }
}

impl From<serde_json::Error> for WireError {
    fn from(e: serde_json::Error) -> Self {
        Self::BadPayload(e)
    }
}

impl ChannelEvent {
    /// Decode a wire event from its name and JSON payload.
    ///
    /// `connect` and `disconnect` carry no payload; anything that does arrive
    /// with them is ignored. Progress values outside `[0, 100]` violate the
    /// transport contract but are clamped rather than fatal, so one bad event
    /// cannot kill an otherwise healthy session.
    pub fn from_wire(name: &str, payload: Option<&str>) -> Result<Self, WireError> {
        match name {
            EVENT_CONNECT => Ok(Self::Connect),
            EVENT_DISCONNECT => Ok(Self::Disconnect),
            EVENT_PROGRESS => {
                let raw: ProgressPayload = serde_json::from_str(payload.unwrap_or(""))?;
                if !(0..=100).contains(&raw.progress) {
                    log::debug!("progress {} outside [0, 100], clamping", raw.progress);
                }
                Ok(Self::ProgressUpdate {
                    percent: raw.progress.clamp(0, 100) as u8,
                })
            }
            EVENT_ERROR => {
                let raw: ErrorPayload = serde_json::from_str(payload.unwrap_or(""))?;
                Ok(Self::Error { message: raw.message })
            }
            other => Err(WireError::UnknownEvent(other.to_string())),
        }
    }
}
