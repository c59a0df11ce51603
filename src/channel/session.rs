// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/stegpanel

//! Progress session state machine.
//!
//! Pure transition logic: [`ProgressSession::apply`] consumes one event,
//! updates the session, and returns the side effect the consumer must
//! perform. Rendering and alerting live behind the consumer's sink seam, so
//! the machine itself is trivially testable.
//!
//! ```text
//! Idle --connect--> Connected --progress--> Active --progress(100)--> Succeeded
//!                        |                     |
//!                        +---- error ----------+--> Failed
//!                        +---- disconnect -----+--> Disconnected
//! ```

use crate::channel::event::ChannelEvent;

/// Lifecycle of the one extraction session per page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// No channel opened yet.
    Idle,
    /// Channel open, no progress received.
    Connected,
    /// At least one progress event received.
    Active,
    /// Progress reached 100.
    Succeeded,
    /// Server reported an extraction error.
    Failed,
    /// Transport lost unexpectedly.
    Disconnected,
}

impl SessionState {
    /// Terminal states accept no further events; a new session requires a
    /// fresh channel open.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Succeeded | Self::Failed | Self::Disconnected)
    }
}

/// Side effect the consumer must perform after a transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Event ignored (wrong state, or session already terminal).
    None,
    /// Transport established — diagnostics only, nothing user-blocking.
    LogConnected,
    /// Update bar and numeric readout together with this percent.
    Render(u8),
    /// Blocking user-visible alert with the server's message.
    Alert(String),
    /// Transport lost — diagnostics only, session over.
    LogDisconnected,
}

/// The extraction progress session. Owned exclusively by the channel
/// consumer; one per page lifetime.
#[derive(Debug, Default)]
pub struct ProgressSession {
    state: SessionState,
    percent: u8,
    last_error: Option<String>,
}

impl Default for SessionState {
    fn default() -> Self {
        Self::Idle
    }
}

impl ProgressSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Latest received percent. Not guaranteed monotonic: the transport only
    /// promises arrival order, so the newest value is displayed as-is even if
    /// it is lower than an earlier one.
    pub fn percent(&self) -> u8 {
        self.percent
    }

    /// Message from the server's `error` event, once `Failed`.
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Apply one inbound event and return the effect to perform.
    ///
    /// Events arriving in a terminal state, and events that make no sense in
    /// the current state (progress before `connect`, a second `connect`), are
    /// ignored.
    pub fn apply(&mut self, event: ChannelEvent) -> Effect {
        use SessionState::*;

        if self.state.is_terminal() {
            return Effect::None;
        }

        match (self.state, event) {
            (Idle, ChannelEvent::Connect) => {
                self.state = Connected;
                Effect::LogConnected
            }
            (Connected | Active, ChannelEvent::ProgressUpdate { percent }) => {
                self.percent = percent;
                self.state = if percent == 100 { Succeeded } else { Active };
                Effect::Render(percent)
            }
            (Connected | Active, ChannelEvent::Error { message }) => {
                self.state = Failed;
                self.last_error = Some(message.clone());
                Effect::Alert(message)
            }
            (Connected | Active, ChannelEvent::Disconnect) => {
                self.state = Disconnected;
                Effect::LogDisconnected
            }
            _ => Effect::None,
        }
    }
}
