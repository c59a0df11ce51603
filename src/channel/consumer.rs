// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/stegpanel

//! Bounded inbox consumer for extraction progress.
//!
//! The channel layer never polls: the transport pushes decoded events into a
//! bounded mpsc inbox and this loop drains them in arrival order. UI writes
//! happen strictly in that order, so the bar can never show a stale pairing
//! of percent text and bar width, or a lower percent rendered after a higher
//! one was received later.

use tokio::sync::mpsc;

use crate::channel::event::ChannelEvent;
use crate::channel::session::{Effect, ProgressSession, SessionState};

/// Inbox capacity. Progress events are tiny and sparse; a small bound keeps
/// a misbehaving transport from buffering unboundedly.
pub const INBOX_CAPACITY: usize = 32;

/// UI seam for progress display.
pub trait ProgressSink {
    /// Make the progress container visible. Safe to call repeatedly.
    fn show_container(&mut self);

    /// Update bar width and numeric readout to `percent`, together — both
    /// must always reflect the same event's value.
    fn render_percent(&mut self, percent: u8);

    /// Blocking user-visible alert for a server-reported failure.
    fn alert(&mut self, message: &str);
}

/// Create the bounded event inbox the transport pushes into.
pub fn inbox() -> (mpsc::Sender<ChannelEvent>, mpsc::Receiver<ChannelEvent>) {
    mpsc::channel(INBOX_CAPACITY)
}

/// Prime the progress UI before any real event arrives.
///
/// Shows the container and paints a nominal 1% so the bar is visibly alive.
/// Purely cosmetic and idempotent: session state is untouched, and the first
/// real `progress_update` render overwrites the placeholder.
pub fn prime(sink: &mut impl ProgressSink) {
    sink.show_container();
    sink.render_percent(1);
}

/// Drain the inbox until the session reaches a terminal state.
///
/// Effects are performed in arrival order, one event at a time — never
/// batched or reordered. If the transport drops the inbox while the session
/// is still live, that counts as an unexpected disconnect. Returns the state
/// the session ended in.
pub async fn run(
    mut inbox: mpsc::Receiver<ChannelEvent>,
    sink: &mut impl ProgressSink,
) -> SessionState {
    let mut session = ProgressSession::new();

    while let Some(event) = inbox.recv().await {
        perform(sink, session.apply(event));
        if session.state().is_terminal() {
            return session.state();
        }
    }

    // Inbox closed with the session still live: transport loss.
    let effect = session.apply(ChannelEvent::Disconnect);
    perform(sink, effect);
    session.state()
}

fn perform(sink: &mut impl ProgressSink, effect: Effect) {
    match effect {
        Effect::None => {}
        Effect::LogConnected => log::info!("extraction channel connected"),
        Effect::Render(percent) => sink.render_percent(percent),
        Effect::Alert(message) => {
            log::error!("extraction failed: {message}");
            sink.alert(&message);
        }
        Effect::LogDisconnected => log::warn!("extraction channel disconnected"),
    }
}
