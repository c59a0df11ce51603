// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/stegpanel

//! Consumer-loop integration tests: a real bounded inbox feeding the session
//! machine, with every render recorded in arrival order.

use stegpanel::channel::{self, ChannelEvent, ProgressSink, SessionState};

#[derive(Default)]
struct RecordingSink {
    renders: Vec<u8>,
    alerts: Vec<String>,
    container_shown: bool,
}

impl ProgressSink for RecordingSink {
    fn show_container(&mut self) {
        self.container_shown = true;
    }

    fn render_percent(&mut self, percent: u8) {
        self.renders.push(percent);
    }

    fn alert(&mut self, message: &str) {
        self.alerts.push(message.to_string());
    }
}

fn progress(percent: u8) -> ChannelEvent {
    ChannelEvent::ProgressUpdate { percent }
}

#[tokio::test]
async fn successful_extraction() {
    let (tx, rx) = channel::inbox();
    let mut sink = RecordingSink::default();

    tx.send(ChannelEvent::Connect).await.unwrap();
    tx.send(progress(75)).await.unwrap();
    tx.send(progress(100)).await.unwrap();
    drop(tx);

    let state = channel::run(rx, &mut sink).await;
    assert_eq!(state, SessionState::Succeeded);
    assert_eq!(sink.renders, vec![75, 100]);
    assert!(sink.alerts.is_empty());
}

#[tokio::test]
async fn server_error_alerts_and_fails() {
    let (tx, rx) = channel::inbox();
    let mut sink = RecordingSink::default();

    tx.send(ChannelEvent::Connect).await.unwrap();
    tx.send(progress(40)).await.unwrap();
    tx.send(ChannelEvent::Error { message: "x".to_string() }).await.unwrap();
    drop(tx);

    let state = channel::run(rx, &mut sink).await;
    assert_eq!(state, SessionState::Failed);
    assert_eq!(sink.renders, vec![40]);
    assert_eq!(sink.alerts, vec!["x".to_string()]);
}

#[tokio::test]
async fn transport_loss_is_disconnected() {
    let (tx, rx) = channel::inbox();
    let mut sink = RecordingSink::default();

    tx.send(ChannelEvent::Connect).await.unwrap();
    tx.send(progress(60)).await.unwrap();
    // Transport drops the inbox without a disconnect event.
    drop(tx);

    let state = channel::run(rx, &mut sink).await;
    assert_eq!(state, SessionState::Disconnected);
    assert_eq!(sink.renders, vec![60]);
    assert!(sink.alerts.is_empty());
}

#[tokio::test]
async fn renders_follow_arrival_order() {
    // No batching, no reordering: a lower percent arriving later is rendered
    // after the higher one.
    let (tx, rx) = channel::inbox();
    let mut sink = RecordingSink::default();

    tx.send(ChannelEvent::Connect).await.unwrap();
    for p in [10, 80, 40, 40, 100] {
        tx.send(progress(p)).await.unwrap();
    }
    drop(tx);

    let state = channel::run(rx, &mut sink).await;
    assert_eq!(state, SessionState::Succeeded);
    assert_eq!(sink.renders, vec![10, 80, 40, 40, 100]);
}

#[tokio::test]
async fn prime_placeholder_is_overwritten_by_first_event() {
    let (tx, rx) = channel::inbox();
    let mut sink = RecordingSink::default();

    // Priming is idempotent and cosmetic.
    channel::prime(&mut sink);
    channel::prime(&mut sink);
    assert!(sink.container_shown);
    assert_eq!(sink.renders, vec![1, 1]);

    tx.send(ChannelEvent::Connect).await.unwrap();
    tx.send(progress(30)).await.unwrap();
    tx.send(progress(100)).await.unwrap();
    drop(tx);

    let state = channel::run(rx, &mut sink).await;
    assert_eq!(state, SessionState::Succeeded);
    assert_eq!(sink.renders, vec![1, 1, 30, 100]);
}

#[tokio::test]
async fn events_before_connect_render_nothing() {
    let (tx, rx) = channel::inbox();
    let mut sink = RecordingSink::default();

    // The session never opened; progress and error are ignored and closing
    // the inbox leaves it Idle rather than Disconnected.
    tx.send(progress(50)).await.unwrap();
    tx.send(ChannelEvent::Error { message: "early".to_string() }).await.unwrap();
    drop(tx);

    let state = channel::run(rx, &mut sink).await;
    assert_eq!(state, SessionState::Idle);
    assert!(sink.renders.is_empty());
    assert!(sink.alerts.is_empty());
}

#[tokio::test]
async fn wire_decode_feeds_the_inbox() {
    // Decode straight off the wire shapes the transport adapter sees.
    let (tx, rx) = channel::inbox();
    let mut sink = RecordingSink::default();

    let events = [
        ("connect", None),
        ("progress_update", Some(r#"{"progress": 75}"#)),
        ("progress_update", Some(r#"{"progress": 100}"#)),
    ];
    for (name, payload) in events {
        tx.send(ChannelEvent::from_wire(name, payload).unwrap()).await.unwrap();
    }
    drop(tx);

    let state = channel::run(rx, &mut sink).await;
    assert_eq!(state, SessionState::Succeeded);
    assert_eq!(sink.renders, vec![75, 100]);
}
