// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/stegpanel

//! # stegpanel
//!
//! Client-side coordinator for an LSB image-steganography workflow. Three
//! pieces composed around a single page session:
//!
//! - **Capacity estimation** ([`capacity`], [`probe`]): decode the selected
//!   cover image's dimensions and derive how much payload it can conceal —
//!   one LSB per color component, three components per pixel.
//! - **Submission validation** ([`validate`]): a pure gate consulted by the
//!   pre-submit hook. Blocks sub-1 KB covers and payloads that exceed the
//!   current estimate; an estimate that has not arrived yet never blocks.
//! - **Extraction progress** ([`channel`]): a bounded inbox of server-pushed
//!   events on the extract namespace, driving a six-state session machine
//!   and, through a sink seam, the progress UI.
//!
//! The embedding document, the server-side embedding/extraction algorithm,
//! and the transport handshake are external collaborators; this crate owns
//! the decisions between them.
//!
//! # Quick start
//!
//! ```rust,ignore
//! use stegpanel::{CapacityLabel, PageSession};
//!
//! let mut page = PageSession::new();
//! if let Some(est) = page.select_cover("photo.png").await {
//!     println!("{}", CapacityLabel::Detailed.text(est));
//! }
//! page.select_payload(200 * 1024);
//! if page.allow_submit() {
//!     // hand the form to the server, then drain the progress inbox
//! }
//! ```

pub mod capacity;
pub mod channel;
pub mod page;
pub mod probe;
pub mod validate;

pub use capacity::{estimate, CapacityEstimate, CoverImage, Estimator, Generation, LSB_CHANNELS};
pub use channel::{
    ChannelEvent, Effect, ProgressSession, ProgressSink, SessionState, WireError,
    EXTRACT_NAMESPACE,
};
pub use page::{confirm_exit, CapacityLabel, ConfirmPrompt, PageSession};
pub use probe::{probe_bytes, probe_cover, DecodeError};
pub use validate::{check_submission, PayloadFile, ValidationError, MIN_COVER_BYTES};
