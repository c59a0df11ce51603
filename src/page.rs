// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/stegpanel

//! One page session: element bindings, cover/payload selection, and the
//! pre-submit gate.
//!
//! The embedding document supplies the elements named here; the markup
//! itself is outside this crate. The capacity display ships under one of two
//! ids depending on the page variant, with slightly different label text —
//! both are detected and used interchangeably.

use std::path::Path;

use crate::capacity::{CapacityEstimate, CoverImage, Estimator, Generation};
use crate::probe::{self, DecodeError};
use crate::validate::{check_submission, PayloadFile, ValidationError};

/// Element ids the coordinator binds to.
pub const COVER_INPUT_ID: &str = "cover_image";
pub const PAYLOAD_INPUT_ID: &str = "hidden_file";
pub const PROGRESS_BAR_ID: &str = "progress";
pub const PROGRESS_TEXT_ID: &str = "progress-text";
pub const PROGRESS_CONTAINER_ID: &str = "progress-container";

/// Class of the exit control.
pub const EXIT_CONTROL_CLASS: &str = "exit-btn";

/// Prompt text shown by the exit control.
pub const EXIT_PROMPT: &str = "Are you sure you want to exit?";

/// The two acceptable capacity display elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CapacityLabel {
    /// `capacity_display`: full sentence label.
    Detailed,
    /// `capacity_value`: bare value.
    Plain,
}

impl CapacityLabel {
    /// Map an element id to its label kind, if it is one of the two known ids.
    pub fn from_element_id(id: &str) -> Option<Self> {
        match id {
            "capacity_display" => Some(Self::Detailed),
            "capacity_value" => Some(Self::Plain),
            _ => None,
        }
    }

    /// Presentation text for `estimate`. The only place capacity is rounded.
    pub fn text(&self, estimate: CapacityEstimate) -> String {
        match self {
            Self::Detailed => format!("Maximum capacity: {estimate}"),
            Self::Plain => estimate.to_string(),
        }
    }
}

/// Prompt seam for the exit control.
pub trait ConfirmPrompt {
    /// Show a blocking yes/no prompt; `true` means the user confirmed.
    fn confirm(&mut self, prompt: &str) -> bool;
}

/// Gate navigation away from the page. Declining the prompt cancels the
/// navigation (`false`).
pub fn confirm_exit(prompt: &mut impl ConfirmPrompt) -> bool {
    prompt.confirm(EXIT_PROMPT)
}

/// State for one page lifetime: the current selections plus the capacity
/// estimator. Selections replace state wholesale; nothing here mutates the
/// files themselves.
#[derive(Debug, Default)]
pub struct PageSession {
    estimator: Estimator,
    cover: Option<CoverImage>,
    payload: Option<PayloadFile>,
}

impl PageSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a new cover selection and get its generation token.
    ///
    /// Clears the previous cover and estimate immediately: until the new
    /// probe completes, capacity is unknown (and validation treats unknown as
    /// passing). Feed the probe result to [`PageSession::apply_probe`].
    pub fn begin_cover_selection(&mut self) -> Generation {
        self.cover = None;
        self.estimator.begin_selection()
    }

    /// Apply a finished probe for the selection `generation` started.
    ///
    /// Stale results — a newer selection exists — are discarded. A decode
    /// failure is logged and skipped, never surfaced to the user.
    pub fn apply_probe(
        &mut self,
        generation: Generation,
        result: Result<CoverImage, DecodeError>,
    ) -> Option<CapacityEstimate> {
        match result {
            Ok(cover) => {
                let est = self.estimator.apply(generation, &cover)?;
                self.cover = Some(cover);
                Some(est)
            }
            Err(err) => {
                log::debug!("cover probe failed, skipping estimate: {err}");
                None
            }
        }
    }

    /// Handle a cover-image selection end to end: begin, probe, apply.
    ///
    /// Returns the new estimate, or `None` when the image is undecodable or
    /// the selection was superseded while decoding.
    pub async fn select_cover(&mut self, path: impl AsRef<Path>) -> Option<CapacityEstimate> {
        let generation = self.begin_cover_selection();
        let result = probe::probe_cover(path.as_ref()).await;
        self.apply_probe(generation, result)
    }

    /// Record the payload file selection.
    pub fn select_payload(&mut self, size_bytes: u64) {
        self.payload = Some(PayloadFile::new(size_bytes));
    }

    pub fn cover(&self) -> Option<&CoverImage> {
        self.cover.as_ref()
    }

    pub fn payload(&self) -> Option<&PayloadFile> {
        self.payload.as_ref()
    }

    /// The capacity estimate for the currently selected cover, if it has
    /// finished decoding.
    pub fn capacity(&self) -> Option<CapacityEstimate> {
        self.estimator.current()
    }

    /// The synchronous pre-submit gate.
    pub fn check_submission(&self) -> Result<(), ValidationError> {
        check_submission(self.cover.as_ref(), self.payload.as_ref(), self.capacity())
    }

    /// Boolean form for the native submit hook: `false` aborts submission.
    pub fn allow_submit(&self) -> bool {
        self.check_submission().is_ok()
    }
}
