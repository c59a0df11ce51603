// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/stegpanel

//! Cover-image capacity estimation.
//!
//! Capacity under the fixed LSB scheme is one bit per color component per
//! pixel, three components per pixel (alpha excluded):
//!
//! ```text
//! bits      = width * height * 3
//! kilobytes = bits / 8 / 1024
//! ```
//!
//! Kilobytes stay exact (`f64`) inside the crate; rounding to two decimals
//! happens only when a value is formatted for display, so downstream
//! validation never compares rounded numbers.

use core::fmt;

/// LSB channels per pixel (R, G, B — alpha excluded).
/// A fixed constant of the embedding scheme, not configurable.
pub const LSB_CHANNELS: u64 = 3;

/// A decoded cover image: pixel dimensions plus on-disk byte size.
///
/// Replaced wholesale when the user picks a new file; never mutated in place.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CoverImage {
    width_px: u32,
    height_px: u32,
    size_bytes: u64,
}

impl CoverImage {
    /// Build a cover image from decoded dimensions and file size.
    ///
    /// Returns `None` when either dimension is zero — a degenerate image
    /// yields no cover and therefore no estimate.
    pub fn new(width_px: u32, height_px: u32, size_bytes: u64) -> Option<Self> {
        if width_px == 0 || height_px == 0 {
            return None;
        }
        Some(Self { width_px, height_px, size_bytes })
    }

    pub fn width_px(&self) -> u32 {
        self.width_px
    }

    pub fn height_px(&self) -> u32 {
        self.height_px
    }

    pub fn size_bytes(&self) -> u64 {
        self.size_bytes
    }

    /// File size in kilobytes, exact.
    pub fn size_kb(&self) -> f64 {
        self.size_bytes as f64 / 1024.0
    }
}

/// Maximum embeddable payload size for a given cover image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CapacityEstimate {
    bits: u64,
}

impl CapacityEstimate {
    /// Build an estimate from a raw bit count.
    pub fn from_bits(bits: u64) -> Self {
        Self { bits }
    }

    pub fn bits(&self) -> u64 {
        self.bits
    }

    /// Capacity in kilobytes, exact (unrounded).
    pub fn kilobytes(&self) -> f64 {
        self.bits as f64 / 8.0 / 1024.0
    }
}

impl fmt::Display for CapacityEstimate {
    /// Two-decimal presentation form, e.g. `175.78 KB`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2} KB", self.kilobytes())
    }
}

/// Estimate the maximum embeddable payload for `image`.
///
/// Pure and total: one LSB per color component, [`LSB_CHANNELS`] components
/// per pixel. Publishing the result is the caller's concern.
pub fn estimate(image: &CoverImage) -> CapacityEstimate {
    let bits = u64::from(image.width_px()) * u64::from(image.height_px()) * LSB_CHANNELS;
    CapacityEstimate { bits }
}

/// Opaque token tying an in-flight probe to the selection that started it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Generation(u64);

/// Owns the current capacity estimate and the selection generation counter.
///
/// The estimator is the single writer of [`CapacityEstimate`] state. Image
/// decoding is asynchronous, so a probe started for an earlier selection can
/// finish after the user has already picked a different file; [`Estimator::apply`]
/// discards such stale results instead of cancelling the probe.
#[derive(Debug, Default)]
pub struct Estimator {
    generation: u64,
    current: Option<CapacityEstimate>,
}

impl Estimator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a new user selection and return its generation token.
    ///
    /// Any probe still in flight for a previous selection is superseded: its
    /// `apply` becomes a no-op. The stored estimate is cleared immediately —
    /// the previous image's estimate must not outlive its selection.
    pub fn begin_selection(&mut self) -> Generation {
        self.generation += 1;
        self.current = None;
        Generation(self.generation)
    }

    /// Apply the probe result for `generation`, if it is still the current
    /// selection. Newest estimate always wins; there is no history.
    ///
    /// Returns the stored estimate, or `None` when the result is stale.
    pub fn apply(&mut self, generation: Generation, image: &CoverImage) -> Option<CapacityEstimate> {
        if generation.0 != self.generation {
            log::debug!(
                "discarding capacity estimate for superseded selection ({} < {})",
                generation.0,
                self.generation
            );
            return None;
        }
        let est = estimate(image);
        self.current = Some(est);
        Some(est)
    }

    /// The latest applied estimate, if the current selection has finished
    /// decoding.
    pub fn current(&self) -> Option<CapacityEstimate> {
        self.current
    }
}
