// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/stegpanel

//! Pre-submission validation gate.
//!
//! Consulted synchronously by the submit hook, immediately before the form
//! submission is allowed to proceed; a failed decision blocks the native
//! submission entirely. Pure: never mutates the cover, payload, or estimate,
//! and identical inputs always give identical results.

use core::fmt;

use crate::capacity::{CapacityEstimate, CoverImage};

/// Minimum acceptable cover image size. Sub-1 KB covers are almost always a
/// decode artifact or placeholder file rather than a usable carrier.
pub const MIN_COVER_BYTES: u64 = 1024;

/// The file selected for hiding inside the cover image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PayloadFile {
    size_bytes: u64,
}

impl PayloadFile {
    pub fn new(size_bytes: u64) -> Self {
        Self { size_bytes }
    }

    pub fn size_bytes(&self) -> u64 {
        self.size_bytes
    }

    /// File size in kilobytes, exact.
    pub fn size_kb(&self) -> f64 {
        self.size_bytes as f64 / 1024.0
    }
}

/// Reasons a submission is blocked. Both are recoverable by choosing
/// different files; nothing is retried automatically.
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// The cover image is under [`MIN_COVER_BYTES`].
    CoverTooSmall,
    /// The payload does not fit the cover's embedding capacity.
    /// Carries both sizes (exact kilobytes) for the user-facing message.
    PayloadExceedsCapacity { payload_kb: f64, capacity_kb: f64 },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CoverTooSmall => {
                write!(f, "the cover image is too small (minimum size is 1 KB)")
            }
            Self::PayloadExceedsCapacity { payload_kb, capacity_kb } => write!(
                f,
                "selected file size ({payload_kb:.2} KB) exceeds the maximum capacity ({capacity_kb:.2} KB)"
            ),
        }
    }
}

impl std::error::Error for ValidationError {}

/// Decide whether submission may proceed.
///
/// Rules in order; the first failing rule determines the reported reason:
/// 1. a present cover under 1 KB fails with [`ValidationError::CoverTooSmall`],
///    regardless of the payload;
/// 2. a present payload larger than a *known* capacity estimate fails with
///    [`ValidationError::PayloadExceedsCapacity`];
/// 3. otherwise the submission proceeds.
///
/// A missing estimate skips rule 2 rather than failing it: the user is not
/// blocked waiting on an estimate that has not arrived yet ("unknown passes").
/// Sizes are compared exactly, in unrounded kilobytes; rounding happens only
/// in the error message.
pub fn check_submission(
    cover: Option<&CoverImage>,
    payload: Option<&PayloadFile>,
    capacity: Option<CapacityEstimate>,
) -> Result<(), ValidationError> {
    if let Some(cover) = cover {
        if cover.size_bytes() < MIN_COVER_BYTES {
            return Err(ValidationError::CoverTooSmall);
        }
    }

    if let (Some(payload), Some(capacity)) = (payload, capacity) {
        if payload.size_kb() > capacity.kilobytes() {
            return Err(ValidationError::PayloadExceedsCapacity {
                payload_kb: payload.size_kb(),
                capacity_kb: capacity.kilobytes(),
            });
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kb(n: u64) -> u64 {
        n * 1024
    }

    fn capacity_kb(n: u64) -> CapacityEstimate {
        CapacityEstimate::from_bits(n * 1024 * 8)
    }

    #[test]
    fn small_cover_blocked_regardless_of_payload() {
        // 0.5 KB cover.
        let cover = CoverImage::new(100, 100, 512).unwrap();
        let result = check_submission(Some(&cover), None, None);
        assert_eq!(result, Err(ValidationError::CoverTooSmall));

        // Even with a payload that would otherwise fit.
        let payload = PayloadFile::new(kb(1));
        let result = check_submission(Some(&cover), Some(&payload), Some(capacity_kb(100)));
        assert_eq!(result, Err(ValidationError::CoverTooSmall));
    }

    #[test]
    fn cover_at_exactly_one_kb_passes() {
        let cover = CoverImage::new(100, 100, 1024).unwrap();
        assert_eq!(check_submission(Some(&cover), None, None), Ok(()));
    }

    #[test]
    fn oversized_payload_blocked_with_both_sizes() {
        let payload = PayloadFile::new(kb(150));
        let result = check_submission(None, Some(&payload), Some(capacity_kb(100)));
        assert_eq!(
            result,
            Err(ValidationError::PayloadExceedsCapacity {
                payload_kb: 150.0,
                capacity_kb: 100.0,
            })
        );
    }

    #[test]
    fn payload_under_capacity_passes() {
        // 99.989 KB < 100 KB.
        let payload = PayloadFile::new(102_389);
        assert_eq!(
            check_submission(None, Some(&payload), Some(capacity_kb(100))),
            Ok(())
        );
    }

    #[test]
    fn payload_at_exact_capacity_passes() {
        // "Exceeds" is strict: a payload equal to capacity is allowed.
        let payload = PayloadFile::new(kb(100));
        assert_eq!(
            check_submission(None, Some(&payload), Some(capacity_kb(100))),
            Ok(())
        );
    }

    #[test]
    fn unknown_capacity_passes() {
        // No estimate yet — payload-size checks are skipped, not failed.
        let payload = PayloadFile::new(kb(10_000));
        assert_eq!(check_submission(None, Some(&payload), None), Ok(()));

        let cover = CoverImage::new(800, 600, kb(200)).unwrap();
        assert_eq!(check_submission(Some(&cover), Some(&payload), None), Ok(()));
    }

    #[test]
    fn nothing_selected_passes() {
        assert_eq!(check_submission(None, None, None), Ok(()));
    }

    #[test]
    fn pure_and_repeatable() {
        let cover = CoverImage::new(800, 600, kb(200)).unwrap();
        let payload = PayloadFile::new(kb(150));
        let first = check_submission(Some(&cover), Some(&payload), Some(capacity_kb(100)));
        let second = check_submission(Some(&cover), Some(&payload), Some(capacity_kb(100)));
        assert_eq!(first, second);
    }

    #[test]
    fn message_cites_two_decimal_sizes() {
        let err = ValidationError::PayloadExceedsCapacity {
            payload_kb: 200.0,
            capacity_kb: 175.78125,
        };
        assert_eq!(
            err.to_string(),
            "selected file size (200.00 KB) exceeds the maximum capacity (175.78 KB)"
        );
    }
}
