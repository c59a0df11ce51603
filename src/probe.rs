// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/stegpanel

//! Asynchronous cover-image probe.
//!
//! Reads the selected file and decodes just enough of it to learn the pixel
//! dimensions. A failed probe is not user-facing: an unreadable or
//! undecodable cover simply produces no estimate, and the page stays
//! responsive while the decode is in flight.

use core::fmt;
use std::io::Cursor;
use std::path::Path;

use crate::capacity::CoverImage;

/// Reasons a cover image yields no estimate.
#[derive(Debug)]
pub enum DecodeError {
    /// The file could not be read.
    Unreadable(std::io::Error),
    /// The bytes are not a decodable image, or decode to degenerate
    /// (zero) dimensions.
    Undecodable,
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unreadable(e) => write!(f, "cover image unreadable: {e}"),
            Self::Undecodable => write!(f, "cover image could not be decoded"),
        }
    }
}

impl std::error::Error for DecodeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Unreadable(e) => Some(e),
            Self::Undecodable => None,
        }
    }
}

impl From<std::io::Error> for DecodeError {
    fn from(e: std::io::Error) -> Self {
        Self::Unreadable(e)
    }
}

/// Probe a cover image file: byte size plus decoded pixel dimensions.
///
/// This is the only suspending operation in the crate. The caller gates the
/// result with the estimator's generation check, so a probe finishing for a
/// no-longer-selected image is discarded rather than cancelled.
///
/// # Errors
/// - [`DecodeError::Unreadable`] if the file cannot be read.
/// - [`DecodeError::Undecodable`] if the bytes are not a known image format.
pub async fn probe_cover(path: impl AsRef<Path>) -> Result<CoverImage, DecodeError> {
    let bytes = tokio::fs::read(path.as_ref()).await?;
    probe_bytes(&bytes)
}

/// Probe an already-loaded cover image from its raw bytes.
///
/// Only the header is decoded — pixel data is never materialized, so this is
/// cheap even for multi-megabyte covers.
pub fn probe_bytes(bytes: &[u8]) -> Result<CoverImage, DecodeError> {
    let (width, height) = image::ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()
        .map_err(|_| DecodeError::Undecodable)?
        .into_dimensions()
        .map_err(|_| DecodeError::Undecodable)?;

    CoverImage::new(width, height, bytes.len() as u64).ok_or(DecodeError::Undecodable)
}
