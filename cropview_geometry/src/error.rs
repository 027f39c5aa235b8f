// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

use kurbo::{Rect, Size};

/// Error returned when geometry inputs violate a precondition.
///
/// Every variant carries the offending value. None of these are runtime
/// conditions to recover from: they indicate that a caller supplied a
/// degenerate image, viewport, crop rectangle or configuration.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GeometryError {
    /// A content (image) dimension is zero, negative or not finite.
    InvalidContentSize(Size),
    /// A viewport dimension is zero, negative or not finite.
    InvalidViewportSize(Size),
    /// A crop rectangle has a non‑positive width or a non‑finite coordinate.
    InvalidCropRect(Rect),
    /// The configured user minimum scale is not a positive finite number.
    InvalidUserMinScale(f64),
    /// The configured pixel ratio is not a positive finite number.
    InvalidPixelRatio(f64),
}

impl fmt::Display for GeometryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidContentSize(size) => write!(
                f,
                "content size {}x{} must be positive and finite",
                size.width, size.height
            ),
            Self::InvalidViewportSize(size) => write!(
                f,
                "viewport size {}x{} must be positive and finite",
                size.width, size.height
            ),
            Self::InvalidCropRect(rect) => write!(
                f,
                "crop rect ({}, {}, {}, {}) must be finite with a positive width",
                rect.x0, rect.y0, rect.x1, rect.y1
            ),
            Self::InvalidUserMinScale(scale) => {
                write!(f, "user min scale {scale} must be positive and finite")
            }
            Self::InvalidPixelRatio(ratio) => {
                write!(f, "pixel ratio {ratio} must be positive and finite")
            }
        }
    }
}

impl core::error::Error for GeometryError {}
