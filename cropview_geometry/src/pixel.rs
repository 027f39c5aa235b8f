// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Rect;

/// Integral region of an image, in native pixels.
///
/// This is what an image library needs to actually extract a crop; see
/// [`crate::ViewportState::pixel_crop_rect`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PixelRect {
    /// Left edge, in pixels.
    pub x: u32,
    /// Top edge, in pixels.
    pub y: u32,
    /// Width, in pixels. Never zero.
    pub width: u32,
    /// Height, in pixels. Never zero.
    pub height: u32,
}

impl PixelRect {
    /// Converts a rectangle whose edges already lie on integer coordinates.
    ///
    /// Returns `None` when the rectangle is empty or lies (partly) at negative
    /// coordinates.
    #[expect(
        clippy::cast_possible_truncation,
        reason = "edges are integral, non-negative and bounded by the image size"
    )]
    pub(crate) fn from_integral_rect(rect: Rect) -> Option<Self> {
        if !rect.is_finite() || rect.x0 < 0.0 || rect.y0 < 0.0 {
            return None;
        }
        if rect.width() <= 0.0 || rect.height() <= 0.0 {
            return None;
        }
        Some(Self {
            x: rect.x0 as u32,
            y: rect.y0 as u32,
            width: rect.width() as u32,
            height: rect.height() as u32,
        })
    }

    /// Returns this region as a floating point rectangle.
    #[must_use]
    pub fn to_rect(self) -> Rect {
        Rect::new(
            f64::from(self.x),
            f64::from(self.y),
            f64::from(self.x) + f64::from(self.width),
            f64::from(self.y) + f64::from(self.height),
        )
    }
}
