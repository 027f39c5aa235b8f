// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Clamp behavior for [`crate::ViewportState::apply_crop`].
///
/// Pan and pinch gestures always keep the state inside its zoom range and pan
/// range. Assigning a crop rectangle does not by default: the zoom is derived
/// purely from the rectangle width, so a crop larger than the image (or
/// smaller than the maximum zoom allows) yields a state outside
/// `[min_zoom_scale, max_zoom_scale]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum CropClamp {
    /// Apply the crop exactly; the resulting zoom and offset are not clamped.
    #[default]
    None,
    /// Clamp the derived zoom into the zoom range, keep the requested
    /// image‑space origin, then clamp the offset into the pan range.
    ZoomRange,
}
