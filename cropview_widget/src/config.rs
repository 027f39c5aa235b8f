// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use cropview_geometry::CropConfig;

/// Default distance, in view units, a touch may travel and still count as a
/// tap.
pub const DEFAULT_TAP_SLOP: f64 = 10.0;

/// Configuration for an [`crate::ImageCropView`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CropViewConfig {
    /// Geometry configuration used every time the view is displayed.
    pub crop: CropConfig,
    /// Distance a touch may travel before its sequence becomes a pan or
    /// pinch instead of a tap. Negative or NaN values act as zero.
    pub tap_slop: f64,
}

impl Default for CropViewConfig {
    fn default() -> Self {
        Self {
            crop: CropConfig::default(),
            tap_slop: DEFAULT_TAP_SLOP,
        }
    }
}

impl CropViewConfig {
    /// Returns a copy with the given floor for the maximum zoom scale.
    #[must_use]
    pub fn with_min_scale(mut self, min_scale: f64) -> Self {
        self.crop.user_min_scale = min_scale;
        self
    }

    /// Returns a copy with the given geometry configuration.
    #[must_use]
    pub fn with_crop(mut self, crop: CropConfig) -> Self {
        self.crop = crop;
        self
    }

    /// Returns a copy with the given tap slop.
    #[must_use]
    pub fn with_tap_slop(mut self, tap_slop: f64) -> Self {
        self.tap_slop = tap_slop;
        self
    }
}
