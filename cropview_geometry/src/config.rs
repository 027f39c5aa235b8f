// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::error::GeometryError;
use crate::modes::CropClamp;

/// Default floor for the maximum zoom scale.
pub const DEFAULT_USER_MIN_SCALE: f64 = 0.8;

/// Configuration consulted when a [`crate::ViewportState`] is initialized.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CropConfig {
    /// Floor for the maximum zoom scale.
    ///
    /// The maximum zoom is `max(fill_scale, user_min_scale)`, so the zoom
    /// range never collapses to a single value when the image is large
    /// relative to the viewport.
    pub user_min_scale: f64,
    /// Native image pixels per content unit.
    ///
    /// Content sizes are often expressed in logical units (for example
    /// points on a 2x display) while crops address native pixels. With the
    /// default ratio of `1.0` the two spaces coincide.
    pub pixel_ratio: f64,
    /// Whether [`crate::ViewportState::apply_crop`] clamps its result.
    pub crop_clamp: CropClamp,
}

impl Default for CropConfig {
    fn default() -> Self {
        Self {
            user_min_scale: DEFAULT_USER_MIN_SCALE,
            pixel_ratio: 1.0,
            crop_clamp: CropClamp::default(),
        }
    }
}

impl CropConfig {
    /// Returns a copy with the given user minimum scale.
    #[must_use]
    pub fn with_user_min_scale(mut self, user_min_scale: f64) -> Self {
        self.user_min_scale = user_min_scale;
        self
    }

    /// Returns a copy with the given native pixel ratio.
    #[must_use]
    pub fn with_pixel_ratio(mut self, pixel_ratio: f64) -> Self {
        self.pixel_ratio = pixel_ratio;
        self
    }

    /// Returns a copy with the given crop clamp mode.
    #[must_use]
    pub fn with_crop_clamp(mut self, crop_clamp: CropClamp) -> Self {
        self.crop_clamp = crop_clamp;
        self
    }

    pub(crate) fn validate(&self) -> Result<(), GeometryError> {
        if !is_positive(self.user_min_scale) {
            return Err(GeometryError::InvalidUserMinScale(self.user_min_scale));
        }
        if !is_positive(self.pixel_ratio) {
            return Err(GeometryError::InvalidPixelRatio(self.pixel_ratio));
        }
        Ok(())
    }
}

pub(crate) fn is_positive(value: f64) -> bool {
    value.is_finite() && value > 0.0
}
