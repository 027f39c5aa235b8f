// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Affine, Point, Rect, Size, Vec2};

use crate::config::{CropConfig, is_positive};
use crate::error::GeometryError;
use crate::modes::CropClamp;
use crate::pixel::PixelRect;

/// Pan/zoom state of an image shown through a fixed‑size viewport.
///
/// Three coordinate spaces are involved:
/// - **Content space**: the image at zoom `1.0`, in content units.
/// - **View space**: the viewport, in device units. A content point `c` maps
///   to `c * zoom_scale - offset`.
/// - **Pixel space**: the image's native pixels, `content * pixel_ratio`.
///   Crop rectangles live here and do not depend on the zoom.
///
/// The offset is the view‑space position of the top‑left visible point
/// within the zoomed content.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewportState {
    content_size: Size,
    viewport_size: Size,
    offset: Point,
    zoom_scale: f64,
    min_zoom_scale: f64,
    max_zoom_scale: f64,
    config: CropConfig,
}

impl ViewportState {
    /// Creates a state that fills `viewport_size` with the centered image.
    ///
    /// This is [`ViewportState::initialize_with`] with a default
    /// [`CropConfig`] whose `user_min_scale` is replaced.
    pub fn initialize(
        content_size: Size,
        viewport_size: Size,
        user_min_scale: f64,
    ) -> Result<Self, GeometryError> {
        let config = CropConfig::default().with_user_min_scale(user_min_scale);
        Self::initialize_with(content_size, viewport_size, &config)
    }

    /// Creates a state that fills `viewport_size` with the centered image.
    ///
    /// - The minimum zoom is the fill scale: the smallest zoom at which the
    ///   image covers the viewport on both axes.
    /// - The maximum zoom is `max(min_zoom_scale, config.user_min_scale)`.
    /// - The zoom starts at the minimum and the image is centered, so it
    ///   exactly fills the viewport on at least one axis.
    ///
    /// Both sizes must be positive and finite.
    pub fn initialize_with(
        content_size: Size,
        viewport_size: Size,
        config: &CropConfig,
    ) -> Result<Self, GeometryError> {
        if !is_positive_size(content_size) {
            return Err(GeometryError::InvalidContentSize(content_size));
        }
        if !is_positive_size(viewport_size) {
            return Err(GeometryError::InvalidViewportSize(viewport_size));
        }
        config.validate()?;

        let scale_width = viewport_size.width / content_size.width;
        let scale_height = viewport_size.height / content_size.height;
        let min_zoom_scale = scale_width.max(scale_height);
        if !is_positive(min_zoom_scale) {
            return Err(GeometryError::InvalidContentSize(content_size));
        }
        let max_zoom_scale = min_zoom_scale.max(config.user_min_scale);

        let zoom_scale = min_zoom_scale;
        let displayed = content_size * zoom_scale;
        let offset = Point::new(
            (displayed.width - viewport_size.width) / 2.0,
            (displayed.height - viewport_size.height) / 2.0,
        );
        if !offset.is_finite() {
            return Err(GeometryError::InvalidContentSize(content_size));
        }

        Ok(Self {
            content_size,
            viewport_size,
            offset,
            zoom_scale,
            min_zoom_scale,
            max_zoom_scale,
            config: *config,
        })
    }

    /// Returns the image size in content units.
    #[must_use]
    pub fn content_size(&self) -> Size {
        self.content_size
    }

    /// Returns the viewport size in view units.
    #[must_use]
    pub fn viewport_size(&self) -> Size {
        self.viewport_size
    }

    /// Returns the pan offset in view units.
    #[must_use]
    pub fn offset(&self) -> Point {
        self.offset
    }

    /// Returns the current zoom scale.
    #[must_use]
    pub fn zoom_scale(&self) -> f64 {
        self.zoom_scale
    }

    /// Returns the fill scale, the lower end of the zoom range.
    #[must_use]
    pub fn min_zoom_scale(&self) -> f64 {
        self.min_zoom_scale
    }

    /// Returns the upper end of the zoom range.
    #[must_use]
    pub fn max_zoom_scale(&self) -> f64 {
        self.max_zoom_scale
    }

    /// Returns the configured floor for the maximum zoom scale.
    #[must_use]
    pub fn user_min_scale(&self) -> f64 {
        self.config.user_min_scale
    }

    /// Returns the configuration this state was initialized with.
    #[must_use]
    pub fn config(&self) -> &CropConfig {
        &self.config
    }

    /// Returns the image size in native pixels.
    #[must_use]
    pub fn native_pixel_size(&self) -> Size {
        self.content_size * self.config.pixel_ratio
    }

    /// Returns the on‑screen size of the image at the current zoom.
    #[must_use]
    pub fn displayed_content_size(&self) -> Size {
        self.content_size * self.zoom_scale
    }

    /// Returns the largest offset that keeps the viewport covered.
    ///
    /// Each component is floored at zero, which is the case for an axis where
    /// the displayed image is narrower than the viewport.
    #[must_use]
    pub fn max_offset(&self) -> Vec2 {
        let displayed = self.displayed_content_size();
        Vec2::new(
            (displayed.width - self.viewport_size.width).max(0.0),
            (displayed.height - self.viewport_size.height).max(0.0),
        )
    }

    /// Returns the transform from content space into view space.
    #[must_use]
    pub fn content_to_view(&self) -> Affine {
        Affine::translate(-self.offset.to_vec2()) * Affine::scale(self.zoom_scale)
    }

    /// Converts a content‑space point into view coordinates.
    #[must_use]
    pub fn content_to_view_point(&self, pt: Point) -> Point {
        self.content_to_view() * pt
    }

    /// Converts a view‑space point into content coordinates.
    #[must_use]
    pub fn view_to_content_point(&self, pt: Point) -> Point {
        self.content_to_view().inverse() * pt
    }

    /// Returns the rectangle currently framed by the viewport, in native
    /// image pixels.
    ///
    /// The rectangle lies inside the image bounds as long as the offset and
    /// zoom were produced by this type's own operations.
    #[must_use]
    pub fn crop_rect(&self) -> Rect {
        let scale = self.native_pixel_size().width / self.displayed_content_size().width;
        Rect::from_origin_size(
            (self.offset.to_vec2() * scale).to_point(),
            self.viewport_size * scale,
        )
    }

    /// Returns the integral pixel region to extract for the current crop.
    ///
    /// The crop rectangle is expanded outward to whole pixels and then
    /// intersected with the image. Returns `None` if nothing of the image
    /// remains.
    #[must_use]
    pub fn pixel_crop_rect(&self) -> Option<PixelRect> {
        let image = Rect::from_origin_size(Point::ORIGIN, self.native_pixel_size()).trunc();
        let region = self.crop_rect().expand().intersect(image);
        PixelRect::from_integral_rect(region)
    }

    /// Sets the pan and zoom so that the viewport frames `crop`, a rectangle
    /// in native image pixels.
    ///
    /// The zoom is derived from the crop width alone. Under
    /// [`CropClamp::None`] the result is applied as is and may lie outside the
    /// zoom range; under [`CropClamp::ZoomRange`] zoom and offset are clamped.
    ///
    /// Rectangles whose width, derived zoom or derived offset is not a
    /// positive finite number (for example through overflow) are rejected
    /// and leave the state unchanged.
    pub fn apply_crop(&mut self, crop: Rect) -> Result<(), GeometryError> {
        if !crop.is_finite() || !is_positive(crop.width()) {
            return Err(GeometryError::InvalidCropRect(crop));
        }
        let scale = crop.width() / self.viewport_size.width;
        let zoom_scale = self.config.pixel_ratio / scale;
        if !is_positive(scale) || !is_positive(zoom_scale) {
            return Err(GeometryError::InvalidCropRect(crop));
        }

        let (zoom_scale, offset) = match self.config.crop_clamp {
            CropClamp::None => (zoom_scale, Point::new(crop.x0 / scale, crop.y0 / scale)),
            CropClamp::ZoomRange => {
                let zoom_scale = zoom_scale.clamp(self.min_zoom_scale, self.max_zoom_scale);
                let view_per_pixel = zoom_scale / self.config.pixel_ratio;
                (
                    zoom_scale,
                    Point::new(crop.x0 * view_per_pixel, crop.y0 * view_per_pixel),
                )
            }
        };
        if !offset.is_finite() {
            return Err(GeometryError::InvalidCropRect(crop));
        }
        self.zoom_scale = zoom_scale;
        self.offset = offset;
        if self.config.crop_clamp == CropClamp::ZoomRange {
            self.clamp_offset();
        }
        Ok(())
    }

    /// Returns a copy of this state framing `crop`.
    ///
    /// See [`ViewportState::apply_crop`].
    pub fn with_crop(mut self, crop: Rect) -> Result<Self, GeometryError> {
        self.apply_crop(crop)?;
        Ok(self)
    }

    /// Sets the zoom scale, keeping the viewport center fixed.
    ///
    /// The zoom is clamped into the zoom range and the offset into the pan
    /// range. Non‑finite values are ignored.
    pub fn set_zoom_scale(&mut self, zoom_scale: f64) {
        if !zoom_scale.is_finite() {
            return;
        }
        let center = (self.viewport_size.to_vec2() / 2.0).to_point();
        self.zoom_to(zoom_scale, center, center);
    }

    /// Zooms by `factor` around an anchor point in view coordinates.
    ///
    /// The content under `anchor_view` stays under it, unless pan clamping
    /// has to move it to keep the viewport covered. Non‑positive or
    /// non‑finite factors are ignored.
    pub fn zoom_about_view_point(&mut self, anchor_view: Point, factor: f64) {
        if !is_positive(factor) {
            return;
        }
        self.zoom_to(self.zoom_scale * factor, anchor_view, anchor_view);
    }

    /// Zooms by `factor` around `from` and moves the content that was under
    /// `from` to `to`, both in view coordinates.
    ///
    /// This is one step of a pinch whose midpoint moved from `from` to `to`.
    /// Zoom and offset are clamped once, after both changes. Non‑positive or
    /// non‑finite factors and non‑finite points are ignored.
    pub fn pinch_about_view_points(&mut self, from: Point, to: Point, factor: f64) {
        if !is_positive(factor) || !from.is_finite() || !to.is_finite() {
            return;
        }
        self.zoom_to(self.zoom_scale * factor, from, to);
    }

    /// Pans by a delta in view space, clamped to the pan range.
    pub fn pan_by(&mut self, delta: Vec2) {
        if delta == Vec2::ZERO || !delta.is_finite() {
            return;
        }
        self.offset += delta;
        self.clamp_offset();
    }

    /// Replaces the viewport size and re‑runs initialization.
    ///
    /// Zoom limits depend on the viewport, so the previous pan and zoom are
    /// discarded and the image is centered at its new fill scale.
    pub fn set_viewport_size(&mut self, viewport_size: Size) -> Result<(), GeometryError> {
        *self = Self::initialize_with(self.content_size, viewport_size, &self.config)?;
        Ok(())
    }

    fn zoom_to(&mut self, zoom_scale: f64, from: Point, to: Point) {
        let clamped = zoom_scale.clamp(self.min_zoom_scale, self.max_zoom_scale);
        if from == to && (self.zoom_scale - clamped).abs() < f64::EPSILON {
            return;
        }
        let anchor_content = self.view_to_content_point(from);
        self.zoom_scale = clamped;
        let moved = self.content_to_view_point(anchor_content);
        self.offset += moved - to;
        self.clamp_offset();
    }

    fn clamp_offset(&mut self) {
        let max = self.max_offset();
        self.offset = Point::new(
            self.offset.x.clamp(0.0, max.x),
            self.offset.y.clamp(0.0, max.y),
        );
    }
}

fn is_positive_size(size: Size) -> bool {
    is_positive(size.width) && is_positive(size.height)
}
