// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::boxed::Box;
use core::fmt;

use cropview_geometry::{PixelRect, ViewportState};
use kurbo::{Rect, Size};
use tracing::{debug, trace};

use crate::config::CropViewConfig;
use crate::error::CropViewError;
use crate::touch::{Gesture, TouchEvent, TouchTracker};

/// Callback invoked when the user taps an editable [`ImageCropView`].
pub type TapHandler = Box<dyn FnMut(&ImageCropView)>;

/// Headless image crop view.
///
/// Owns the pan/zoom [`ViewportState`] of one image, the edit mode, and an
/// optional tap handler. A host UI layer renders the image using
/// [`ViewportState::content_to_view`] and forwards its touch input to
/// [`ImageCropView::handle_touch`].
///
/// Lifecycle:
/// 1. [`ImageCropView::setup`] with the image size (and tap handler).
/// 2. [`ImageCropView::display`] once the viewport size is known.
/// 3. Let the user pan and zoom.
/// 4. Read the framed region with [`ImageCropView::crop_rect`], or program
///    one with [`ImageCropView::set_crop`].
pub struct ImageCropView {
    config: CropViewConfig,
    image_size: Option<Size>,
    state: Option<ViewportState>,
    editable: bool,
    touches: TouchTracker,
    tap_handler: Option<TapHandler>,
}

impl fmt::Debug for ImageCropView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ImageCropView")
            .field("config", &self.config)
            .field("image_size", &self.image_size)
            .field("state", &self.state)
            .field("editable", &self.editable)
            .field("touches", &self.touches)
            .field("tap_handler", &self.tap_handler.is_some())
            .finish()
    }
}

impl Default for ImageCropView {
    fn default() -> Self {
        Self::new(CropViewConfig::default())
    }
}

impl ImageCropView {
    /// Creates an empty, editable view.
    #[must_use]
    pub fn new(config: CropViewConfig) -> Self {
        Self {
            config,
            image_size: None,
            state: None,
            editable: true,
            touches: TouchTracker::new(config.tap_slop),
            tap_handler: None,
        }
    }

    /// Returns the view configuration.
    #[must_use]
    pub fn config(&self) -> &CropViewConfig {
        &self.config
    }

    /// Sets the image to show, replacing any previous one.
    ///
    /// The view must be displayed again before crops are available.
    pub fn setup(&mut self, image_size: Size, tap_handler: Option<TapHandler>) {
        debug!(
            width = image_size.width,
            height = image_size.height,
            "set up crop view"
        );
        self.image_size = Some(image_size);
        self.state = None;
        self.touches.reset();
        self.tap_handler = tap_handler;
    }

    /// Returns the image size given to [`ImageCropView::setup`].
    #[must_use]
    pub fn image_size(&self) -> Option<Size> {
        self.image_size
    }

    /// Fits and centers the image in a viewport of the given size.
    pub fn display(&mut self, viewport_size: Size) -> Result<(), CropViewError> {
        let image_size = self.image_size.ok_or(CropViewError::NoContent)?;
        let state = ViewportState::initialize_with(image_size, viewport_size, &self.config.crop)?;
        debug!(
            viewport_width = viewport_size.width,
            viewport_height = viewport_size.height,
            min_zoom = state.min_zoom_scale(),
            max_zoom = state.max_zoom_scale(),
            "displayed crop view"
        );
        self.state = Some(state);
        Ok(())
    }

    /// Handles a viewport resize.
    ///
    /// A displayed view is displayed again at the new size, which resets pan
    /// and zoom. Before the first display this is a no‑op.
    pub fn set_viewport_size(&mut self, viewport_size: Size) -> Result<(), CropViewError> {
        if self.state.is_some() {
            self.display(viewport_size)?;
        }
        Ok(())
    }

    /// Returns the current pan/zoom state, if displayed.
    #[must_use]
    pub fn state(&self) -> Option<&ViewportState> {
        self.state.as_ref()
    }

    /// Returns the framed region in native image pixels.
    pub fn crop_rect(&self) -> Result<Rect, CropViewError> {
        self.displayed().map(ViewportState::crop_rect)
    }

    /// Returns the integral pixel region to extract for the framed region.
    ///
    /// `Ok(None)` means the crop does not overlap the image at all.
    pub fn pixel_crop_rect(&self) -> Result<Option<PixelRect>, CropViewError> {
        self.displayed().map(ViewportState::pixel_crop_rect)
    }

    /// Pans and zooms so the viewport frames `crop`, in native image pixels.
    ///
    /// This works regardless of the edit mode.
    pub fn set_crop(&mut self, crop: Rect) -> Result<(), CropViewError> {
        let state = self.state.as_mut().ok_or(CropViewError::NotDisplayed)?;
        state.apply_crop(crop)?;
        debug!(
            x = crop.x0,
            y = crop.y0,
            width = crop.width(),
            height = crop.height(),
            zoom = state.zoom_scale(),
            "applied crop"
        );
        Ok(())
    }

    /// Returns `true` if touch input may pan and zoom the image.
    #[must_use]
    pub fn is_editable(&self) -> bool {
        self.editable
    }

    /// Enables or disables editing.
    ///
    /// A view that is not editable ignores pan and pinch gestures and does
    /// not report taps, but keeps showing its current crop. Pan and zoom are
    /// never changed by this call.
    pub fn set_editable(&mut self, editable: bool) {
        if self.editable != editable {
            debug!(editable, "crop view edit mode changed");
            self.editable = editable;
        }
    }

    /// Returns `true` if panning gestures are applied.
    #[must_use]
    pub fn panning_enabled(&self) -> bool {
        self.editable
    }

    /// Returns `true` if pinch‑zoom gestures are applied.
    #[must_use]
    pub fn zooming_enabled(&self) -> bool {
        self.editable
    }

    /// Replaces the tap handler.
    pub fn set_tap_handler(&mut self, tap_handler: Option<TapHandler>) {
        self.tap_handler = tap_handler;
    }

    /// Returns `true` while a touch sequence is in progress.
    #[must_use]
    pub fn is_tracking_touches(&self) -> bool {
        self.touches.is_active()
    }

    /// Feeds one touch event into the view.
    ///
    /// Motion pans or pinch‑zooms the image while editable. When the last
    /// touch of a sequence that did neither is lifted, the tap handler runs
    /// once.
    pub fn handle_touch(&mut self, event: TouchEvent) {
        match self.touches.handle(event) {
            Gesture::Idle => {}
            Gesture::Pan(delta) => {
                if let Some(state) = self.interactive_state() {
                    // Dragging the image right reveals content to its left.
                    state.pan_by(-delta);
                    trace!(dx = delta.x, dy = delta.y, "pan");
                }
            }
            Gesture::Pinch {
                anchor,
                factor,
                pan,
            } => {
                if let Some(state) = self.interactive_state() {
                    state.pinch_about_view_points(anchor - pan, anchor, factor);
                    trace!(factor, zoom = state.zoom_scale(), "pinch");
                }
            }
            Gesture::Ended { tapped } => {
                if tapped && self.editable {
                    self.dispatch_tap();
                }
            }
        }
    }

    fn displayed(&self) -> Result<&ViewportState, CropViewError> {
        self.state.as_ref().ok_or(CropViewError::NotDisplayed)
    }

    fn interactive_state(&mut self) -> Option<&mut ViewportState> {
        if self.editable {
            self.state.as_mut()
        } else {
            None
        }
    }

    fn dispatch_tap(&mut self) {
        // The handler borrows the view, so it is taken out for the call.
        if let Some(mut handler) = self.tap_handler.take() {
            debug!("crop view tapped");
            handler(&*self);
            self.tap_handler = Some(handler);
        }
    }
}
