// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Cropview Geometry: pan/zoom state of an image framed by a viewport.
//!
//! This crate models the geometry behind an image crop view: a viewport of
//! fixed size showing an image that the user can pan and zoom, where the
//! region currently framed is the crop. It provides:
//! - Zoom limits derived from a fill scale, so the image always covers the
//!   viewport without letterboxing.
//! - A centered initial pan/zoom.
//! - Conversion from pan/zoom state to a crop rectangle in native image
//!   pixels, and back.
//! - Clamped pan and anchor‑preserving zoom for gesture handling.
//!
//! It does **not** own any view hierarchy, gesture recognizer or image
//! decoder. Callers are expected to:
//! - Supply the image size and viewport size.
//! - Forward pan/zoom input into [`ViewportState`] mutations.
//! - Use [`ViewportState::crop_rect`] / [`ViewportState::pixel_crop_rect`]
//!   to extract the framed region with their own imaging stack.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Rect, Size};
//! use cropview_geometry::ViewportState;
//!
//! // A portrait image in a square viewport.
//! let mut state =
//!     ViewportState::initialize(Size::new(1000.0, 2000.0), Size::new(500.0, 500.0), 0.8)
//!         .unwrap();
//! assert_eq!(state.min_zoom_scale(), 0.5);
//! assert_eq!(state.max_zoom_scale(), 0.8);
//! assert_eq!(state.offset().y, 250.0);
//!
//! // The viewport frames the middle 1000x1000 pixels of the image.
//! assert_eq!(state.crop_rect(), Rect::new(0.0, 500.0, 1000.0, 1500.0));
//!
//! // Programming a crop sets pan and zoom.
//! state.apply_crop(Rect::new(100.0, 300.0, 725.0, 925.0)).unwrap();
//! assert!((state.zoom_scale() - 0.8).abs() < 1e-9);
//! ```
//!
//! ## Design notes
//!
//! - Zoom is uniform; there is no rotation.
//! - Crop rectangles are in native pixels: content size times
//!   [`CropConfig::pixel_ratio`]. With the default ratio they are in content
//!   units.
//! - [`ViewportState::apply_crop`] does not clamp by default, so a crop can
//!   request a zoom outside the zoom range. Choose [`CropClamp::ZoomRange`]
//!   to keep the state consistent with its limits.
//!
//! This crate is `no_std`.

#![no_std]

mod config;
mod error;
mod modes;
mod pixel;
mod viewport;

pub use config::{CropConfig, DEFAULT_USER_MIN_SCALE};
pub use error::GeometryError;
pub use modes::CropClamp;
pub use pixel::PixelRect;
pub use viewport::ViewportState;
