// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Cropview Widget: a headless, touch‑driven image crop view.
//!
//! [`ImageCropView`] is the adapter between a host UI layer and the pure
//! geometry of `cropview_geometry`. The host:
//! - Supplies the image size ([`ImageCropView::setup`]) and the viewport size
//!   ([`ImageCropView::display`]).
//! - Forwards raw touch input through [`ImageCropView::handle_touch`]; one
//!   finger pans, two fingers pinch‑zoom.
//! - Renders the image with [`cropview_geometry::ViewportState::content_to_view`].
//! - Reads or programs the crop with [`ImageCropView::crop_rect`] and
//!   [`ImageCropView::set_crop`].
//!
//! Edit mode gates the gestures: a view that is not editable keeps showing
//! its crop but ignores pan/zoom input and does not report taps.
//!
//! ## Example
//!
//! ```rust
//! use std::cell::Cell;
//! use std::rc::Rc;
//!
//! use kurbo::{Point, Size};
//! use cropview_widget::{CropViewConfig, ImageCropView, TouchEvent, TouchId};
//!
//! let taps = Rc::new(Cell::new(0));
//! let counter = taps.clone();
//!
//! let mut view = ImageCropView::new(CropViewConfig::default().with_min_scale(0.8));
//! view.setup(
//!     Size::new(1000.0, 2000.0),
//!     Some(Box::new(move |_view: &ImageCropView| counter.set(counter.get() + 1))),
//! );
//! view.display(Size::new(500.0, 500.0)).unwrap();
//!
//! // A tap.
//! let id = TouchId(0);
//! view.handle_touch(TouchEvent::Down { id, pos: Point::new(250.0, 250.0) });
//! view.handle_touch(TouchEvent::Up { id, pos: Point::new(251.0, 250.0) });
//! assert_eq!(taps.get(), 1);
//!
//! // Drag the image up by 100 view units.
//! view.handle_touch(TouchEvent::Down { id, pos: Point::new(250.0, 250.0) });
//! view.handle_touch(TouchEvent::Move { id, pos: Point::new(250.0, 150.0) });
//! view.handle_touch(TouchEvent::Up { id, pos: Point::new(250.0, 150.0) });
//! assert_eq!(view.state().unwrap().offset().y, 350.0);
//! assert_eq!(taps.get(), 1);
//!
//! let crop = view.crop_rect().unwrap();
//! assert_eq!((crop.y0, crop.width()), (700.0, 1000.0));
//! ```
//!
//! ## Logging
//!
//! Lifecycle changes are reported as `tracing` events at `debug` level and
//! individual gesture steps at `trace` level. No subscriber is installed.
//!
//! This crate is `no_std` compatible (with `alloc`).

#![no_std]

extern crate alloc;

mod config;
mod error;
mod touch;
mod view;

pub use config::{CropViewConfig, DEFAULT_TAP_SLOP};
pub use cropview_geometry::{CropClamp, CropConfig, PixelRect, ViewportState};
pub use error::CropViewError;
pub use touch::{TouchEvent, TouchId};
pub use view::{ImageCropView, TapHandler};
