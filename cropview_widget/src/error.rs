// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

use cropview_geometry::GeometryError;

/// Error returned by [`crate::ImageCropView`] operations.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CropViewError {
    /// [`crate::ImageCropView::display`] was called before
    /// [`crate::ImageCropView::setup`].
    NoContent,
    /// A crop was queried or assigned before the view was displayed.
    NotDisplayed,
    /// The image, viewport or crop geometry is degenerate.
    Geometry(GeometryError),
}

impl fmt::Display for CropViewError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoContent => f.write_str("no image has been set up"),
            Self::NotDisplayed => f.write_str("crop view has not been displayed"),
            Self::Geometry(err) => write!(f, "invalid geometry: {err}"),
        }
    }
}

impl core::error::Error for CropViewError {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            Self::Geometry(err) => Some(err),
            _ => None,
        }
    }
}

impl From<GeometryError> for CropViewError {
    fn from(err: GeometryError) -> Self {
        Self::Geometry(err)
    }
}
