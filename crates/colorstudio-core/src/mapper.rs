//! Mapping pointer positions onto image pixels.
//!
//! The displayed image element occupies `layout` in viewport coordinates and
//! may additionally be zoomed and panned (fullscreen inspection). A pointer is
//! translated into the element's local space, the view transform is undone,
//! and the result is scaled to the decoded buffer's resolution.

use crate::buffer::{ImageBuffer, PixelCoord};
use crate::color::Rgb;
use kurbo::{Affine, Point, Rect, Vec2};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The pointer does not land on any pixel of the image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("pointer is outside the image")]
pub struct OutOfBounds;

/// Zoom and pan applied to the displayed element, relative to its layout
/// origin.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewTransform {
    pub zoom: f64,
    pub pan: Vec2,
}

impl Default for ViewTransform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl ViewTransform {
    pub const IDENTITY: Self = Self {
        zoom: 1.0,
        pan: Vec2::ZERO,
    };

    pub fn new(zoom: f64, pan: Vec2) -> Self {
        Self { zoom, pan }
    }

    /// Element-local to on-screen (relative to the layout origin).
    pub fn transform(&self) -> Affine {
        Affine::translate(self.pan) * Affine::scale(self.zoom)
    }

    /// On-screen to element-local. `None` for a degenerate zoom.
    pub fn inverse_transform(&self) -> Option<Affine> {
        if !self.zoom.is_finite() || self.zoom <= 0.0 || !self.pan.is_finite() {
            return None;
        }
        Some(Affine::scale(1.0 / self.zoom) * Affine::translate(-self.pan))
    }
}

/// Map a viewport pointer position to a pixel of `buffer`.
pub fn map_pointer(
    buffer: &ImageBuffer,
    pointer: Point,
    layout: Rect,
    view: ViewTransform,
) -> Result<PixelCoord, OutOfBounds> {
    let (x, y) = map_to_buffer(pointer, layout, (buffer.width(), buffer.height()), view)?;
    buffer.coord(x, y).ok_or(OutOfBounds)
}

/// The raw mapping onto a `buffer_size` raster.
pub fn map_to_buffer(
    pointer: Point,
    layout: Rect,
    buffer_size: (u32, u32),
    view: ViewTransform,
) -> Result<(u32, u32), OutOfBounds> {
    let display_w = layout.width();
    let display_h = layout.height();
    // Also rejects NaN sizes.
    if !(display_w > 0.0 && display_h > 0.0) {
        return Err(OutOfBounds);
    }

    let inverse = view.inverse_transform().ok_or(OutOfBounds)?;
    let local = inverse * (pointer - layout.origin()).to_point();

    if !(local.x >= 0.0 && local.x < display_w && local.y >= 0.0 && local.y < display_h) {
        return Err(OutOfBounds);
    }

    let (buffer_w, buffer_h) = buffer_size;
    let bx = (local.x * f64::from(buffer_w) / display_w).floor();
    let by = (local.y * f64::from(buffer_h) / display_h).floor();

    if !(bx >= 0.0 && bx < f64::from(buffer_w) && by >= 0.0 && by < f64::from(buffer_h)) {
        return Err(OutOfBounds);
    }

    Ok((bx as u32, by as u32))
}

/// Map and sample in one step.
pub fn sample_at(
    buffer: &ImageBuffer,
    pointer: Point,
    layout: Rect,
    view: ViewTransform,
) -> Result<Rgb, OutOfBounds> {
    let coord = map_pointer(buffer, pointer, layout, view)?;
    Ok(buffer.sample(coord))
}
