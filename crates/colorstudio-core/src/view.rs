//! Zoom and pan for fullscreen inspection.

use crate::mapper::ViewTransform;
use kurbo::{Point, Rect, Size, Vec2};
use serde::{Deserialize, Serialize};

/// Default lower zoom bound.
pub const MIN_ZOOM: f64 = 0.5;
/// Default upper zoom bound.
pub const MAX_ZOOM: f64 = 5.0;

/// Zoom/pan state of the fullscreen viewer.
///
/// Offsets are in screen pixels relative to the image's layout origin. Zoom
/// is always kept inside `[min_zoom, max_zoom]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FullscreenView {
    /// Current translation (pan).
    pub offset: Vec2,
    zoom: f64,
    min_zoom: f64,
    max_zoom: f64,
}

impl Default for FullscreenView {
    fn default() -> Self {
        Self::with_limits(MIN_ZOOM, MAX_ZOOM)
    }
}

impl FullscreenView {
    pub fn new() -> Self {
        Self::default()
    }

    /// A view bounded to `[min_zoom, max_zoom]`. Reversed bounds are swapped;
    /// a bound that is not finite and positive falls back to the default.
    pub fn with_limits(min_zoom: f64, max_zoom: f64) -> Self {
        let usable = |z: f64, fallback: f64| if z.is_finite() && z > 0.0 { z } else { fallback };
        let (a, b) = (usable(min_zoom, MIN_ZOOM), usable(max_zoom, MAX_ZOOM));
        let (min_zoom, max_zoom) = if a <= b { (a, b) } else { (b, a) };

        let mut view = Self {
            offset: Vec2::ZERO,
            zoom: 1.0,
            min_zoom,
            max_zoom,
        };
        view.zoom = view.clamp_zoom(1.0);
        view
    }

    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    pub fn min_zoom(&self) -> f64 {
        self.min_zoom
    }

    pub fn max_zoom(&self) -> f64 {
        self.max_zoom
    }

    // Does not panic on reversed bounds, which deserialization can produce.
    fn clamp_zoom(&self, zoom: f64) -> f64 {
        zoom.max(self.min_zoom).min(self.max_zoom)
    }

    /// Set the zoom level directly (clamped), keeping the offset.
    pub fn set_zoom(&mut self, zoom: f64) {
        if zoom.is_finite() {
            self.zoom = self.clamp_zoom(zoom);
        }
    }

    /// The transform handed to the coordinate mapper.
    pub fn transform(&self) -> ViewTransform {
        ViewTransform::new(self.zoom, self.offset)
    }

    /// Pan by a delta in screen pixels.
    pub fn pan_by(&mut self, delta: Vec2) {
        if delta.is_finite() {
            self.offset += delta;
        }
    }

    /// Zoom by `factor`, keeping `anchor` (relative to the layout origin) fixed
    /// on screen.
    pub fn zoom_at(&mut self, anchor: Point, factor: f64) {
        if !factor.is_finite() || factor <= 0.0 {
            return;
        }
        let new_zoom = self.clamp_zoom(self.zoom * factor);
        if (new_zoom - self.zoom).abs() < f64::EPSILON {
            return;
        }

        let Some(inverse) = self.transform().inverse_transform() else {
            return;
        };
        let local = inverse * anchor;

        self.zoom = new_zoom;

        let moved = self.transform().transform() * local;
        self.offset += anchor - moved;
    }

    /// Back to 100% with no pan.
    pub fn reset(&mut self) {
        self.offset = Vec2::ZERO;
        self.zoom = self.clamp_zoom(1.0);
    }
}

/// Largest rectangle with the image's aspect ratio that fits `viewport`
/// minus `padding` on every side, centered.
pub fn fit_layout(image: Size, viewport: Size, padding: f64) -> Rect {
    if image.width <= 0.0 || image.height <= 0.0 {
        return Rect::ZERO;
    }

    let available = Size::new(
        (viewport.width - padding * 2.0).max(1.0),
        (viewport.height - padding * 2.0).max(1.0),
    );
    let scale = (available.width / image.width).min(available.height / image.height);
    let size = Size::new(image.width * scale, image.height * scale);
    let origin = Point::new(
        (viewport.width - size.width) / 2.0,
        (viewport.height - size.height) / 2.0,
    );
    Rect::from_origin_size(origin, size)
}
