//! Decoded RGBA rasters.

use crate::color::{Rgb, Rgba};
use crate::error::{StudioError, StudioResult};
use crate::library::ImageFormat;

/// A pixel coordinate known to lie inside a particular buffer's bounds.
///
/// Only [`ImageBuffer::coord`] and the coordinate mapper construct these, so
/// holding one is proof that sampling will not read past the raster.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PixelCoord {
    x: u32,
    y: u32,
}

impl PixelCoord {
    pub(crate) fn new_unchecked(x: u32, y: u32) -> Self {
        Self { x, y }
    }

    pub fn x(&self) -> u32 {
        self.x
    }

    pub fn y(&self) -> u32 {
        self.y
    }
}

/// A decoded image: `width * height` pixels, four bytes each (RGBA).
///
/// Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageBuffer {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl ImageBuffer {
    /// Wrap raw RGBA bytes. The length must be exactly `width * height * 4`.
    pub fn from_rgba(width: u32, height: u32, data: Vec<u8>) -> StudioResult<Self> {
        let expected = (width as usize)
            .checked_mul(height as usize)
            .and_then(|n| n.checked_mul(4));
        match expected {
            Some(expected) if expected == data.len() => Ok(Self {
                width,
                height,
                data,
            }),
            _ => Err(StudioError::InvalidBuffer {
                width,
                height,
                expected: expected.unwrap_or(usize::MAX),
                actual: data.len(),
            }),
        }
    }

    /// Fill a buffer with one color.
    pub fn filled(width: u32, height: u32, pixel: Rgba) -> Self {
        let data = [pixel.r, pixel.g, pixel.b, pixel.a].repeat(width as usize * height as usize);
        Self {
            width,
            height,
            data,
        }
    }

    /// Decode PNG, JPEG, WebP, GIF or BMP bytes in `format`.
    pub fn decode_as(bytes: &[u8], format: ImageFormat) -> StudioResult<Self> {
        let decoded = image::load_from_memory_with_format(bytes, format.to_image_format())
            .map_err(|e| StudioError::Decode(e.to_string()))?;
        Self::from_dynamic(decoded)
    }

    fn from_dynamic(decoded: image::DynamicImage) -> StudioResult<Self> {
        let rgba = decoded.to_rgba8();
        let (width, height) = rgba.dimensions();
        Self::from_rgba(width, height, rgba.into_raw())
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Validate a coordinate against this buffer's bounds.
    pub fn coord(&self, x: u32, y: u32) -> Option<PixelCoord> {
        (x < self.width && y < self.height).then(|| PixelCoord::new_unchecked(x, y))
    }

    /// Read the color at an already validated coordinate, ignoring alpha.
    ///
    /// The coordinate must come from this buffer (or one of at least the same
    /// size); a coordinate validated against a larger buffer will panic.
    pub fn sample(&self, coord: PixelCoord) -> Rgb {
        self.rgba_at(coord).rgb()
    }

    /// Full RGBA value at an already validated coordinate.
    pub fn rgba_at(&self, coord: PixelCoord) -> Rgba {
        let offset = (coord.y as usize * self.width as usize + coord.x as usize) * 4;
        let px = &self.data[offset..offset + 4];
        Rgba::new(px[0], px[1], px[2], px[3])
    }

    /// Checked pixel lookup for arbitrary coordinates.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgba> {
        self.coord(x, y).map(|c| self.rgba_at(c))
    }
}
