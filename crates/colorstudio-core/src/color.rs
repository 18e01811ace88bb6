//! Color values and their display formats.
//!
//! A picked color is always an 8-bit RGB triple. Hex, `rgb()` and HSL are
//! derived from it on demand and carry no state of their own.

use crate::error::{StudioError, StudioResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Color shown before anything has been picked.
pub const DEFAULT_COLOR: Rgb = Rgb::new(0x63, 0x66, 0xf1);

/// An 8-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// An 8-bit RGBA pixel as stored in an image buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

/// HSL triple in integer degrees and percent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Hsl {
    /// Hue in `[0, 360)`.
    pub h: u16,
    /// Saturation in `[0, 100]`.
    pub s: u8,
    /// Lightness in `[0, 100]`.
    pub l: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// `#rrggbb` with lowercase digits.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// `rgb(r, g, b)` with decimal channels.
    pub fn to_rgb_string(self) -> String {
        format!("rgb({}, {}, {})", self.r, self.g, self.b)
    }

    /// Parse `#rrggbb` (either case). The leading `#` is required.
    pub fn from_hex(hex: &str) -> StudioResult<Self> {
        let digits = hex
            .strip_prefix('#')
            .filter(|d| d.len() == 6 && d.bytes().all(|b| b.is_ascii_hexdigit()))
            .ok_or_else(|| StudioError::InvalidHex(hex.to_string()))?;

        let channel = |i: usize| {
            u8::from_str_radix(&digits[i..i + 2], 16)
                .map_err(|_| StudioError::InvalidHex(hex.to_string()))
        };

        Ok(Self::new(channel(0)?, channel(2)?, channel(4)?))
    }

    /// Convert to HSL, rounding each component to the nearest integer.
    pub fn to_hsl(self) -> Hsl {
        let (h, s, l) = self.to_hsl_f64();
        Hsl {
            h: (h.round() as u16) % 360,
            s: s.round() as u8,
            l: l.round() as u8,
        }
    }

    /// Unrounded HSL: hue in degrees `[0, 360)`, saturation and lightness
    /// in percent.
    pub fn to_hsl_f64(self) -> (f64, f64, f64) {
        let r = f64::from(self.r) / 255.0;
        let g = f64::from(self.g) / 255.0;
        let b = f64::from(self.b) / 255.0;

        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let l = (max + min) / 2.0;

        // Compare the integer channels so ties are exact.
        if self.is_achromatic() {
            return (0.0, 0.0, l * 100.0);
        }

        let d = max - min;
        let s = if l > 0.5 {
            d / (2.0 - max - min)
        } else {
            d / (max + min)
        };

        let max_channel = self.r.max(self.g).max(self.b);
        // Sextant in [0, 6), then scaled to degrees. Dividing before scaling
        // decides which way exact .5 degrees round.
        let sextant = if max_channel == self.r {
            (g - b) / d + if g < b { 6.0 } else { 0.0 }
        } else if max_channel == self.g {
            (b - r) / d + 2.0
        } else {
            (r - g) / d + 4.0
        };
        let h = sextant / 6.0 * 360.0;

        (h, s * 100.0, l * 100.0)
    }

    pub fn is_achromatic(self) -> bool {
        self.r == self.g && self.g == self.b
    }
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Drop the alpha channel.
    pub const fn rgb(self) -> Rgb {
        Rgb::new(self.r, self.g, self.b)
    }
}

impl Hsl {
    /// `hsl(h, s%, l%)`, the form written to the clipboard.
    pub fn to_css(self) -> String {
        format!("hsl({}, {}%, {}%)", self.h, self.s, self.l)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl FromStr for Rgb {
    type Err = StudioError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl From<Rgba> for Rgb {
    fn from(pixel: Rgba) -> Self {
        pixel.rgb()
    }
}

impl From<[u8; 3]> for Rgb {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self::new(r, g, b)
    }
}

/// Free-function forms of the converters for callers that work with tuples.
pub fn to_hex(color: Rgb) -> String {
    color.to_hex()
}

pub fn to_rgb_string(color: Rgb) -> String {
    color.to_rgb_string()
}

pub fn to_hsl(color: Rgb) -> Hsl {
    color.to_hsl()
}

pub fn hex_to_rgb(hex: &str) -> StudioResult<Rgb> {
    Rgb::from_hex(hex)
}

/// A copyable representation of a color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorFormat {
    Hex,
    Rgb,
    Hsl,
}

impl ColorFormat {
    pub const ALL: [ColorFormat; 3] = [ColorFormat::Hex, ColorFormat::Rgb, ColorFormat::Hsl];

    /// The string written to the clipboard for this format.
    pub fn format(self, color: Rgb) -> String {
        match self {
            ColorFormat::Hex => color.to_hex(),
            ColorFormat::Rgb => color.to_rgb_string(),
            ColorFormat::Hsl => color.to_hsl().to_css(),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ColorFormat::Hex => "HEX",
            ColorFormat::Rgb => "RGB",
            ColorFormat::Hsl => "HSL",
        }
    }
}

impl FromStr for ColorFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "hex" => Ok(ColorFormat::Hex),
            "rgb" => Ok(ColorFormat::Rgb),
            "hsl" => Ok(ColorFormat::Hsl),
            other => Err(format!("unknown color format: {other}")),
        }
    }
}

/// Everything the color panel shows for one color.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorReadout {
    pub color: Rgb,
    pub hsl: Hsl,
    /// `#rrggbb`
    pub hex: String,
    /// `r, g, b`
    pub rgb_label: String,
    /// `h°, s%, l%`
    pub hsl_label: String,
}

impl From<Rgb> for ColorReadout {
    fn from(color: Rgb) -> Self {
        let hsl = color.to_hsl();
        Self {
            color,
            hsl,
            hex: color.to_hex(),
            rgb_label: format!("{}, {}, {}", color.r, color.g, color.b),
            hsl_label: format!("{}°, {}%, {}%", hsl.h, hsl.s, hsl.l),
        }
    }
}
