//! ColorStudio Core Library
//!
//! Platform-agnostic picker logic: mapping pointers onto decoded images,
//! color conversion, pick history and the interaction state machine.

pub mod buffer;
pub mod clipboard;
pub mod color;
pub mod config;
pub mod error;
pub mod history;
pub mod library;
pub mod mapper;
pub mod mode;
pub mod studio;
pub mod view;

pub use buffer::{ImageBuffer, PixelCoord};
pub use clipboard::{Clipboard, CopyFeedback, MemoryClipboard};
pub use color::{ColorFormat, ColorReadout, DEFAULT_COLOR, Hsl, Rgb, Rgba, hex_to_rgb, to_hex, to_hsl, to_rgb_string};
pub use config::StudioConfig;
pub use error::{StudioError, StudioResult};
pub use history::{ColorHistory, DEFAULT_HISTORY_LEN};
pub use library::{ImageEntry, ImageFormat, ImageId, ImageLibrary, ImageStatus};
pub use mapper::{OutOfBounds, ViewTransform, map_pointer, sample_at};
pub use mode::{InteractionMode, ModeEvent};
pub use studio::{Preview, Studio};
pub use view::{FullscreenView, MAX_ZOOM, MIN_ZOOM, fit_layout};

// Re-export kurbo geometry so shells don't need their own dependency.
pub use kurbo::{Point, Rect, Size, Vec2};
