//! ColorStudio Application
//!
//! Platform shells around the picker core: the desktop command line, the
//! browser bindings and their clipboards.

pub mod clipboard;
pub mod params;

#[cfg(feature = "native")]
pub mod cli;

#[cfg(any(feature = "native", target_arch = "wasm32"))]
pub use clipboard::SystemClipboard;

#[cfg(target_arch = "wasm32")]
mod web;

#[cfg(target_arch = "wasm32")]
pub use web::{WebStudio, run_wasm};
