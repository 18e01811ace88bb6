//! Uploaded images, keyed by stable handles.
//!
//! Entries keep their [`ImageId`] for their whole lifetime, so removing or
//! reordering images never changes which buffer another handle refers to.
//! Display order is tracked separately from storage.

mod format;

pub use format::ImageFormat;

use crate::buffer::ImageBuffer;
use crate::error::{StudioError, StudioResult};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use uuid::Uuid;

/// Stable handle of an uploaded image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ImageId(Uuid);

impl ImageId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn parse(s: &str) -> Option<Self> {
        Uuid::parse_str(s).ok().map(Self)
    }
}

impl Default for ImageId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ImageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// Where an image is in its decode lifecycle.
#[derive(Debug, Clone, PartialEq)]
pub enum ImageStatus {
    /// Registered, bytes not decoded yet.
    Loading,
    Ready(ImageBuffer),
    Failed(String),
}

/// One uploaded image.
#[derive(Debug, Clone)]
pub struct ImageEntry {
    id: ImageId,
    /// Original file name.
    pub name: String,
    /// Detected container format, once known.
    pub format: Option<ImageFormat>,
    status: ImageStatus,
}

impl ImageEntry {
    pub fn id(&self) -> ImageId {
        self.id
    }

    pub fn status(&self) -> &ImageStatus {
        &self.status
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.status, ImageStatus::Loading)
    }

    pub fn buffer(&self) -> Option<&ImageBuffer> {
        match &self.status {
            ImageStatus::Ready(buffer) => Some(buffer),
            _ => None,
        }
    }
}

/// All uploaded images in upload order.
#[derive(Debug, Clone, Default)]
pub struct ImageLibrary {
    entries: HashMap<ImageId, ImageEntry>,
    order: Vec<ImageId>,
}

impl ImageLibrary {
    pub fn new() -> Self {
        Self::default()
    }

    fn insert(&mut self, name: &str, format: Option<ImageFormat>, status: ImageStatus) -> ImageId {
        let id = ImageId::new();
        self.entries.insert(
            id,
            ImageEntry {
                id,
                name: name.to_string(),
                format,
                status,
            },
        );
        self.order.push(id);
        id
    }

    /// Register an image whose bytes are still being read.
    pub fn insert_pending(&mut self, name: &str) -> ImageId {
        let id = self.insert(name, None, ImageStatus::Loading);
        log::debug!("Registered image {} ({})", id, name);
        id
    }

    /// Register an already decoded buffer.
    pub fn insert_decoded(&mut self, name: &str, buffer: ImageBuffer) -> ImageId {
        let format = ImageFormat::from_file_name(name);
        self.insert(name, format, ImageStatus::Ready(buffer))
    }

    /// Decode `bytes` for a pending entry.
    ///
    /// On failure the entry is kept, marked failed, and the error returned.
    pub fn complete(&mut self, id: ImageId, bytes: &[u8]) -> StudioResult<()> {
        let entry = self
            .entries
            .get_mut(&id)
            .ok_or(StudioError::UnknownImage(id))?;

        let Some(format) = ImageFormat::detect(&entry.name, bytes) else {
            entry.status = ImageStatus::Failed("unsupported format".to_string());
            log::warn!("Rejected {}: not a supported image", entry.name);
            return Err(StudioError::UnsupportedFormat(entry.name.clone()));
        };
        entry.format = Some(format);

        match ImageBuffer::decode_as(bytes, format) {
            Ok(buffer) => {
                log::info!(
                    "Decoded {} ({}x{}, {})",
                    entry.name,
                    buffer.width(),
                    buffer.height(),
                    format.mime_type()
                );
                entry.status = ImageStatus::Ready(buffer);
                Ok(())
            }
            Err(err) => {
                log::warn!("Failed to decode {}: {}", entry.name, err);
                entry.status = ImageStatus::Failed(err.to_string());
                Err(err)
            }
        }
    }

    /// Remove an image, returning its entry.
    pub fn remove(&mut self, id: ImageId) -> Option<ImageEntry> {
        self.order.retain(|&other| other != id);
        self.entries.remove(&id)
    }

    pub fn get(&self, id: ImageId) -> Option<&ImageEntry> {
        self.entries.get(&id)
    }

    /// The decoded buffer, or why there isn't one.
    pub fn buffer(&self, id: ImageId) -> StudioResult<&ImageBuffer> {
        let entry = self.get(id).ok_or(StudioError::UnknownImage(id))?;
        match &entry.status {
            ImageStatus::Ready(buffer) => Ok(buffer),
            ImageStatus::Loading => Err(StudioError::NotReady(id)),
            ImageStatus::Failed(_) => Err(StudioError::Failed(id)),
        }
    }

    pub fn contains(&self, id: ImageId) -> bool {
        self.entries.contains_key(&id)
    }

    /// Handles in upload order.
    pub fn ids(&self) -> &[ImageId] {
        &self.order
    }

    /// Entries in upload order.
    pub fn iter(&self) -> impl Iterator<Item = &ImageEntry> {
        self.order.iter().filter_map(|id| self.entries.get(id))
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Position in display order.
    pub fn position(&self, id: ImageId) -> Option<usize> {
        self.order.iter().position(|&other| other == id)
    }

    /// The image after `id`, wrapping around.
    pub fn next_after(&self, id: ImageId) -> Option<ImageId> {
        let pos = self.position(id)?;
        self.order.get((pos + 1) % self.order.len()).copied()
    }

    /// The image before `id`, wrapping around.
    pub fn previous_before(&self, id: ImageId) -> Option<ImageId> {
        let pos = self.position(id)?;
        let len = self.order.len();
        self.order.get((pos + len - 1) % len).copied()
    }

    /// Move an image to a new display position (clamped to the end).
    pub fn reorder(&mut self, id: ImageId, to: usize) -> bool {
        let Some(from) = self.position(id) else {
            return false;
        };
        self.order.remove(from);
        let to = to.min(self.order.len());
        self.order.insert(to, id);
        true
    }
}
