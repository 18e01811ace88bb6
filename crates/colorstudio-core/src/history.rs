//! Recently picked colors.

use crate::color::Rgb;
use std::collections::VecDeque;

/// Default number of colors kept.
pub const DEFAULT_HISTORY_LEN: usize = 10;

/// Most-recent-first list of picked colors without duplicates.
///
/// Picking a color that is already present moves it to the front.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorHistory {
    entries: VecDeque<Rgb>,
    capacity: usize,
}

impl Default for ColorHistory {
    fn default() -> Self {
        Self::new(DEFAULT_HISTORY_LEN)
    }
}

impl ColorHistory {
    /// A history holding at most `capacity` colors (at least one).
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Record a pick. Returns true if the sequence changed.
    pub fn push(&mut self, color: Rgb) -> bool {
        match self.entries.iter().position(|&c| c == color) {
            Some(0) => false,
            Some(index) => {
                self.entries.remove(index);
                self.entries.push_front(color);
                true
            }
            None => {
                self.entries.push_front(color);
                self.entries.truncate(self.capacity);
                true
            }
        }
    }

    /// Colors, newest first.
    pub fn iter(&self) -> impl Iterator<Item = Rgb> + '_ {
        self.entries.iter().copied()
    }

    pub fn get(&self, index: usize) -> Option<Rgb> {
        self.entries.get(index).copied()
    }

    pub fn latest(&self) -> Option<Rgb> {
        self.entries.front().copied()
    }

    pub fn contains(&self, color: Rgb) -> bool {
        self.entries.contains(&color)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Hex strings, newest first.
    pub fn to_hex_vec(&self) -> Vec<String> {
        self.iter().map(Rgb::to_hex).collect()
    }
}
