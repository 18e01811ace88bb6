//! Clipboard seam and copy feedback.

use crate::error::StudioResult;
use std::time::Duration;

// Use web_time for WASM compatibility
#[cfg(target_arch = "wasm32")]
use web_time::Instant;
#[cfg(not(target_arch = "wasm32"))]
use std::time::Instant;

/// Write-only text clipboard.
///
/// Platform shells provide implementations; the core only ever writes.
pub trait Clipboard {
    fn write_text(&mut self, text: &str) -> StudioResult<()>;
}

/// In-memory clipboard for testing and headless use.
#[derive(Debug, Default, Clone)]
pub struct MemoryClipboard {
    writes: Vec<String>,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Most recently written text.
    pub fn contents(&self) -> Option<&str> {
        self.writes.last().map(String::as_str)
    }

    /// Every write, oldest first.
    pub fn writes(&self) -> &[String] {
        &self.writes
    }
}

impl Clipboard for MemoryClipboard {
    fn write_text(&mut self, text: &str) -> StudioResult<()> {
        self.writes.push(text.to_string());
        Ok(())
    }
}

/// Remembers the last copied string for a short while so the UI can show a
/// check mark next to it.
#[derive(Debug, Clone)]
pub struct CopyFeedback {
    last: Option<(String, Instant)>,
    duration: Duration,
}

impl CopyFeedback {
    pub fn new(duration: Duration) -> Self {
        Self {
            last: None,
            duration,
        }
    }

    pub fn record(&mut self, text: String) {
        self.record_at(text, Instant::now());
    }

    pub fn record_at(&mut self, text: String, at: Instant) {
        self.last = Some((text, at));
    }

    /// The copied string, if it is still within the feedback window.
    pub fn active(&self) -> Option<&str> {
        self.active_at(Instant::now())
    }

    pub fn active_at(&self, now: Instant) -> Option<&str> {
        let (text, at) = self.last.as_ref()?;
        (now.saturating_duration_since(*at) < self.duration).then_some(text.as_str())
    }

    pub fn is_active(&self, text: &str) -> bool {
        self.active() == Some(text)
    }

    pub fn clear(&mut self) {
        self.last = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_clipboard() {
        let mut clipboard = MemoryClipboard::new();
        assert_eq!(clipboard.contents(), None);
        clipboard.write_text("#000000").unwrap();
        clipboard.write_text("rgb(0, 0, 0)").unwrap();
        assert_eq!(clipboard.contents(), Some("rgb(0, 0, 0)"));
        assert_eq!(clipboard.writes().len(), 2);
    }

    #[test]
    fn test_feedback_expires() {
        let mut feedback = CopyFeedback::new(Duration::from_secs(2));
        let start = Instant::now();
        feedback.record_at("#6366f1".to_string(), start);

        assert_eq!(feedback.active_at(start), Some("#6366f1"));
        assert_eq!(feedback.active_at(start + Duration::from_millis(1999)), Some("#6366f1"));
        assert_eq!(feedback.active_at(start + Duration::from_secs(2)), None);
    }

    #[test]
    fn test_feedback_replaced_by_newer_copy() {
        let mut feedback = CopyFeedback::new(Duration::from_secs(2));
        feedback.record("#000000".to_string());
        feedback.record("#ffffff".to_string());
        assert!(feedback.is_active("#ffffff"));
        assert!(!feedback.is_active("#000000"));

        feedback.clear();
        assert_eq!(feedback.active(), None);
    }
}
