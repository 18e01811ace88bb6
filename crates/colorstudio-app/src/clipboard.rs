//! Platform clipboards.

use colorstudio_core::{Clipboard, StudioError, StudioResult};

/// The desktop clipboard, opened per write.
#[cfg(all(feature = "native", not(target_arch = "wasm32")))]
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClipboard;

#[cfg(all(feature = "native", not(target_arch = "wasm32")))]
impl Clipboard for SystemClipboard {
    fn write_text(&mut self, text: &str) -> StudioResult<()> {
        let mut clipboard = arboard::Clipboard::new().map_err(|e| StudioError::Clipboard(e.to_string()))?;
        clipboard
            .set_text(text.to_string())
            .map_err(|e| StudioError::Clipboard(e.to_string()))?;
        log::info!("Copied {} to clipboard", text);
        Ok(())
    }
}

/// `navigator.clipboard`. Writes are fire and forget; a rejected promise is
/// only logged.
#[cfg(target_arch = "wasm32")]
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClipboard;

#[cfg(target_arch = "wasm32")]
impl Clipboard for SystemClipboard {
    fn write_text(&mut self, text: &str) -> StudioResult<()> {
        let window = web_sys::window().ok_or_else(|| StudioError::Clipboard("no window".into()))?;
        let promise = window.navigator().clipboard().write_text(text);
        let text = text.to_string();
        wasm_bindgen_futures::spawn_local(async move {
            if let Err(e) = wasm_bindgen_futures::JsFuture::from(promise).await {
                log::error!("Failed to copy {} to clipboard: {:?}", text, e);
            }
        });
        Ok(())
    }
}
