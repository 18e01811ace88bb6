//! WebAssembly entry point and JS bindings.
//!
//! The page owns the DOM and forwards pointer events with the image element's
//! bounding box. Structured results cross the boundary as JSON strings.

use crate::clipboard::SystemClipboard;
use crate::params;
use colorstudio_core::{ColorFormat, ImageId, Point, Rect, Size, Studio, StudioConfig, StudioError};
use wasm_bindgen::prelude::*;

fn js_err(err: StudioError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

fn parse_id(id: &str) -> Result<ImageId, JsValue> {
    ImageId::parse(id).ok_or_else(|| JsValue::from_str(&format!("Invalid image id: {id}")))
}

fn to_json<T: serde::Serialize>(value: &T) -> Option<String> {
    match serde_json::to_string(value) {
        Ok(json) => Some(json),
        Err(e) => {
            log::error!("Failed to serialize: {}", e);
            None
        }
    }
}

/// Config overrides from the page URL (query string, then hash).
fn config_from_url(base: StudioConfig) -> Result<StudioConfig, StudioError> {
    let Some(window) = web_sys::window() else {
        return Ok(base);
    };
    let location = window.location();

    let mut config = base;
    if let Ok(search) = location.search() {
        config = params::apply_params(config, &search)?;
    }
    if let Ok(hash) = location.hash() {
        config = params::apply_params(config, &hash)?;
    }
    Ok(config)
}

/// A picker instance driven from JS.
#[wasm_bindgen]
pub struct WebStudio {
    studio: Studio,
}

#[wasm_bindgen]
impl WebStudio {
    /// Create a picker from an optional JSON config, with URL overrides on
    /// top.
    #[wasm_bindgen(constructor)]
    pub fn new(config_json: Option<String>) -> Result<WebStudio, JsValue> {
        let base = match config_json {
            Some(json) => StudioConfig::from_json_str(&json).map_err(js_err)?,
            None => StudioConfig::default(),
        };
        let config = config_from_url(base).map_err(js_err)?;
        Ok(Self {
            studio: Studio::new(config),
        })
    }

    // --- Images ---

    /// Decode and add an image. Returns its id.
    pub fn add_image(&mut self, name: &str, bytes: &[u8]) -> Result<String, JsValue> {
        self.studio.add_image(name, bytes).map(|id| id.to_string()).map_err(js_err)
    }

    /// Register a file whose bytes are still being read.
    pub fn begin_upload(&mut self, name: &str) -> String {
        self.studio.begin_upload(name).to_string()
    }

    pub fn finish_upload(&mut self, id: &str, bytes: &[u8]) -> Result<(), JsValue> {
        self.studio.finish_upload(parse_id(id)?, bytes).map_err(js_err)
    }

    pub fn remove_image(&mut self, id: &str) -> Result<bool, JsValue> {
        Ok(self.studio.remove_image(parse_id(id)?))
    }

    /// Move an image to `index` in the display order.
    pub fn move_image(&mut self, id: &str, index: usize) -> Result<bool, JsValue> {
        Ok(self.studio.move_image(parse_id(id)?, index))
    }

    /// `[{ id, name, loading, failed, width, height }]` in display order.
    pub fn images(&self) -> String {
        let images: Vec<_> = self
            .studio
            .library()
            .iter()
            .map(|entry| {
                let size = entry.buffer().map(|b| (b.width(), b.height()));
                serde_json::json!({
                    "id": entry.id().to_string(),
                    "name": entry.name,
                    "loading": entry.is_loading(),
                    "failed": matches!(entry.status(), colorstudio_core::ImageStatus::Failed(_)),
                    "width": size.map(|s| s.0),
                    "height": size.map(|s| s.1),
                })
            })
            .collect();
        serde_json::Value::Array(images).to_string()
    }

    // --- Picking ---

    pub fn toggle_picker(&mut self) -> Result<bool, JsValue> {
        self.studio.toggle_picker().map_err(js_err)
    }

    pub fn is_picking(&self) -> bool {
        self.studio.mode().is_picking()
    }

    /// Name of the current interaction mode.
    pub fn mode(&self) -> String {
        self.studio.mode().name().to_string()
    }

    /// Pointer moved over an image whose bounding box is
    /// (`left`, `top`, `width`, `height`). Returns the preview as JSON.
    #[allow(clippy::too_many_arguments)]
    pub fn pointer_moved(
        &mut self,
        id: &str,
        x: f64,
        y: f64,
        left: f64,
        top: f64,
        width: f64,
        height: f64,
    ) -> Result<Option<String>, JsValue> {
        let layout = Rect::from_origin_size((left, top), (width, height));
        let preview = self.studio.pointer_moved(parse_id(id)?, Point::new(x, y), layout);
        Ok(preview.as_ref().and_then(to_json))
    }

    pub fn pointer_left(&mut self) {
        self.studio.pointer_left();
    }

    /// Click on an image. Returns the picked hex color.
    #[allow(clippy::too_many_arguments)]
    pub fn clicked(
        &mut self,
        id: &str,
        x: f64,
        y: f64,
        left: f64,
        top: f64,
        width: f64,
        height: f64,
    ) -> Result<Option<String>, JsValue> {
        let layout = Rect::from_origin_size((left, top), (width, height));
        let color = self.studio.clicked(parse_id(id)?, Point::new(x, y), layout);
        Ok(color.map(|c| c.to_hex()))
    }

    /// The selected color in every format, as JSON.
    pub fn readout(&self) -> Option<String> {
        to_json(&self.studio.readout())
    }

    /// History as hex strings, most recent first.
    pub fn history(&self) -> js_sys::Array {
        self.studio
            .history()
            .to_hex_vec()
            .into_iter()
            .map(JsValue::from)
            .collect()
    }

    pub fn select_history(&mut self, index: usize) -> Option<String> {
        self.studio.select_history(index).map(|c| c.to_hex())
    }

    pub fn select_hex(&mut self, hex: &str) -> Result<String, JsValue> {
        self.studio.select_hex(hex).map(|c| c.to_hex()).map_err(js_err)
    }

    // --- Clipboard ---

    /// Copy the selected color as `hex`, `rgb` or `hsl`.
    pub fn copy(&mut self, format: &str) -> Result<String, JsValue> {
        let format = format.parse::<ColorFormat>().map_err(|e| JsValue::from_str(&e))?;
        self.studio.copy(format, &mut SystemClipboard).map_err(js_err)
    }

    /// Copy a history entry.
    pub fn copy_history(&mut self, index: usize, format: &str) -> Result<String, JsValue> {
        let format = format.parse::<ColorFormat>().map_err(|e| JsValue::from_str(&e))?;
        let color = self
            .studio
            .history()
            .get(index)
            .ok_or_else(|| JsValue::from_str("No such history entry"))?;
        self.studio.copy_color(color, format, &mut SystemClipboard).map_err(js_err)
    }

    /// `[{ label, text, copied }]` for each copy button of the selected color.
    pub fn copy_options(&self) -> String {
        let color = self.studio.selected();
        let options: Vec<_> = ColorFormat::ALL
            .iter()
            .map(|format| {
                let text = format.format(color);
                serde_json::json!({
                    "label": format.label(),
                    "copied": self.studio.recently_copied(&text),
                    "text": text,
                })
            })
            .collect();
        serde_json::Value::Array(options).to_string()
    }

    pub fn recently_copied(&self, text: &str) -> bool {
        self.studio.recently_copied(text)
    }

    // --- Resizing ---

    pub fn begin_resize(&mut self) -> Result<(), JsValue> {
        self.studio.begin_resize().map_err(js_err)
    }

    pub fn resize_to(&mut self, x: f64, y: f64, container_left: f64, container_top: f64) -> bool {
        self.studio
            .resize_to(Point::new(x, y), Point::new(container_left, container_top))
    }

    pub fn end_resize(&mut self) -> Result<(), JsValue> {
        self.studio.end_resize().map_err(js_err)
    }

    /// `[width, height]`, or nothing for automatic sizing.
    pub fn container_size(&self) -> Option<Vec<f64>> {
        self.studio.container_size().map(|s| vec![s.width, s.height])
    }

    // --- Fullscreen ---

    pub fn open_fullscreen(&mut self, id: &str) -> Result<(), JsValue> {
        self.studio.open_fullscreen(parse_id(id)?).map_err(js_err)
    }

    pub fn close_fullscreen(&mut self) -> Result<(), JsValue> {
        self.studio.close_fullscreen().map_err(js_err)
    }

    pub fn show_next(&mut self) -> Option<String> {
        self.studio.show_next().map(|id| id.to_string())
    }

    pub fn show_previous(&mut self) -> Option<String> {
        self.studio.show_previous().map(|id| id.to_string())
    }

    /// Wheel zoom around (`x`, `y`) relative to the image layout origin.
    pub fn zoom_at(&mut self, x: f64, y: f64, factor: f64) -> Option<f64> {
        self.studio.zoom_fullscreen(Point::new(x, y), factor)
    }

    pub fn zoom_in(&mut self, x: f64, y: f64) -> Option<f64> {
        self.studio.zoom_in(Point::new(x, y))
    }

    pub fn zoom_out(&mut self, x: f64, y: f64) -> Option<f64> {
        self.studio.zoom_out(Point::new(x, y))
    }

    pub fn reset_view(&mut self) -> bool {
        self.studio.reset_view()
    }

    /// `{ zoom, pan: [x, y] }` of the fullscreen view, as JSON.
    pub fn view(&self) -> Option<String> {
        let view = self.studio.mode().view()?;
        to_json(&view.transform())
    }

    pub fn begin_pan(&mut self, x: f64, y: f64) -> Result<(), JsValue> {
        self.studio.begin_pan(Point::new(x, y)).map_err(js_err)
    }

    pub fn pan_to(&mut self, x: f64, y: f64) -> Result<(), JsValue> {
        self.studio.pan_to(Point::new(x, y)).map_err(js_err)
    }

    pub fn end_pan(&mut self) -> Result<(), JsValue> {
        self.studio.end_pan().map_err(js_err)
    }

    /// `[left, top, width, height]` of the fullscreen image in a viewport.
    pub fn fullscreen_layout(&self, viewport_width: f64, viewport_height: f64) -> Option<Vec<f64>> {
        let rect = self
            .studio
            .fullscreen_layout(Size::new(viewport_width, viewport_height))?;
        Some(vec![rect.x0, rect.y0, rect.width(), rect.height()])
    }
}

/// Initialize logging for the WASM module.
#[wasm_bindgen(start)]
pub fn run_wasm() {
    // Set up panic hook for better error messages
    console_error_panic_hook::set_once();

    if let Err(e) = console_log::init_with_level(log::Level::Info) {
        web_sys::console::error_1(&JsValue::from_str(&e.to_string()));
    }

    log::info!("Starting ColorStudio (WASM)");
}
