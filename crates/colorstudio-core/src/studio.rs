//! The picker controller.
//!
//! [`Studio`] owns every piece of picker state and turns UI events into
//! samples, history updates and mode changes. The UI passes pointer positions
//! and layout rectangles in on each call; nothing here looks up global state.

use crate::buffer::ImageBuffer;
use crate::clipboard::{Clipboard, CopyFeedback};
use crate::color::{ColorFormat, ColorReadout, Rgb};
use crate::config::StudioConfig;
use crate::error::{StudioError, StudioResult};
use crate::history::ColorHistory;
use crate::library::{ImageId, ImageLibrary};
use crate::mapper::{self, ViewTransform};
use crate::mode::{InteractionMode, ModeEvent};
use crate::view::{self, FullscreenView};
use kurbo::{Point, Rect, Size};
use serde::{Deserialize, Serialize};

/// The color under the pointer while picking.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Preview {
    pub image: ImageId,
    pub color: Rgb,
    /// Viewport position the tooltip is anchored to.
    pub pointer: Point,
}

/// Picker state and operations.
#[derive(Debug, Clone)]
pub struct Studio {
    config: StudioConfig,
    library: ImageLibrary,
    history: ColorHistory,
    mode: InteractionMode,
    selected: Rgb,
    preview: Option<Preview>,
    /// User-chosen container size; `None` means automatic.
    container: Option<Size>,
    feedback: CopyFeedback,
}

impl Default for Studio {
    fn default() -> Self {
        Self::new(StudioConfig::default())
    }
}

impl Studio {
    pub fn new(config: StudioConfig) -> Self {
        Self {
            library: ImageLibrary::new(),
            history: ColorHistory::new(config.history_len),
            mode: InteractionMode::default(),
            selected: config.initial_color,
            preview: None,
            container: None,
            feedback: CopyFeedback::new(config.copy_feedback()),
            config,
        }
    }

    pub fn config(&self) -> &StudioConfig {
        &self.config
    }

    pub fn library(&self) -> &ImageLibrary {
        &self.library
    }

    pub fn history(&self) -> &ColorHistory {
        &self.history
    }

    pub fn mode(&self) -> &InteractionMode {
        &self.mode
    }

    pub fn selected(&self) -> Rgb {
        self.selected
    }

    pub fn preview(&self) -> Option<&Preview> {
        self.preview.as_ref()
    }

    pub fn container_size(&self) -> Option<Size> {
        self.container
    }

    /// All formats of the selected color.
    pub fn readout(&self) -> ColorReadout {
        ColorReadout::from(self.selected)
    }

    // --- Images ---

    /// Decode and add an image. Nothing is added if decoding fails.
    pub fn add_image(&mut self, name: &str, bytes: &[u8]) -> StudioResult<ImageId> {
        let id = self.library.insert_pending(name);
        if let Err(err) = self.library.complete(id, bytes) {
            self.library.remove(id);
            return Err(err);
        }
        Ok(id)
    }

    /// Add a buffer decoded elsewhere.
    pub fn add_decoded(&mut self, name: &str, buffer: ImageBuffer) -> ImageId {
        let id = self.library.insert_decoded(name, buffer);
        log::info!("Added image {} ({})", id, name);
        id
    }

    /// Register an upload whose bytes arrive later; the entry shows as
    /// loading until [`Studio::finish_upload`].
    pub fn begin_upload(&mut self, name: &str) -> ImageId {
        self.library.insert_pending(name)
    }

    /// Decode the bytes of a pending upload. A failed decode leaves the entry
    /// in place, marked failed.
    pub fn finish_upload(&mut self, id: ImageId, bytes: &[u8]) -> StudioResult<()> {
        self.library.complete(id, bytes)
    }

    /// Remove an image. Leaves fullscreen if it was showing that image.
    pub fn remove_image(&mut self, id: ImageId) -> bool {
        if self.library.remove(id).is_none() {
            return false;
        }
        if self.preview.is_some_and(|p| p.image == id) {
            self.preview = None;
        }
        if self.mode.fullscreen_image() == Some(id) {
            if let Err(err) = self.mode.apply(ModeEvent::CloseFullscreen) {
                log::warn!("Removed image {} is still shown: {}", id, err);
            }
        }
        log::info!("Removed image {}", id);
        true
    }

    /// Move an image to a new position in the display order (clamped to the
    /// end). Fullscreen navigation follows the new order.
    pub fn move_image(&mut self, id: ImageId, to: usize) -> bool {
        self.library.reorder(id, to)
    }

    // --- Picking ---

    /// Arm or disarm the picker. Returns whether it is now armed.
    pub fn toggle_picker(&mut self) -> StudioResult<bool> {
        self.mode.apply(ModeEvent::TogglePicker)?;
        if !self.mode.is_picking() {
            self.preview = None;
        }
        Ok(self.mode.is_picking())
    }

    fn view_for(&self, image: ImageId) -> ViewTransform {
        match self.mode.view() {
            Some(view) if self.mode.fullscreen_image() == Some(image) => view.transform(),
            _ => ViewTransform::IDENTITY,
        }
    }

    /// Sample without touching any state.
    pub fn sample(&self, image: ImageId, pointer: Point, layout: Rect) -> StudioResult<Option<Rgb>> {
        let buffer = self.library.buffer(image)?;
        Ok(mapper::sample_at(buffer, pointer, layout, self.view_for(image)).ok())
    }

    /// Pointer moved over an image. Updates and returns the preview.
    pub fn pointer_moved(&mut self, image: ImageId, pointer: Point, layout: Rect) -> Option<Preview> {
        if !self.mode.is_picking() {
            return None;
        }

        self.preview = match self.sample(image, pointer, layout) {
            Ok(Some(color)) => Some(Preview {
                image,
                color,
                pointer,
            }),
            Ok(None) => None,
            Err(err) => {
                log::debug!("No preview for {}: {}", image, err);
                None
            }
        };
        self.preview
    }

    /// Pointer left the image.
    pub fn pointer_left(&mut self) {
        self.preview = None;
    }

    /// Click on an image. On a hit the color becomes the selection and is
    /// recorded in the history.
    pub fn clicked(&mut self, image: ImageId, pointer: Point, layout: Rect) -> Option<Rgb> {
        if !self.mode.is_picking() {
            return None;
        }
        self.preview = None;

        let color = match self.sample(image, pointer, layout) {
            Ok(Some(color)) => color,
            Ok(None) => return None,
            Err(err) => {
                log::debug!("Click ignored on {}: {}", image, err);
                return None;
            }
        };

        self.selected = color;
        self.history.push(color);
        log::debug!("Picked {} from {}", color, image);

        if self.config.deactivate_after_pick {
            if let Err(err) = self.toggle_picker() {
                log::warn!("Picker left armed after pick: {}", err);
            }
        }
        Some(color)
    }

    /// Make a history entry the selected color.
    pub fn select_history(&mut self, index: usize) -> Option<Rgb> {
        let color = self.history.get(index)?;
        self.selected = color;
        Some(color)
    }

    /// Select a color typed as `#rrggbb`.
    pub fn select_hex(&mut self, hex: &str) -> StudioResult<Rgb> {
        let color = Rgb::from_hex(hex)?;
        self.selected = color;
        Ok(color)
    }

    pub fn clear_history(&mut self) {
        self.history.clear();
    }

    // --- Clipboard ---

    /// Copy the selected color in `format`. Returns the copied text.
    pub fn copy(&mut self, format: ColorFormat, clipboard: &mut dyn Clipboard) -> StudioResult<String> {
        self.copy_color(self.selected, format, clipboard)
    }

    /// Copy any color in `format`.
    pub fn copy_color(
        &mut self,
        color: Rgb,
        format: ColorFormat,
        clipboard: &mut dyn Clipboard,
    ) -> StudioResult<String> {
        let text = format.format(color);
        if let Err(err) = clipboard.write_text(&text) {
            log::warn!("Failed to copy {}: {}", text, err);
            return Err(err);
        }
        self.feedback.record(text.clone());
        Ok(text)
    }

    /// Whether `text` was copied within the feedback window.
    pub fn recently_copied(&self, text: &str) -> bool {
        self.feedback.is_active(text)
    }

    pub fn copied_text(&self) -> Option<&str> {
        self.feedback.active()
    }

    // --- Container resizing ---

    pub fn begin_resize(&mut self) -> StudioResult<()> {
        self.mode.apply(ModeEvent::BeginResize)?;
        self.preview = None;
        Ok(())
    }

    /// Drag the resize handle to `pointer`. The container's top-left is at
    /// `container_origin`. Sizes not above the configured minimum are ignored.
    pub fn resize_to(&mut self, pointer: Point, container_origin: Point) -> bool {
        if !self.mode.is_resizing() {
            return false;
        }
        let size = (pointer - container_origin).to_size();
        let min = self.config.min_container_size;
        if size.width > min.width && size.height > min.height {
            self.container = Some(size);
            true
        } else {
            false
        }
    }

    pub fn end_resize(&mut self) -> StudioResult<()> {
        self.mode.apply(ModeEvent::EndResize)
    }

    /// Back to automatic container sizing.
    pub fn reset_container_size(&mut self) {
        self.container = None;
    }

    // --- Fullscreen ---

    pub fn open_fullscreen(&mut self, image: ImageId) -> StudioResult<()> {
        if !self.library.contains(image) {
            return Err(StudioError::UnknownImage(image));
        }
        let view = FullscreenView::with_limits(self.config.min_zoom, self.config.max_zoom);
        self.mode.apply(ModeEvent::OpenFullscreen { image, view })?;
        self.preview = None;
        log::debug!("Fullscreen {}", image);
        Ok(())
    }

    pub fn close_fullscreen(&mut self) -> StudioResult<()> {
        self.mode.apply(ModeEvent::CloseFullscreen)?;
        self.preview = None;
        Ok(())
    }

    /// Show the next image in fullscreen, wrapping around. `None` outside
    /// fullscreen or while panning.
    pub fn show_next(&mut self) -> Option<ImageId> {
        self.step_fullscreen(ImageLibrary::next_after)
    }

    /// Show the previous image in fullscreen, wrapping around.
    pub fn show_previous(&mut self) -> Option<ImageId> {
        self.step_fullscreen(ImageLibrary::previous_before)
    }

    fn step_fullscreen(&mut self, step: fn(&ImageLibrary, ImageId) -> Option<ImageId>) -> Option<ImageId> {
        let current = self.mode.fullscreen_image()?;
        let target = step(&self.library, current)?;
        self.mode.apply(ModeEvent::ShowImage(target)).ok()?;
        self.preview = None;
        Some(target)
    }

    /// Zoom the fullscreen view by `factor` around `anchor` (relative to the
    /// image layout origin). Returns the new zoom, or `None` outside
    /// fullscreen.
    pub fn zoom_fullscreen(&mut self, anchor: Point, factor: f64) -> Option<f64> {
        let view = self.mode.view_mut()?;
        view.zoom_at(anchor, factor);
        Some(view.zoom())
    }

    pub fn zoom_in(&mut self, anchor: Point) -> Option<f64> {
        self.zoom_fullscreen(anchor, self.config.zoom_step)
    }

    pub fn zoom_out(&mut self, anchor: Point) -> Option<f64> {
        self.zoom_fullscreen(anchor, 1.0 / self.config.zoom_step)
    }

    pub fn reset_view(&mut self) -> bool {
        match self.mode.view_mut() {
            Some(view) => {
                view.reset();
                true
            }
            None => false,
        }
    }

    pub fn begin_pan(&mut self, pointer: Point) -> StudioResult<()> {
        self.mode.apply(ModeEvent::BeginPan(pointer))
    }

    pub fn pan_to(&mut self, pointer: Point) -> StudioResult<()> {
        self.mode.apply(ModeEvent::PanTo(pointer))
    }

    pub fn end_pan(&mut self) -> StudioResult<()> {
        self.mode.apply(ModeEvent::EndPan)
    }

    /// Where the fullscreen image should be laid out inside `viewport`
    /// before zoom and pan.
    pub fn fullscreen_layout(&self, viewport: Size) -> Option<Rect> {
        let image = self.mode.fullscreen_image()?;
        let buffer = self.library.buffer(image).ok()?;
        let size = Size::new(f64::from(buffer.width()), f64::from(buffer.height()));
        Some(view::fit_layout(size, viewport, self.config.fullscreen_padding))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clipboard::MemoryClipboard;
    use crate::color::{DEFAULT_COLOR, Rgba};

    /// 2x2 image: default indigo, red / green, blue.
    fn quad() -> ImageBuffer {
        let mut data = Vec::new();
        for px in [[99, 102, 241, 255], [255, 0, 0, 255], [0, 255, 0, 255], [0, 0, 255, 255]] {
            data.extend_from_slice(&px);
        }
        ImageBuffer::from_rgba(2, 2, data).unwrap()
    }

    /// 16x1 strip of distinct grays.
    fn strip() -> ImageBuffer {
        let mut data = Vec::new();
        for i in 0..16u8 {
            data.extend_from_slice(&[i * 10, i * 10, i * 10, 255]);
        }
        ImageBuffer::from_rgba(16, 1, data).unwrap()
    }

    const LAYOUT: Rect = Rect::new(0.0, 0.0, 100.0, 100.0);

    fn picking_studio() -> (Studio, ImageId) {
        let mut studio = Studio::default();
        let id = studio.add_decoded("quad.png", quad());
        studio.toggle_picker().unwrap();
        (studio, id)
    }

    #[test]
    fn test_initial_state() {
        let studio = Studio::default();
        assert_eq!(studio.selected(), DEFAULT_COLOR);
        assert_eq!(studio.readout().hex, "#6366f1");
        assert!(studio.history().is_empty());
        assert_eq!(*studio.mode(), InteractionMode::Idle);
    }

    #[test]
    fn test_clicks_ignored_when_not_picking() {
        let mut studio = Studio::default();
        let id = studio.add_decoded("quad.png", quad());
        assert_eq!(studio.clicked(id, Point::new(75.0, 25.0), LAYOUT), None);
        assert_eq!(studio.pointer_moved(id, Point::new(75.0, 25.0), LAYOUT), None);
        assert_eq!(studio.selected(), DEFAULT_COLOR);
    }

    #[test]
    fn test_preview_follows_pointer() {
        let (mut studio, id) = picking_studio();

        let preview = studio.pointer_moved(id, Point::new(75.0, 25.0), LAYOUT).unwrap();
        assert_eq!(preview.color, Rgb::new(255, 0, 0));
        assert_eq!(preview.pointer, Point::new(75.0, 25.0));

        assert_eq!(studio.pointer_moved(id, Point::new(150.0, 25.0), LAYOUT), None);
        assert!(studio.preview().is_none());

        studio.pointer_moved(id, Point::new(10.0, 10.0), LAYOUT);
        studio.pointer_left();
        assert!(studio.preview().is_none());
    }

    #[test]
    fn test_click_selects_and_records() {
        let (mut studio, id) = picking_studio();

        assert_eq!(studio.clicked(id, Point::new(10.0, 10.0), LAYOUT), Some(DEFAULT_COLOR));
        assert_eq!(studio.clicked(id, Point::new(10.0, 90.0), LAYOUT), Some(Rgb::new(0, 255, 0)));

        assert_eq!(studio.selected(), Rgb::new(0, 255, 0));
        assert_eq!(studio.history().to_hex_vec(), vec!["#00ff00", "#6366f1"]);
        assert!(studio.mode().is_picking());
    }

    #[test]
    fn test_out_of_bounds_click_changes_nothing() {
        let (mut studio, id) = picking_studio();
        studio.pointer_moved(id, Point::new(10.0, 10.0), LAYOUT);

        assert_eq!(studio.clicked(id, Point::new(-5.0, 10.0), LAYOUT), None);
        assert_eq!(studio.selected(), DEFAULT_COLOR);
        assert!(studio.history().is_empty());
        assert!(studio.preview().is_none());
    }

    #[test]
    fn test_eleven_picks_keep_ten() {
        let mut studio = Studio::default();
        let id = studio.add_decoded("strip.png", strip());
        studio.toggle_picker().unwrap();
        let layout = Rect::new(0.0, 0.0, 160.0, 10.0);

        for i in 0..11 {
            let x = f64::from(i) * 10.0 + 5.0;
            studio.clicked(id, Point::new(x, 5.0), layout).unwrap();
        }

        let history: Vec<_> = studio.history().iter().collect();
        assert_eq!(history.len(), 10);
        assert_eq!(history[0], Rgb::new(100, 100, 100));
        assert_eq!(history[9], Rgb::new(10, 10, 10));
        assert!(!studio.history().contains(Rgb::new(0, 0, 0)));
    }

    #[test]
    fn test_same_color_twice() {
        let (mut studio, id) = picking_studio();
        studio.clicked(id, Point::new(80.0, 80.0), LAYOUT);
        studio.clicked(id, Point::new(90.0, 90.0), LAYOUT);
        assert_eq!(studio.history().len(), 1);
    }

    #[test]
    fn test_deactivate_after_pick() {
        let config = StudioConfig {
            deactivate_after_pick: true,
            ..StudioConfig::default()
        };
        let mut studio = Studio::new(config);
        let id = studio.add_decoded("quad.png", quad());
        studio.toggle_picker().unwrap();

        assert!(studio.clicked(id, Point::new(10.0, 10.0), LAYOUT).is_some());
        assert_eq!(*studio.mode(), InteractionMode::Idle);
    }

    #[test]
    fn test_loading_image_is_not_sampled() {
        let mut studio = Studio::default();
        let id = studio.begin_upload("slow.png");
        studio.toggle_picker().unwrap();

        assert_eq!(studio.pointer_moved(id, Point::new(1.0, 1.0), LAYOUT), None);
        assert_eq!(studio.clicked(id, Point::new(1.0, 1.0), LAYOUT), None);
        assert!(matches!(
            studio.sample(id, Point::new(1.0, 1.0), LAYOUT),
            Err(StudioError::NotReady(_))
        ));
    }

    #[test]
    fn test_upload_lifecycle() {
        let mut img = image::RgbaImage::new(1, 1);
        img.put_pixel(0, 0, image::Rgba([5, 6, 7, 255]));
        let mut bytes = Vec::new();
        img.write_to(&mut std::io::Cursor::new(&mut bytes), image::ImageFormat::Png)
            .unwrap();

        let mut studio = Studio::default();
        let id = studio.begin_upload("dot.png");
        studio.finish_upload(id, &bytes).unwrap();
        assert_eq!(studio.sample(id, Point::new(5.0, 5.0), LAYOUT).unwrap(), Some(Rgb::new(5, 6, 7)));

        assert!(studio.add_image("junk.png", b"junk").is_err());
        assert_eq!(studio.library().len(), 1);
        assert!(studio.add_image("dot2.png", &bytes).is_ok());
        assert_eq!(studio.library().len(), 2);
    }

    #[test]
    fn test_select_history_and_hex() {
        let (mut studio, id) = picking_studio();
        studio.clicked(id, Point::new(75.0, 25.0), LAYOUT);
        studio.clicked(id, Point::new(75.0, 75.0), LAYOUT);

        assert_eq!(studio.select_history(1), Some(Rgb::new(255, 0, 0)));
        assert_eq!(studio.selected(), Rgb::new(255, 0, 0));
        // Selecting from history does not reorder it.
        assert_eq!(studio.history().latest(), Some(Rgb::new(0, 0, 255)));
        assert_eq!(studio.select_history(5), None);

        assert_eq!(studio.select_hex("#ABCDEF").unwrap(), Rgb::new(0xab, 0xcd, 0xef));
        assert!(studio.select_hex("abcdef").is_err());
        assert_eq!(studio.selected(), Rgb::new(0xab, 0xcd, 0xef));
    }

    #[test]
    fn test_copy_formats_and_feedback() {
        let mut studio = Studio::default();
        let mut clipboard = MemoryClipboard::new();

        let text = studio.copy(ColorFormat::Hsl, &mut clipboard).unwrap();
        assert_eq!(text, "hsl(239, 84%, 67%)");
        assert_eq!(clipboard.contents(), Some("hsl(239, 84%, 67%)"));
        assert!(studio.recently_copied("hsl(239, 84%, 67%)"));
        assert!(!studio.recently_copied("#6366f1"));

        studio.copy(ColorFormat::Rgb, &mut clipboard).unwrap();
        assert_eq!(studio.copied_text(), Some("rgb(99, 102, 241)"));
    }

    #[test]
    fn test_copy_failure_is_reported() {
        struct Denied;
        impl Clipboard for Denied {
            fn write_text(&mut self, _text: &str) -> StudioResult<()> {
                Err(StudioError::Clipboard("permission denied".into()))
            }
        }

        let mut studio = Studio::default();
        assert!(matches!(
            studio.copy(ColorFormat::Hex, &mut Denied),
            Err(StudioError::Clipboard(_))
        ));
        assert_eq!(studio.copied_text(), None);
    }

    #[test]
    fn test_resize_respects_minimum() {
        let (mut studio, _) = picking_studio();
        let origin = Point::new(100.0, 50.0);

        assert!(!studio.resize_to(Point::new(900.0, 700.0), origin));

        studio.begin_resize().unwrap();
        assert!(!studio.mode().is_picking());
        assert!(studio.resize_to(Point::new(900.0, 700.0), origin));
        assert_eq!(studio.container_size(), Some(Size::new(800.0, 650.0)));

        // Exactly the minimum is rejected.
        assert!(!studio.resize_to(Point::new(500.0, 700.0), origin));
        assert!(!studio.resize_to(Point::new(900.0, 350.0), origin));
        assert_eq!(studio.container_size(), Some(Size::new(800.0, 650.0)));

        studio.end_resize().unwrap();
        assert!(studio.mode().is_picking());

        studio.reset_container_size();
        assert_eq!(studio.container_size(), None);
    }

    #[test]
    fn test_fullscreen_zoomed_sampling() {
        let (mut studio, id) = picking_studio();
        studio.open_fullscreen(id).unwrap();
        assert!(studio.mode().is_picking());

        // 2x around the layout origin: the top-left 100x100 of the screen
        // shows only the top-left image pixel.
        assert_eq!(studio.zoom_fullscreen(Point::ZERO, 2.0), Some(2.0));
        let preview = studio.pointer_moved(id, Point::new(90.0, 90.0), LAYOUT).unwrap();
        assert_eq!(preview.color, DEFAULT_COLOR);
        let preview = studio.pointer_moved(id, Point::new(150.0, 50.0), LAYOUT);
        assert_eq!(preview.map(|p| p.color), Some(Rgb::new(255, 0, 0)));
    }

    #[test]
    fn test_fullscreen_zoom_is_clamped() {
        let (mut studio, id) = picking_studio();
        assert_eq!(studio.zoom_in(Point::ZERO), None);

        studio.open_fullscreen(id).unwrap();
        for _ in 0..20 {
            studio.zoom_in(Point::ZERO);
        }
        assert_eq!(studio.mode().view().map(|v| v.zoom()), Some(5.0));
        for _ in 0..20 {
            studio.zoom_out(Point::ZERO);
        }
        assert_eq!(studio.mode().view().map(|v| v.zoom()), Some(0.5));

        assert!(studio.reset_view());
        assert_eq!(studio.mode().view().map(|v| v.zoom()), Some(1.0));
    }

    #[test]
    fn test_fullscreen_pan() {
        let mut studio = Studio::default();
        let id = studio.add_decoded("quad.png", quad());
        studio.open_fullscreen(id).unwrap();

        studio.begin_pan(Point::new(0.0, 0.0)).unwrap();
        studio.pan_to(Point::new(-50.0, 0.0)).unwrap();
        studio.end_pan().unwrap();

        studio.toggle_picker().unwrap();
        // Panned 50px left: screen x=10 is local x=60, the right column.
        let preview = studio.pointer_moved(id, Point::new(10.0, 10.0), LAYOUT).unwrap();
        assert_eq!(preview.color, Rgb::new(255, 0, 0));
    }

    #[test]
    fn test_inline_sampling_ignores_fullscreen_view_of_other_image() {
        let mut studio = Studio::default();
        let a = studio.add_decoded("a.png", quad());
        let b = studio.add_decoded("b.png", quad());
        studio.toggle_picker().unwrap();
        studio.open_fullscreen(a).unwrap();
        studio.zoom_fullscreen(Point::ZERO, 4.0);

        let preview = studio.pointer_moved(b, Point::new(75.0, 25.0), LAYOUT).unwrap();
        assert_eq!(preview.color, Rgb::new(255, 0, 0));
    }

    #[test]
    fn test_fullscreen_navigation() {
        let mut studio = Studio::default();
        let a = studio.add_decoded("a.png", quad());
        let b = studio.add_decoded("b.png", quad());
        let c = studio.add_decoded("c.png", quad());

        assert_eq!(studio.show_next(), None);

        studio.open_fullscreen(b).unwrap();
        assert_eq!(studio.show_next(), Some(c));
        assert_eq!(studio.show_next(), Some(a));
        assert_eq!(studio.show_previous(), Some(c));

        studio.close_fullscreen().unwrap();
        assert_eq!(*studio.mode(), InteractionMode::Idle);
    }

    #[test]
    fn test_remove_fullscreen_image() {
        let (mut studio, id) = picking_studio();
        studio.open_fullscreen(id).unwrap();
        studio.pointer_moved(id, Point::new(10.0, 10.0), LAYOUT);

        assert!(studio.remove_image(id));
        assert_eq!(*studio.mode(), InteractionMode::Picking);
        assert!(studio.preview().is_none());
        assert!(!studio.remove_image(id));
    }

    #[test]
    fn test_reversed_zoom_bounds_do_not_panic() {
        let config = StudioConfig {
            min_zoom: 6.0,
            max_zoom: 5.0,
            ..StudioConfig::default()
        };
        let mut studio = Studio::new(config);
        let id = studio.add_decoded("quad.png", quad());

        studio.open_fullscreen(id).unwrap();
        assert_eq!(studio.mode().view().map(|v| v.zoom()), Some(5.0));
        assert_eq!(studio.zoom_in(Point::ZERO), Some(6.0));
        assert_eq!(studio.zoom_out(Point::ZERO), Some(5.0));

        let config = StudioConfig {
            min_zoom: f64::NAN,
            ..StudioConfig::default()
        };
        let mut studio = Studio::new(config);
        let id = studio.add_decoded("quad.png", quad());
        studio.open_fullscreen(id).unwrap();
        assert_eq!(studio.mode().view().map(|v| v.zoom()), Some(1.0));
    }

    #[test]
    fn test_move_image_changes_navigation() {
        let mut studio = Studio::default();
        let a = studio.add_decoded("a.png", quad());
        let b = studio.add_decoded("b.png", quad());
        let c = studio.add_decoded("c.png", quad());

        assert!(studio.move_image(c, 0));
        assert_eq!(studio.library().ids(), &[c, a, b]);
        assert!(!studio.move_image(ImageId::new(), 0));

        studio.open_fullscreen(c).unwrap();
        assert_eq!(studio.show_next(), Some(a));
    }

    #[test]
    fn test_open_unknown_image() {
        let mut studio = Studio::default();
        assert!(matches!(
            studio.open_fullscreen(ImageId::new()),
            Err(StudioError::UnknownImage(_))
        ));
    }

    #[test]
    fn test_fullscreen_layout() {
        let mut studio = Studio::default();
        let id = studio.add_decoded("wide.png", ImageBuffer::filled(200, 100, Rgba::new(0, 0, 0, 255)));
        assert_eq!(studio.fullscreen_layout(Size::new(1000.0, 800.0)), None);

        studio.open_fullscreen(id).unwrap();
        let rect = studio.fullscreen_layout(Size::new(1064.0, 800.0)).unwrap();
        assert!((rect.width() - 1000.0).abs() < 0.01);
        assert!((rect.height() - 500.0).abs() < 0.01);
    }
}
