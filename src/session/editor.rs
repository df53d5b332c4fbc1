//! The editing surface state machine
//!
//! An `EditorSession` owns two canvas layers and interprets pointer events
//! as freehand drawing or crop selection depending on the current mode.
//! Strokes are committed segment by segment directly onto the content
//! surface; the overlay only ever carries the live crop indicator.

use std::path::Path;

use image::RgbaImage;

use crate::domain::{Point, Rect, StrokeColor, StrokeStyle};
use crate::error::Result;
use crate::render::RasterSurface;

/// Interaction mode of the session
///
/// Owned solely by [`EditorSession`]; transitions happen only through
/// [`EditorSession::enter_crop_mode`] and the pointer events.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EditorMode {
    /// Pointer gestures paint freehand strokes onto the content surface
    #[default]
    Draw,
    /// The next pointer gesture selects a crop rectangle
    Crop,
}

/// Active pointer gesture
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
enum Gesture {
    #[default]
    Idle,
    /// A stroke path is being extended; `last` is the previous path point
    Drawing { last: Point },
    /// A crop rectangle is being dragged
    Selecting,
}

/// Pointer events forwarded by the host shell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerEvent {
    Pressed(Point),
    Dragged(Point),
    Released,
}

/// Color of the crop-selection indicator outline
const SELECTION_COLOR: StrokeColor = StrokeColor {
    r: 0.0,
    g: 0.0,
    b: 0.0,
};
/// Width of the crop-selection indicator outline
const SELECTION_WIDTH: f32 = 1.0;

/// A two-layer editing session over one captured or loaded image
pub struct EditorSession {
    content: RasterSurface,
    overlay: RasterSurface,
    crop: Rect,
    style: StrokeStyle,
    mode: EditorMode,
    gesture: Gesture,
}

impl EditorSession {
    /// Create a session seeded from a captured or loaded image
    ///
    /// The crop rectangle starts at the full surface bounds, so exporting
    /// without a crop gesture returns the whole annotated image. Every
    /// session is fully independent; opening another image builds a new one.
    pub fn from_image(image: &RgbaImage) -> Result<Self> {
        let (width, height) = (image.width(), image.height());
        let mut content = RasterSurface::new(width, height)?;
        content.draw_image(image, 0, 0, width, height)?;
        let overlay = RasterSurface::new(width, height)?;
        log::debug!("editor session created: {}x{} pixels", width, height);
        Ok(Self {
            content,
            overlay,
            crop: Rect::full(width, height),
            style: StrokeStyle::default(),
            mode: EditorMode::Draw,
            gesture: Gesture::Idle,
        })
    }

    pub fn mode(&self) -> EditorMode {
        self.mode
    }

    pub fn style(&self) -> StrokeStyle {
        self.style
    }

    /// The current crop rectangle, in gesture order (possibly unnormalized)
    pub fn crop_rect(&self) -> Rect {
        self.crop
    }

    /// The persistent layer holding the image and committed strokes
    pub fn content(&self) -> &RasterSurface {
        &self.content
    }

    /// The ephemeral layer holding the live crop indicator
    pub fn overlay(&self) -> &RasterSurface {
        &self.overlay
    }

    /// Handle a pointer event forwarded by the host
    pub fn handle_pointer(&mut self, event: PointerEvent) {
        match event {
            PointerEvent::Pressed(p) => self.pressed(p),
            PointerEvent::Dragged(p) => self.dragged(p),
            PointerEvent::Released => self.released(),
        }
    }

    /// Begin a gesture at `p`
    ///
    /// In crop mode this discards the previous rectangle and overlay frame;
    /// in draw mode it opens a new stroke path.
    pub fn pressed(&mut self, p: Point) {
        match self.mode {
            EditorMode::Crop => {
                self.overlay.clear_all();
                self.crop = Rect::from_points(p, p);
                self.gesture = Gesture::Selecting;
            }
            EditorMode::Draw => {
                self.gesture = Gesture::Drawing { last: p };
            }
        }
    }

    /// Extend the active gesture to `p`
    ///
    /// While selecting, the stored corners keep their gesture order; they
    /// are normalized per frame for rendering only. While drawing, the new
    /// segment is committed immediately and irreversibly.
    pub fn dragged(&mut self, p: Point) {
        match self.gesture {
            Gesture::Selecting => {
                self.crop.x2 = p.x;
                self.crop.y2 = p.y;
                self.overlay.clear_all();
                self.draw_selection();
            }
            Gesture::Drawing { last } => {
                self.commit_segment(last, p);
                self.gesture = Gesture::Drawing { last: p };
            }
            Gesture::Idle => {}
        }
    }

    /// Finish the active gesture
    ///
    /// A crop gesture is single-shot: releasing switches the session back
    /// to draw mode. A finished stroke needs no further work, its segments
    /// are already on the content surface.
    pub fn released(&mut self) {
        if self.gesture == Gesture::Selecting {
            self.mode = EditorMode::Draw;
        }
        self.gesture = Gesture::Idle;
    }

    /// Switch the session into crop mode
    ///
    /// The existing crop rectangle and overlay stay as they are; the next
    /// press discards them. Entering a mode ends any in-progress gesture,
    /// abandoning an unfinished stroke path.
    pub fn enter_crop_mode(&mut self) {
        self.gesture = Gesture::Idle;
        self.mode = EditorMode::Crop;
    }

    /// Update the stroke style; `None` leaves a component unchanged
    ///
    /// Effective for the next committed segment. Pixels already painted
    /// keep the style they were committed with.
    pub fn set_style(&mut self, color: Option<StrokeColor>, width: Option<f32>) {
        if let Some(color) = color {
            self.style.color = color;
        }
        if let Some(width) = width {
            self.style.set_width(width);
        }
    }

    /// Export the cropped content surface to `dest`
    pub fn export(&self, dest: &Path) -> Result<()> {
        crate::export::export(&self.content, self.crop, dest)
    }

    /// Rasterize one stroke segment onto the content surface
    ///
    /// Kept as the single commit point so an undo stack could be added
    /// without touching the pointer-event dispatch.
    fn commit_segment(&mut self, from: Point, to: Point) {
        self.content.stroke_line(from, to, &self.style);
    }

    /// Stroke the crop indicator outline onto the overlay
    ///
    /// Renders at the normalized corners without mutating the stored
    /// rectangle. The session's stroke style is neither consulted nor
    /// modified.
    fn draw_selection(&mut self) {
        self.overlay
            .stroke_rect(self.crop.normalized(), SELECTION_COLOR, SELECTION_WIDTH);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(width: u32, height: u32) -> EditorSession {
        let image = RgbaImage::from_pixel(width, height, image::Rgba([255, 255, 255, 255]));
        EditorSession::from_image(&image).expect("session")
    }

    #[test]
    fn test_new_session_defaults() {
        let session = session(100, 80);
        assert_eq!(session.mode(), EditorMode::Draw);
        assert_eq!(session.crop_rect(), Rect::full(100, 80));
        assert_eq!(session.style(), StrokeStyle::default());
    }

    #[test]
    fn test_crop_gesture_returns_mode_to_draw() {
        let mut session = session(100, 100);
        session.enter_crop_mode();
        assert_eq!(session.mode(), EditorMode::Crop);

        session.pressed(Point::new(10, 10));
        session.dragged(Point::new(60, 80));
        session.released();

        assert_eq!(session.mode(), EditorMode::Draw);
        assert_eq!(session.crop_rect(), Rect::new(10, 10, 60, 80));
    }

    #[test]
    fn test_crop_corners_keep_gesture_order() {
        let mut session = session(100, 100);
        session.enter_crop_mode();
        session.pressed(Point::new(60, 80));
        session.dragged(Point::new(10, 10));
        session.released();

        // Stored unnormalized; consumers normalize
        assert_eq!(session.crop_rect(), Rect::new(60, 80, 10, 10));
        assert_eq!(
            session.crop_rect().normalized(),
            Rect::new(10, 10, 60, 80)
        );
    }

    #[test]
    fn test_press_resets_both_corners() {
        let mut session = session(100, 100);
        session.enter_crop_mode();
        session.pressed(Point::new(10, 10));
        session.dragged(Point::new(60, 80));
        session.released();

        session.enter_crop_mode();
        session.pressed(Point::new(30, 40));
        assert_eq!(session.crop_rect(), Rect::new(30, 40, 30, 40));
    }

    #[test]
    fn test_entering_crop_mode_keeps_previous_rect_until_press() {
        let mut session = session(100, 100);
        session.enter_crop_mode();
        session.pressed(Point::new(10, 10));
        session.dragged(Point::new(60, 80));
        session.released();

        session.enter_crop_mode();
        assert_eq!(session.crop_rect(), Rect::new(10, 10, 60, 80));
    }

    #[test]
    fn test_selection_rendering_leaves_style_intact() {
        let mut session = session(100, 100);
        session.set_style(Some(StrokeColor::new(0.2, 0.9, 0.3)), Some(17.0));
        let before = session.style();

        session.enter_crop_mode();
        session.pressed(Point::new(10, 10));
        session.dragged(Point::new(60, 80));
        session.released();

        assert_eq!(session.style(), before);
    }

    #[test]
    fn test_selection_indicator_lands_on_overlay_only() {
        let mut session = session(100, 100);
        session.enter_crop_mode();
        session.pressed(Point::new(10, 10));
        session.dragged(Point::new(60, 80));

        let overlay = session
            .overlay()
            .read_region(Rect::full(100, 100))
            .expect("overlay");
        assert!(overlay.get_pixel(35, 10)[3] > 0);

        // Content keeps the seeded white pixel under the indicator
        let content = session
            .content()
            .read_region(Rect::full(100, 100))
            .expect("content");
        assert_eq!(content.get_pixel(35, 10)[0], 255);
        assert_eq!(content.get_pixel(35, 10)[1], 255);
    }

    #[test]
    fn test_committed_stroke_is_immune_to_style_change() {
        let mut session = session(60, 60);
        session.set_style(Some(StrokeColor::new(1.0, 0.0, 0.0)), Some(5.0));
        session.pressed(Point::new(20, 10));
        session.dragged(Point::new(20, 50));
        session.released();

        let before = session
            .content()
            .read_region(Rect::full(60, 60))
            .expect("content");
        session.set_style(Some(StrokeColor::new(0.0, 0.0, 1.0)), Some(30.0));
        let after = session
            .content()
            .read_region(Rect::full(60, 60))
            .expect("content");
        assert_eq!(before.as_raw(), after.as_raw());
    }

    #[test]
    fn test_mode_switch_abandons_stroke_in_progress() {
        let mut session = session(60, 60);
        session.pressed(Point::new(10, 10));
        session.enter_crop_mode();

        // The abandoned path paints nothing when the pointer keeps moving
        // without a new press
        session.dragged(Point::new(50, 50));
        let content = session
            .content()
            .read_region(Rect::full(60, 60))
            .expect("content");
        assert!(content.pixels().all(|p| p[0] == 255 && p[1] == 255));
    }

    #[test]
    fn test_drag_without_press_is_ignored() {
        let mut session = session(60, 60);
        session.dragged(Point::new(30, 30));
        session.released();

        let content = session
            .content()
            .read_region(Rect::full(60, 60))
            .expect("content");
        assert!(content.pixels().all(|p| p[0] == 255 && p[1] == 255));
    }
}
