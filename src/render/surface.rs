//! Fixed-size pixel surfaces backed by tiny-skia pixmaps
//!
//! An editing session holds two of these: a content surface carrying the
//! captured image plus every committed stroke, and an overlay surface
//! carrying only the live crop indicator.

use image::RgbaImage;
use tiny_skia::{
    BlendMode, Color, FilterQuality, IntSize, LineCap, LineJoin, Paint, PathBuilder, Pixmap,
    PixmapPaint, Stroke, Transform,
};

use crate::domain::{Point, Rect, StrokeColor, StrokeStyle};
use crate::error::{Error, Result};

/// A fixed-size RGBA pixel buffer supporting stroke and region operations
///
/// Dimensions are set once at creation and never change; drawing is clipped
/// to the surface bounds.
pub struct RasterSurface {
    pixmap: Pixmap,
}

impl RasterSurface {
    /// Create a fully transparent surface
    pub fn new(width: u32, height: u32) -> Result<Self> {
        let pixmap = Pixmap::new(width, height).ok_or(Error::InvalidDimensions { width, height })?;
        Ok(Self { pixmap })
    }

    /// Get the width of the surface
    pub fn width(&self) -> u32 {
        self.pixmap.width()
    }

    /// Get the height of the surface
    pub fn height(&self) -> u32 {
        self.pixmap.height()
    }

    /// Copy `source` into the surface at `(x, y)`, scaled to `(w, h)`
    ///
    /// Used once per session to seed the content surface from the captured
    /// frame. An unscaled copy is pixel-exact.
    pub fn draw_image(&mut self, source: &RgbaImage, x: i32, y: i32, w: u32, h: u32) -> Result<()> {
        let size =
            IntSize::from_wh(source.width(), source.height()).ok_or(Error::InvalidDimensions {
                width: source.width(),
                height: source.height(),
            })?;
        let src = Pixmap::from_vec(source.as_raw().clone(), size).ok_or(
            Error::InvalidDimensions {
                width: source.width(),
                height: source.height(),
            },
        )?;

        let sx = w as f32 / source.width() as f32;
        let sy = h as f32 / source.height() as f32;
        let scaled = sx != 1.0 || sy != 1.0;
        let paint = PixmapPaint {
            quality: if scaled {
                FilterQuality::Bicubic
            } else {
                FilterQuality::Nearest
            },
            ..PixmapPaint::default()
        };
        self.pixmap.draw_pixmap(
            0,
            0,
            src.as_ref(),
            &paint,
            Transform::from_scale(sx, sy).post_translate(x as f32, y as f32),
            None,
        );
        Ok(())
    }

    /// Rasterize one stroke segment with round caps
    pub fn stroke_line(&mut self, from: Point, to: Point, style: &StrokeStyle) {
        let mut pb = PathBuilder::new();
        pb.move_to(from.x as f32, from.y as f32);
        pb.line_to(to.x as f32, to.y as f32);
        let Some(path) = pb.finish() else {
            return;
        };

        let [r, g, b, a] = style.color.to_rgba_u8();
        let mut paint = Paint::default();
        paint.set_color_rgba8(r, g, b, a);
        paint.anti_alias = true;

        let stroke = Stroke {
            width: style.width(),
            line_cap: LineCap::Round,
            line_join: LineJoin::Round,
            ..Default::default()
        };
        self.pixmap
            .stroke_path(&path, &paint, &stroke, Transform::identity(), None);
    }

    /// Draw an unfilled rectangle outline
    ///
    /// Only used for the crop-selection indicator on the overlay surface.
    pub fn stroke_rect(&mut self, rect: Rect, color: StrokeColor, width: f32) {
        let mut pb = PathBuilder::new();
        pb.move_to(rect.x1 as f32, rect.y1 as f32);
        pb.line_to(rect.x2 as f32, rect.y1 as f32);
        pb.line_to(rect.x2 as f32, rect.y2 as f32);
        pb.line_to(rect.x1 as f32, rect.y2 as f32);
        pb.close();
        let Some(path) = pb.finish() else {
            return;
        };

        let [r, g, b, a] = color.to_rgba_u8();
        let mut paint = Paint::default();
        paint.set_color_rgba8(r, g, b, a);
        paint.anti_alias = true;

        let stroke = Stroke {
            width,
            line_cap: LineCap::Round,
            line_join: LineJoin::Round,
            ..Default::default()
        };
        self.pixmap
            .stroke_path(&path, &paint, &stroke, Transform::identity(), None);
    }

    /// Reset the pixels inside `rect` to transparent
    pub fn clear(&mut self, rect: Rect) {
        let r = rect.normalized();
        let Some(skia_rect) =
            tiny_skia::Rect::from_xywh(r.x1 as f32, r.y1 as f32, r.width() as f32, r.height() as f32)
        else {
            return;
        };
        let mut paint = Paint::default();
        paint.blend_mode = BlendMode::Clear;
        self.pixmap
            .fill_rect(skia_rect, &paint, Transform::identity(), None);
    }

    /// Reset the entire surface to transparent
    pub fn clear_all(&mut self) {
        self.pixmap.fill(Color::TRANSPARENT);
    }

    /// Read the pixels inside `rect` into a new RGBA buffer
    ///
    /// `rect` must already be normalized and clipped to the surface bounds;
    /// the result has exactly `rect.width() x rect.height()` pixels.
    pub fn read_region(&self, rect: Rect) -> Result<RgbaImage> {
        if rect.x1 < 0
            || rect.y1 < 0
            || rect.x2 > self.width() as i32
            || rect.y2 > self.height() as i32
            || rect.x1 > rect.x2
            || rect.y1 > rect.y2
        {
            return Err(Error::RegionOutOfBounds {
                rect,
                width: self.width(),
                height: self.height(),
            });
        }

        let stride = self.pixmap.width() as usize * 4;
        let data = self.pixmap.data();
        let image = RgbaImage::from_fn(rect.width() as u32, rect.height() as u32, |x, y| {
            let i = (rect.y1 as usize + y as usize) * stride + (rect.x1 as usize + x as usize) * 4;
            image::Rgba([data[i], data[i + 1], data[i + 2], data[i + 3]])
        });
        Ok(image)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn solid_image(width: u32, height: u32, rgba: [u8; 4]) -> RgbaImage {
        RgbaImage::from_pixel(width, height, image::Rgba(rgba))
    }

    #[test]
    fn test_zero_dimension_is_rejected() {
        assert!(matches!(
            RasterSurface::new(0, 5),
            Err(Error::InvalidDimensions { .. })
        ));
        assert!(matches!(
            RasterSurface::new(5, 0),
            Err(Error::InvalidDimensions { .. })
        ));
    }

    #[test]
    fn test_unscaled_draw_image_is_pixel_exact() {
        let source = solid_image(4, 3, [12, 200, 7, 255]);
        let mut surface = RasterSurface::new(4, 3).expect("surface");
        surface.draw_image(&source, 0, 0, 4, 3).expect("seed");

        let copy = surface.read_region(Rect::full(4, 3)).expect("read");
        assert_eq!(copy.as_raw(), source.as_raw());
    }

    #[test]
    fn test_scaled_draw_image_covers_target() {
        let source = solid_image(2, 2, [0, 0, 255, 255]);
        let mut surface = RasterSurface::new(8, 8).expect("surface");
        surface.draw_image(&source, 0, 0, 8, 8).expect("seed");

        let copy = surface.read_region(Rect::full(8, 8)).expect("read");
        assert_eq!(copy.get_pixel(4, 4)[3], 255);
        assert!(copy.get_pixel(4, 4)[2] > 200);
    }

    #[test]
    fn test_read_region_has_exact_dimensions() {
        let surface = RasterSurface::new(20, 10).expect("surface");
        let region = surface.read_region(Rect::new(3, 2, 9, 7)).expect("read");
        assert_eq!(region.width(), 6);
        assert_eq!(region.height(), 5);
    }

    #[test]
    fn test_read_region_outside_bounds_is_rejected() {
        let surface = RasterSurface::new(20, 10).expect("surface");
        assert!(matches!(
            surface.read_region(Rect::new(0, 0, 21, 10)),
            Err(Error::RegionOutOfBounds { .. })
        ));
        assert!(matches!(
            surface.read_region(Rect::new(-1, 0, 20, 10)),
            Err(Error::RegionOutOfBounds { .. })
        ));
    }

    #[test]
    fn test_stroke_line_paints_along_the_path() {
        let mut surface = RasterSurface::new(40, 40).expect("surface");
        let style = StrokeStyle::new(StrokeColor::new(1.0, 0.0, 0.0), 5.0);
        surface.stroke_line(Point::new(10, 10), Point::new(10, 30), &style);

        let copy = surface.read_region(Rect::full(40, 40)).expect("read");
        let on_path = copy.get_pixel(10, 20);
        assert!(on_path[0] > 200);
        assert!(on_path[3] > 200);
        assert_eq!(copy.get_pixel(30, 20)[3], 0);
    }

    #[test]
    fn test_clear_resets_a_region_to_transparent() {
        let mut surface = RasterSurface::new(30, 30).expect("surface");
        let style = StrokeStyle::new(StrokeColor::new(0.0, 1.0, 0.0), 8.0);
        surface.stroke_line(Point::new(0, 15), Point::new(30, 15), &style);
        surface.clear(Rect::new(0, 0, 30, 30));

        let copy = surface.read_region(Rect::full(30, 30)).expect("read");
        assert!(copy.pixels().all(|p| p[3] == 0));
    }

    #[test]
    fn test_stroke_rect_outlines_without_filling() {
        let mut surface = RasterSurface::new(50, 50).expect("surface");
        surface.stroke_rect(Rect::new(10, 10, 40, 40), StrokeColor::new(0.0, 0.0, 0.0), 1.0);

        let copy = surface.read_region(Rect::full(50, 50)).expect("read");
        // Edge midpoint carries the outline, the interior stays empty
        assert!(copy.get_pixel(25, 10)[3] > 0);
        assert_eq!(copy.get_pixel(25, 25)[3], 0);
    }
}
