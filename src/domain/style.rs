//! Stroke style for freehand annotation

/// Minimum line width accepted for annotation strokes
pub const MIN_LINE_WIDTH: f32 = 1.0;
/// Maximum line width accepted for annotation strokes
pub const MAX_LINE_WIDTH: f32 = 36.0;
/// Initial line width of a fresh session
pub const DEFAULT_LINE_WIDTH: f32 = 5.0;

/// Opaque RGB color for annotation strokes, components in 0.0-1.0
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrokeColor {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Default for StrokeColor {
    fn default() -> Self {
        // Red, matching the editor's initial color choice
        Self {
            r: 1.0,
            g: 0.0,
            b: 0.0,
        }
    }
}

impl StrokeColor {
    pub fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Convert to image crate RGBA format (0-255)
    pub fn to_rgba_u8(self) -> [u8; 4] {
        [
            (self.r * 255.0).round() as u8,
            (self.g * 255.0).round() as u8,
            (self.b * 255.0).round() as u8,
            255,
        ]
    }
}

/// Color and width applied to subsequent freehand segments
///
/// Line caps are always round. Mutating the style never changes pixels that
/// are already committed to the content surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrokeStyle {
    pub color: StrokeColor,
    width: f32,
}

impl Default for StrokeStyle {
    fn default() -> Self {
        Self {
            color: StrokeColor::default(),
            width: DEFAULT_LINE_WIDTH,
        }
    }
}

impl StrokeStyle {
    pub fn new(color: StrokeColor, width: f32) -> Self {
        Self {
            color,
            width: width.clamp(MIN_LINE_WIDTH, MAX_LINE_WIDTH),
        }
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    /// Set the line width, clamped to the accepted range
    pub fn set_width(&mut self, width: f32) {
        self.width = width.clamp(MIN_LINE_WIDTH, MAX_LINE_WIDTH);
    }
}
