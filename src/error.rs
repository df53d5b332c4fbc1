use thiserror::Error;

use crate::domain::Rect;

#[derive(Error, Debug)]
pub enum Error {
    #[error("surface dimensions must be non-zero, got {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    #[error("selection is empty, nothing to export")]
    EmptySelection,

    #[error("region {rect:?} exceeds surface bounds {width}x{height}")]
    RegionOutOfBounds { rect: Rect, width: u32, height: u32 },

    #[error("screen capture failed: {0}")]
    CaptureFailed(String),

    #[error("failed to decode image: {0}")]
    ImageDecode(#[from] image::ImageError),

    #[error("PNG encoding failed: {0}")]
    Encoding(#[from] png::EncodingError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
