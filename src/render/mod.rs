//! Rasterization onto in-memory pixel surfaces using tiny-skia

pub mod surface;

pub use surface::RasterSurface;
