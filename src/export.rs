//! Export of the cropped, annotated content surface to an image file

use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};

use image::RgbaImage;

use crate::domain::Rect;
use crate::error::{Error, Result};
use crate::render::RasterSurface;

/// Extract the crop region from the content surface and write it to `dest`
///
/// The rectangle is normalized and clipped to the surface bounds first; a
/// selection left with no area is rejected. The encode path is PNG
/// regardless of a `.jpg`/`.jpeg` destination extension. Neither surface
/// is modified.
pub fn export(content: &RasterSurface, crop: Rect, dest: &Path) -> Result<()> {
    let region = crop_region(content, crop)?;
    let image = content.read_region(region)?;
    let mut file = File::create(dest)?;
    write_png(&mut file, &image)?;
    log::info!(
        "exported {}x{} region to {}",
        image.width(),
        image.height(),
        dest.display()
    );
    Ok(())
}

/// Build the quick-save destination inside the given output directory
///
/// The filename is a local timestamp, e.g. `2024-05-01_13-30-07.png`.
pub fn quick_save_path(output_dir: &Path) -> PathBuf {
    let name = chrono::Local::now()
        .format("%Y-%m-%d_%H-%M-%S.png")
        .to_string();
    output_dir.join(name)
}

/// Normalize and clip the crop rectangle, rejecting empty selections
fn crop_region(content: &RasterSurface, crop: Rect) -> Result<Rect> {
    let bounds = Rect::full(content.width(), content.height());
    crop.normalized()
        .intersect(bounds)
        .ok_or(Error::EmptySelection)
}

fn write_png<W: io::Write>(w: W, image: &RgbaImage) -> std::result::Result<(), png::EncodingError> {
    let mut encoder = png::Encoder::new(w, image.width(), image.height());
    encoder.set_color(png::ColorType::Rgba);
    encoder.set_depth(png::BitDepth::Eight);
    let mut writer = encoder.write_header()?;
    writer.write_image_data(image.as_raw())
}
