//! Card rasterization.
//!
//! Every call parses the markup into a fresh tree with a fresh font database,
//! so images embedded in the card are always decoded from the current state.

use std::io::Cursor;

use image::{DynamicImage, RgbaImage};
use resvg::{tiny_skia, usvg};

use super::{ExportFormat, ExportSettings, BACKDROP, PIXEL_RATIO};
use crate::card::CardRegion;
use crate::error::{CardError, CardResult};

/// Rasterize `region` at [`PIXEL_RATIO`] over an opaque [`BACKDROP`].
pub fn rasterize(region: &CardRegion, settings: &ExportSettings) -> CardResult<RgbaImage> {
    let mut options = usvg::Options::default();
    options.fontdb_mut().load_system_fonts();
    for dir in &settings.font_dirs {
        options.fontdb_mut().load_fonts_dir(dir);
    }

    let tree = usvg::Tree::from_str(region.markup(), &options)
        .map_err(|e| CardError::ExportFailed(format!("invalid card markup: {}", e)))?;

    let size = tree.size();
    let width = (size.width() * PIXEL_RATIO).ceil() as u32;
    let height = (size.height() * PIXEL_RATIO).ceil() as u32;

    let mut pixmap = tiny_skia::Pixmap::new(width, height).ok_or_else(|| {
        CardError::ExportFailed(format!("cannot allocate {}x{} canvas", width, height))
    })?;
    let [r, g, b] = BACKDROP;
    pixmap.fill(tiny_skia::Color::from_rgba8(r, g, b, 255));

    resvg::render(
        &tree,
        tiny_skia::Transform::from_scale(PIXEL_RATIO, PIXEL_RATIO),
        &mut pixmap.as_mut(),
    );

    // The backdrop is opaque, so premultiplied and straight alpha agree
    RgbaImage::from_raw(width, height, pixmap.take())
        .ok_or_else(|| CardError::ExportFailed("pixel buffer size mismatch".to_string()))
}

/// Encode rasterized pixels in `format`.
pub fn encode(image: RgbaImage, format: ExportFormat) -> CardResult<Vec<u8>> {
    let image = match format {
        // JPEG has no alpha channel
        ExportFormat::Jpeg => DynamicImage::ImageRgb8(DynamicImage::ImageRgba8(image).to_rgb8()),
        ExportFormat::Png | ExportFormat::WebP => DynamicImage::ImageRgba8(image),
    };

    let mut buffer = Vec::new();
    image
        .write_to(&mut Cursor::new(&mut buffer), format.image_format())
        .map_err(|e| CardError::ExportFailed(format!("failed to encode {}: {}", format, e)))?;
    Ok(buffer)
}
