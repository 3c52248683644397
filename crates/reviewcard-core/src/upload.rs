//! Image upload adapter.
//!
//! Turns a user-selected file into a [`CardImage::DataUri`] the card can
//! embed directly.

use std::path::Path;

use base64::Engine;
use image::ImageFormat;

use crate::error::{CardError, CardResult};
use crate::types::CardImage;

/// File extensions offered by the upload dialog.
pub const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "webp"];

/// Read a file and encode it as a data URI.
///
/// Fails with [`CardError::ImageLoadFailed`] when the file cannot be read
/// or is not a decodable PNG, JPEG or WebP image.
pub async fn load_image(path: impl AsRef<Path>) -> CardResult<CardImage> {
    let path = path.as_ref();
    let bytes = tokio::fs::read(path)
        .await
        .map_err(|e| CardError::ImageLoadFailed(format!("{}: {}", path.display(), e)))?;

    let size = bytes.len();

    // Decode on the blocking pool
    let image = tokio::task::spawn_blocking(move || encode_data_uri(&bytes))
        .await
        .map_err(|e| CardError::ImageLoadFailed(format!("image task failed: {}", e)))??;
    tracing::debug!(path = %path.display(), size, "Loaded image");
    Ok(image)
}

/// Encode raw image bytes as a `data:<mime>;base64,...` reference.
pub fn encode_data_uri(bytes: &[u8]) -> CardResult<CardImage> {
    let format = image::guess_format(bytes)
        .map_err(|e| CardError::ImageLoadFailed(format!("unrecognized image: {}", e)))?;
    let mime = mime_type(format).ok_or_else(|| {
        CardError::ImageLoadFailed(format!("unsupported image format: {:?}", format))
    })?;

    // Decode once so a truncated or mislabeled file never reaches the card
    image::load_from_memory_with_format(bytes, format)
        .map_err(|e| CardError::ImageLoadFailed(format!("failed to decode image: {}", e)))?;

    let encoded = base64::engine::general_purpose::STANDARD.encode(bytes);
    Ok(CardImage::from_data_uri(format!("data:{};base64,{}", mime, encoded)))
}

fn mime_type(format: ImageFormat) -> Option<&'static str> {
    match format {
        ImageFormat::Png => Some("image/png"),
        ImageFormat::Jpeg => Some("image/jpeg"),
        ImageFormat::WebP => Some("image/webp"),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgba, RgbaImage};
    use std::io::Cursor;

    fn tiny_png() -> Vec<u8> {
        let img = RgbaImage::from_pixel(2, 2, Rgba([200, 30, 90, 255]));
        let mut buffer = Vec::new();
        img.write_to(&mut Cursor::new(&mut buffer), ImageFormat::Png)
            .unwrap();
        buffer
    }

    #[test]
    fn test_png_becomes_data_uri() {
        let image = encode_data_uri(&tiny_png()).unwrap();
        match image {
            CardImage::DataUri(uri) => assert!(uri.starts_with("data:image/png;base64,iVBORw0KGgo")),
            other => panic!("unexpected image kind: {:?}", other),
        }
    }

    #[test]
    fn test_text_is_rejected() {
        let err = encode_data_uri(b"definitely not an image").unwrap_err();
        assert!(matches!(err, CardError::ImageLoadFailed(_)));
    }

    #[test]
    fn test_truncated_png_is_rejected() {
        let png = tiny_png();
        let err = encode_data_uri(&png[..png.len() / 2]).unwrap_err();
        assert!(matches!(err, CardError::ImageLoadFailed(_)));
    }

    #[tokio::test]
    async fn test_file_loads_off_the_async_thread() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("poster.png");
        std::fs::write(&path, tiny_png()).unwrap();

        let image = load_image(&path).await.unwrap();
        assert_eq!(image, encode_data_uri(&tiny_png()).unwrap());
    }

    #[tokio::test]
    async fn test_broken_file_fails_to_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("poster.png");
        std::fs::write(&path, b"not a png").unwrap();

        let err = load_image(&path).await.unwrap_err();
        assert!(matches!(err, CardError::ImageLoadFailed(_)));
    }

    #[tokio::test]
    async fn test_missing_file_fails_to_load() {
        let err = load_image("/definitely/not/here.png").await.unwrap_err();
        assert!(matches!(err, CardError::ImageLoadFailed(_)));
    }
}
