// SPDX-License-Identifier: MPL-2.0
//! Image loading: fetch bytes by URL or path, decode, and expose the
//! natural dimensions alongside an Iced image handle.

use crate::error::{Error, Result};
use iced::widget::image;
use image_rs::GenericImageView;
use std::sync::Arc;

/// A decoded image: display handle plus natural dimensions.
///
/// The RGBA pixels live in an `Arc` so clones stay cheap when the data
/// crosses task boundaries inside Iced messages.
#[derive(Debug, Clone)]
pub struct ImageData {
    pub handle: image::Handle,
    pub width: u32,
    pub height: u32,
    rgba_bytes: Arc<Vec<u8>>,
}

impl ImageData {
    /// Creates an `ImageData` from raw RGBA pixels.
    #[must_use]
    pub fn from_rgba(width: u32, height: u32, pixels: Vec<u8>) -> Self {
        let rgba_bytes = Arc::new(pixels);
        let handle = image::Handle::from_rgba(width, height, rgba_bytes.to_vec());
        Self {
            handle,
            width,
            height,
            rgba_bytes,
        }
    }

    /// Natural aspect ratio (width / height).
    #[must_use]
    pub fn aspect(&self) -> f32 {
        if self.height == 0 {
            1.0
        } else {
            self.width as f32 / self.height as f32
        }
    }

    /// Raw RGBA bytes backing the handle.
    pub fn rgba_bytes(&self) -> &[u8] {
        &self.rgba_bytes
    }
}

/// Loads an image from a URL (`http://` / `https://`) or a file path.
///
/// Byte fetching and decoding both happen off the UI thread; the natural
/// dimensions are available on the returned data before any geometry is
/// solved from them.
///
/// # Errors
///
/// Returns [`Error::Fetch`] when the URL request fails, [`Error::Io`] when
/// the file cannot be read, and [`Error::Image`] when decoding fails.
pub async fn load_image(src: &str) -> Result<ImageData> {
    let bytes = fetch_bytes(src).await?;
    decode(bytes).await
}

async fn fetch_bytes(src: &str) -> Result<Vec<u8>> {
    if src.starts_with("http://") || src.starts_with("https://") {
        let response = reqwest::get(src).await?.error_for_status()?;
        Ok(response.bytes().await?.to_vec())
    } else {
        let path = src.to_string();
        tokio::task::spawn_blocking(move || std::fs::read(path))
            .await
            .map_err(|e| Error::Io(e.to_string()))?
            .map_err(Error::from)
    }
}

async fn decode(bytes: Vec<u8>) -> Result<ImageData> {
    tokio::task::spawn_blocking(move || {
        let decoded = image_rs::load_from_memory(&bytes)?;
        let (width, height) = decoded.dimensions();
        if width == 0 || height == 0 {
            return Err(Error::Image(format!(
                "image has degenerate dimensions {width}x{height}"
            )));
        }
        let pixels = decoded.to_rgba8().into_vec();
        Ok(ImageData::from_rgba(width, height, pixels))
    })
    .await
    .map_err(|e| Error::Image(e.to_string()))?
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_relative_eq;

    fn png_fixture(width: u32, height: u32) -> Vec<u8> {
        let img = image_rs::RgbaImage::from_pixel(
            width,
            height,
            image_rs::Rgba([120, 80, 40, 255]),
        );
        let mut bytes = Vec::new();
        image_rs::DynamicImage::ImageRgba8(img)
            .write_to(
                &mut std::io::Cursor::new(&mut bytes),
                image_rs::ImageFormat::Png,
            )
            .unwrap();
        bytes
    }

    #[test]
    fn aspect_from_dimensions() {
        let data = ImageData::from_rgba(64, 48, vec![0; 64 * 48 * 4]);
        assert_relative_eq!(data.aspect(), 4.0 / 3.0);
    }

    #[test]
    fn zero_height_aspect_is_square() {
        let data = ImageData::from_rgba(64, 0, Vec::new());
        assert_relative_eq!(data.aspect(), 1.0);
    }

    #[tokio::test]
    async fn loads_from_file_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("fixture.png");
        std::fs::write(&path, png_fixture(80, 50)).unwrap();

        let data = load_image(path.to_str().unwrap()).await.unwrap();
        assert_eq!((data.width, data.height), (80, 50));
    }

    #[tokio::test]
    async fn missing_file_is_an_io_error() {
        let result = load_image("/definitely/not/here.png").await;
        assert!(matches!(result, Err(Error::Io(_))));
    }

    #[tokio::test]
    async fn garbage_bytes_are_an_image_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("noise.png");
        std::fs::write(&path, b"not an image").unwrap();

        let result = load_image(path.to_str().unwrap()).await;
        assert!(matches!(result, Err(Error::Image(_))));
    }
}
