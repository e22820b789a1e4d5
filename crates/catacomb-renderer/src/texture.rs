//! Image decode for scene textures
//!
//! Decodes texture files to RGBA8 pixel data plus a color-space flag, the
//! same policy as the demo's texture loader: gamma correction only applies
//! to color images, single-channel masks stay linear, and every source is
//! expanded to four channels. Uploading to a GPU texture is the caller's
//! job.

use std::path::Path;

use image::GenericImageView;

/// Texture-related errors
#[derive(Debug, Clone, thiserror::Error)]
pub enum TextureError {
    /// Filesystem read failed
    #[error("IO error: {0}")]
    Io(String),
    /// Image decode failed
    #[error("Decode error: {0}")]
    Decode(String),
}

/// Decoded texture pixels ready for upload
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextureData {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Tightly packed RGBA8 pixel data.
    pub pixels: Vec<u8>,
    /// Whether the pixels are sRGB-encoded (sample through an sRGB format).
    pub srgb: bool,
}

impl TextureData {
    /// Decode an image file.
    ///
    /// With `gamma_correction` set, color images are tagged sRGB so
    /// sampling linearizes them; grayscale sources are left linear either
    /// way.
    pub fn load(path: impl AsRef<Path>, gamma_correction: bool) -> Result<Self, TextureError> {
        let path = path.as_ref();
        let img = image::open(path).map_err(|e| match e {
            image::ImageError::IoError(io) => TextureError::Io(io.to_string()),
            other => TextureError::Decode(other.to_string()),
        })?;

        let (width, height) = img.dimensions();
        let srgb = gamma_correction && img.color().channel_count() >= 3;
        let pixels = img.to_rgba8().into_raw();

        tracing::debug!(
            "Loaded texture {}: {}x{}, srgb={}",
            path.display(),
            width,
            height,
            srgb
        );

        Ok(Self {
            width,
            height,
            pixels,
            srgb,
        })
    }

    /// The wgpu format matching the pixel data and color space.
    pub fn format(&self) -> wgpu::TextureFormat {
        if self.srgb {
            wgpu::TextureFormat::Rgba8UnormSrgb
        } else {
            wgpu::TextureFormat::Rgba8Unorm
        }
    }

    /// Bytes per row for a buffer-to-texture copy.
    pub fn bytes_per_row(&self) -> u32 {
        self.width * 4
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_rgb_png_as_srgb() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("wall.png");
        image::RgbImage::from_pixel(4, 2, image::Rgb([120, 90, 60]))
            .save(&path)
            .unwrap();

        let texture = TextureData::load(&path, true).unwrap();
        assert_eq!((texture.width, texture.height), (4, 2));
        assert_eq!(texture.pixels.len(), 4 * 2 * 4);
        assert!(texture.srgb);
        assert_eq!(texture.format(), wgpu::TextureFormat::Rgba8UnormSrgb);
        // alpha filled in during RGBA expansion
        assert_eq!(texture.pixels[3], 255);
    }

    #[test]
    fn test_grayscale_stays_linear() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("mask.png");
        image::GrayImage::from_pixel(2, 2, image::Luma([128]))
            .save(&path)
            .unwrap();

        let texture = TextureData::load(&path, true).unwrap();
        assert!(!texture.srgb);
        assert_eq!(texture.format(), wgpu::TextureFormat::Rgba8Unorm);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = TextureData::load("/nonexistent/hyro.jpg", true).unwrap_err();
        assert!(matches!(err, TextureError::Io(_)));
    }
}
