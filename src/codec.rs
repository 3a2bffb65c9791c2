//! Image codec capabilities used by the sweep.
//!
//! The traversal in [`crate::batch`] only ever talks to an [`ImageCodec`], so
//! tests can swap in an in-memory codec and the real work stays in
//! [`WebpCodec`].

use crate::error::{CompressionError, Result};
use image::imageops::FilterType;
use image::DynamicImage;

/// Decode, resize and encode: the three things the sweep asks of an image
/// library.
pub trait ImageCodec {
    type Image;

    fn decode(&self, bytes: &[u8]) -> Result<Self::Image>;

    /// `(width, height)` in pixels.
    fn dimensions(&self, image: &Self::Image) -> (u32, u32);

    /// Resamples `image` to exactly `width` x `height`.
    fn resize(&self, image: Self::Image, width: u32, height: u32) -> Result<Self::Image>;

    /// Lossy encode at `quality` (0-100, 100 is near-lossless).
    fn encode(&self, image: &Self::Image, quality: u8) -> Result<Vec<u8>>;
}

/// Decodes PNG/JPEG with the `image` crate, resizes with Lanczos3 and
/// encodes lossy WebP through libwebp.
#[derive(Debug, Clone, Copy)]
pub struct WebpCodec {
    pub filter: FilterType,
}

impl Default for WebpCodec {
    fn default() -> Self {
        Self {
            filter: FilterType::Lanczos3,
        }
    }
}

impl ImageCodec for WebpCodec {
    type Image = DynamicImage;

    fn decode(&self, bytes: &[u8]) -> Result<DynamicImage> {
        Ok(image::load_from_memory(bytes)?)
    }

    fn dimensions(&self, image: &DynamicImage) -> (u32, u32) {
        (image.width(), image.height())
    }

    fn resize(&self, image: DynamicImage, width: u32, height: u32) -> Result<DynamicImage> {
        if width == 0 || height == 0 {
            return Err(CompressionError::InvalidDimensions(width, height));
        }
        if (image.width(), image.height()) == (width, height) {
            return Ok(image);
        }
        Ok(image.resize_exact(width, height, self.filter))
    }

    fn encode(&self, image: &DynamicImage, quality: u8) -> Result<Vec<u8>> {
        let (width, height) = (image.width(), image.height());
        if width == 0 || height == 0 {
            return Err(CompressionError::InvalidDimensions(width, height));
        }

        // libwebp only takes 8-bit RGB(A); wider sample types get flattened here.
        let encoded = if image.color().has_alpha() {
            let rgba = image.to_rgba8();
            webp::Encoder::from_rgba(rgba.as_raw(), width, height)
                .encode_simple(false, f32::from(quality))
                .map_err(|e| CompressionError::WebpEncoding(format!("{:?}", e)))?
                .to_vec()
        } else {
            let rgb = image.to_rgb8();
            webp::Encoder::from_rgb(rgb.as_raw(), width, height)
                .encode_simple(false, f32::from(quality))
                .map_err(|e| CompressionError::WebpEncoding(format!("{:?}", e)))?
                .to_vec()
        };

        Ok(encoded)
    }
}
