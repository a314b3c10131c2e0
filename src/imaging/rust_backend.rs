//! Pure Rust image processing backend.
//!
//! Everything is statically linked into the binary; there is no process-wide
//! library state, so `startup`/`shutdown` keep their no-op defaults.
//!
//! ## Crate mapping
//!
//! | Operation | Crate / function |
//! |---|---|
//! | Decode (JPEG, PNG, TIFF, WebP) | `image::ImageReader` with format sniffing |
//! | Crop | `image::DynamicImage::crop_imm` |
//! | Resize | `image::DynamicImage::resize_exact` with `Lanczos3` filter |
//! | Encode → WebP / PNG / JPEG | `image::DynamicImage::write_to` |
//! | Encode → AVIF | `image::codecs::avif::AvifEncoder` (rav1e, speed 6) |

use super::backend::{BackendError, Dimensions, ImageBackend};
use super::calculations::scaled_dimensions;
use super::params::{CropFrame, OutputFormat, ScaleFactor};
use image::imageops::FilterType;
use image::{DynamicImage, GenericImageView, ImageFormat, ImageReader};
use std::io::Cursor;
use std::path::Path;

/// Encoder quality used where the format has one (JPEG, AVIF).
const LOSSY_QUALITY: u8 = 90;

/// rav1e speed preset: 1 is slowest, 10 fastest.
const AVIF_SPEED: u8 = 6;

/// Pure Rust backend using the `image` crate ecosystem.
///
/// See the [module docs](self) for the crate-to-operation mapping.
pub struct RustBackend;

impl RustBackend {
    pub fn new() -> Self {
        Self
    }
}

impl Default for RustBackend {
    fn default() -> Self {
        Self::new()
    }
}

/// Convert to a pixel layout every encoder accepts.
///
/// The WebP and AVIF encoders only take 8-bit RGB(A); JPEG has no alpha.
fn to_encodable(img: &DynamicImage, format: OutputFormat) -> DynamicImage {
    match (format, img.color().has_alpha()) {
        (OutputFormat::Jpeg, _) | (_, false) => DynamicImage::ImageRgb8(img.to_rgb8()),
        (_, true) => DynamicImage::ImageRgba8(img.to_rgba8()),
    }
}

fn encode_avif(img: &DynamicImage) -> Result<Vec<u8>, BackendError> {
    let mut buf = Vec::new();
    let encoder =
        image::codecs::avif::AvifEncoder::new_with_speed_quality(&mut buf, AVIF_SPEED, LOSSY_QUALITY);
    img.write_with_encoder(encoder)
        .map_err(|e| BackendError::ProcessingFailed(format!("AVIF encode failed: {}", e)))?;
    Ok(buf)
}

fn encode_jpeg(img: &DynamicImage) -> Result<Vec<u8>, BackendError> {
    let mut buf = Vec::new();
    let encoder = image::codecs::jpeg::JpegEncoder::new_with_quality(&mut buf, LOSSY_QUALITY);
    img.write_with_encoder(encoder)
        .map_err(|e| BackendError::ProcessingFailed(format!("JPEG encode failed: {}", e)))?;
    Ok(buf)
}

fn encode_with_format(img: &DynamicImage, format: ImageFormat) -> Result<Vec<u8>, BackendError> {
    let mut buf = Cursor::new(Vec::new());
    img.write_to(&mut buf, format).map_err(|e| {
        BackendError::ProcessingFailed(format!("{:?} encode failed: {}", format, e))
    })?;
    Ok(buf.into_inner())
}

impl ImageBackend for RustBackend {
    type Image = DynamicImage;

    fn load(&self, path: &Path) -> Result<DynamicImage, BackendError> {
        // Format comes from the content; the file name may say otherwise
        ImageReader::open(path)
            .map_err(BackendError::Io)?
            .with_guessed_format()
            .map_err(BackendError::Io)?
            .decode()
            .map_err(|e| {
                BackendError::ProcessingFailed(format!("Failed to decode {}: {}", path.display(), e))
            })
    }

    fn dimensions(&self, image: &DynamicImage) -> Dimensions {
        let (width, height) = image.dimensions();
        Dimensions { width, height }
    }

    fn crop(&self, image: DynamicImage, frame: &CropFrame) -> Result<DynamicImage, BackendError> {
        let size = self.dimensions(&image);
        if !size.contains(frame) {
            return Err(BackendError::FrameOutOfBounds {
                frame: *frame,
                image: size,
            });
        }
        Ok(image.crop_imm(frame.x_offset, frame.y_offset, frame.width, frame.height))
    }

    fn resize(&self, image: DynamicImage, scale: ScaleFactor) -> Result<DynamicImage, BackendError> {
        if !(scale.value().is_finite() && scale.value() > 0.0) {
            return Err(BackendError::ProcessingFailed(format!(
                "Invalid scale factor: {}",
                scale.value()
            )));
        }
        let out = scaled_dimensions(self.dimensions(&image), scale);
        Ok(image.resize_exact(out.width, out.height, FilterType::Lanczos3))
    }

    fn encode(&self, image: &DynamicImage, format: OutputFormat) -> Result<Vec<u8>, BackendError> {
        let img = to_encodable(image, format);
        match format {
            OutputFormat::Webp => encode_with_format(&img, ImageFormat::WebP),
            OutputFormat::Png => encode_with_format(&img, ImageFormat::Png),
            OutputFormat::Jpeg => encode_jpeg(&img),
            OutputFormat::Avif => encode_avif(&img),
        }
    }
}
