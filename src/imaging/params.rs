//! Value types for image operations.
//!
//! These structs describe *what* to do, not *how* to do it. They are the
//! interface between the pure [`calculations`](super::calculations), the
//! high-level [`operations`](super::operations) and the
//! [`backend`](super::backend) that does the pixel work.
//!
//! ## Types
//!
//! - [`AspectRatio`]: Target width:height proportion, both sides non-zero.
//! - [`AspectTarget`]: Output height plus ratio for the whole run.
//! - [`CropFrame`]: Crop rectangle (size + offset) inside a source image.
//! - [`ScaleFactor`]: Isotropic resize factor applied after cropping.
//! - [`OutputFormat`]: Encoder and file extension for the whole run.

use super::backend::Dimensions;
use std::fmt;

/// Target aspect ratio as `width:height`.
///
/// Zero sides are rejected by [`RunConfig::validate`](crate::config::RunConfig::validate)
/// before any image is touched; the calculations assume both are non-zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AspectRatio {
    pub width: u32,
    pub height: u32,
}

impl AspectRatio {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Square ratio, as produced by the two-number parameter form.
    pub fn square(side: u32) -> Self {
        Self::new(side, side)
    }
}

impl fmt::Display for AspectRatio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.width, self.height)
    }
}

/// Output height plus aspect ratio; fixed for a whole run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AspectTarget {
    /// Output height in pixels.
    pub height: u32,
    pub ratio: AspectRatio,
}

impl AspectTarget {
    pub fn new(height: u32, width_ratio: u32, height_ratio: u32) -> Self {
        Self {
            height,
            ratio: AspectRatio::new(width_ratio, height_ratio),
        }
    }
}

/// Centered crop rectangle inside a source image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CropFrame {
    pub width: u32,
    pub height: u32,
    pub x_offset: u32,
    pub y_offset: u32,
}

impl CropFrame {
    pub fn dimensions(&self) -> Dimensions {
        Dimensions {
            width: self.width,
            height: self.height,
        }
    }
}

impl fmt::Display for CropFrame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}x{} at ({}, {})",
            self.width, self.height, self.x_offset, self.y_offset
        )
    }
}

/// Resize factor applied uniformly to both dimensions.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct ScaleFactor(pub f64);

impl ScaleFactor {
    pub fn value(self) -> f64 {
        self.0
    }
}

/// Encoded output format. Fixed for a run; also decides the output extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Webp,
    Png,
    Jpeg,
    Avif,
}

impl OutputFormat {
    /// File extension without the leading dot.
    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Webp => "webp",
            OutputFormat::Png => "png",
            OutputFormat::Jpeg => "jpg",
            OutputFormat::Avif => "avif",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}
