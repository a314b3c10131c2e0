//! Image processing backend trait and shared types.
//!
//! The [`ImageBackend`] trait is the capability interface the pipeline needs:
//! load, crop, resize and encode, each returning an explicit `Result`. Images
//! move through crop and resize by value, so each one is dropped as soon as
//! the pipeline is done with it.
//!
//! Backends that need process-wide setup override [`ImageBackend::startup`]
//! and [`ImageBackend::shutdown`]; callers bracket a run with a
//! [`BackendSession`] so teardown happens on every exit path.
//!
//! The production implementation is
//! [`RustBackend`](super::rust_backend::RustBackend).

use super::params::{CropFrame, OutputFormat, ScaleFactor};
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BackendError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Processing failed: {0}")]
    ProcessingFailed(String),
    #[error("Crop {frame} does not fit in a {image} image")]
    FrameOutOfBounds { frame: CropFrame, image: Dimensions },
}

/// Pixel size of an image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

impl Dimensions {
    /// Whether `frame` lies entirely inside an image of this size.
    pub fn contains(&self, frame: &CropFrame) -> bool {
        u64::from(frame.x_offset) + u64::from(frame.width) <= u64::from(self.width)
            && u64::from(frame.y_offset) + u64::from(frame.height) <= u64::from(self.height)
    }
}

impl std::fmt::Display for Dimensions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Trait for image processing backends.
///
/// Every backend implements the four pixel operations so the pipeline stays
/// backend-agnostic. Errors are reported per call; the caller decides which
/// pipeline stage they belong to.
pub trait ImageBackend {
    /// Decoded in-memory image.
    type Image;

    /// Acquire process-wide resources before the first image.
    fn startup(&self) -> Result<(), BackendError> {
        Ok(())
    }

    /// Release whatever [`startup`](Self::startup) acquired.
    fn shutdown(&self) {}

    /// Decode an image from disk.
    fn load(&self, path: &Path) -> Result<Self::Image, BackendError>;

    /// Size of a loaded image.
    fn dimensions(&self, image: &Self::Image) -> Dimensions;

    /// Extract `frame` from `image`.
    fn crop(&self, image: Self::Image, frame: &CropFrame) -> Result<Self::Image, BackendError>;

    /// Scale both dimensions by `scale`.
    fn resize(&self, image: Self::Image, scale: ScaleFactor) -> Result<Self::Image, BackendError>;

    /// Encode to `format`, returning the file contents.
    fn encode(&self, image: &Self::Image, format: OutputFormat) -> Result<Vec<u8>, BackendError>;
}

/// Scoped backend startup/shutdown.
///
/// [`start`](Self::start) runs [`ImageBackend::startup`]; dropping the
/// session runs [`ImageBackend::shutdown`].
pub struct BackendSession<'a, B: ImageBackend> {
    backend: &'a B,
}

impl<'a, B: ImageBackend> BackendSession<'a, B> {
    pub fn start(backend: &'a B) -> Result<Self, BackendError> {
        backend.startup()?;
        tracing::debug!("image backend started");
        Ok(Self { backend })
    }

    pub fn backend(&self) -> &'a B {
        self.backend
    }
}

impl<B: ImageBackend> Drop for BackendSession<'_, B> {
    fn drop(&mut self) {
        self.backend.shutdown();
        tracing::debug!("image backend shut down");
    }
}
