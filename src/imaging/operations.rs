//! High-level image operations.
//!
//! These functions combine calculations with backend execution: they compute
//! the crop geometry for a source image and drive the backend through
//! load → crop → resize → encode, tagging any failure with its stage.

use super::backend::{BackendError, Dimensions, ImageBackend};
use super::calculations::{compute_crop_frame, compute_scale_factor, scaled_dimensions};
use super::params::{AspectTarget, CropFrame, OutputFormat, ScaleFactor};
use std::fmt;
use std::path::Path;
use thiserror::Error;

/// Backend step an image operation failed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Load,
    Crop,
    Resize,
    Encode,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Stage::Load => "load",
            Stage::Crop => "crop",
            Stage::Resize => "resize",
            Stage::Encode => "export",
        })
    }
}

#[derive(Error, Debug)]
#[error("{stage} failed: {source}")]
pub struct StageError {
    pub stage: Stage,
    #[source]
    pub source: BackendError,
}

fn at(stage: Stage) -> impl FnOnce(BackendError) -> StageError {
    move |source| StageError { stage, source }
}

/// Geometry for one source image.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FramePlan {
    pub frame: CropFrame,
    pub scale: ScaleFactor,
    /// Final pixel size after the resize.
    pub output: Dimensions,
}

/// Plan the crop and resize for a source image without executing it.
pub fn plan_frame(target: &AspectTarget, source: Dimensions) -> FramePlan {
    let frame = compute_crop_frame(target.ratio, source);
    let scale = compute_scale_factor(target.height, frame.height);
    FramePlan {
        frame,
        scale,
        output: scaled_dimensions(frame.dimensions(), scale),
    }
}

/// A source image after crop, resize and encode.
#[derive(Debug, Clone)]
pub struct ReframedImage {
    pub source: Dimensions,
    pub plan: FramePlan,
    pub bytes: Vec<u8>,
}

/// Load `source`, center-crop it to `target`'s ratio, scale it to
/// `target`'s height and encode it as `format`.
///
/// The decoded image is moved through each step and dropped before this
/// returns, so only the encoded bytes outlive the call.
pub fn reframe_image<B: ImageBackend>(
    backend: &B,
    source: &Path,
    target: &AspectTarget,
    format: OutputFormat,
) -> Result<ReframedImage, StageError> {
    let image = backend.load(source).map_err(at(Stage::Load))?;
    let source_dims = backend.dimensions(&image);
    let plan = plan_frame(target, source_dims);
    tracing::debug!(source = %source_dims, frame = %plan.frame, "computed crop frame");

    let image = backend.crop(image, &plan.frame).map_err(at(Stage::Crop))?;
    let image = backend.resize(image, plan.scale).map_err(at(Stage::Resize))?;
    tracing::debug!(
        scale = plan.scale.value(),
        output = %backend.dimensions(&image),
        "resized"
    );

    let bytes = backend.encode(&image, format).map_err(at(Stage::Encode))?;
    Ok(ReframedImage {
        source: source_dims,
        plan,
        bytes,
    })
}
