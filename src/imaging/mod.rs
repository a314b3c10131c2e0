//! Image processing: crop geometry plus a pluggable pixel backend.
//!
//! | Operation | Where |
//! |---|---|
//! | **Crop frame** | [`compute_crop_frame`] (pure integer math) |
//! | **Scale factor** | [`compute_scale_factor`] |
//! | **Load / crop / resize / encode** | [`ImageBackend`], implemented by [`RustBackend`] |
//!
//! The module is split into:
//! - **Calculations**: Pure functions for crop and resize geometry (unit testable)
//! - **Parameters**: Value types describing the geometry and output format
//! - **Backend**: [`ImageBackend`] trait, [`BackendSession`] + [`RustBackend`]
//! - **Operations**: [`reframe_image`] combining calculations + backend

pub mod backend;
mod calculations;
pub mod operations;
mod params;
pub mod rust_backend;

pub use backend::{BackendError, BackendSession, Dimensions, ImageBackend};
pub use calculations::{compute_crop_frame, compute_scale_factor, scaled_dimensions};
pub use operations::{FramePlan, ReframedImage, Stage, StageError, plan_frame, reframe_image};
pub use params::{AspectRatio, AspectTarget, CropFrame, OutputFormat, ScaleFactor};
pub use rust_backend::RustBackend;
