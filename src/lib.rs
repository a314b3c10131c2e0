//! # Reframe
//!
//! Batch image converter. Every file in an input directory is center-cropped
//! to a target aspect ratio, scaled to a target height, and written to an
//! output directory in a web-friendly format (WebP by default).
//!
//! # Pipeline
//!
//! ```text
//! RunConfig  →  for each entry (sorted by name):
//!                 load → crop frame → crop → scale → resize → encode → write
//! ```
//!
//! Runs are strictly sequential and stop at the first error. Progress is
//! reported through a callback so the pipeline itself never prints.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`config`] | [`config::RunConfig`]: parameter parsing and validation shared by both entry modes |
//! | [`prompt`] | Interactive three-question session that produces a `RunConfig` |
//! | [`process`] | Batch pipeline over the input directory |
//! | [`imaging`] | Crop/scale geometry and the pluggable pixel backend |
//! | [`naming`] | Input extension stripping and output file naming |
//! | [`output`] | CLI output formatting of progress events and errors |
//! | [`logging`] | `tracing` subscriber setup |
//!
//! # Design Decisions
//!
//! ## Integer Crop Geometry
//!
//! The crop frame is computed with 64-bit integer cross-multiplication and
//! truncating division. Results are reproducible bit-for-bit across platforms
//! and never overflow for any pair of 32-bit dimensions. Only the scale factor
//! is floating point.
//!
//! ## Backend Trait
//!
//! Pixel work sits behind [`imaging::ImageBackend`]. The production backend
//! uses the pure-Rust `image` crate; tests drive the pipeline with a recording
//! mock, so pipeline logic is exercised without decoding a single pixel.
//!
//! ## Validate Before Touching Disk
//!
//! A run's parameters are fully parsed and validated before the output
//! directory is created. A typo in the height never leaves an empty output
//! directory behind.

pub mod config;
pub mod imaging;
pub mod logging;
pub mod naming;
pub mod output;
pub mod process;
pub mod prompt;

#[cfg(test)]
pub(crate) mod test_helpers;
