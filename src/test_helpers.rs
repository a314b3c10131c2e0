//! Shared test utilities for the reframe test suite.
//!
//! Provides synthetic images and input-directory fixtures so backend and
//! pipeline tests do not depend on checked-in binary files.
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let tmp = setup_input_dir(&["a.png", "b.png"]);
//! let names = dir_file_names(tmp.path());
//! assert_eq!(names, vec!["a.png", "b.png"]);
//! ```

use image::{DynamicImage, RgbImage};
use std::path::Path;
use tempfile::TempDir;

use crate::config::RunConfig;
use crate::imaging::{AspectTarget, OutputFormat};

// =========================================================================
// Synthetic images
// =========================================================================

/// An RGB image whose pixels encode their own coordinates.
pub fn gradient_image(width: u32, height: u32) -> DynamicImage {
    DynamicImage::ImageRgb8(RgbImage::from_fn(width, height, |x, y| {
        image::Rgb([(x % 256) as u8, (y % 256) as u8, 128])
    }))
}

/// Write a small valid PNG with the given dimensions.
pub fn create_test_png(path: &Path, width: u32, height: u32) {
    gradient_image(width, height)
        .save_with_format(path, image::ImageFormat::Png)
        .unwrap();
}

// =========================================================================
// Directory fixtures
// =========================================================================

/// Create a temp directory holding one empty file per name.
///
/// The mock backend never reads file contents, so empty files are enough.
pub fn setup_input_dir(names: &[&str]) -> TempDir {
    let tmp = TempDir::new().unwrap();
    for name in names {
        std::fs::write(tmp.path().join(name), "").unwrap();
    }
    tmp
}

/// Sorted file names in `dir`. Panics if the directory cannot be read.
pub fn dir_file_names(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = std::fs::read_dir(dir)
        .unwrap_or_else(|e| panic!("cannot read {}: {e}", dir.display()))
        .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}

/// Run config for `input` → `output` with a 1:1 target at `height`.
pub fn square_config(input: &Path, output: &Path, ext: &str, height: u32) -> RunConfig {
    RunConfig {
        input_extension: ext.to_string(),
        input_dir: input.to_path_buf(),
        output_dir: output.to_path_buf(),
        target: AspectTarget::new(height, 1, 1),
        output_format: OutputFormat::Webp,
    }
}
