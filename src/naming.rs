//! Output file naming for converted images.
//!
//! Every entry of the input directory keeps its base name and gets the output
//! format's extension. The input extension is only used to decide what to
//! strip, and it must match exactly:
//!
//! - `IMG_0001.heic` with extension `heic` → `IMG_0001.webp`
//! - `IMG_0002.HEIC` with extension `heic` → `IMG_0002.HEIC.webp` (case-sensitive)
//! - `notes.txt` with extension `heic` → `notes.txt.webp` (nothing stripped)
//! - `.heic` with extension `heic` → `.heic.webp` (a bare suffix is not a base name)
//!
//! Names are handled as [`OsStr`], so file names that are not valid UTF-8
//! keep their exact bytes in the output name.
//!
//! Entries that do not carry the input extension are still converted; the
//! extension is a naming hint, not a filter.

use std::ffi::{OsStr, OsString};
use std::path::Path;

/// Split off a trailing `.{ext}` from `file_name`.
///
/// Returns `None` when the name does not end in `.{ext}` or when nothing
/// would be left in front of it. `ext` is a single dot-free extension.
pub fn strip_extension<'a>(file_name: &'a OsStr, ext: &str) -> Option<&'a OsStr> {
    let path = Path::new(file_name);
    if path.extension()? != ext {
        return None;
    }
    path.file_stem()
}

/// Output file name for an input entry.
pub fn output_file_name(file_name: &OsStr, input_ext: &str, output_ext: &str) -> OsString {
    let mut name = strip_extension(file_name, input_ext)
        .unwrap_or(file_name)
        .to_os_string();
    name.push(".");
    name.push(output_ext);
    name
}
