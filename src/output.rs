//! CLI output formatting for a conversion run.
//!
//! # Output Format
//!
//! ```text
//! Converting 2 files
//! 001/002 IMG_0001.heic
//!     Crop: 3000x3000 at (500, 0) of 4000x3000
//!     Output: out/IMG_0001.webp (1000x1000)
//! 002/002 IMG_0002.heic
//!     Crop: 3000x3000 at (0, 500) of 3000x4000
//!     Output: out/IMG_0002.webp (1000x1000)
//! Images successfully processed and saved
//! ```
//!
//! A failed run prints the file header of the failing entry followed by a
//! single `error:` line on stderr naming the stage and the cause.
//!
//! # Architecture
//!
//! `format_*` functions return lines for testability and are pure; the
//! `print_*` wrappers write them out.

use crate::process::{ProcessEvent, ProcessSummary};

/// Line printed after every file has been converted.
pub const SUCCESS_LINE: &str = "Images successfully processed and saved";

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Format a single progress event as display lines.
pub fn format_process_event(event: &ProcessEvent) -> Vec<String> {
    match event {
        ProcessEvent::RunStarted { file_count: 0 } => vec!["No files to convert".to_string()],
        ProcessEvent::RunStarted { file_count: 1 } => vec!["Converting 1 file".to_string()],
        ProcessEvent::RunStarted { file_count } => {
            vec![format!("Converting {} files", file_count)]
        }
        ProcessEvent::FileStarted {
            index,
            total,
            file_name,
        } => vec![format!(
            "{}/{} {}",
            format_index(*index),
            format_index(*total),
            file_name
        )],
        ProcessEvent::FileWritten {
            output,
            source_size,
            frame,
            output_size,
            ..
        } => vec![
            format!("    Crop: {} of {}", frame, source_size),
            format!("    Output: {} ({})", output.display(), output_size),
        ],
    }
}

/// Format a terminal error as one line.
///
/// Error `Display` impls already embed their cause, so the source chain is
/// not walked again.
pub fn format_error(err: &dyn std::error::Error) -> String {
    format!("error: {}", err)
}

/// Print a progress event to stdout.
pub fn print_process_event(event: &ProcessEvent) {
    for line in format_process_event(event) {
        println!("{}", line);
    }
}

/// Print the success line to stdout.
pub fn print_summary(summary: &ProcessSummary) {
    tracing::debug!(files = summary.written.len(), "run summary");
    println!("{}", SUCCESS_LINE);
}

/// Print a terminal error to stderr.
pub fn print_error(err: &dyn std::error::Error) {
    eprintln!("{}", format_error(err));
}
