//! Interactive console session.
//!
//! Asks the three questions of a run in a fixed order and turns the answers
//! into a [`RunConfig`]:
//!
//! ```text
//! Enter the file extension without dots (e.g. heic, png): heic
//! You chose extension: heic
//! Enter the input and output folder separated by a space: photos out
//! Enter the height and aspect ratio separated by spaces (e.g. 1280 4 3): 1280 4 3
//! ```
//!
//! Nothing is created on disk here; the output directory is made by the
//! pipeline once every answer has been validated.

use crate::config::{ConfigError, RunConfig, parse_params_line};
use crate::imaging::OutputFormat;
use std::io::{BufRead, Write};

const EXTENSION_PROMPT: &str = "Enter the file extension without dots (e.g. heic, png): ";
const DIRECTORIES_PROMPT: &str = "Enter the input and output folder separated by a space: ";
const PARAMS_PROMPT: &str =
    "Enter the height and aspect ratio separated by spaces (e.g. 1280 4 3): ";

/// Print `prompt`, then read one line. End of input counts as a missing answer.
fn ask<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    prompt: &str,
    what: &'static str,
) -> Result<String, ConfigError> {
    write!(out, "{}", prompt)?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(ConfigError::MissingValue(what));
    }
    Ok(line.trim().to_string())
}

/// Run the three prompts against `input`/`out` and validate the answers.
pub fn collect<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    output_format: OutputFormat,
) -> Result<RunConfig, ConfigError> {
    let extension = ask(input, out, EXTENSION_PROMPT, "file extension")?;
    writeln!(out, "You chose extension: {}", extension)?;

    let dirs_line = ask(input, out, DIRECTORIES_PROMPT, "input and output directories")?;
    let dirs: Vec<&str> = dirs_line.split_whitespace().collect();
    let (input_dir, output_dir) = match dirs[..] {
        [input_dir, output_dir] => (input_dir, output_dir),
        [] => return Err(ConfigError::MissingValue("input directory")),
        [_] => return Err(ConfigError::MissingValue("output directory")),
        _ => {
            return Err(ConfigError::Validation(format!(
                "expected exactly two folders, got {} (paths with spaces are not supported)",
                dirs.len()
            )));
        }
    };

    let params_line = ask(input, out, PARAMS_PROMPT, "height and aspect ratio")?;
    let target = parse_params_line(&params_line)?;

    RunConfig::new(&extension, input_dir, output_dir, target, output_format)
}
