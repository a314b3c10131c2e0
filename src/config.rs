//! Run configuration.
//!
//! A run is fully described by a [`RunConfig`]: which directory to read,
//! which extension to strip from input names, where to write, the target
//! height and aspect ratio, and the output format. Both the `convert`
//! subcommand and the interactive prompt build one through
//! [`RunConfig::from_parts`], so they share parsing and validation.
//!
//! Everything is validated before the pipeline touches the filesystem: a bad
//! parameter never leaves a half-created output directory behind.
//!
//! ## Parameter line
//!
//! Height and ratio are given as whitespace-separated integers:
//!
//! ```text
//! 1280 4 3     # height 1280, ratio 4:3
//! 1280 16      # height 1280, ratio 16:16 (square)
//! ```

use crate::imaging::{AspectRatio, AspectTarget, OutputFormat};
use std::num::ParseIntError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("string conversion error '{token}': {source}")]
    InvalidNumber {
        token: String,
        #[source]
        source: ParseIntError,
    },
    #[error("expected height and ratio as 2 or 3 numbers, got {0}")]
    ParamCount(usize),
    #[error("missing {0}")]
    MissingValue(&'static str),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Everything a batch run needs. Immutable once validated.
#[derive(Debug, Clone, PartialEq)]
pub struct RunConfig {
    /// Input extension without the leading dot (e.g. `heic`).
    pub input_extension: String,
    pub input_dir: PathBuf,
    pub output_dir: PathBuf,
    pub target: AspectTarget,
    pub output_format: OutputFormat,
}

impl RunConfig {
    /// Parse and validate the raw pieces of a run.
    ///
    /// `params` are the tokens of the parameter line, see the
    /// [module docs](self).
    pub fn from_parts<S: AsRef<str>>(
        extension: &str,
        input_dir: impl Into<PathBuf>,
        output_dir: impl Into<PathBuf>,
        params: &[S],
        output_format: OutputFormat,
    ) -> Result<Self, ConfigError> {
        let target = parse_params(params)?;
        Self::new(extension, input_dir, output_dir, target, output_format)
    }

    /// Build and validate a config from an already parsed target.
    pub fn new(
        extension: &str,
        input_dir: impl Into<PathBuf>,
        output_dir: impl Into<PathBuf>,
        target: AspectTarget,
        output_format: OutputFormat,
    ) -> Result<Self, ConfigError> {
        let config = Self {
            input_extension: normalize_extension(extension),
            input_dir: input_dir.into(),
            output_dir: output_dir.into(),
            target,
            output_format,
        };
        config.validate()?;
        Ok(config)
    }

    /// Validate config values are within acceptable ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.input_extension.is_empty() {
            return Err(ConfigError::Validation(
                "file extension must not be empty".into(),
            ));
        }
        if !self
            .input_extension
            .chars()
            .all(|c| c.is_ascii_alphanumeric())
        {
            return Err(ConfigError::Validation(format!(
                "file extension must be letters or digits only, got '{}'",
                self.input_extension
            )));
        }
        if self.input_dir.as_os_str().is_empty() {
            return Err(ConfigError::MissingValue("input directory"));
        }
        if self.output_dir.as_os_str().is_empty() {
            return Err(ConfigError::MissingValue("output directory"));
        }
        if self.target.height == 0 {
            return Err(ConfigError::Validation(
                "target height must be non-zero".into(),
            ));
        }
        if self.target.ratio.width == 0 || self.target.ratio.height == 0 {
            return Err(ConfigError::Validation(
                "aspect ratio values must be non-zero".into(),
            ));
        }
        Ok(())
    }
}

/// Trim whitespace and one leading dot: ` .heic ` → `heic`.
pub fn normalize_extension(raw: &str) -> String {
    let trimmed = raw.trim();
    trimmed.strip_prefix('.').unwrap_or(trimmed).to_string()
}

/// Parse the height/ratio tokens into an [`AspectTarget`].
///
/// Every token is parsed before the count is checked, so a non-integer is
/// always reported as such. Zero values pass here and are rejected by
/// [`RunConfig::validate`].
pub fn parse_params<S: AsRef<str>>(tokens: &[S]) -> Result<AspectTarget, ConfigError> {
    let numbers = tokens
        .iter()
        .map(|t| {
            let token = t.as_ref();
            token
                .parse::<u32>()
                .map_err(|source| ConfigError::InvalidNumber {
                    token: token.to_string(),
                    source,
                })
        })
        .collect::<Result<Vec<u32>, _>>()?;

    match numbers[..] {
        [height, side] => Ok(AspectTarget {
            height,
            ratio: AspectRatio::square(side),
        }),
        [height, width_ratio, height_ratio] => {
            Ok(AspectTarget::new(height, width_ratio, height_ratio))
        }
        _ => Err(ConfigError::ParamCount(numbers.len())),
    }
}

/// Split a parameter line on whitespace and parse it.
pub fn parse_params_line(line: &str) -> Result<AspectTarget, ConfigError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    parse_params(&tokens)
}
