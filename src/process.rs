//! Batch conversion of an input directory.
//!
//! Takes a validated [`RunConfig`] and converts every entry of the input
//! directory, one at a time:
//!
//! ```text
//! load → compute crop frame → crop → compute scale → resize → encode → write
//! ```
//!
//! ## Failure policy
//!
//! The first error at any stage ends the run. Files written before it stay on
//! disk; nothing is retried or rolled back. Each [`ProcessError`] variant
//! names its stage so the caller can report it in one line.
//!
//! ## Output Structure
//!
//! ```text
//! input/                 output/
//! ├── IMG_0001.heic  →   ├── IMG_0001.webp
//! ├── IMG_0002.heic  →   ├── IMG_0002.webp
//! └── notes.txt      →   load error, the run stops here
//! ```
//!
//! Entries are visited in file-name order. The input extension only decides
//! which suffix is replaced in the output name; see [`crate::naming`].
//!
//! ## Backend lifetime
//!
//! The backend is started after the output directory exists and shut down
//! when the run ends, whether it succeeds or not (see [`BackendSession`]).

use crate::config::RunConfig;
use crate::imaging::{
    BackendError, BackendSession, CropFrame, Dimensions, ImageBackend, RustBackend, Stage,
    StageError, reframe_image,
};
use crate::naming::{output_file_name, strip_extension};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProcessError {
    #[error("mkdir error: {}: {source}", .path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("read dir error: {}: {source}", .path.display())]
    ReadDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("backend startup error: {0}")]
    Startup(#[source] BackendError),
    #[error("load error: {}: {source}", .path.display())]
    Load {
        path: PathBuf,
        #[source]
        source: BackendError,
    },
    #[error("crop error: {}: {source}", .path.display())]
    Crop {
        path: PathBuf,
        #[source]
        source: BackendError,
    },
    #[error("resize error: {}: {source}", .path.display())]
    Resize {
        path: PathBuf,
        #[source]
        source: BackendError,
    },
    #[error("export error: {}: {source}", .path.display())]
    Encode {
        path: PathBuf,
        #[source]
        source: BackendError,
    },
    #[error("write error: {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ProcessError {
    fn from_stage(err: StageError, path: PathBuf) -> Self {
        let source = err.source;
        match err.stage {
            Stage::Load => ProcessError::Load { path, source },
            Stage::Crop => ProcessError::Crop { path, source },
            Stage::Resize => ProcessError::Resize { path, source },
            Stage::Encode => ProcessError::Encode { path, source },
        }
    }
}

/// Progress reported while a run is in flight.
#[derive(Debug, Clone, PartialEq)]
pub enum ProcessEvent {
    /// Output directory exists and the input has been listed.
    RunStarted { file_count: usize },
    /// About to load the `index`th (1-based) entry.
    FileStarted {
        index: usize,
        total: usize,
        file_name: String,
    },
    /// The converted file is on disk.
    FileWritten {
        index: usize,
        output: PathBuf,
        source_size: Dimensions,
        frame: CropFrame,
        output_size: Dimensions,
    },
}

/// Result of a completed run.
#[derive(Debug, Default)]
pub struct ProcessSummary {
    /// Output files in the order they were written.
    pub written: Vec<PathBuf>,
}

/// Convert the input directory with the production backend.
pub fn process<F>(config: &RunConfig, on_event: F) -> Result<ProcessSummary, ProcessError>
where
    F: FnMut(&ProcessEvent),
{
    let backend = RustBackend::new();
    process_with_backend(&backend, config, on_event)
}

/// Convert the input directory using a specific backend (allows testing with mock).
pub fn process_with_backend<B, F>(
    backend: &B,
    config: &RunConfig,
    mut on_event: F,
) -> Result<ProcessSummary, ProcessError>
where
    B: ImageBackend,
    F: FnMut(&ProcessEvent),
{
    tracing::info!(
        input = %config.input_dir.display(),
        output = %config.output_dir.display(),
        target_height = config.target.height,
        ratio = %config.target.ratio,
        format = %config.output_format,
        "starting run"
    );

    fs::create_dir_all(&config.output_dir).map_err(|source| ProcessError::CreateDir {
        path: config.output_dir.clone(),
        source,
    })?;

    let session = BackendSession::start(backend).map_err(ProcessError::Startup)?;
    let entries = list_entries(&config.input_dir)?;
    let total = entries.len();
    on_event(&ProcessEvent::RunStarted { file_count: total });

    let mut summary = ProcessSummary {
        written: Vec::with_capacity(total),
    };

    for (i, source_path) in entries.into_iter().enumerate() {
        let index = i + 1;
        let raw_name = source_path.file_name().unwrap_or_default();
        let file_name = raw_name.to_string_lossy().into_owned();
        let span = tracing::info_span!("file", name = %file_name);
        let _guard = span.enter();

        on_event(&ProcessEvent::FileStarted {
            index,
            total,
            file_name: file_name.clone(),
        });

        if strip_extension(raw_name, &config.input_extension).is_none() {
            tracing::debug!(
                extension = %config.input_extension,
                "name lacks the input extension; converting anyway"
            );
        }
        let output_path = config.output_dir.join(output_file_name(
            raw_name,
            &config.input_extension,
            config.output_format.extension(),
        ));

        let reframed = reframe_image(
            session.backend(),
            &source_path,
            &config.target,
            config.output_format,
        )
        .map_err(|e| ProcessError::from_stage(e, source_path.clone()))?;

        fs::write(&output_path, &reframed.bytes).map_err(|source| ProcessError::Write {
            path: output_path.clone(),
            source,
        })?;
        tracing::debug!(output = %output_path.display(), bytes = reframed.bytes.len(), "written");

        on_event(&ProcessEvent::FileWritten {
            index,
            output: output_path.clone(),
            source_size: reframed.source,
            frame: reframed.plan.frame,
            output_size: reframed.plan.output,
        });
        summary.written.push(output_path);
    }

    tracing::info!(files = summary.written.len(), "run complete");
    Ok(summary)
}

/// Non-recursive listing of `dir`, sorted by file name.
///
/// Every entry is returned, sub-directories included.
fn list_entries(dir: &Path) -> Result<Vec<PathBuf>, ProcessError> {
    let read_err = |source| ProcessError::ReadDir {
        path: dir.to_path_buf(),
        source,
    };

    let mut entries = fs::read_dir(dir)
        .map_err(read_err)?
        .map(|entry| entry.map(|e| e.path()).map_err(read_err))
        .collect::<Result<Vec<_>, _>>()?;
    entries.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(entries)
}
