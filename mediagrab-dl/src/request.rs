//! One download request: output directory, yt-dlp options and the reported filename.

use crate::dl::{DownloadInfo, DownloadOptions, OutputTemplates, download};
use crate::error::{Error, Result};
use crate::format::MediaFormat;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Directory used when none is given, relative to the working directory.
pub const DEFAULT_OUTPUT_DIR: &str = "downloads";

/// Title reported when the source metadata has none.
pub const UNKNOWN_TITLE: &str = "Unknown Title";

/// Download one URL into `output_dir` as `format`.
#[derive(Clone, Debug)]
pub struct DownloadRequest {
    pub url: String,
    pub format: MediaFormat,
    pub output_dir: PathBuf,
    /// FFmpeg binary or its directory, when not on `PATH`
    pub ffmpeg_location: Option<PathBuf>,
}

/// Outcome of a successful download.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Downloaded {
    pub filename: PathBuf,
    pub title: String,
}

impl DownloadRequest {
    pub fn new(url: impl Into<String>, format: MediaFormat) -> Self {
        Self {
            url: url.into(),
            format,
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            ffmpeg_location: None,
        }
    }

    pub fn with_output_dir(self, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
            ..self
        }
    }

    pub fn with_ffmpeg_location(self, location: impl Into<PathBuf>) -> Self {
        Self {
            ffmpeg_location: Some(location.into()),
            ..self
        }
    }

    /// yt-dlp parameters: format preset, `<output_dir>/%(title)s.%(ext)s`, FFmpeg location.
    pub fn options(&self) -> DownloadOptions {
        DownloadOptions {
            outtmpl: Some(OutputTemplates::title_in(&self.output_dir)),
            ffmpeg_location: self
                .ffmpeg_location
                .as_deref()
                .map(|path| path.to_string_lossy().to_string()),
            ..DownloadOptions::from(&self.format)
        }
    }

    /// Create the output directory, then download and postprocess synchronously.
    pub fn execute(&self) -> Result<Downloaded> {
        tracing::info!(url = self.url, format = %self.format, "downloading");

        std::fs::create_dir_all(&self.output_dir).map_err(|source| Error::OutputDir {
            path: self.output_dir.clone(),
            source,
        })?;

        let (prepared, info) = download(&self.url, self.options())?;

        let downloaded = self.resolve(&prepared, info);

        tracing::info!(
            filename = %downloaded.filename.display(),
            title = downloaded.title,
            "download finished"
        );

        Ok(downloaded)
    }

    /// Swap the pre-postprocessing extension for the requested one and default the title.
    fn resolve(&self, prepared: &Path, info: DownloadInfo) -> Downloaded {
        let mut filename: OsString = prepared.with_extension("").into();
        filename.push(".");
        filename.push(self.format.extension());

        Downloaded {
            filename: filename.into(),
            title: info.title.unwrap_or_else(|| UNKNOWN_TITLE.to_string()),
        }
    }
}
