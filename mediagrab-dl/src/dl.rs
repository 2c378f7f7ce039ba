//! yt-dlp Python API wrappers.
//!
//! Type-safe bindings to [yt-dlp](https://github.com/yt-dlp/yt-dlp) `YoutubeDL` parameters.
//!
//! ```no_run
//! use mediagrab_dl::{dl::download, format::MediaFormat};
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let (path, info) = download("https://youtube.com/watch?v=example", (&MediaFormat::Mp3).into())?;
//! println!("Downloaded {:?} to {}", info.title, path.display());
//! # Ok(())
//! # }
//! ```

use crate::error::{Error, Result};
use crate::logger::QuietLogger;
use pyo3::ffi::c_str;
use pyo3::prelude::*;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Filename templates using `%(field)s` syntax. Key `default` required.
#[derive(Clone, Debug, Default, IntoPyObject)]
pub struct OutputTemplates(pub Option<HashMap<String, String>>);

impl OutputTemplates {
    /// Create with a single default template.
    pub fn simple(default: String) -> Self {
        Self(Some(HashMap::from([("default".to_string(), default)])))
    }

    /// `<dir>/%(title)s.%(ext)s`
    pub fn title_in(dir: &Path) -> Self {
        let template = dir.join("%(title)s.%(ext)s");
        Self::simple(template.to_string_lossy().to_string())
    }
}

/// Post-download operation: `key` (e.g., `"FFmpegExtractAudio"`), optional codec and quality.
#[derive(Clone, Debug, Default, IntoPyObject)]
pub struct PostProcessor {
    pub key: String,
    pub preferredcodec: Option<String>,
    pub preferredquality: Option<String>,
}

/// yt-dlp download configuration passed to `YoutubeDL(params)`.
///
/// `None` fields are dropped before yt-dlp sees them.
#[derive(Clone, Debug, Default, IntoPyObject)]
pub struct DownloadOptions {
    pub format: Option<String>,
    pub outtmpl: Option<OutputTemplates>,
    pub postprocessors: Option<Vec<PostProcessor>>,
    pub merge_output_format: Option<String>,
    pub ffmpeg_location: Option<String>,
    pub noplaylist: Option<bool>,
    pub quiet: Option<bool>,
    pub no_warnings: Option<bool>,
    pub noprogress: Option<bool>,
    pub logger: Option<QuietLogger>,
}

impl DownloadOptions {
    /// Silence every yt-dlp output channel and stick to a single item.
    pub fn silent() -> Self {
        Self {
            noplaylist: Some(true),
            quiet: Some(true),
            no_warnings: Some(true),
            noprogress: Some(true),
            logger: Some(QuietLogger),
            ..Default::default()
        }
    }
}

/// Essential metadata from yt-dlp info dict.
///
/// The Python side fills every key, using `None` for missing values.
#[derive(Clone, Debug, Default, FromPyObject)]
#[pyo3(from_item_all)]
pub struct DownloadInfo {
    /// Video identifier
    pub id: Option<String>,
    /// Video title
    pub title: Option<String>,
    /// Extension negotiated before postprocessing
    pub ext: Option<String>,
    /// Extractor name (e.g., "Youtube")
    pub extractor_key: Option<String>,
    /// URL to the video webpage
    pub webpage_url: Option<String>,
    /// Length of the video in seconds
    pub duration: Option<f64>,
}

/// Download a single URL.
///
/// Uses `extract_info(url, download=True)` and returns the path from
/// `prepare_filename` (pre-postprocessing extension) with the info dict.
pub fn download(url: &str, opts: DownloadOptions) -> Result<(PathBuf, DownloadInfo)> {
    tracing::debug!(url, ?opts, "invoking yt-dlp");

    Python::attach(|py| {
        let run = || -> PyResult<(PathBuf, DownloadInfo)> {
            let module =
                PyModule::from_code(py, c_str!(include_str!("./dl.py")), c"dl.py", c"dl")?;

            let py_params = opts.into_pyobject(py)?;

            module.getattr("download")?.call1((url, py_params))?.extract()
        };

        run().map_err(|err| Error::from_py(py, err))
    })
}
