//! Type-safe Rust bindings to the [yt-dlp](https://github.com/yt-dlp/yt-dlp) Python library,
//! scoped to downloading a single URL into a chosen format.
//!
//! ## Modules
//!
//! - [`dl`] - Core yt-dlp API wrappers
//! - [`format`] - Format presets (mp3, mp4, avi, passthrough)
//! - [`request`] - Download request: output directory, options, reported filename
//! - [`logger`] - Silent logger object handed to yt-dlp
//! - [`error`] - Error type
//!
//! ## Quick Start
//!
//! ```no_run
//! use mediagrab_dl::format::MediaFormat;
//! use mediagrab_dl::request::DownloadRequest;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let done = DownloadRequest::new("https://youtube.com/watch?v=example", MediaFormat::Mp3)
//!     .with_output_dir("music")
//!     .execute()?;
//! println!("{} -> {}", done.title, done.filename.display());
//! # Ok(())
//! # }
//! ```
//!
//! **Custom configuration**:
//! ```no_run
//! use mediagrab_dl::dl::{download, DownloadOptions, OutputTemplates, PostProcessor};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let opts = DownloadOptions {
//!     format: Some("bestaudio".to_string()),
//!     outtmpl: Some(OutputTemplates::simple("%(uploader)s/%(title)s.%(ext)s".to_string())),
//!     postprocessors: Some(vec![PostProcessor {
//!         key: "FFmpegExtractAudio".to_string(),
//!         preferredcodec: Some("opus".to_string()),
//!         preferredquality: None,
//!     }]),
//!     ..DownloadOptions::silent()
//! };
//!
//! download("https://youtube.com/watch?v=example", opts)?;
//! # Ok(())
//! # }
//! ```

pub mod dl;
pub mod error;
pub mod format;
pub mod logger;
pub mod request;

pub use error::{Error, Result};
