//! Target format presets.
//!
//! **Formats:** [`MediaFormat::Mp3`] (audio only, 192 kbps), [`MediaFormat::Mp4`] and
//! [`MediaFormat::Avi`] (best video merged with best audio), anything else is
//! [`MediaFormat::Other`] and left to yt-dlp's default format selection.
//!
//! ```
//! use mediagrab_dl::dl::DownloadOptions;
//! use mediagrab_dl::format::MediaFormat;
//!
//! let format: MediaFormat = "MP3".parse().unwrap();
//! let opts = DownloadOptions::from(&format);
//! assert_eq!(opts.format.as_deref(), Some("bestaudio/best"));
//! ```

use crate::dl::{DownloadOptions, PostProcessor};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// MP3 bitrate target handed to `FFmpegExtractAudio`.
pub const MP3_QUALITY: &str = "192";

/// Requested output container/codec.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MediaFormat {
    /// Audio only, transcoded to MP3
    Mp3,
    /// Video + audio merged into MP4
    Mp4,
    /// Video + audio merged into AVI
    Avi,
    /// Unrecognised keyword (lowercased), used only as the final extension
    Other(String),
}

impl MediaFormat {
    /// Extension forced onto the reported filename.
    pub fn extension(&self) -> &str {
        match self {
            Self::Mp3 => "mp3",
            Self::Mp4 => "mp4",
            Self::Avi => "avi",
            Self::Other(ext) => ext,
        }
    }
}

impl From<&str> for MediaFormat {
    /// Case-insensitive; never fails.
    fn from(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "mp3" => Self::Mp3,
            "mp4" => Self::Mp4,
            "avi" => Self::Avi,
            other => Self::Other(other.to_string()),
        }
    }
}

impl FromStr for MediaFormat {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(s.into())
    }
}

impl fmt::Display for MediaFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

impl From<&MediaFormat> for DownloadOptions {
    /// Silent single-item preset plus format selection and postprocessing for `format`.
    fn from(format: &MediaFormat) -> Self {
        let opts = Self::silent();

        match format {
            MediaFormat::Mp3 => Self {
                format: Some("bestaudio/best".to_string()),
                postprocessors: Some(vec![PostProcessor {
                    key: "FFmpegExtractAudio".to_string(),
                    preferredcodec: Some("mp3".to_string()),
                    preferredquality: Some(MP3_QUALITY.to_string()),
                }]),
                ..opts
            },
            MediaFormat::Mp4 | MediaFormat::Avi => Self {
                format: Some("bestvideo+bestaudio/best".to_string()),
                merge_output_format: Some(format.extension().to_string()),
                ..opts
            },
            MediaFormat::Other(_) => opts,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(s: &str) -> MediaFormat {
        s.parse().unwrap()
    }

    #[test]
    fn parses_case_insensitively() {
        assert_eq!(parse("mp3"), MediaFormat::Mp3);
        assert_eq!(parse("MP4"), MediaFormat::Mp4);
        assert_eq!(parse("Avi"), MediaFormat::Avi);
    }

    #[test]
    fn unknown_keyword_is_kept_lowercased() {
        let format = parse("MKV");
        assert_eq!(format, MediaFormat::Other("mkv".to_string()));
        assert_eq!(format.extension(), "mkv");
    }

    #[test]
    fn mp3_preset() {
        let opts = DownloadOptions::from(&MediaFormat::Mp3);

        assert_eq!(opts.format.as_deref(), Some("bestaudio/best"));
        assert!(opts.merge_output_format.is_none());

        match opts.postprocessors.as_deref() {
            Some(
                [
                    PostProcessor {
                        key,
                        preferredcodec: Some(codec),
                        preferredquality: Some(quality),
                    },
                ],
            ) if key == "FFmpegExtractAudio" && codec == "mp3" && quality == "192" => {}
            other => panic!("unexpected postprocessors: {other:?}"),
        }
    }

    #[test]
    fn video_presets_merge_into_requested_container() {
        for (format, container) in [(MediaFormat::Mp4, "mp4"), (MediaFormat::Avi, "avi")] {
            let opts = DownloadOptions::from(&format);

            assert_eq!(opts.format.as_deref(), Some("bestvideo+bestaudio/best"));
            assert_eq!(opts.merge_output_format.as_deref(), Some(container));
            assert!(opts.postprocessors.is_none());
        }
    }

    #[test]
    fn other_format_adds_nothing() {
        let opts = DownloadOptions::from(&MediaFormat::Other("webm".to_string()));

        assert!(opts.format.is_none());
        assert!(opts.postprocessors.is_none());
        assert!(opts.merge_output_format.is_none());
    }

    #[test]
    fn every_preset_is_silent_single_item() {
        for format in ["mp3", "mp4", "avi", "flac"].map(parse) {
            let opts = DownloadOptions::from(&format);

            assert!(
                matches!(
                    opts,
                    DownloadOptions {
                        noplaylist: Some(true),
                        quiet: Some(true),
                        no_warnings: Some(true),
                        noprogress: Some(true),
                        logger: Some(_),
                        ..
                    }
                ),
                "{format} preset is not silent: {opts:?}"
            );
        }
    }
}
