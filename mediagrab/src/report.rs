//! JSON result envelope printed on stdout.
//!
//! ```json
//! {"success": true, "filename": "downloads/Me at the zoo.mp3", "title": "Me at the zoo"}
//! {"success": false, "error": "Usage: mediagrab <url> <format>"}
//! ```

use mediagrab_dl::request::Downloaded;
use serde::ser::{Serialize, SerializeMap, Serializer};
use std::fmt;

/// Outcome of one invocation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DownloadResult {
    Success { filename: String, title: String },
    Failure { error: String },
}

impl DownloadResult {
    /// Wrong argument count.
    pub fn usage(program: &str) -> Self {
        Self::Failure {
            error: format!("Usage: {program} <url> <format>"),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }
}

impl From<Downloaded> for DownloadResult {
    fn from(done: Downloaded) -> Self {
        Self::Success {
            filename: done.filename.to_string_lossy().to_string(),
            title: done.title,
        }
    }
}

impl From<eyre::Result<Downloaded>> for DownloadResult {
    fn from(result: eyre::Result<Downloaded>) -> Self {
        match result {
            Ok(done) => done.into(),
            Err(err) => Self::Failure {
                error: err.to_string(),
            },
        }
    }
}

impl Serialize for DownloadResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Success { filename, title } => {
                let mut map = serializer.serialize_map(Some(3))?;
                map.serialize_entry("success", &true)?;
                map.serialize_entry("filename", filename)?;
                map.serialize_entry("title", title)?;
                map.end()
            }
            Self::Failure { error } => {
                let mut map = serializer.serialize_map(Some(2))?;
                map.serialize_entry("success", &false)?;
                map.serialize_entry("error", error)?;
                map.end()
            }
        }
    }
}

impl fmt::Display for DownloadResult {
    /// Single-line JSON.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let line = serde_json::to_string(self).map_err(|_| fmt::Error)?;
        f.write_str(&line)
    }
}
