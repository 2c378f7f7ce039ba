//! Logger object handed to yt-dlp through the `logger` parameter.
//!
//! yt-dlp sends everything it would print to this object instead of the
//! terminal. Messages end up in [`tracing`] under the `yt_dlp` target at
//! `trace`/`debug` level, so they stay silent unless explicitly enabled
//! (e.g. `RUST_LOG=yt_dlp=debug`) and never touch stdout.

use pyo3::prelude::*;

/// Silent yt-dlp logger: implements the `debug`/`info`/`warning`/`error` protocol.
#[pyclass(module = "mediagrab_dl", frozen)]
#[derive(Clone, Copy, Debug, Default)]
pub struct QuietLogger;

#[pymethods]
impl QuietLogger {
    fn debug(&self, msg: &str) {
        tracing::trace!(target: "yt_dlp", "{msg}");
    }

    fn info(&self, msg: &str) {
        tracing::trace!(target: "yt_dlp", "{msg}");
    }

    fn warning(&self, msg: &str) {
        tracing::debug!(target: "yt_dlp", level = "warning", "{msg}");
    }

    fn error(&self, msg: &str) {
        tracing::debug!(target: "yt_dlp", level = "error", "{msg}");
    }
}
