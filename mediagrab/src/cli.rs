//! CLI argument definitions using clap.

use crate::report::DownloadResult;
use clap::Parser;
use eyre::Result;
use mediagrab_dl::format::MediaFormat;
use mediagrab_dl::request::{DownloadRequest, Downloaded};
use std::ffi::OsString;
use std::path::Path;

const PROGRAM: &str = "mediagrab";

/// Exactly two positionals, no flags: anything else is a usage error.
#[derive(Debug, Parser)]
#[command(name = "mediagrab")]
#[command(about = "Download one media URL and print the result as JSON")]
#[command(disable_help_flag = true, disable_version_flag = true)]
pub struct Cli {
    /// Source URL
    #[arg(allow_hyphen_values = true)]
    pub url: String,

    /// Target format: mp3, mp4, avi, or any extension passed through as-is
    #[arg(allow_hyphen_values = true)]
    pub format: String,
}

impl From<Cli> for DownloadRequest {
    fn from(cli: Cli) -> Self {
        DownloadRequest::new(cli.url, MediaFormat::from(cli.format.as_str()))
    }
}

/// Parse raw arguments (program name first) and run the download.
///
/// Never fails: every problem ends up in the returned envelope.
pub fn run<I, T>(args: I) -> DownloadResult
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let args: Vec<OsString> = args.into_iter().map(Into::into).collect();
    let program = program_name(&args);

    if args.len() != 3 {
        tracing::debug!(count = args.len().saturating_sub(1), "wrong argument count");
        return DownloadResult::usage(&program);
    }

    match Cli::try_parse_from(&args) {
        Ok(cli) => run_cli(cli).into(),
        Err(err) => {
            tracing::debug!(error = %err, "rejected arguments");
            DownloadResult::usage(&program)
        }
    }
}

/// Execute parsed arguments - separated for testing.
pub fn run_cli(cli: Cli) -> Result<Downloaded> {
    tracing::debug!(?cli, "parsed arguments");

    let request = DownloadRequest::from(cli);
    Ok(request.execute()?)
}

/// File name of argv[0], or the default binary name.
fn program_name(args: &[OsString]) -> String {
    args.first()
        .and_then(|arg0| Path::new(arg0).file_name())
        .map(|name| name.to_string_lossy().to_string())
        .unwrap_or_else(|| PROGRAM.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_url_and_format() {
        let cli = Cli::parse_from(["mediagrab", "https://example.com/video", "MP3"]);

        assert!(matches!(
            &cli,
            Cli { url, format } if url == "https://example.com/video" && format == "MP3"
        ));
    }

    #[test]
    fn accepts_hyphen_values() {
        let cli = Cli::try_parse_from(["mediagrab", "-dQw4w9WgXcQ", "--mp4"]).unwrap();
        assert_eq!(cli.url, "-dQw4w9WgXcQ");
        assert_eq!(cli.format, "--mp4");
    }

    #[test]
    fn converts_into_request_with_defaults() {
        let cli = Cli::parse_from(["mediagrab", "https://example.com/video", "Avi"]);
        let request = DownloadRequest::from(cli);

        assert_eq!(request.url, "https://example.com/video");
        assert_eq!(request.format, MediaFormat::Avi);
        assert_eq!(request.output_dir, Path::new("downloads"));
    }

    #[test]
    fn too_few_arguments_is_usage_error() {
        let result = run(["mediagrab", "https://example.com/video"]);
        assert_eq!(result, DownloadResult::usage("mediagrab"));
    }

    #[test]
    fn too_many_arguments_is_usage_error() {
        let result = run(["mediagrab", "https://example.com/video", "mp3", "extra"]);
        assert_eq!(result, DownloadResult::usage("mediagrab"));
    }

    #[test]
    fn no_arguments_uses_default_program_name() {
        let result = run(Vec::<OsString>::new());
        assert_eq!(result, DownloadResult::usage("mediagrab"));
    }

    #[test]
    fn usage_uses_argv0_file_name() {
        let result = run(["/usr/local/bin/grab"]);
        assert_eq!(result, DownloadResult::usage("grab"));
    }

    #[test]
    fn lone_help_is_usage_error() {
        let result = run(["mediagrab", "--help"]);
        assert_eq!(result, DownloadResult::usage("mediagrab"));
    }
}
