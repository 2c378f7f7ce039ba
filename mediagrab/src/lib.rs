//! mediagrab: download one media URL through yt-dlp and report the result as JSON.

pub mod cli;
pub mod report;
