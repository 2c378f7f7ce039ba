//! mediagrab CLI - single-URL media download with a JSON result on stdout

use mediagrab::cli::run;
use tracing_subscriber::EnvFilter;

fn main() {
    let (non_blocking, _guard) = tracing_appender::non_blocking(std::io::stderr());

    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // Exit status stays 0: failures are reported in the envelope
    println!("{}", run(std::env::args_os()));
}
