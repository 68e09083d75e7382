use std::fs::File;
use std::path::PathBuf;
use clap_verbosity_flag::{LogLevel, Verbosity};
use tracing_subscriber::fmt::Subscriber as FmtSubscriber;
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_log::AsTrace;

/// Installs the global subscriber, writing to `path` when given, otherwise to stderr.
///
/// Stdout is left to the command's own output.
pub fn configure_tracing<IL: LogLevel>(path: Option<PathBuf>, verbosity: Verbosity<IL>) -> anyhow::Result<()> {

    let max_level = verbosity.log_level_filter().as_trace();

    match path {
        Some(path) => {
            let trace_file: File = File::create(path)?;

            let file_subscriber = FmtSubscriber::builder()
                .with_writer(trace_file)
                .with_ansi(false)
                .with_max_level(max_level)
                .finish();

            tracing::subscriber::set_global_default(file_subscriber)?;
        },
        _ => {
            let stderr_subscriber = FmtSubscriber::builder()
                .with_writer(std::io::stderr)
                .with_level(false)
                .with_line_number(false)
                .with_span_events(FmtSpan::NONE)
                .without_time()
                .with_max_level(max_level)
                .finish();

            tracing::subscriber::set_global_default(stderr_subscriber)?;
        }
    };

    Ok(())
}
