//! camera-config - Main Entry Point
//!
//! Interactive editor for the camera configuration of a reef-pi controller.

use camera_config::app::application::run_app;
use camera_config::app::cli::Cli;
use camera_config::constants::LOG_FILE_PREFIX;
use camera_config::helpers::{get_or_create_data_dir, is_development};
use clap::Parser;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let _guard = init_tracing(cli.log_stderr)?;

    tracing::info!("Starting camera-config...");

    run_app(cli)?;
    Ok(())
}

/// Initialize tracing. stdout belongs to the editor, so logs go to a daily
/// rolling file unless `to_stderr` is set.
fn init_tracing(to_stderr: bool) -> anyhow::Result<Option<WorkerGuard>> {
    let level = if is_development() {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    let filter = EnvFilter::from_default_env().add_directive(level.into());

    if to_stderr {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
        return Ok(None);
    }

    let log_dir = get_or_create_data_dir()?;
    let appender = tracing_appender::rolling::daily(log_dir, LOG_FILE_PREFIX);
    let (writer, guard) = tracing_appender::non_blocking(appender);
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .init();

    Ok(Some(guard))
}
