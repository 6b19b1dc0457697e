use crate::config::TelemetryConfig;
use color_eyre::Result;
use std::fs::create_dir_all;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Install the global subscriber writing to `config.log_dir/config.log_file`.
///
/// # Errors
///
/// Fails if the log directory or file cannot be created, the filter does not
/// parse, or a global subscriber is already installed.
pub fn setup_logger(config: &TelemetryConfig) -> Result<()> {
    create_dir_all(&config.log_dir)?;

    let rotation = if cfg!(debug_assertions) {
        Rotation::DAILY
    } else {
        Rotation::NEVER
    };

    let logfile = RollingFileAppender::builder()
        .rotation(rotation)
        .filename_prefix(config.log_file.as_str())
        .build(&config.log_dir)?;

    let filter = EnvFilter::try_new(&config.filter)?;

    #[cfg(feature = "bunyan")]
    {
        use tracing_bunyan_formatter::{BunyanFormattingLayer, JsonStorageLayer};

        let formatter = BunyanFormattingLayer::new(env!("CARGO_PKG_NAME").into(), logfile);
        tracing_subscriber::registry()
            .with(filter)
            .with(JsonStorageLayer)
            .with(formatter)
            .try_init()?;
    }

    #[cfg(not(feature = "bunyan"))]
    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(logfile)
                .with_ansi(false),
        )
        .try_init()?;

    Ok(())
}
