pub mod output;

use flexi_logger::{Logger, LoggerHandle};

/// Start logging to stderr. `RUST_LOG` wins over the verbosity flag.
pub fn init_logging(verbosity: u8) -> anyhow::Result<LoggerHandle> {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let handle = Logger::try_with_env_or_str(level)?
        .format(flexi_logger::default_format)
        .start()?;
    Ok(handle)
}
