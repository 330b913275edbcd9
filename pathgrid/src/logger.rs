//! Logging setup for the `pathgrid` binary, on top of `env_logger`.

use std::io::Write;

use env_logger::Builder;
use log::{LevelFilter, SetLoggerError};

fn builder(level: LevelFilter) -> Builder {
    let mut builder = Builder::new();
    builder
        .filter_level(level)
        .format(|buf, record| {
            writeln!(
                buf,
                "[{}] {} - {}",
                record.level(),
                record.target(),
                record.args()
            )
        });
    builder
}

/// Install the global logger at `level`. `RUST_LOG`, when set, refines it.
///
/// Fails if another logger was installed first.
pub fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
    let mut builder = builder(level);
    if let Ok(filters) = std::env::var("RUST_LOG") {
        builder.parse_filters(&filters);
    }
    builder.try_init()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_one_logger_can_be_installed() {
        let _ = init(LevelFilter::Warn);
        assert!(init(LevelFilter::Debug).is_err());
    }

    #[test]
    fn builder_keeps_the_configured_level() {
        let logger = builder(LevelFilter::Info).build();
        assert_eq!(logger.filter(), LevelFilter::Info);
    }
}
