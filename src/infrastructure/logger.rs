// Logger setup for binaries and tests

use env_logger::Builder;
use log::LevelFilter;
use std::sync::Once;

static INIT: Once = Once::new();

/// Install the env_logger backend once per process
///
/// Defaults to `warn`, with the table modules at `info`; `RUST_LOG`
/// overrides both.
pub fn initialize_logger() {
    INIT.call_once_force(|_| {
        let mut builder = Builder::new();

        builder
            .filter_level(LevelFilter::Warn)
            .filter_module("chaintable", LevelFilter::Info)
            .format_timestamp_millis()
            .parse_default_env();

        // Another logger may already be installed by the embedding program
        let _ = builder.try_init();
    });
}
