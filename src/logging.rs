//! Logger setup for the command-line binary.
//!
//! The library only talks to the `log` facade; the binary installs
//! `env_logger` with a compact `target [LEVEL] message` line format.

use log::LevelFilter;
use std::io::Write;

/// Map the `-v` count onto a level: warnings by default, then info, then debug.
pub fn level_for_verbosity(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    }
}

/// Install the global logger. `RUST_LOG` still overrides `base_level`.
pub fn configure_logger(base_level: LevelFilter) {
    env_logger::Builder::new()
        .format(|buf, record| {
            writeln!(
                buf,
                "{} [{}] {}",
                record.target(),
                record.level(),
                record.args(),
            )
        })
        .filter_level(base_level)
        .parse_default_env()
        .init();
}
