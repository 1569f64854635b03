// SPDX-License-Identifier: PMPL-1.0-or-later

//! Logger setup: `log` records go to stderr through a `fern` dispatch

use fern::Dispatch;
use log::LevelFilter;

/// Level for a `-v` count: warnings by default, info with `-v`, debug above.
pub fn level_for(verbosity: u8, quiet: bool) -> LevelFilter {
    if quiet {
        return LevelFilter::Error;
    }
    match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    }
}

pub fn setup_logger(level: LevelFilter) {
    let verbose = level >= LevelFilter::Debug;
    let logger = Dispatch::new()
        .format(move |out, message, record| {
            let (color, reset) = match record.level() {
                log::Level::Error => ("\x1b[31m", "\x1b[0m"),
                log::Level::Warn => ("\x1b[33m", "\x1b[0m"),
                log::Level::Info | log::Level::Debug | log::Level::Trace => ("", ""),
            };
            if verbose {
                out.finish(format_args!(
                    "{}{} ({}): {}{}",
                    color,
                    record.level(),
                    record.target(),
                    message,
                    reset
                ))
            } else {
                out.finish(format_args!("{}{}: {}{}", color, record.level(), message, reset))
            }
        })
        .level(level)
        .chain(std::io::stderr());

    if let Err(e) = logger.apply() {
        eprintln!("Failed to apply logger: {:?}", e);
    }
}
