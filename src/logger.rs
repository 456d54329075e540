//! Debug error logging.

use std::ffi::OsStr;
use std::io::Write;

use ansi_term::{Colour, ANSIString};
use log::LevelFilter;


/// Sets the internal logger, changing the log level based on the value of an
/// environment variable, or of a verbosity flag.
pub fn configure<T: AsRef<OsStr>>(ev: Option<T>) {
    let ev = match ev {
        Some(v)  => v,
        None     => return,
    };

    let env_var = ev.as_ref();
    if env_var.is_empty() {
        return;
    }

    let level = if env_var == "trace" { LevelFilter::Trace }
                                 else { LevelFilter::Debug };

    let result = env_logger::Builder::new()
        .filter_level(level)
        .format(|buf, record| {
            writeln!(buf, "{} {} {}",
                     level_message(record.level()),
                     Colour::Fixed(244).paint(record.target()),
                     record.args())
        })
        .try_init();

    // a logger set from the environment takes priority over -v
    if result.is_err() {
        log::debug!("Logger already configured");
    }
}

fn level_message(level: log::Level) -> ANSIString<'static> {
    match level {
        log::Level::Error => Colour::Red.paint("ERROR"),
        log::Level::Warn  => Colour::Yellow.paint("WARN"),
        log::Level::Info  => Colour::Cyan.paint("INFO"),
        log::Level::Debug => Colour::Blue.paint("DEBUG"),
        log::Level::Trace => Colour::Fixed(245).paint("TRACE"),
    }
}
