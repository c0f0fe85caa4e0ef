use std::io::Write;

use env_logger::{Env, WriteStyle};
use log::LevelFilter;

/// Name of the environment variable that overrides the default `info` filter
pub const LOG_ENV: &str = "KART_LOG";

/// Installs the crate's logger, returning an error if a logger is already set
pub fn try_init() -> Result<(), log::SetLoggerError> {
    env_logger::builder()
        .format(|buf, record| writeln!(buf, "[KART | {}] {}", record.level(), record.args()))
        .write_style(WriteStyle::Always)
        .filter(None, LevelFilter::Info)
        .parse_env(Env::new().filter(LOG_ENV))
        .try_init()
}
