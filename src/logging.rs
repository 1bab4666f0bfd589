//! Logging setup for the binary.
//!
//! `log4rs.yml` in the working directory wins; without it a built-in
//! stderr appender at `warn` is used so stdout stays clean.

use log::LevelFilter;
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::config::{Appender, Config, Root};
use log4rs::encode::pattern::PatternEncoder;
use std::error::Error;

/// Config file looked up in the working directory.
pub const LOG_CONFIG_FILE: &str = "log4rs.yml";

const PATTERN: &str = "{d(%H:%M:%S)} {h({l})} {t} - {m}{n}";

/// Stderr-only config used when no config file is found.
pub fn default_config(level: LevelFilter) -> Result<Config, Box<dyn Error>> {
    let stderr = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new(PATTERN)))
        .build();

    let config = Config::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr)))
        .build(Root::builder().appender("stderr").build(level))?;
    Ok(config)
}

/// Initialise logging from the config file, falling back to [`default_config`].
pub fn init() -> Result<(), Box<dyn Error>> {
    if log4rs::init_file(LOG_CONFIG_FILE, Default::default()).is_ok() {
        return Ok(());
    }
    log4rs::init_config(default_config(LevelFilter::Warn)?)?;
    log::debug!("{LOG_CONFIG_FILE} not found, using built-in logging config");
    Ok(())
}
