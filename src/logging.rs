//! File logging. The terminal belongs to the game screen, so records go to a
//! log file through log4rs.

use std::path::Path;

use log::LevelFilter;
use log4rs::{
    append::file::FileAppender,
    config::{Appender, Config, Root},
    encode::pattern::PatternEncoder,
    filter::threshold::ThresholdFilter,
};

use crate::error::{Error, Result};

pub fn init_log(level: LevelFilter, file_path: &Path) -> Result<()> {
    if level == LevelFilter::Off {
        return Ok(());
    }

    let logfile = FileAppender::builder()
        .encoder(Box::new(PatternEncoder::new(
            "{d(%Y-%m-%d %H:%M:%S)} {l} {t} {m}{n}",
        )))
        .build(file_path)?;

    let config = Config::builder()
        .appender(
            Appender::builder()
                .filter(Box::new(ThresholdFilter::new(level)))
                .build("logfile", Box::new(logfile)),
        )
        .build(Root::builder().appender("logfile").build(level))
        .map_err(|e| Error::Log(e.to_string()))?;

    log4rs::init_config(config).map_err(|e| Error::Log(e.to_string()))?;
    Ok(())
}
