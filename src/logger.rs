use std::fs::OpenOptions;

use thiserror::Error;

use crate::config::AppConfig;

#[derive(Debug, Error)]
pub enum Error {
    #[error("io error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("logger error: {0}")]
    LogError(#[from] log::SetLoggerError),
}

pub fn setup(config: &AppConfig) -> Result<(), Error> {
    let mut logger = fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "{} {:>5} {} -- {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
                record.level(),
                record.target(),
                message
            ))
        })
        .level(log::LevelFilter::Warn)
        .level_for("discovery_dino", config.log_level);

    match &config.log_file {
        Some(path) => {
            let log_file = OpenOptions::new().create(true).append(true).open(path)?;
            logger = logger.chain(log_file);
        }
        None => logger = logger.chain(std::io::stdout()),
    }

    logger.apply()?;
    Ok(())
}
