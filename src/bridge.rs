//! Routes `log` crate macros (`log::info!` and friends) into a [`Logger`].

use std::sync::Arc;

use log::{Log, Metadata, Record};

use crate::{error::{config_err, Result}, level::Severity, logger::Logger};

pub struct Bridge {
    logger: Arc<Logger>
}

impl Bridge {
    pub fn new(logger: Arc<Logger>) -> Bridge {
        Bridge { logger }
    }
}

impl Log for Bridge {
    fn enabled(&self, metadata: &Metadata) -> bool {
        self.logger.enabled(Severity::from(metadata.level()))
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            self.logger.log(Severity::from(record.level()), record.args());
        }
    }

    fn flush(&self) {
        self.logger.flush();
    }
}

/// Installs `logger` as the process-wide `log` backend.
///
/// Fails if another backend was installed first.
pub fn install(logger: Arc<Logger>) -> Result<()> {
    let max_level = logger.level().level_filter();

    log::set_boxed_logger(Box::new(Bridge::new(logger))).map_err(config_err)?;
    log::set_max_level(max_level);

    Ok(())
}
