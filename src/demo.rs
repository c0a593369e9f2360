//! What the binary does when run without a subcommand.

use anyhow::{anyhow, Context, Result};

use crate::{app_logger, factory::LoggerFactory, sink::Stream};

/// Emits one sample record per severity, then logs a failed division
/// through [`Logger::exception`](crate::Logger::exception).
pub fn run<S: Stream>(factory: &LoggerFactory<S>) -> Result<()> {
    let logger = app_logger!(factory)?;

    logger.debug("debug message");
    logger.info("info message");
    logger.warning("warning message");
    logger.error("error message");
    logger.critical("critical message");

    match divide(1, 0) {
        Ok(quotient) => logger.info(format!("quotient: {}", quotient)),
        Err(err) => logger.exception("unknown error", &err)
    }

    Ok(())
}

pub fn divide(dividend: i64, divisor: i64) -> Result<i64> {
    dividend
        .checked_div(divisor)
        .ok_or_else(|| anyhow!("division by zero"))
        .with_context(|| format!("cannot divide {} by {}", dividend, divisor))
}
