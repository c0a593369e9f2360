pub mod banner;
pub mod bridge;
pub mod config;
pub mod demo;
pub mod error;
pub mod factory;
pub mod format;
pub mod level;
pub mod logger;
pub mod sink;

pub use config::Config;
pub use error::{Error, ErrorKind, Result};
pub use factory::LoggerFactory;
pub use level::Severity;
pub use logger::Logger;
pub use sink::{Stderr, Stream};
