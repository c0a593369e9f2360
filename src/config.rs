use std::{fs, path::{Path, PathBuf}};

use serde::Deserialize;

use crate::{error::{AsResult, Result}, factory::LoggerFactory, level::Severity, sink::Stream};

/// Settings shared by every logger a factory creates.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    pub log_path: PathBuf,
    pub level: Severity,
    pub file_level: Severity,
    pub console_level: Severity,
    pub color: bool
}

impl Config {
    pub fn parse(text: &str) -> Result<Config> {
        Ok(toml::from_str(text)?)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Config> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)
            .as_io_err(format!("cannot read {}", path.display()))?;

        Config::parse(&text)
    }

    pub fn factory<S: Stream>(&self) -> LoggerFactory<S> {
        LoggerFactory::with_stream(self.clone())
    }
}

impl Default for Config {
    fn default() -> Self {
        let mut log_path = PathBuf::from("logs");
        log_path.push("app.log");

        Config {
            log_path,
            level: Severity::Debug,
            file_level: Severity::Debug,
            console_level: Severity::Debug,
            color: true
        }
    }
}
