use std::{collections::HashMap, marker::PhantomData, sync::{Arc, Mutex}};

use crate::{
    config::Config,
    error::{config_err, Result},
    format::{Formats, FORMATS},
    logger::Logger,
    sink::{lock, ConsoleSink, FileSink, Sink, Stderr, Stream}
};

/// Creates a logger named after the calling module, or after `$name`.
#[macro_export]
macro_rules! app_logger {
    ( $factory:expr ) => {
        $factory.create(module_path!())
    };

    ( $factory:expr , $name:expr ) => {
        $factory.create($name)
    };
}

/// Builds named loggers that write to the log file and the console.
///
/// Every logger from one factory shares a single file sink, opened (and
/// truncated) when the first logger is created. Asking for a name twice
/// returns the logger built the first time.
pub struct LoggerFactory<S: Stream = Stderr> {
    config: Config,
    formats: &'static Formats,
    file: Mutex<Option<Arc<dyn Sink>>>,
    registry: Mutex<HashMap<String, Arc<Logger>>>,
    _phantom: PhantomData<fn() -> S>
}

impl LoggerFactory<Stderr> {
    pub fn new(config: Config) -> LoggerFactory<Stderr> {
        LoggerFactory::with_stream(config)
    }
}

impl <S: Stream> LoggerFactory<S> {
    pub fn with_stream(config: Config) -> LoggerFactory<S> {
        LoggerFactory::with_formats(config, &FORMATS)
    }

    pub fn with_formats(config: Config, formats: &'static Formats) -> LoggerFactory<S> {
        LoggerFactory {
            config,
            formats,
            file: Mutex::new(None),
            registry: Mutex::new(HashMap::new()),
            _phantom: PhantomData::default()
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn create<N: ToString>(&self, log_name: N) -> Result<Arc<Logger>> {
        let name = log_name.to_string();

        if name.is_empty() {
            return Err(config_err("logger name must not be empty"));
        }

        let mut registry = lock(&self.registry);

        if let Some(logger) = registry.get(&name) {
            return Ok(Arc::clone(logger));
        }

        let console: Arc<dyn Sink> = Arc::new(ConsoleSink::open::<S>(
            self.config.console_level,
            &self.formats.console,
            self.config.color
        ));
        let sinks = vec![self.file_sink()?, console];
        let logger = Arc::new(Logger::new(name.clone(), self.config.level, sinks));

        registry.insert(name, Arc::clone(&logger));

        Ok(logger)
    }

    pub fn get(&self, log_name: &str) -> Option<Arc<Logger>> {
        lock(&self.registry).get(log_name).cloned()
    }

    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = lock(&self.registry).keys().cloned().collect();
        names.sort();
        names
    }

    fn file_sink(&self) -> Result<Arc<dyn Sink>> {
        let mut slot = lock(&self.file);

        if let Some(sink) = slot.as_ref() {
            return Ok(Arc::clone(sink));
        }

        let sink: Arc<dyn Sink> = Arc::new(FileSink::create(
            &self.config.log_path,
            self.config.file_level,
            &self.formats.file
        )?);
        *slot = Some(Arc::clone(&sink));

        Ok(sink)
    }
}

#[cfg(test)]
mod tests {
    use std::{fs, io::{self, Write}, path::Path};

    use crate::error::ErrorKind;

    use super::*;

    struct Discard;

    impl Stream for Discard {
        fn open() -> Box<dyn Write + Send> {
            Box::new(io::sink())
        }
    }

    fn factory(dir: &Path) -> LoggerFactory<Discard> {
        let config = Config {
            log_path: dir.join("app.log"),
            ..Config::default()
        };

        config.factory()
    }

    #[test]
    fn same_name_same_logger() {
        let dir = tempfile::tempdir().unwrap();
        let factory = factory(dir.path());

        let first = factory.create("test").unwrap();
        let second = factory.create("test").unwrap();
        second.info("once");

        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(1, fs::read_to_string(dir.path().join("app.log")).unwrap().lines().count());
    }

    #[test]
    fn loggers_share_the_file() {
        let dir = tempfile::tempdir().unwrap();
        let factory = factory(dir.path());

        factory.create("first").unwrap().info("one");
        factory.create("second").unwrap().info("two");

        let text = fs::read_to_string(dir.path().join("app.log")).unwrap();
        assert!(text.contains(" - first - one"));
        assert!(text.contains(" - second - two"));
        assert_eq!(vec!["first", "second"], factory.names());
    }

    #[test]
    fn empty_name_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let err = factory(dir.path()).create("").unwrap_err();

        assert_eq!(ErrorKind::Config, err.kind());
    }

    #[test]
    fn missing_dir_registers_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let factory = factory(&dir.path().join("logs"));

        let err = factory.create("test").unwrap_err();

        assert_eq!(ErrorKind::IO, err.kind());
        assert!(err.message().contains(&factory.config().log_path.display().to_string()));
        assert!(factory.get("test").is_none());
    }

    #[test]
    fn macro_names_after_module() {
        let dir = tempfile::tempdir().unwrap();
        let factory = factory(dir.path());

        let logger = app_logger!(factory).unwrap();

        assert_eq!("radhe_log::factory::tests", logger.name());
    }
}
