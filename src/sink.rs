use std::{fs::File, io::{self, Write}, path::Path, sync::{Mutex, MutexGuard, PoisonError}};

use crate::{
    error::{AsResult, Result},
    format::{ConsoleFormat, FileFormat, Record},
    level::Severity
};

/// Where console lines go.
pub trait Stream {
    fn open() -> Box<dyn Write + Send>;
}

pub struct Stderr;

impl Stream for Stderr {
    fn open() -> Box<dyn Write + Send> {
        Box::new(io::stderr())
    }
}

/// An output destination for records.
pub trait Sink: Send + Sync {
    fn threshold(&self) -> Severity;

    fn write_record(&self, record: &Record) -> io::Result<()>;

    fn flush(&self) -> io::Result<()>;

    fn emit(&self, record: &Record) -> io::Result<()> {
        if record.severity >= self.threshold() {
            self.write_record(record)
        } else {
            Ok(())
        }
    }
}

pub(crate) fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

pub struct FileSink {
    level: Severity,
    format: &'static FileFormat,
    file: Mutex<File>
}

impl FileSink {
    /// Opens `path`, discarding whatever it held before.
    pub fn create<P: AsRef<Path>>(path: P, level: Severity, format: &'static FileFormat) -> Result<FileSink> {
        let path = path.as_ref();
        let file = File::create(path)
            .as_io_err(format!("cannot open {}", path.display()))?;

        Ok(FileSink {
            level,
            format,
            file: Mutex::new(file)
        })
    }
}

impl Sink for FileSink {
    fn threshold(&self) -> Severity {
        self.level
    }

    fn write_record(&self, record: &Record) -> io::Result<()> {
        let line = self.format.render(record);
        let mut file = lock(&self.file);

        writeln!(file, "{}", line)?;
        file.flush()
    }

    fn flush(&self) -> io::Result<()> {
        lock(&self.file).flush()
    }
}

pub struct ConsoleSink {
    level: Severity,
    format: &'static ConsoleFormat,
    color: bool,
    out: Mutex<Box<dyn Write + Send>>
}

impl ConsoleSink {
    pub fn open<S: Stream>(level: Severity, format: &'static ConsoleFormat, color: bool) -> ConsoleSink {
        ConsoleSink {
            level,
            format,
            color,
            out: Mutex::new(S::open())
        }
    }
}

impl Sink for ConsoleSink {
    fn threshold(&self) -> Severity {
        self.level
    }

    fn write_record(&self, record: &Record) -> io::Result<()> {
        let line = self.format.render(record, self.color);
        let mut out = lock(&self.out);

        writeln!(out, "{}", line)?;
        out.flush()
    }

    fn flush(&self) -> io::Result<()> {
        lock(&self.out).flush()
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use crate::format::FORMATS;

    use super::*;

    #[test]
    fn file_sink_truncates_on_create() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("app.log");
        fs::write(&path, "stale line\n").unwrap();

        let sink = FileSink::create(&path, Severity::Debug, &FORMATS.file).unwrap();
        sink.emit(&Record::new(Severity::Info, "sink", "fresh")).unwrap();

        let text = fs::read_to_string(&path).unwrap();
        assert!(!text.contains("stale line"));
        assert!(text.ends_with(" - sink - fresh\n"));
    }

    #[test]
    fn file_sink_honours_threshold() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("app.log");

        let sink = FileSink::create(&path, Severity::Error, &FORMATS.file).unwrap();
        sink.emit(&Record::new(Severity::Warning, "sink", "skipped")).unwrap();
        sink.emit(&Record::new(Severity::Critical, "sink", "kept")).unwrap();

        let text = fs::read_to_string(&path).unwrap();
        assert_eq!(1, text.lines().count());
        assert!(text.starts_with("CRITICAL:    "));
    }

    #[test]
    fn file_sink_needs_existing_dir() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("app.log");

        assert!(FileSink::create(&path, Severity::Debug, &FORMATS.file).is_err());
    }
}
