use std::{cell::RefCell, fs, io::{self, Write}, path::{Path, PathBuf}};

use radhe_log::{Config, LoggerFactory, Stream};

thread_local! {
    static CAPTURED: RefCell<Vec<u8>> = RefCell::new(Vec::new());
}

/// Console stream that keeps what the current thread writes.
pub struct Capture;

struct CaptureWriter;

impl Write for CaptureWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        CAPTURED.with(|c| c.borrow_mut().extend_from_slice(buf));
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Stream for Capture {
    fn open() -> Box<dyn Write + Send> {
        Box::new(CaptureWriter)
    }
}

#[allow(unused)]
pub fn console() -> String {
    CAPTURED.with(|c| String::from_utf8(c.borrow().clone()).unwrap())
}

#[allow(unused)]
pub fn log_file(dir: &Path) -> PathBuf {
    dir.join("logs").join("app.log")
}

#[allow(unused)]
pub fn file_text(dir: &Path) -> String {
    fs::read_to_string(log_file(dir)).unwrap()
}

/// A factory writing to `<dir>/logs/app.log`, creating `logs/` first.
#[allow(unused)]
pub fn factory_in(dir: &Path, config: Config) -> LoggerFactory<Capture> {
    fs::create_dir_all(dir.join("logs")).unwrap();

    Config {
        log_path: log_file(dir),
        ..config
    }.factory()
}
