//! The two line layouts every logger renders through.
//!
//! File lines look like `LEVEL:    2024/Mar/05 14:07:09 - name - message`.
//! Console lines look like `LEVEL:    [2024/Mar/05 14:07:09,042] - {name} @ message`,
//! with the level and message painted in the severity colour.

use ansi_term::{Colour, Style};
use chrono::{DateTime, Local};
use lazy_static::lazy_static;

use crate::level::Severity;

pub const DATE_FORMAT: &str = "%Y/%b/%d %H:%M:%S";

lazy_static! {
    pub static ref FORMATS: Formats = Formats::default();
}

/// A single emission, captured once and handed to every sink.
#[derive(Debug, Clone)]
pub struct Record<'a> {
    pub severity: Severity,
    pub name: &'a str,
    pub message: &'a str,
    pub time: DateTime<Local>,
    pub detail: Option<&'a str>
}

impl <'a> Record<'a> {
    pub fn new(severity: Severity, name: &'a str, message: &'a str) -> Self {
        Record {
            severity,
            name,
            message,
            time: Local::now(),
            detail: None
        }
    }

    pub fn with_detail(mut self, detail: &'a str) -> Self {
        self.detail = Some(detail);
        self
    }
}

#[derive(Debug)]
pub struct Formats {
    pub file: FileFormat,
    pub console: ConsoleFormat
}

impl Default for Formats {
    fn default() -> Self {
        Formats {
            file: FileFormat { date_format: DATE_FORMAT },
            console: ConsoleFormat {
                date_format: DATE_FORMAT,
                colors: [
                    Colour::Cyan.normal(),
                    Colour::Green.normal(),
                    Colour::Yellow.normal(),
                    Colour::Red.normal(),
                    Colour::Red.bold()
                ],
                // bright black from the 256-colour palette
                msec: Colour::Fixed(8).bold(),
                name: Colour::RGB(235, 9, 220).normal()
            }
        }
    }
}

#[derive(Debug)]
pub struct FileFormat {
    pub date_format: &'static str
}

impl FileFormat {
    pub fn render(&self, record: &Record) -> String {
        let line = format!(
            "{}:    {} - {} - {}",
            record.severity,
            record.time.format(self.date_format),
            record.name,
            record.message
        );

        with_traceback(line, record.detail)
    }
}

#[derive(Debug)]
pub struct ConsoleFormat {
    pub date_format: &'static str,
    /// Indexed by severity, least severe first.
    pub colors: [Style; 5],
    pub msec: Style,
    pub name: Style
}

impl ConsoleFormat {
    pub fn style_for(&self, severity: Severity) -> Style {
        self.colors[severity as usize]
    }

    pub fn render(&self, record: &Record, color: bool) -> String {
        let stamp = record.time.format(self.date_format);
        let msec = format!("{:03}", record.time.timestamp_subsec_millis().min(999));

        let line = if color {
            let style = self.style_for(record.severity);

            format!(
                "{}:    [{},{}] - {{{}}} @ {}",
                style.paint(record.severity.label()),
                stamp,
                self.msec.paint(msec),
                self.name.paint(record.name),
                style.paint(record.message)
            )
        } else {
            format!(
                "{}:    [{},{}] - {{{}}} @ {}",
                record.severity, stamp, msec, record.name, record.message
            )
        };

        with_traceback(line, record.detail)
    }
}

fn with_traceback(mut line: String, detail: Option<&str>) -> String {
    if let Some(detail) = detail {
        line.push_str("\nTraceback:\n");
        line.push_str(detail.trim_end());
    }

    line
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, TimeZone};

    use super::*;

    fn record<'a>(severity: Severity, message: &'a str) -> Record<'a> {
        let time = Local.with_ymd_and_hms(2024, 3, 5, 14, 7, 9).unwrap() + Duration::milliseconds(42);

        Record {
            severity,
            name: "test",
            message,
            time,
            detail: None
        }
    }

    #[test]
    fn file_layout() {
        let line = FORMATS.file.render(&record(Severity::Warning, "low disk"));

        assert_eq!("WARNING:    2024/Mar/05 14:07:09 - test - low disk", line);
    }

    #[test]
    fn console_layout_without_color() {
        let line = FORMATS.console.render(&record(Severity::Info, "ready"), false);

        assert_eq!("INFO:    [2024/Mar/05 14:07:09,042] - {test} @ ready", line);
    }

    #[test]
    fn console_paints_level_and_message() {
        let line = FORMATS.console.render(&record(Severity::Warning, "low disk"), true);

        assert!(line.starts_with("\x1b[33mWARNING\x1b[0m:    [2024/Mar/05 14:07:09,"));
        assert!(line.ends_with("\x1b[33mlow disk\x1b[0m"));
    }

    #[test]
    fn millis_are_dimmed() {
        let line = FORMATS.console.render(&record(Severity::Debug, "tick"), true);

        assert!(line.contains(",\x1b[1;38;5;8m042\x1b[0m]"));
        assert!(line.contains("{\x1b[38;2;235;9;220mtest\x1b[0m}"));
    }

    #[test]
    fn critical_is_bold_red() {
        let line = FORMATS.console.render(&record(Severity::Critical, "down"), true);

        assert!(line.starts_with("\x1b[1;31mCRITICAL\x1b[0m"));
    }

    #[test]
    fn detail_follows_the_line() {
        let rec = record(Severity::Error, "unknown error").with_detail("division by zero\n");
        let text = FORMATS.file.render(&rec);

        assert_eq!(
            "ERROR:    2024/Mar/05 14:07:09 - test - unknown error\nTraceback:\ndivision by zero",
            text
        );
    }
}
