use std::fmt::Display;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    IO,
    Config,
    Parse
}

#[derive(Debug)]
pub struct Error {
    kind: ErrorKind,
    message: String
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::error::Error for Error {

}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let kind_human = match self.kind {
            ErrorKind::IO => "I/O",
            ErrorKind::Config => "configuring logger",
            ErrorKind::Parse => "parsing"
        };

        write!(f, "Error occurred when {}: {}", kind_human, self.message)
    }
}

pub fn io_err<S: ToString>(message: S) -> Error {
    Error {
        kind: ErrorKind::IO,
        message: message.to_string()
    }
}

pub fn config_err<S: ToString>(message: S) -> Error {
    Error {
        kind: ErrorKind::Config,
        message: message.to_string()
    }
}

pub fn parse_err<S: ToString>(message: S) -> Error {
    Error {
        kind: ErrorKind::Parse,
        message: message.to_string()
    }
}

pub trait AsResult<T> {
    /// Wraps the underlying error as an I/O error, prefixed with `context`.
    fn as_io_err<S: ToString>(self, context: S) -> Result<T>;
}

impl <T, E: Display> AsResult<T> for std::result::Result<T, E> {
    fn as_io_err<S: ToString>(self, context: S) -> Result<T> {
        self.map_err(| err | io_err(format!("{}: {}", context.to_string(), err)))
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        io_err(err)
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error {
            kind: ErrorKind::Parse,
            message: err.to_string()
        }
    }
}
