use std::convert::From;
use std::error;
use std::fmt;
use std::io;
use std::num::ParseIntError;
use std::result;

pub type Result<T> = result::Result<T, Error>;

#[derive(Debug)]
pub struct Error {
    pub kind: ErrorKind,
    pub message: Option<String>,
}

#[derive(Debug)]
pub enum ErrorKind {
    ConfigParse,
    ConfigNotFound,
    MonthParse,
    CommandParse,
    UnknownDay,
    IOError(io::Error),
}

impl Error {
    pub fn new(kind: ErrorKind, msg: &str) -> Self {
        Error {
            kind,
            message: Some(msg.to_owned()),
        }
    }

    pub fn with_msg(mut self, message: &str) -> Self {
        self.message = Some(message.to_owned());
        self
    }
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Error {
        Error {
            kind,
            message: None,
        }
    }
}

impl From<io::Error> for Error {
    fn from(io_error: io::Error) -> Error {
        Error::from(ErrorKind::IOError(io_error))
    }
}

impl From<toml::de::Error> for Error {
    fn from(toml_error: toml::de::Error) -> Error {
        Error::new(ErrorKind::ConfigParse, &toml_error.to_string())
    }
}

impl From<ParseIntError> for Error {
    fn from(int_error: ParseIntError) -> Error {
        Error::new(
            ErrorKind::CommandParse,
            &format!("Could not parse number: {}", int_error),
        )
    }
}

impl<E: fmt::Debug> From<nom::Err<E>> for Error {
    fn from(error: nom::Err<E>) -> Self {
        Error::new(
            ErrorKind::CommandParse,
            &format!("Error while parsing: {}", error),
        )
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.message {
            Some(msg) => write!(f, "{}: {}", self.kind.as_str(), msg),
            None => write!(f, "{}", self.kind.as_str()),
        }
    }
}

impl error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match &self.kind {
            ErrorKind::IOError(err) => Some(err),
            _ => None,
        }
    }
}

impl ErrorKind {
    pub fn as_str(&self) -> String {
        match self {
            ErrorKind::ConfigParse => "invalid config file".to_owned(),
            ErrorKind::ConfigNotFound => "config file not found".to_owned(),
            ErrorKind::MonthParse => "invalid month format".to_owned(),
            ErrorKind::CommandParse => "invalid command".to_owned(),
            ErrorKind::UnknownDay => "no such day in the displayed month".to_owned(),
            ErrorKind::IOError(err) => err.to_string(),
        }
    }
}
